use tracing::info;

use crate::board::{Board, Geometry, RulesError, moves_for};
use crate::core::*;

/// Counts the leaf positions `depth` moves ahead of `board` with `side` to move
pub fn perft<G: Geometry>(
    board: &Board,
    geometry: &G,
    side: Player,
    depth: usize,
) -> Result<usize, RulesError> {
    if depth == 0 {
        return Ok(1);
    }

    let move_list = moves_for(board, geometry, side)?;

    if depth == 1 {
        return Ok(move_list.len());
    }

    let mut nodes = 0;

    for move_ in move_list.iter() {
        let mut next = board.clone();
        next.apply(geometry, move_)?;
        nodes += perft(&next, geometry, !side, depth - 1)?;
    }

    Ok(nodes)
}

/// Like [`perft`], but reports the count below each root move
pub fn perft_divide<G: Geometry>(
    board: &Board,
    geometry: &G,
    side: Player,
    depth: usize,
) -> Result<Vec<(Move, usize)>, RulesError> {
    let move_list = moves_for(board, geometry, side)?;
    let mut divided = Vec::with_capacity(move_list.len());
    let mut total_nodes = 0;

    for move_ in move_list {
        let mut next = board.clone();
        next.apply(geometry, &move_)?;
        let nodes = perft(&next, geometry, !side, depth.saturating_sub(1))?;
        total_nodes += nodes;

        info!("{move_}: {nodes}");
        divided.push((move_, nodes));
    }

    info!("Total nodes: {total_nodes}");

    Ok(divided)
}
