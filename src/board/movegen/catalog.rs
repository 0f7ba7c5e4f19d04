use tracing::debug;

use crate::board::{Board, Geometry, RulesError};
use crate::core::*;

use super::{MoveList, extend_chains, jumps_from};

/// Builds the complete list of legal moves of `player`.
///
/// Captures are forced for the whole side: if any stack of `player` can capture, only
/// the maximal capture chains are legal. Otherwise every slide is.
pub fn moves_for<G: Geometry>(
    board: &Board,
    geometry: &G,
    player: Player,
) -> Result<MoveList, RulesError> {
    board.check(geometry)?;

    let mut captures = Vec::new();
    let mut slides = Vec::new();

    for cell in board.controlled_by(player) {
        for mv in jumps_from(board, geometry, cell)? {
            if mv.is_capture() {
                captures.push(mv);
            } else {
                slides.push(mv);
            }
        }
    }

    let list = if captures.is_empty() {
        MoveList::from_moves(slides)
    } else {
        MoveList::from_moves(extend_chains(board, geometry, &captures, player)?)
    };

    debug!(
        player = %player,
        moves = list.len(),
        captures = list.has_captures(),
        "move catalog built"
    );

    Ok(list)
}
