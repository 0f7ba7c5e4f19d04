use std::collections::VecDeque;

use tracing::trace;

use crate::board::{Board, Geometry, RulesError};
use crate::core::*;

use super::jumps_from;

/// A capture chain under construction.
///
/// `board` is the position before the last hop of `chain` was made.
struct Branch {
    chain: Move,
    board: Board,
}

/// Extends single capture hops into maximal capture chains.
///
/// The search runs breadth first over a worklist of branches, each owning its own
/// board clone. A branch ends when its last hop promotes the mover, when no further
/// capture is possible, or when the only way on would jump back over the cell just
/// captured. Only single hop captures among `seeds` are searched from; slides and longer
/// chains are ignored.
///
/// The result is deduplicated and no entry is a hop-wise prefix of another.
pub fn extend_chains<G: Geometry>(
    board: &Board,
    geometry: &G,
    seeds: &[Move],
    player: Player,
) -> Result<Vec<Move>, RulesError> {
    let mut queue = VecDeque::with_capacity(seeds.len());

    for seed in seeds.iter().filter(|seed| seed.is_capture()) {
        match seed.hops() {
            0 => return Err(RulesError::ShortChain),
            1 => {}
            _ => continue,
        }

        let from = seed.from();
        match board.owner(from) {
            None => return Err(RulesError::EmptyCell(from)),
            Some(owner) if owner != player => {
                return Err(RulesError::NotOwned { cell: from, player });
            }
            Some(_) => {}
        }

        queue.push_back(Branch {
            chain: seed.clone(),
            board: board.clone(),
        });
    }

    let mut finished = Vec::new();

    while let Some(Branch { chain, mut board }) = queue.pop_front() {
        let (from, last) = chain.last_hop();
        let hop = board.hop(geometry, from, last, Step::Capture)?;

        if hop.promoted {
            trace!(chain = %chain, "chain ends on promotion");
            finished.push(chain);
            continue;
        }

        let further: Vec<Move> = jumps_from(&board, geometry, last)?
            .into_iter()
            .filter(Move::is_capture)
            .collect();

        if further.is_empty() {
            trace!(chain = %chain, "chain ends, no capture left");
            finished.push(chain);
            continue;
        }

        let mut terminal = false;

        for next in further {
            let Some(longer) = chain.extended(next.to()) else {
                continue;
            };

            let reverses = longer.previous_hop().is_some_and(|(prev, _)| {
                geometry.between(prev, last) == geometry.between(last, longer.to())
            });

            if reverses {
                terminal = true;
                continue;
            }

            queue.push_back(Branch {
                chain: longer,
                board: board.clone(),
            });
        }

        trace!(chain = %chain, queued = queue.len(), terminal, "chain extended");

        if terminal {
            finished.push(chain);
        }
    }

    Ok(maximal(finished))
}

/// Drops duplicates and every chain that another chain continues
fn maximal(mut chains: Vec<Move>) -> Vec<Move> {
    chains.sort_by_key(Move::hops);
    chains.dedup();

    let mut kept: Vec<Move> = Vec::with_capacity(chains.len());
    for (i, chain) in chains.iter().enumerate() {
        if kept.contains(chain) {
            continue;
        }
        if chains[i + 1..].iter().any(|other| chain.is_proper_prefix_of(other)) {
            continue;
        }
        kept.push(chain.clone());
    }

    kept
}
