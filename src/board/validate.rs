//! # Module: `validate`
//!
//! Checks a move as it is being entered, one cell at a time, against the legal moves of
//! the position. A candidate is complete when it spells a legal move, incomplete when it
//! is the start of one or more legal moves, and invalid otherwise. For invalid candidates
//! the first structural problem found is reported so a front end can explain it.
//!
//! Validation is stateless: the move list is rebuilt on every call.

use super::{Board, Geometry, InvalidMove, MoveList, RulesError, moves_for};
use crate::core::*;

/// Outcome of validating a candidate move
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    /// The candidate is a legal move
    Complete(Move),
    /// The candidate starts one or more legal moves; `next` holds the cells that may follow
    Incomplete { next: Vec<Cell> },
    /// The candidate cannot become a legal move
    Invalid(InvalidMove),
}

impl Validation {
    #[inline]
    pub fn is_complete(&self) -> bool {
        matches!(self, Validation::Complete(_))
    }

    #[inline]
    pub fn is_invalid(&self) -> bool {
        matches!(self, Validation::Invalid(_))
    }
}

/// Validates `candidate` as a move of `player`.
///
/// The empty candidate is incomplete and hints every cell a legal move starts from.
/// Only broken preconditions (an inconsistent board) are returned as errors.
pub fn validate<G: Geometry>(
    board: &Board,
    geometry: &G,
    player: Player,
    candidate: &str,
) -> Result<Validation, RulesError> {
    let catalog = moves_for(board, geometry, player)?;
    let candidate = candidate.trim();

    if candidate.is_empty() {
        let next = sorted(catalog.iter().map(Move::from));
        return Ok(Validation::Incomplete { next });
    }

    let token: Token = match candidate.parse() {
        Ok(token) => token,
        Err(err) => return Ok(Validation::Invalid(InvalidMove::Malformed(err))),
    };

    if let Some(exact) = catalog.iter().find(|mv| token.matches(mv)) {
        return Ok(Validation::Complete(exact.clone()));
    }

    let depth = token.cells.len();
    let next = sorted(
        catalog
            .iter()
            .filter(|mv| token.is_prefix_of(mv))
            .filter_map(|mv| mv.cells().get(depth).copied()),
    );

    if !next.is_empty() {
        return Ok(Validation::Incomplete { next });
    }

    Ok(Validation::Invalid(diagnose(
        board, geometry, player, &catalog, &token, candidate,
    )))
}

/// Finds the first reason why `token` is not the start of a legal move
fn diagnose<G: Geometry>(
    board: &Board,
    geometry: &G,
    player: Player,
    catalog: &MoveList,
    token: &Token,
    candidate: &str,
) -> InvalidMove {
    if let Some(&unknown) = token.cells.iter().find(|cell| !geometry.contains(**cell)) {
        return InvalidMove::UnknownCell(unknown);
    }

    let start = token.cells[0];
    match board.owner(start) {
        None => return InvalidMove::EmptyStart(start),
        Some(owner) if owner != player => return InvalidMove::NotYourPiece(start),
        Some(_) => {}
    }

    if catalog.has_captures() && token.step != Some(Step::Capture) {
        return InvalidMove::CaptureRequired;
    }

    let Some(step) = token.step else {
        return InvalidMove::NotInCatalog(candidate.to_string());
    };

    let mut scratch = board.clone();

    for hop in token.cells.windows(2) {
        let (from, to) = (hop[0], hop[1]);

        if !scratch.is_empty(to) {
            return InvalidMove::Occupied(to);
        }

        if step == Step::Capture {
            let Some(over) = geometry.between(from, to) else {
                return InvalidMove::Unreachable { from, to };
            };
            match scratch.owner(over) {
                None => return InvalidMove::NothingToCapture { from, to },
                Some(owner) if owner == player => return InvalidMove::OwnPiece(over),
                Some(_) => {}
            }
        }

        if scratch.hop(geometry, from, to, step).is_err() {
            return InvalidMove::Unreachable { from, to };
        }
    }

    InvalidMove::NotInCatalog(candidate.to_string())
}

fn sorted(cells: impl Iterator<Item = Cell>) -> Vec<Cell> {
    let mut cells: Vec<Cell> = cells.collect();
    cells.sort();
    cells.dedup();
    cells
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
