//! Error types of the rules engine.
//!
//! [`RulesError`] signals a broken precondition or an inconsistent board: a programming
//! error on the caller's side, never a bad move typed by a player. Bad moves are
//! reported as [`InvalidMove`] values inside a [`Validation`](super::Validation).

use thiserror::Error;

use crate::core::*;

/******************************************\
|==========================================|
|               Rules Errors               |
|==========================================|
\******************************************/

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    #[error("Cell {0} is empty")]
    EmptyCell(Cell),
    #[error("Cell {0} is not a playable cell of this board")]
    OffBoard(Cell),
    #[error("Cell {cell} is not controlled by player {player}")]
    NotOwned { cell: Cell, player: Player },
    #[error("Cell {0} is already occupied")]
    Occupied(Cell),
    #[error("{from} to {to} is not a legal hop")]
    IllegalHop { from: Cell, to: Cell },
    #[error("A capture chain must visit at least two cells")]
    ShortChain,
}

/******************************************\
|==========================================|
|              Invalid Moves               |
|==========================================|
\******************************************/

/// Why a candidate move was refused. The message is a plain English default; callers translate it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidMove {
    #[error("The move could not be read: {0}")]
    Malformed(#[from] MoveParseError),
    #[error("{0} is not a cell of this board")]
    UnknownCell(Cell),
    #[error("There is no piece on {0}")]
    EmptyStart(Cell),
    #[error("The piece on {0} belongs to the opponent")]
    NotYourPiece(Cell),
    #[error("A capture is available, so a capture must be made")]
    CaptureRequired,
    #[error("{0} is occupied")]
    Occupied(Cell),
    #[error("You cannot capture your own piece on {0}")]
    OwnPiece(Cell),
    #[error("There is nothing to capture between {from} and {to}")]
    NothingToCapture { from: Cell, to: Cell },
    #[error("{to} cannot be reached from {from}")]
    Unreachable { from: Cell, to: Cell },
    #[error("{0} is not a legal move in this position")]
    NotInCatalog(String),
}
