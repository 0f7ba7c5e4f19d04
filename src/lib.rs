//! # Lasca
//!
//! A rules engine for stacking checkers on the dark squares of a rectangular board.
//! It generates the legal moves of a position, with forced and maximal multi-capture
//! chains, validates moves as they are entered and keeps the position stack of a game.

pub mod board;
pub mod config;
pub mod core;
pub mod game;
pub mod utils;

pub use board::{
    Board, CaptureMode, Checkerboard, Geometry, InvalidMove, MoveList, MoveRecord, RulesError,
    Validation, extend_chains, jumps_from, moves_for, validate,
};
pub use config::Variant;
pub use crate::core::*;
pub use game::{Game, GameError, GameState, Outcome};
