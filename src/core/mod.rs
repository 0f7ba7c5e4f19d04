// Core module exports

pub mod macros;

// Value type submodules
pub mod cell;
pub mod moves;
pub mod piece;
pub mod stack;
pub mod types;

// Re-export common types for easier access
pub use cell::{Cell, ParseCellError};
pub use moves::{Move, MoveParseError, Path, Step, Token};
pub use piece::{ParsePieceError, Piece, Rank};
pub use stack::{Stack, StackError};
pub use types::{Direction, ParsePlayerError, Player};
