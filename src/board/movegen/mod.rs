//! # Module: `movegen`
//!
//! Generates the legal moves of one player on a board. Generation happens in three layers:
//!
//! - **`jumps`**: the slides and single capture hops of one stack.
//! - **`chains`**: breadth-first extension of single hops into maximal capture chains.
//! - **`catalog`**: the full sorted move list of a player, with forced captures.
//!
//! Every layer is pure. The chain search clones the board for each branch and never
//! touches the caller's board.

mod catalog;
mod chains;
mod jumps;
mod move_list;

pub use catalog::moves_for;
pub use chains::extend_chains;
pub use jumps::jumps_from;
pub use move_list::MoveList;

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
