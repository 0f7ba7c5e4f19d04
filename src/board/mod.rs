pub mod errors;
pub mod geometry;
pub mod movegen;
pub mod movement;
pub mod notation;
pub mod validate;

pub use errors::{InvalidMove, RulesError};
pub use geometry::{CaptureMode, Checkerboard, Geometry, Ray};
pub use movegen::{MoveList, extend_chains, jumps_from, moves_for};
pub use movement::MoveRecord;
pub use notation::NotationError;
pub use validate::{Validation, validate};

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::*;

/******************************************\
|==========================================|
|                  Board                   |
|==========================================|
\******************************************/

/// # Board snapshot
///
/// - Maps each occupied cell to its stack; a cell missing from the map is empty
/// - Cloning is cheap: boards hold tens of stacks and short stacks are stored inline
/// - The board knows nothing about its shape; every rule query goes through a [`Geometry`]

#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    stacks: BTreeMap<Cell, Stack>,
}

/******************************************\
|==========================================|
|           Basic Implementation           |
|==========================================|
\******************************************/

impl Board {
    pub fn new() -> Board {
        Board::default()
    }

    /// The stack on `cell`, if any
    #[inline]
    pub fn on(&self, cell: Cell) -> Option<&Stack> {
        self.stacks.get(&cell)
    }

    /// The top piece on `cell`, if any
    #[inline]
    pub fn top(&self, cell: Cell) -> Option<Piece> {
        self.on(cell).map(Stack::top)
    }

    /// The player controlling `cell`, if any
    #[inline]
    pub fn owner(&self, cell: Cell) -> Option<Player> {
        self.on(cell).map(Stack::owner)
    }

    #[inline]
    pub fn is_empty(&self, cell: Cell) -> bool {
        !self.stacks.contains_key(&cell)
    }

    /// Puts `stack` on `cell`, returning whatever stood there before
    pub fn place(&mut self, cell: Cell, stack: Stack) -> Option<Stack> {
        self.stacks.insert(cell, stack)
    }

    /// Lifts the whole stack off `cell`
    pub fn take(&mut self, cell: Cell) -> Option<Stack> {
        self.stacks.remove(&cell)
    }

    /// Occupied cells with their stacks, ascending by cell
    pub fn iter(&self) -> impl Iterator<Item = (Cell, &Stack)> {
        self.stacks.iter().map(|(cell, stack)| (*cell, stack))
    }

    /// Cells whose top piece belongs to `player`, ascending
    pub fn controlled_by(&self, player: Player) -> impl Iterator<Item = Cell> + '_ {
        self.iter()
            .filter(move |(_, stack)| stack.owner() == player)
            .map(|(cell, _)| cell)
    }

    /// Number of occupied cells
    pub fn occupied(&self) -> usize {
        self.stacks.len()
    }

    /// Number of pieces of `player` on the board, including those buried in stacks
    pub fn pieces_of(&self, player: Player) -> usize {
        self.stacks
            .values()
            .flat_map(|stack| stack.pieces())
            .filter(|piece| piece.owner == player)
            .count()
    }

    /// Checks that every stack stands on a playable cell of `geometry`
    pub fn check<G: Geometry>(&self, geometry: &G) -> Result<(), RulesError> {
        match self.stacks.keys().find(|cell| !geometry.contains(**cell)) {
            Some(cell) => Err(RulesError::OffBoard(*cell)),
            None => Ok(()),
        }
    }
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
