use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use crate::core::{Piece, Player};

/// Inline capacity of a stack before it spills to the heap
const INLINE_PIECES: usize = 6;

/******************************************\
|==========================================|
|                  Stack                   |
|==========================================|
\******************************************/

/// # Stack representation
///
/// - The pieces occupying one cell, bottom first. The last piece is the top and controls the stack
/// - A stack is never empty; an empty cell has no stack at all

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Vec<Piece>", try_from = "Vec<Piece>")]
pub struct Stack(SmallVec<[Piece; INLINE_PIECES]>);

impl Stack {
    /// A stack holding a single piece
    pub fn single(piece: Piece) -> Self {
        let mut pieces = SmallVec::new();
        pieces.push(piece);
        Self(pieces)
    }

    /// Builds a stack from pieces listed bottom to top
    pub fn from_pieces(pieces: impl IntoIterator<Item = Piece>) -> Result<Self, StackError> {
        let pieces: SmallVec<[Piece; INLINE_PIECES]> = pieces.into_iter().collect();
        if pieces.is_empty() {
            return Err(StackError::Empty);
        }
        Ok(Self(pieces))
    }

    /// The visible, controlling piece
    #[inline]
    pub fn top(&self) -> Piece {
        // Non-empty by construction
        self.0[self.0.len() - 1]
    }

    /// The owner of the top piece
    #[inline]
    pub fn owner(&self) -> Player {
        self.top().owner
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Pieces bottom to top
    #[inline]
    pub fn pieces(&self) -> &[Piece] {
        &self.0
    }

    /// Removes the top piece, returning it together with whatever remains below
    pub fn split_top(mut self) -> (Piece, Option<Stack>) {
        let top = self.top();
        self.0.pop();
        let rest = if self.0.is_empty() { None } else { Some(self) };
        (top, rest)
    }

    /// Places a captured piece underneath the stack
    pub fn push_bottom(&mut self, piece: Piece) {
        self.0.insert(0, piece);
    }

    /// Replaces the top piece
    pub fn replace_top(&mut self, piece: Piece) {
        let last = self.0.len() - 1;
        self.0[last] = piece;
    }
}

impl From<Stack> for Vec<Piece> {
    fn from(stack: Stack) -> Self {
        stack.0.into_vec()
    }
}

impl TryFrom<Vec<Piece>> for Stack {
    type Error = StackError;

    fn try_from(pieces: Vec<Piece>) -> Result<Self, Self::Error> {
        Stack::from_pieces(pieces)
    }
}

/******************************************\
|==========================================|
|                 Display                  |
|==========================================|
\******************************************/

impl std::fmt::Display for Stack {
    /// Single pieces print as their character, taller stacks bottom to top in parentheses
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.len() == 1 {
            return write!(f, "{}", self.top());
        }

        write!(f, "(")?;
        for piece in self.pieces() {
            write!(f, "{}", piece)?;
        }
        write!(f, ")")
    }
}

/******************************************\
|==========================================|
|               Stack Errors               |
|==========================================|
\******************************************/

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackError {
    #[error("A stack must hold at least one piece")]
    Empty,
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_stack_rejected() {
        assert_eq!(Stack::from_pieces(Vec::<Piece>::new()), Err(StackError::Empty));
        assert_eq!(Stack::try_from(Vec::new()), Err(StackError::Empty));
    }

    #[test]
    fn test_top_is_last_piece() {
        let (w, b) = (Piece::soldier(Player::One), Piece::officer(Player::Two));
        let stack = Stack::from_pieces([w, b]).unwrap();
        assert_eq!(stack.top(), Piece::officer(Player::Two));
        assert_eq!(stack.owner(), Player::Two);
        assert_eq!(stack.to_string(), "(wB)");
    }

    #[test]
    fn test_split_top_and_push_bottom() {
        let (b, w) = (Piece::officer(Player::Two), Piece::soldier(Player::One));
        let stack = Stack::from_pieces([b, w]).unwrap();
        let (top, rest) = stack.split_top();
        assert_eq!(top, Piece::soldier(Player::One));
        let rest = rest.unwrap();
        assert_eq!(rest.pieces(), &[Piece::officer(Player::Two)]);

        let mut mover = Stack::single(Piece::soldier(Player::Two));
        mover.push_bottom(top);
        assert_eq!(mover.pieces(), &[Piece::soldier(Player::One), Piece::soldier(Player::Two)]);

        let (_, nothing) = Stack::single(Piece::soldier(Player::One)).split_top();
        assert!(nothing.is_none());
    }

    #[test]
    fn test_replace_top() {
        let (b, w) = (Piece::soldier(Player::Two), Piece::soldier(Player::One));
        let mut stack = Stack::from_pieces([b, w]).unwrap();
        stack.replace_top(Piece::officer(Player::One));
        assert_eq!(stack.to_string(), "(bW)");
    }
}
