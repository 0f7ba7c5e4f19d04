use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::Player;

/******************************************\
|==========================================|
|                   Rank                   |
|==========================================|
\******************************************/

/// # Rank representation
///
/// - The promotion tier of a piece. Soldiers only move toward the opponent, officers move both ways

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    Soldier, Officer,
}

impl Rank {
    /// Number of elements in the Rank enum
    pub const NUM: usize = 2;
}

crate::impl_from_to_primitive!(Rank);
crate::impl_enum_iter!(Rank);

/******************************************\
|==========================================|
|                  Piece                   |
|==========================================|
\******************************************/

/// # Piece representation
///
/// - An owner and a rank. Pieces are replaced, never mutated, on promotion

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub owner: Player,
    pub rank: Rank,
}

impl Piece {
    /// Combines a player and rank pair to create a piece
    pub const fn new(owner: Player, rank: Rank) -> Self {
        Self { owner, rank }
    }

    /// A soldier belonging to `owner`
    pub const fn soldier(owner: Player) -> Self {
        Self::new(owner, Rank::Soldier)
    }

    /// An officer belonging to `owner`
    pub const fn officer(owner: Player) -> Self {
        Self::new(owner, Rank::Officer)
    }

    /// Returns true if the piece has not been promoted yet
    pub const fn is_soldier(self) -> bool {
        matches!(self.rank, Rank::Soldier)
    }

    /// Returns the promoted form of this piece
    pub const fn promoted(self) -> Self {
        Self::officer(self.owner)
    }
}

/******************************************\
|==========================================|
|                 Display                  |
|==========================================|
\******************************************/

/// Notation characters indexed by `owner * 2 + rank`
const PIECE_STR: &str = "wWbB";

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let index = self.owner.index() * 2 + self.rank.index();
        let piece_char = PIECE_STR.as_bytes()[index] as char;
        write!(f, "{}", piece_char)
    }
}

/******************************************\
|==========================================|
|                Parse Piece               |
|==========================================|
\******************************************/

impl TryFrom<char> for Piece {
    type Error = ParsePieceError;

    /// Parse a notation character (`w`, `W`, `b`, `B`) into a piece
    fn try_from(piece_char: char) -> Result<Self, Self::Error> {
        let index = PIECE_STR
            .chars()
            .position(|c| c == piece_char)
            .ok_or(ParsePieceError::InvalidChar(piece_char))? as u8;

        let owner = unsafe { Player::from_unchecked(index >> 1) };
        let rank = unsafe { Rank::from_unchecked(index & 1) };

        Ok(Piece::new(owner, rank))
    }
}

impl std::str::FromStr for Piece {
    type Err = ParsePieceError;

    /// Parse the piece character into a piece, with error checkings
    ///
    /// ## Examples
    ///
    /// ```
    /// use lasca::core::{Piece, Player, ParsePieceError};
    ///
    /// assert_eq!("W".parse::<Piece>().unwrap(), Piece::officer(Player::One));
    /// assert!(matches!("x".parse::<Piece>(), Err(ParsePieceError::InvalidChar('x'))));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Piece::try_from(c),
            _ => Err(ParsePieceError::InvalidLength(s.chars().count())),
        }
    }
}

/******************************************\
|==========================================|
|            Piece Parse Error             |
|==========================================|
\******************************************/

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParsePieceError {
    #[error("Invalid length for piece string: {0}, expected 1")]
    InvalidLength(usize),
    #[error("Invalid character for piece string: '{0}', expected one of 'w', 'W', 'b', 'B'")]
    InvalidChar(char),
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
