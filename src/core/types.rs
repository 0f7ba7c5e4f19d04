use serde::{Deserialize, Serialize};
use thiserror::Error;

/******************************************\
|==========================================|
|                 Players                  |
|==========================================|
\******************************************/

/// # Player Representation
///
/// Represents the two sides of the game. `One` starts on the low rows and
/// advances toward the high rows, `Two` the other way round.

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Number of elements in the Player enum
    pub const NUM: usize = 2;
}

crate::impl_from_to_primitive!(Player);
crate::impl_enum_iter!(Player);

/******************************************\
|==========================================|
|                Directions                |
|==========================================|
\******************************************/

/// # Direction Representation
///
/// The four diagonal directions of a checkerboard. North is toward higher rows, east toward
/// higher files.

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    NE, NW, SE, SW,
}

impl Direction {
    /// Number of elements in the Direction enum
    pub const NUM: usize = 4;

    /// Every diagonal direction
    pub const ALL: [Direction; 4] = [Direction::NE, Direction::NW, Direction::SE, Direction::SW];

    /// Directions toward the high rows
    pub const NORTH: [Direction; 2] = [Direction::NE, Direction::NW];

    /// Directions toward the low rows
    pub const SOUTH: [Direction; 2] = [Direction::SE, Direction::SW];
}

crate::impl_from_to_primitive!(Direction);
crate::impl_enum_iter!(Direction);

/******************************************\
|==========================================|
|              Implementation              |
|==========================================|
\******************************************/

impl Player {
    /// Returns the directions a soldier of this player may move in
    pub const fn forward(&self) -> &'static [Direction] {
        match self {
            Player::One => &Direction::NORTH,
            Player::Two => &Direction::SOUTH,
        }
    }
}

impl std::ops::Not for Player {
    type Output = Self;

    /// Returns the opponent
    fn not(self) -> Self::Output {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

impl Direction {
    /// File and row step of one move in this direction
    #[inline]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::NE => (1, 1),
            Direction::NW => (-1, 1),
            Direction::SE => (1, -1),
            Direction::SW => (-1, -1),
        }
    }

    /// Try to get the diagonal direction leading from a file and row step
    pub const fn from_delta(file_step: i8, row_step: i8) -> Option<Self> {
        match (file_step.signum(), row_step.signum()) {
            (1, 1) => Some(Direction::NE),
            (-1, 1) => Some(Direction::NW),
            (1, -1) => Some(Direction::SE),
            (-1, -1) => Some(Direction::SW),
            _ => None,
        }
    }
}

/******************************************\
|==========================================|
|                 Display                  |
|==========================================|
\******************************************/

impl std::fmt::Display for Player {
    /// Displays the player as `1` or `2`
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.index() + 1)
    }
}

impl std::str::FromStr for Player {
    type Err = ParsePlayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(Player::One),
            "2" => Ok(Player::Two),
            _ => Err(ParsePlayerError(s.to_string())),
        }
    }
}

/******************************************\
|==========================================|
|           Player Parse Errors            |
|==========================================|
\******************************************/

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid player string: '{0}', expected '1' or '2'")]
pub struct ParsePlayerError(pub String);

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(!Player::One, Player::Two);
        assert_eq!(!Player::Two, Player::One);
    }

    #[test]
    fn test_forward_directions() {
        assert_eq!(Player::One.forward(), &[Direction::NE, Direction::NW]);
        assert_eq!(Player::Two.forward(), &[Direction::SE, Direction::SW]);
    }

    #[test]
    fn test_delta_round_trip() {
        for dir in Direction::iter() {
            let (df, dr) = dir.delta();
            assert_eq!(Direction::from_delta(df, dr), Some(dir));
        }
    }

    #[test]
    fn test_direction_from_delta() {
        assert_eq!(Direction::from_delta(2, 2), Some(Direction::NE));
        assert_eq!(Direction::from_delta(-1, 3), Some(Direction::NW));
        assert_eq!(Direction::from_delta(1, -1), Some(Direction::SE));
        assert_eq!(Direction::from_delta(-4, -4), Some(Direction::SW));
        assert_eq!(Direction::from_delta(0, 1), None);
        assert_eq!(Direction::from_delta(1, 0), None);
    }

    #[test]
    fn test_player_parse() {
        assert_eq!("1".parse::<Player>(), Ok(Player::One));
        assert_eq!("2".parse::<Player>(), Ok(Player::Two));
        assert!("3".parse::<Player>().is_err());
        assert_eq!(Player::Two.to_string(), "2");
    }
}
