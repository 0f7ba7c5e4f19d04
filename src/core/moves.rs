use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use crate::core::{Cell, ParseCellError};

/// Cells visited by a move, origin first
pub type Path = SmallVec<[Cell; 8]>;

/******************************************\
|==========================================|
|                  Steps                   |
|==========================================|
\******************************************/

/// # Step representation
///
/// - The separator of a move token: `-` for a slide, `x` for a capture hop

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Slide,
    Capture,
}

impl Step {
    pub const fn symbol(self) -> char {
        match self {
            Step::Slide => '-',
            Step::Capture => 'x',
        }
    }

    const fn from_symbol(c: char) -> Option<Self> {
        match c {
            '-' => Some(Step::Slide),
            'x' => Some(Step::Capture),
            _ => None,
        }
    }
}

/******************************************\
|==========================================|
|                  Moves                   |
|==========================================|
\******************************************/

/// # Move representation
///
/// - `Slide`: a single step onto an adjacent empty cell (`c3-d4`)
/// - `Capture`: one or more jumps, the path holding the origin followed by every landing cell
///   (`c1xa3xc5`)
///
/// Captured cells are not stored; they are re-derived from the hop geometry when the move is
/// applied.
/// A capture path holds at least two cells. Parsing guarantees it; the rules entry points
/// refuse shorter paths with [`RulesError::ShortChain`](crate::board::RulesError::ShortChain).

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Move {
    Slide { from: Cell, to: Cell },
    Capture(Path),
}

impl Move {
    /// A single capture hop
    pub fn jump(from: Cell, to: Cell) -> Self {
        let mut path = Path::new();
        path.push(from);
        path.push(to);
        Move::Capture(path)
    }

    /// The cell the moving stack starts on
    #[inline]
    pub fn from(&self) -> Cell {
        match self {
            Move::Slide { from, .. } => *from,
            Move::Capture(path) => path[0],
        }
    }

    /// The cell the moving stack ends on
    #[inline]
    pub fn to(&self) -> Cell {
        match self {
            Move::Slide { to, .. } => *to,
            Move::Capture(path) => path[path.len() - 1],
        }
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        matches!(self, Move::Capture(_))
    }

    #[inline]
    pub fn step(&self) -> Step {
        match self {
            Move::Slide { .. } => Step::Slide,
            Move::Capture(_) => Step::Capture,
        }
    }

    /// Number of hops (one for a slide)
    #[inline]
    pub fn hops(&self) -> usize {
        match self {
            Move::Slide { .. } => 1,
            Move::Capture(path) => path.len().saturating_sub(1),
        }
    }

    /// Every visited cell, origin first
    pub fn cells(&self) -> Path {
        match self {
            Move::Slide { from, to } => {
                let mut path = Path::new();
                path.push(*from);
                path.push(*to);
                path
            }
            Move::Capture(path) => path.clone(),
        }
    }

    /// The last hop as a `(from, to)` pair
    pub fn last_hop(&self) -> (Cell, Cell) {
        match self {
            Move::Slide { from, to } => (*from, *to),
            Move::Capture(path) => (path[path.len() - 2], path[path.len() - 1]),
        }
    }

    /// The hop before the last one, if the chain has one
    pub fn previous_hop(&self) -> Option<(Cell, Cell)> {
        match self {
            Move::Capture(path) if path.len() >= 3 => {
                Some((path[path.len() - 3], path[path.len() - 2]))
            }
            _ => None,
        }
    }

    /// Returns this capture chain continued by one more hop landing on `to`
    pub fn extended(&self, to: Cell) -> Option<Move> {
        match self {
            Move::Capture(path) => {
                let mut path = path.clone();
                path.push(to);
                Some(Move::Capture(path))
            }
            Move::Slide { .. } => None,
        }
    }

    /// Returns true if `self` is a capture chain that `other` continues by at least one hop
    pub fn is_proper_prefix_of(&self, other: &Move) -> bool {
        match (self, other) {
            (Move::Capture(short), Move::Capture(long)) => {
                short.len() < long.len() && long.starts_with(short)
            }
            _ => false,
        }
    }
}

impl std::fmt::Display for Move {
    /// Displays the move in token form (`c3-d4`, `c1xa3xc5`)
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Slide { from, to } => write!(f, "{}-{}", from, to),
            Move::Capture(path) => {
                for (i, cell) in path.iter().enumerate() {
                    if i > 0 {
                        write!(f, "x")?;
                    }
                    write!(f, "{}", cell)?;
                }
                Ok(())
            }
        }
    }
}

impl From<Move> for String {
    fn from(mv: Move) -> Self {
        mv.to_string()
    }
}

impl TryFrom<String> for Move {
    type Error = MoveParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/******************************************\
|==========================================|
|               Move Tokens                |
|==========================================|
\******************************************/

/// # Token representation
///
/// - A possibly unfinished move as typed or clicked: a start cell and zero or more hops
/// - `step` is `None` while only the start cell has been given

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub cells: Path,
    pub step: Option<Step>,
}

impl Token {
    /// Returns true if the token is equal to, or a hop-wise prefix of, `mv`
    pub fn is_prefix_of(&self, mv: &Move) -> bool {
        if let Some(step) = self.step {
            if step != mv.step() {
                return false;
            }
        }
        mv.cells().starts_with(&self.cells)
    }

    /// Returns true if the token spells exactly `mv`
    pub fn matches(&self, mv: &Move) -> bool {
        self.step == Some(mv.step()) && mv.cells().as_slice() == self.cells.as_slice()
    }
}

impl std::str::FromStr for Token {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Path::new();
        let mut step: Option<Step> = None;
        let mut rest = s.trim();

        if rest.is_empty() {
            return Err(MoveParseError::Empty);
        }

        loop {
            let end = rest
                .find(|c| Step::from_symbol(c).is_some())
                .unwrap_or(rest.len());
            let (segment, tail) = rest.split_at(end);

            if segment.is_empty() {
                return Err(MoveParseError::MissingCell(s.to_string()));
            }
            cells.push(segment.parse::<Cell>()?);

            let mut tail_chars = tail.chars();
            let Some(next_step) = tail_chars.next().and_then(Step::from_symbol) else {
                break;
            };

            match step {
                Some(existing) if existing != next_step => {
                    return Err(MoveParseError::MixedSeparators(s.to_string()));
                }
                _ => step = Some(next_step),
            }
            rest = tail_chars.as_str();
        }

        if step == Some(Step::Slide) && cells.len() > 2 {
            return Err(MoveParseError::SlideTooLong(s.to_string()));
        }

        Ok(Token { cells, step })
    }
}

impl std::str::FromStr for Move {
    type Err = MoveParseError;

    /// Parses a complete move token
    ///
    /// ## Examples
    ///
    /// ```
    /// use lasca::core::Move;
    ///
    /// let mv: Move = "c1xa3xc5".parse().unwrap();
    /// assert_eq!(mv.hops(), 2);
    /// assert!("c1".parse::<Move>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token: Token = s.parse()?;
        match token.step {
            None => Err(MoveParseError::Unfinished(s.to_string())),
            Some(Step::Slide) => Ok(Move::Slide {
                from: token.cells[0],
                to: token.cells[1],
            }),
            Some(Step::Capture) => Ok(Move::Capture(token.cells)),
        }
    }
}

/******************************************\
|==========================================|
|            Move Parse Errors             |
|==========================================|
\******************************************/

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    #[error("Empty move string")]
    Empty,
    #[error("Missing cell in move string: '{0}'")]
    MissingCell(String),
    #[error("Move string mixes '-' and 'x': '{0}'")]
    MixedSeparators(String),
    #[error("A slide has exactly one step: '{0}'")]
    SlideTooLong(String),
    #[error("Move string has no hop: '{0}'")]
    Unfinished(String),
    #[error(transparent)]
    Cell(#[from] ParseCellError),
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
