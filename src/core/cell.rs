use serde::{Deserialize, Serialize};
use thiserror::Error;

/******************************************\
|==========================================|
|                  Cells                   |
|==========================================|
\******************************************/

/// # Cell representation
///
/// - Identifies one location of a board as a packed `(file, row)` index
/// - The low nibble holds the file, the high nibble the row, so boards up to 16x16 are supported
/// - Ordering is row-major: `a1 < b1 < ... < a2`

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Cell(u8);

impl Cell {
    /// Largest supported number of files or rows
    pub const MAX_DIM: u8 = 16;

    /// Combines a zero based file and row to create a cell
    ///
    /// ## Examples
    ///
    /// ```
    /// use lasca::core::Cell;
    ///
    /// let cell = Cell::new(2, 0).unwrap();
    /// assert_eq!(cell.to_string(), "c1");
    /// assert!(Cell::new(16, 0).is_none());
    /// ```
    #[inline]
    pub const fn new(file: u8, row: u8) -> Option<Self> {
        if file < Self::MAX_DIM && row < Self::MAX_DIM {
            Some(Cell((row << 4) | file))
        } else {
            None
        }
    }

    /// Returns the zero based file of the cell
    #[inline]
    pub const fn file(self) -> u8 {
        self.0 & 0x0F
    }

    /// Returns the zero based row of the cell
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 >> 4
    }

    /// Returns the packed index of the cell
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the cell offset by a signed file and row step, if it stays inside the index space
    #[inline]
    pub const fn offset(self, file_step: i8, row_step: i8) -> Option<Self> {
        let file = self.file() as i8 + file_step;
        let row = self.row() as i8 + row_step;
        if file < 0 || row < 0 {
            return None;
        }
        Cell::new(file as u8, row as u8)
    }

    /// Returns the absolute distance in the files of two cells
    #[inline]
    pub const fn file_dist(c1: Cell, c2: Cell) -> u8 {
        c1.file().abs_diff(c2.file())
    }

    /// Returns the absolute distance in the rows of two cells
    #[inline]
    pub const fn row_dist(c1: Cell, c2: Cell) -> u8 {
        c1.row().abs_diff(c2.row())
    }
}

/******************************************\
|==========================================|
|                 Display                  |
|==========================================|
\******************************************/

impl std::fmt::Display for Cell {
    /// Displays the cell in algebraic form (file 2, row 0 => 'c1')
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", (b'a' + self.file()) as char, self.row() + 1)
    }
}

impl From<Cell> for String {
    fn from(cell: Cell) -> Self {
        cell.to_string()
    }
}

/******************************************\
|==========================================|
|              Parsing Strings             |
|==========================================|
\******************************************/

impl std::str::FromStr for Cell {
    type Err = ParseCellError;

    /// Parses an algebraic cell such as `c1` or `a12`
    ///
    /// ## Examples
    ///
    /// ```
    /// use lasca::core::{Cell, ParseCellError};
    ///
    /// assert_eq!("c5".parse::<Cell>().unwrap(), Cell::new(2, 4).unwrap());
    /// assert!(matches!("z1".parse::<Cell>(), Err(ParseCellError::InvalidFileChar('z'))));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let file_char = chars.next().ok_or(ParseCellError::InvalidLength(0))?;

        if !('a'..='p').contains(&file_char) {
            return Err(ParseCellError::InvalidFileChar(file_char));
        }

        let row_str = chars.as_str();
        if row_str.is_empty() || row_str.len() > 2 {
            return Err(ParseCellError::InvalidLength(s.len()));
        }

        if let Some(bad) = row_str.chars().find(|c| !c.is_ascii_digit()) {
            return Err(ParseCellError::InvalidRowChar(bad));
        }

        let row = row_str
            .parse::<u8>()
            .map_err(|_| ParseCellError::InvalidRow(row_str.to_string()))?;

        if row == 0 || row > Cell::MAX_DIM || row_str.starts_with('0') {
            return Err(ParseCellError::InvalidRow(row_str.to_string()));
        }

        Cell::new(file_char as u8 - b'a', row - 1)
            .ok_or_else(|| ParseCellError::InvalidRow(row_str.to_string()))
    }
}

impl TryFrom<String> for Cell {
    type Error = ParseCellError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/******************************************\
|==========================================|
|             Cell Parse Errors            |
|==========================================|
\******************************************/

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseCellError {
    #[error("Invalid length for cell string: {0}, expected 2 or 3")]
    InvalidLength(usize),
    #[error("Invalid character for file: '{0}', expected 'a'-'p'")]
    InvalidFileChar(char),
    #[error("Invalid character for row: '{0}', expected a digit")]
    InvalidRowChar(char),
    #[error("Invalid row number: '{0}', expected 1-16")]
    InvalidRow(String),
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
    fn test_cell_parts() {
        let cell = Cell::new(3, 5).unwrap();
        assert_eq!(cell.file(), 3);
        assert_eq!(cell.row(), 5);
        assert_eq!(cell.to_string(), "d6");
    }

    #[test]
    fn test_cell_ordering_is_row_major() {
        let a1: Cell = "a1".parse().unwrap();
        let g1: Cell = "g1".parse().unwrap();
        let a2: Cell = "a2".parse().unwrap();
        assert!(a1 < g1);
        assert!(g1 < a2);
    }

    #[test]
    fn test_cell_offset() {
        let c1: Cell = "c1".parse().unwrap();
        assert_eq!(c1.offset(-1, 1), Some("b2".parse().unwrap()));
        assert_eq!(c1.offset(0, -1), None);
        assert_eq!(c1.offset(-3, 0), None);
    }

    #[test]
    fn test_cell_distance() {
        let a3: Cell = "a3".parse().unwrap();
        let c5: Cell = "c5".parse().unwrap();
        assert_eq!(Cell::file_dist(a3, c5), 2);
        assert_eq!(Cell::row_dist(c5, a3), 2);
    }

    #[test]
    fn test_cell_from_str_valid() {
        for file in 0..Cell::MAX_DIM {
            for row in 0..Cell::MAX_DIM {
                let cell = Cell::new(file, row).unwrap();
                assert_eq!(cell.to_string().parse::<Cell>(), Ok(cell));
            }
        }
    }

    #[test]
    fn test_cell_from_str_invalid() {
        assert!(matches!("".parse::<Cell>(), Err(ParseCellError::InvalidLength(0))));
        assert!(matches!("a".parse::<Cell>(), Err(ParseCellError::InvalidLength(1))));
        assert!(matches!("a123".parse::<Cell>(), Err(ParseCellError::InvalidLength(4))));
        assert!(matches!("q1".parse::<Cell>(), Err(ParseCellError::InvalidFileChar('q'))));
        assert!(matches!("A1".parse::<Cell>(), Err(ParseCellError::InvalidFileChar('A'))));
        assert!(matches!("ax".parse::<Cell>(), Err(ParseCellError::InvalidRowChar('x'))));
        assert!(matches!("a0".parse::<Cell>(), Err(ParseCellError::InvalidRow(_))));
        assert!(matches!("a17".parse::<Cell>(), Err(ParseCellError::InvalidRow(_))));
        assert!(matches!("a01".parse::<Cell>(), Err(ParseCellError::InvalidRow(_))));
    }
}
