//! Text notation for positions, modelled on FEN.
//!
//! `<rows> <side>`: rows run from the top row down to row 1 and are separated by `/`.
//! Within a row a number skips that many squares (light squares count too) and a letter
//! is a one piece stack: `w`/`W` for a soldier/officer of player 1, `b`/`B` for player 2.
//! Taller stacks are written bottom to top in parentheses, so `(wB)` is an officer of
//! player 2 standing on a soldier of player 1. The side to move is `1` or `2`.

use thiserror::Error;

use super::{Board, Checkerboard, Geometry};
use crate::core::*;

/******************************************\
|==========================================|
|          Useful position strings         |
|==========================================|
\******************************************/

/// Opening position of Lasca on its 7x7 board
pub const LASCA_START: &str = "b1b1b1b/1b1b1b1/b1b1b1b/7/w1w1w1w/1w1w1w1/w1w1w1w 1";
/// Opening position of draughts on the 8x8 board
pub const DRAUGHTS_START: &str =
    "1b1b1b1b/b1b1b1b1/1b1b1b1b/8/8/w1w1w1w1/1w1w1w1w/w1w1w1w1 1";

/******************************************\
|==========================================|
|             Notation Errors              |
|==========================================|
\******************************************/

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("Invalid number of fields, expected the rows followed by the side to move")]
    InvalidNumberOfFields,
    #[error("Expected {expected} rows, found {found}")]
    InvalidRowCount { expected: u8, found: usize },
    #[error("Row {row} covers {found} squares, expected {expected}")]
    InvalidRowLength { row: u8, expected: u8, found: usize },
    #[error("Invalid character in row {row}: '{found}'")]
    InvalidChar { row: u8, found: char },
    #[error("Unbalanced parentheses in row {0}")]
    UnbalancedParentheses(u8),
    #[error("Empty stack in row {0}")]
    EmptyStack(u8),
    #[error("A stack stands on {0}, which is not a playable cell")]
    UnplayableCell(Cell),
    #[error("Invalid side to move: {0}")]
    InvalidSide(#[from] ParsePlayerError),
}

/******************************************\
|==========================================|
|              Parse Notation              |
|==========================================|
\******************************************/

impl Board {
    /// # Board constructor from position notation
    ///
    /// Parses `notation` for the board shape of `geometry` and returns the board with the
    /// side to move.
    ///
    /// ## Errors
    /// Returns `NotationError` if:
    /// * There are not exactly two fields.
    /// * The row count or the width of any row does not match `geometry`.
    /// * A row holds an unknown character, an empty or unclosed stack.
    /// * A stack stands on a light square.
    pub fn from_notation(
        notation: &str,
        geometry: &Checkerboard,
    ) -> Result<(Board, Player), NotationError> {
        let mut fields = notation.split_whitespace();

        let placement = fields.next().ok_or(NotationError::InvalidNumberOfFields)?;
        let side = fields.next().ok_or(NotationError::InvalidNumberOfFields)?;

        if fields.next().is_some() {
            return Err(NotationError::InvalidNumberOfFields);
        }

        let rows: Vec<&str> = placement.split('/').collect();
        if rows.len() != geometry.height() as usize {
            return Err(NotationError::InvalidRowCount {
                expected: geometry.height(),
                found: rows.len(),
            });
        }

        let mut board = Board::new();

        // Rows are written top down
        for (row, text) in (0..geometry.height()).rev().zip(rows) {
            for (file, stack) in parse_row(text, row, geometry.width())? {
                let cell = Cell::new(file, row).ok_or(NotationError::InvalidRowLength {
                    row: row + 1,
                    expected: geometry.width(),
                    found: file as usize + 1,
                })?;
                if !geometry.contains(cell) {
                    return Err(NotationError::UnplayableCell(cell));
                }
                board.place(cell, stack);
            }
        }

        Ok((board, side.parse()?))
    }

    /// # Position notation
    ///
    /// Writes the board and `side` in the notation read by [`Board::from_notation`].
    pub fn notation(&self, geometry: &Checkerboard, side: Player) -> String {
        let mut out = String::new();

        for row in (0..geometry.height()).rev() {
            let mut empty = 0;
            for file in 0..geometry.width() {
                match Cell::new(file, row).and_then(|cell| self.on(cell)) {
                    Some(stack) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push_str(&stack.to_string());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            if row != 0 {
                out.push('/');
            }
        }

        out.push(' ');
        out.push_str(&side.to_string());
        out
    }
}

/// Reads one row into `(file, stack)` pairs after checking that it spans `width` squares
fn parse_row(text: &str, row: u8, width: u8) -> Result<Vec<(u8, Stack)>, NotationError> {
    let label = row + 1;
    let piece = |c: char| {
        Piece::try_from(c).map_err(|_| NotationError::InvalidChar { row: label, found: c })
    };

    let mut stacks = Vec::new();
    let mut file: usize = 0;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if let Some(digit) = c.to_digit(10) {
            let mut run = digit as usize;
            while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
                run = run * 10 + digit as usize;
                chars.next();
            }
            if run == 0 {
                return Err(NotationError::InvalidChar { row: label, found: '0' });
            }
            file += run;
            continue;
        }

        let stack = match c {
            '(' => {
                let mut pieces = Vec::new();
                loop {
                    match chars.next() {
                        Some(')') => break,
                        Some(c) => pieces.push(piece(c)?),
                        None => return Err(NotationError::UnbalancedParentheses(label)),
                    }
                }
                Stack::from_pieces(pieces).map_err(|_| NotationError::EmptyStack(label))?
            }
            ')' => return Err(NotationError::UnbalancedParentheses(label)),
            _ => Stack::single(piece(c)?),
        };

        stacks.push((file, stack));
        file += 1;
    }

    if file != width as usize {
        return Err(NotationError::InvalidRowLength {
            row: label,
            expected: width,
            found: file,
        });
    }

    // Every file is below `width`, which fits in a u8
    Ok(stacks
        .into_iter()
        .map(|(file, stack)| (file as u8, stack))
        .collect())
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::CaptureMode;

    fn cell(s: &str) -> Cell {
        s.parse().unwrap()
    }

    fn lasca() -> Checkerboard {
        Checkerboard::new(7, 7, CaptureMode::Stack)
    }

    fn draughts() -> Checkerboard {
        Checkerboard::new(8, 8, CaptureMode::Remove)
    }

    #[test]
    fn test_openings() {
        let (board, side) = Board::from_notation(LASCA_START, &lasca()).unwrap();
        assert_eq!(side, Player::One);
        assert_eq!(board.pieces_of(Player::One), 11);
        assert_eq!(board.pieces_of(Player::Two), 11);
        assert_eq!(board.top(cell("a1")), Some(Piece::soldier(Player::One)));
        assert_eq!(board.top(cell("g7")), Some(Piece::soldier(Player::Two)));
        assert_eq!(board.notation(&lasca(), side), LASCA_START);

        let (board, _) = Board::from_notation(DRAUGHTS_START, &draughts()).unwrap();
        assert_eq!(board.pieces_of(Player::One), 12);
        assert_eq!(board.pieces_of(Player::Two), 12);
        assert_eq!(board.notation(&draughts(), Player::One), DRAUGHTS_START);
    }

    #[test]
    fn test_stacks_are_read_bottom_to_top() {
        let text = "7/7/7/1(Bw)5/7/1(ww)5/2(wB)4 2";
        let (board, side) = Board::from_notation(text, &lasca()).unwrap();
        assert_eq!(side, Player::Two);

        let c1 = board.on(cell("c1")).unwrap();
        assert_eq!(c1.pieces(), &[Piece::soldier(Player::One), Piece::officer(Player::Two)]);
        assert_eq!(board.owner(cell("b4")), Some(Player::One));
        assert_eq!(board.on(cell("b2")).unwrap().len(), 2);
        assert_eq!(board.notation(&lasca(), side), text);
    }

    #[test]
    fn test_notation_errors() {
        let geometry = lasca();
        assert_eq!(
            Board::from_notation("7/7/7/7/7/7/7", &geometry),
            Err(NotationError::InvalidNumberOfFields)
        );
        assert_eq!(
            Board::from_notation("7/7/7/7/7/7 1", &geometry),
            Err(NotationError::InvalidRowCount { expected: 7, found: 6 })
        );
        assert_eq!(
            Board::from_notation("7/7/7/7/7/7/6 1", &geometry),
            Err(NotationError::InvalidRowLength { row: 1, expected: 7, found: 6 })
        );
        assert_eq!(
            Board::from_notation("7/7/7/7/7/7/x6 1", &geometry),
            Err(NotationError::InvalidChar { row: 1, found: 'x' })
        );
        assert_eq!(
            Board::from_notation("7/7/7/7/7/7/(wb 1", &geometry),
            Err(NotationError::UnbalancedParentheses(1))
        );
        assert_eq!(
            Board::from_notation("7/7/7/7/7/7/()6 1", &geometry),
            Err(NotationError::EmptyStack(1))
        );
        assert_eq!(
            Board::from_notation("7/7/7/7/7/7/1w5 1", &geometry),
            Err(NotationError::UnplayableCell(cell("b1")))
        );
        assert!(matches!(
            Board::from_notation("7/7/7/7/7/7/7 3", &geometry),
            Err(NotationError::InvalidSide(_))
        ));
    }
}
