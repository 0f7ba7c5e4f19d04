//! # Module: `geometry`
//!
//! The adjacency and ray queries the move generator relies on. The generator never
//! computes coordinates itself: it asks a [`Geometry`] which cells lie along a ray,
//! which directions a piece may use and whether landing somewhere promotes it.
//!
//! [`Checkerboard`] is the square-diagonal implementation used by every variant in
//! this crate: only the dark squares (`file + row` even, so `a1` is dark) are part
//! of the board.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::*;

/// Cells along a ray, nearest first
pub type Ray = SmallVec<[Cell; 16]>;

/******************************************\
|==========================================|
|               Capture Mode               |
|==========================================|
\******************************************/

/// What happens to the piece that is jumped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CaptureMode {
    /// The top piece of the jumped stack goes to the bottom of the capturing stack
    Stack,
    /// The jumped piece leaves play
    Remove,
}

/******************************************\
|==========================================|
|                 Geometry                 |
|==========================================|
\******************************************/

pub trait Geometry {
    /// Returns true if `cell` is a playable cell of this board
    fn contains(&self, cell: Cell) -> bool;

    /// Playable cells from `cell` (exclusive) toward the edge in direction `dir`
    fn ray(&self, cell: Cell, dir: Direction) -> Ray;

    /// Directions the top piece `piece` may move and capture in
    fn directions(&self, piece: Piece) -> &'static [Direction];

    /// Returns true if `piece` arriving on `cell` is promoted
    fn promotes(&self, piece: Piece, cell: Cell) -> bool;

    /// The cell jumped over by a two step diagonal hop from `from` to `to`
    fn between(&self, from: Cell, to: Cell) -> Option<Cell>;

    /// Returns true if `from` and `to` are diagonal neighbours
    fn adjacent(&self, from: Cell, to: Cell) -> bool {
        Cell::file_dist(from, to) == 1
            && Cell::row_dist(from, to) == 1
            && self.contains(from)
            && self.contains(to)
    }

    fn capture_mode(&self) -> CaptureMode;
}

/******************************************\
|==========================================|
|               Checkerboard               |
|==========================================|
\******************************************/

/// # Checkerboard
///
/// - A `width` x `height` board played on its dark squares
/// - Soldiers of [`Player::One`] promote on the top row, soldiers of [`Player::Two`] on the
///   bottom row

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkerboard {
    width: u8,
    height: u8,
    capture: CaptureMode,
}

impl Checkerboard {
    /// Creates a board; dimensions are clamped to `1..=Cell::MAX_DIM`
    pub fn new(width: u8, height: u8, capture: CaptureMode) -> Self {
        Self {
            width: width.clamp(1, Cell::MAX_DIM),
            height: height.clamp(1, Cell::MAX_DIM),
            capture,
        }
    }

    #[inline]
    pub fn width(&self) -> u8 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Returns true if `(file, row)` is inside the rectangle, dark or not
    #[inline]
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.file() < self.width && cell.row() < self.height
    }

    /// The row on which soldiers of `player` promote
    #[inline]
    pub fn promotion_row(&self, player: Player) -> u8 {
        match player {
            Player::One => self.height - 1,
            Player::Two => 0,
        }
    }
}

impl Geometry for Checkerboard {
    #[inline]
    fn contains(&self, cell: Cell) -> bool {
        self.in_bounds(cell) && (cell.file() + cell.row()) % 2 == 0
    }

    fn ray(&self, cell: Cell, dir: Direction) -> Ray {
        let (df, dr) = dir.delta();
        let mut ray = Ray::new();
        let mut current = cell;

        while let Some(next) = current.offset(df, dr) {
            if !self.contains(next) {
                break;
            }
            ray.push(next);
            current = next;
        }

        ray
    }

    fn directions(&self, piece: Piece) -> &'static [Direction] {
        match piece.rank {
            Rank::Soldier => piece.owner.forward(),
            Rank::Officer => &Direction::ALL,
        }
    }

    fn promotes(&self, piece: Piece, cell: Cell) -> bool {
        piece.is_soldier() && cell.row() == self.promotion_row(piece.owner)
    }

    fn between(&self, from: Cell, to: Cell) -> Option<Cell> {
        if Cell::file_dist(from, to) != 2 || Cell::row_dist(from, to) != 2 {
            return None;
        }

        let file = (from.file() + to.file()) / 2;
        let row = (from.row() + to.row()) / 2;

        Cell::new(file, row).filter(|mid| self.contains(*mid))
    }

    #[inline]
    fn capture_mode(&self) -> CaptureMode {
        self.capture
    }
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(s: &str) -> Cell {
        s.parse().unwrap()
    }

    fn lasca() -> Checkerboard {
        Checkerboard::new(7, 7, CaptureMode::Stack)
    }

    fn playable(board: &Checkerboard) -> usize {
        (0..Cell::MAX_DIM)
            .flat_map(|row| (0..Cell::MAX_DIM).filter_map(move |file| Cell::new(file, row)))
            .filter(|cell| board.contains(*cell))
            .count()
    }

    #[test]
    fn test_dark_squares() {
        let board = lasca();
        assert!(board.contains(cell("a1")));
        assert!(board.contains(cell("b2")));
        assert!(board.contains(cell("g7")));
        assert!(!board.contains(cell("b1")));
        assert!(!board.contains(cell("h8")));
        assert_eq!(playable(&board), 25);
        assert_eq!(playable(&Checkerboard::new(8, 8, CaptureMode::Remove)), 32);
    }

    #[test]
    fn test_ray_stops_at_edge() {
        let board = lasca();
        let ray = board.ray(cell("c1"), Direction::NW);
        assert_eq!(ray.as_slice(), &[cell("b2"), cell("a3")]);

        let ray = board.ray(cell("a1"), Direction::NE);
        assert_eq!(ray.len(), 6);
        assert_eq!(ray[5], cell("g7"));

        assert!(board.ray(cell("c1"), Direction::SE).is_empty());
    }

    #[test]
    fn test_piece_directions() {
        let board = lasca();
        assert_eq!(board.directions(Piece::soldier(Player::One)), &Direction::NORTH);
        assert_eq!(board.directions(Piece::soldier(Player::Two)), &Direction::SOUTH);
        assert_eq!(board.directions(Piece::officer(Player::One)).len(), 4);
    }

    #[test]
    fn test_promotion_rows() {
        let board = lasca();
        assert!(board.promotes(Piece::soldier(Player::One), cell("e7")));
        assert!(!board.promotes(Piece::soldier(Player::One), cell("e1")));
        assert!(board.promotes(Piece::soldier(Player::Two), cell("c1")));
        assert!(!board.promotes(Piece::officer(Player::Two), cell("c1")));
    }

    #[test]
    fn test_between() {
        let board = lasca();
        assert_eq!(board.between(cell("c1"), cell("a3")), Some(cell("b2")));
        assert_eq!(board.between(cell("a3"), cell("c1")), Some(cell("b2")));
        assert_eq!(board.between(cell("c1"), cell("c3")), None);
        assert_eq!(board.between(cell("c1"), cell("d2")), None);
    }

    #[test]
    fn test_adjacent() {
        let board = lasca();
        assert!(board.adjacent(cell("c1"), cell("d2")));
        assert!(!board.adjacent(cell("c1"), cell("e3")));
        assert!(!board.adjacent(cell("g1"), cell("h2")));
    }
}
