use serde::{Deserialize, Serialize};

use super::{Board, CaptureMode, Geometry, RulesError};
use crate::core::*;

/******************************************\
|==========================================|
|               Move Record                |
|==========================================|
\******************************************/

/// # Move record
///
/// - The outcome of applying a move: the cells whose top piece was captured, in hop order,
///   and whether the mover was promoted on its final landing cell
/// - For captures `captured.len() == mv.hops()`; for slides `captured` is empty

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub mv: Move,
    pub captured: Vec<Cell>,
    pub promoted: bool,
}

/// Result of a single hop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Hop {
    pub captured: Option<Cell>,
    pub promoted: bool,
}

impl Board {
    /// Moves the stack on `from` one hop to `to`.
    ///
    /// A slide must reach a diagonal neighbour; a capture must jump exactly one opposing
    /// stack. In [`CaptureMode::Stack`] the jumped top piece is placed under the mover,
    /// in [`CaptureMode::Remove`] it leaves play. A soldier landing on its promotion row
    /// becomes an officer.
    ///
    /// **Note:** On error the board may have been left untouched or partly changed; callers
    /// that need atomicity work on a clone (see [`Board::apply`]).
    pub(crate) fn hop<G: Geometry>(
        &mut self,
        geometry: &G,
        from: Cell,
        to: Cell,
        step: Step,
    ) -> Result<Hop, RulesError> {
        if !geometry.contains(from) {
            return Err(RulesError::OffBoard(from));
        }
        if !geometry.contains(to) {
            return Err(RulesError::OffBoard(to));
        }

        let mover = self.top(from).ok_or(RulesError::EmptyCell(from))?;

        if !self.is_empty(to) {
            return Err(RulesError::Occupied(to));
        }

        let direction = Direction::from_delta(
            to.file() as i8 - from.file() as i8,
            to.row() as i8 - from.row() as i8,
        )
        .ok_or(RulesError::IllegalHop { from, to })?;

        if !geometry.directions(mover).contains(&direction) {
            return Err(RulesError::IllegalHop { from, to });
        }

        let captured = match step {
            Step::Slide => {
                if !geometry.adjacent(from, to) {
                    return Err(RulesError::IllegalHop { from, to });
                }
                None
            }
            Step::Capture => {
                let over = geometry
                    .between(from, to)
                    .ok_or(RulesError::IllegalHop { from, to })?;
                match self.owner(over) {
                    Some(owner) if owner != mover.owner => Some(over),
                    _ => return Err(RulesError::IllegalHop { from, to }),
                }
            }
        };

        let mut stack = self.take(from).ok_or(RulesError::EmptyCell(from))?;

        if let Some(over) = captured {
            let jumped = self.take(over).ok_or(RulesError::EmptyCell(over))?;
            let (prisoner, rest) = jumped.split_top();
            if let Some(rest) = rest {
                self.place(over, rest);
            }
            if geometry.capture_mode() == CaptureMode::Stack {
                stack.push_bottom(prisoner);
            }
        }

        let promoted = geometry.promotes(mover, to);
        if promoted {
            stack.replace_top(mover.promoted());
        }

        self.place(to, stack);

        Ok(Hop { captured, promoted })
    }

    /// Applies a complete move, hop by hop, and reports what it captured.
    ///
    /// The captured cells are derived from the geometry of each hop. The board is only
    /// changed if every hop is legal. A promotion before the last hop is refused, as
    /// promotion ends the turn.
    pub fn apply<G: Geometry>(
        &mut self,
        geometry: &G,
        mv: &Move,
    ) -> Result<MoveRecord, RulesError> {
        if mv.hops() == 0 {
            return Err(RulesError::ShortChain);
        }

        let mut next = self.clone();
        let path = mv.cells();
        let mut captured = Vec::with_capacity(mv.hops());
        let mut promoted = false;

        for hop in path.windows(2) {
            let (from, to) = (hop[0], hop[1]);

            if promoted {
                return Err(RulesError::IllegalHop { from, to });
            }

            let outcome = next.hop(geometry, from, to, mv.step())?;
            captured.extend(outcome.captured);
            promoted = outcome.promoted;
        }

        *self = next;

        Ok(MoveRecord {
            mv: mv.clone(),
            captured,
            promoted,
        })
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
    use crate::board::Checkerboard;

    fn cell(s: &str) -> Cell {
        s.parse().unwrap()
    }

    fn lasca() -> Checkerboard {
        Checkerboard::new(7, 7, CaptureMode::Stack)
    }

    fn draughts() -> Checkerboard {
        Checkerboard::new(8, 8, CaptureMode::Remove)
    }

    /// Stacks are spelled bottom to top (`"wb"` is a white soldier under a black one)
    fn board_with(stacks: &[(&str, &str)]) -> Board {
        let mut board = Board::new();
        for (c, pieces) in stacks {
            let pieces = pieces.chars().map(|p| Piece::try_from(p).unwrap());
            board.place(cell(c), Stack::from_pieces(pieces).unwrap());
        }
        board
    }

    #[test]
    fn test_slide() {
        let mut board = board_with(&[("c3", "w")]);
        let record = board.apply(&lasca(), &"c3-d4".parse().unwrap()).unwrap();
        assert!(record.captured.is_empty());
        assert!(!record.promoted);
        assert!(board.is_empty(cell("c3")));
        assert_eq!(board.top(cell("d4")), Some(Piece::soldier(Player::One)));
    }

    #[test]
    fn test_soldier_cannot_slide_backwards() {
        let mut board = board_with(&[("c3", "w")]);
        let before = board.clone();
        let result = board.apply(&lasca(), &"c3-d2".parse().unwrap());
        assert_eq!(result, Err(RulesError::IllegalHop { from: cell("c3"), to: cell("d2") }));
        assert_eq!(board, before);
    }

    #[test]
    fn test_capture_stacks_prisoner_at_bottom() {
        let w = Piece::soldier(Player::One);
        let b = Piece::soldier(Player::Two);
        let mut board = board_with(&[("c3", "w"), ("d4", "wb")]);

        let record = board.apply(&lasca(), &"c3xe5".parse().unwrap()).unwrap();
        assert_eq!(record.captured, vec![cell("d4")]);

        assert_eq!(board.on(cell("e5")).unwrap().pieces(), &[b, w]);
        assert_eq!(board.on(cell("d4")).unwrap().pieces(), &[w]);
        assert!(board.is_empty(cell("c3")));
    }

    #[test]
    fn test_capture_removes_in_draughts() {
        let mut board = board_with(&[("c3", "w"), ("d4", "b")]);
        board.apply(&draughts(), &"c3xe5".parse().unwrap()).unwrap();
        assert!(board.is_empty(cell("d4")));
        assert_eq!(board.on(cell("e5")).unwrap().len(), 1);
    }

    #[test]
    fn test_capture_chain_records_every_jumped_cell() {
        let b = Piece::officer(Player::Two);
        let w = Piece::soldier(Player::One);
        let mut board = board_with(&[("c1", "B"), ("b2", "w"), ("b4", "w")]);

        let record = board.apply(&lasca(), &"c1xa3xc5".parse().unwrap()).unwrap();
        assert_eq!(record.captured, vec![cell("b2"), cell("b4")]);
        assert_eq!(record.captured.len(), record.mv.hops());
        assert_eq!(board.on(cell("c5")).unwrap().pieces(), &[w, w, b]);
        assert_eq!(board.occupied(), 1);
    }

    #[test]
    fn test_promotion_on_last_row() {
        let mut board = board_with(&[("d6", "w")]);
        let record = board.apply(&lasca(), &"d6-e7".parse().unwrap()).unwrap();
        assert!(record.promoted);
        assert_eq!(board.top(cell("e7")), Some(Piece::officer(Player::One)));
    }

    #[test]
    fn test_promotion_only_changes_the_top() {
        let w = Piece::soldier(Player::One);
        let b = Piece::soldier(Player::Two);
        let mut board = board_with(&[("b2", "wb")]);
        board.apply(&lasca(), &"b2-a1".parse().unwrap()).unwrap();
        assert_eq!(board.on(cell("a1")).unwrap().pieces(), &[w, Piece::officer(Player::Two)]);
    }

    #[test]
    fn test_promotion_mid_chain_is_refused() {
        let mut board = board_with(&[("c5", "w"), ("d6", "b"), ("f6", "b")]);
        let before = board.clone();
        let result = board.apply(&lasca(), &"c5xe7xg5".parse().unwrap());
        assert_eq!(result, Err(RulesError::IllegalHop { from: cell("e7"), to: cell("g5") }));
        assert_eq!(board, before);
    }

    #[test]
    fn test_illegal_hops() {
        let mut board = board_with(&[("c3", "w"), ("d4", "w"), ("a5", "w")]);
        let geometry = lasca();

        assert_eq!(
            board.apply(&geometry, &"c3xe5".parse().unwrap()),
            Err(RulesError::IllegalHop { from: cell("c3"), to: cell("e5") })
        );
        assert_eq!(
            board.apply(&geometry, &"c3-d4".parse().unwrap()),
            Err(RulesError::Occupied(cell("d4")))
        );
        assert_eq!(
            board.apply(&geometry, &"e3-f4".parse().unwrap()),
            Err(RulesError::EmptyCell(cell("e3")))
        );
        assert_eq!(
            board.apply(&geometry, &"c3-c4".parse().unwrap()),
            Err(RulesError::OffBoard(cell("c4")))
        );
        assert_eq!(
            board.apply(&geometry, &"a5xc7".parse().unwrap()),
            Err(RulesError::IllegalHop { from: cell("a5"), to: cell("c7") })
        );
    }

    #[test]
    fn test_short_capture_path_is_refused() {
        let mut board = board_with(&[("c3", "w"), ("d4", "b")]);
        let before = board.clone();

        let mut path = Path::new();
        path.push(cell("c3"));
        assert_eq!(board.apply(&lasca(), &Move::Capture(path)), Err(RulesError::ShortChain));
        assert_eq!(board.apply(&lasca(), &Move::Capture(Path::new())), Err(RulesError::ShortChain));
        assert_eq!(board, before);
    }
}
