use crate::board::{Board, Geometry, RulesError};
use crate::core::*;

/// Enumerates the single hops available to the stack on `cell`.
///
/// For every direction the top piece may use, the two nearest cells of the ray are
/// inspected. A capture needs an opposing top on the first and an empty second cell;
/// a slide needs an empty first cell. Captures are returned if there are any, and
/// the slides otherwise.
pub fn jumps_from<G: Geometry>(
    board: &Board,
    geometry: &G,
    cell: Cell,
) -> Result<Vec<Move>, RulesError> {
    let mover = board.top(cell).ok_or(RulesError::EmptyCell(cell))?;

    let mut captures = Vec::new();
    let mut slides = Vec::new();

    for &dir in geometry.directions(mover) {
        let ray = geometry.ray(cell, dir);

        let Some(&adjacent) = ray.first() else {
            continue;
        };

        match board.owner(adjacent) {
            None => slides.push(Move::Slide { from: cell, to: adjacent }),
            Some(owner) if owner != mover.owner => {
                if let Some(&beyond) = ray.get(1) {
                    if board.is_empty(beyond) {
                        captures.push(Move::jump(cell, beyond));
                    }
                }
            }
            Some(_) => {}
        }
    }

    if captures.is_empty() {
        Ok(slides)
    } else {
        Ok(captures)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{CaptureMode, Checkerboard};

    fn cell(s: &str) -> Cell {
        s.parse().unwrap()
    }

    fn lasca() -> Checkerboard {
        Checkerboard::new(7, 7, CaptureMode::Stack)
    }

    fn tokens(moves: &[Move]) -> Vec<String> {
        let mut tokens: Vec<String> = moves.iter().map(|mv| mv.to_string()).collect();
        tokens.sort();
        tokens
    }

    #[test]
    fn test_soldier_slides_forward_only() {
        let mut board = Board::new();
        board.place(cell("c3"), Stack::single(Piece::soldier(Player::One)));
        let moves = jumps_from(&board, &lasca(), cell("c3")).unwrap();
        assert_eq!(tokens(&moves), vec!["c3-b4", "c3-d4"]);

        board.place(cell("e5"), Stack::single(Piece::soldier(Player::Two)));
        let moves = jumps_from(&board, &lasca(), cell("e5")).unwrap();
        assert_eq!(tokens(&moves), vec!["e5-d4", "e5-f4"]);
    }

    #[test]
    fn test_officer_uses_every_direction() {
        let mut board = Board::new();
        board.place(cell("d4"), Stack::single(Piece::officer(Player::One)));
        let moves = jumps_from(&board, &lasca(), cell("d4")).unwrap();
        assert_eq!(moves.len(), 4);
    }

    #[test]
    fn test_captures_hide_slides() {
        let mut board = Board::new();
        board.place(cell("c3"), Stack::single(Piece::soldier(Player::One)));
        board.place(cell("d4"), Stack::single(Piece::soldier(Player::Two)));
        let moves = jumps_from(&board, &lasca(), cell("c3")).unwrap();
        assert_eq!(tokens(&moves), vec!["c3xe5"]);
    }

    #[test]
    fn test_blocked_capture() {
        let mut board = Board::new();
        board.place(cell("c3"), Stack::single(Piece::soldier(Player::One)));
        board.place(cell("d4"), Stack::single(Piece::soldier(Player::Two)));
        board.place(cell("e5"), Stack::single(Piece::soldier(Player::Two)));
        board.place(cell("b4"), Stack::single(Piece::soldier(Player::One)));
        let moves = jumps_from(&board, &lasca(), cell("c3")).unwrap();
        assert!(moves.is_empty());
    }

    #[test]
    fn test_no_capture_off_the_edge() {
        let mut board = Board::new();
        board.place(cell("f6"), Stack::single(Piece::soldier(Player::One)));
        board.place(cell("g7"), Stack::single(Piece::soldier(Player::Two)));
        let moves = jumps_from(&board, &lasca(), cell("f6")).unwrap();
        assert_eq!(tokens(&moves), vec!["f6-e7"]);
    }

    #[test]
    fn test_empty_cell_is_an_error() {
        let board = Board::new();
        assert_eq!(
            jumps_from(&board, &lasca(), cell("c3")),
            Err(RulesError::EmptyCell(cell("c3")))
        );
    }
}
