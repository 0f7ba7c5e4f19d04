use crate::core::Move;

/// # Move list
///
/// - The legal moves of one player, sorted by token string and free of duplicates
/// - Either every entry is a capture or none is

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    #[inline]
    pub fn new() -> MoveList {
        MoveList { moves: Vec::new() }
    }

    /// Sorts `moves` on their token string and drops duplicates
    pub(super) fn from_moves(mut moves: Vec<Move>) -> MoveList {
        moves.sort_by_cached_key(|mv| mv.to_string());
        moves.dedup();
        MoveList { moves }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Move> {
        self.moves.get(index)
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter()
    }

    #[inline]
    pub fn contains(&self, mv: &Move) -> bool {
        self.moves.contains(mv)
    }

    /// Returns true if captures are available, in which case every entry is one
    #[inline]
    pub fn has_captures(&self) -> bool {
        self.moves.first().is_some_and(Move::is_capture)
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}
