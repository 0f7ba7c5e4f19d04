/// # Module: `utils`
///
/// Tools built on top of the rules engine that are not part of the rules themselves.
///
/// ## Submodules
///
/// - `perft`: counts the positions reachable in a fixed number of moves, used to check
///   the move generator against known totals.
pub mod perft;

pub use perft::{perft, perft_divide};
