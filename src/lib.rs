//! Tilegoal - calibrated target values for tile-path arithmetic puzzles
//!
//! A board holds digit and operator tiles. Players build a path through
//! adjacent tiles, alternating numbers and operators, and the path is
//! evaluated strictly left to right. This library enumerates every path
//! reachable within a number of moves and picks a goal value whose rarity
//! among all reachable values matches a difficulty level.

pub mod board;
pub mod difficulty;
pub mod path;
pub mod search;
pub mod target;

// Re-export the main public API
pub use board::{Board, BoardError, Position, Tile, TileBag, TileKind};
pub use difficulty::{Difficulty, DifficultyError, DifficultyProfile};
pub use path::{Path, PathError, PathStep};
pub use search::{GameState, SearchError};
pub use target::{GeneratorConfig, TargetError, TargetGenerator};

/// Pick a target value for `board` after `path` has been played
///
/// This is a convenience function that uses a default generator: parallel
/// search, the default node budget and fresh randomness on every call.
///
/// # Arguments
///
/// * `board` - The current board snapshot
/// * `path` - Moves already played on it, usually empty
/// * `profile` - Rarity fraction, search depth and score multiplier
///
/// # Errors
///
/// This function will return an error if:
/// * `path` is not a legal path on `board`
/// * The search exceeds the default node budget
/// * No value is reachable, e.g. a board without number tiles
///
/// # Examples
///
/// ```
/// use tilegoal::{Board, Difficulty, Path, select_target_value};
///
/// let board = Board::parse("1+/23").expect("valid board");
/// let target = select_target_value(board, Path::new(), &Difficulty::Level6.profile());
/// assert_eq!(target.ok(), Some(1));
/// ```
pub fn select_target_value(
    board: Board,
    path: Path,
    profile: &DifficultyProfile,
) -> Result<i64, TargetError> {
    TargetGenerator::default().select_target_value(board, path, profile)
}
