use thiserror::Error;

use crate::difficulty::DifficultyError;
use crate::search::SearchError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TargetError {
    #[error("Search error: {0}")]
    SearchError(#[from] SearchError),
    #[error("Difficulty error: {0}")]
    DifficultyError(#[from] DifficultyError),
}

impl TargetError {
    /// The board and depth left nothing to choose from; callers should fall
    /// back to a default target or ask again.
    pub fn is_empty_result(&self) -> bool {
        matches!(
            self,
            TargetError::DifficultyError(DifficultyError::EmptyResultSet)
        )
    }
}
