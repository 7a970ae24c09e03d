use thiserror::Error;

use crate::board::BoardError;
use crate::path::PathError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    #[error("Board error: {0}")]
    BoardError(#[from] BoardError),
    #[error("Path error: {0}")]
    PathError(#[from] PathError),
    #[error("Cannot expand a state with an empty path")]
    EmptyPath,
    #[error("Search budget of {limit} nodes exceeded")]
    BudgetExceeded { limit: usize },
}
