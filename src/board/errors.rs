use thiserror::Error;

/// Errors raised while building or querying a board
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BoardError {
    #[error("Board must be at least 1x1, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    #[error("Not enough tiles to cover the board: need {required}, got {supplied}")]
    InsufficientTiles { required: usize, supplied: usize },
    #[error("Invalid tile symbol: {0:?}")]
    InvalidTile(char),
    #[error("Board rows differ in length: row {row} has {found} tiles, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("Position ({x}, {y}) is outside the {width}x{height} board")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
    #[error("Tile {symbol:?} is not present at ({x}, {y}) in this board")]
    NotFound { x: usize, y: usize, symbol: char },
}

impl BoardError {
    /// Malformed construction input, as opposed to a contract violation.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            BoardError::InvalidDimensions { .. }
                | BoardError::InsufficientTiles { .. }
                | BoardError::InvalidTile(_)
                | BoardError::RaggedRows { .. }
        )
    }
}
