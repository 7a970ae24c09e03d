use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DifficultyError {
    #[error("No values are reachable, nothing to pick a target from")]
    EmptyResultSet,
    #[error(
        "Invalid difficulty profile: fraction={fraction}, depth={depth}, multiplier={multiplier}"
    )]
    InvalidProfile {
        fraction: f32,
        depth: usize,
        multiplier: u32,
    },
}
