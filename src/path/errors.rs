use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathError {
    #[error("Path cannot start with an operator")]
    StartsWithOperator,
    #[error("Step {index} repeats the previous step's tile kind")]
    NotAlternating { index: usize },
    #[error("Step {index} is not adjacent to the step before it")]
    NotAdjacent { index: usize },
    #[error("Step {index} reuses a tile already on the path")]
    ReusedTile { index: usize },
}
