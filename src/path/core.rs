use std::collections::HashSet;

use log::{debug, warn};

use crate::board::{Position, Tile, TileKind};
use crate::path::errors::PathError;

/// One move: the tile picked and the cell it was picked from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PathStep {
    pub position: Position,
    pub tile: Tile,
}

impl PathStep {
    pub fn new(position: Position, tile: Tile) -> Self {
        Self { position, tile }
    }
}

/// Ordered sequence of moves, first move at the front
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path {
    steps: Vec<PathStep>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_steps(steps: Vec<PathStep>) -> Self {
        Self { steps }
    }

    pub fn push(&mut self, step: PathStep) {
        self.steps.push(step);
    }

    /// Copy of this path with `step` appended
    pub fn extended(&self, step: PathStep) -> Self {
        let mut steps = Vec::with_capacity(self.steps.len() + 1);
        steps.extend_from_slice(&self.steps);
        steps.push(step);
        Self { steps }
    }

    pub fn steps(&self) -> &[PathStep] {
        &self.steps
    }

    pub fn last(&self) -> Option<&PathStep> {
        self.steps.last()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn tiles(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.steps.iter().map(|step| &step.tile)
    }

    /// # Errors
    ///
    /// Returns the first violation found, scanning from the front:
    /// the path must start with a number, alternate numbers and operators,
    /// move between adjacent cells and never revisit a cell.
    pub fn check_invariants(&self) -> Result<(), PathError> {
        debug!("Checking invariants of path with {} steps", self.steps.len());

        if self
            .steps
            .first()
            .is_some_and(|step| step.tile.kind() == TileKind::Operator)
        {
            warn!("Path starts with an operator");
            return Err(PathError::StartsWithOperator);
        }

        let mut seen = HashSet::with_capacity(self.steps.len());
        for (index, step) in self.steps.iter().enumerate() {
            if !seen.insert(step.position) {
                warn!("Step {} revisits {}", index, step.position);
                return Err(PathError::ReusedTile { index });
            }

            let Some(previous) = index.checked_sub(1).and_then(|i| self.steps.get(i)) else {
                continue;
            };

            if previous.tile.kind() == step.tile.kind() {
                warn!("Step {} does not alternate tile kinds", index);
                return Err(PathError::NotAlternating { index });
            }
            if !previous.position.is_adjacent(&step.position) {
                warn!(
                    "Step {} jumps from {} to {}",
                    index, previous.position, step.position
                );
                return Err(PathError::NotAdjacent { index });
            }
        }

        Ok(())
    }
}

impl FromIterator<PathStep> for Path {
    fn from_iter<I: IntoIterator<Item = PathStep>>(iter: I) -> Self {
        Self {
            steps: iter.into_iter().collect(),
        }
    }
}
