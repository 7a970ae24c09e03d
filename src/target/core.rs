use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::board::Board;
use crate::difficulty::{DifficultyProfile, rank_by_rarity, select_value};
use crate::path::Path;
use crate::search::constants::DEFAULT_MAX_NODES;
use crate::search::{GameState, TreeBuilder, collect_values, extract_values};
use crate::target::errors::TargetError;

/// Configuration for target generation
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Node budget for the enumeration tree, `None` for unbounded.
    pub max_nodes: Option<usize>,
    /// Expand first-ply subtrees on the rayon pool.
    pub parallel: bool,
    /// Seed for the selector; a fresh entropy seed per call when `None`.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_nodes: Some(DEFAULT_MAX_NODES),
            parallel: true,
            seed: None,
        }
    }
}

/// Picks goal values whose reachability matches a difficulty profile
#[derive(Debug, Clone, Default)]
pub struct TargetGenerator {
    config: GeneratorConfig,
}

impl TargetGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Get a reference to the generator configuration
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Every value reachable within `profile.depth()` more moves, distinct
    /// and ordered rarest first
    ///
    /// # Errors
    ///
    /// Returns an error if `path` is not legal on `board` or the search
    /// exceeds its node budget.
    pub fn ranked_values(
        &self,
        board: Board,
        path: Path,
        profile: &DifficultyProfile,
    ) -> Result<Vec<i64>, TargetError> {
        let state = GameState::new(board, path)?;
        let depth = profile.depth();

        let builder = TreeBuilder::new(self.config.max_nodes, self.config.parallel);
        let tree = builder.build(state, depth)?;
        let values = collect_values(&extract_values(&tree), depth);
        let ranked = rank_by_rarity(&values);

        debug!(
            "{} reachable values, {} distinct",
            values.len(),
            ranked.len()
        );
        Ok(ranked)
    }

    /// Choose a target value for `board` after `path` has been played.
    ///
    /// # Errors
    ///
    /// Returns an error if `path` is not legal on `board`, the search exceeds
    /// its node budget, or nothing is reachable
    /// ([`crate::difficulty::DifficultyError::EmptyResultSet`]).
    pub fn select_target_value(
        &self,
        board: Board,
        path: Path,
        profile: &DifficultyProfile,
    ) -> Result<i64, TargetError> {
        info!(
            "Selecting target: depth={}, fraction={}, starting path length {}",
            profile.depth(),
            profile.fraction(),
            path.len()
        );

        let ranked = self.ranked_values(board, path, profile)?;
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let target = select_value(&ranked, profile, &mut rng)?;

        info!("Selected target value {}", target);
        Ok(target)
    }
}
