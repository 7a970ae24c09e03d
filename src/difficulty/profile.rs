use std::fmt;

use log::warn;

use crate::difficulty::errors::DifficultyError;

/// How rare the target should be, how deep to search and how much a hit scores
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyProfile {
    fraction: f32,
    depth: usize,
    multiplier: u32,
}

impl DifficultyProfile {
    /// # Errors
    ///
    /// Returns [`DifficultyError::InvalidProfile`] unless `0 < fraction <= 1`,
    /// `depth >= 1` and `multiplier >= 1`.
    pub fn new(fraction: f32, depth: usize, multiplier: u32) -> Result<Self, DifficultyError> {
        if !(fraction > 0.0 && fraction <= 1.0) || depth < 1 || multiplier < 1 {
            warn!(
                "Rejecting profile fraction={} depth={} multiplier={}",
                fraction, depth, multiplier
            );
            return Err(DifficultyError::InvalidProfile {
                fraction,
                depth,
                multiplier,
            });
        }
        Ok(Self {
            fraction,
            depth,
            multiplier,
        })
    }

    pub fn fraction(&self) -> f32 {
        self.fraction
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn multiplier(&self) -> u32 {
        self.multiplier
    }

    /// The deepest catalogued tier always gets the single rarest value.
    pub fn is_hardest(&self) -> bool {
        self.depth == Difficulty::MAX_DEPTH
    }
}

/// Catalogue of difficulty levels, most common/shallow first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    #[default]
    Level1,
    Level2,
    Level3,
    Level4,
    Level5,
    Level6,
}

impl Difficulty {
    pub const ALL: [Difficulty; 6] = [
        Difficulty::Level1,
        Difficulty::Level2,
        Difficulty::Level3,
        Difficulty::Level4,
        Difficulty::Level5,
        Difficulty::Level6,
    ];

    pub const MAX_DEPTH: usize = 10;

    pub fn profile(&self) -> DifficultyProfile {
        let (fraction, depth, multiplier) = match self {
            Difficulty::Level1 => (0.5, 4, 1),
            Difficulty::Level2 => (0.4, 5, 2),
            Difficulty::Level3 => (0.3, 6, 8),
            Difficulty::Level4 => (0.2, 7, 16),
            Difficulty::Level5 => (0.1, 8, 32),
            Difficulty::Level6 => (0.01, Self::MAX_DEPTH, 1024),
        };
        DifficultyProfile {
            fraction,
            depth,
            multiplier,
        }
    }

    /// Zero-based menu index to level; unknown indices fall back to the easiest.
    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or_default()
    }
}

impl From<Difficulty> for DifficultyProfile {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.profile()
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let level = Self::ALL
            .iter()
            .position(|d| d == self)
            .map_or(1, |i| i + 1);
        write!(f, "Level {}", level)
    }
}
