use log::{debug, warn};
use rand::Rng;

use crate::difficulty::errors::DifficultyError;
use crate::difficulty::profile::DifficultyProfile;

/// Pick a target from distinct values ordered rarest first.
///
/// The hardest tier always takes the rarest value. Otherwise an index is
/// drawn from `[pivot / 2, pivot + pivot / 2]` with `pivot = floor(fraction * N)`,
/// then clamped to the last value.
///
/// # Errors
///
/// Returns [`DifficultyError::EmptyResultSet`] when `ranked` is empty.
pub fn select_value<R: Rng + ?Sized>(
    ranked: &[i64],
    profile: &DifficultyProfile,
    rng: &mut R,
) -> Result<i64, DifficultyError> {
    let Some(&rarest) = ranked.first() else {
        warn!("No reachable values to select from");
        return Err(DifficultyError::EmptyResultSet);
    };

    if profile.is_hardest() {
        debug!("Hardest profile, taking rarest value {}", rarest);
        return Ok(rarest);
    }

    let len = ranked.len();
    let pivot = (f64::from(profile.fraction()) * len as f64).floor() as usize;
    let offset = rng.gen_range(0..=pivot);
    let index = (offset + pivot / 2).min(len - 1);
    debug!(
        "Selecting index {} of {} (pivot {}, offset {})",
        index, len, pivot, offset
    );

    Ok(ranked.get(index).copied().unwrap_or(rarest))
}
