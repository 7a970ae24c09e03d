//! Difficulty catalogue and rarity-calibrated target selection

mod errors;
mod profile;
mod ranking;
mod selector;

pub use errors::DifficultyError;
pub use profile::{Difficulty, DifficultyProfile};
pub use ranking::{dedup_in_order, rank_by_rarity, sort_by_frequency};
pub use selector::select_value;

#[cfg(test)]
mod tests;
