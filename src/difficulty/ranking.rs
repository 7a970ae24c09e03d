use std::collections::HashSet;

use log::debug;

/// Reorder `values` from rarest to most common, duplicates kept adjacent.
///
/// Values sharing an occurrence count stay in ascending value order.
pub fn sort_by_frequency(values: &[i64]) -> Vec<i64> {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();

    let mut counts: Vec<(i64, usize)> = Vec::new();
    for value in sorted {
        if let Some((last, count)) = counts.last_mut()
            && *last == value
        {
            *count += 1;
            continue;
        }
        counts.push((value, 1));
    }

    // Stable, so equal counts keep the ascending value order.
    counts.sort_by_key(|&(_, count)| count);
    debug!("Ranked {} distinct values", counts.len());

    counts
        .into_iter()
        .flat_map(|(value, count)| std::iter::repeat_n(value, count))
        .collect()
}

/// Drop repeats, keeping each value at its first position
pub fn dedup_in_order(values: &[i64]) -> Vec<i64> {
    let mut seen = HashSet::with_capacity(values.len());
    values.iter().copied().filter(|v| seen.insert(*v)).collect()
}

/// Distinct values ordered strictly from rarest to most common
pub fn rank_by_rarity(values: &[i64]) -> Vec<i64> {
    dedup_in_order(&sort_by_frequency(values))
}
