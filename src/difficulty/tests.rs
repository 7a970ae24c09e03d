use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::difficulty::{
    Difficulty, DifficultyError, DifficultyProfile, dedup_in_order, rank_by_rarity,
    select_value, sort_by_frequency,
};

#[test]
fn test_catalogue_profiles() {
    let expected = [
        (0.5, 4, 1),
        (0.4, 5, 2),
        (0.3, 6, 8),
        (0.2, 7, 16),
        (0.1, 8, 32),
        (0.01, 10, 1024),
    ];
    for (difficulty, (fraction, depth, multiplier)) in Difficulty::ALL.iter().zip(expected) {
        let profile = difficulty.profile();
        assert!((profile.fraction() - fraction).abs() < f32::EPSILON);
        assert_eq!(profile.depth(), depth);
        assert_eq!(profile.multiplier(), multiplier);
    }
    assert!(Difficulty::Level6.profile().is_hardest());
    assert!(!Difficulty::Level5.profile().is_hardest());
}

#[test]
fn test_catalogue_grows_rarer_and_deeper() {
    for pair in Difficulty::ALL.windows(2) {
        if let [easier, harder] = pair {
            assert!(easier.profile().fraction() > harder.profile().fraction());
            assert!(easier.profile().depth() < harder.profile().depth());
        }
    }
}

#[test]
fn test_from_index_falls_back_to_level_one() {
    assert_eq!(Difficulty::from_index(0), Difficulty::Level1);
    assert_eq!(Difficulty::from_index(5), Difficulty::Level6);
    assert_eq!(Difficulty::from_index(42), Difficulty::Level1);
    assert_eq!(Difficulty::Level3.to_string(), "Level 3");
}

#[test]
fn test_custom_profile_validation() {
    assert!(DifficultyProfile::new(1.0, 1, 1).is_ok());
    assert!(DifficultyProfile::new(0.0, 3, 1).is_err());
    assert!(DifficultyProfile::new(1.5, 3, 1).is_err());
    assert!(DifficultyProfile::new(f32::NAN, 3, 1).is_err());
    assert!(DifficultyProfile::new(0.5, 0, 1).is_err());
    assert_eq!(
        DifficultyProfile::new(0.5, 3, 0),
        Err(DifficultyError::InvalidProfile {
            fraction: 0.5,
            depth: 3,
            multiplier: 0
        })
    );
}

#[test]
fn test_sort_by_frequency_rarest_first() {
    let values = [5, 3, 5, 1, 3, 5, 2];
    assert_eq!(sort_by_frequency(&values), vec![1, 2, 3, 3, 5, 5, 5]);
}

#[test]
fn test_sort_by_frequency_ties_ascending() {
    let values = [9, 4, 7, 4, 9, 7, -2];
    assert_eq!(sort_by_frequency(&values), vec![-2, 4, 4, 7, 7, 9, 9]);
    assert!(sort_by_frequency(&[]).is_empty());
}

#[test]
fn test_rank_by_rarity_dedups() {
    let values = [5, 3, 5, 1, 3, 5, 2, 8, 8];
    assert_eq!(rank_by_rarity(&values), vec![1, 2, 3, 8, 5]);
}

#[test]
fn test_ranking_is_idempotent() {
    let values = [4, 4, 1, 7, 1, 4, 0, 0, 0, 0];
    let once = rank_by_rarity(&values);
    assert_eq!(rank_by_rarity(&values), once);
    assert_eq!(dedup_in_order(&once), once);
}

#[test]
fn test_dedup_keeps_first_occurrence() {
    assert_eq!(dedup_in_order(&[3, 1, 3, 2, 1]), vec![3, 1, 2]);
}

#[test]
fn test_select_from_empty_fails() {
    let mut rng = StdRng::seed_from_u64(1);
    let profile = Difficulty::Level1.profile();
    assert_eq!(
        select_value(&[], &profile, &mut rng),
        Err(DifficultyError::EmptyResultSet)
    );
}

#[test]
fn test_hardest_is_deterministic() {
    let ranked = [17, 4, 9, 2, 11];
    let profile = Difficulty::Level6.profile();
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        assert_eq!(select_value(&ranked, &profile, &mut rng), Ok(17));
    }
}

#[test]
fn test_single_value_always_chosen() {
    for difficulty in Difficulty::ALL {
        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            assert_eq!(select_value(&[42], &difficulty.profile(), &mut rng), Ok(42));
        }
    }
    let full = DifficultyProfile::new(1.0, 3, 1);
    assert!(full.is_ok());
    if let Ok(full) = full {
        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            assert_eq!(select_value(&[42], &full, &mut rng), Ok(42));
        }
    }
}

#[test]
fn test_selection_stays_in_window() {
    let ranked: Vec<i64> = (0..100).collect();
    let profile = Difficulty::Level2.profile();
    // pivot = 40, so indices fall in [20, 60].
    for seed in 0..200 {
        let mut rng = StdRng::seed_from_u64(seed);
        let picked = select_value(&ranked, &profile, &mut rng);
        assert!(matches!(picked, Ok(v) if (20..=60).contains(&v)), "got {:?}", picked);
    }
}

#[test]
fn test_selection_clamps_to_last_index() {
    let ranked = [10, 20, 30];
    let full = DifficultyProfile::new(1.0, 3, 1);
    assert!(full.is_ok());
    if let Ok(full) = full {
        // pivot = 3 can reach index 4 before clamping.
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let picked = select_value(&ranked, &full, &mut rng);
            assert!(matches!(picked, Ok(v) if ranked.contains(&v)));
        }
    }
}

#[test]
fn test_selection_varies_with_randomness() {
    let ranked: Vec<i64> = (0..100).collect();
    let profile = Difficulty::Level1.profile();
    let picks: std::collections::HashSet<i64> = (0..50)
        .filter_map(|seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            select_value(&ranked, &profile, &mut rng).ok()
        })
        .collect();
    assert!(picks.len() > 1);
}
