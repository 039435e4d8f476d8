//! Statistical tests for RandomSource range draws
//!
//! Bounds checks, uniformity over a large sample and a chi-square sanity
//! bound. Fixed seeds keep the assertions stable; the entropy-seeded case
//! uses tolerances wide enough to never flake in practice.

use tutor_core::RandomSource;

use test_utils::{chi_square, seeded_source};

#[test]
fn test_million_draws_are_uniform_over_one_to_hundred() {
    const DRAWS: u64 = 1_000_000;
    let mut source = RandomSource::from_entropy();
    let mut counts = [0u64; 100];
    let mut out_of_range = 0u64;

    for _ in 0..DRAWS {
        let value = source.get(1, 100);
        if (1..=100).contains(&value) {
            counts[(value - 1) as usize] += 1;
        } else {
            out_of_range += 1;
        }
    }

    assert_eq!(out_of_range, 0);
    assert_eq!(counts.iter().sum::<u64>(), DRAWS);
    // sigma is roughly 99.5 per bucket; six sigma keeps this deterministic in practice
    for (index, &count) in counts.iter().enumerate() {
        assert!(
            (9_400..=10_600).contains(&count),
            "value {} drawn {} times",
            index + 1,
            count
        );
    }
}

#[test]
fn test_hundred_thousand_draws_have_no_dominant_value() {
    let mut source = seeded_source();
    let mut counts = [0u64; 10];
    for _ in 0..100_000 {
        counts[source.get(0usize, 9)] += 1;
    }

    // 9 degrees of freedom: the 99.99th percentile is about 33.7
    let statistic = chi_square(&counts);
    assert!(statistic < 34.0, "chi-square {} for {:?}", statistic, counts);

    let max = *counts.iter().max().unwrap();
    let min = *counts.iter().min().unwrap();
    assert!(max - min < 1_000, "spread too wide: {:?}", counts);
}

#[test]
fn test_small_subrange_not_overrepresented() {
    let mut source = seeded_source();
    let mut low_quarter = 0u32;
    for _ in 0..100_000 {
        if source.get(0u32, 999) < 250 {
            low_quarter += 1;
        }
    }
    assert!(
        (24_000..=26_000).contains(&low_quarter),
        "low quarter hit {} times",
        low_quarter
    );
}

#[test]
fn test_signed_range_straddling_zero() {
    let mut source = seeded_source();
    let mut counts = [0u64; 7];
    for _ in 0..70_000 {
        let value = source.get(-3i8, 3i8);
        assert!((-3..=3).contains(&value));
        counts[(value + 3) as usize] += 1;
    }
    assert!(counts.iter().all(|&c| (9_400..=10_600).contains(&c)), "{:?}", counts);
}

#[test]
fn test_every_value_of_tiny_range_is_reachable() {
    let mut source = seeded_source();
    let mut seen = [false; 6];
    for _ in 0..1_000 {
        seen[(source.get(1u8, 6u8) - 1) as usize] = true;
    }
    assert!(seen.iter().all(|&s| s));
}
