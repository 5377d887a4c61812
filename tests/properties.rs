// tests/properties.rs
use proptest::prelude::*;

use scout_score::engine::filter::{filter_players, Thresholds};
use scout_score::engine::normalize::{rescale, SCALE_MAX};
use scout_score::engine::scorer::final_score;
use scout_score::engine::{NormalizationPolicy, PlayerRecord, TierWeights};

fn column() -> impl Strategy<Value = Vec<Option<f64>>> {
    let cell = prop_oneof![
        -1_000.0..1_000.0f64,
        f64::MIN / 2.0..f64::MAX / 2.0,
        prop::sample::select(vec![f64::MIN, f64::MAX, 0.0]),
    ];
    prop::collection::vec(prop::option::weighted(0.85, cell), 1..40)
}

proptest! {
    #[test]
    fn minmax_stays_on_scale(values in column()) {
        let out = rescale(&values, NormalizationPolicy::MinMax);
        prop_assert_eq!(out.len(), values.len());
        for (v, o) in values.iter().zip(&out) {
            // absent in, absent out
            prop_assert_eq!(v.is_some(), o.is_some());
            if let Some(o) = o {
                prop_assert!((0.0..=SCALE_MAX).contains(o));
            }
        }
        // column maximum lands exactly on the top of the scale
        let max = values.iter().flatten().copied().fold(f64::NEG_INFINITY, f64::max);
        let min = values.iter().flatten().copied().fold(f64::INFINITY, f64::min);
        if max / 2.0 > min / 2.0 {
            for (v, o) in values.iter().zip(&out) {
                if *v == Some(max) { prop_assert_eq!(*o, Some(SCALE_MAX)); }
            }
        }
    }

    #[test]
    fn minmax_pins_extremes(values in prop::collection::vec(-500.0..500.0f64, 2..30)) {
        let input: Vec<Option<f64>> = values.iter().copied().map(Some).collect();
        let out: Vec<f64> = rescale(&input, NormalizationPolicy::MinMax).into_iter().flatten().collect();

        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        for (v, o) in values.iter().zip(&out) {
            if max / 2.0 > min / 2.0 {
                if *v == max { prop_assert!((o - SCALE_MAX).abs() < 1e-9); }
                if *v == min { prop_assert!(o.abs() < 1e-9); }
            } else {
                prop_assert_eq!(*o, 0.0);
            }
        }
    }

    #[test]
    fn renormalized_weights_sum_to_one(a in 0.0..5.0f64, b in 0.0..5.0f64, c in 0.001..5.0f64) {
        let w = TierWeights::new(a, b, c).renormalized().unwrap();
        prop_assert!((w.sum() - 1.0).abs() < 1e-9);
        // Idempotent once normalized
        let again = w.renormalized().unwrap();
        prop_assert!((again.tier1 - w.tier1).abs() < 1e-12);
        prop_assert!((again.tier3 - w.tier3).abs() < 1e-12);
    }

    #[test]
    fn final_score_stays_on_scale(
        t in prop::array::uniform3(prop::option::of(0.0..=SCALE_MAX)),
        a in 0.0..1.0f64, b in 0.0..1.0f64, c in 0.01..1.0f64
    ) {
        let w = TierWeights::new(a, b, c).renormalized().unwrap();
        let s = final_score(&t, &w);
        prop_assert!(s >= 0.0 && s <= SCALE_MAX + 1e-9);
    }

    #[test]
    fn filter_keeps_exactly_admitted_players(
        people in prop::collection::vec((prop::sample::select(vec!["CF", "LM", "GK"]), 15.0..45.0f64, 0.0..4000.0f64), 0..40),
        min in 0u32..2000, span in 0u32..3000, max_age in 15u32..45
    ) {
        let players: Vec<PlayerRecord> = people
            .iter()
            .enumerate()
            .map(|(i, (pos, age, mins))| {
                PlayerRecord::new(i, "p", "t", pos).with_age(age.floor()).with_minutes(mins.floor())
            })
            .collect();
        let limits = Thresholds { min_minutes: min, max_minutes: min + span, max_age };

        let kept: Vec<usize> = filter_players(&players, &["CF"], limits).iter().map(|p| p.row).collect();
        let expected: Vec<usize> = players
            .iter()
            .filter(|p| {
                let (a, m) = (p.age.unwrap(), p.minutes.unwrap());
                p.position == "CF" && m >= min as f64 && m <= (min + span) as f64 && a <= max_age as f64
            })
            .map(|p| p.row)
            .collect();
        prop_assert_eq!(kept, expected);
    }
}
