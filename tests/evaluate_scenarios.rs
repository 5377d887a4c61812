// tests/evaluate_scenarios.rs
use scout_score::engine::{
    evaluate, rank, tiers_for, Evaluation, EvaluationError, Impact, NormalizationPolicy,
    PlayerRecord, Taxonomy, Thresholds, TierWeights,
};

const FORWARD_METRICS: [&str; 9] = [
    "Goals", "xG per shot", "Shots on target",
    "Assists", "Chances created", "Key passes",
    "Passes", "Passes into the penalty box", "xG conversion",
];

fn forward(row: usize, name: &str, age: f64, minutes: f64, v: f64) -> PlayerRecord {
    FORWARD_METRICS
        .iter()
        .fold(PlayerRecord::new(row, name, "FC Test", "CF"), |r, m| r.with_metric(m, v))
        .with_age(age)
        .with_minutes(minutes)
}

fn default_weights() -> TierWeights {
    TierWeights::new(0.6, 0.3, 0.1)
}

#[test]
fn best_and_worst_forward_span_the_scale() {
    let players = vec![
        forward(0, "Striker A", 24.0, 1500.0, 10.0),
        forward(1, "Striker B", 27.0, 900.0, 2.0),
    ];

    let mut out = evaluate(&players, "Forwards", 200, 10_000, 40, default_weights()).unwrap();
    rank(&mut out);

    assert_eq!(out.len(), 2);
    assert_eq!(out[0].name, "Striker A");
    assert!((out[0].final_score - 10.0).abs() < 1e-9);
    assert_eq!(out[0].tiers, [Some(10.0), Some(10.0), Some(10.0)]);
    assert_eq!(out[1].final_score, 0.0);

    match out[0].impact {
        Impact::Defined(v) => assert!((v - 10.0 / 1500.0 * 1000.0).abs() < 1e-9),
        Impact::Undefined => panic!("impact should be defined"),
    }
}

#[test]
fn primary_tier_outweighs_the_other_two() {
    let (tier1, rest) = FORWARD_METRICS.split_at(3);
    let a = tier1
        .iter()
        .fold(PlayerRecord::new(0, "A", "FC", "CF"), |r, m| r.with_metric(m, 9.0));
    let a = rest.iter().fold(a, |r, m| r.with_metric(m, 1.0)).with_age(25.0).with_minutes(1000.0);
    let b = tier1
        .iter()
        .fold(PlayerRecord::new(1, "B", "FC", "CF"), |r, m| r.with_metric(m, 1.0));
    let b = rest.iter().fold(b, |r, m| r.with_metric(m, 9.0)).with_age(25.0).with_minutes(1000.0);

    let out = evaluate(&[a, b], "Forwards", 0, 10_000, 40, default_weights()).unwrap();
    assert!((out[0].final_score - 6.0).abs() < 1e-9);
    assert!((out[1].final_score - 4.0).abs() < 1e-9);
    assert!(out[0].final_score > out[1].final_score);
}

#[test]
fn zero_minutes_player_is_scored_without_impact() {
    let players = vec![
        forward(0, "Bench", 22.0, 0.0, 8.0),
        forward(1, "Starter", 26.0, 2000.0, 2.0),
    ];
    let out = evaluate(&players, "Forwards", 0, 10_000, 40, default_weights()).unwrap();

    assert_eq!(out[0].name, "Bench");
    assert_eq!(out[0].impact, Impact::Undefined);
    assert_eq!(
        out[0].impact_per_minute(),
        Err(EvaluationError::UndefinedImpact { player: "Bench".into() })
    );
    assert_eq!(out[1].impact_per_minute(), Ok(0.0));
}

#[test]
fn huge_opposite_sign_cells_rank_the_maximum_first() {
    let players: Vec<PlayerRecord> = (0..40)
        .map(|i| {
            let cell = match i {
                0 => "-1e308".to_string(),
                1 => "1e308".to_string(),
                n => n.to_string(),
            };
            FORWARD_METRICS
                .iter()
                .fold(PlayerRecord::new(i, &format!("P{i}"), "FC", "CF"), |r, m| r.with_metric(m, cell.as_str()))
                .with_age(25.0)
                .with_minutes(1000.0)
        })
        .collect();

    let mut out = evaluate(&players, "Forwards", 0, 10_000, 40, default_weights()).unwrap();
    assert!(out.iter().all(|p| p.final_score.is_finite() && (0.0..=10.0 + 1e-9).contains(&p.final_score)));
    rank(&mut out);
    assert_eq!(out[0].name, "P1");
    assert!((out[0].final_score - 10.0).abs() < 1e-9);
    assert_eq!(out.last().unwrap().name, "P0");
}

#[test]
fn missing_metric_column_is_reported_by_name() {
    let players: Vec<PlayerRecord> = (0..3)
        .map(|i| {
            let mut r = forward(i, &format!("P{i}"), 25.0, 1000.0, i as f64);
            r.metrics.remove("Goals");
            r
        })
        .collect();

    let err = evaluate(&players, "Forwards", 0, 10_000, 40, default_weights()).unwrap_err();
    assert_eq!(
        err,
        EvaluationError::MissingMetric { group: "Forwards".into(), metrics: vec!["Goals".into()] }
    );
    assert!(err.is_fatal());
}

#[test]
fn nobody_passes_a_zero_age_limit() {
    let players = vec![forward(0, "A", 21.0, 1000.0, 1.0)];
    let err = evaluate(&players, "Forwards", 0, 10_000, 0, default_weights()).unwrap_err();
    assert!(matches!(err, EvaluationError::NoEligiblePlayers { max_age: 0, .. }));
    assert!(!err.is_fatal());
}

#[test]
fn equal_weights_are_renormalized() {
    let players = vec![
        forward(0, "A", 24.0, 1000.0, 6.0),
        forward(1, "B", 24.0, 1000.0, 3.0),
        forward(2, "C", 24.0, 1000.0, 0.0),
    ];
    let thirds = evaluate(&players, "Forwards", 0, 10_000, 40, TierWeights::new(0.5, 0.5, 0.5)).unwrap();
    let explicit = evaluate(&players, "Forwards", 0, 10_000, 40, TierWeights::new(1.0, 1.0, 1.0)).unwrap();

    for (a, b) in thirds.iter().zip(&explicit) {
        assert!((a.final_score - b.final_score).abs() < 1e-12);
    }
    assert!((thirds[1].final_score - 5.0).abs() < 1e-9);
}

#[test]
fn negative_or_zero_weights_are_rejected() {
    let players = vec![forward(0, "A", 24.0, 1000.0, 1.0)];
    for w in [TierWeights::new(-0.2, 0.6, 0.6), TierWeights::new(0.0, 0.0, 0.0)] {
        let err = evaluate(&players, "Forwards", 0, 10_000, 40, w).unwrap_err();
        assert!(matches!(err, EvaluationError::InvalidWeights { .. }), "{err:?}");
    }
}

#[test]
fn unknown_group_fails_before_anything_else() {
    let err = evaluate(&[], "Sweepers", 0, 10_000, 40, TierWeights::new(-1.0, 0.0, 0.0)).unwrap_err();
    assert_eq!(err, EvaluationError::UnknownPositionGroup { group: "Sweepers".into() });
}

#[test]
fn thresholds_are_inclusive_and_intersected() {
    let players = vec![
        forward(0, "Exact min", 30.0, 200.0, 1.0),
        forward(1, "Exact max", 30.0, 3000.0, 2.0),
        forward(2, "Too few", 30.0, 199.0, 3.0),
        forward(3, "Too old", 31.0, 1000.0, 4.0),
        forward(4, "Exact age", 30.0, 1000.0, 5.0),
        PlayerRecord::new(5, "No age", "FC", "CF").with_minutes(1000.0),
    ];

    let out = evaluate(&players, "Forwards", 200, 3000, 30, default_weights()).unwrap();
    let names: Vec<&str> = out.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Exact min", "Exact max", "Exact age"]);
}

#[test]
fn only_group_positions_are_scored() {
    let players = vec![
        forward(0, "CF", 24.0, 1000.0, 1.0),
        FORWARD_METRICS
            .iter()
            .fold(PlayerRecord::new(1, "Winger", "FC", "LM"), |r, m| r.with_metric(m, 9.0))
            .with_age(24.0)
            .with_minutes(1000.0),
    ];
    let out = evaluate(&players, "Forwards", 0, 10_000, 40, default_weights()).unwrap();
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].position, "CF");
}

#[test]
fn repeated_runs_are_identical() {
    let players: Vec<PlayerRecord> = (0..20)
        .map(|i| forward(i, &format!("P{i}"), 20.0 + (i % 7) as f64, 300.0 + 97.0 * i as f64, (i * 13 % 11) as f64))
        .collect();
    let a = evaluate(&players, "Forwards", 0, 10_000, 40, default_weights()).unwrap();
    let b = evaluate(&players, "Forwards", 0, 10_000, 40, default_weights()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn ties_keep_input_order_after_ranking() {
    let players = vec![
        forward(0, "First", 24.0, 1000.0, 5.0),
        forward(1, "Second", 24.0, 1000.0, 5.0),
        forward(2, "Low", 24.0, 1000.0, 0.0),
    ];
    let mut out = evaluate(&players, "Forwards", 0, 10_000, 40, default_weights()).unwrap();
    rank(&mut out);
    let names: Vec<&str> = out.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["First", "Second", "Low"]);
}

#[test]
fn blank_cells_drop_out_of_tier_averages() {
    let mut a = forward(0, "A", 24.0, 1000.0, 10.0);
    let b = forward(1, "B", 24.0, 1000.0, 0.0);
    // Tier 3 entirely blank for A: its weight goes to tiers 1 and 2.
    for m in ["Passes", "Passes into the penalty box", "xG conversion"] {
        a = a.with_metric(m, "");
    }
    let out = evaluate(&[a, b], "Forwards", 0, 10_000, 40, default_weights()).unwrap();
    assert_eq!(out[0].tiers[2], None);
    assert!((out[0].final_score - 10.0).abs() < 1e-9);
}

#[test]
fn legacy_taxonomy_scores_full_backs() {
    let spec = tiers_for("Right Backs").unwrap();
    let players: Vec<PlayerRecord> = ["LD", "RD"]
        .iter()
        .enumerate()
        .map(|(i, pos)| {
            spec.required_metrics()
                .iter()
                .fold(PlayerRecord::new(i, pos, "FC", pos), |r, m| r.with_metric(m, i as f64))
                .with_age(25.0)
                .with_minutes(900.0)
        })
        .collect();

    let legacy = Evaluation::new(Taxonomy::legacy(), NormalizationPolicy::MinMax);
    let limits = Thresholds { min_minutes: 0, max_minutes: 10_000, max_age: 40 };
    let out = legacy.run(&players, "Full Backs", limits, default_weights()).unwrap();
    assert_eq!(out.len(), 2);

    let current = Evaluation::default().run(&players, "Full Backs", limits, default_weights());
    assert!(matches!(current, Err(EvaluationError::UnknownPositionGroup { .. })));
}
