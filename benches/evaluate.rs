// benches/evaluate.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use scout_score::engine::{evaluate, rank, tiers_for, PlayerRecord, TierWeights};
use scout_score::store::parse_table;
use scout_score::data::records_from_dataset;

/// Synthetic league: `n` forwards with spread-out stats.
fn population(n: usize) -> Vec<PlayerRecord> {
    let metrics = tiers_for("Forwards").map(|t| t.required_metrics()).unwrap_or_default();
    (0..n)
        .map(|i| {
            metrics
                .iter()
                .enumerate()
                .fold(PlayerRecord::new(i, &format!("P{i}"), "FC", "CF"), |r, (k, m)| {
                    r.with_metric(m, ((i * 31 + k * 17) % 97) as f64)
                })
                .with_age(18.0 + (i % 20) as f64)
                .with_minutes(100.0 + (i * 37 % 3000) as f64)
        })
        .collect()
}

fn sheet(n: usize) -> String {
    let mut text = String::from("Player,Team,Age,Minutes played,Position,Goals,xG per shot,Shots on target\n");
    for i in 0..n {
        text.push_str(&format!("Player {i},Team {},{},{},CF,{},{:.2},{}\n", i % 20, 18 + i % 20, i * 37 % 3000, i % 9, (i % 7) as f64 / 10.0, i % 13));
    }
    text
}

fn bench_evaluate(c: &mut Criterion) {
    let players = population(2_000);
    let weights = TierWeights::default();

    c.bench_function("evaluate_forwards_2k", |b| {
        b.iter(|| {
            let mut out = evaluate(black_box(&players), "Forwards", 200, 10_000, 40, weights).unwrap();
            rank(&mut out);
            black_box(out.len())
        })
    });

    let text = sheet(2_000);
    c.bench_function("ingest_sheet_2k", |b| {
        b.iter(|| {
            let ds = parse_table(black_box(&text));
            let recs = records_from_dataset(&ds).unwrap();
            black_box(recs.len())
        })
    });
}

criterion_group!(benches, bench_evaluate);
criterion_main!(benches);
