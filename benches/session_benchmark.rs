//! Benchmarks for turn processing
//!
//! A full play-through of a few hundred turns should stay well under a
//! millisecond.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use startup_sim_core::config::GameConfig;
use startup_sim_core::content::DEFAULT_CATALOG;
use startup_sim_core::engine::GameSession;
use startup_sim_core::model::{Founder, Skills};
use std::sync::Arc;

fn new_game(seed: u64) -> GameSession {
    let config = GameConfig::default().with_seed(seed);
    let founder = Founder::new("Bench", Skills::default(), &config).unwrap();
    let mut session = GameSession::new(Arc::clone(&DEFAULT_CATALOG), config);
    session.start_game(founder, "Benchco", "saas");
    session
}

/// Answer every pending decision with its first option, then move a month
fn play(session: &mut GameSession, turns: usize) {
    for _ in 0..turns {
        let pending: Vec<(String, String)> = session
            .current_decisions()
            .iter()
            .map(|d| (d.id.clone(), d.options[0].id.clone()))
            .collect();
        for (decision, option) in pending {
            session.make_decision(&decision, &option);
        }
        session.next_month();
    }
}

fn benchmark_play_through(c: &mut Criterion) {
    c.bench_function("play_200_turns", |b| {
        b.iter(|| {
            let mut session = new_game(7);
            play(&mut session, black_box(200));
            black_box(session.snapshot())
        })
    });
}

fn benchmark_single_month(c: &mut Criterion) {
    let mut session = new_game(11);
    play(&mut session, 20);

    c.bench_function("next_month", |b| {
        b.iter(|| black_box(session.next_month()))
    });
}

fn benchmark_snapshot(c: &mut Criterion) {
    let mut session = new_game(13);
    play(&mut session, 30);

    c.bench_function("snapshot_json", |b| {
        b.iter(|| black_box(session.snapshot().to_json()))
    });
}

fn benchmark_condition_parsing(c: &mut Criterion) {
    use startup_sim_core::condition::cache::{clear_cache, get_or_parse};
    use startup_sim_core::condition::parser::parse;

    let conditions = [
        "marketValidation>=20",
        "productDevelopment>=30",
        "productDevelopment>=60 & customers>0",
        "customers>=10 | monthlyRevenue>=5000",
        "(cash>0 & monthlyBurn<1000) | brandAwareness>=50",
    ];

    c.bench_function("condition_parsing_cold", |b| {
        b.iter(|| {
            clear_cache();
            for cond in &conditions {
                let _ = black_box(parse(cond));
            }
        })
    });

    c.bench_function("condition_parsing_cached", |b| {
        for cond in &conditions {
            let _ = get_or_parse(cond);
        }

        b.iter(|| {
            for cond in &conditions {
                let _ = black_box(get_or_parse(cond));
            }
        })
    });
}

criterion_group!(
    benches,
    benchmark_play_through,
    benchmark_single_month,
    benchmark_snapshot,
    benchmark_condition_parsing
);
criterion_main!(benches);
