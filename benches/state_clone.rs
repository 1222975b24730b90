//! Cost of undo snapshots as the round history grows.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use time::OffsetDateTime;
use trix_scorekeeper::core::{Game, ScoreState, ScorekeeperConfig, Seats};
use trix_scorekeeper::engine::{FixedClock, ScoreEngine};
use trix_scorekeeper::rules::Subtype;
use trix_scorekeeper::undo::UndoManager;

fn state_with_rounds(rounds: usize) -> ScoreState {
    let engine = ScoreEngine::with_clock(
        ScorekeeperConfig::default().default_names,
        FixedClock(OffsetDateTime::UNIX_EPOCH),
    );
    let mut state = ScoreState::default();
    for i in 0..rounds {
        let raw = Seats::from([i as i64, 0, -(i as i64), 10]);
        engine
            .add_round(&mut state, Game::FourHundred, Subtype::Manual, raw, None)
            .expect("manual rounds are always valid");
    }
    state
}

fn bench_push_snapshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_snapshot");
    for rounds in [0usize, 10, 100, 1_000] {
        let state = state_with_rounds(rounds);
        group.bench_with_input(BenchmarkId::from_parameter(rounds), &state, |b, state| {
            let mut undo = UndoManager::default();
            b.iter(|| {
                undo.push_snapshot(black_box(state));
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_push_snapshot);
criterion_main!(benches);
