//! Playback benchmarks.
//!
//! A full tutorial run on the virtual clock is pure computation, so this
//! measures the engine overhead per run: timer scheduling, dispatch, and
//! per-character input assembly.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use termtutor::prelude::*;

struct NullHost {
    executed: usize,
}

impl TerminalHost for NullHost {
    fn on_type_start(&mut self) {}
    fn on_type_complete(&mut self) {}
    fn on_input_change(&mut self, input: &str) {
        black_box(input);
    }
    fn on_execute_command(&mut self, command: &str) {
        black_box(command);
        self.executed += 1;
    }
    fn on_step_change(&mut self, _index: usize) {}
    fn on_tutorial_complete(&mut self) {}
}

fn script_of(n: usize) -> Script {
    let steps = (0..n)
        .map(|i| TutorialStep {
            command: format!("command-{i}"),
            delay_ms: 500,
            message: String::new(),
            tip: String::new(),
        })
        .collect();
    Script::new("bench", steps)
}

/// Full virtual-clock run, varying script length.
fn bench_full_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_run");

    for n in [1usize, 8, 64].iter() {
        group.bench_with_input(BenchmarkId::new("steps", n), n, |b, &n| {
            let script = script_of(n);
            b.iter(|| {
                let mut seq = Sequencer::new(script.clone(), TimingConfig::default());
                let mut host = NullHost { executed: 0 };
                seq.start(&mut host);
                while seq.is_running() {
                    seq.advance(&mut host, 1000);
                }
                black_box(host.executed)
            });
        });
    }

    group.finish();
}

/// Fine-grained advance: many small windows instead of few large ones.
fn bench_fine_advance(c: &mut Criterion) {
    c.bench_function("fine_advance_1ms", |b| {
        let script = script_of(4);
        b.iter(|| {
            let mut seq = Sequencer::new(script.clone(), TimingConfig::default());
            let mut host = NullHost { executed: 0 };
            seq.start(&mut host);
            while seq.is_running() {
                seq.advance(&mut host, 1);
            }
            black_box(host.executed)
        });
    });
}

criterion_group!(benches, bench_full_run, bench_fine_advance);
criterion_main!(benches);
