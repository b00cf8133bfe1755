// rust/engine/benches/queue_core_bench.rs
#![forbid(unsafe_code)]

/**
 * Queue micro-benchmarks.
 *
 * Focus:
 * - Steady-state play/insert cycle on a full queue (the console loop's hot path)
 * - Snapshot cost for panel rendering
 */
use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use tetris_stack_engine::{DEFAULT_CAPACITY, PieceGenerator, PieceQueue, PieceRuleKind};

fn full_queue(seed: u64) -> (PieceQueue, PieceGenerator) {
    let mut q = PieceQueue::new(DEFAULT_CAPACITY).unwrap();
    let mut g = PieceGenerator::new_with_rule(seed, PieceRuleKind::Bag7);
    while !q.is_full() {
        q.enqueue(g.generate()).unwrap();
    }
    (q, g)
}

fn bench_play_insert_cycle(c: &mut Criterion) {
    c.bench_function("queue.dequeue_enqueue_cycle", |b| {
        b.iter_batched(
            || full_queue(20260228),
            |(mut q, mut g)| {
                for _ in 0..256 {
                    black_box(q.dequeue().unwrap());
                    black_box(q.enqueue(g.generate()).unwrap());
                }
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let (q, _) = full_queue(777);
    c.bench_function("queue.snapshot", |b| b.iter(|| black_box(q.snapshot())));
}

criterion_group!(queue_core_benches, bench_play_insert_cycle, bench_snapshot);
criterion_main!(queue_core_benches);
