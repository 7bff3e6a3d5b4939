// model = "claude-opus-4-5"
// created = "2026-02-03"
// modified = "2026-02-03"
// driver = "Isaac Clayton"

//! Benchmarks for local editing and remote integration.
//!
//! The integration algorithm pays O(n) positional lookups per recursive
//! step on the flat-array representation, so these mostly characterize how
//! fast that gets painful as documents grow.

use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput,
};
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use weft::site::SiteId;
use weft::woot::op::Op;
use weft::woot::replica::Replica;

// =============================================================================
// Benchmark helpers
// =============================================================================

/// Type `n` characters at the end of the document (forward typing).
fn sequential_forward(doc: &mut Replica, n: usize) {
    for i in 0..n {
        doc.generate_insert(i, 'x').unwrap();
    }
}

/// Type `n` characters at the front of the document (prepend pattern).
fn sequential_prepend(doc: &mut Replica, n: usize) {
    for _ in 0..n {
        doc.generate_insert(0, 'x').unwrap();
    }
}

/// Type `n` characters at seeded random positions.
fn random_positions(doc: &mut Replica, n: usize, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..n {
        let pos = rng.gen_range(0..=doc.visible_len());
        doc.generate_insert(pos, 'x').unwrap();
    }
}

/// An editing session's worth of operations, ready to ship.
fn session_ops(n: usize, seed: u64) -> Vec<Op> {
    let mut author = Replica::new(SiteId(1));
    let mut rng = StdRng::seed_from_u64(seed);
    let mut ops = Vec::with_capacity(n);
    for _ in 0..n {
        let len = author.visible_len();
        if len > 0 && rng.gen_bool(0.25) {
            let pos = rng.gen_range(0..len);
            ops.push(author.generate_delete(pos).unwrap());
        } else {
            let pos = rng.gen_range(0..=len);
            ops.push(author.generate_insert(pos, 'x').unwrap());
        }
    }
    return ops;
}

// =============================================================================
// Local editing
// =============================================================================

fn bench_local_editing(c: &mut Criterion) {
    let mut group = c.benchmark_group("local_editing");

    for size in [100usize, 500, 1000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("forward", size), &size, |b, &n| {
            b.iter(|| {
                let mut doc = Replica::new(SiteId(1));
                sequential_forward(&mut doc, n);
                black_box(doc.value())
            })
        });

        group.bench_with_input(BenchmarkId::new("prepend", size), &size, |b, &n| {
            b.iter(|| {
                let mut doc = Replica::new(SiteId(1));
                sequential_prepend(&mut doc, n);
                black_box(doc.value())
            })
        });

        group.bench_with_input(BenchmarkId::new("random", size), &size, |b, &n| {
            b.iter(|| {
                let mut doc = Replica::new(SiteId(1));
                random_positions(&mut doc, n, 42);
                black_box(doc.value())
            })
        });
    }

    group.finish();
}

// =============================================================================
// Remote integration
// =============================================================================

fn bench_remote_integration(c: &mut Criterion) {
    let mut group = c.benchmark_group("remote_integration");

    for size in [100usize, 500] {
        group.throughput(Throughput::Elements(size as u64));

        // In-order delivery: the pool never holds anything back.
        group.bench_with_input(BenchmarkId::new("in_order", size), &size, |b, &n| {
            let ops = session_ops(n, 42);
            b.iter(|| {
                let mut doc = Replica::new(SiteId(2));
                for op in &ops {
                    doc.receive(op.clone());
                }
                doc.drain().unwrap();
                black_box(doc.value())
            })
        });

        // Reversed delivery: everything waits on the pool until the first
        // operations arrive, so the drain does the heavy lifting.
        group.bench_with_input(BenchmarkId::new("reversed", size), &size, |b, &n| {
            let ops = session_ops(n, 42);
            b.iter(|| {
                let mut doc = Replica::new(SiteId(2));
                for op in ops.iter().rev() {
                    doc.receive(op.clone());
                }
                doc.drain().unwrap();
                black_box(doc.value())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_local_editing, bench_remote_integration);
criterion_main!(benches);
