//! Snapshot benchmarks.
//!
//! Measures partition materialisation at several prefixes of one synthetic
//! stream, with the full node universe supplied so unreached nodes are
//! included as singletons.
#![expect(
    missing_docs,
    reason = "Criterion macros generate items without doc comments"
)]
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use percolate_benches::{
    error::BenchSetupError,
    source::{SyntheticConfig, SyntheticNetwork},
};
use percolate_core::PercolationBuilder;

const SEED: u64 = 7;
const NODES: usize = 20_000;
const EDGES: usize = 40_000;
const PREFIXES: &[usize] = &[1_000, 10_000, 40_000];

fn snapshot_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let network = SyntheticNetwork::generate(&SyntheticConfig {
        node_count: NODES,
        edge_count: EDGES,
        seed: SEED,
    })?;
    let universe = network.universe();
    let engine = PercolationBuilder::new().build()?;

    let mut group = c.benchmark_group("snapshot");
    group.sample_size(20);
    for &prefix in PREFIXES {
        group.bench_with_input(BenchmarkId::from_parameter(prefix), &prefix, |b, &prefix| {
            b.iter(|| engine.snapshot(network.edges(), Some(prefix), Some(universe.as_slice())));
        });
    }
    group.finish();
    Ok(())
}

fn snapshot(c: &mut Criterion) {
    if let Err(err) = snapshot_impl(c) {
        panic!("snapshot benchmark setup failed: {err}");
    }
}

criterion_group!(benches, snapshot);
criterion_main!(benches);
