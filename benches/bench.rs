use conway_manifolds::{next_generation, Grid, Topology};
use criterion::{criterion_group, criterion_main, Criterion};

const SIDE: usize = 128;
const SEED: u64 = 42;

fn topologies(c: &mut Criterion) {
    let grid = Grid::random(SIDE, SIDE, Some(SEED), 0.3).unwrap();
    for topology in [Topology::FLAT, Topology::KLEIN, Topology::TORUS] {
        c.bench_function(&format!("{}_{}x{}", topology, SIDE, SIDE), |b| {
            b.iter(|| next_generation(&grid, topology))
        });
    }
}

criterion_group!(benches, topologies);
criterion_main!(benches);
