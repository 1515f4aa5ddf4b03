//! Strategy builders for spanning-forest property tests.
//!
//! Every generator draws from a seeded [`SmallRng`] so a failing case can
//! be replayed from its proptest seed alone. Sizes stay modest because
//! Reverse-Delete is quadratic.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::graph::Edge;

use super::types::{MstFixture, WeightDistribution};

/// Minimum vertex count for most generated graphs.
const MIN_VERTICES: usize = 2;
/// Maximum vertex count for most generated graphs.
const MAX_VERTICES: usize = 40;
/// Maximum vertex count for dense graphs.
const DENSE_MAX_VERTICES: usize = 24;

/// Generates fixtures across every weight distribution.
pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates a fixture for a specific weight distribution.
pub(super) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> MstFixture {
    match distribution {
        WeightDistribution::Unique => generate_continuous(rng, MAX_VERTICES, (0.2, 0.6), distribution),
        WeightDistribution::ManyIdentical => generate_identical_weights(rng),
        WeightDistribution::Sparse => generate_sparse(rng),
        WeightDistribution::Dense => {
            generate_continuous(rng, DENSE_MAX_VERTICES, (0.7, 0.95), distribution)
        }
        WeightDistribution::Disconnected => generate_disconnected(rng),
        WeightDistribution::Multigraph => generate_multigraph(rng),
    }
}

// ── Probabilistic graphs ────────────────────────────────────────────────

/// Adds each unordered vertex pair with a probability drawn from
/// `edge_prob_range`, weighting it with `weight`.
fn generate_probabilistic(
    rng: &mut SmallRng,
    max_vertices: usize,
    edge_prob_range: (f64, f64),
    distribution: WeightDistribution,
    mut weight: impl FnMut(&mut SmallRng) -> f64,
) -> MstFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=max_vertices);
    let edge_probability: f64 = rng.gen_range(edge_prob_range.0..=edge_prob_range.1);
    let mut edges = Vec::new();
    for (source, target) in all_pairs(0, vertex_count) {
        if rng.gen_bool(edge_probability) {
            let (source, target) = maybe_flip(source, target, rng);
            edges.push(Edge::new(source, target, weight(rng)));
        }
    }
    MstFixture {
        vertex_count,
        edges,
        distribution,
    }
}

fn generate_continuous(
    rng: &mut SmallRng,
    max_vertices: usize,
    edge_prob_range: (f64, f64),
    distribution: WeightDistribution,
) -> MstFixture {
    generate_probabilistic(rng, max_vertices, edge_prob_range, distribution, |r| {
        r.gen_range(0.1..100.0)
    })
}

/// Draws every weight from a pool of one to three small integers, so most
/// comparisons fall through to the edge id.
fn generate_identical_weights(rng: &mut SmallRng) -> MstFixture {
    let pool_size = rng.gen_range(1..=3);
    let pool: Vec<f64> = (0..pool_size)
        .map(|_| f64::from(rng.gen_range(0_u8..=10)))
        .collect();
    generate_probabilistic(
        rng,
        MAX_VERTICES,
        (0.3, 0.7),
        WeightDistribution::ManyIdentical,
        move |r| pool[r.gen_range(0..pool.len())],
    )
}

// ── Sparse ──────────────────────────────────────────────────────────────

/// Builds a random spanning path over a shuffled vertex order, then adds a
/// few extra random edges.
fn generate_sparse(rng: &mut SmallRng) -> MstFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let mut order: Vec<usize> = (0..vertex_count).collect();
    shuffle(&mut order, rng);

    let mut edges: Vec<Edge> = order
        .windows(2)
        .map(|pair| Edge::new(pair[0], pair[1], rng.gen_range(0.1..100.0)))
        .collect();

    let extra = rng.gen_range(vertex_count / 2..=vertex_count);
    for _ in 0..extra {
        let source = rng.gen_range(0..vertex_count);
        let target = rng.gen_range(0..vertex_count);
        if source != target {
            edges.push(Edge::new(source, target, rng.gen_range(0.1..100.0)));
        }
    }

    MstFixture {
        vertex_count,
        edges,
        distribution: WeightDistribution::Sparse,
    }
}

// ── Disconnected ────────────────────────────────────────────────────────

/// Builds two to five components of one to twelve vertices each, plus the
/// occasional isolated vertex.
fn generate_disconnected(rng: &mut SmallRng) -> MstFixture {
    let sizes: Vec<usize> = (0..rng.gen_range(2..=5))
        .map(|_| rng.gen_range(1..=12))
        .collect();
    let mut edges = Vec::new();
    let mut offset = 0;

    for &size in &sizes {
        let edge_probability: f64 = rng.gen_range(0.3..=0.8);
        let start = edges.len();
        for (source, target) in all_pairs(offset, size) {
            if rng.gen_bool(edge_probability) {
                edges.push(Edge::new(source, target, rng.gen_range(0.1..100.0)));
            }
        }
        if size >= 2 && edges.len() == start {
            edges.push(Edge::new(offset, offset + 1, rng.gen_range(0.1..100.0)));
        }
        offset += size;
    }

    MstFixture {
        vertex_count: offset,
        edges,
        distribution: WeightDistribution::Disconnected,
    }
}

// ── Multigraph ──────────────────────────────────────────────────────────

/// Repeats random vertex pairs so many endpoints carry two or more
/// parallel edges.
fn generate_multigraph(rng: &mut SmallRng) -> MstFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES / 2);
    let edge_count = rng.gen_range(vertex_count..=vertex_count * 4);
    let mut edges = Vec::with_capacity(edge_count);
    for _ in 0..edge_count {
        let source = rng.gen_range(0..vertex_count);
        let target = (source + rng.gen_range(1..vertex_count)) % vertex_count;
        let copies = rng.gen_range(1..=3);
        for _ in 0..copies {
            edges.push(Edge::new(source, target, f64::from(rng.gen_range(1_u8..=4))));
        }
    }
    MstFixture {
        vertex_count,
        edges,
        distribution: WeightDistribution::Multigraph,
    }
}

// ── Helpers ─────────────────────────────────────────────────────────────

/// Returns every pair `(offset + i, offset + j)` with `i < j < size`.
fn all_pairs(offset: usize, size: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..size).flat_map(move |i| ((i + 1)..size).map(move |j| (offset + i, offset + j)))
}

/// Randomly swaps endpoints so the engines see both orientations.
fn maybe_flip(source: usize, target: usize, rng: &mut SmallRng) -> (usize, usize) {
    if rng.gen_bool(0.5) { (target, source) } else { (source, target) }
}

/// Fisher-Yates shuffle using the provided RNG.
fn shuffle(slice: &mut [usize], rng: &mut SmallRng) {
    for i in (1..slice.len()).rev() {
        let j = rng.gen_range(0..=i);
        slice.swap(i, j);
    }
}

impl proptest::arbitrary::Arbitrary for WeightDistribution {
    type Parameters = ();
    type Strategy = proptest::strategy::TupleUnion<(
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
    )>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            2 => Just(Self::Unique),
            3 => Just(Self::ManyIdentical),
            2 => Just(Self::Sparse),
            1 => Just(Self::Dense),
            2 => Just(Self::Disconnected),
            2 => Just(Self::Multigraph),
        ]
    }
}
