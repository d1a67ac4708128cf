//! Strategy builders for MST property-based tests.
//!
//! Provides graph generation strategies that produce varied weight
//! distributions and topologies. Each generator returns an [`MstFixture`]
//! whose edges are all within range, so the fixture graph keeps every edge.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::Edge;

use super::brute_force::MAX_BRUTE_FORCE_EDGES;
use super::types::{MstFixture, WeightDistribution};

/// Minimum vertex count for most generated graphs.
const MIN_VERTICES: usize = 8;
/// Maximum vertex count for most generated graphs.
const MAX_VERTICES: usize = 48;
/// Maximum vertex count for dense graphs.
const DENSE_MAX_VERTICES: usize = 24;
/// Maximum vertex count for the exhaustive-search fixtures.
const TINY_MAX_VERTICES: usize = 6;

/// Generates MST fixtures covering every weight distribution.
pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates tiny graphs small enough for exhaustive search, including
/// self-loops, duplicates, and negative weights.
pub(super) fn tiny_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (1..=TINY_MAX_VERTICES).prop_flat_map(|vertex_count| {
        let edge = (0..vertex_count, 0..vertex_count, -10_i64..=10)
            .prop_map(|(u, v, weight)| Edge::new(u, v, weight));
        prop::collection::vec(edge, 0..=MAX_BRUTE_FORCE_EDGES).prop_map(move |edges| MstFixture {
            vertex_count,
            edges,
            distribution: WeightDistribution::Messy,
        })
    })
}

/// Generates a fixture for a specific weight distribution.
pub(super) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> MstFixture {
    match distribution {
        WeightDistribution::Unique => generate_probabilistic_graph(
            rng,
            MAX_VERTICES,
            (0.2, 0.6),
            distribution,
            |r| r.gen_range(1..=1_000_000),
        ),
        WeightDistribution::ManyIdentical => generate_identical_weights(rng),
        WeightDistribution::Negative => generate_probabilistic_graph(
            rng,
            MAX_VERTICES,
            (0.2, 0.6),
            distribution,
            |r| r.gen_range(-50..=50),
        ),
        WeightDistribution::Sparse => generate_sparse(rng),
        WeightDistribution::Dense => generate_probabilistic_graph(
            rng,
            DENSE_MAX_VERTICES,
            (0.7, 0.95),
            distribution,
            |r| r.gen_range(1..=100),
        ),
        WeightDistribution::Disconnected => generate_disconnected(rng),
        WeightDistribution::Messy => generate_messy(rng),
    }
}

// ── Probabilistic graph helper ──────────────────────────────────────────

/// Adds each vertex pair as an edge with a probability drawn from
/// `edge_prob_range`, using a caller-supplied weight generator.
fn generate_probabilistic_graph(
    rng: &mut SmallRng,
    max_vertices: usize,
    edge_prob_range: (f64, f64),
    distribution: WeightDistribution,
    mut weight_generator: impl FnMut(&mut SmallRng) -> i64,
) -> MstFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=max_vertices);
    let edge_probability: f64 = rng.gen_range(edge_prob_range.0..=edge_prob_range.1);
    let mut edges = Vec::new();

    for u in 0..vertex_count {
        for v in (u + 1)..vertex_count {
            if rng.gen_bool(edge_probability) {
                edges.push(Edge::new(u, v, weight_generator(rng)));
            }
        }
    }

    MstFixture {
        vertex_count,
        edges,
        distribution,
    }
}

// ── Many identical weights ──────────────────────────────────────────────

/// Draws every weight from a pool of one to three values so large groups of
/// edges tie.
fn generate_identical_weights(rng: &mut SmallRng) -> MstFixture {
    let pool_size = rng.gen_range(1..=3);
    let pool: Vec<i64> = (0..pool_size).map(|_| rng.gen_range(1..=10)).collect();

    generate_probabilistic_graph(
        rng,
        MAX_VERTICES,
        (0.3, 0.7),
        WeightDistribution::ManyIdentical,
        move |r| pool[r.gen_range(0..pool.len())],
    )
}

// ── Sparse ──────────────────────────────────────────────────────────────

/// Builds a random path through a shuffled vertex order (guaranteeing
/// connectivity) and then adds roughly `0.5n` to `n` extra edges.
fn generate_sparse(rng: &mut SmallRng) -> MstFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let mut edges = Vec::new();

    let mut order: Vec<usize> = (0..vertex_count).collect();
    shuffle(&mut order, rng);
    for pair in order.windows(2) {
        edges.push(Edge::new(pair[0], pair[1], rng.gen_range(1..=100)));
    }

    let extra_count = rng.gen_range(vertex_count / 2..=vertex_count);
    for _ in 0..extra_count {
        let u = rng.gen_range(0..vertex_count);
        let v = rng.gen_range(0..vertex_count);
        if u != v {
            edges.push(Edge::new(u, v, rng.gen_range(1..=100)));
        }
    }

    MstFixture {
        vertex_count,
        edges,
        distribution: WeightDistribution::Sparse,
    }
}

// ── Disconnected ────────────────────────────────────────────────────────

/// Builds two to five components (singletons allowed) with no
/// cross-component edges.
fn generate_disconnected(rng: &mut SmallRng) -> MstFixture {
    let component_count = rng.gen_range(2..=5);
    let sizes: Vec<usize> = (0..component_count).map(|_| rng.gen_range(1..=10)).collect();
    let vertex_count: usize = sizes.iter().sum();
    let mut edges = Vec::new();
    let mut offset = 0;

    for size in sizes {
        let edge_probability: f64 = rng.gen_range(0.3..=0.8);
        for u in 0..size {
            for v in (u + 1)..size {
                if rng.gen_bool(edge_probability) {
                    edges.push(Edge::new(offset + u, offset + v, rng.gen_range(1..=100)));
                }
            }
        }
        offset += size;
    }

    MstFixture {
        vertex_count,
        edges,
        distribution: WeightDistribution::Disconnected,
    }
}

// ── Messy ───────────────────────────────────────────────────────────────

/// Draws endpoints independently, so the graph has self-loops, repeated
/// edges, and isolated vertices.
fn generate_messy(rng: &mut SmallRng) -> MstFixture {
    let vertex_count = rng.gen_range(1..=20);
    let edge_count = rng.gen_range(0..=60);
    let mut edges: Vec<Edge> = Vec::with_capacity(edge_count);

    for _ in 0..edge_count {
        if !edges.is_empty() && rng.gen_bool(0.1) {
            let repeated = edges[rng.gen_range(0..edges.len())];
            edges.push(repeated);
            continue;
        }
        let u = rng.gen_range(0..vertex_count);
        let v = rng.gen_range(0..vertex_count);
        edges.push(Edge::new(u, v, rng.gen_range(-20..=20)));
    }

    MstFixture {
        vertex_count,
        edges,
        distribution: WeightDistribution::Messy,
    }
}

/// Fisher-Yates shuffle using the provided RNG.
fn shuffle(slice: &mut [usize], rng: &mut SmallRng) {
    for i in (1..slice.len()).rev() {
        let j = rng.gen_range(0..=i);
        slice.swap(i, j);
    }
}
