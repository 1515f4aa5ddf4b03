//! Seeded synthetic graph generators for benchmarking.
//!
//! Each component is a random recursive tree (vertex `v` attaches to a
//! uniformly chosen earlier vertex of its block) topped up with uniformly
//! random extra edges inside the block. Edge order is shuffled so edge ids
//! carry no structural information.

mod errors;

pub use errors::SyntheticError;

use rand::{Rng, SeedableRng, rngs::SmallRng, seq::SliceRandom};
use spanwood_core::{Edge, Graph, VertexId};

/// How synthetic edge weights are drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WeightProfile {
    /// Uniform in `[0, max)`; ties are practically absent.
    Continuous {
        /// Exclusive upper bound, finite and positive.
        max: f64,
    },
    /// Uniform integers in `1..=levels`; few levels force many ties.
    Discrete {
        /// Number of distinct weights, at least 1.
        levels: u32,
    },
}

/// Configuration for [`SyntheticGraph::generate`].
#[derive(Clone, Debug)]
pub struct SyntheticGraphConfig {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Edges added on top of the spanning trees.
    pub extra_edges: usize,
    /// Number of connected components.
    pub components: usize,
    /// Weight distribution.
    pub weights: WeightProfile,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

impl SyntheticGraphConfig {
    /// A connected graph with `vertex_count * average_degree / 2` edges and
    /// continuous weights in `[0, 1)`.
    #[must_use]
    pub fn connected(vertex_count: usize, average_degree: usize, seed: u64) -> Self {
        let total = vertex_count.saturating_mul(average_degree) / 2;
        Self {
            vertex_count,
            extra_edges: total.saturating_sub(vertex_count.saturating_sub(1)),
            components: 1,
            weights: WeightProfile::Continuous { max: 1.0 },
            seed,
        }
    }
}

/// Namespace for the synthetic graph generator.
#[derive(Clone, Copy, Debug)]
pub struct SyntheticGraph;

impl SyntheticGraph {
    /// Generates a graph with exactly `components` connected components and
    /// `vertex_count - components + extra_edges` edges.
    ///
    /// # Errors
    /// Returns [`SyntheticError`] when the configuration is invalid.
    pub fn generate(config: &SyntheticGraphConfig) -> Result<Graph, SyntheticError> {
        validate(config)?;
        let mut rng = SmallRng::seed_from_u64(config.seed);
        let blocks = block_bounds(config.vertex_count, config.components);

        let mut edges = Vec::with_capacity(
            config
                .vertex_count
                .saturating_sub(config.components)
                .saturating_add(config.extra_edges),
        );
        for &(low, high) in &blocks {
            for vertex in (low + 1)..high {
                let parent = rng.gen_range(low..vertex);
                edges.push(Edge::new(parent, vertex, draw_weight(config.weights, &mut rng)));
            }
        }

        let multi: Vec<(VertexId, VertexId)> = blocks
            .into_iter()
            .filter(|&(low, high)| high - low >= 2)
            .collect();
        for _ in 0..config.extra_edges {
            let Some(&(low, high)) = multi.choose(&mut rng) else {
                break;
            };
            let source = rng.gen_range(low..high);
            let mut target = rng.gen_range(low..(high - 1));
            if target >= source {
                target += 1;
            }
            edges.push(Edge::new(source, target, draw_weight(config.weights, &mut rng)));
        }

        edges.shuffle(&mut rng);
        Ok(Graph::load(config.vertex_count, edges)?)
    }
}

fn validate(config: &SyntheticGraphConfig) -> Result<(), SyntheticError> {
    if config.vertex_count == 0 {
        return Err(SyntheticError::ZeroVertices);
    }
    if config.components == 0 {
        return Err(SyntheticError::ZeroComponents);
    }
    if config.components > config.vertex_count {
        return Err(SyntheticError::ComponentCountExceedsVertexCount {
            components: config.components,
            vertex_count: config.vertex_count,
        });
    }
    match config.weights {
        WeightProfile::Continuous { max } if !max.is_finite() || max <= 0.0 => {
            Err(SyntheticError::InvalidWeightParameter { parameter: "max" })
        }
        WeightProfile::Discrete { levels: 0 } => {
            Err(SyntheticError::InvalidWeightParameter { parameter: "levels" })
        }
        WeightProfile::Continuous { .. } | WeightProfile::Discrete { .. } => Ok(()),
    }
}

/// Splits `0..vertex_count` into `components` contiguous, non-empty blocks
/// whose sizes differ by at most one.
fn block_bounds(vertex_count: usize, components: usize) -> Vec<(VertexId, VertexId)> {
    let base = vertex_count / components;
    let remainder = vertex_count % components;
    let mut low = 0;
    (0..components)
        .map(|block| {
            let size = base + usize::from(block < remainder);
            let bounds = (low, low + size);
            low += size;
            bounds
        })
        .collect()
}

fn draw_weight(profile: WeightProfile, rng: &mut SmallRng) -> f64 {
    match profile {
        WeightProfile::Continuous { max } => rng.gen_range(0.0..max),
        WeightProfile::Discrete { levels } => f64::from(rng.gen_range(1..=levels)),
    }
}
