//! Immutable weighted undirected graph store.
//!
//! A [`Graph`] is validated once by [`Graph::load`] and is read-only
//! afterwards. Every engine borrows the same graph, so it must stay `Sync`
//! and free of interior mutability. Alongside the ordered edge list the
//! store keeps a compressed (CSR) adjacency view so neighbour scans are
//! a slice lookup rather than a search.

use std::cmp::Ordering;

use tracing::{Span, field, instrument};

use crate::error::MalformedGraph;

/// Dense zero-based vertex identifier in `[0, vertex_count)`.
pub type VertexId = usize;

/// Input position of an edge; doubles as the deterministic tie-break key.
pub type EdgeId = usize;

/// A weighted undirected edge as supplied by the caller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    source: VertexId,
    target: VertexId,
    weight: f64,
}

impl Edge {
    /// Creates an edge between `source` and `target`.
    ///
    /// No validation happens here; [`Graph::load`] rejects malformed edges.
    #[must_use]
    pub const fn new(source: VertexId, target: VertexId, weight: f64) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Returns the first endpoint as supplied.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> VertexId { self.source }

    /// Returns the second endpoint as supplied.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> VertexId { self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> f64 { self.weight }

    /// Returns the endpoints ordered as `(min, max)`.
    #[must_use]
    pub const fn canonical(&self) -> (VertexId, VertexId) {
        if self.source <= self.target {
            (self.source, self.target)
        } else {
            (self.target, self.source)
        }
    }
}

impl From<(VertexId, VertexId, f64)> for Edge {
    fn from((source, target, weight): (VertexId, VertexId, f64)) -> Self {
        Self::new(source, target, weight)
    }
}

/// An edge of a result set: canonical endpoints (`source < target`), its
/// weight, and the [`EdgeId`] it came from.
///
/// Ordering is `(weight, id)`, the tie-break shared by every exact engine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeightedEdge {
    id: EdgeId,
    source: VertexId,
    target: VertexId,
    weight: f64,
}

impl WeightedEdge {
    /// Returns the id of the originating input edge.
    #[must_use]
    #[rustfmt::skip]
    pub const fn id(&self) -> EdgeId { self.id }

    /// Returns the smaller endpoint id.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> VertexId { self.source }

    /// Returns the larger endpoint id.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> VertexId { self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> f64 { self.weight }
}

impl Eq for WeightedEdge {}

impl Ord for WeightedEdge {
    fn cmp(&self, other: &Self) -> Ordering {
        edge_order((self.weight, self.id), (other.weight, other.id))
    }
}

impl PartialOrd for WeightedEdge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The `(weight, EdgeId)` order every exact engine selects edges by.
///
/// Weights compare with [`f64::total_cmp`]; equal weights fall back to the
/// smaller id. Engines agree on the exact edge set only because they all
/// route through this one comparison.
pub(crate) fn edge_order(left: (f64, EdgeId), right: (f64, EdgeId)) -> Ordering {
    left.0.total_cmp(&right.0).then_with(|| left.1.cmp(&right.1))
}

/// One entry of a vertex's adjacency list.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Incidence {
    neighbour: VertexId,
    edge: EdgeId,
}

impl Incidence {
    /// Returns the vertex on the far side of the edge.
    #[must_use]
    #[rustfmt::skip]
    pub const fn neighbour(&self) -> VertexId { self.neighbour }

    /// Returns the id of the connecting edge.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edge(&self) -> EdgeId { self.edge }
}

/// A validated, immutable weighted undirected multigraph.
///
/// # Examples
/// ```
/// use spanwood_core::{Edge, Graph};
///
/// let edges = [Edge::new(0, 1, 1.0), Edge::new(1, 2, 2.0), Edge::new(0, 2, 3.0)];
/// let graph = Graph::load(3, edges)?;
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 3);
/// assert_eq!(graph.degree(1), 2);
/// # Ok::<(), spanwood_core::MalformedGraph>(())
/// ```
#[derive(Clone, Debug)]
pub struct Graph {
    vertex_count: usize,
    edges: Vec<Edge>,
    offsets: Vec<usize>,
    incidences: Vec<Incidence>,
}

impl Graph {
    /// Validates `edges` against `vertex_count` and builds the store.
    ///
    /// Parallel edges are kept as distinct edges. Edge ids follow input
    /// order.
    ///
    /// # Errors
    /// Returns [`MalformedGraph`] naming the first edge that is a self-loop,
    /// references a vertex `>= vertex_count`, or carries a negative or
    /// non-finite weight. A `vertex_count` whose adjacency offsets cannot be
    /// allocated is rejected with [`MalformedGraph::VertexCountTooLarge`].
    #[instrument(
        name = "graph.load",
        err,
        skip(edges),
        fields(vertex_count = vertex_count, edge_count = field::Empty),
    )]
    pub fn load<I>(vertex_count: usize, edges: I) -> Result<Self, MalformedGraph>
    where
        I: IntoIterator,
        I::Item: Into<Edge>,
    {
        let edges: Vec<Edge> = edges.into_iter().map(Into::into).collect();
        for (id, edge) in edges.iter().enumerate() {
            validate_edge(id, edge, vertex_count)?;
        }
        Span::current().record("edge_count", edges.len());

        let (offsets, incidences) = build_adjacency(vertex_count, &edges)?;
        Ok(Self {
            vertex_count,
            edges,
            offsets,
            incidences,
        })
    }

    /// Returns the number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the number of edges, parallel edges included.
    #[must_use]
    #[rustfmt::skip]
    pub fn edge_count(&self) -> usize { self.edges.len() }

    /// Returns `true` when the graph has no vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.vertex_count == 0 }

    /// Returns the edges in input order; the slice index is the [`EdgeId`].
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Looks up an edge by id.
    #[must_use]
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id)
    }

    /// Returns edge `id` in canonical result form.
    ///
    /// # Panics
    /// Panics when `id >= edge_count`.
    #[must_use]
    pub fn resolve(&self, id: EdgeId) -> WeightedEdge {
        let edge = &self.edges[id];
        let (source, target) = edge.canonical();
        WeightedEdge {
            id,
            source,
            target,
            weight: edge.weight,
        }
    }

    /// Compares two edges by `(weight, id)`.
    ///
    /// # Panics
    /// Panics when either id is out of range.
    #[must_use]
    pub fn compare_edges(&self, left: EdgeId, right: EdgeId) -> Ordering {
        edge_order(
            (self.edges[left].weight, left),
            (self.edges[right].weight, right),
        )
    }

    /// Iterates over `(EdgeId, &Edge)` pairs in input order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (EdgeId, &Edge)> + '_ {
        self.edges.iter().enumerate()
    }

    /// Returns the incidences of `vertex`, ordered by edge id.
    ///
    /// # Panics
    /// Panics when `vertex >= vertex_count`.
    #[must_use]
    pub fn neighbours(&self, vertex: VertexId) -> &[Incidence] {
        &self.incidences[self.offsets[vertex]..self.offsets[vertex + 1]]
    }

    /// Returns the number of edge endpoints at `vertex`.
    ///
    /// # Panics
    /// Panics when `vertex >= vertex_count`.
    #[must_use]
    pub fn degree(&self, vertex: VertexId) -> usize {
        self.neighbours(vertex).len()
    }

    /// Sums every edge weight in the graph.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.edges.iter().map(Edge::weight).sum()
    }
}

fn validate_edge(id: EdgeId, edge: &Edge, vertex_count: usize) -> Result<(), MalformedGraph> {
    for vertex in [edge.source, edge.target] {
        if vertex >= vertex_count {
            return Err(MalformedGraph::VertexOutOfRange {
                edge: id,
                vertex,
                vertex_count,
            });
        }
    }
    if edge.source == edge.target {
        return Err(MalformedGraph::SelfLoop {
            edge: id,
            vertex: edge.source,
        });
    }
    if !edge.weight.is_finite() {
        return Err(MalformedGraph::NonFiniteWeight {
            edge: id,
            weight: edge.weight,
        });
    }
    if edge.weight < 0.0 {
        return Err(MalformedGraph::NegativeWeight {
            edge: id,
            weight: edge.weight,
        });
    }
    Ok(())
}

/// Builds the CSR adjacency arrays by counting degrees, prefix-summing,
/// then scattering incidences in edge-id order.
fn build_adjacency(
    vertex_count: usize,
    edges: &[Edge],
) -> Result<(Vec<usize>, Vec<Incidence>), MalformedGraph> {
    let mut offsets = zeroed_offsets(vertex_count)?;
    for edge in edges {
        offsets[edge.source + 1] += 1;
        offsets[edge.target + 1] += 1;
    }
    for vertex in 0..vertex_count {
        offsets[vertex + 1] += offsets[vertex];
    }

    let mut cursor = offsets.clone();
    let mut incidences = vec![
        Incidence {
            neighbour: 0,
            edge: 0
        };
        edges.len() * 2
    ];
    for (id, edge) in edges.iter().enumerate() {
        for (from, to) in [(edge.source, edge.target), (edge.target, edge.source)] {
            incidences[cursor[from]] = Incidence {
                neighbour: to,
                edge: id,
            };
            cursor[from] += 1;
        }
    }
    Ok((offsets, incidences))
}

/// Allocates `vertex_count + 1` zeroed offsets, refusing counts the
/// allocator cannot satisfy instead of aborting.
fn zeroed_offsets(vertex_count: usize) -> Result<Vec<usize>, MalformedGraph> {
    let too_large = || MalformedGraph::VertexCountTooLarge { vertex_count };
    let len = vertex_count.checked_add(1).ok_or_else(too_large)?;
    let mut offsets = Vec::new();
    offsets.try_reserve_exact(len).map_err(|_| too_large())?;
    offsets.resize(len, 0);
    Ok(offsets)
}
