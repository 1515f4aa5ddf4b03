//! Reachability checks over a graph with logically removed edges.
//!
//! Reverse-Delete probes connectivity once per candidate edge, so the probe
//! reuses its visited markers and frontier across calls: markers are
//! generation stamps, which makes resetting them O(1) instead of O(V).
//! Every probe is still a full breadth-first traversal, O(V + E).

use std::collections::VecDeque;

use crate::graph::{EdgeId, Graph, VertexId};

/// Set of edges treated as absent by a [`ConnectivityProbe`].
#[derive(Clone, Debug, Default)]
pub struct ExcludedEdges {
    mask: Vec<bool>,
    count: usize,
}

impl ExcludedEdges {
    /// Creates an empty exclusion set sized for `graph`.
    #[must_use]
    pub fn for_graph(graph: &Graph) -> Self {
        Self {
            mask: vec![false; graph.edge_count()],
            count: 0,
        }
    }

    /// Marks `edge` as removed. Returns `false` when it already was.
    ///
    /// # Panics
    /// Panics when `edge` is not an id of the graph the set was sized for.
    pub fn exclude(&mut self, edge: EdgeId) -> bool {
        let was_excluded = std::mem::replace(&mut self.mask[edge], true);
        if !was_excluded {
            self.count += 1;
        }
        !was_excluded
    }

    /// Restores `edge`. Returns `false` when it was not excluded.
    ///
    /// # Panics
    /// Panics when `edge` is not an id of the graph the set was sized for.
    pub fn restore(&mut self, edge: EdgeId) -> bool {
        let was_excluded = std::mem::replace(&mut self.mask[edge], false);
        if was_excluded {
            self.count -= 1;
        }
        was_excluded
    }

    /// Returns `true` when `edge` is currently excluded.
    #[must_use]
    pub fn contains(&self, edge: EdgeId) -> bool {
        self.mask.get(edge).copied().unwrap_or(false)
    }

    /// Returns the number of excluded edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.count }

    /// Returns `true` when no edge is excluded.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.count == 0 }
}

/// Reusable breadth-first reachability probe.
#[derive(Clone, Debug, Default)]
pub struct ConnectivityProbe {
    marks: Vec<u32>,
    generation: u32,
    frontier: VecDeque<VertexId>,
}

impl ConnectivityProbe {
    /// Creates a probe with buffers sized for `vertex_count` vertices.
    ///
    /// Buffers grow on demand if a larger graph is probed later.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            marks: vec![0; vertex_count],
            generation: 0,
            frontier: VecDeque::with_capacity(vertex_count),
        }
    }

    /// Returns `true` when every vertex of `graph` lies in one component
    /// once `excluded` edges are ignored. Graphs with at most one vertex
    /// are connected.
    pub fn is_connected(&mut self, graph: &Graph, excluded: &ExcludedEdges) -> bool {
        let vertex_count = graph.vertex_count();
        if vertex_count <= 1 {
            return true;
        }
        self.traverse(graph, excluded, 0, None) == vertex_count
    }

    /// Returns `true` when `to` is reachable from `from` without using
    /// `excluded` edges.
    ///
    /// # Panics
    /// Panics when either vertex is out of range.
    pub fn reaches(
        &mut self,
        graph: &Graph,
        excluded: &ExcludedEdges,
        from: VertexId,
        to: VertexId,
    ) -> bool {
        assert!(
            to < graph.vertex_count(),
            "vertex {to} is out of range for {} vertices",
            graph.vertex_count()
        );
        if from == to {
            return true;
        }
        self.traverse(graph, excluded, from, Some(to));
        self.marks[to] == self.generation
    }

    /// Counts connected components ignoring `excluded` edges.
    pub fn component_count(&mut self, graph: &Graph, excluded: &ExcludedEdges) -> usize {
        self.begin(graph.vertex_count());
        let generation = self.generation;
        let mut components = 0;
        for root in 0..graph.vertex_count() {
            if self.marks[root] == generation {
                continue;
            }
            components += 1;
            self.flood(graph, excluded, root, None);
        }
        components
    }

    /// Runs one traversal from `from` and returns the number of vertices
    /// reached, stopping early when `stop_at` is visited.
    fn traverse(
        &mut self,
        graph: &Graph,
        excluded: &ExcludedEdges,
        from: VertexId,
        stop_at: Option<VertexId>,
    ) -> usize {
        self.begin(graph.vertex_count());
        self.flood(graph, excluded, from, stop_at)
    }

    fn flood(
        &mut self,
        graph: &Graph,
        excluded: &ExcludedEdges,
        from: VertexId,
        stop_at: Option<VertexId>,
    ) -> usize {
        let generation = self.generation;
        self.frontier.clear();
        self.marks[from] = generation;
        self.frontier.push_back(from);
        let mut reached = 1;

        while let Some(vertex) = self.frontier.pop_front() {
            for incidence in graph.neighbours(vertex) {
                if excluded.contains(incidence.edge()) {
                    continue;
                }
                let next = incidence.neighbour();
                if self.marks[next] == generation {
                    continue;
                }
                self.marks[next] = generation;
                reached += 1;
                if stop_at == Some(next) {
                    return reached;
                }
                self.frontier.push_back(next);
            }
        }
        reached
    }

    fn begin(&mut self, vertex_count: usize) {
        if self.marks.len() < vertex_count {
            self.marks.resize(vertex_count, 0);
        }
        if self.generation == u32::MAX {
            self.marks.fill(0);
            self.generation = 0;
        }
        self.generation += 1;
    }
}

/// Returns `true` when `graph` minus `excluded` is a single component.
///
/// # Examples
/// ```
/// use spanwood_core::{Edge, ExcludedEdges, Graph, is_connected};
///
/// let graph = Graph::load(3, [Edge::new(0, 1, 1.0), Edge::new(1, 2, 1.0)])?;
/// let mut excluded = ExcludedEdges::for_graph(&graph);
/// assert!(is_connected(&graph, &excluded));
/// excluded.exclude(1);
/// assert!(!is_connected(&graph, &excluded));
/// # Ok::<(), spanwood_core::MalformedGraph>(())
/// ```
#[must_use]
pub fn is_connected(graph: &Graph, excluded: &ExcludedEdges) -> bool {
    ConnectivityProbe::new(graph.vertex_count()).is_connected(graph, excluded)
}

/// Counts the connected components of `graph`.
#[must_use]
pub fn count_components(graph: &Graph) -> usize {
    ConnectivityProbe::new(graph.vertex_count())
        .component_count(graph, &ExcludedEdges::for_graph(graph))
}

#[cfg(test)]
mod tests;
