//! Disjoint-set union (union-find) over dense vertex ids.
//!
//! Used by Kruskal and Borůvka for cycle detection and by Karger to track
//! super-vertices during contraction. Each engine call owns its own
//! instance; nothing here is shared between runs.

use std::cmp::Ordering;

use crate::graph::VertexId;

/// Union-find with path compression and union by rank.
///
/// # Examples
/// ```
/// use spanwood_core::DisjointSet;
///
/// let mut sets = DisjointSet::new(4);
/// assert!(sets.union(0, 1));
/// assert!(!sets.union(1, 0));
/// assert!(sets.connected(0, 1));
/// assert_eq!(sets.component_count(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<VertexId>,
    rank: Vec<u8>,
    components: usize,
}

impl DisjointSet {
    /// Creates `n` singleton sets `{0}, {1}, …, {n-1}`.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            components: n,
        }
    }

    /// Returns the number of elements tracked.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.parent.len() }

    /// Returns `true` when no elements are tracked.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.parent.is_empty() }

    /// Returns the number of disjoint sets.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.components }

    /// Returns the representative of `node`'s set, compressing the path.
    ///
    /// # Panics
    /// Panics when `node` is out of range.
    pub fn find(&mut self, mut node: VertexId) -> VertexId {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != node {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        root
    }

    /// Merges the sets containing `left` and `right`.
    ///
    /// Returns `false` when both are already in the same set, which is the
    /// cycle signal used by the spanning-tree engines.
    ///
    /// # Panics
    /// Panics when either id is out of range.
    pub fn union(&mut self, left: VertexId, right: VertexId) -> bool {
        let left = self.find(left);
        let right = self.find(right);
        if left == right {
            return false;
        }

        let (root, child) = match self.rank[left].cmp(&self.rank[right]) {
            Ordering::Greater => (left, right),
            Ordering::Less => (right, left),
            Ordering::Equal => {
                let (root, child) = if left <= right {
                    (left, right)
                } else {
                    (right, left)
                };
                self.rank[root] = self.rank[root].saturating_add(1);
                (root, child)
            }
        };
        self.parent[child] = root;
        self.components -= 1;
        true
    }

    /// Returns `true` when `left` and `right` share a set.
    ///
    /// # Panics
    /// Panics when either id is out of range.
    pub fn connected(&mut self, left: VertexId, right: VertexId) -> bool {
        self.find(left) == self.find(right)
    }
}
