//! Union-find (disjoint set union) over a fixed range of vertex ids.
//!
//! Kruskal's builder uses this structure to decide whether an edge joins two
//! different trees of the growing forest. [`DisjointSet::find_set`]
//! compresses the paths it walks and [`DisjointSet::union_sets`] merges by
//! rank, so each operation costs amortised inverse-Ackermann time.

use crate::{MstError, Result, VertexId};

/// A partition of `0..len` into disjoint sets.
///
/// # Examples
/// ```
/// use kruskal_core::DisjointSet;
///
/// let mut sets = DisjointSet::new(4);
/// assert_eq!(sets.num_sets(), 4);
/// assert!(sets.union_sets(0, 1)?);
/// assert!(!sets.union_sets(1, 0)?);
/// assert_eq!(sets.find_set(1)?, sets.find_set(0)?);
/// assert_eq!(sets.num_sets(), 3);
/// # Ok::<(), kruskal_core::MstError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<VertexId>,
    rank: Vec<u8>,
    num_sets: usize,
}

impl DisjointSet {
    /// Creates `n` singleton sets.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            num_sets: n,
        }
    }

    /// Returns the number of elements tracked by the structure.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.parent.len() }

    /// Returns `true` when the structure tracks no elements.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.parent.is_empty() }

    /// Returns the current number of disjoint sets.
    ///
    /// Starts at [`len`](Self::len) and drops by one for every union that
    /// actually merged two sets.
    #[must_use]
    #[rustfmt::skip]
    pub fn num_sets(&self) -> usize { self.num_sets }

    /// Returns the representative of the set containing `vertex`.
    ///
    /// Every node visited on the way to the root is repointed directly at
    /// the root before returning.
    ///
    /// # Errors
    /// Returns [`MstError::OutOfRange`] when `vertex >= len()`.
    pub fn find_set(&mut self, vertex: VertexId) -> Result<VertexId> {
        self.check(vertex)?;
        Ok(self.find_root(vertex))
    }

    /// Merges the sets containing `a` and `b`.
    ///
    /// The root with the lower rank is attached under the other root. On
    /// equal ranks the root of `b` goes under the root of `a`, whose rank
    /// then grows by one. Returns `false` when both already share a set.
    ///
    /// # Errors
    /// Returns [`MstError::OutOfRange`] when either element is out of range.
    pub fn union_sets(&mut self, a: VertexId, b: VertexId) -> Result<bool> {
        let mut left = self.find_set(a)?;
        let mut right = self.find_set(b)?;
        if left == right {
            return Ok(false);
        }

        if self.rank[left] < self.rank[right] {
            std::mem::swap(&mut left, &mut right);
        }
        self.parent[right] = left;
        if self.rank[left] == self.rank[right] {
            self.rank[left] = self.rank[left].saturating_add(1);
        }
        self.num_sets -= 1;
        Ok(true)
    }

    /// Returns `true` when `a` and `b` belong to the same set.
    ///
    /// A convenience for callers; [`kruskal`](crate::kruskal) uses
    /// the result of [`union_sets`](Self::union_sets) instead.
    ///
    /// # Errors
    /// Returns [`MstError::OutOfRange`] when either element is out of range.
    pub fn same_set(&mut self, a: VertexId, b: VertexId) -> Result<bool> {
        Ok(self.find_set(a)? == self.find_set(b)?)
    }

    fn check(&self, vertex: VertexId) -> Result<()> {
        if vertex < self.parent.len() {
            Ok(())
        } else {
            Err(MstError::OutOfRange {
                vertex,
                vertex_count: self.parent.len(),
            })
        }
    }

    fn find_root(&mut self, mut node: VertexId) -> VertexId {
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
}
