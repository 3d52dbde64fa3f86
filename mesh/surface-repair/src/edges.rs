//! Edge classification.
//!
//! Derives the undirected edge set of a triangle collection and counts how
//! many triangles contain each edge. The table is always recomputed from the
//! current triangles; removing triangles changes counts non-locally, so it is
//! never maintained incrementally.

use hashbrown::HashMap;
use rayon::prelude::*;

/// Count of an edge on the mesh boundary.
pub const BOUNDARY_EDGE_COUNT: u32 = 1;

/// Count of every edge on a closed 2-manifold.
pub const MANIFOLD_EDGE_COUNT: u32 = 2;

/// An undirected edge between two vertex indices, stored with `a < b`.
///
/// # Example
///
/// ```
/// use surface_repair::Edge;
///
/// assert_eq!(Edge::new(5, 2), Edge::new(2, 5));
/// assert_eq!(Edge::new(5, 2).a(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge(u32, u32);

impl Edge {
    /// Create a normalised edge.
    #[inline]
    #[must_use]
    pub const fn new(v0: u32, v1: u32) -> Self {
        if v0 < v1 { Self(v0, v1) } else { Self(v1, v0) }
    }

    /// Smaller endpoint.
    #[inline]
    #[must_use]
    pub const fn a(self) -> u32 {
        self.0
    }

    /// Larger endpoint.
    #[inline]
    #[must_use]
    pub const fn b(self) -> u32 {
        self.1
    }
}

/// The three normalised edges of a triangle: `(i,j)`, `(j,k)`, `(i,k)`.
#[inline]
#[must_use]
pub const fn triangle_edges(tri: [u32; 3]) -> [Edge; 3] {
    [
        Edge::new(tri[0], tri[1]),
        Edge::new(tri[1], tri[2]),
        Edge::new(tri[0], tri[2]),
    ]
}

/// Occurrence count of every distinct edge in a triangle collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeCounts {
    counts: HashMap<Edge, u32>,
}

impl EdgeCounts {
    /// Number of triangles containing `edge`, or 0 if it does not occur.
    #[inline]
    #[must_use]
    pub fn get(&self, edge: Edge) -> u32 {
        self.counts.get(&edge).copied().unwrap_or(0)
    }

    /// Number of triangles containing the edge between `v0` and `v1`.
    #[inline]
    #[must_use]
    pub fn count(&self, v0: u32, v1: u32) -> u32 {
        self.get(Edge::new(v0, v1))
    }

    /// Number of distinct edges.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no edges were recorded.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over `(edge, count)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (Edge, u32)> + '_ {
        self.counts.iter().map(|(&edge, &count)| (edge, count))
    }

    /// All `(edge, count)` pairs in ascending edge order.
    #[must_use]
    pub fn sorted(&self) -> Vec<(Edge, u32)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_unstable_by_key(|&(edge, _)| edge);
        entries
    }

    /// Sum of all counts. Equals three times the number of triangles.
    #[must_use]
    pub fn total_occurrences(&self) -> u64 {
        self.counts.values().map(|&c| u64::from(c)).sum()
    }

    /// Iterate over boundary edges (shared by exactly one triangle).
    pub fn boundary_edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.iter()
            .filter(|&(_, count)| count == BOUNDARY_EDGE_COUNT)
            .map(|(edge, _)| edge)
    }

    /// Count boundary edges.
    #[must_use]
    pub fn boundary_edge_count(&self) -> usize {
        self.boundary_edges().count()
    }

    /// Whether any edge lies on a boundary.
    #[must_use]
    pub fn has_boundary(&self) -> bool {
        self.counts.values().any(|&c| c == BOUNDARY_EDGE_COUNT)
    }

    /// Iterate over non-manifold edges (shared by more than two triangles).
    pub fn non_manifold_edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.iter()
            .filter(|&(_, count)| count > MANIFOLD_EDGE_COUNT)
            .map(|(edge, _)| edge)
    }

    /// Count non-manifold edges.
    #[must_use]
    pub fn non_manifold_edge_count(&self) -> usize {
        self.non_manifold_edges().count()
    }

    /// Whether every edge is shared by exactly two triangles.
    ///
    /// Vacuously true for an empty table.
    #[must_use]
    pub fn is_closed_manifold(&self) -> bool {
        self.counts.values().all(|&c| c == MANIFOLD_EDGE_COUNT)
    }

    fn record(&mut self, tri: [u32; 3]) {
        for edge in triangle_edges(tri) {
            *self.counts.entry(edge).or_insert(0) += 1;
        }
    }

    fn absorb(mut self, other: Self) -> Self {
        let (mut into, from) = if self.counts.len() >= other.counts.len() {
            (std::mem::take(&mut self.counts), other.counts)
        } else {
            (other.counts, std::mem::take(&mut self.counts))
        };
        for (edge, count) in from {
            *into.entry(edge).or_insert(0) += count;
        }
        Self { counts: into }
    }
}

/// Count how many triangles contain each distinct edge.
///
/// Always succeeds; an empty collection yields an empty table. No
/// manifoldness is assumed.
///
/// # Example
///
/// ```
/// use surface_repair::classify_edges;
///
/// let counts = classify_edges(&[[0, 1, 2], [1, 3, 2]]);
/// assert_eq!(counts.len(), 5);
/// assert_eq!(counts.count(2, 1), 2); // shared edge
/// assert_eq!(counts.count(0, 1), 1); // boundary edge
/// ```
#[must_use]
pub fn classify_edges(triangles: &[[u32; 3]]) -> EdgeCounts {
    let mut counts = EdgeCounts {
        counts: HashMap::with_capacity(triangles.len() * 3 / 2),
    };
    for &tri in triangles {
        counts.record(tri);
    }
    counts
}

/// Parallel [`classify_edges`].
///
/// Each rayon worker fills a partial table; the partial tables are summed
/// afterwards. The result equals the sequential one.
#[must_use]
pub fn classify_edges_parallel(triangles: &[[u32; 3]]) -> EdgeCounts {
    triangles
        .par_iter()
        .fold(EdgeCounts::default, |mut acc, &tri| {
            acc.record(tri);
            acc
        })
        .reduce(EdgeCounts::default, EdgeCounts::absorb)
}
