//! Vertex-to-triangle incidence.
//!
//! Answers "which triangles contain both endpoints of this edge" without going
//! through the edge table, which is what the membership half of manifold
//! validation needs.

use hashbrown::HashMap;

/// Incidence between vertices and the triangles that reference them.
#[derive(Debug, Clone, Default)]
pub struct MeshAdjacency {
    /// Maps vertex index to the ascending list of triangle indices using it.
    vertex_to_triangles: HashMap<u32, Vec<usize>>,
}

impl MeshAdjacency {
    /// Build incidence from a triangle collection.
    ///
    /// # Example
    ///
    /// ```
    /// use surface_repair::MeshAdjacency;
    ///
    /// let adj = MeshAdjacency::build(&[[0, 1, 2], [1, 3, 2]]);
    ///
    /// assert_eq!(adj.triangles_for_vertex(2), &[0, 1]);
    /// assert_eq!(adj.triangles_containing(1, 2), 2);
    /// assert_eq!(adj.triangles_containing(0, 3), 0);
    /// ```
    #[must_use]
    pub fn build(triangles: &[[u32; 3]]) -> Self {
        let mut vertex_to_triangles: HashMap<u32, Vec<usize>> = HashMap::new();

        for (tri_idx, tri) in triangles.iter().enumerate() {
            for &v in tri {
                let list = vertex_to_triangles.entry(v).or_default();
                // A repeated index inside one triangle must not list it twice
                if list.last() != Some(&tri_idx) {
                    list.push(tri_idx);
                }
            }
        }

        Self {
            vertex_to_triangles,
        }
    }

    /// Triangles referencing a vertex, in ascending order.
    ///
    /// Returns an empty slice if the vertex is unreferenced.
    #[must_use]
    pub fn triangles_for_vertex(&self, v: u32) -> &[usize] {
        self.vertex_to_triangles
            .get(&v)
            .map_or(&[], Vec::as_slice)
    }

    /// Number of distinct triangles that contain both `v0` and `v1`.
    ///
    /// Computed by intersecting the two incidence lists.
    #[must_use]
    pub fn triangles_containing(&self, v0: u32, v1: u32) -> usize {
        let lhs = self.triangles_for_vertex(v0);
        let rhs = self.triangles_for_vertex(v1);

        let (mut i, mut j, mut shared) = (0, 0, 0);
        while i < lhs.len() && j < rhs.len() {
            match lhs[i].cmp(&rhs[j]) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    shared += 1;
                    i += 1;
                    j += 1;
                }
            }
        }
        shared
    }

    /// Number of vertices referenced by at least one triangle.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertex_to_triangles.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_triangle() {
        let adj = MeshAdjacency::build(&[[0, 1, 2]]);
        assert_eq!(adj.vertex_count(), 3);
        assert_eq!(adj.triangles_containing(0, 1), 1);
        assert_eq!(adj.triangles_containing(2, 0), 1);
    }

    #[test]
    fn fan_around_edge() {
        let adj = MeshAdjacency::build(&[[0, 1, 2], [0, 1, 3], [1, 0, 4]]);
        assert_eq!(adj.triangles_containing(0, 1), 3);
        assert_eq!(adj.triangles_containing(2, 3), 0);
        assert_eq!(adj.triangles_for_vertex(0), &[0, 1, 2]);
    }

    #[test]
    fn duplicate_triangles_are_distinct() {
        let adj = MeshAdjacency::build(&[[0, 1, 2], [2, 1, 0]]);
        assert_eq!(adj.triangles_containing(0, 1), 2);
    }

    #[test]
    fn repeated_index_listed_once() {
        let adj = MeshAdjacency::build(&[[0, 0, 1]]);
        assert_eq!(adj.triangles_for_vertex(0), &[0]);
    }

    #[test]
    fn nonexistent_vertex() {
        let adj = MeshAdjacency::build(&[[0, 1, 2]]);
        assert!(adj.triangles_for_vertex(99).is_empty());
        assert_eq!(adj.triangles_containing(0, 99), 0);
    }
}
