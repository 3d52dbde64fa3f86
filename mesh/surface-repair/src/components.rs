//! Connected component analysis and reduction to the largest component.
//!
//! Components are computed on the vertex graph whose edges are the triangle
//! edges. Labelling walks vertices in ascending index order, so component ids
//! (and therefore tie-breaking) are reproducible across runs.

use std::collections::VecDeque;

use surface_types::Vertex;

/// Component labelling of the vertices referenced by a triangle collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VertexComponents {
    /// Component id per vertex; `None` for vertices no triangle references.
    labels: Vec<Option<u32>>,
    /// Vertex count per component, indexed by id.
    sizes: Vec<usize>,
}

impl VertexComponents {
    /// Number of components.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.sizes.len()
    }

    /// Component id of a vertex, or `None` if it is unreferenced.
    #[must_use]
    pub fn component_of(&self, v: u32) -> Option<u32> {
        self.labels.get(v as usize).copied().flatten()
    }

    /// Vertex count of each component, indexed by component id.
    #[must_use]
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Id of the component with the most vertices.
    ///
    /// Ties go to the lowest id. `None` when there are no components.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn largest(&self) -> Option<u32> {
        let mut best: Option<(usize, usize)> = None;
        for (id, &size) in self.sizes.iter().enumerate() {
            if best.is_none_or(|(_, best_size)| size > best_size) {
                best = Some((id, size));
            }
        }
        best.map(|(id, _)| id as u32)
    }

    /// Whether all three vertices of `tri` belong to component `id`.
    #[must_use]
    pub fn triangle_in(&self, tri: [u32; 3], id: u32) -> bool {
        tri.iter().all(|&v| self.component_of(v) == Some(id))
    }
}

/// Label the connected components of the vertex graph induced by `triangles`.
///
/// Ids are assigned in ascending order of each component's smallest vertex
/// index. Unreferenced vertices get no label and form no component.
///
/// # Example
///
/// ```
/// use surface_repair::find_vertex_components;
///
/// let comps = find_vertex_components(7, &[[0, 1, 2], [4, 5, 6]]);
/// assert_eq!(comps.component_count(), 2);
/// assert_eq!(comps.component_of(5), Some(1));
/// assert_eq!(comps.component_of(3), None);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn find_vertex_components(vertex_count: usize, triangles: &[[u32; 3]]) -> VertexComponents {
    let n = triangles
        .iter()
        .flatten()
        .map(|&v| v as usize + 1)
        .max()
        .unwrap_or(0)
        .max(vertex_count);

    let mut neighbors: Vec<Vec<u32>> = vec![Vec::new(); n];
    for &[i, j, k] in triangles {
        for (a, b) in [(i, j), (j, k), (i, k)] {
            neighbors[a as usize].push(b);
            neighbors[b as usize].push(a);
        }
    }

    let mut labels: Vec<Option<u32>> = vec![None; n];
    let mut sizes = Vec::new();
    let mut queue = VecDeque::new();

    for start in 0..n {
        if labels[start].is_some() || neighbors[start].is_empty() {
            continue;
        }

        let id = sizes.len() as u32;
        let mut size = 0;
        labels[start] = Some(id);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            size += 1;
            for &next in &neighbors[current] {
                let next = next as usize;
                if labels[next].is_none() {
                    labels[next] = Some(id);
                    queue.push_back(next);
                }
            }
        }

        sizes.push(size);
    }

    VertexComponents { labels, sizes }
}

/// Keep only the triangles of the largest connected component.
///
/// Size is the component's vertex count; ties go to the component containing
/// the smallest vertex index. A triangle survives only if all three of its
/// vertices are in the winning component. With zero or one component the
/// input is returned unchanged. The vertices are not modified.
///
/// # Example
///
/// ```
/// use surface_repair::keep_largest_component;
/// use surface_types::unit_tetrahedron;
///
/// let mut mesh = unit_tetrahedron();
/// mesh.merge(&unit_tetrahedron()).unwrap();
///
/// let kept = keep_largest_component(&mesh.vertices, &mesh.triangles);
/// assert_eq!(kept, unit_tetrahedron().triangles);
/// ```
#[must_use]
pub fn keep_largest_component(vertices: &[Vertex], triangles: &[[u32; 3]]) -> Vec<[u32; 3]> {
    let components = find_vertex_components(vertices.len(), triangles);
    reduce_to_largest(triangles, &components)
}

/// [`keep_largest_component`] with a precomputed labelling.
#[must_use]
pub fn reduce_to_largest(triangles: &[[u32; 3]], components: &VertexComponents) -> Vec<[u32; 3]> {
    if components.component_count() <= 1 {
        return triangles.to_vec();
    }

    let Some(winner) = components.largest() else {
        return triangles.to_vec();
    };

    triangles
        .iter()
        .copied()
        .filter(|&tri| components.triangle_in(tri, winner))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use surface_types::{Vector3, unit_cube, unit_tetrahedron};

    fn vertices(n: usize) -> Vec<Vertex> {
        (0..n)
            .map(|i| Vertex::from_coords(i as f64, 0.0, 0.0))
            .collect()
    }

    #[test]
    fn empty_mesh() {
        let comps = find_vertex_components(4, &[]);
        assert_eq!(comps.component_count(), 0);
        assert_eq!(comps.largest(), None);
        assert!(keep_largest_component(&vertices(4), &[]).is_empty());
    }

    #[test]
    fn single_component_is_noop() {
        let tet = unit_tetrahedron();
        let comps = find_vertex_components(tet.vertex_count(), &tet.triangles);
        assert_eq!(comps.component_count(), 1);
        assert_eq!(comps.sizes(), &[4]);
        assert_eq!(
            keep_largest_component(&tet.vertices, &tet.triangles),
            tet.triangles
        );
    }

    #[test]
    fn larger_component_wins_regardless_of_position() {
        // Tetrahedron first, cube second: the cube has more vertices
        let mut mesh = unit_tetrahedron();
        let mut cube = unit_cube();
        cube.translate(Vector3::new(10.0, 0.0, 0.0));
        mesh.merge(&cube).unwrap();

        let kept = keep_largest_component(&mesh.vertices, &mesh.triangles);
        assert_eq!(kept.len(), 12);
        assert!(kept.iter().flatten().all(|&v| v >= 4));
    }

    #[test]
    fn tie_goes_to_first_component() {
        let mut mesh = unit_tetrahedron();
        mesh.merge(&unit_tetrahedron()).unwrap();

        let comps = find_vertex_components(mesh.vertex_count(), &mesh.triangles);
        assert_eq!(comps.sizes(), &[4, 4]);
        assert_eq!(comps.largest(), Some(0));

        let kept = keep_largest_component(&mesh.vertices, &mesh.triangles);
        assert_eq!(kept, mesh.triangles[..4].to_vec());
    }

    #[test]
    fn labels_follow_smallest_vertex() {
        // Component on high indices listed first in triangle order
        let tris = [[5, 6, 7], [0, 1, 2]];
        let comps = find_vertex_components(8, &tris);
        assert_eq!(comps.component_of(0), Some(0));
        assert_eq!(comps.component_of(6), Some(1));
        assert_eq!(comps.component_of(4), None);
    }

    #[test]
    fn unreferenced_vertices_form_no_component() {
        let tet = unit_tetrahedron();
        let comps = find_vertex_components(10, &tet.triangles);
        assert_eq!(comps.component_count(), 1);
    }

    #[test]
    fn triangles_spanning_components_are_impossible() {
        // Sanity: a triangle's vertices always share a label
        let tris = [[0, 1, 2], [2, 3, 4], [5, 6, 7]];
        let comps = find_vertex_components(8, &tris);
        assert!(comps.triangle_in([2, 3, 4], 0));
        assert!(!comps.triangle_in([5, 6, 7], 0));
    }
}
