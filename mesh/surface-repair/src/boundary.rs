//! Boundary triangle removal.
//!
//! Remeshing artifacts and clipping leave open borders on an otherwise closed
//! surface. Every triangle touching such a border is dropped.

use rayon::prelude::*;

use crate::edges::{BOUNDARY_EDGE_COUNT, EdgeCounts, triangle_edges};

/// Whether any edge of `tri` is a boundary edge in `counts`.
#[inline]
#[must_use]
pub fn is_boundary_triangle(tri: [u32; 3], counts: &EdgeCounts) -> bool {
    triangle_edges(tri)
        .into_iter()
        .any(|edge| counts.get(edge) == BOUNDARY_EDGE_COUNT)
}

/// Remove every triangle with at least one edge of count 1.
///
/// Survivors keep their relative order. When `counts` has no boundary edge
/// the input is returned unchanged. Removing every triangle is a valid
/// outcome.
///
/// # Example
///
/// ```
/// use surface_repair::{classify_edges, remove_boundary_triangles};
///
/// // Two triangles sharing one edge: both touch the border
/// let triangles = [[0, 1, 2], [1, 3, 2]];
/// let counts = classify_edges(&triangles);
/// assert!(remove_boundary_triangles(&triangles, &counts).is_empty());
/// ```
#[must_use]
pub fn remove_boundary_triangles(triangles: &[[u32; 3]], counts: &EdgeCounts) -> Vec<[u32; 3]> {
    if !counts.has_boundary() {
        return triangles.to_vec();
    }

    triangles
        .iter()
        .copied()
        .filter(|&tri| !is_boundary_triangle(tri, counts))
        .collect()
}

/// Parallel [`remove_boundary_triangles`]. Output order matches the input.
#[must_use]
pub fn remove_boundary_triangles_parallel(
    triangles: &[[u32; 3]],
    counts: &EdgeCounts,
) -> Vec<[u32; 3]> {
    if !counts.has_boundary() {
        return triangles.to_vec();
    }

    triangles
        .par_iter()
        .copied()
        .filter(|&tri| !is_boundary_triangle(tri, counts))
        .collect()
}
