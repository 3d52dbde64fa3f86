//! Manifold validation and topology reporting.
//!
//! After boundary removal every edge must be shared by exactly two
//! triangles. Two independent derivations are checked: the occurrence count
//! in the edge table, and the number of distinct triangles that contain both
//! endpoints. Either one disagreeing is fatal.

use crate::adjacency::MeshAdjacency;
use crate::edges::{Edge, EdgeCounts, MANIFOLD_EDGE_COUNT, classify_edges};
use crate::error::{ManifoldCheck, ManifoldError};

/// Check one edge-table entry against the manifold count.
///
/// A count of 0 fails like any other count that is not 2.
///
/// # Errors
///
/// Returns a [`ManifoldError`] tagged [`ManifoldCheck::EdgeCount`].
pub fn check_edge_count(edge: Edge, count: u32) -> Result<(), ManifoldError> {
    if count == MANIFOLD_EDGE_COUNT {
        Ok(())
    } else {
        Err(ManifoldError::duplicate_or_missing(
            edge,
            count,
            ManifoldCheck::EdgeCount,
        ))
    }
}

/// Verify that a triangle collection is a closed 2-manifold patch.
///
/// Edges are visited in ascending order, so the reported edge is the
/// smallest offender. An empty collection passes.
///
/// # Errors
///
/// Returns [`ManifoldError`] if any edge occurs in a number of triangles
/// other than two, by either derivation.
///
/// # Example
///
/// ```
/// use surface_repair::validate_manifold;
///
/// let tetrahedron = [[0, 2, 1], [0, 1, 3], [1, 2, 3], [2, 0, 3]];
/// assert!(validate_manifold(&tetrahedron).is_ok());
///
/// // An isolated triangle is never manifold
/// assert!(validate_manifold(&[[0, 1, 2]]).is_err());
/// ```
pub fn validate_manifold(triangles: &[[u32; 3]]) -> Result<(), ManifoldError> {
    let entries = classify_edges(triangles).sorted();

    for &(edge, count) in &entries {
        check_edge_count(edge, count)?;
    }

    let adjacency = MeshAdjacency::build(triangles);
    for &(edge, _) in &entries {
        let members = adjacency.triangles_containing(edge.a(), edge.b());
        if members != MANIFOLD_EDGE_COUNT as usize {
            return Err(ManifoldError::duplicate_or_missing(
                edge,
                u32::try_from(members).unwrap_or(u32::MAX),
                ManifoldCheck::TriangleMembership,
            ));
        }
    }

    Ok(())
}

/// Summary of a triangle collection's edge topology.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopologyReport {
    /// Total number of vertices, referenced or not.
    pub vertex_count: usize,
    /// Vertices referenced by at least one triangle.
    pub referenced_vertex_count: usize,
    /// Number of triangles.
    pub triangle_count: usize,
    /// Number of distinct edges.
    pub edge_count: usize,
    /// Edges shared by exactly one triangle.
    pub boundary_edge_count: usize,
    /// Edges shared by more than two triangles.
    pub non_manifold_edge_count: usize,
    /// Whether every edge is shared by exactly two triangles.
    pub is_closed_manifold: bool,
}

impl TopologyReport {
    /// Euler characteristic `V - E + F` over referenced vertices.
    ///
    /// A closed genus-0 surface gives 2.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub const fn euler_characteristic(&self) -> i64 {
        self.referenced_vertex_count as i64 - self.edge_count as i64
            + self.triangle_count as i64
    }

    /// Whether any boundary or non-manifold edge was found.
    #[must_use]
    pub const fn has_issues(&self) -> bool {
        self.boundary_edge_count > 0 || self.non_manifold_edge_count > 0
    }

    /// Total count of problem edges.
    #[must_use]
    pub const fn issue_count(&self) -> usize {
        self.boundary_edge_count + self.non_manifold_edge_count
    }
}

impl std::fmt::Display for TopologyReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Topology Report:")?;
        writeln!(
            f,
            "  Vertices: {} ({} referenced)",
            self.vertex_count, self.referenced_vertex_count
        )?;
        writeln!(f, "  Triangles: {}", self.triangle_count)?;
        writeln!(f, "  Edges: {}", self.edge_count)?;
        writeln!(f, "  Euler characteristic: {}", self.euler_characteristic())?;
        writeln!(
            f,
            "  Closed manifold: {}",
            if self.is_closed_manifold { "Yes" } else { "No" }
        )?;

        if self.has_issues() {
            writeln!(f, "  Issues:")?;
            if self.boundary_edge_count > 0 {
                writeln!(f, "    Boundary edges: {}", self.boundary_edge_count)?;
            }
            if self.non_manifold_edge_count > 0 {
                writeln!(
                    f,
                    "    Non-manifold edges: {}",
                    self.non_manifold_edge_count
                )?;
            }
        }

        Ok(())
    }
}

/// Build a [`TopologyReport`] from a precomputed edge table.
#[must_use]
pub fn topology_report_from_counts(
    triangles: &[[u32; 3]],
    vertex_count: usize,
    counts: &EdgeCounts,
) -> TopologyReport {
    let mut referenced = vec![false; vertex_count];
    for tri in triangles {
        for &v in tri {
            if let Some(slot) = referenced.get_mut(v as usize) {
                *slot = true;
            }
        }
    }

    TopologyReport {
        vertex_count,
        referenced_vertex_count: referenced.iter().filter(|&&r| r).count(),
        triangle_count: triangles.len(),
        edge_count: counts.len(),
        boundary_edge_count: counts.boundary_edge_count(),
        non_manifold_edge_count: counts.non_manifold_edge_count(),
        is_closed_manifold: counts.is_closed_manifold(),
    }
}

/// Classify edges and summarise the topology of a triangle collection.
///
/// # Example
///
/// ```
/// use surface_repair::topology_report;
///
/// let report = topology_report(&[[0, 1, 2]], 3);
/// assert_eq!(report.boundary_edge_count, 3);
/// assert!(!report.is_closed_manifold);
/// ```
#[must_use]
pub fn topology_report(triangles: &[[u32; 3]], vertex_count: usize) -> TopologyReport {
    topology_report_from_counts(triangles, vertex_count, &classify_edges(triangles))
}
