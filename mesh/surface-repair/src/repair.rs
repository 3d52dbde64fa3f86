//! The topology repair pass.
//!
//! Runs the four stages in order on a freshly remeshed surface:
//!
//! 1. classify edges by incident triangle count
//! 2. strip triangles touching a boundary edge
//! 3. validate that every remaining edge has exactly two triangles
//! 4. keep only the largest connected component
//!
//! Vertices are never touched; pruning unreferenced vertices, orientation
//! and smoothing happen after this pass.

use surface_types::{SurfaceMesh, Vertex, validate_triangles};
use tracing::{debug, info, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::boundary::{remove_boundary_triangles, remove_boundary_triangles_parallel};
use crate::components::{find_vertex_components, reduce_to_largest};
use crate::edges::{classify_edges, classify_edges_parallel};
use crate::error::RepairResult;
use crate::validate::{topology_report_from_counts, validate_manifold};

/// Configuration for the repair pass.
///
/// None of these change the topological thresholds (boundary = 1 triangle,
/// manifold = 2 triangles); they only select execution strategy and whether
/// the component stage runs.
///
/// # Example
///
/// ```
/// use surface_repair::RepairParams;
///
/// let params = RepairParams::default()
///     .with_parallel_threshold(50_000)
///     .with_keep_largest_component(true);
/// assert!(params.parallel);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RepairParams {
    /// Whether to use rayon for edge classification and boundary filtering.
    ///
    /// Default: `true`
    pub parallel: bool,

    /// Minimum triangle count before the parallel path is taken.
    ///
    /// Default: `10_000`
    pub parallel_threshold: usize,

    /// Whether to reduce the surface to its largest connected component.
    ///
    /// Default: `true`
    pub keep_largest_component: bool,
}

impl Default for RepairParams {
    fn default() -> Self {
        Self {
            parallel: true,
            parallel_threshold: 10_000,
            keep_largest_component: true,
        }
    }
}

impl RepairParams {
    /// Params that never use the parallel path.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Default::default()
        }
    }

    /// Enable or disable parallel execution.
    #[must_use]
    pub const fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Set the minimum triangle count for parallel execution.
    #[must_use]
    pub const fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Set whether the largest-component stage runs.
    #[must_use]
    pub const fn with_keep_largest_component(mut self, keep: bool) -> Self {
        self.keep_largest_component = keep;
        self
    }

    /// Whether a collection of `triangle_count` triangles takes the parallel path.
    #[must_use]
    pub const fn use_parallel(&self, triangle_count: usize) -> bool {
        self.parallel && triangle_count >= self.parallel_threshold
    }
}

/// What the repair pass did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepairSummary {
    /// Triangles before repair.
    pub input_triangles: usize,
    /// Triangles removed for touching a boundary edge.
    pub boundary_triangles_removed: usize,
    /// Connected components after boundary removal.
    pub components_found: usize,
    /// Triangles removed for lying outside the largest component.
    pub component_triangles_removed: usize,
    /// Triangles after repair.
    pub output_triangles: usize,
}

impl RepairSummary {
    /// Whether repair left no triangles at all.
    ///
    /// This is a legitimate outcome (the whole input touched a boundary),
    /// not an error.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.output_triangles == 0
    }

    /// Total triangles removed across all stages.
    #[must_use]
    pub const fn triangles_removed(&self) -> usize {
        self.boundary_triangles_removed + self.component_triangles_removed
    }
}

impl std::fmt::Display for RepairSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} → {} triangles ({} boundary, {} outside largest of {} components)",
            self.input_triangles,
            self.output_triangles,
            self.boundary_triangles_removed,
            self.component_triangles_removed,
            self.components_found
        )
    }
}

/// Run the repair pass and return the repaired triangles.
///
/// The inputs are not modified.
///
/// # Errors
///
/// - [`RepairError::InvalidMesh`](crate::RepairError::InvalidMesh) if a
///   triangle is out of range or degenerate
/// - [`RepairError::Manifold`](crate::RepairError::Manifold) if the
///   boundary-stripped surface is not a closed 2-manifold
///
/// # Example
///
/// ```
/// use surface_repair::{RepairParams, repair_triangles};
/// use surface_types::unit_tetrahedron;
///
/// let tet = unit_tetrahedron();
/// let (triangles, summary) =
///     repair_triangles(&tet.vertices, &tet.triangles, &RepairParams::default()).unwrap();
/// assert_eq!(triangles, tet.triangles);
/// assert_eq!(summary.triangles_removed(), 0);
/// ```
pub fn repair_triangles(
    vertices: &[Vertex],
    triangles: &[[u32; 3]],
    params: &RepairParams,
) -> RepairResult<(Vec<[u32; 3]>, RepairSummary)> {
    validate_triangles(triangles, vertices.len())?;

    let parallel = params.use_parallel(triangles.len());
    info!(
        vertices = vertices.len(),
        triangles = triangles.len(),
        parallel,
        "Starting topology repair"
    );

    let mut summary = RepairSummary {
        input_triangles: triangles.len(),
        ..Default::default()
    };

    // 1. Classify edges
    let counts = if parallel {
        classify_edges_parallel(triangles)
    } else {
        classify_edges(triangles)
    };
    debug!(
        "{}",
        topology_report_from_counts(triangles, vertices.len(), &counts)
    );

    // 2. Strip boundary triangles
    let stripped = if parallel {
        remove_boundary_triangles_parallel(triangles, &counts)
    } else {
        remove_boundary_triangles(triangles, &counts)
    };
    summary.boundary_triangles_removed = triangles.len() - stripped.len();
    debug!(
        boundary_edges = counts.boundary_edge_count(),
        removed = summary.boundary_triangles_removed,
        "Removed boundary triangles"
    );

    // 3. Validate
    if let Err(e) = validate_manifold(&stripped) {
        warn!("Boundary-stripped surface failed manifold validation: {}", e);
        return Err(e.into());
    }

    // 4. Largest component
    let stripped_len = stripped.len();
    let repaired = if params.keep_largest_component {
        let components = find_vertex_components(vertices.len(), &stripped);
        summary.components_found = components.component_count();
        if summary.components_found > 1 {
            debug!(sizes = ?components.sizes(), "Multiple components found");
        }
        reduce_to_largest(&stripped, &components)
    } else {
        stripped
    };
    summary.component_triangles_removed = stripped_len - repaired.len();
    summary.output_triangles = repaired.len();

    if summary.is_empty() {
        warn!(
            input = summary.input_triangles,
            "Topology repair removed every triangle"
        );
    }

    info!("Topology repair complete: {}", summary);

    Ok((repaired, summary))
}

/// Run the repair pass on a mesh in place.
///
/// On success the mesh's triangles are replaced by the repaired set. On
/// error the mesh is left as it was.
///
/// # Errors
///
/// See [`repair_triangles`].
///
/// # Example
///
/// ```
/// use surface_repair::{RepairParams, repair_topology};
/// use surface_types::unit_tetrahedron;
///
/// let mut mesh = unit_tetrahedron();
/// mesh.merge(&unit_tetrahedron()).unwrap();
///
/// let summary = repair_topology(&mut mesh, &RepairParams::default()).unwrap();
/// assert_eq!(summary.components_found, 2);
/// assert_eq!(mesh.triangle_count(), 4);
/// assert_eq!(mesh.vertex_count(), 8); // vertices are never pruned here
/// ```
pub fn repair_topology(
    mesh: &mut SurfaceMesh,
    params: &RepairParams,
) -> RepairResult<RepairSummary> {
    let (triangles, summary) = repair_triangles(&mesh.vertices, &mesh.triangles, params)?;
    mesh.triangles = triangles;
    Ok(summary)
}
