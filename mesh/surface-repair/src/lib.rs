//! Topology repair for remeshed surfaces.
//!
//! A surface coming out of remeshing can carry open borders, duplicated
//! triangles and stray islands. Before it can be pruned, re-oriented and
//! smoothed it has to be a single closed 2-manifold. This crate provides:
//!
//! - Edge classification by incident triangle count
//! - Boundary triangle removal
//! - Manifold validation (edge counts and triangle membership)
//! - Connected component analysis and largest-component reduction
//! - The combined repair pass, [`repair_topology`]
//!
//! # Example
//!
//! ```
//! use surface_repair::{RepairParams, repair_topology};
//! use surface_types::{Vertex, unit_cube};
//!
//! // A closed cube with a loose triangle attached to nothing
//! let mut mesh = unit_cube();
//! mesh.vertices.push(Vertex::from_coords(5.0, 0.0, 0.0));
//! mesh.vertices.push(Vertex::from_coords(6.0, 0.0, 0.0));
//! mesh.vertices.push(Vertex::from_coords(5.0, 1.0, 0.0));
//! mesh.triangles.push([8, 9, 10]);
//!
//! let summary = repair_topology(&mut mesh, &RepairParams::default()).unwrap();
//! assert_eq!(summary.boundary_triangles_removed, 1);
//! assert_eq!(mesh.triangle_count(), 12);
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod adjacency;
pub mod boundary;
pub mod components;
pub mod edges;
mod error;
mod repair;
pub mod validate;

pub use adjacency::MeshAdjacency;
pub use error::{ManifoldCheck, ManifoldError, ManifoldErrorKind, RepairError, RepairResult};
pub use repair::{RepairParams, RepairSummary, repair_topology, repair_triangles};

// Re-export commonly used items from submodules
pub use boundary::{is_boundary_triangle, remove_boundary_triangles};
pub use components::{VertexComponents, find_vertex_components, keep_largest_component};
pub use edges::{Edge, EdgeCounts, classify_edges, classify_edges_parallel};
pub use validate::{TopologyReport, topology_report, validate_manifold};
