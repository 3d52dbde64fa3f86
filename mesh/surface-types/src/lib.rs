//! Core surface types for the topology repair pass.
//!
//! This crate provides the data model shared by the repair stages:
//!
//! - [`Vertex`] - A point in 3D space, identified by its index
//! - [`SurfaceMesh`] - A vertex sequence plus triangles referencing it by index
//! - [`InvalidMeshError`] - Precondition violations caught before repair runs
//!
//! # Indices
//!
//! Triangles are `[u32; 3]` indices into the vertex sequence. Indices are
//! only meaningful relative to the mesh that owns the vertices. The repair
//! stages replace the triangle collection but never touch the vertices, so
//! unreferenced vertices can remain after repair; compacting them is left to
//! whoever consumes the repaired surface.
//!
//! # Winding
//!
//! Winding order is carried through unchanged. Nothing in this crate checks
//! or fixes orientation.
//!
//! # Example
//!
//! ```
//! use surface_types::{SurfaceMesh, Vertex};
//!
//! let mut mesh = SurfaceMesh::new();
//! mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
//! mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
//! mesh.vertices.push(Vertex::from_coords(0.0, 1.0, 0.0));
//! mesh.triangles.push([0, 1, 2]);
//!
//! assert_eq!(mesh.triangle_count(), 1);
//! assert!(mesh.validate().is_ok());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod error;
mod mesh;
mod vertex;

pub use error::InvalidMeshError;
pub use mesh::{SurfaceMesh, unit_cube, unit_tetrahedron, validate_triangles};
pub use vertex::Vertex;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
