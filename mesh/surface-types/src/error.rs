//! Errors for malformed surface input.

use thiserror::Error;

/// A mesh that breaks the preconditions of the repair pass.
///
/// These are reported at the boundary, before any repair stage runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidMeshError {
    /// A triangle references a vertex past the end of the vertex sequence.
    #[error("triangle {triangle} references vertex {index} (mesh has {vertex_count} vertices)")]
    IndexOutOfRange {
        /// Position of the offending triangle.
        triangle: usize,
        /// The out-of-range vertex index.
        index: u32,
        /// Number of vertices in the mesh.
        vertex_count: usize,
    },

    /// A triangle repeats a vertex index.
    #[error("triangle {triangle} is degenerate: {indices:?}")]
    DegenerateTriangle {
        /// Position of the offending triangle.
        triangle: usize,
        /// The triangle's vertex indices.
        indices: [u32; 3],
    },

    /// A flat coordinate or index buffer whose length is not a multiple of 3.
    #[error("{what} buffer length {len} is not a multiple of 3")]
    MalformedBuffer {
        /// Which buffer was malformed.
        what: &'static str,
        /// Its length.
        len: usize,
    },

    /// Appending a mesh would push a triangle index past `u32::MAX`.
    #[error("appending {appended} vertices to {vertex_count} overflows u32 triangle indices")]
    IndexOverflow {
        /// Vertices already in the receiving mesh.
        vertex_count: usize,
        /// Vertices in the mesh being appended.
        appended: usize,
    },
}
