//! Error types for the repair pass.

use surface_types::InvalidMeshError;
use thiserror::Error;

use crate::edges::Edge;

/// Result type for repair operations.
pub type RepairResult<T> = Result<T, RepairError>;

/// Errors that can occur during topology repair.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepairError {
    /// The input mesh broke a precondition (bad index, repeated vertex).
    #[error("invalid input mesh: {0}")]
    InvalidMesh(#[from] InvalidMeshError),

    /// The boundary-stripped surface is not a closed 2-manifold.
    #[error(transparent)]
    Manifold(#[from] ManifoldError),
}

/// Category of a manifold failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ManifoldErrorKind {
    /// An edge is shared by fewer or more than two triangles.
    DuplicateOrMissingEdge,
}

/// Which derivation of edge membership detected the failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ManifoldCheck {
    /// Occurrence count in the normalised edge table.
    EdgeCount,
    /// Number of distinct triangles containing both edge endpoints.
    TriangleMembership,
}

impl std::fmt::Display for ManifoldCheck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EdgeCount => write!(f, "edge count"),
            Self::TriangleMembership => write!(f, "triangle membership"),
        }
    }
}

/// The surface fails the two-triangles-per-edge invariant.
///
/// There is no recovery path: the surface handed to the repair pass is
/// structurally unusable for orientation and smoothing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "surface is not a closed manifold: edge ({}, {}): {count} incident triangle(s) by {check}, expected 2",
    .edge.a(),
    .edge.b()
)]
pub struct ManifoldError {
    /// Failure category.
    pub kind: ManifoldErrorKind,
    /// The smallest offending edge.
    pub edge: Edge,
    /// Observed number of incident triangles.
    pub count: u32,
    /// Derivation that detected the failure.
    pub check: ManifoldCheck,
}

impl ManifoldError {
    /// Create a duplicate-or-missing-edge error.
    #[must_use]
    pub const fn duplicate_or_missing(edge: Edge, count: u32, check: ManifoldCheck) -> Self {
        Self {
            kind: ManifoldErrorKind::DuplicateOrMissingEdge,
            edge,
            count,
            check,
        }
    }
}
