//! Indexed triangle surface.

use crate::{InvalidMeshError, Vertex};
use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An indexed triangle surface.
///
/// Stores vertices and triangles separately, with triangles referencing
/// vertices by index. The repair stages replace `triangles` and leave
/// `vertices` untouched.
///
/// # Example
///
/// ```
/// use surface_types::{SurfaceMesh, Vertex};
///
/// let mut mesh = SurfaceMesh::new();
/// mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(0.0, 1.0, 0.0));
/// mesh.triangles.push([0, 1, 2]);
///
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.triangle_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SurfaceMesh {
    /// Vertex data.
    pub vertices: Vec<Vertex>,

    /// Triangles as indices into the vertex array.
    pub triangles: Vec<[u32; 3]>,
}

impl SurfaceMesh {
    /// Create a new empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            triangles: Vec::new(),
        }
    }

    /// Create a mesh with pre-allocated capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Create a mesh from vertices and triangles.
    ///
    /// No validation is performed; call [`SurfaceMesh::validate`] before
    /// handing the mesh to the repair pass.
    #[inline]
    #[must_use]
    pub const fn from_parts(vertices: Vec<Vertex>, triangles: Vec<[u32; 3]>) -> Self {
        Self {
            vertices,
            triangles,
        }
    }

    /// Create a mesh from flat coordinate and index buffers.
    ///
    /// * `positions` - `[x0, y0, z0, x1, y1, z1, ...]`
    /// * `indices` - `[a0, b0, c0, a1, b1, c1, ...]`
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMeshError::MalformedBuffer`] if either buffer length
    /// is not a multiple of 3. Index ranges are not checked here.
    ///
    /// # Example
    ///
    /// ```
    /// use surface_types::SurfaceMesh;
    ///
    /// let positions = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
    /// let mesh = SurfaceMesh::from_raw(&positions, &[0, 1, 2]).unwrap();
    /// assert_eq!(mesh.vertex_count(), 3);
    ///
    /// assert!(SurfaceMesh::from_raw(&positions, &[0, 1]).is_err());
    /// ```
    pub fn from_raw(positions: &[f64], indices: &[u32]) -> Result<Self, InvalidMeshError> {
        if positions.len() % 3 != 0 {
            return Err(InvalidMeshError::MalformedBuffer {
                what: "position",
                len: positions.len(),
            });
        }
        if indices.len() % 3 != 0 {
            return Err(InvalidMeshError::MalformedBuffer {
                what: "index",
                len: indices.len(),
            });
        }

        let vertices = positions
            .chunks_exact(3)
            .map(|c| Vertex::from_coords(c[0], c[1], c[2]))
            .collect();

        let triangles = indices
            .chunks_exact(3)
            .map(|c| [c[0], c[1], c[2]])
            .collect();

        Ok(Self {
            vertices,
            triangles,
        })
    }

    /// Number of vertices, referenced or not.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles.
    #[inline]
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// A mesh with no triangles is empty, whatever its vertex count.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Count vertices referenced by at least one triangle.
    ///
    /// Out-of-range indices are ignored.
    #[must_use]
    pub fn referenced_vertex_count(&self) -> usize {
        let mut referenced = vec![false; self.vertices.len()];
        for tri in &self.triangles {
            for &v in tri {
                if let Some(slot) = referenced.get_mut(v as usize) {
                    *slot = true;
                }
            }
        }
        referenced.iter().filter(|&&r| r).count()
    }

    /// Check the preconditions of the repair pass.
    ///
    /// # Errors
    ///
    /// See [`validate_triangles`].
    pub fn validate(&self) -> Result<(), InvalidMeshError> {
        validate_triangles(&self.triangles, self.vertices.len())
    }

    /// Translate every vertex by the given vector.
    pub fn translate(&mut self, offset: Vector3<f64>) {
        for vertex in &mut self.vertices {
            vertex.position += offset;
        }
    }

    /// Append another mesh, offsetting its triangle indices.
    ///
    /// On error `self` is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMeshError::IndexOverflow`] if the current vertex
    /// count, or any shifted index, does not fit in a `u32`.
    ///
    /// # Example
    ///
    /// ```
    /// use surface_types::unit_tetrahedron;
    ///
    /// let mut mesh = unit_tetrahedron();
    /// mesh.merge(&unit_tetrahedron()).unwrap();
    /// assert_eq!(mesh.vertex_count(), 8);
    /// assert_eq!(mesh.triangles[4], [4, 6, 5]);
    /// ```
    pub fn merge(&mut self, other: &Self) -> Result<(), InvalidMeshError> {
        let overflow = || InvalidMeshError::IndexOverflow {
            vertex_count: self.vertices.len(),
            appended: other.vertices.len(),
        };
        let offset = u32::try_from(self.vertices.len()).map_err(|_| overflow())?;

        let shifted = other
            .triangles
            .iter()
            .map(|&[a, b, c]| {
                Some([
                    a.checked_add(offset)?,
                    b.checked_add(offset)?,
                    c.checked_add(offset)?,
                ])
            })
            .collect::<Option<Vec<_>>>()
            .ok_or_else(overflow)?;

        self.vertices.extend(other.vertices.iter().cloned());
        self.triangles.extend(shifted);
        Ok(())
    }
}

/// Check that every triangle references valid, distinct vertices.
///
/// Triangles are checked in order and the first violation is reported.
///
/// # Errors
///
/// - [`InvalidMeshError::IndexOutOfRange`] if an index is `>= vertex_count`
/// - [`InvalidMeshError::DegenerateTriangle`] if a triangle repeats an index
///
/// # Example
///
/// ```
/// use surface_types::{InvalidMeshError, validate_triangles};
///
/// assert!(validate_triangles(&[[0, 1, 2]], 3).is_ok());
/// assert!(matches!(
///     validate_triangles(&[[0, 1, 3]], 3),
///     Err(InvalidMeshError::IndexOutOfRange { index: 3, .. })
/// ));
/// ```
pub fn validate_triangles(
    triangles: &[[u32; 3]],
    vertex_count: usize,
) -> Result<(), InvalidMeshError> {
    for (i, tri) in triangles.iter().enumerate() {
        if let Some(&index) = tri.iter().find(|&&v| v as usize >= vertex_count) {
            return Err(InvalidMeshError::IndexOutOfRange {
                triangle: i,
                index,
                vertex_count,
            });
        }
        let [a, b, c] = *tri;
        if a == b || b == c || a == c {
            return Err(InvalidMeshError::DegenerateTriangle {
                triangle: i,
                indices: *tri,
            });
        }
    }
    Ok(())
}

/// Create a closed tetrahedron (4 vertices, 4 triangles, 6 edges).
///
/// # Example
///
/// ```
/// use surface_types::unit_tetrahedron;
///
/// let tet = unit_tetrahedron();
/// assert_eq!(tet.vertex_count(), 4);
/// assert_eq!(tet.triangle_count(), 4);
/// ```
#[must_use]
pub fn unit_tetrahedron() -> SurfaceMesh {
    let mut mesh = SurfaceMesh::with_capacity(4, 4);

    mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
    mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
    mesh.vertices.push(Vertex::from_coords(0.5, 0.866, 0.0));
    mesh.vertices.push(Vertex::from_coords(0.5, 0.289, 0.816));

    // CCW when viewed from outside
    mesh.triangles.push([0, 2, 1]); // bottom
    mesh.triangles.push([0, 1, 3]); // front
    mesh.triangles.push([1, 2, 3]); // right
    mesh.triangles.push([2, 0, 3]); // left

    mesh
}

/// Create a closed unit cube (8 vertices, 12 triangles).
///
/// # Example
///
/// ```
/// use surface_types::unit_cube;
///
/// let cube = unit_cube();
/// assert_eq!(cube.vertex_count(), 8);
/// assert_eq!(cube.triangle_count(), 12);
/// ```
#[must_use]
pub fn unit_cube() -> SurfaceMesh {
    let mut mesh = SurfaceMesh::with_capacity(8, 12);

    mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0)); // 0
    mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0)); // 1
    mesh.vertices.push(Vertex::from_coords(1.0, 1.0, 0.0)); // 2
    mesh.vertices.push(Vertex::from_coords(0.0, 1.0, 0.0)); // 3
    mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 1.0)); // 4
    mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 1.0)); // 5
    mesh.vertices.push(Vertex::from_coords(1.0, 1.0, 1.0)); // 6
    mesh.vertices.push(Vertex::from_coords(0.0, 1.0, 1.0)); // 7

    // z=0
    mesh.triangles.push([0, 2, 1]);
    mesh.triangles.push([0, 3, 2]);
    // z=1
    mesh.triangles.push([4, 5, 6]);
    mesh.triangles.push([4, 6, 7]);
    // y=0
    mesh.triangles.push([0, 1, 5]);
    mesh.triangles.push([0, 5, 4]);
    // y=1
    mesh.triangles.push([3, 7, 6]);
    mesh.triangles.push([3, 6, 2]);
    // x=0
    mesh.triangles.push([0, 4, 7]);
    mesh.triangles.push([0, 7, 3]);
    // x=1
    mesh.triangles.push([1, 2, 6]);
    mesh.triangles.push([1, 6, 5]);

    mesh
}
