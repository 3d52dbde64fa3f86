//! End-to-end scenarios for the repair stages.

use surface_repair::{
    ManifoldCheck, ManifoldErrorKind, RepairError, RepairParams, classify_edges,
    find_vertex_components, keep_largest_component, remove_boundary_triangles, repair_topology,
    validate_manifold,
};
use surface_types::{SurfaceMesh, Vector3, Vertex, unit_cube, unit_tetrahedron};

fn single_triangle() -> SurfaceMesh {
    let mut mesh = SurfaceMesh::new();
    mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
    mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
    mesh.vertices.push(Vertex::from_coords(0.0, 1.0, 0.0));
    mesh.triangles.push([0, 1, 2]);
    mesh
}

fn split_quad() -> SurfaceMesh {
    let mut mesh = SurfaceMesh::new();
    mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
    mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
    mesh.vertices.push(Vertex::from_coords(0.0, 1.0, 0.0));
    mesh.vertices.push(Vertex::from_coords(1.0, 1.0, 0.0));
    mesh.triangles.push([0, 1, 2]);
    mesh.triangles.push([1, 3, 2]);
    mesh
}

fn two_tetrahedra() -> SurfaceMesh {
    let mut mesh = unit_tetrahedron();
    let mut second = unit_tetrahedron();
    second.translate(Vector3::new(3.0, 0.0, 0.0));
    mesh.merge(&second).unwrap();
    mesh
}

// =============================================================================
// Scenario 1: isolated triangle
// =============================================================================

#[test]
fn isolated_triangle_is_never_manifold() {
    let mesh = single_triangle();
    let counts = classify_edges(&mesh.triangles);
    assert_eq!(counts.len(), 3);
    assert!(counts.iter().all(|(_, c)| c == 1));

    let err = validate_manifold(&mesh.triangles).unwrap_err();
    assert_eq!(err.kind, ManifoldErrorKind::DuplicateOrMissingEdge);
    assert_eq!(err.check, ManifoldCheck::EdgeCount);
}

#[test]
fn isolated_triangle_repairs_to_empty() {
    let mut mesh = single_triangle();
    let summary = repair_topology(&mut mesh, &RepairParams::default()).unwrap();
    assert!(summary.is_empty());
    assert_eq!(summary.boundary_triangles_removed, 1);
}

// =============================================================================
// Scenario 2: quad split into two triangles
// =============================================================================

#[test]
fn split_quad_counts() {
    let mesh = split_quad();
    let counts = classify_edges(&mesh.triangles);

    assert_eq!(counts.len(), 5);
    assert_eq!(counts.count(1, 2), 2);
    assert_eq!(counts.boundary_edge_count(), 4);
}

#[test]
fn split_quad_loses_both_triangles() {
    let mesh = split_quad();
    let counts = classify_edges(&mesh.triangles);

    let kept = remove_boundary_triangles(&mesh.triangles, &counts);
    assert!(kept.is_empty());

    // Downstream stages tolerate the empty result
    assert!(validate_manifold(&kept).is_ok());
    assert!(keep_largest_component(&mesh.vertices, &kept).is_empty());
}

// =============================================================================
// Scenario 3: closed tetrahedron
// =============================================================================

#[test]
fn tetrahedron_passes_every_stage_unchanged() {
    let mesh = unit_tetrahedron();
    let counts = classify_edges(&mesh.triangles);
    assert_eq!(counts.len(), 6);
    assert!(counts.iter().all(|(_, c)| c == 2));

    let stripped = remove_boundary_triangles(&mesh.triangles, &counts);
    assert_eq!(stripped, mesh.triangles);

    assert!(validate_manifold(&stripped).is_ok());

    let reduced = keep_largest_component(&mesh.vertices, &stripped);
    assert_eq!(reduced, mesh.triangles);
}

// =============================================================================
// Scenario 4: two disjoint tetrahedra
// =============================================================================

#[test]
fn two_tetrahedra_keep_the_first() {
    let mesh = two_tetrahedra();
    assert_eq!(mesh.vertex_count(), 8);
    assert_eq!(mesh.triangle_count(), 8);

    let comps = find_vertex_components(mesh.vertex_count(), &mesh.triangles);
    assert_eq!(comps.sizes(), &[4, 4]);

    let kept = keep_largest_component(&mesh.vertices, &mesh.triangles);
    assert_eq!(kept, mesh.triangles[..4].to_vec());
}

#[test]
fn two_tetrahedra_are_reproducible() {
    let mesh = two_tetrahedra();
    let first = keep_largest_component(&mesh.vertices, &mesh.triangles);
    for _ in 0..10 {
        assert_eq!(keep_largest_component(&mesh.vertices, &mesh.triangles), first);
    }
}

#[test]
fn two_tetrahedra_full_pass() {
    let mut mesh = two_tetrahedra();
    let summary = repair_topology(&mut mesh, &RepairParams::sequential()).unwrap();

    assert_eq!(summary.components_found, 2);
    assert_eq!(summary.component_triangles_removed, 4);
    assert_eq!(mesh.triangles, unit_tetrahedron().triangles);
    assert_eq!(mesh.vertex_count(), 8);
}

// =============================================================================
// Punched holes and loose flaps
// =============================================================================

#[test]
fn punched_hole_fails_after_stripping() {
    // Removing one face leaves a hole; stripping its neighbours widens it
    let mut mesh = unit_cube();
    mesh.triangles.remove(0);
    let before = mesh.clone();

    let err = repair_topology(&mut mesh, &RepairParams::sequential()).unwrap_err();
    match err {
        RepairError::Manifold(e) => {
            assert_eq!(e.count, 1);
            assert_eq!(e.check, ManifoldCheck::EdgeCount);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(mesh, before);
}

#[test]
fn loose_flaps_strip_back_to_closed_surface() {
    let mut mesh = unit_cube();
    for k in 0..4u32 {
        let base = 8 + 3 * k;
        let x = 3.0 + f64::from(k);
        mesh.vertices.push(Vertex::from_coords(x, 0.0, 0.0));
        mesh.vertices.push(Vertex::from_coords(x + 0.5, 0.0, 0.0));
        mesh.vertices.push(Vertex::from_coords(x, 0.5, 0.0));
        mesh.triangles.push([base, base + 1, base + 2]);
    }

    let summary = repair_topology(&mut mesh, &RepairParams::sequential()).unwrap();

    assert_eq!(summary.boundary_triangles_removed, 4);
    assert_eq!(summary.components_found, 1);
    assert_eq!(mesh.triangles, unit_cube().triangles);
}

// =============================================================================
// Input boundary
// =============================================================================

#[test]
fn degenerate_input_rejected_before_repair() {
    let mut mesh = unit_tetrahedron();
    mesh.triangles.push([1, 1, 2]);

    let err = repair_topology(&mut mesh, &RepairParams::default()).unwrap_err();
    assert!(matches!(err, RepairError::InvalidMesh(_)));
    assert_eq!(mesh.triangle_count(), 5);
}
