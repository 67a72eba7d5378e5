use super::*;

const EPSILON: f64 = 1e-9;

fn edges_in_bounds(w: &Wireframe) -> bool {
    w.edges
        .iter()
        .all(|&(a, b)| a < w.vertices.len() && b < w.vertices.len() && a != b)
}

// --- clamp_segments ---

#[test]
fn clamp_segments_raises_small_counts() {
    assert_eq!(clamp_segments(0), MIN_SEGMENTS);
    assert_eq!(clamp_segments(1), MIN_SEGMENTS);
}

#[test]
fn clamp_segments_caps_dense_counts() {
    assert_eq!(clamp_segments(64), MAX_SEGMENTS);
    assert_eq!(clamp_segments(100), MAX_SEGMENTS);
}

#[test]
fn clamp_segments_keeps_mid_range() {
    assert_eq!(clamp_segments(16), 16);
}

// --- Sphere ---

#[test]
fn sphere_counts_match_layout() {
    let w = Primitive::Sphere { radius: 1.0, width_segments: 8, height_segments: 6 }.wireframe();
    assert_eq!(w.vertices.len(), 8 * 5 + 2);
    assert_eq!(w.edges.len(), 8 * 5 + 8 * 6);
    assert!(edges_in_bounds(&w));
}

#[test]
fn sphere_vertices_lie_on_radius() {
    let w = Primitive::sphere(1.5, 12).wireframe();
    for v in &w.vertices {
        assert!((v.length() - 1.5).abs() < EPSILON, "vertex {v:?} off sphere");
    }
}

#[test]
fn sphere_segments_are_clamped() {
    let dense = Primitive::sphere(1.0, 64).wireframe();
    let capped = Primitive::sphere(1.0, MAX_SEGMENTS).wireframe();
    assert_eq!(dense.vertices.len(), capped.vertices.len());
}

// --- Cuboid ---

#[test]
fn cube_has_eight_vertices_and_twelve_edges() {
    let w = Primitive::cube(2.0).wireframe();
    assert_eq!(w.vertices.len(), 8);
    assert_eq!(w.edges.len(), 12);
    assert!(edges_in_bounds(&w));
}

#[test]
fn cube_edges_all_have_side_length() {
    let w = Primitive::cube(0.8).wireframe();
    for &(a, b) in &w.edges {
        let len = (w.vertices[a] - w.vertices[b]).length();
        assert!((len - 0.8).abs() < EPSILON);
    }
}

// --- Torus ---

#[test]
fn torus_counts_match_grid() {
    let w = Primitive::torus(1.0, 0.4, 8, 12).wireframe();
    assert_eq!(w.vertices.len(), 8 * 12);
    assert_eq!(w.edges.len(), 2 * 8 * 12);
    assert!(edges_in_bounds(&w));
}

#[test]
fn torus_vertices_stay_within_ring_bounds() {
    let w = Primitive::torus(1.0, 0.4, 16, 100).wireframe();
    for v in &w.vertices {
        let planar = (v.x * v.x + v.y * v.y).sqrt();
        assert!(planar >= 0.6 - EPSILON && planar <= 1.4 + EPSILON);
        assert!(v.z.abs() <= 0.4 + EPSILON);
    }
}

// --- Names ---

#[test]
fn shape_names() {
    assert_eq!(Primitive::sphere(1.0, 8).shape_name(), "sphere");
    assert_eq!(Primitive::cube(1.0).shape_name(), "box");
    assert_eq!(Primitive::torus(1.0, 0.3, 8, 8).shape_name(), "torus");
}
