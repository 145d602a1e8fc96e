//! # Cylinder Primitive
//!
//! Generates mesh for closed cylinders with their axis along Z.

use crate::error::{MeshError, MeshResult};
use crate::mesh::Mesh;
use config::constants::{MAX_SEGMENTS, MIN_SEGMENTS};
use glam::DVec3;
use std::f64::consts::PI;

/// Creates a closed cylinder mesh.
///
/// # Arguments
///
/// * `radius` - Radius of both caps
/// * `height` - Height along Z axis
/// * `segments` - Number of segments around circumference
/// * `center` - If true, span `[-h/2, h/2]`; if false, span `[0, h]`
///
/// # Returns
///
/// A mesh with `2 * segments` vertices (bottom ring, then top ring) and
/// `4 * segments - 4` triangles: two per side quad plus a fan on each cap.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::primitives::create_cylinder;
///
/// let mesh = create_cylinder(1.0, 2.0, 32, true).unwrap();
/// assert_eq!(mesh.vertex_count(), 64);
/// assert_eq!(mesh.triangle_count(), 124);
/// ```
pub fn create_cylinder(radius: f64, height: f64, segments: u32, center: bool) -> MeshResult<Mesh> {
    if !super::is_valid_extent(height) {
        return Err(MeshError::degenerate(format!(
            "Cylinder height must be positive: {}",
            height
        )));
    }

    if !super::is_valid_extent(radius) {
        return Err(MeshError::degenerate(format!(
            "Cylinder radius must be positive: {}",
            radius
        )));
    }

    if !(MIN_SEGMENTS..=MAX_SEGMENTS).contains(&segments) {
        return Err(MeshError::degenerate(format!(
            "Cylinder segments must be within {}..={}: {}",
            MIN_SEGMENTS, MAX_SEGMENTS, segments
        )));
    }

    let n = segments as usize;
    let mut mesh = Mesh::with_capacity(2 * n, 4 * n - 4);

    let (z_bottom, z_top) = if center {
        (-height / 2.0, height / 2.0)
    } else {
        (0.0, height)
    };

    let mut ring = |z: f64| -> Vec<u32> {
        (0..segments)
            .map(|j| {
                let theta = 2.0 * PI * j as f64 / segments as f64;
                mesh.add_vertex(DVec3::new(radius * theta.cos(), radius * theta.sin(), z))
            })
            .collect()
    };
    let bottom = ring(z_bottom);
    let top = ring(z_top);

    // Sides
    for j in 0..n {
        let j_next = (j + 1) % n;
        mesh.add_triangle(bottom[j], bottom[j_next], top[j_next]);
        mesh.add_triangle(bottom[j], top[j_next], top[j]);
    }

    // Bottom cap, facing -Z
    for j in 1..n - 1 {
        mesh.add_triangle(bottom[0], bottom[j + 1], bottom[j]);
    }

    // Top cap, facing +Z
    for j in 1..n - 1 {
        mesh.add_triangle(top[0], top[j], top[j + 1]);
    }

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cylinder_counts() {
        let mesh = create_cylinder(1.0, 2.0, 32, true).unwrap();
        assert_eq!(mesh.vertex_count(), 64);
        assert_eq!(mesh.triangle_count(), 124);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn test_cylinder_centered_extents() {
        let mesh = create_cylinder(1.0, 2.0, 32, true).unwrap();
        let (min, max) = mesh.bounding_box();
        assert_relative_eq!(min.z, -1.0);
        assert_relative_eq!(max.z, 1.0);
        assert_relative_eq!(max.x, 1.0);
        assert_relative_eq!(min.x, -1.0);
    }

    #[test]
    fn test_cylinder_not_centered() {
        let mesh = create_cylinder(0.25, 0.2, 16, false).unwrap();
        let (min, max) = mesh.bounding_box();
        assert_eq!(min.z, 0.0);
        assert_relative_eq!(max.z, 0.2);
    }

    #[test]
    fn test_cylinder_ring_vertices_on_radius() {
        let mesh = create_cylinder(0.25, 0.2, 32, true).unwrap();
        for v in mesh.vertices() {
            assert_relative_eq!(v.truncate().length(), 0.25, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_cylinder_minimum_segments() {
        let mesh = create_cylinder(1.0, 1.0, 3, true).unwrap();
        assert_eq!(mesh.vertex_count(), 6);
        assert_eq!(mesh.triangle_count(), 8);
    }

    #[test]
    fn test_cylinder_winding_is_outward() {
        let mesh = create_cylinder(1.0, 2.0, 12, true).unwrap();
        for i in 0..mesh.triangle_count() {
            let [a, b, c] = mesh.triangle(i);
            let centroid = (mesh.vertex(a) + mesh.vertex(b) + mesh.vertex(c)) / 3.0;
            assert!(mesh.face_normal(i).dot(centroid) > 0.0);
        }
    }

    #[test]
    fn test_cylinder_invalid_height() {
        assert!(create_cylinder(1.0, 0.0, 32, true).is_err());
    }

    #[test]
    fn test_cylinder_invalid_radius() {
        assert!(create_cylinder(0.0, 2.0, 32, true).is_err());
    }

    #[test]
    fn test_cylinder_rejects_non_finite_dimensions() {
        assert!(create_cylinder(f64::NAN, 2.0, 8, true).is_err());
        assert!(create_cylinder(1.0, f64::NAN, 8, true).is_err());
        assert!(create_cylinder(f64::INFINITY, 2.0, 8, true).is_err());
    }

    #[test]
    fn test_cylinder_too_few_segments() {
        assert!(create_cylinder(1.0, 2.0, 2, true).is_err());
    }
}
