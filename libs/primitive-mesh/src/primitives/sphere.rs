//! # Icosphere Primitive
//!
//! Generates sphere meshes by recursively subdividing an icosahedron.

use crate::error::{MeshError, MeshResult};
use crate::mesh::Mesh;
use config::constants::MAX_SPHERE_SUBDIVISIONS;
use glam::DVec3;
use std::collections::HashMap;

/// The 20 faces of the base icosahedron, wound counter-clockwise when seen
/// from outside.
const ICOSAHEDRON_FACES: [[u32; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

/// Creates an icosphere mesh.
///
/// # Arguments
///
/// * `radius` - The radius of the sphere
/// * `subdivisions` - How many times each triangle is split into four
///
/// # Returns
///
/// A mesh with `10 * 4^n + 2` vertices and `20 * 4^n` triangles, every
/// vertex lying exactly on the sphere.
///
/// # Algorithm
///
/// - Start from the 12 icosahedron vertices, normalized onto the unit sphere
/// - Split every edge at its midpoint, projected back onto the sphere;
///   midpoints are shared between the two triangles of an edge
/// - Replace every triangle by four, preserving winding
/// - Scale by `radius`
///
/// # Example
///
/// ```rust
/// use primitive_mesh::primitives::create_icosphere;
///
/// let mesh = create_icosphere(1.0, 2).unwrap();
/// assert_eq!(mesh.vertex_count(), 162);
/// assert_eq!(mesh.triangle_count(), 320);
/// ```
pub fn create_icosphere(radius: f64, subdivisions: u32) -> MeshResult<Mesh> {
    if !super::is_valid_extent(radius) {
        return Err(MeshError::degenerate(format!(
            "Sphere radius must be positive: {}",
            radius
        )));
    }

    if subdivisions > MAX_SPHERE_SUBDIVISIONS {
        return Err(MeshError::degenerate(format!(
            "Sphere subdivisions must be at most {}: {}",
            MAX_SPHERE_SUBDIVISIONS, subdivisions
        )));
    }

    let t = (1.0 + 5.0_f64.sqrt()) / 2.0;
    let mut points: Vec<DVec3> = [
        DVec3::new(-1.0, t, 0.0),
        DVec3::new(1.0, t, 0.0),
        DVec3::new(-1.0, -t, 0.0),
        DVec3::new(1.0, -t, 0.0),
        DVec3::new(0.0, -1.0, t),
        DVec3::new(0.0, 1.0, t),
        DVec3::new(0.0, -1.0, -t),
        DVec3::new(0.0, 1.0, -t),
        DVec3::new(t, 0.0, -1.0),
        DVec3::new(t, 0.0, 1.0),
        DVec3::new(-t, 0.0, -1.0),
        DVec3::new(-t, 0.0, 1.0),
    ]
    .iter()
    .map(|p| p.normalize())
    .collect();
    let mut faces = ICOSAHEDRON_FACES.to_vec();

    for _ in 0..subdivisions {
        let mut midpoints: HashMap<(u32, u32), u32> = HashMap::with_capacity(faces.len() * 3 / 2);
        let mut next = Vec::with_capacity(faces.len() * 4);

        for &[a, b, c] in &faces {
            let ab = midpoint(&mut points, &mut midpoints, a, b);
            let bc = midpoint(&mut points, &mut midpoints, b, c);
            let ca = midpoint(&mut points, &mut midpoints, c, a);

            next.push([a, ab, ca]);
            next.push([b, bc, ab]);
            next.push([c, ca, bc]);
            next.push([ab, bc, ca]);
        }

        faces = next;
    }

    let vertices = points.into_iter().map(|p| p * radius).collect();
    Ok(Mesh::from_parts(vertices, faces))
}

/// Returns the index of the projected midpoint of edge `(a, b)`, creating it
/// on first use.
fn midpoint(
    points: &mut Vec<DVec3>,
    cache: &mut HashMap<(u32, u32), u32>,
    a: u32,
    b: u32,
) -> u32 {
    let key = if a < b { (a, b) } else { (b, a) };
    *cache.entry(key).or_insert_with(|| {
        let mid = ((points[a as usize] + points[b as usize]) * 0.5).normalize();
        points.push(mid);
        (points.len() - 1) as u32
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_icosahedron_base() {
        let mesh = create_icosphere(1.0, 0).unwrap();
        assert_eq!(mesh.vertex_count(), 12);
        assert_eq!(mesh.triangle_count(), 20);
    }

    #[test]
    fn test_counts_per_level() {
        for level in 0..=3 {
            let mesh = create_icosphere(1.0, level).unwrap();
            let factor = 4usize.pow(level);
            assert_eq!(mesh.vertex_count(), 10 * factor + 2);
            assert_eq!(mesh.triangle_count(), 20 * factor);
        }
    }

    #[test]
    fn test_vertices_on_sphere() {
        let radius = 2.5;
        let mesh = create_icosphere(radius, 2).unwrap();
        for v in mesh.vertices() {
            assert_relative_eq!(v.length(), radius, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_winding_is_outward() {
        let mesh = create_icosphere(1.0, 2).unwrap();
        for i in 0..mesh.triangle_count() {
            let [a, b, c] = mesh.triangle(i);
            let centroid = (mesh.vertex(a) + mesh.vertex(b) + mesh.vertex(c)) / 3.0;
            assert!(mesh.face_normal(i).dot(centroid) > 0.0);
        }
    }

    #[test]
    fn test_icosphere_validates() {
        let mesh = create_icosphere(1.0, 2).unwrap();
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn test_icosphere_is_deterministic() {
        assert_eq!(
            create_icosphere(1.0, 2).unwrap(),
            create_icosphere(1.0, 2).unwrap()
        );
    }

    #[test]
    fn test_icosphere_invalid_radius() {
        assert!(create_icosphere(0.0, 2).is_err());
        assert!(create_icosphere(-1.0, 2).is_err());
        assert!(create_icosphere(f64::NAN, 2).is_err());
        assert!(create_icosphere(f64::INFINITY, 2).is_err());
    }

    #[test]
    fn test_icosphere_too_many_subdivisions() {
        assert!(create_icosphere(1.0, MAX_SPHERE_SUBDIVISIONS + 1).is_err());
    }
}
