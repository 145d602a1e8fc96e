//! # Box Primitive
//!
//! Generates mesh for cubes and rectangular boxes.

use crate::error::{MeshError, MeshResult};
use crate::mesh::Mesh;
use glam::DVec3;

/// Box corners as fractions of the extents: bottom ring, then top ring.
const BOX_CORNERS: [[f64; 3]; 8] = [
    [0.0, 0.0, 0.0],
    [1.0, 0.0, 0.0],
    [1.0, 1.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 0.0, 1.0],
    [1.0, 0.0, 1.0],
    [1.0, 1.0, 1.0],
    [0.0, 1.0, 1.0],
];

/// Two triangles per side, ordered -z, +z, -y, +y, -x, +x.
const BOX_FACES: [[u32; 3]; 12] = [
    [0, 2, 1],
    [0, 3, 2],
    [4, 5, 6],
    [4, 6, 7],
    [0, 1, 5],
    [0, 5, 4],
    [2, 3, 7],
    [2, 7, 6],
    [3, 0, 4],
    [3, 4, 7],
    [1, 2, 6],
    [1, 6, 5],
];

/// Creates a rectangular box mesh.
///
/// # Arguments
///
/// * `size` - Extents [x, y, z]
/// * `center` - If true, center at origin; if false, corner at origin
///
/// # Returns
///
/// A mesh with 8 vertices and 12 triangles (2 per side), wound
/// counter-clockwise when seen from outside.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::primitives::create_box;
/// use glam::DVec3;
///
/// let mesh = create_box(DVec3::new(2.0, 1.0, 0.5), true).unwrap();
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
pub fn create_box(size: DVec3, center: bool) -> MeshResult<Mesh> {
    if !size.to_array().into_iter().all(super::is_valid_extent) {
        return Err(MeshError::degenerate(format!(
            "Box extents must be positive: {:?}",
            size
        )));
    }

    let origin = if center { -size / 2.0 } else { DVec3::ZERO };
    let vertices = BOX_CORNERS
        .iter()
        .map(|&corner| origin + DVec3::from_array(corner) * size)
        .collect();

    Ok(Mesh::from_parts(vertices, BOX_FACES.to_vec()))
}
