//! # Primitives
//!
//! Mesh generation for canonical solids (box, icosphere, cylinder).

pub mod cube;
pub mod cylinder;
pub mod sphere;

pub use cube::create_box;
pub use cylinder::create_cylinder;
pub use sphere::create_icosphere;

/// True for dimensions a primitive can be built from: finite and above zero.
fn is_valid_extent(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
