//! # Primitive Mesh
//!
//! Triangle meshes for the shape generator.
//!
//! ## Architecture
//!
//! ```text
//! primitives (box, icosphere, cylinder) → Mesh → obj (file) / preview (SVG)
//! ```
//!
//! ## Modules
//!
//! - **mesh**: Indexed triangle mesh with append-with-offset assembly
//! - **primitives**: Canonical solids built from explicit parameters
//! - **obj**: Wavefront OBJ export and import
//! - **preview**: Static surface plot of a mesh
//!
//! ## Usage
//!
//! ```rust
//! use primitive_mesh::primitives::{create_box, create_cylinder};
//! use glam::DVec3;
//!
//! let mut mesh = create_box(DVec3::new(2.0, 1.0, 0.5), true).unwrap();
//! let wheel = create_cylinder(0.25, 0.2, 32, true).unwrap();
//! mesh.append(&wheel.translated(DVec3::new(0.5, 0.6, -0.25)));
//! assert_eq!(mesh.vertex_count(), 8 + 64);
//! ```

pub mod error;
pub mod mesh;
pub mod obj;
pub mod preview;
pub mod primitives;

pub use error::{MeshError, MeshResult};
pub use mesh::Mesh;
pub use obj::{export_obj, load_obj};
pub use preview::{visualize, Figure};
