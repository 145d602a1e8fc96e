//! # Shape Gen
//!
//! Turns a photo or a short text description into a primitive 3D model.
//!
//! ## Architecture
//!
//! ```text
//! ClassificationInput → Classifier → ShapeId → ShapeLibrary → Mesh
//!                                                             ↓
//!                                          ModelGenerator (validate, export)
//! ```
//!
//! There is no learned inference: text is matched against a keyword table
//! and photos always become a cube.
//!
//! ## Usage
//!
//! ```rust
//! use shape_gen::{ModelGenerator, ShapeId};
//!
//! let generator = ModelGenerator::default();
//! let model = generator.generate_from_text("A small toy car").unwrap();
//! assert_eq!(model.classification.shape, ShapeId::Car);
//! assert!(model.mesh.validate().is_ok());
//! ```

pub mod assembler;
pub mod classifier;
pub mod error;
pub mod library;
pub mod shape;

pub use assembler::{GeneratedModel, ModelGenerator};
pub use classifier::{Classification, ClassificationInput, Classifier, KeywordRule};
pub use error::{GenerateError, GenerateResult};
pub use library::ShapeLibrary;
pub use shape::ShapeId;
