//! # Config Crate
//!
//! Centralized configuration constants for the photo/text to 3D model
//! generator. Every primitive dimension, tessellation level and output default
//! is defined here so the mesh and generator crates stay free of literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{CYLINDER_SEGMENTS, SPHERE_SUBDIVISIONS};
//!
//! assert_eq!(CYLINDER_SEGMENTS, 32);
//! assert_eq!(SPHERE_SUBDIVISIONS, 2);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Deterministic**: Fixed values so identical inputs give identical meshes

pub mod constants;
