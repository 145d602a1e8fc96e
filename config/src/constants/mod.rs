//! # Configuration Constants
//!
//! Centralized constants for the shape generator. Primitive dimensions,
//! tessellation levels, prompt wording and output defaults are defined here.
//!
//! ## Categories
//!
//! - **Primitives**: Canonical sizes of the cube, sphere and cylinder
//! - **Car Assembly**: Body extents and wheel placement
//! - **Limits**: Maximum mesh sizes
//! - **Prompt**: Enhanced prompt wording
//! - **Output**: Default export and preview settings

use std::fmt;

// =============================================================================
// PRIMITIVE CONSTANTS
// =============================================================================

/// Half the edge length of the canonical cube. The cube spans
/// `[-CUBE_HALF_EXTENT, CUBE_HALF_EXTENT]` on every axis.
pub const CUBE_HALF_EXTENT: f64 = 1.0;

/// Radius of the canonical icosphere.
pub const SPHERE_RADIUS: f64 = 1.0;

/// Number of times the base icosahedron is subdivided.
///
/// Each level quadruples the face count: 20 → 80 → 320.
///
/// # Example
///
/// ```rust
/// use config::constants::SPHERE_SUBDIVISIONS;
///
/// let faces = 20 * 4u32.pow(SPHERE_SUBDIVISIONS);
/// assert_eq!(faces, 320);
/// ```
pub const SPHERE_SUBDIVISIONS: u32 = 2;

/// Upper bound on icosphere subdivision. Level 8 already yields over a
/// million triangles.
pub const MAX_SPHERE_SUBDIVISIONS: u32 = 7;

/// Radius of the canonical cylinder.
pub const CYLINDER_RADIUS: f64 = 1.0;

/// Height of the canonical cylinder along Z.
pub const CYLINDER_HEIGHT: f64 = 2.0;

/// Radial segment count used for every cylinder unless overridden.
///
/// # Example
///
/// ```rust
/// use config::constants::{CYLINDER_SEGMENTS, MIN_SEGMENTS};
///
/// assert!(CYLINDER_SEGMENTS >= MIN_SEGMENTS);
/// ```
pub const CYLINDER_SEGMENTS: u32 = 32;

/// Minimum radial segments for a closed cylinder cross-section.
pub const MIN_SEGMENTS: u32 = 3;

/// Maximum radial segments accepted for a cylinder.
pub const MAX_SEGMENTS: u32 = 1000;

// =============================================================================
// CAR ASSEMBLY CONSTANTS
// =============================================================================

/// Body extents of the car (length along X, width along Y, height along Z).
pub const CAR_BODY_EXTENTS: [f64; 3] = [2.0, 1.0, 0.5];

/// Radius of each wheel.
pub const WHEEL_RADIUS: f64 = 0.25;

/// Height (thickness) of each wheel along its Z axis.
pub const WHEEL_HEIGHT: f64 = 0.2;

/// Wheel centers relative to the body center, in assembly order.
///
/// # Example
///
/// ```rust
/// use config::constants::WHEEL_OFFSETS;
///
/// assert_eq!(WHEEL_OFFSETS.len(), 4);
/// assert!(WHEEL_OFFSETS.iter().all(|o| o[2] == -0.25));
/// ```
pub const WHEEL_OFFSETS: [[f64; 3]; 4] = [
    [-0.5, -0.6, -0.25],
    [0.5, -0.6, -0.25],
    [-0.5, 0.6, -0.25],
    [0.5, 0.6, -0.25],
];

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of vertices in a single mesh.
pub const MAX_VERTICES: usize = 10_000_000;

/// Maximum number of triangles in a single mesh.
pub const MAX_TRIANGLES: usize = 10_000_000;

// =============================================================================
// PROMPT CONSTANTS
// =============================================================================

/// Leading text of the enhanced prompt.
pub const ENHANCED_PROMPT_PREFIX: &str = "A 3D model of ";

/// Trailing text of the enhanced prompt.
pub const ENHANCED_PROMPT_SUFFIX: &str = ", simple geometry, detailed";

// =============================================================================
// OUTPUT CONSTANTS
// =============================================================================

/// Directory the command-line front end writes into by default.
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Default file name for models generated from text.
pub const TEXT_MODEL_FILE: &str = "text_model.obj";

/// Default file name for models generated from an image.
pub const IMAGE_MODEL_FILE: &str = "image_model.obj";

/// Preview figure width in SVG user units.
pub const PREVIEW_WIDTH: f64 = 800.0;

/// Preview figure height in SVG user units.
pub const PREVIEW_HEIGHT: f64 = 640.0;

/// Title drawn above every preview.
pub const PREVIEW_TITLE: &str = "3D Model Visualization";

/// Surface opacity of preview triangles.
pub const PREVIEW_ALPHA: f64 = 0.7;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Wraps normalized prompt text in the enhanced prompt template.
///
/// # Example
///
/// ```rust
/// use config::constants::enhanced_prompt;
///
/// assert_eq!(
///     enhanced_prompt("a small toy car"),
///     "A 3D model of a small toy car, simple geometry, detailed"
/// );
/// ```
pub fn enhanced_prompt(normalized_text: &str) -> String {
    format!("{ENHANCED_PROMPT_PREFIX}{normalized_text}{ENHANCED_PROMPT_SUFFIX}")
}

// =============================================================================
// GENERATOR CONFIG
// =============================================================================

/// Tessellation settings shared by the shape library.
///
/// # Examples
/// ```
/// use config::constants::GeneratorConfig;
/// let config = GeneratorConfig::default();
/// assert_eq!(config.cylinder_segments, 32);
/// assert_eq!(config.sphere_subdivisions, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Radial segments for every cylinder, wheels included.
    pub cylinder_segments: u32,
    /// Icosphere subdivision level.
    pub sphere_subdivisions: u32,
}

impl GeneratorConfig {
    /// Builds a configuration, rejecting segment counts that cannot close a
    /// polygon and subdivision levels that would explode the mesh.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GeneratorConfig;
    /// let cfg = GeneratorConfig::new(16, 1).expect("valid config");
    /// assert_eq!(cfg.cylinder_segments, 16);
    /// assert!(GeneratorConfig::new(2, 1).is_err());
    /// ```
    pub fn new(cylinder_segments: u32, sphere_subdivisions: u32) -> Result<Self, ConfigError> {
        if !(MIN_SEGMENTS..=MAX_SEGMENTS).contains(&cylinder_segments) {
            return Err(ConfigError::InvalidSegments(cylinder_segments));
        }
        if sphere_subdivisions > MAX_SPHERE_SUBDIVISIONS {
            return Err(ConfigError::InvalidSubdivisions(sphere_subdivisions));
        }
        Ok(Self {
            cylinder_segments,
            sphere_subdivisions,
        })
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            cylinder_segments: CYLINDER_SEGMENTS,
            sphere_subdivisions: SPHERE_SUBDIVISIONS,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the segment count is outside `MIN_SEGMENTS..=MAX_SEGMENTS`.
    InvalidSegments(u32),
    /// Raised when the subdivision level exceeds `MAX_SPHERE_SUBDIVISIONS`.
    InvalidSubdivisions(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidSegments(value) => {
                write!(
                    f,
                    "cylinder_segments must be within {MIN_SEGMENTS}..={MAX_SEGMENTS}: {value}"
                )
            }
            ConfigError::InvalidSubdivisions(value) => {
                write!(
                    f,
                    "sphere_subdivisions must be <= {MAX_SPHERE_SUBDIVISIONS}: {value}"
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}
