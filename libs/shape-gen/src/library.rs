//! # Shape Library
//!
//! Deterministic construction of the four canonical shapes.
//!
//! | shape | construction | vertices | triangles |
//! |---|---|---|---|
//! | cube | box spanning `[-1, 1]³` | 8 | 12 |
//! | sphere | unit icosphere, 2 subdivisions | 162 | 320 |
//! | cylinder | r = 1, h = 2, 32 segments, centered | 64 | 124 |
//! | car | 2 × 1 × 0.5 body plus four wheels | 264 | 508 |
//!
//! Counts assume [`GeneratorConfig::default`].

use crate::shape::ShapeId;
use config::constants::{
    GeneratorConfig, CAR_BODY_EXTENTS, CUBE_HALF_EXTENT, CYLINDER_HEIGHT, CYLINDER_RADIUS,
    SPHERE_RADIUS, WHEEL_HEIGHT, WHEEL_OFFSETS, WHEEL_RADIUS,
};
use glam::DVec3;
use primitive_mesh::primitives::{create_box, create_cylinder, create_icosphere};
use primitive_mesh::{Mesh, MeshResult};
use tracing::debug;

/// Builds primitive meshes for shape identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShapeLibrary {
    config: GeneratorConfig,
}

impl ShapeLibrary {
    /// Creates a library with explicit tessellation settings.
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Returns the tessellation settings.
    pub fn config(&self) -> GeneratorConfig {
        self.config
    }

    /// Builds the mesh for `shape`.
    pub fn build(&self, shape: ShapeId) -> MeshResult<Mesh> {
        let mesh = match shape {
            ShapeId::Cube => self.build_cube(),
            ShapeId::Sphere => self.build_sphere(),
            ShapeId::Cylinder => self.build_cylinder(),
            ShapeId::Car => self.build_car(),
        }?;
        debug!(
            %shape,
            vertices = mesh.vertex_count(),
            faces = mesh.triangle_count(),
            "built shape"
        );
        Ok(mesh)
    }

    /// Builds the mesh for a shape name; unknown names build a cube.
    pub fn build_named(&self, name: &str) -> MeshResult<Mesh> {
        self.build(ShapeId::from_name(name))
    }

    /// Axis-aligned cube spanning `[-1, 1]` on every axis.
    pub fn build_cube(&self) -> MeshResult<Mesh> {
        create_box(DVec3::splat(2.0 * CUBE_HALF_EXTENT), true)
    }

    /// Unit icosphere.
    pub fn build_sphere(&self) -> MeshResult<Mesh> {
        create_icosphere(SPHERE_RADIUS, self.config.sphere_subdivisions)
    }

    /// Cylinder of radius 1 and height 2 centered on the origin, axis along Z.
    pub fn build_cylinder(&self) -> MeshResult<Mesh> {
        self.build_cylinder_with_segments(self.config.cylinder_segments)
    }

    /// Canonical cylinder with an explicit radial segment count.
    pub fn build_cylinder_with_segments(&self, segments: u32) -> MeshResult<Mesh> {
        create_cylinder(CYLINDER_RADIUS, CYLINDER_HEIGHT, segments, true)
    }

    /// Crude car: a box body with four wheels.
    ///
    /// Parts are concatenated body first, then wheels in [`WHEEL_OFFSETS`]
    /// order. Overlapping geometry is kept as is.
    pub fn build_car(&self) -> MeshResult<Mesh> {
        let mut car = create_box(DVec3::from_array(CAR_BODY_EXTENTS), true)?;
        let wheel = create_cylinder(
            WHEEL_RADIUS,
            WHEEL_HEIGHT,
            self.config.cylinder_segments,
            true,
        )?;

        for offset in WHEEL_OFFSETS {
            car.append(&wheel.clone().translated(DVec3::from_array(offset)));
        }

        Ok(car)
    }
}
