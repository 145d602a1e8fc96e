//! # Model Generator
//!
//! Ties classification, shape construction and export together.
//!
//! ```text
//! image path / text → Classifier → ShapeId → ShapeLibrary → Mesh → validate
//!                                                                   ↓
//!                                                    export_obj / visualize
//! ```
//!
//! Every call builds a fresh mesh; the generator holds no per-request state,
//! so repeated calls with the same input return equal meshes.

use crate::classifier::{Classification, ClassificationInput, Classifier};
use crate::error::{GenerateError, GenerateResult};
use crate::library::ShapeLibrary;
use config::constants::GeneratorConfig;
use primitive_mesh::{export_obj, preview, Figure, Mesh};
use std::path::Path;
use tracing::info;

/// A generated mesh together with the classification that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedModel {
    /// How the input was classified.
    pub classification: Classification,
    /// The validated mesh.
    pub mesh: Mesh,
}

impl GeneratedModel {
    /// Consumes the model, returning only the mesh.
    pub fn into_mesh(self) -> Mesh {
        self.mesh
    }
}

/// Generates primitive models from photos or text prompts.
#[derive(Debug, Clone, Default)]
pub struct ModelGenerator {
    classifier: Classifier,
    library: ShapeLibrary,
}

impl ModelGenerator {
    /// Creates a generator with the default keyword table and the given
    /// tessellation settings.
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            classifier: Classifier::default(),
            library: ShapeLibrary::new(config),
        }
    }

    /// Replaces the classifier.
    pub fn with_classifier(mut self, classifier: Classifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// Returns the classifier.
    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Returns the shape library.
    pub fn library(&self) -> &ShapeLibrary {
        &self.library
    }

    /// Generates a model from a photo.
    ///
    /// The file must exist, but its contents do not influence the result:
    /// every photo currently produces the cube.
    pub fn generate_from_image(&self, image_path: impl AsRef<Path>) -> GenerateResult<GeneratedModel> {
        let image_path = image_path.as_ref();
        if !image_path.is_file() {
            return Err(GenerateError::ImageNotFound {
                path: image_path.to_path_buf(),
            });
        }
        self.package(self.classifier.classify_image(image_path))
    }

    /// Generates a model from a text prompt.
    pub fn generate_from_text(&self, text: &str) -> GenerateResult<GeneratedModel> {
        self.package(self.classifier.classify_text(text))
    }

    /// Generates a model from either kind of input.
    pub fn generate(&self, input: &ClassificationInput) -> GenerateResult<GeneratedModel> {
        match input {
            ClassificationInput::Image(path) => self.generate_from_image(path),
            ClassificationInput::Text(text) => self.generate_from_text(text),
        }
    }

    /// Generates a model from a photo and writes it as OBJ to `output_path`.
    pub fn generate_image_to_file(
        &self,
        image_path: impl AsRef<Path>,
        output_path: impl AsRef<Path>,
    ) -> GenerateResult<GeneratedModel> {
        let model = self.generate_from_image(image_path)?;
        export_obj(&model.mesh, output_path)?;
        Ok(model)
    }

    /// Generates a model from a text prompt and writes it as OBJ to
    /// `output_path`.
    pub fn generate_text_to_file(
        &self,
        text: &str,
        output_path: impl AsRef<Path>,
    ) -> GenerateResult<GeneratedModel> {
        let model = self.generate_from_text(text)?;
        export_obj(&model.mesh, output_path)?;
        Ok(model)
    }

    /// Renders a preview figure of a mesh, failing on out-of-range faces.
    pub fn visualize(&self, mesh: &Mesh) -> GenerateResult<Figure> {
        Ok(preview::visualize(mesh)?)
    }

    /// Builds the classified shape and checks its face indices.
    fn package(&self, classification: Classification) -> GenerateResult<GeneratedModel> {
        let mesh = self.library.build(classification.shape)?;
        mesh.validate()?;

        info!(
            shape = %classification.shape,
            vertices = mesh.vertex_count(),
            faces = mesh.triangle_count(),
            "generated model"
        );
        Ok(GeneratedModel {
            classification,
            mesh,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::ShapeId;

    #[test]
    fn test_text_generation_picks_shape() {
        let generator = ModelGenerator::default();
        let cases = [
            ("A small toy car", ShapeId::Car),
            ("big cube please", ShapeId::Cube),
            ("bouncy ball", ShapeId::Sphere),
            ("metal tube", ShapeId::Cylinder),
            ("a rock", ShapeId::Sphere),
        ];
        for (prompt, shape) in cases {
            let model = generator.generate_from_text(prompt).unwrap();
            assert_eq!(model.classification.shape, shape, "prompt {:?}", prompt);
            assert_eq!(model.mesh, generator.library().build(shape).unwrap());
        }
    }

    #[test]
    fn test_text_generation_is_idempotent() {
        let generator = ModelGenerator::default();
        let first = generator.generate_from_text("A small toy car").unwrap();
        let second = generator.generate_from_text("A small toy car").unwrap();
        assert_eq!(first.mesh.vertices(), second.mesh.vertices());
        assert_eq!(first.mesh.triangles(), second.mesh.triangles());
        assert_eq!(first, second);
    }

    #[test]
    fn test_enhanced_prompt_is_exposed() {
        let model = ModelGenerator::default()
            .generate_from_text("Metal Tube")
            .unwrap();
        assert_eq!(
            model.classification.enhanced_prompt.as_deref(),
            Some("A 3D model of metal tube, simple geometry, detailed")
        );
    }

    #[test]
    fn test_image_generation_is_cube() {
        let dir = tempfile::tempdir().unwrap();
        let image = dir.path().join("photo_of_a_car.jpg");
        std::fs::write(&image, b"not really a jpeg").unwrap();

        let generator = ModelGenerator::default();
        let model = generator.generate_from_image(&image).unwrap();
        assert_eq!(model.classification.shape, ShapeId::Cube);
        assert_eq!(model.into_mesh(), generator.library().build_cube().unwrap());
    }

    #[test]
    fn test_missing_image_fails() {
        let err = ModelGenerator::default()
            .generate_from_image("/definitely/not/here.png")
            .unwrap_err();
        assert!(matches!(err, GenerateError::ImageNotFound { .. }));
    }

    #[test]
    fn test_generate_dispatches_on_input() {
        let generator = ModelGenerator::default();
        let model = generator
            .generate(&ClassificationInput::Text("ball".into()))
            .unwrap();
        assert_eq!(model.classification.shape, ShapeId::Sphere);
    }

    #[test]
    fn test_custom_classifier() {
        use crate::classifier::KeywordRule;
        let generator = ModelGenerator::default().with_classifier(Classifier::new(
            vec![KeywordRule::new(["rock"], ShapeId::Cube)],
            ShapeId::Cylinder,
        ));
        let model = generator.generate_from_text("a rock").unwrap();
        assert_eq!(model.classification.shape, ShapeId::Cube);
    }

    #[test]
    fn test_visualize_covers_every_face() {
        let generator = ModelGenerator::default();
        let model = generator.generate_from_text("toy car").unwrap();
        let figure = generator.visualize(&model.mesh).unwrap();
        assert_eq!(figure.triangles().len(), model.mesh.triangle_count());
    }

    #[test]
    fn test_visualize_rejects_out_of_range_faces() {
        use glam::DVec3;
        use primitive_mesh::MeshError;

        let mesh = Mesh::from_parts(vec![DVec3::ZERO], vec![[0, 1, 2]]);
        let err = ModelGenerator::default().visualize(&mesh).unwrap_err();
        assert!(matches!(
            err,
            GenerateError::Mesh(MeshError::IndexOutOfBounds { index: 1, .. })
        ));
    }

    #[test]
    fn test_blank_prompt_yields_sphere() {
        let generator = ModelGenerator::default();
        for prompt in ["", "   ", "\t\n"] {
            let model = generator.generate_from_text(prompt).unwrap();
            assert_eq!(model.classification.shape, ShapeId::Sphere);
            assert_eq!(model.mesh, generator.library().build_sphere().unwrap());
        }
    }
}
