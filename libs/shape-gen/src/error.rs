//! # Generation Errors

use primitive_mesh::MeshError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while generating a model.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Mesh construction, validation or export failed
    #[error(transparent)]
    Mesh(#[from] MeshError),

    /// The image handed to the generator does not exist or is not a file
    #[error("Image not found: {}", path.display())]
    ImageNotFound { path: PathBuf },
}

/// Result type alias for generation.
pub type GenerateResult<T> = Result<T, GenerateError>;
