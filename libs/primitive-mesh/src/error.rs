//! # Mesh Errors
//!
//! Error types for mesh construction, validation and file I/O.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building, checking or exporting a mesh.
#[derive(Debug, Error)]
pub enum MeshError {
    /// Degenerate primitive parameters
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry { message: String },

    /// A face references a vertex that does not exist
    #[error("Face {face} references vertex {index}, but the mesh has {vertex_count} vertices")]
    IndexOutOfBounds {
        face: usize,
        index: u32,
        vertex_count: usize,
    },

    /// Too many vertices
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices { count: usize, max: usize },

    /// Too many triangles
    #[error("Too many triangles: {count} (max: {max})")]
    TooManyTriangles { count: usize, max: usize },

    /// Reading or writing a mesh file failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed line in an OBJ file
    #[error("OBJ parse error on line {line}: {message}")]
    ObjParse { line: usize, message: String },
}

impl MeshError {
    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }

    /// Creates an I/O error tagged with the file it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Creates an OBJ parse error for a 1-based line number.
    pub fn obj_parse(line: usize, message: impl Into<String>) -> Self {
        Self::ObjParse {
            line,
            message: message.into(),
        }
    }
}

/// Result type alias for mesh operations.
pub type MeshResult<T> = Result<T, MeshError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_error_display() {
        let err = MeshError::IndexOutOfBounds {
            face: 3,
            index: 9,
            vertex_count: 8,
        };
        let message = err.to_string();
        assert!(message.contains("Face 3"));
        assert!(message.contains("vertex 9"));
        assert!(message.contains("8 vertices"));
    }

    #[test]
    fn test_io_error_names_path() {
        let err = MeshError::io(
            "/nowhere/model.obj",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        assert!(err.to_string().contains("/nowhere/model.obj"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MeshError>();
    }
}
