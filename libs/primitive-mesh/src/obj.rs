//! # Wavefront OBJ I/O
//!
//! Plain-text export and import of triangle meshes.
//!
//! Files contain one `v x y z` line per vertex and one `f a b c` line per
//! triangle. Face indices are 1-based in the file and 0-based in memory.

use crate::error::{MeshError, MeshResult};
use crate::mesh::Mesh;
use glam::DVec3;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::{debug, info};

/// Writes a mesh as OBJ text.
///
/// Coordinates use Rust's shortest round-trip float formatting, so reading
/// the output back reproduces the exact vertex positions.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::{obj, primitives::create_box};
/// use glam::DVec3;
///
/// let mesh = create_box(DVec3::ONE, false).unwrap();
/// let mut out = Vec::new();
/// obj::write_obj(&mut out, &mesh).unwrap();
/// let text = String::from_utf8(out).unwrap();
/// assert_eq!(text.lines().filter(|l| l.starts_with("v ")).count(), 8);
/// assert_eq!(text.lines().filter(|l| l.starts_with("f ")).count(), 12);
/// ```
pub fn write_obj<W: Write>(writer: &mut W, mesh: &Mesh) -> std::io::Result<()> {
    writeln!(
        writer,
        "# {} vertices, {} faces",
        mesh.vertex_count(),
        mesh.triangle_count()
    )?;

    for v in mesh.vertices() {
        writeln!(writer, "v {} {} {}", v.x, v.y, v.z)?;
    }

    for tri in mesh.triangles() {
        writeln!(writer, "f {} {} {}", tri[0] + 1, tri[1] + 1, tri[2] + 1)?;
    }

    Ok(())
}

/// Validates a mesh and writes it to `path`, replacing any existing file.
///
/// Fails with [`MeshError::IndexOutOfBounds`] before touching the file if the
/// mesh is malformed, and with [`MeshError::Io`] if the file cannot be
/// created or written.
pub fn export_obj(mesh: &Mesh, path: impl AsRef<Path>) -> MeshResult<()> {
    let path = path.as_ref();
    mesh.validate()?;

    let file = File::create(path).map_err(|e| MeshError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    write_obj(&mut writer, mesh).map_err(|e| MeshError::io(path, e))?;
    writer.flush().map_err(|e| MeshError::io(path, e))?;

    info!(
        path = %path.display(),
        vertices = mesh.vertex_count(),
        faces = mesh.triangle_count(),
        "exported OBJ"
    );
    Ok(())
}

/// Reads OBJ text into a mesh.
///
/// Only geometry is kept: `v` and `f` lines are parsed, comments, blank lines
/// and every other statement (`vn`, `vt`, `o`, `g`, `usemtl`, ...) are
/// skipped. Face tokens may use the `v/vt/vn` form and negative (relative)
/// indices. Polygons with more than three corners are fan-triangulated.
pub fn read_obj<R: BufRead>(reader: R) -> MeshResult<Mesh> {
    let mut vertices = Vec::new();
    let mut triangles = Vec::new();

    for (number, line) in reader.lines().enumerate() {
        let line_no = number + 1;
        let line = line.map_err(|e| MeshError::obj_parse(line_no, e.to_string()))?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut parts = line.split_whitespace();
        match parts.next() {
            Some("v") => {
                let coords = parts
                    .take(3)
                    .map(|p| {
                        p.parse::<f64>().map_err(|_| {
                            MeshError::obj_parse(line_no, format!("Invalid coordinate: {}", p))
                        })
                    })
                    .collect::<MeshResult<Vec<_>>>()?;
                if coords.len() < 3 {
                    return Err(MeshError::obj_parse(line_no, "Vertex needs three coordinates"));
                }
                vertices.push(DVec3::new(coords[0], coords[1], coords[2]));
            }
            Some("f") => {
                let corners = parts
                    .map(|p| resolve_index(p, vertices.len(), line_no))
                    .collect::<MeshResult<Vec<_>>>()?;
                if corners.len() < 3 {
                    return Err(MeshError::obj_parse(line_no, "Face needs at least three vertices"));
                }
                for i in 1..corners.len() - 1 {
                    triangles.push([corners[0], corners[i], corners[i + 1]]);
                }
            }
            _ => {}
        }
    }

    let mesh = Mesh::from_parts(vertices, triangles);
    mesh.validate()?;
    Ok(mesh)
}

/// Reads an OBJ file from disk.
pub fn load_obj(path: impl AsRef<Path>) -> MeshResult<Mesh> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| MeshError::io(path, e))?;
    let mesh = read_obj(BufReader::new(file))?;
    debug!(
        path = %path.display(),
        vertices = mesh.vertex_count(),
        faces = mesh.triangle_count(),
        "loaded OBJ"
    );
    Ok(mesh)
}

/// Converts one face token to a 0-based vertex index.
fn resolve_index(token: &str, vertex_count: usize, line_no: usize) -> MeshResult<u32> {
    let position = token.split('/').next().unwrap_or(token);
    let raw: i64 = position
        .parse()
        .map_err(|_| MeshError::obj_parse(line_no, format!("Invalid face index: {}", token)))?;

    let resolved = match raw {
        0 => None,
        i if i > 0 => Some(i - 1),
        i => Some(vertex_count as i64 + i),
    };

    resolved
        .filter(|&i| i >= 0 && i <= u32::MAX as i64)
        .map(|i| i as u32)
        .ok_or_else(|| MeshError::obj_parse(line_no, format!("Face index out of range: {}", token)))
}
