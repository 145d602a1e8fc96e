//! # Mesh Preview
//!
//! Static triangulated surface plot of a mesh, rendered as SVG.
//!
//! The mesh is fitted into a cube so every axis uses the same scale, viewed
//! from a fixed camera (30° elevation, -60° azimuth), and drawn back to front.
//! Triangles are coloured by height with a viridis ramp.
//!
//! ```rust
//! use primitive_mesh::{preview::visualize, primitives::create_box};
//! use glam::DVec3;
//!
//! let mesh = create_box(DVec3::splat(2.0), true).unwrap();
//! let figure = visualize(&mesh)?;
//! assert_eq!(figure.title(), "3D Model Visualization");
//! assert!(figure.to_svg().starts_with("<svg"));
//! # Ok::<(), primitive_mesh::MeshError>(())
//! ```

use crate::error::{MeshError, MeshResult};
use crate::mesh::Mesh;
use config::constants::{PREVIEW_ALPHA, PREVIEW_HEIGHT, PREVIEW_TITLE, PREVIEW_WIDTH};
use glam::{DVec2, DVec3};
use std::path::Path;
use tracing::info;

/// Camera elevation in degrees.
const ELEVATION_DEG: f64 = 30.0;
/// Camera azimuth in degrees.
const AZIMUTH_DEG: f64 = -60.0;

const MARGIN: f64 = 50.0;

/// Viridis colour map sampled at five evenly spaced stops.
const VIRIDIS: [[f64; 3]; 5] = [
    [68.0, 1.0, 84.0],
    [59.0, 82.0, 139.0],
    [33.0, 145.0, 140.0],
    [94.0, 201.0, 98.0],
    [253.0, 231.0, 37.0],
];

/// A triangle after projection onto the figure plane.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedTriangle {
    /// Corner positions in SVG coordinates.
    pub points: [DVec2; 3],
    /// Mean distance toward the camera; larger is closer.
    pub depth: f64,
    /// Fill colour (RGB).
    pub color: [u8; 3],
}

/// One of the three labelled axes drawn along the edges of the bounding cube.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    /// "X", "Y" or "Z".
    pub label: &'static str,
    /// Start of the axis in model space.
    pub start: DVec3,
    /// End of the axis in model space.
    pub end: DVec3,
    /// Start and end in SVG coordinates.
    pub screen: [DVec2; 2],
}

/// A renderable preview of a mesh.
#[derive(Debug, Clone)]
pub struct Figure {
    title: String,
    width: f64,
    height: f64,
    axes: [Axis; 3],
    triangles: Vec<ProjectedTriangle>,
}

impl Figure {
    /// Returns the figure title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the figure size (width, height).
    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Returns the three axes in X, Y, Z order.
    pub fn axes(&self) -> &[Axis; 3] {
        &self.axes
    }

    /// Returns the projected triangles in drawing order (farthest first).
    pub fn triangles(&self) -> &[ProjectedTriangle] {
        &self.triangles
    }

    /// Renders the figure as a standalone SVG document.
    pub fn to_svg(&self) -> String {
        let mut svg = String::new();

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">
  <style>
    .title {{ font-family: Arial, sans-serif; font-size: 16px; font-weight: bold; fill: #333; }}
    .label {{ font-family: Arial, sans-serif; font-size: 12px; fill: #666; }}
    .axis {{ stroke: #333; stroke-width: 1; }}
  </style>
  <rect width="100%" height="100%" fill="white"/>
  <text x="{}" y="{}" class="title" text-anchor="middle">{}</text>
"#,
            self.width,
            self.height,
            self.width,
            self.height,
            self.width / 2.0,
            MARGIN / 2.0 + 8.0,
            escape(&self.title)
        ));

        for tri in &self.triangles {
            let [a, b, c] = tri.points;
            let [r, g, bl] = tri.color;
            svg.push_str(&format!(
                "  <polygon points=\"{:.2},{:.2} {:.2},{:.2} {:.2},{:.2}\" fill=\"rgb({},{},{})\" fill-opacity=\"{}\" stroke=\"rgb({},{},{})\" stroke-width=\"0.3\"/>\n",
                a.x, a.y, b.x, b.y, c.x, c.y, r, g, bl, PREVIEW_ALPHA, r, g, bl
            ));
        }

        for axis in &self.axes {
            let [start, end] = axis.screen;
            svg.push_str(&format!(
                "  <line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" class=\"axis\"/>\n",
                start.x, start.y, end.x, end.y
            ));
            let label_at = end + (end - start).normalize_or_zero() * 14.0;
            svg.push_str(&format!(
                "  <text x=\"{:.2}\" y=\"{:.2}\" class=\"label\" text-anchor=\"middle\">{}</text>\n",
                label_at.x, label_at.y, axis.label
            ));
        }

        svg.push_str("</svg>\n");
        svg
    }

    /// Writes the SVG document to `path`, replacing any existing file.
    pub fn save_svg(&self, path: impl AsRef<Path>) -> MeshResult<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_svg()).map_err(|e| MeshError::io(path, e))?;
        info!(path = %path.display(), triangles = self.triangles.len(), "saved preview");
        Ok(())
    }
}

/// Builds a preview figure of `mesh`.
///
/// The mesh itself is only read. Fails with the same errors as
/// [`Mesh::validate`] when a face refers to a missing vertex.
pub fn visualize(mesh: &Mesh) -> MeshResult<Figure> {
    mesh.validate()?;

    let (min, max) = mesh.bounding_box();
    let center = (min + max) / 2.0;
    let half = match (max - min).max_element() / 2.0 {
        h if h > 0.0 => h,
        _ => 1.0,
    };
    let camera = Camera::new(center, half);

    let corner = center - DVec3::splat(half);
    let axes = [("X", DVec3::X), ("Y", DVec3::Y), ("Z", DVec3::Z)].map(|(label, dir)| {
        let end = corner + dir * 2.0 * half;
        Axis {
            label,
            start: corner,
            end,
            screen: [camera.screen(corner), camera.screen(end)],
        }
    });

    let mut triangles: Vec<ProjectedTriangle> = mesh
        .triangles()
        .iter()
        .map(|tri| {
            let corners = tri.map(|i| mesh.vertex(i));
            let mean = (corners[0] + corners[1] + corners[2]) / 3.0;
            let t = ((mean.z - min.z) / (max.z - min.z)).clamp(0.0, 1.0);
            ProjectedTriangle {
                points: corners.map(|p| camera.screen(p)),
                depth: camera.depth(mean),
                color: viridis(if t.is_finite() { t } else { 0.5 }),
            }
        })
        .collect();
    triangles.sort_by(|a, b| a.depth.total_cmp(&b.depth));

    Ok(Figure {
        title: PREVIEW_TITLE.to_string(),
        width: PREVIEW_WIDTH,
        height: PREVIEW_HEIGHT,
        axes,
        triangles,
    })
}

/// Orthographic camera fitted to the bounding cube of a mesh.
struct Camera {
    center: DVec3,
    right: DVec3,
    up: DVec3,
    toward_eye: DVec3,
    scale: f64,
    origin: DVec2,
}

impl Camera {
    fn new(center: DVec3, half: f64) -> Self {
        let (elev, azim) = (ELEVATION_DEG.to_radians(), AZIMUTH_DEG.to_radians());
        let toward_eye = DVec3::new(elev.cos() * azim.cos(), elev.cos() * azim.sin(), elev.sin());
        let right = DVec3::new(-azim.sin(), azim.cos(), 0.0);
        let up = toward_eye.cross(right);

        let plot = (PREVIEW_WIDTH.min(PREVIEW_HEIGHT - MARGIN) - 2.0 * MARGIN) / 2.0;
        // Any point of the cube lies within sqrt(3) * half of its center.
        let scale = plot / (3.0_f64.sqrt() * half);
        let origin = DVec2::new(PREVIEW_WIDTH / 2.0, (PREVIEW_HEIGHT + MARGIN) / 2.0);

        Self {
            center,
            right,
            up,
            toward_eye,
            scale,
            origin,
        }
    }

    fn screen(&self, p: DVec3) -> DVec2 {
        let rel = p - self.center;
        DVec2::new(
            self.origin.x + rel.dot(self.right) * self.scale,
            self.origin.y - rel.dot(self.up) * self.scale,
        )
    }

    fn depth(&self, p: DVec3) -> f64 {
        (p - self.center).dot(self.toward_eye)
    }
}

fn viridis(t: f64) -> [u8; 3] {
    let pos = t * (VIRIDIS.len() - 1) as f64;
    let i = (pos.floor() as usize).min(VIRIDIS.len() - 2);
    let f = pos - i as f64;
    let (a, b) = (VIRIDIS[i], VIRIDIS[i + 1]);
    [0, 1, 2].map(|c| (a[c] + (b[c] - a[c]) * f).round() as u8)
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
