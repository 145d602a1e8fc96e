//! # Shape Identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four shapes the generator can build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeId {
    Cube,
    Sphere,
    Cylinder,
    Car,
}

impl ShapeId {
    /// Every shape, in declaration order.
    pub const ALL: [ShapeId; 4] = [
        ShapeId::Cube,
        ShapeId::Sphere,
        ShapeId::Cylinder,
        ShapeId::Car,
    ];

    /// Lowercase name of the shape.
    pub fn name(self) -> &'static str {
        match self {
            ShapeId::Cube => "cube",
            ShapeId::Sphere => "sphere",
            ShapeId::Cylinder => "cylinder",
            ShapeId::Car => "car",
        }
    }

    /// Looks a shape up by name, ignoring case and surrounding whitespace.
    ///
    /// Names that match no shape fall back to [`ShapeId::Cube`].
    ///
    /// ```rust
    /// use shape_gen::ShapeId;
    ///
    /// assert_eq!(ShapeId::from_name("Car"), ShapeId::Car);
    /// assert_eq!(ShapeId::from_name("pyramid"), ShapeId::Cube);
    /// ```
    pub fn from_name(name: &str) -> ShapeId {
        let name = name.trim();
        ShapeId::ALL
            .into_iter()
            .find(|shape| shape.name().eq_ignore_ascii_case(name))
            .unwrap_or(ShapeId::Cube)
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_round_trips() {
        for shape in ShapeId::ALL {
            assert_eq!(ShapeId::from_name(shape.name()), shape);
        }
    }

    #[test]
    fn test_from_name_normalizes() {
        assert_eq!(ShapeId::from_name("  SPHERE "), ShapeId::Sphere);
        assert_eq!(ShapeId::from_name("Cylinder"), ShapeId::Cylinder);
    }

    #[test]
    fn test_unknown_name_falls_back_to_cube() {
        assert_eq!(ShapeId::from_name("torus"), ShapeId::Cube);
        assert_eq!(ShapeId::from_name(""), ShapeId::Cube);
    }

    #[test]
    fn test_display() {
        assert_eq!(ShapeId::Car.to_string(), "car");
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&ShapeId::Cylinder).unwrap(), "\"cylinder\"");
        let shape: ShapeId = serde_json::from_str("\"sphere\"").unwrap();
        assert_eq!(shape, ShapeId::Sphere);
    }
}
