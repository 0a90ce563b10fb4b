//! Shape selection for catalog entries

use std::fmt;

use crate::gfx::geometry::{generate_box, generate_cone, generate_sphere, GeometryData};

/// The primitive a catalog entry is drawn as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Box,
    Sphere,
    Cone,
}

impl ShapeKind {
    /// Picks the shape for a catalog id.
    ///
    /// Project ids become boxes, skill ids become spheres and everything else
    /// becomes a cone. The project check runs first, so an id mentioning both
    /// is a box.
    pub fn classify(id: &str) -> Self {
        if id.contains("project") {
            Self::Box
        } else if id.contains("skill") {
            Self::Sphere
        } else {
            Self::Cone
        }
    }

    /// Procedural mesh for this shape at the scene's fixed dimensions
    pub fn geometry(self) -> GeometryData {
        match self {
            Self::Box => generate_box(1.0),
            Self::Sphere => generate_sphere(0.6, 32, 16),
            Self::Cone => generate_cone(0.6, 1.2, 32),
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Box => "box",
            Self::Sphere => "sphere",
            Self::Cone => "cone",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        assert_eq!(ShapeKind::classify("project1"), ShapeKind::Box);
        assert_eq!(ShapeKind::classify("skill1"), ShapeKind::Sphere);
        assert_eq!(ShapeKind::classify("contact"), ShapeKind::Cone);
    }

    #[test]
    fn test_classification_is_stable() {
        for _ in 0..3 {
            let shapes: Vec<ShapeKind> = ["project1", "skill1", "contact"]
                .iter()
                .map(|id| ShapeKind::classify(id))
                .collect();
            assert_eq!(shapes, vec![ShapeKind::Box, ShapeKind::Sphere, ShapeKind::Cone]);
        }
    }

    #[test]
    fn test_project_wins_over_skill() {
        assert_eq!(ShapeKind::classify("skill-project"), ShapeKind::Box);
        assert_eq!(ShapeKind::classify("my-skill"), ShapeKind::Sphere);
        assert_eq!(ShapeKind::classify(""), ShapeKind::Cone);
    }
}
