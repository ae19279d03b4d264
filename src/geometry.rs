use std::fmt;
use std::str::FromStr;

use crate::error::SceneError;

/// Closed set of primitive shapes the showcase can display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Sphere,
    Box,
    Cone,
    Cylinder,
    Torus,
    TorusKnot,
}

impl Shape {
    /// Every shape, in selector order
    pub const ALL: [Shape; 6] = [
        Shape::Sphere,
        Shape::Box,
        Shape::Cone,
        Shape::Cylinder,
        Shape::Torus,
        Shape::TorusKnot,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Shape::Sphere => "Sphere",
            Shape::Box => "Box",
            Shape::Cone => "Cone",
            Shape::Cylinder => "Cylinder",
            Shape::Torus => "Torus",
            Shape::TorusKnot => "TorusKnot",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Shape {
    type Err = SceneError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Shape::ALL
            .into_iter()
            .find(|shape| shape.name() == name)
            .ok_or_else(|| SceneError::UnknownShape(name.to_string()))
    }
}

/// Geometric parameters of a primitive
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    Sphere {
        radius: f32,
        width_segments: u32,
        height_segments: u32,
    },
    Box {
        width: f32,
        height: f32,
        depth: f32,
    },
    Cone {
        radius: f32,
        height: f32,
        radial_segments: u32,
    },
    Cylinder {
        radius_top: f32,
        radius_bottom: f32,
        height: f32,
        radial_segments: u32,
    },
    Torus {
        radius: f32,
        tube: f32,
        radial_segments: u32,
        tubular_segments: u32,
    },
    TorusKnot {
        radius: f32,
        tube: f32,
        tubular_segments: u32,
        radial_segments: u32,
        p: u32,
        q: u32,
    },
}

/// A named primitive, immutable once the catalog is built
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeDescriptor {
    pub shape: Shape,
    pub primitive: Primitive,
}

impl ShapeDescriptor {
    pub fn name(&self) -> &'static str {
        self.shape.name()
    }
}

/// Fixed mapping from shape name to primitive description
#[derive(Debug, Clone)]
pub struct GeometryCatalog {
    descriptors: [ShapeDescriptor; 6],
}

impl GeometryCatalog {
    pub fn new() -> Self {
        Self {
            descriptors: Shape::ALL.map(|shape| ShapeDescriptor {
                shape,
                primitive: default_primitive(shape),
            }),
        }
    }

    /// Resolve a shape name, failing with `UnknownShape` outside the catalog
    pub fn lookup(&self, name: &str) -> Result<&ShapeDescriptor, SceneError> {
        let shape: Shape = name.parse()?;
        Ok(self.get(shape))
    }

    /// Descriptor for a shape already known to be in the catalog
    pub fn get(&self, shape: Shape) -> &ShapeDescriptor {
        &self.descriptors[shape as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShapeDescriptor> {
        self.descriptors.iter()
    }
}

impl Default for GeometryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

fn default_primitive(shape: Shape) -> Primitive {
    match shape {
        Shape::Sphere => Primitive::Sphere {
            radius: 1.0,
            width_segments: 32,
            height_segments: 32,
        },
        Shape::Box => Primitive::Box {
            width: 2.0,
            height: 2.0,
            depth: 2.0,
        },
        Shape::Cone => Primitive::Cone {
            radius: 1.0,
            height: 2.0,
            radial_segments: 32,
        },
        Shape::Cylinder => Primitive::Cylinder {
            radius_top: 1.0,
            radius_bottom: 1.0,
            height: 2.0,
            radial_segments: 32,
        },
        Shape::Torus => Primitive::Torus {
            radius: 1.0,
            tube: 0.4,
            radial_segments: 32,
            tubular_segments: 64,
        },
        Shape::TorusKnot => Primitive::TorusKnot {
            radius: 1.0,
            tube: 0.4,
            tubular_segments: 128,
            radial_segments: 32,
            p: 2,
            q: 3,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_every_shape() {
        let catalog = GeometryCatalog::new();
        for shape in Shape::ALL {
            let descriptor = catalog.lookup(shape.name()).unwrap();
            assert_eq!(descriptor.shape, shape);
        }
    }

    #[test]
    fn test_lookup_unknown_shape() {
        let catalog = GeometryCatalog::new();
        assert_eq!(
            catalog.lookup("Unknown"),
            Err(SceneError::UnknownShape("Unknown".into()))
        );
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let catalog = GeometryCatalog::new();
        assert!(catalog.lookup("sphere").is_err());
        assert!(catalog.lookup("Torusknot").is_err());
    }

    #[test]
    fn test_get_matches_variant() {
        let catalog = GeometryCatalog::new();
        assert!(matches!(
            catalog.get(Shape::Torus).primitive,
            Primitive::Torus { tubular_segments: 64, .. }
        ));
        assert!(matches!(
            catalog.get(Shape::Box).primitive,
            Primitive::Box { width, .. } if width == 2.0
        ));
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for shape in Shape::ALL {
            assert_eq!(shape.to_string().parse::<Shape>().unwrap(), shape);
        }
    }
}
