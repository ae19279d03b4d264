//! Shading-model descriptors and the fixed material catalog.
//!
//! Each material kind carries exactly the parameters it declares, so callers
//! pattern-match on the variant instead of probing for fields.

use std::fmt;
use std::ops::RangeInclusive;

use crate::error::SceneError;

/// Base colour shared by every material (`0x0088ff`)
pub const COMMON_COLOR: u32 = 0x0088ff;

/// Tunable numeric parameter of a shading model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaterialParam {
    Roughness,
    Metalness,
    Clearcoat,
    ClearcoatRoughness,
    Shininess,
}

impl MaterialParam {
    pub const fn name(self) -> &'static str {
        match self {
            MaterialParam::Roughness => "roughness",
            MaterialParam::Metalness => "metalness",
            MaterialParam::Clearcoat => "clearcoat",
            MaterialParam::ClearcoatRoughness => "clearcoatRoughness",
            MaterialParam::Shininess => "shininess",
        }
    }

    /// Slider range for this parameter
    pub fn range(self) -> RangeInclusive<f32> {
        match self {
            MaterialParam::Shininess => 0.0..=200.0,
            _ => 0.0..=1.0,
        }
    }

    pub fn clamp(self, value: f32) -> f32 {
        let range = self.range();
        value.clamp(*range.start(), *range.end())
    }
}

impl fmt::Display for MaterialParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Shading model with its own parameter set
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MaterialKind {
    /// Matte diffuse
    Lambert,
    /// Physically based metal/rough
    Standard { roughness: f32, metalness: f32 },
    /// Physically based with a clearcoat layer
    Physical {
        roughness: f32,
        metalness: f32,
        clearcoat: f32,
        clearcoat_roughness: f32,
    },
    /// Glossy specular
    Phong { shininess: f32 },
}

impl MaterialKind {
    /// Parameters declared by this kind, in panel order
    pub fn params(&self) -> &'static [MaterialParam] {
        use MaterialParam::*;
        match self {
            MaterialKind::Lambert => &[],
            MaterialKind::Standard { .. } => &[Roughness, Metalness],
            MaterialKind::Physical { .. } => &[Roughness, Metalness, Clearcoat, ClearcoatRoughness],
            MaterialKind::Phong { .. } => &[Shininess],
        }
    }

    fn slot(&mut self, param: MaterialParam) -> Option<&mut f32> {
        use MaterialParam::*;
        match (self, param) {
            (MaterialKind::Standard { roughness, .. }, Roughness)
            | (MaterialKind::Physical { roughness, .. }, Roughness) => Some(roughness),
            (MaterialKind::Standard { metalness, .. }, Metalness)
            | (MaterialKind::Physical { metalness, .. }, Metalness) => Some(metalness),
            (MaterialKind::Physical { clearcoat, .. }, Clearcoat) => Some(clearcoat),
            (MaterialKind::Physical { clearcoat_roughness, .. }, ClearcoatRoughness) => {
                Some(clearcoat_roughness)
            }
            (MaterialKind::Phong { shininess }, Shininess) => Some(shininess),
            _ => None,
        }
    }
}

/// A named, mutable shading configuration
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialDescriptor {
    pub name: String,
    pub color: [f32; 3],
    pub kind: MaterialKind,
}

impl MaterialDescriptor {
    pub fn new(name: impl Into<String>, kind: MaterialKind) -> Self {
        Self {
            name: name.into(),
            color: hex_to_rgb(COMMON_COLOR),
            kind,
        }
    }

    /// Current value of a parameter, `None` if the kind does not declare it
    pub fn get(&self, param: MaterialParam) -> Option<f32> {
        let mut kind = self.kind;
        kind.slot(param).copied()
    }

    /// Write a declared parameter in place
    pub fn set(&mut self, param: MaterialParam, value: f32) -> Result<(), SceneError> {
        match self.kind.slot(param) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(SceneError::UnsupportedParameter {
                material: self.name.clone(),
                param,
            }),
        }
    }
}

/// Non-owning handle to a catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MaterialId(usize);

impl MaterialId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Fixed, ordered set of material styles; order is left-to-right display order
#[derive(Debug, Clone)]
pub struct MaterialCatalog {
    entries: Vec<MaterialDescriptor>,
}

impl MaterialCatalog {
    pub fn new() -> Self {
        Self {
            entries: vec![
                MaterialDescriptor::new("lambert", MaterialKind::Lambert),
                MaterialDescriptor::new(
                    "standard",
                    MaterialKind::Standard {
                        roughness: 0.8,
                        metalness: 0.4,
                    },
                ),
                MaterialDescriptor::new(
                    "physical",
                    MaterialKind::Physical {
                        roughness: 0.5,
                        metalness: 0.8,
                        clearcoat: 0.7,
                        clearcoat_roughness: 0.1,
                    },
                ),
                MaterialDescriptor::new("phong", MaterialKind::Phong { shininess: 150.0 }),
            ],
        }
    }

    /// All materials in display order
    pub fn all_materials(&self) -> impl Iterator<Item = (MaterialId, &MaterialDescriptor)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, material)| (MaterialId(index), material))
    }

    pub fn ids(&self) -> impl Iterator<Item = MaterialId> {
        (0..self.entries.len()).map(MaterialId)
    }

    pub fn get(&self, id: MaterialId) -> &MaterialDescriptor {
        &self.entries[id.0]
    }

    pub fn get_mut(&mut self, id: MaterialId) -> &mut MaterialDescriptor {
        &mut self.entries[id.0]
    }

    pub fn find(&self, name: &str) -> Option<MaterialId> {
        self.entries
            .iter()
            .position(|material| material.name == name)
            .map(MaterialId)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for MaterialCatalog {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert a `0xRRGGBB` colour to linear RGB
pub fn hex_to_rgb(hex: u32) -> [f32; 3] {
    let channel = |shift: u32| srgb_to_linear(((hex >> shift) & 0xff) as f32 / 255.0);
    [channel(16), channel(8), channel(0)]
}

fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order() {
        let catalog = MaterialCatalog::new();
        let names: Vec<_> = catalog.all_materials().map(|(_, m)| m.name.as_str()).collect();
        assert_eq!(names, ["lambert", "standard", "physical", "phong"]);
    }

    #[test]
    fn test_declared_params_per_kind() {
        let catalog = MaterialCatalog::new();
        let params: Vec<_> = catalog.all_materials().map(|(_, m)| m.kind.params().len()).collect();
        assert_eq!(params, [0, 2, 4, 1]);
    }

    #[test]
    fn test_set_declared_param() {
        let mut catalog = MaterialCatalog::new();
        let id = catalog.find("standard").unwrap();
        catalog.get_mut(id).set(MaterialParam::Roughness, 0.37).unwrap();
        assert_eq!(catalog.get(id).get(MaterialParam::Roughness), Some(0.37));
        assert_eq!(catalog.get(id).get(MaterialParam::Metalness), Some(0.4));
    }

    #[test]
    fn test_set_undeclared_param_fails() {
        let mut catalog = MaterialCatalog::new();
        let id = catalog.find("phong").unwrap();
        let err = catalog.get_mut(id).set(MaterialParam::Roughness, 0.5).unwrap_err();
        assert_eq!(
            err,
            SceneError::UnsupportedParameter {
                material: "phong".into(),
                param: MaterialParam::Roughness,
            }
        );
        assert_eq!(catalog.get(id).kind, MaterialKind::Phong { shininess: 150.0 });
    }

    #[test]
    fn test_lambert_declares_nothing() {
        let material = MaterialDescriptor::new("lambert", MaterialKind::Lambert);
        for param in [
            MaterialParam::Roughness,
            MaterialParam::Metalness,
            MaterialParam::Clearcoat,
            MaterialParam::ClearcoatRoughness,
            MaterialParam::Shininess,
        ] {
            assert_eq!(material.get(param), None);
        }
    }

    #[test]
    fn test_param_ranges() {
        assert_eq!(MaterialParam::Shininess.range(), 0.0..=200.0);
        assert_eq!(MaterialParam::ClearcoatRoughness.range(), 0.0..=1.0);
        assert_eq!(MaterialParam::Metalness.clamp(1.5), 1.0);
        assert_eq!(MaterialParam::Shininess.clamp(-3.0), 0.0);
    }

    #[test]
    fn test_common_color_is_linear() {
        let rgb = hex_to_rgb(COMMON_COLOR);
        assert_eq!(rgb[0], 0.0);
        assert!(rgb[1] > 0.2 && rgb[1] < 0.3);
        assert!((rgb[2] - 1.0).abs() < 1e-6);
    }
}
