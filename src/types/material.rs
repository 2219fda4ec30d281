use std::path::PathBuf;

use serde::Serialize;

/// A material parsed from one `newmtl` block.
///
/// Colors are always four components; the alpha channel of `Ka`/`Ke`/`Kd`/`Ks`
/// is fixed at 1.0. Texture paths are absolute, resolved against the directory
/// of the MTL file.
///
/// Under the metallic-roughness convention `specular_color`/`specular_texture`
/// carry metallic and `specular_shininess`/`specular_shininess_texture` carry
/// roughness. The loader stores them in the same fields either way.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ambient_color: Option<[f32; 4]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emissive_color: Option<[f32; 4]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diffuse_color: Option<[f32; 4]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specular_color: Option<[f32; 4]>,
    pub specular_shininess: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alpha: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ambient_texture: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emissive_texture: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diffuse_texture: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specular_texture: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specular_shininess_texture: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normal_texture: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alpha_texture: Option<PathBuf>,
}

impl Material {
    /// Create an empty material with the given name and shininess default.
    pub fn new(name: impl Into<String>, specular_shininess: f32) -> Self {
        Self {
            name: name.into(),
            specular_shininess,
            ..Default::default()
        }
    }

    /// Number of texture slots that are set.
    pub fn texture_count(&self) -> usize {
        [
            &self.ambient_texture,
            &self.emissive_texture,
            &self.diffuse_texture,
            &self.specular_texture,
            &self.specular_shininess_texture,
            &self.normal_texture,
            &self.alpha_texture,
        ]
        .iter()
        .filter(|t| t.is_some())
        .count()
    }
}

impl Default for Material {
    fn default() -> Self {
        Self {
            name: String::new(),
            ambient_color: None,
            emissive_color: None,
            diffuse_color: None,
            specular_color: None,
            specular_shininess: 0.0,
            alpha: None,
            ambient_texture: None,
            emissive_texture: None,
            diffuse_texture: None,
            specular_texture: None,
            specular_shininess_texture: None,
            normal_texture: None,
            alpha_texture: None,
        }
    }
}

/// Materials loaded from a single MTL file, in file order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MaterialSet {
    pub source: PathBuf,
    pub materials: Vec<Material>,
}

impl MaterialSet {
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}
