//! Per-pipeline configuration, optionally loaded from a TOML file.
//!
//! Every field has a default, so a file only needs the keys it overrides:
//!
//! ```toml
//! [grid]
//! output_dir = "DeferredRendering/Asset/Model/Sphere"
//! roughness_levels = 7
//!
//! [impostor]
//! scene_file = "../../Scene/night.json"
//! ```

use crate::axis::Axis;
use crate::constants::*;
use crate::error::{GeneratorError, Result};
use crate::paths::{PathResolver, ReferenceStyle, join_logical, resolve_against};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Material and model pass of the sphere grid.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Directory holding the mesh and receiving the material and model folders.
    pub output_dir: PathBuf,
    pub logical_root: String,
    pub material_folder: String,
    pub model_folder: String,
    pub base_name: String,
    pub roughness_levels: u32,
    pub metallic_levels: u32,
    pub albedo: [f64; 3],
    pub shader_path: String,
    /// Mesh file name without extension, inside `output_dir`.
    pub mesh_stem: String,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            logical_root: SPHERE_ROOT.to_string(),
            material_folder: MATERIAL_FOLDER.to_string(),
            model_folder: MODEL_FOLDER.to_string(),
            base_name: SPHERE_BASE_NAME.to_string(),
            roughness_levels: SPHERE_ROUGHNESS_LEVELS,
            metallic_levels: SPHERE_METALLIC_LEVELS,
            albedo: SPHERE_ALBEDO,
            shader_path: SHADER_PATH.to_string(),
            mesh_stem: SPHERE_MESH_STEM.to_string(),
        }
    }
}

impl GridConfig {
    pub fn resolver(&self) -> PathResolver {
        PathResolver {
            output_dir: self.output_dir.clone(),
            logical_root: self.logical_root.clone(),
            material_folder: self.material_folder.clone(),
            model_folder: self.model_folder.clone(),
            material_base: self.base_name.clone(),
            model_base: self.base_name.clone(),
            object_base: self.base_name.clone(),
            style: ReferenceStyle::GRID,
        }
    }

    pub fn roughness_axis(&self) -> Result<Axis> {
        Axis::new("roughness", self.roughness_levels)
    }

    pub fn metallic_axis(&self) -> Result<Axis> {
        Axis::new("metallic", self.metallic_levels)
    }

    /// Binary mesh that must exist before anything is generated.
    pub fn mesh_file(&self) -> PathBuf {
        self.output_dir
            .join(format!("{}.{}", self.mesh_stem, MESH_EXTENSION))
    }

    /// Logical path models use for the mesh.
    pub fn mesh_reference(&self) -> String {
        join_logical(&[self.logical_root.as_str(), self.mesh_stem.as_str()])
    }

    pub fn validate(&self) -> Result<()> {
        require_finite("grid.albedo", &self.albedo)
    }
}

/// Scene section pass of the sphere grid.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GridSceneConfig {
    /// Aggregate placement file, relative to the grid output directory.
    pub output_file: PathBuf,
    /// World position of cell (0, 0).
    pub pivot: [f64; 3],
    pub spacing: f64,
    pub scale: f64,
}

impl GridSceneConfig {
    pub fn validate(&self) -> Result<()> {
        require_finite("grid_scene.pivot", &self.pivot)?;
        require_finite("grid_scene.spacing", &[self.spacing])?;
        require_finite("grid_scene.scale", &[self.scale])
    }
}

impl Default for GridSceneConfig {
    fn default() -> Self {
        Self {
            output_file: PathBuf::from(SPHERE_SCENE_SECTION_FILE),
            pivot: SPHERE_GRID_PIVOT,
            spacing: SPHERE_GRID_SPACING,
            scale: SPHERE_GRID_SCALE,
        }
    }
}

/// Light impostor pipeline.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ImpostorConfig {
    /// Directory receiving the material and model folders and the impostor list.
    pub output_dir: PathBuf,
    pub logical_root: String,
    pub material_folder: String,
    pub model_folder: String,
    pub material_base: String,
    pub model_base: String,
    pub object_base: String,
    /// Source scene, relative to `output_dir` unless absolute.
    pub scene_file: PathBuf,
    /// Shared sphere mesh payload, relative to `output_dir` unless absolute.
    pub mesh_file: PathBuf,
    pub mesh_reference: String,
    pub shader_path: String,
    pub scale: f64,
    /// Aggregate placement file, relative to `output_dir`.
    pub output_file: PathBuf,
}

impl Default for ImpostorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            logical_root: IMPOSTOR_ROOT.to_string(),
            material_folder: MATERIAL_FOLDER.to_string(),
            model_folder: MODEL_FOLDER.to_string(),
            material_base: IMPOSTOR_MATERIAL_BASE_NAME.to_string(),
            model_base: IMPOSTOR_MODEL_BASE_NAME.to_string(),
            object_base: IMPOSTOR_OBJECT_BASE_NAME.to_string(),
            scene_file: PathBuf::from(IMPOSTOR_SCENE_FILE),
            mesh_file: PathBuf::from(IMPOSTOR_MESH_FILE),
            mesh_reference: join_logical(&[SPHERE_ROOT, SPHERE_MESH_STEM]),
            shader_path: SHADER_PATH.to_string(),
            scale: IMPOSTOR_SPHERE_SIZE,
            output_file: PathBuf::from(IMPOSTOR_LIST_FILE),
        }
    }
}

impl ImpostorConfig {
    pub fn resolver(&self) -> PathResolver {
        PathResolver {
            output_dir: self.output_dir.clone(),
            logical_root: self.logical_root.clone(),
            material_folder: self.material_folder.clone(),
            model_folder: self.model_folder.clone(),
            material_base: self.material_base.clone(),
            model_base: self.model_base.clone(),
            object_base: self.object_base.clone(),
            style: ReferenceStyle::IMPOSTOR,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require_finite("impostor.scale", &[self.scale])
    }

    pub fn scene_path(&self) -> PathBuf {
        resolve_against(&self.output_dir, &self.scene_file)
    }

    pub fn mesh_path(&self) -> PathBuf {
        resolve_against(&self.output_dir, &self.mesh_file)
    }

    pub fn output_path(&self) -> PathBuf {
        resolve_against(&self.output_dir, &self.output_file)
    }
}

/// TOML accepts `nan` and `inf`, which JSON cannot represent.
fn require_finite(field: &str, values: &[f64]) -> Result<()> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(GeneratorError::InvalidConfig {
            field: field.to_string(),
            reason: format!("{:?} is not finite", values),
        })
    }
}

/// Configuration of all pipelines, as read from a config file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub grid: GridConfig,
    pub grid_scene: GridSceneConfig,
    pub impostor: ImpostorConfig,
}

impl GeneratorConfig {
    pub fn from_toml(text: &str, path: &Path) -> Result<Self> {
        toml::from_str(text).map_err(|source| GeneratorError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads a config file. Without a file every pipeline runs on defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let text = fs::read_to_string(path).map_err(|e| GeneratorError::io(path, e))?;
                log::info!("Loaded configuration from {}", path.display());
                Self::from_toml(&text, path)
            }
            None => {
                log::info!("No configuration file given, using defaults");
                Ok(Self::default())
            }
        }
    }
}
