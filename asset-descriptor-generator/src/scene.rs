//! Source scene reading for derived generation.
//! Only the light list is consumed; every other scene field is ignored.

use crate::descriptor::Vec3;
use crate::error::{GeneratorError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Transform block of a scene light.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LightTransform {
    #[serde(rename = "mTranslation")]
    pub translation: Vec3,
    #[serde(rename = "mRotation")]
    pub rotation: Vec3,
}

/// A light as authored in the scene file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SceneLight {
    #[serde(rename = "mColor")]
    pub color: Vec3,
    #[serde(rename = "mIntensity")]
    pub intensity: f64,
    #[serde(rename = "@SceneObject")]
    pub transform: LightTransform,
}

impl SceneLight {
    /// Rejects values the renderer cannot shade.
    fn validate(&self, index: usize) -> Result<()> {
        let invalid = |reason: &str| GeneratorError::InvalidLight {
            index,
            reason: reason.to_string(),
        };
        if !self.color.is_finite() {
            return Err(invalid("color is not finite"));
        }
        if !self.intensity.is_finite() {
            return Err(invalid("intensity is not finite"));
        }
        if !self.transform.translation.is_finite() {
            return Err(invalid("translation is not finite"));
        }
        if !self.transform.rotation.is_finite() {
            return Err(invalid("rotation is not finite"));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct SceneFile {
    #[serde(rename = "mSceneLight")]
    lights: Vec<serde_json::Value>,
}

/// Parses the light list, keeping authoring order.
/// Each light is decoded separately so a malformed entry is reported by index.
pub fn parse_lights(json: &str, path: &Path) -> Result<Vec<SceneLight>> {
    let scene: SceneFile =
        serde_json::from_str(json).map_err(|source| GeneratorError::InvalidScene {
            path: path.to_path_buf(),
            source,
        })?;

    scene
        .lights
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            let light: SceneLight =
                serde_json::from_value(value).map_err(|e| GeneratorError::InvalidLight {
                    index,
                    reason: e.to_string(),
                })?;
            light.validate(index)?;
            Ok(light)
        })
        .collect()
}

/// Loads every light of a scene file. Fails if the file is missing.
pub fn load_lights(path: &Path) -> Result<Vec<SceneLight>> {
    if !path.is_file() {
        return Err(GeneratorError::MissingScene(path.to_path_buf()));
    }
    let json = fs::read_to_string(path).map_err(|e| GeneratorError::io(path, e))?;
    let lights = parse_lights(&json, path)?;
    log::info!("Loaded {} lights from {}", lights.len(), path.display());
    Ok(lights)
}
