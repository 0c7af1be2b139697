//! Descriptor records consumed by the deferred renderer's resource loader.
//! Field names mirror the engine's JSON schema exactly.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Three-component vector serialized as `{"x", "y", "z"}`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub const fn splat(v: f64) -> Self {
        Self::new(v, v, v)
    }

    pub fn from_array(v: [f64; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }

    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// Empty `@IResource` marker the loader uses to tag resource files.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct ResourceMarker {}

/// Shading parameters of a material.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ParameterTable {
    #[serde(rename = "Albedo")]
    pub albedo: [f64; 3],
    #[serde(rename = "Roughness")]
    pub roughness: f64,
    #[serde(rename = "Metallic")]
    pub metallic: f64,
    /// Only light impostors glow.
    #[serde(rename = "Emission", default, skip_serializing_if = "Option::is_none")]
    pub emission: Option<f64>,
}

/// Material resource file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MaterialDescriptor {
    #[serde(rename = "@IResource")]
    pub resource: ResourceMarker,
    #[serde(rename = "mParameterTable")]
    pub parameters: ParameterTable,
    #[serde(rename = "mShaderPath")]
    pub shader_path: String,
    /// Texture slot to texture path. Sorted so output is stable.
    #[serde(rename = "mTexturePath", default)]
    pub texture_paths: BTreeMap<String, String>,
}

impl MaterialDescriptor {
    /// Untextured, non-emissive material.
    pub fn new(albedo: [f64; 3], roughness: f64, metallic: f64, shader_path: &str) -> Self {
        Self {
            resource: ResourceMarker::default(),
            parameters: ParameterTable {
                albedo,
                roughness,
                metallic,
                emission: None,
            },
            shader_path: shader_path.to_string(),
            texture_paths: BTreeMap::new(),
        }
    }

    pub fn with_emission(mut self, emission: f64) -> Self {
        self.parameters.emission = Some(emission);
        self
    }
}

/// Model resource file binding materials to a mesh.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ModelDescriptor {
    #[serde(rename = "@IResource")]
    pub resource: ResourceMarker,
    /// Logical paths of the materials, one per submesh.
    #[serde(rename = "mMaterialPath")]
    pub material_paths: Vec<String>,
    /// Logical path of the mesh.
    #[serde(rename = "mMeshPath")]
    pub mesh_path: String,
}

impl ModelDescriptor {
    pub fn single(material_path: String, mesh_path: &str) -> Self {
        Self {
            resource: ResourceMarker::default(),
            material_paths: vec![material_path],
            mesh_path: mesh_path.to_string(),
        }
    }
}

/// Transform block of a scene object.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SceneObject {
    #[serde(rename = "mName")]
    pub name: String,
    #[serde(rename = "mTranslation")]
    pub translation: Vec3,
    #[serde(rename = "mRotation")]
    pub rotation: Vec3,
    #[serde(rename = "mScale")]
    pub scale: Vec3,
}

/// One instantiated model in the consuming scene.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ScenePlacement {
    #[serde(rename = "@SceneObject")]
    pub object: SceneObject,
    /// Logical path of the model file.
    #[serde(rename = "mModelFilePath")]
    pub model_file_path: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn material_without_emission_omits_key() {
        let material = MaterialDescriptor::new([1.0, 1.0, 1.0], 0.5, 0.25, "gbuffer.hlsl");
        let value = serde_json::to_value(&material).unwrap();
        assert_eq!(
            value,
            json!({
                "@IResource": {},
                "mParameterTable": {
                    "Albedo": [1.0, 1.0, 1.0],
                    "Roughness": 0.5,
                    "Metallic": 0.25
                },
                "mShaderPath": "gbuffer.hlsl",
                "mTexturePath": {}
            })
        );
    }

    #[test]
    fn emissive_material_carries_emission() {
        let material =
            MaterialDescriptor::new([0.2, 0.4, 0.6], 0.0, 0.0, "gbuffer.hlsl").with_emission(7.5);
        let value = serde_json::to_value(&material).unwrap();
        assert_eq!(value["mParameterTable"]["Emission"], json!(7.5));
    }

    #[test]
    fn model_and_placement_keys_match_loader_schema() {
        let model = ModelDescriptor::single("Root/Material/a.json".into(), "Root/mesh");
        assert_eq!(
            serde_json::to_value(&model).unwrap(),
            json!({
                "@IResource": {},
                "mMaterialPath": ["Root/Material/a.json"],
                "mMeshPath": "Root/mesh"
            })
        );

        let placement = ScenePlacement {
            object: SceneObject {
                name: "a".into(),
                translation: Vec3::new(1.0, 2.0, 3.0),
                rotation: Vec3::ZERO,
                scale: Vec3::splat(0.5),
            },
            model_file_path: "Root/Model/a".into(),
        };
        let value = serde_json::to_value(&placement).unwrap();
        assert_eq!(value["@SceneObject"]["mName"], json!("a"));
        assert_eq!(value["@SceneObject"]["mScale"], json!({"x": 0.5, "y": 0.5, "z": 0.5}));
        assert_eq!(value["mModelFilePath"], json!("Root/Model/a"));
    }
}
