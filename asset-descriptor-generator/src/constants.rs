//! Shared defaults for descriptor generation

/// Shader every generated material is compiled against
pub const SHADER_PATH: &str = "gbuffer.hlsl";

/// Folder holding material descriptors, relative to a pipeline root
pub const MATERIAL_FOLDER: &str = "Material";

/// Folder holding model descriptors, relative to a pipeline root
pub const MODEL_FOLDER: &str = "Model";

/// Extension of every descriptor file written to disk
pub const DESCRIPTOR_EXTENSION: &str = "json";

/// Extension of the binary mesh payload checked before generation
pub const MESH_EXTENSION: &str = "bin";

/// Logical root of the sphere grid assets as seen by the engine loader
pub const SPHERE_ROOT: &str = "Asset/Model/Sphere";

/// Base name shared by sphere materials, models and scene objects
pub const SPHERE_BASE_NAME: &str = "sphere";

/// Mesh file stem shared by the sphere grid and the light impostors
pub const SPHERE_MESH_STEM: &str = "sphere_Mesh";

/// Default number of roughness levels in the sphere grid
pub const SPHERE_ROUGHNESS_LEVELS: u32 = 5;

/// Default number of metallic levels in the sphere grid
pub const SPHERE_METALLIC_LEVELS: u32 = 5;

/// Sphere albedo (white, so only roughness and metallic vary)
pub const SPHERE_ALBEDO: [f64; 3] = [1.0, 1.0, 1.0];

/// World position of the bottom left sphere of the grid
pub const SPHERE_GRID_PIVOT: [f64; 3] = [0.0, 2.0, 5.0];

/// Distance between neighbouring spheres along both grid axes
pub const SPHERE_GRID_SPACING: f64 = 2.0;

/// Uniform scale applied to every sphere placement
pub const SPHERE_GRID_SCALE: f64 = 0.5;

/// Aggregate placement file for the sphere grid
pub const SPHERE_SCENE_SECTION_FILE: &str = "sphere_scene_section.json";

/// Logical root of the light impostor assets
pub const IMPOSTOR_ROOT: &str = "Asset/Model/LightImpostor";

pub const IMPOSTOR_MATERIAL_BASE_NAME: &str = "light_impostor_mat";
pub const IMPOSTOR_MODEL_BASE_NAME: &str = "light_impostor_model";
pub const IMPOSTOR_OBJECT_BASE_NAME: &str = "light_impostor";

/// Uniform scale of an impostor sphere
pub const IMPOSTOR_SPHERE_SIZE: f64 = 0.1;

/// Aggregate placement file for the light impostors
pub const IMPOSTOR_LIST_FILE: &str = "impostor_list.json";

/// Scene the impostors are derived from, relative to the impostor folder
pub const IMPOSTOR_SCENE_FILE: &str = "../../Scene/main.json";

/// Sphere mesh payload, relative to the impostor folder
pub const IMPOSTOR_MESH_FILE: &str = "../Sphere/sphere_Mesh.bin";

/// Fallback normalized value for an axis with a single level
pub const SINGLE_LEVEL_FALLBACK: f64 = 0.0;
