//! Naming and addressing of generated descriptors.
//!
//! Every descriptor has two addresses: the file system path it is written to
//! and the logical path sibling descriptors embed to reference it. Both are
//! derived here from the same instance key.

use crate::axis::GridCell;
use crate::constants::DESCRIPTOR_EXTENSION;
use std::path::{Path, PathBuf};

/// Key identifying one generated instance within its pipeline.
pub trait InstanceKey {
    /// Suffix appended to a base name, e.g. `_R1_M3` or `_7`.
    fn suffix(&self) -> String;
}

impl InstanceKey for GridCell {
    fn suffix(&self) -> String {
        format!("_R{}_M{}", self.roughness, self.metallic)
    }
}

/// Position of a source entity in its source list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceIndex(pub usize);

impl InstanceKey for SourceIndex {
    fn suffix(&self) -> String {
        format!("_{}", self.0)
    }
}

/// Which logical references carry the `.json` extension.
/// Fixed per pipeline; the loader expects exactly these forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceStyle {
    pub material_extension: bool,
    pub model_extension: bool,
}

impl ReferenceStyle {
    /// Sphere grid: `.../Material/sphere_R0_M0.json`, `.../Model/sphere_R0_M0`.
    pub const GRID: ReferenceStyle = ReferenceStyle {
        material_extension: true,
        model_extension: false,
    };

    /// Light impostors: `.../Material/light_impostor_mat_0`, `.../Model/light_impostor_model_0.json`.
    pub const IMPOSTOR: ReferenceStyle = ReferenceStyle {
        material_extension: false,
        model_extension: true,
    };
}

/// Single source of truth for file and logical paths of one pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct PathResolver {
    /// File system directory the material and model folders live in.
    pub output_dir: PathBuf,
    /// Prefix of every logical path, e.g. `Asset/Model/Sphere`.
    pub logical_root: String,
    pub material_folder: String,
    pub model_folder: String,
    pub material_base: String,
    pub model_base: String,
    pub object_base: String,
    pub style: ReferenceStyle,
}

impl PathResolver {
    pub fn material_dir(&self) -> PathBuf {
        self.output_dir.join(&self.material_folder)
    }

    pub fn model_dir(&self) -> PathBuf {
        self.output_dir.join(&self.model_folder)
    }

    pub fn material_stem<K: InstanceKey>(&self, key: &K) -> String {
        format!("{}{}", self.material_base, key.suffix())
    }

    pub fn model_stem<K: InstanceKey>(&self, key: &K) -> String {
        format!("{}{}", self.model_base, key.suffix())
    }

    /// Name of the scene object instantiating this key's model.
    pub fn object_name<K: InstanceKey>(&self, key: &K) -> String {
        format!("{}{}", self.object_base, key.suffix())
    }

    /// Where the material descriptor is written.
    pub fn material_file<K: InstanceKey>(&self, key: &K) -> PathBuf {
        self.material_dir()
            .join(descriptor_file_name(&self.material_stem(key)))
    }

    /// Where the model descriptor is written.
    pub fn model_file<K: InstanceKey>(&self, key: &K) -> PathBuf {
        self.model_dir()
            .join(descriptor_file_name(&self.model_stem(key)))
    }

    /// What a model embeds to reference this key's material.
    pub fn material_reference<K: InstanceKey>(&self, key: &K) -> String {
        self.logical_path(
            &self.material_folder,
            &self.material_stem(key),
            self.style.material_extension,
        )
    }

    /// What a scene placement embeds to reference this key's model.
    pub fn model_reference<K: InstanceKey>(&self, key: &K) -> String {
        self.logical_path(
            &self.model_folder,
            &self.model_stem(key),
            self.style.model_extension,
        )
    }

    fn logical_path(&self, folder: &str, stem: &str, with_extension: bool) -> String {
        let file = if with_extension {
            descriptor_file_name(stem)
        } else {
            stem.to_string()
        };
        join_logical(&[self.logical_root.as_str(), folder, file.as_str()])
    }
}

fn descriptor_file_name(stem: &str) -> String {
    format!("{}.{}", stem, DESCRIPTOR_EXTENSION)
}

/// Joins logical path segments with `/`, dropping empty segments and
/// stray separators so `Asset/Model/` and `Asset/Model` behave alike.
/// A leading `/` on the first segment is kept.
pub fn join_logical(segments: &[&str]) -> String {
    segments
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let s = s.trim_end_matches('/');
            if i == 0 { s } else { s.trim_start_matches('/') }
        })
        .filter(|s| !s.is_empty() && *s != ".")
        .collect::<Vec<_>>()
        .join("/")
}

/// Resolves a configured path against a pipeline directory unless absolute.
pub fn resolve_against(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_resolver() -> PathResolver {
        PathResolver {
            output_dir: PathBuf::from("out"),
            logical_root: "Asset/Model/Sphere".into(),
            material_folder: "Material".into(),
            model_folder: "Model".into(),
            material_base: "sphere".into(),
            model_base: "sphere".into(),
            object_base: "sphere".into(),
            style: ReferenceStyle::GRID,
        }
    }

    fn impostor_resolver() -> PathResolver {
        PathResolver {
            output_dir: PathBuf::from("impostors"),
            logical_root: "Asset/Model/LightImpostor".into(),
            material_folder: "Material".into(),
            model_folder: "Model".into(),
            material_base: "light_impostor_mat".into(),
            model_base: "light_impostor_model".into(),
            object_base: "light_impostor".into(),
            style: ReferenceStyle::IMPOSTOR,
        }
    }

    #[test]
    fn grid_names_put_roughness_before_metallic() {
        let resolver = grid_resolver();
        let cell = GridCell {
            roughness: 1,
            metallic: 3,
        };
        assert_eq!(
            resolver.material_file(&cell),
            PathBuf::from("out/Material/sphere_R1_M3.json")
        );
        assert_eq!(
            resolver.model_file(&cell),
            PathBuf::from("out/Model/sphere_R1_M3.json")
        );
        assert_eq!(
            resolver.material_reference(&cell),
            "Asset/Model/Sphere/Material/sphere_R1_M3.json"
        );
        assert_eq!(
            resolver.model_reference(&cell),
            "Asset/Model/Sphere/Model/sphere_R1_M3"
        );
        assert_eq!(resolver.object_name(&cell), "sphere_R1_M3");
    }

    #[test]
    fn impostor_names_use_source_position() {
        let resolver = impostor_resolver();
        let key = SourceIndex(4);
        assert_eq!(
            resolver.material_file(&key),
            PathBuf::from("impostors/Material/light_impostor_mat_4.json")
        );
        assert_eq!(
            resolver.material_reference(&key),
            "Asset/Model/LightImpostor/Material/light_impostor_mat_4"
        );
        assert_eq!(
            resolver.model_reference(&key),
            "Asset/Model/LightImpostor/Model/light_impostor_model_4.json"
        );
        assert_eq!(resolver.object_name(&key), "light_impostor_4");
    }

    #[test]
    fn reference_matches_written_file_name() {
        let resolver = grid_resolver();
        let cell = GridCell {
            roughness: 0,
            metallic: 2,
        };
        let file = resolver.material_file(&cell);
        let file_name = file.file_name().unwrap().to_str().unwrap();
        assert!(resolver.material_reference(&cell).ends_with(file_name));
    }

    #[test]
    fn join_drops_empty_and_dot_segments() {
        assert_eq!(join_logical(&["Asset/Model/", "./", "a"]), "Asset/Model/a");
        assert_eq!(join_logical(&["", "Material", "b.json"]), "Material/b.json");
    }

    #[test]
    fn join_keeps_root_relative_prefix() {
        assert_eq!(join_logical(&["/Asset/Model/", "/Material", "c.json"]), "/Asset/Model/Material/c.json");
        let resolver = PathResolver {
            logical_root: "/Asset/Model/Sphere".into(),
            ..grid_resolver()
        };
        let cell = GridCell {
            roughness: 0,
            metallic: 0,
        };
        assert_eq!(
            resolver.material_reference(&cell),
            "/Asset/Model/Sphere/Material/sphere_R0_M0.json"
        );
    }
}
