//! JSON serialization of descriptors to disk.

use crate::error::{GeneratorError, Result};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::path::Path;

const INDENT: &[u8] = b"    ";

/// Renders a descriptor as 4-space indented JSON without a trailing newline.
pub fn to_descriptor_json<T: Serialize>(value: &T) -> serde_json::Result<Vec<u8>> {
    let mut bytes = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut serializer = Serializer::with_formatter(&mut bytes, formatter);
    value.serialize(&mut serializer)?;
    Ok(bytes)
}

/// Writes a descriptor to `path`, replacing any previous file.
/// The parent directory must already exist.
pub fn write_descriptor<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let bytes = to_descriptor_json(value).map_err(|source| GeneratorError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, bytes).map_err(|e| GeneratorError::io(path, e))?;
    log::debug!("Wrote {}", path.display());
    Ok(())
}

/// Creates a descriptor folder and its parents if missing.
pub fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| GeneratorError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{MaterialDescriptor, Vec3};

    #[test]
    fn uses_four_space_indent() {
        let json = String::from_utf8(to_descriptor_json(&Vec3::new(1.0, 0.5, 5.0)).unwrap()).unwrap();
        assert_eq!(json, "{\n    \"x\": 1.0,\n    \"y\": 0.5,\n    \"z\": 5.0\n}");
    }

    #[test]
    fn empty_maps_stay_inline() {
        let material = MaterialDescriptor::new([1.0, 1.0, 1.0], 0.0, 1.0, "gbuffer.hlsl");
        let json = String::from_utf8(to_descriptor_json(&material).unwrap()).unwrap();
        assert!(json.starts_with("{\n    \"@IResource\": {},\n"));
        assert!(json.ends_with("\"mTexturePath\": {}\n}"));
        assert!(json.contains("        \"Albedo\": [\n            1.0,\n"));
    }

    #[test]
    fn write_fails_without_parent_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("a.json");
        let err = write_descriptor(&path, &Vec3::ZERO).unwrap_err();
        assert!(matches!(err, GeneratorError::Io { .. }));
    }

    #[test]
    fn write_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.json");
        fs::write(&path, "stale content that is longer than the new one").unwrap();
        write_descriptor(&path, &Vec3::ZERO).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "{\n    \"x\": 0.0,\n    \"y\": 0.0,\n    \"z\": 0.0\n}");
    }
}
