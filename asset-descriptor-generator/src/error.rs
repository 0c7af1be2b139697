//! Error types for descriptor generation.

use std::path::PathBuf;
use thiserror::Error;

/// Every way a generation run can fail. All of them abort the run.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// The mesh every model points at has not been exported yet.
    #[error("mesh file does not exist: {}", .0.display())]
    MissingMesh(PathBuf),

    #[error("scene file does not exist: {}", .0.display())]
    MissingScene(PathBuf),

    /// The scene file is not valid JSON or lacks the light list.
    #[error("invalid scene file {}: {source}", path.display())]
    InvalidScene {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("light #{index} is malformed: {reason}")]
    InvalidLight { index: usize, reason: String },

    /// A configured value would end up as `null` in a descriptor.
    #[error("invalid config value '{field}': {reason}")]
    InvalidConfig { field: String, reason: String },

    /// An axis with zero levels has no cells to generate.
    #[error("axis '{0}' must have at least one level")]
    InvalidAxis(String),

    #[error("IO error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl GeneratorError {
    /// Wraps an IO error with the path it happened at.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GeneratorError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
