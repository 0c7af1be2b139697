//! Procedural generation of material, model and scene descriptors for the
//! deferred renderer's asset pipeline.
//!
//! Two pipelines share the same building blocks:
//! - [`grid::GridGenerator`] sweeps roughness x metallic into a sphere grid.
//! - [`impostor::ImpostorGenerator`] derives emissive spheres from scene lights.
//!
//! Each pipeline owns a [`paths::PathResolver`] that names every file it
//! writes and every reference it embeds.

pub mod axis;
pub mod config;
pub mod constants;
pub mod descriptor;
pub mod error;
pub mod grid;
pub mod impostor;
pub mod paths;
pub mod report;
pub mod scene;
pub mod writer;

pub use config::{GeneratorConfig, GridConfig, GridSceneConfig, ImpostorConfig};
pub use error::{GeneratorError, Result};
pub use grid::GridGenerator;
pub use impostor::ImpostorGenerator;
