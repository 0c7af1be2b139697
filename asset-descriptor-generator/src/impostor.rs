//! Light impostor generation: one emissive sphere per scene light.

use crate::config::ImpostorConfig;
use crate::descriptor::{MaterialDescriptor, ModelDescriptor, SceneObject, ScenePlacement, Vec3};
use crate::error::{GeneratorError, Result};
use crate::paths::{PathResolver, SourceIndex};
use crate::report::{GenerationReport, instance_progress};
use crate::scene::{SceneLight, load_lights};
use crate::writer::{ensure_dir, write_descriptor};

/// Derives a material, a model and a scene placement from every light.
pub struct ImpostorGenerator<'a> {
    config: &'a ImpostorConfig,
    resolver: PathResolver,
    quiet: bool,
}

impl<'a> ImpostorGenerator<'a> {
    pub fn new(config: &'a ImpostorConfig) -> Self {
        Self {
            config,
            resolver: config.resolver(),
            quiet: false,
        }
    }

    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn resolver(&self) -> &PathResolver {
        &self.resolver
    }

    /// Glows with the light's color and intensity.
    pub fn material_for(&self, light: &SceneLight) -> MaterialDescriptor {
        MaterialDescriptor::new(light.color.to_array(), 0.0, 0.0, &self.config.shader_path)
            .with_emission(light.intensity)
    }

    pub fn model_for(&self, index: SourceIndex) -> ModelDescriptor {
        ModelDescriptor::single(
            self.resolver.material_reference(&index),
            &self.config.mesh_reference,
        )
    }

    /// Sits exactly where the light is, shrunk to a small sphere.
    pub fn placement_for(&self, index: SourceIndex, light: &SceneLight) -> ScenePlacement {
        ScenePlacement {
            object: SceneObject {
                name: self.resolver.object_name(&index),
                translation: light.transform.translation,
                rotation: light.transform.rotation,
                scale: Vec3::splat(self.config.scale),
            },
            model_file_path: self.resolver.model_reference(&index),
        }
    }

    /// Loads the scene lights and generates their impostors.
    /// The configuration, the mesh and the scene are checked before any output is written.
    pub fn generate(&self) -> Result<GenerationReport> {
        self.config.validate()?;
        let mesh_path = self.config.mesh_path();
        if !mesh_path.is_file() {
            return Err(GeneratorError::MissingMesh(mesh_path));
        }
        let lights = load_lights(&self.config.scene_path())?;
        self.generate_from(&lights)
    }

    /// Generates impostors for an already loaded light list.
    pub fn generate_from(&self, lights: &[SceneLight]) -> Result<GenerationReport> {
        self.config.validate()?;
        ensure_dir(&self.resolver.material_dir())?;
        ensure_dir(&self.resolver.model_dir())?;

        let mut report = GenerationReport::new("Light impostors");
        let mut placements = Vec::with_capacity(lights.len());
        let pb = instance_progress(lights.len(), "Writing impostors", self.quiet);

        for (position, light) in lights.iter().enumerate() {
            let index = SourceIndex(position);

            let material_path = self.resolver.material_file(&index);
            write_descriptor(&material_path, &self.material_for(light))?;
            report.materials.push(material_path);

            let model_path = self.resolver.model_file(&index);
            write_descriptor(&model_path, &self.model_for(index))?;
            report.models.push(model_path);

            placements.push(self.placement_for(index, light));
            pb.inc(1);
        }

        let output = self.config.output_path();
        if let Some(parent) = output.parent() {
            ensure_dir(parent)?;
        }
        write_descriptor(&output, &placements)?;
        pb.finish_with_message("Impostors written");

        log::info!(
            "Wrote {} light impostors to {}",
            placements.len(),
            output.display()
        );
        report.placements = Some((output, placements.len()));
        Ok(report)
    }
}
