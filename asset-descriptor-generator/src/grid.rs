//! Sphere grid generation over roughness x metallic.

use crate::axis::{Axis, GridCell, cells};
use crate::config::{GridConfig, GridSceneConfig};
use crate::descriptor::{MaterialDescriptor, ModelDescriptor, SceneObject, ScenePlacement, Vec3};
use crate::error::{GeneratorError, Result};
use crate::paths::{PathResolver, resolve_against};
use crate::report::{GenerationReport, instance_progress};
use crate::writer::{ensure_dir, write_descriptor};

/// Generates one material and one model per grid cell, and the scene
/// section laying the same cells out in world space.
pub struct GridGenerator<'a> {
    config: &'a GridConfig,
    resolver: PathResolver,
    roughness: Axis,
    metallic: Axis,
    quiet: bool,
}

impl<'a> GridGenerator<'a> {
    /// Validates the configuration and both axes. Nothing is touched on disk yet.
    pub fn new(config: &'a GridConfig) -> Result<Self> {
        config.validate()?;
        let roughness = config.roughness_axis()?;
        let metallic = config.metallic_axis()?;
        for axis in [&roughness, &metallic] {
            if axis.is_degenerate() {
                log::warn!(
                    "Axis '{}' has a single level, its value falls back to {}",
                    axis.name,
                    axis.normalized(0)
                );
            }
        }

        Ok(Self {
            config,
            resolver: config.resolver(),
            roughness,
            metallic,
            quiet: false,
        })
    }

    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn resolver(&self) -> &PathResolver {
        &self.resolver
    }

    pub fn cell_count(&self) -> usize {
        self.roughness.count as usize * self.metallic.count as usize
    }

    pub fn cells(&self) -> impl Iterator<Item = GridCell> {
        cells(&self.roughness, &self.metallic)
    }

    pub fn material_for(&self, cell: &GridCell) -> MaterialDescriptor {
        MaterialDescriptor::new(
            self.config.albedo,
            self.roughness.normalized(cell.roughness),
            self.metallic.normalized(cell.metallic),
            &self.config.shader_path,
        )
    }

    pub fn model_for(&self, cell: &GridCell) -> ModelDescriptor {
        ModelDescriptor::single(
            self.resolver.material_reference(cell),
            &self.config.mesh_reference(),
        )
    }

    /// Places the cell at `pivot + index * spacing` on the x/y plane.
    pub fn placement_for(&self, cell: &GridCell, scene: &GridSceneConfig) -> ScenePlacement {
        let [px, py, pz] = scene.pivot;
        ScenePlacement {
            object: SceneObject {
                name: self.resolver.object_name(cell),
                translation: Vec3::new(
                    px + cell.roughness as f64 * scene.spacing,
                    py + cell.metallic as f64 * scene.spacing,
                    pz,
                ),
                rotation: Vec3::ZERO,
                scale: Vec3::splat(scene.scale),
            },
            model_file_path: self.resolver.model_reference(cell),
        }
    }

    /// Writes every material and model descriptor.
    /// Aborts before writing anything if the mesh has not been exported.
    pub fn generate_descriptors(&self) -> Result<GenerationReport> {
        let mesh_file = self.config.mesh_file();
        if !mesh_file.is_file() {
            return Err(GeneratorError::MissingMesh(mesh_file));
        }

        let material_dir = self.resolver.material_dir();
        let model_dir = self.resolver.model_dir();
        ensure_dir(&material_dir)?;
        ensure_dir(&model_dir)?;

        log::info!(
            "Generating {}x{} sphere grid into {}",
            self.roughness.count,
            self.metallic.count,
            self.config.output_dir.display()
        );

        let mut report = GenerationReport::new("Sphere grid");
        let pb = instance_progress(self.cell_count() * 2, "Writing sphere descriptors", self.quiet);

        for cell in self.cells() {
            let path = self.resolver.material_file(&cell);
            write_descriptor(&path, &self.material_for(&cell))?;
            report.materials.push(path);
            pb.inc(1);
        }

        for cell in self.cells() {
            let path = self.resolver.model_file(&cell);
            write_descriptor(&path, &self.model_for(&cell))?;
            report.models.push(path);
            pb.inc(1);
        }

        pb.finish_with_message("Sphere descriptors written");
        Ok(report)
    }

    /// Rejects layouts whose far corner overflows to infinity.
    /// Translations are linear in the cell index, so the two extreme cells bound all others.
    fn check_layout(&self, scene: &GridSceneConfig) -> Result<()> {
        scene.validate()?;
        let far = GridCell {
            roughness: self.roughness.count - 1,
            metallic: self.metallic.count - 1,
        };
        let translation = self.placement_for(&far, scene).object.translation;
        if !translation.is_finite() {
            return Err(GeneratorError::InvalidConfig {
                field: "grid_scene.spacing".to_string(),
                reason: format!("cell {:?} lands at non-finite {:?}", far, translation),
            });
        }
        Ok(())
    }

    /// Writes the aggregate scene section placing every cell's model.
    pub fn generate_scene_section(&self, scene: &GridSceneConfig) -> Result<GenerationReport> {
        self.check_layout(scene)?;
        let output = resolve_against(&self.config.output_dir, &scene.output_file);
        if let Some(parent) = output.parent() {
            ensure_dir(parent)?;
        }

        let pb = instance_progress(self.cell_count(), "Placing spheres", self.quiet);
        let placements: Vec<ScenePlacement> = self
            .cells()
            .map(|cell| {
                let placement = self.placement_for(&cell, scene);
                pb.inc(1);
                placement
            })
            .collect();
        pb.finish_and_clear();

        write_descriptor(&output, &placements)?;
        log::info!(
            "Wrote {} sphere placements to {}",
            placements.len(),
            output.display()
        );

        let mut report = GenerationReport::new("Sphere scene section");
        report.placements = Some((output, placements.len()));
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    fn config_in(dir: &Path, roughness: u32, metallic: u32) -> GridConfig {
        GridConfig {
            output_dir: dir.to_path_buf(),
            roughness_levels: roughness,
            metallic_levels: metallic,
            ..GridConfig::default()
        }
    }

    fn with_mesh(config: &GridConfig) {
        fs::create_dir_all(&config.output_dir).unwrap();
        fs::write(config.mesh_file(), b"mesh").unwrap();
    }

    #[test]
    fn two_by_two_grid_values() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path(), 2, 2);
        let generator = GridGenerator::new(&config).unwrap();

        let values: Vec<(String, f64, f64)> = generator
            .cells()
            .map(|cell| {
                let material = generator.material_for(&cell);
                (
                    generator.resolver().material_stem(&cell),
                    material.parameters.roughness,
                    material.parameters.metallic,
                )
            })
            .collect();

        assert_eq!(
            values,
            vec![
                ("sphere_R0_M0".to_string(), 0.0, 0.0),
                ("sphere_R0_M1".to_string(), 0.0, 1.0),
                ("sphere_R1_M0".to_string(), 1.0, 0.0),
                ("sphere_R1_M1".to_string(), 1.0, 1.0),
            ]
        );
    }

    #[test]
    fn single_level_axis_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path(), 1, 3);
        let generator = GridGenerator::new(&config).unwrap();
        for cell in generator.cells() {
            let material = generator.material_for(&cell);
            assert_eq!(material.parameters.roughness, 0.0);
            assert!(material.parameters.metallic.is_finite());
        }
        assert_eq!(generator.cell_count(), 3);
    }

    #[test]
    fn zero_level_axis_is_rejected_before_output() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir.path().join("out"), 0, 3);
        assert!(matches!(
            GridGenerator::new(&config),
            Err(GeneratorError::InvalidAxis(_))
        ));
        assert!(!dir.path().join("out").exists());
    }

    #[test]
    fn missing_mesh_aborts_without_output() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path(), 2, 2);
        let generator = GridGenerator::new(&config).unwrap().quiet(true);
        let err = generator.generate_descriptors().unwrap_err();
        assert!(matches!(err, GeneratorError::MissingMesh(_)));
        assert!(!generator.resolver().material_dir().exists());
        assert!(!generator.resolver().model_dir().exists());
    }

    #[test]
    fn models_reference_their_own_cell() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path(), 3, 2);
        with_mesh(&config);
        let generator = GridGenerator::new(&config).unwrap().quiet(true);
        let report = generator.generate_descriptors().unwrap();
        assert_eq!(report.materials.len(), 6);
        assert_eq!(report.models.len(), 6);

        for cell in generator.cells() {
            let text = fs::read_to_string(generator.resolver().model_file(&cell)).unwrap();
            let model: ModelDescriptor = serde_json::from_str(&text).unwrap();
            assert_eq!(
                model.material_paths,
                vec![generator.resolver().material_reference(&cell)]
            );
            assert_eq!(model.mesh_path, "Asset/Model/Sphere/sphere_Mesh");
        }
    }

    #[test]
    fn placements_follow_pivot_and_spacing() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path(), 2, 3);
        let generator = GridGenerator::new(&config).unwrap();
        let scene = GridSceneConfig::default();

        let cell = GridCell {
            roughness: 1,
            metallic: 2,
        };
        let placement = generator.placement_for(&cell, &scene);
        assert_eq!(placement.object.name, "sphere_R1_M2");
        assert_eq!(placement.object.translation, Vec3::new(2.0, 6.0, 5.0));
        assert_eq!(placement.object.rotation, Vec3::ZERO);
        assert_eq!(placement.object.scale, Vec3::splat(0.5));
        assert_eq!(
            placement.model_file_path,
            generator.resolver().model_reference(&cell)
        );
    }

    #[test]
    fn non_finite_albedo_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let config = GridConfig {
            albedo: [1.0, f64::NAN, 1.0],
            ..config_in(dir.path(), 2, 2)
        };
        assert!(matches!(
            GridGenerator::new(&config),
            Err(GeneratorError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn non_finite_scene_values_write_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir.path().join("out"), 2, 2);
        let generator = GridGenerator::new(&config).unwrap().quiet(true);
        let scene = GridSceneConfig {
            spacing: f64::NAN,
            scale: f64::INFINITY,
            ..GridSceneConfig::default()
        };
        assert!(matches!(
            generator.generate_scene_section(&scene),
            Err(GeneratorError::InvalidConfig { .. })
        ));
        assert!(!dir.path().join("out").exists());
    }

    #[test]
    fn overflowing_layout_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir.path().join("out"), 3, 1);
        let generator = GridGenerator::new(&config).unwrap().quiet(true);
        let scene = GridSceneConfig {
            pivot: [f64::MAX, 0.0, 0.0],
            spacing: f64::MAX,
            ..GridSceneConfig::default()
        };
        assert!(matches!(
            generator.generate_scene_section(&scene),
            Err(GeneratorError::InvalidConfig { field, .. }) if field == "grid_scene.spacing"
        ));
        assert!(!dir.path().join("out").exists());
    }

    #[test]
    fn scene_section_is_one_ordered_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path(), 2, 2);
        let generator = GridGenerator::new(&config).unwrap().quiet(true);
        let report = generator
            .generate_scene_section(&GridSceneConfig::default())
            .unwrap();

        let (path, count) = report.placements.unwrap();
        assert_eq!(path, dir.path().join("sphere_scene_section.json"));
        assert_eq!(count, 4);

        let placements: Vec<ScenePlacement> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        let names: Vec<&str> = placements.iter().map(|p| p.object.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["sphere_R0_M0", "sphere_R0_M1", "sphere_R1_M0", "sphere_R1_M1"]
        );
    }
}
