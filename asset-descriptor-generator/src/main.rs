//! Descriptor generator entry point

use anyhow::{Context, Result};
use asset_descriptor_generator::report::GenerationReport;
use asset_descriptor_generator::{GeneratorConfig, GridGenerator, ImpostorGenerator};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    version,
    about = "Generates material, model and scene descriptors for the deferred renderer"
)]
struct Cli {
    /// TOML file overriding the built-in pipeline defaults.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Hide progress bars.
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write the sphere grid materials and models.
    Grid(GridArgs),
    /// Write the sphere grid scene section.
    GridScene(GridArgs),
    /// Write the sphere grid descriptors, then its scene section.
    AllGrid(GridArgs),
    /// Write one light impostor per light of the source scene.
    Impostors(ImpostorArgs),
}

#[derive(Args)]
struct GridArgs {
    /// Sphere asset directory (holds the mesh, receives the descriptors).
    #[arg(long)]
    output_dir: Option<PathBuf>,
    /// Number of roughness levels.
    #[arg(long)]
    roughness: Option<u32>,
    /// Number of metallic levels.
    #[arg(long)]
    metallic: Option<u32>,
}

#[derive(Args)]
struct ImpostorArgs {
    /// Impostor asset directory.
    #[arg(long)]
    output_dir: Option<PathBuf>,
    /// Scene file to read lights from.
    #[arg(long)]
    scene: Option<PathBuf>,
}

fn apply_grid_args(config: &mut GeneratorConfig, args: GridArgs) {
    if let Some(dir) = args.output_dir {
        config.grid.output_dir = dir;
    }
    if let Some(levels) = args.roughness {
        config.grid.roughness_levels = levels;
    }
    if let Some(levels) = args.metallic {
        config.grid.metallic_levels = levels;
    }
}

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut config = GeneratorConfig::load(cli.config.as_deref())?;
    let mut reports: Vec<GenerationReport> = Vec::new();

    match cli.command {
        Command::Grid(args) => {
            apply_grid_args(&mut config, args);
            let generator = GridGenerator::new(&config.grid)?.quiet(cli.quiet);
            reports.push(
                generator
                    .generate_descriptors()
                    .context("Sphere grid generation failed")?,
            );
        }
        Command::GridScene(args) => {
            apply_grid_args(&mut config, args);
            let generator = GridGenerator::new(&config.grid)?.quiet(cli.quiet);
            reports.push(
                generator
                    .generate_scene_section(&config.grid_scene)
                    .context("Sphere scene section generation failed")?,
            );
        }
        Command::AllGrid(args) => {
            apply_grid_args(&mut config, args);
            let generator = GridGenerator::new(&config.grid)?.quiet(cli.quiet);
            reports.push(
                generator
                    .generate_descriptors()
                    .context("Sphere grid generation failed")?,
            );
            reports.push(
                generator
                    .generate_scene_section(&config.grid_scene)
                    .context("Sphere scene section generation failed")?,
            );
        }
        Command::Impostors(args) => {
            if let Some(dir) = args.output_dir {
                config.impostor.output_dir = dir;
            }
            if let Some(scene) = args.scene {
                config.impostor.scene_file = scene;
            }
            let generator = ImpostorGenerator::new(&config.impostor).quiet(cli.quiet);
            reports.push(
                generator
                    .generate()
                    .context("Light impostor generation failed")?,
            );
        }
    }

    for report in &reports {
        report.log_summary();
    }
    let total: usize = reports.iter().map(GenerationReport::files_written).sum();
    log::info!("Generation complete, {} files written", total);
    Ok(())
}
