//! Prism - render one of the built-in scenes to a PNG.

use anyhow::{Context, Result};
use clap::Parser;
use prism_core::{RenderParams, ScenePreset, ViewSettings};
use prism_renderer::{render, render_serial, Camera, RenderConfig};
use std::path::{Path, PathBuf};

/// Parameter file read when `--params` is not given.
const DEFAULT_PARAMS: &str = "parameters.txt";

#[derive(Parser, Debug)]
#[command(name = "prism", version, about = "Whitted-style ray tracer")]
struct Args {
    /// Parameter file with `width <n>` and `height <n>` lines
    /// [default: parameters.txt, skipped if missing]
    #[arg(long)]
    params: Option<PathBuf>,

    /// Output PNG path
    #[arg(short, long, default_value = "render.png")]
    output: PathBuf,

    /// Built-in scene: 1 = shapes, 2 = tower, 3 = tree
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(1..=3))]
    scene: u8,

    /// Reflection bounces after the primary hit (negative disables)
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    depth: i32,

    /// Seed for the dither noise
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Quantize without dithering
    #[arg(long)]
    no_dither: bool,

    /// Worker threads (defaults to one per core)
    #[arg(long)]
    threads: Option<usize>,

    /// Render on the main thread only
    #[arg(long)]
    serial: bool,
}

impl Args {
    fn render_config(&self) -> RenderConfig {
        RenderConfig {
            reflection_depth: self.depth,
            dither: !self.no_dither,
            seed: self.seed,
            ..Default::default()
        }
    }
}

/// Load the resolution. Only a missing default file falls back silently.
fn load_params(explicit: Option<&Path>) -> Result<RenderParams> {
    match explicit {
        Some(path) => RenderParams::from_file(path)
            .with_context(|| format!("Failed to read parameters from {}", path.display())),
        None => {
            let path = Path::new(DEFAULT_PARAMS);
            if path.exists() {
                RenderParams::from_file(path)
                    .with_context(|| format!("Failed to read parameters from {DEFAULT_PARAMS}"))
            } else {
                let params = RenderParams::default();
                log::warn!(
                    "{} not found, using {}x{}",
                    DEFAULT_PARAMS,
                    params.width,
                    params.height
                );
                Ok(params)
            }
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("Failed to configure the thread pool")?;
    }

    let params = load_params(args.params.as_deref())?;

    let preset = ScenePreset::from_index(args.scene)
        .with_context(|| format!("Unknown scene {}", args.scene))?;
    let view = ViewSettings::default();
    let scene = preset.build_with(&view);

    let (spheres, triangles, planes) = scene.counts();
    log::info!(
        "Scene {} ({}): {} spheres, {} triangles, {} planes",
        preset.index(),
        preset.name(),
        spheres,
        triangles,
        planes
    );

    let camera = Camera::from_view(&view).with_resolution(params.width, params.height);
    let config = args.render_config();

    let (framebuffer, _stats) = if args.serial {
        render_serial(&camera, &scene, &config)
    } else {
        render(&camera, &scene, &config)
    }
    .context("Render failed")?;

    framebuffer
        .save_png(&args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["prism"]).unwrap();
        assert_eq!(args.params, None);
        assert_eq!(args.output, PathBuf::from("render.png"));
        assert_eq!(args.scene, 3);
        assert_eq!(args.depth, 1);

        let config = args.render_config();
        assert!(config.dither);
        assert_eq!(config.seed, 0);
        assert_eq!(config.reflection_depth, 1);
    }

    #[test]
    fn test_flags() {
        let args = Args::try_parse_from([
            "prism", "--scene", "1", "--depth", "-1", "--seed", "9", "--no-dither", "--serial",
        ])
        .unwrap();
        assert_eq!(args.scene, 1);
        assert!(args.serial);

        let config = args.render_config();
        assert!(!config.dither);
        assert_eq!(config.seed, 9);
        assert_eq!(config.reflection_depth, -1);
    }

    #[test]
    fn test_scene_out_of_range_rejected() {
        assert!(Args::try_parse_from(["prism", "--scene", "4"]).is_err());
        assert!(Args::try_parse_from(["prism", "--scene", "0"]).is_err());
    }

    #[test]
    fn test_explicit_missing_params_is_error() {
        let path = std::env::temp_dir().join("prism_cli_missing_params.txt");
        assert!(load_params(Some(&path)).is_err());
    }

    #[test]
    fn test_explicit_params_file() {
        let name = format!("prism_cli_params_{}.txt", std::process::id());
        let path = std::env::temp_dir().join(name);
        std::fs::write(&path, "width 64\nheight 48\n").unwrap();

        let params = load_params(Some(&path)).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(params, RenderParams::new(64, 48));
    }
}
