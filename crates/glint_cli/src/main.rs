use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use glint_renderer::{
    load_scene, render, scenes, Camera, ColorGrading, RenderConfig, Scene, ToneMap,
};

/// Render a scene of planes, spheres and point lights to an image.
#[derive(Parser, Debug)]
#[command(name = "glint", version)]
struct Args {
    /// JSON scene description. Renders the built-in Cornell box when omitted.
    #[arg(short, long)]
    scene: Option<PathBuf>,

    /// Output image, `.png` or PPM for any other extension
    #[arg(short, long, default_value = "output.ppm")]
    output: PathBuf,

    #[arg(long, default_value_t = 512)]
    width: u32,

    #[arg(long, default_value_t = 512)]
    height: u32,

    /// Override the scene's mirror bounce limit
    #[arg(long)]
    max_depth: Option<u32>,

    /// Override the display gamma (<= 0 disables gamma encoding)
    #[arg(long)]
    gamma: Option<f32>,

    /// Override the tone mapping curve
    #[arg(long, value_enum)]
    tone_map: Option<ToneMapArg>,

    /// Exposure for `--tone-map exposure`
    #[arg(long, default_value_t = 1.0)]
    exposure: f32,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ToneMapArg {
    None,
    Reinhard,
    Exposure,
}

impl ToneMapArg {
    fn to_tone_map(self, exposure: f32) -> ToneMap {
        match self {
            ToneMapArg::None => ToneMap::None,
            ToneMapArg::Reinhard => ToneMap::Reinhard,
            ToneMapArg::Exposure => ToneMap::Exposure { exposure },
        }
    }
}

fn load(args: &Args) -> Result<(Scene, Camera, ColorGrading)> {
    match &args.scene {
        Some(path) => {
            let description = load_scene(path)
                .with_context(|| format!("Failed to load scene {}", path.display()))?;
            let (scene, camera) = description
                .build()
                .with_context(|| format!("Invalid scene {}", path.display()))?;
            Ok((scene, camera, description.grading))
        }
        None => {
            log::info!("No scene given, rendering the built-in Cornell box");
            let (scene, camera) = scenes::cornell_box();
            Ok((scene, camera, ColorGrading::default()))
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse();

    let (mut scene, camera, mut grading) = load(&args)?;

    if let Some(max_depth) = args.max_depth {
        scene.settings_mut().max_depth = max_depth;
    }
    if let Some(gamma) = args.gamma {
        grading.gamma = gamma;
    }
    if let Some(tone_map) = args.tone_map {
        grading.tone_map = tone_map.to_tone_map(args.exposure);
    }

    let config = RenderConfig {
        width: args.width,
        height: args.height,
        ..RenderConfig::default()
    };

    let mut image = render(&camera, &scene, &config);
    grading.apply_to(&mut image);

    image
        .save(&args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    Ok(())
}
