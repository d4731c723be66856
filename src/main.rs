use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use riw_instance::scene::{self, Scene};
use riw_instance::RenderConfig;

#[derive(Debug, Default, Clone, Copy, ValueEnum)]
pub enum AvailableScene {
    #[default]
    Cornell,
    OffsetSpheres,
}

impl AvailableScene {
    fn build(self, config: &RenderConfig) -> Scene {
        match self {
            AvailableScene::Cornell => scene::cornell(config),
            AvailableScene::OffsetSpheres => scene::offset_spheres(config),
        }
    }
}

fn parse_aspect(s: &str) -> anyhow::Result<f64> {
    let ratio = match s.split_once(':') {
        Some((w, h)) => w.trim().parse::<f64>()? / h.trim().parse::<f64>()?,
        None => s.trim().parse::<f64>()?,
    };
    if !(ratio.is_finite() && ratio > 0.0) {
        return Err(anyhow::anyhow!("aspect ratio must be positive, got {s}"));
    }
    Ok(ratio)
}

#[derive(Parser, Debug)]
pub struct Args {
    #[arg(long, value_enum, default_value_t)]
    /// Scene selector
    scene: AvailableScene,

    #[arg(short, long, default_value_t = 400)]
    /// Image width in pixels
    width: usize,

    #[arg(long, default_value = "1:1", value_parser = parse_aspect)]
    /// Aspect ratio as `w:h` or a single number; the cornell box is always square
    aspect: f64,

    #[arg(long = "spp", default_value_t = 100)]
    /// Samples per pixel
    samples_per_pixel: usize,

    #[arg(long, default_value_t = 50)]
    /// Maximum bounces per path
    depth: usize,

    #[arg(short, long)]
    /// PPM file to write; stdout if omitted
    output: Option<PathBuf>,

    #[arg(long)]
    /// Worker threads; rayon picks if omitted
    threads: Option<usize>,
}

impl Args {
    fn config(&self) -> RenderConfig {
        RenderConfig {
            image_width: self.width,
            aspect_ratio: self.aspect,
            samples_per_pixel: self.samples_per_pixel,
            max_depth: self.depth,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if let Some(threads) = args.threads {
        log::info!("Working on {threads} threads");
        rayon::ThreadPoolBuilder::new().num_threads(threads).build_global()?;
    }

    let config = args.config();
    log::info!("Scene {:?} with {:?}", args.scene, config);
    let image = args.scene.build(&config).render();

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    image.write_ppm(&mut out)?;
    log::info!("Done");
    Ok(())
}
