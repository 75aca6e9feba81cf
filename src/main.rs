use std::{num::NonZeroUsize, path::PathBuf, thread};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::{info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use grid_raycaster::{bench, codec, lights_file, render, Strategy};

#[derive(Parser)]
#[command(version, about = "Light a raster scene with occlusion-aware point lights")]
struct Cli {
    /// More log output, repeat for more detail
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a scene and write the lit image
    Render {
        #[arg(long)]
        scene: PathBuf,
        /// Light file, `.json` or line commands
        #[arg(long)]
        lights: PathBuf,
        #[arg(long, short)]
        output: PathBuf,
        #[arg(long, value_enum, default_value_t = Mode::Rows)]
        mode: Mode,
        /// Upper bound on worker threads, defaults to the CPU count
        #[arg(long)]
        threads: Option<usize>,
    },
    /// Time repeated renders of a scene under a regular grid of lights
    Bench {
        #[arg(long)]
        scene: PathBuf,
        #[arg(long, default_value_t = 8)]
        lights_count: usize,
        #[arg(long, default_value_t = 42.0)]
        strength: f64,
        #[arg(long, default_value_t = 10)]
        iterations: u32,
        #[arg(long, value_enum, default_value_t = Mode::Lights)]
        mode: Mode,
        #[arg(long)]
        threads: Option<usize>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    Sequential,
    Lights,
    Rows,
}

impl From<Mode> for Strategy {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Sequential => Strategy::Sequential,
            Mode::Lights => Strategy::ByLight,
            Mode::Rows => Strategy::ByRow,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto)?;

    match cli.command {
        Command::Render { scene, lights, output, mode, threads } => {
            let image = codec::decode(&scene).with_context(|| format!("cannot read scene {}", scene.display()))?;
            let lights = lights_file::load(&lights).with_context(|| format!("cannot read lights {}", lights.display()))?;
            info!("scene {}x{}, {} lights", image.width, image.height, lights.len());

            let lit = render(&image, &lights, mode.into(), threads.unwrap_or_else(default_threads))?;
            codec::encode(&output, &lit).with_context(|| format!("cannot write {}", output.display()))?;
            info!("wrote {}", output.display());
        }
        Command::Bench { scene, lights_count, strength, iterations, mode, threads } => {
            let image = codec::decode(&scene).with_context(|| format!("cannot read scene {}", scene.display()))?;
            let lights = bench::grid_lights(image.width, image.height, lights_count, strength);
            let strategy = Strategy::from(mode);
            let mean = bench::time_render(&image, &lights, strategy, threads.unwrap_or_else(default_threads), iterations)?;
            println!(
                "{} on {} with {} lights, {} iterations: {:.6} s average",
                strategy,
                scene.display(),
                lights.len(),
                iterations,
                mean.as_secs_f64()
            );
        }
    }
    Ok(())
}

fn default_threads() -> usize {
    thread::available_parallelism().map(NonZeroUsize::get).unwrap_or(1)
}
