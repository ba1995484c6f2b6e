#![warn(clippy::all)]

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use torus_life::{ExecutionMode, Grid, Pattern, Settings, Simulation};

/// Conway's Game of Life on a toroidal grid.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Window width in pixels
    #[arg(long, default_value_t = 1200)]
    width: u32,

    /// Window height in pixels
    #[arg(long, default_value_t = 800)]
    height: u32,

    /// Side of one cell in pixels
    #[arg(long, default_value_t = 10)]
    resolution: u32,

    /// Number of columns (derived from the window width if omitted)
    #[arg(long)]
    cols: Option<usize>,

    /// Number of rows (derived from the window height if omitted)
    #[arg(long)]
    rows: Option<usize>,

    /// Generations per second
    #[arg(long, default_value_t = 12.)]
    fps: f64,

    /// Seed of the random initial field
    #[arg(long)]
    seed: Option<u64>,

    /// Start from a pattern in RLE format instead of a random field
    #[arg(long)]
    pattern: Option<PathBuf>,

    /// Compute generations on all cores
    #[arg(long)]
    parallel: bool,
}

impl From<Cli> for Settings {
    fn from(cli: Cli) -> Self {
        Self {
            width: cli.width,
            height: cli.height,
            cell_resolution: cli.resolution,
            cols: cli.cols,
            rows: cli.rows,
            fps: cli.fps,
            seed: cli.seed,
            pattern: cli.pattern,
            mode: if cli.parallel {
                ExecutionMode::Parallel
            } else {
                ExecutionMode::Serial
            },
        }
    }
}

fn build_simulation(settings: &Settings) -> anyhow::Result<Simulation> {
    let (cols, rows) = settings.dimensions()?;
    let simulation = match &settings.pattern {
        Some(path) => {
            let data = std::fs::read(path)
                .with_context(|| format!("failed to read pattern {}", path.display()))?;
            let pattern = Pattern::parse_rle(&data)
                .with_context(|| format!("failed to parse pattern {}", path.display()))?;
            log::info!(
                "loaded {}x{} pattern from {}",
                pattern.width(),
                pattern.height(),
                path.display()
            );
            Simulation::from_grid(Grid::from_pattern(cols, rows, &pattern)?)
        }
        None => Simulation::initialize(cols, rows, settings.seed)?,
    };
    Ok(simulation.with_mode(settings.mode))
}

fn main() -> anyhow::Result<()> {
    use eframe::egui::{vec2, ViewportBuilder};

    env_logger::init();

    let settings = Settings::from(Cli::parse());
    settings.validate()?;
    let simulation = build_simulation(&settings)?;
    let (width, height) = settings.field_size_px()?;

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size(vec2(width, height))
            .with_resizable(false),
        ..Default::default()
    };
    let app = torus_life::App::new(&settings, simulation)?;
    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )
    .map_err(|err| anyhow::anyhow!("window closed with an error: {err}"))
}
