//! # SUGARFOX Hero
//!
//! ```text
//! sugarfox [--config PATH] [--theme dark|light] [--seed N] [run]
//! sugarfox simulate [--frames N] [--scroll S] [--sweep] [--fps F]
//! ```
//!
//! Log level comes from `RUST_LOG` (default `info`).

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use sugarfox::{simulate, AppResult, HeroConfig, SimulateOptions};
use sugarfox_rendering::SurfaceSize;
use sugarfox_shared::Theme;

#[derive(Parser)]
#[command(name = "sugarfox")]
#[command(about = "Sugarfox Studios hero background")]
struct Cli {
    /// Config file (defaults to ./sugarfox.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Theme at startup
    #[arg(long, global = true)]
    theme: Option<Theme>,

    /// Particle seed
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open a window and run the hero (default)
    Run,

    /// Run the hero headless and print a report
    Simulate {
        /// Frames to simulate
        #[arg(short, long, default_value = "600")]
        frames: u64,

        /// Scroll progress in [0, 1]
        #[arg(short, long, default_value = "0.0")]
        scroll: f32,

        /// Ramp scroll from 0 up to --scroll over the run
        #[arg(long)]
        sweep: bool,

        /// Pointer x in [-1, 1]
        #[arg(long, default_value = "0.0", allow_hyphen_values = true)]
        pointer_x: f32,

        /// Pointer y in [-1, 1]
        #[arg(long, default_value = "0.0", allow_hyphen_values = true)]
        pointer_y: f32,

        /// Simulated refresh rate
        #[arg(long, default_value = "60")]
        fps: f32,
    },
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> AppResult<()> {
    let config = HeroConfig::resolve(cli.config.as_deref())?.with_overrides(cli.theme, cli.seed);

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => sugarfox::app::run(config),
        Commands::Simulate {
            frames,
            scroll,
            sweep,
            pointer_x,
            pointer_y,
            fps,
        } => {
            let options = SimulateOptions {
                frames,
                scroll,
                sweep,
                pointer: [pointer_x.clamp(-1.0, 1.0), pointer_y.clamp(-1.0, 1.0)],
                fps,
                surface: SurfaceSize::new(config.window.width, config.window.height),
            };
            let report = simulate(&config.scene, &options)?;

            println!("frames        {}", report.frames);
            println!("time          {:.2}s", report.final_time);
            println!(
                "camera        r={:.2} theta={:.3} phi={:.3}",
                report.camera_radius, report.theta, report.phi
            );
            println!(
                "particles     max extent {:.3} (limit {:.3})",
                report.max_particle_extent, report.particle_limit
            );
            println!("reflections   {}", report.reflections);

            if report.particles_contained() {
                info!("particles stayed inside their box");
            } else {
                error!("particles escaped their box");
            }
            Ok(())
        }
    }
}
