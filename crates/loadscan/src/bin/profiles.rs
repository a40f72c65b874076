use anyhow::Result;
use clap::Parser;
use log::{info, warn};
use std::path::PathBuf;

use loadscan::{Config, SimulationRun};

#[derive(Parser)]
#[command(author, version, about = "List the load profile and ray lengths of every scan line", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml")]
    config: PathBuf,

    /// Override the surface seed
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = if args.config.exists() {
        Config::load_from_file(&args.config)?
    } else {
        warn!(
            "Config file not found: {}, using default settings",
            args.config.display()
        );
        Config::default()
    };
    if let Some(seed) = args.seed {
        config.surface.seed = seed;
    }

    let run = SimulationRun::execute(&config)?;
    let cols = run.grid.n_targets();

    for profile in &run.profiles {
        println!("scan line {} (y = {:.1} mm)", profile.line, profile.y);
        if let (Some(peak), Some(trough)) = (profile.peak(), profile.trough()) {
            info!(
                "  peak {:.1} mm at x={:.1}, trough {:.1} mm at x={:.1}, mean {:.1} mm",
                peak.y,
                peak.x,
                trough.y,
                trough.x,
                profile.mean_height()
            );
        }

        let rays = &run.surface_rays[profile.line * cols..(profile.line + 1) * cols];
        for (sample, ray) in profile.samples.iter().zip(rays) {
            println!(
                "  x={:>8.1}  z={:>7.1}  range={:>8.1}",
                sample.x,
                sample.y,
                ray.length()
            );
        }
    }

    Ok(())
}
