use anyhow::Result;
use clap::Parser;
use log::{info, warn};
use std::path::PathBuf;

use loadscan::{Config, SimulationRun, WallSide};

#[derive(Parser)]
#[command(author, version, about = "Simulate a range scanner over a loaded container", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short = 'c', long = "config", default_value = "config/default.toml")]
    config: PathBuf,

    /// Override the surface seed
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Print the whole run as JSON on stdout
    #[arg(long = "json")]
    json: bool,
}

fn main() -> Result<()> {
    // RUST_LOG wins when set, otherwise INFO
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
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

    if args.json {
        println!("{}", run.to_json()?);
        return Ok(());
    }

    let (rows, cols) = run.grid.shape();
    info!("Grid: {rows} scan lines x {cols} targets");
    info!(
        "Spacing: dx={:.1} mm, dy={:.1} mm",
        run.grid.dx(),
        run.grid.dy()
    );
    info!(
        "Load height: min={:.1} mm, max={:.1} mm",
        run.load.min(),
        run.load.max()
    );
    info!(
        "Emitter: ({:.0}, {:.0}, {:.0}) mm",
        run.emitter.position.x, run.emitter.position.y, run.emitter.position.z
    );
    info!(
        "Rays: {} floor hits, {} surface hits",
        run.floor_rays.len(),
        run.surface_rays.len()
    );
    for side in WallSide::ALL {
        info!("Wall {:?}: {} polygons", side, run.walls.side(side).len());
    }

    println!("Volume ~ {:.1} m3", run.volume_m3);
    Ok(())
}
