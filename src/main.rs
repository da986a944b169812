//! Dino Park - Entry Point
//!
//! Builds the demo park and runs it headless. The player idles; in sandbox
//! mode it leaves after `--idle-turns` turns, in challenge mode the turn
//! budget ends the game.

use clap::{Parser, ValueEnum};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use dino_park::core::config::SimulationConfig;
use dino_park::core::error::Result;
use dino_park::simulation::{GameMode, IdlePlayer, NullDisplay, RunSummary, Simulation, StdoutDisplay};
use dino_park::world::demo::demo_park;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Turn-based dinosaur park simulation
#[derive(Parser, Debug)]
#[command(name = "dino-park")]
#[command(about = "Run the dinosaur park headless and report how it went")]
struct Args {
    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Challenge mode turn budget (needs --target-points)
    #[arg(long, requires = "target_points")]
    turns: Option<u64>,

    /// Challenge mode eco-point target (needs --turns)
    #[arg(long, requires = "turns")]
    target_points: Option<u64>,

    /// Turns the idle player stays in sandbox mode
    #[arg(long, default_value_t = 100)]
    idle_turns: u64,

    /// TOML file overriding simulation constants
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format for the final summary
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Suppress map frames and narration
    #[arg(long, short = 'q')]
    quiet: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("dino_park=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig::default(),
    };
    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, "Dino Park starting...");

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let world = demo_park(config, &mut rng)?;

    let mode = match (args.turns, args.target_points) {
        (Some(max_turns), Some(target_points)) => GameMode::Challenge {
            max_turns,
            target_points,
        },
        _ => GameMode::Sandbox,
    };
    let controller = match mode {
        GameMode::Sandbox => IdlePlayer::new(Some(args.idle_turns)),
        GameMode::Challenge { .. } => IdlePlayer::new(None),
    };

    let summary = if args.quiet {
        Simulation::new(world, rng, controller, NullDisplay, mode).run()?
    } else {
        Simulation::new(world, rng, controller, StdoutDisplay, mode).run()?
    };

    report(&summary, seed, args.format)
}

fn report(summary: &RunSummary, seed: u64, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let mut value = serde_json::to_value(summary)?;
            if let Some(object) = value.as_object_mut() {
                object.insert("seed".into(), seed.into());
            }
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Text => {
            println!();
            println!("=== DINO PARK ===");
            println!("Seed:       {seed}");
            println!("Ending:     {:?}", summary.ending);
            println!("Turns:      {}", summary.turns);
            println!("Eco points: {}", summary.eco_points);
            println!("Population:");
            for (species, count) in &summary.population {
                println!("  {species:<12} {count}");
            }
        }
    }
    Ok(())
}
