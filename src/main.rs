//! Cycle Arena headless driver
//!
//! Runs one session with a scripted human side and reports how it ended.
//!
//! Usage:
//!   cycle-arena --ticks 2000 --inputs "40:up,90:left" --json
//!   RUST_LOG=debug cycle-arena --seed 7

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use cycle_arena::Settings;
use cycle_arena::runner::{self, InputScript};
use cycle_arena::sim::{Game, cast_whiskers};

/// Settings picked up from the working directory when `--config` is not given
const DEFAULT_CONFIG: &str = "cycle-arena.json";

#[derive(Parser)]
#[command(name = "cycle-arena")]
#[command(about = "Run a light-cycle arena session without a renderer")]
struct Args {
    /// JSON settings file (default: ./cycle-arena.json if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for the AI's random turns
    #[arg(long)]
    seed: Option<u64>,

    /// Arena half-width
    #[arg(long)]
    bounds: Option<f32>,

    /// Maximum number of ticks to run
    #[arg(long)]
    ticks: Option<u64>,

    /// Player inputs as "tick:token,..." (tokens: up/down/left/right, pause, resume, restart)
    #[arg(long, default_value = "")]
    inputs: String,

    /// Log progress every N ticks (0 = never)
    #[arg(long)]
    log_every: Option<u64>,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,

    /// Print the AI whisker readings for the opening state and exit
    #[arg(long)]
    probe: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut settings = match &args.config {
        Some(path) => Settings::load(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None if Path::new(DEFAULT_CONFIG).exists() => Settings::load_or_default(DEFAULT_CONFIG),
        None => Settings::default(),
    };
    if let Some(seed) = args.seed {
        settings.seed = Some(seed);
    }
    if let Some(bounds) = args.bounds {
        settings.bounds = bounds;
    }
    if let Some(ticks) = args.ticks {
        settings.max_ticks = ticks;
    }
    if let Some(log_every) = args.log_every {
        settings.log_every = log_every;
    }

    let script: InputScript = args.inputs.parse().context("invalid --inputs")?;
    let mut game = Game::from_settings(&settings);

    if args.probe {
        let whiskers = cast_whiskers(game.state());
        println!(
            "AI at {} heading {}: forward={} left={} right={}",
            game.state().ai.position,
            game.state().ai.heading,
            whiskers.forward,
            whiskers.left,
            whiskers.right
        );
        return Ok(());
    }

    log::info!("Cycle Arena (headless) starting...");
    let summary = runner::run(&mut game, &script, settings.max_ticks, settings.log_every);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        let result = match summary.outcome {
            Some(outcome) => format!("{outcome:?}"),
            None => "still running".to_string(),
        };
        println!("Seed:    {:#x}", summary.seed);
        println!("Frames:  {} ({} ticks driven)", summary.frame_count, summary.ticks_run);
        println!("Result:  {result}");
        println!(
            "Player:  {} (trail {})",
            summary.player_position, summary.player_trail_len
        );
        println!("AI:      {} (trail {})", summary.ai_position, summary.ai_trail_len);
    }

    Ok(())
}
