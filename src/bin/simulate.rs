use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use env_logger::Env;
use log::info;

use ml_mancala::ai::RandomAgent;
use ml_mancala::config::AppConfig;
use ml_mancala::game::Player;
use ml_mancala::training::{LogSink, Session, StatsAggregator};

#[derive(Clone, Copy, ValueEnum)]
enum FirstMover {
    One,
    Two,
}

impl From<FirstMover> for Player {
    fn from(value: FirstMover) -> Self {
        match value {
            FirstMover::One => Player::One,
            FirstMover::Two => Player::Two,
        }
    }
}

/// Play random agents against each other and log batch statistics.
#[derive(Parser)]
#[command(name = "simulate", about = "Run Mancala games between two random agents")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override number of games
    #[arg(long)]
    games: Option<u64>,

    /// Override games per statistics batch
    #[arg(long)]
    batch_size: Option<usize>,

    /// Seed the session and both agents
    #[arg(long)]
    seed: Option<u64>,

    /// Player that always moves first (random each game if unset)
    #[arg(long, value_enum)]
    first_mover: Option<FirstMover>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(games) = cli.games {
        app_config.session.games = games;
    }
    if let Some(batch_size) = cli.batch_size {
        app_config.stats.batch_size = batch_size;
    }
    if let Some(seed) = cli.seed {
        app_config.session.seed = Some(seed);
    }
    if let Some(first) = cli.first_mover {
        app_config.session.first_mover = Some(first.into());
    }
    app_config.validate().context("validating configuration")?;

    let (player_one, player_two) = match app_config.session.seed {
        Some(seed) => (
            RandomAgent::seeded(Player::One, seed.wrapping_add(1)),
            RandomAgent::seeded(Player::Two, seed.wrapping_add(2)),
        ),
        None => (RandomAgent::new(Player::One), RandomAgent::new(Player::Two)),
    };

    let stats = StatsAggregator::new(&app_config.stats).with_sink(LogSink);
    let mut session = Session::new(
        Box::new(player_one),
        Box::new(player_two),
        app_config.session.clone(),
    )
    .context("seating agents")?
    .with_stats(stats);

    let summary = session.run().context("running session")?;
    info!(
        "{} games: {} won {}, {} won {}, {} ties, {} forfeits",
        summary.games,
        Player::One,
        summary.wins[0],
        Player::Two,
        summary.wins[1],
        summary.ties,
        summary.forfeits
    );
    Ok(())
}
