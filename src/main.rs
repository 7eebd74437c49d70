use anyhow::{Context, Result};
use clap::Parser;
use simplelog::{Config as LogConfig, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;
use torus_snake::game::GameConfig;
use torus_snake::modes::HumanMode;
use torus_snake::score::HighScoreStore;

#[derive(Parser)]
#[command(name = "torus-snake")]
#[command(version, about = "Snake on a wrap-around grid, in your terminal")]
struct Cli {
    /// Side length of the square grid, in cells
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(i32).range(8..=64))]
    grid_size: i32,

    /// Milliseconds between simulation ticks
    #[arg(long, default_value_t = 150, value_parser = clap::value_parser!(u64).range(50..=1000))]
    tick_ms: u64,

    /// Where the high score is kept
    #[arg(long, default_value = ".torus_snake_score")]
    score_file: PathBuf,

    /// Write a debug log here (the terminal itself is busy drawing the game)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        let file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        WriteLogger::init(LevelFilter::Info, LogConfig::default(), file)
            .context("failed to initialize logger")?;
    }

    let config = GameConfig {
        grid_size: cli.grid_size,
        tick_ms: cli.tick_ms,
        ..GameConfig::default()
    };
    let store = HighScoreStore::open(cli.score_file);

    HumanMode::new(config, store).run().await
}
