//! Cyber Escape Room
//!
//! REPL binary: parse options, set up logging, run the game loop.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use escaperoom::{GameEngine, DEFAULT_START_ROOM, VERSION};

/// Cyber Escape Room - a command-driven puzzle game.
#[derive(Debug, Parser)]
#[command(name = "escape-room", version)]
struct Cli {
    /// Starting room
    #[arg(long, default_value = DEFAULT_START_ROOM)]
    start: String,

    /// Transcript file
    #[arg(long, default_value = "run.txt")]
    transcript: PathBuf,

    /// Artifact directory
    #[arg(long, default_value = "artifacts")]
    data: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Player-facing output goes to stdout; tracing covers lifecycle only.
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    info!("Cyber Escape Room v{}", VERSION);
    info!(
        start = %cli.start,
        data = %cli.data.display(),
        transcript = %cli.transcript.display(),
        "session configured"
    );

    let mut engine = GameEngine::new(&cli.start, &cli.transcript, &cli.data)
        .context("engine startup failed")?;
    engine.run();

    Ok(())
}
