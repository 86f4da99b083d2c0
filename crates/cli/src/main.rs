//! Command-line driver for room-decoration episodes.
//!
//! Run with: `decor <command>`

mod commands;
mod content;
mod dirs;
mod logging;

use anyhow::Result;
use clap::Parser;
use commands::{Info, Run};

/// Room decoration placement engine
#[derive(Parser)]
#[command(name = "decor")]
#[command(about = "Run and inspect room-decoration episodes", long_about = None)]
#[command(version)]
struct Cli {
    /// Also write logs to a file (directory from DECOR_LOG_DIR or the platform cache)
    #[arg(long, global = true)]
    log_file: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Run heuristic episodes and print JSON summaries
    Run(Run),

    /// Print action branches and observation size for a room
    Info(Info),
}

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let _guard = logging::setup(cli.log_file)?;

    match cli.command {
        Command::Run(cmd) => cmd.execute(),
        Command::Info(cmd) => cmd.execute(),
    }
}
