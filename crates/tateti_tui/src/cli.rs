//! Command-line interface for the tateti terminal front-end.

use clap::Parser;
use std::path::PathBuf;

/// tateti - tic-tac-toe for two players sharing one keyboard
#[derive(Parser, Debug)]
#[command(name = "tateti")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./tateti.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log file path, overriding the config file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
