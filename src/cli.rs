//! Command-line interface for dama.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// dama - play checkers in the terminal
#[derive(Parser, Debug)]
#[command(name = "dama")]
#[command(about = "Checkers board with a per-turn clock", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Settings file (created on first change)
    #[arg(long, default_value = "dama_settings.toml")]
    pub settings: PathBuf,

    /// Log file used while the board is on screen
    #[arg(long, default_value = "dama.log")]
    pub log_file: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open the board
    Play,

    /// Show or change saved settings
    Settings {
        /// Print as JSON instead of TOML
        #[arg(long)]
        json: bool,

        /// Turn dark mode on or off
        #[arg(long)]
        dark_mode: Option<bool>,

        /// Piece style id (see `dama styles`)
        #[arg(long)]
        piece_style: Option<String>,

        /// Board style id (see `dama styles`)
        #[arg(long)]
        board_style: Option<String>,
    },

    /// List available piece and board styles
    Styles,
}
