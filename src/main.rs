//! dama - terminal checkers.

#![warn(missing_docs)]

mod cli;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::{Cli, Command};
use dama::{
    BOARD_STYLES, BoardStyle, SettingsStore, TEAM_STYLES, TeamStyle, board_style_ids, run_tui,
    team_style_ids,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let command = cli.command.clone().unwrap_or(Command::Play);

    // The board owns the terminal, so its logs go to a file.
    match command {
        Command::Play => init_file_tracing(&cli.log_file)?,
        _ => init_stderr_tracing(),
    }

    let store = SettingsStore::load(&cli.settings)
        .with_context(|| format!("Could not open settings at {}", cli.settings.display()))?;

    match command {
        Command::Play => run_tui(store).await,
        Command::Settings {
            json,
            dark_mode,
            piece_style,
            board_style,
        } => run_settings(store, json, dark_mode, piece_style, board_style).await,
        Command::Styles => {
            print_styles();
            Ok(())
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

fn init_file_tracing(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Could not create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn init_stderr_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Applies any requested changes, saves, and prints the result.
#[instrument(skip(store))]
async fn run_settings(
    store: SettingsStore,
    json: bool,
    dark_mode: Option<bool>,
    piece_style: Option<String>,
    board_style: Option<String>,
) -> Result<()> {
    if let Some(id) = &piece_style
        && TeamStyle::find(id).is_none()
    {
        bail!("Unknown piece style '{}'. Available: {}", id, team_style_ids());
    }
    if let Some(id) = &board_style
        && BoardStyle::find(id).is_none()
    {
        bail!("Unknown board style '{}'. Available: {}", id, board_style_ids());
    }

    if let Some(enabled) = dark_mode {
        store.set_dark_mode(enabled);
    }
    if let Some(id) = piece_style {
        store.set_piece_style(id);
    }
    if let Some(id) = board_style {
        store.set_board_style(id);
    }
    store.flush().await.context("Could not save settings")?;

    let settings = store.current();
    info!(?settings, "Current settings");
    if json {
        println!("{}", serde_json::to_string_pretty(&settings)?);
    } else {
        print!("{}", toml::to_string_pretty(&settings)?);
    }
    Ok(())
}

fn print_styles() {
    println!("Piece styles:");
    for style in TEAM_STYLES {
        println!("  {:<10} {}", style.id, style.nation_name);
    }
    println!();
    println!("Board styles:");
    for style in BOARD_STYLES {
        println!("  {:<10} {}", style.id, style.name);
    }
}
