use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tactical::app_loop::{SessionOptions, run_session};
use tactical::config_file::{default_config_path, resolve_config};
use tactical::journal_export::write_journal_atomic;
use tactical::seed::{SeedChoice, retry_seed};
use tactical::telemetry::init_file_logging;
use tactical::terminal_input::TerminalConsole;
use tactical::ui_render::completion_lines;
use tactical::format_seed;
use tactical_core::{Game, GameConfig, PlacementError};

/// Placement retries with derived seeds before giving up.
const PLACEMENT_ATTEMPTS: u32 = 3;

#[derive(Parser, Debug)]
#[command(about = "Turn-based asteroid-field dogfight in the terminal")]
struct Args {
    /// Session seed; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// TOML config file; defaults to config.toml in the user config directory.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write tracing output to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Save the input journal here when the session ends.
    #[arg(long)]
    record: Option<PathBuf>,

    /// Draw every hunting enemy's route on the map.
    #[arg(long)]
    show_hunt_paths: bool,
}

fn place_session(seed: u64, config: &GameConfig) -> Result<Game, PlacementError> {
    let mut last_error = match Game::new(seed, config) {
        Ok(game) => return Ok(game),
        Err(err) => err,
    };
    for attempt in 1..PLACEMENT_ATTEMPTS {
        let retry = retry_seed(seed, attempt);
        tracing::warn!(seed, retry, attempt, error = %last_error, "placement failed; retrying");
        match Game::new(retry, config) {
            Ok(game) => return Ok(game),
            Err(err) => last_error = err,
        }
    }
    Err(last_error)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        init_file_logging(path)?;
    }

    let (config, source) = resolve_config(args.config.as_deref(), default_config_path())?;
    let seed = SeedChoice::resolve(args.seed);
    tracing::info!(?source, ?seed, "starting session");

    let mut game = place_session(seed.value(), &config).with_context(|| {
        format!("could not place a session from seed {}", format_seed(seed.value()))
    })?;

    let mut console = TerminalConsole::new();
    let options = SessionOptions { show_hunt_paths: args.show_hunt_paths };
    let completion = run_session(&mut game, &mut console, options).context("terminal I/O failed")?;

    for line in completion_lines(&game, completion) {
        println!("{line}");
    }

    if let Some(path) = &args.record {
        write_journal_atomic(game.journal(), path)
            .with_context(|| format!("failed to write journal {}", path.display()))?;
        println!("Journal saved to {}", path.display());
    }

    Ok(())
}
