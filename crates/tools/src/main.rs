use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use game_core::{InputJournal, ReplayResult, SessionEnd, replay::replay_to_end};

#[derive(Parser)]
#[command(author, version, about = "Re-simulate a recorded session journal", long_about = None)]
struct Args {
    /// Path to the journal JSON file to replay
    #[arg(short, long)]
    journal: PathBuf,
}

fn main() -> Result<()> {
    tactical_tools::init_tracing();
    let args = Args::parse();

    let journal_data = fs::read_to_string(&args.journal)
        .with_context(|| format!("Failed to read journal file: {}", args.journal.display()))?;
    let journal = InputJournal::from_json_str(&journal_data)
        .with_context(|| "Failed to deserialize journal JSON")?;
    tracing::info!(seed = journal.seed, inputs = journal.inputs.len(), "replaying journal");

    let result: ReplayResult =
        replay_to_end(&journal).context("Replay failed during execution")?;

    println!("Replay complete.");
    println!("Final Turn: {}", result.final_turn);
    match result.end {
        Some(SessionEnd::Outcome(outcome)) => println!("Outcome: {outcome:?}"),
        Some(SessionEnd::EngineFailure(reason)) => println!("Engine failure: {reason:?}"),
        None => println!("Outcome: unfinished"),
    }
    println!("Snapshot Hash: 0x{:016x}", result.final_snapshot_hash);

    Ok(())
}
