pub mod app_loop;
pub mod config_file;
pub mod journal_export;
pub mod seed;
pub mod telemetry;
pub mod terminal_input;
pub mod ui_render;

use tactical_core::{EngineFailureReason, RunOutcome};

/// Format a seed as an exact decimal string with no prefix or suffix.
pub fn format_seed(seed: u64) -> String {
    seed.to_string()
}

/// Format a snapshot hash as `0x` followed by exactly 16 lowercase hex digits.
pub fn format_snapshot_hash(hash: u64) -> String {
    format!("0x{hash:016x}")
}

pub fn reason_code(outcome: &RunOutcome) -> &'static str {
    match outcome {
        RunOutcome::Victory => "WIN_ALL_ENEMIES_DESTROYED",
        RunOutcome::Defeat => "LOSS_PLAYER_DESTROYED",
    }
}

pub fn engine_failure_code(reason: &EngineFailureReason) -> &'static str {
    match reason {
        EngineFailureReason::LaserStruckPlayer => "ENG_LASER_STRUCK_PLAYER",
    }
}
