//! Text frames for the terminal front end.

use tactical_core::game::overlay_hunt_paths;
use tactical_core::{Game, Grid, RunOutcome};

use crate::app_loop::AppCompletion;
use crate::{engine_failure_code, format_seed, format_snapshot_hash, reason_code};

/// Counts and health, a rule, the grid rows, and a closing rule.
pub fn render_frame(game: &Game, show_hunt_paths: bool) -> String {
    let state = game.state();
    let overlay;
    let grid = if show_hunt_paths {
        overlay = overlay_hunt_paths(state);
        &overlay
    } else {
        &state.grid
    };

    let mut frame = String::new();
    frame.push_str(&format!("Asteroids: {}\n", state.asteroids.len()));
    frame.push_str(&format!("Enemies: {}\n", state.enemies.len()));
    frame.push_str(&format!("Health: {}\n", state.player.health));
    push_grid(&mut frame, grid);
    frame
}

fn push_grid(frame: &mut String, grid: &Grid) {
    let rule = "-".repeat(grid.width());
    frame.push_str(&rule);
    frame.push('\n');
    for row in grid.cells().chunks(grid.width()) {
        frame.extend(row.iter().map(|cell| cell.glyph()));
        frame.push('\n');
    }
    frame.push_str(&rule);
    frame.push('\n');
}

pub fn completion_lines(game: &Game, completion: AppCompletion) -> Vec<String> {
    let headline = match completion {
        AppCompletion::Outcome(outcome) => {
            let verdict = match outcome {
                RunOutcome::Victory => "All enemies destroyed. You win!",
                RunOutcome::Defeat => "Your ship was destroyed.",
            };
            format!("{verdict} [{}]", reason_code(&outcome))
        }
        AppCompletion::EngineFailure(reason) => {
            format!("Session aborted by an internal error [{}]", engine_failure_code(&reason))
        }
        AppCompletion::Quit => "Session abandoned.".to_string(),
    };
    vec![
        headline,
        format!("Seed: {}", format_seed(game.seed())),
        format!("Turns: {}", game.current_turn()),
        format!("Snapshot: {}", format_snapshot_hash(game.snapshot_hash())),
    ]
}
