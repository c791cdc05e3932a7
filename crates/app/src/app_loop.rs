//! Turn loop between a console and the engine.
//!
//! The loop owns no game rules: it maps keys to commands, runs the laser
//! target prompt, and hands every accepted command to `Game::play_turn`.
//! All terminal access goes through [`Console`] so sessions can be scripted.

use std::io;

use tactical_core::{
    Command, Direction, EngineFailureReason, Game, GameError, LaserReport, RunOutcome, SessionEnd,
};

use crate::ui_render::render_frame;

/// How a session ended from the front end's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCompletion {
    Outcome(RunOutcome),
    EngineFailure(EngineFailureReason),
    Quit,
}

impl From<SessionEnd> for AppCompletion {
    fn from(end: SessionEnd) -> Self {
        match end {
            SessionEnd::Outcome(outcome) => Self::Outcome(outcome),
            SessionEnd::EngineFailure(reason) => Self::EngineFailure(reason),
        }
    }
}

pub trait Console {
    /// Blocks for one keypress.
    fn read_key(&mut self) -> io::Result<char>;
    /// Reads one line of text; `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>>;
    fn show_frame(&mut self, frame: &str) -> io::Result<()>;
    fn show_message(&mut self, message: &str) -> io::Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Move(Direction),
    FireLaser,
    Quit,
    /// Any unbound key: the turn passes without a player action.
    Idle,
}

pub fn map_key(key: char) -> KeyAction {
    match key {
        'h' => KeyAction::Move(Direction::West),
        'j' => KeyAction::Move(Direction::South),
        'k' => KeyAction::Move(Direction::North),
        'l' => KeyAction::Move(Direction::East),
        'L' => KeyAction::FireLaser,
        'q' => KeyAction::Quit,
        _ => KeyAction::Idle,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetInput {
    Target(usize),
    Cancel,
    Retry(String),
}

/// Parses the laser prompt answer. Negative numbers cancel the shot.
pub fn parse_target(line: &str, enemies_count: usize) -> TargetInput {
    let text = line.trim();
    let Ok(value) = text.parse::<i64>() else {
        return TargetInput::Retry(format!("'{text}' is not a target number"));
    };
    if value < 0 {
        return TargetInput::Cancel;
    }
    match usize::try_from(value) {
        Ok(slot) if slot < enemies_count => TargetInput::Target(slot),
        _ => TargetInput::Retry(format!(
            "no enemy in slot {value}; choose 0-{}",
            enemies_count.saturating_sub(1)
        )),
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SessionOptions {
    pub show_hunt_paths: bool,
}

pub fn run_session(
    game: &mut Game,
    console: &mut impl Console,
    options: SessionOptions,
) -> io::Result<AppCompletion> {
    if let Some(end) = game.finished() {
        return Ok(end.into());
    }

    loop {
        console.show_frame(&render_frame(game, options.show_hunt_paths))?;

        let command = match map_key(console.read_key()?) {
            KeyAction::Quit => {
                tracing::info!(turn = game.current_turn(), "player quit");
                return Ok(AppCompletion::Quit);
            }
            KeyAction::Move(direction) => Command::Move(direction),
            KeyAction::Idle => Command::Wait,
            KeyAction::FireLaser => match prompt_target(game, console)? {
                Some(target) => Command::FireLaser { target },
                None => continue,
            },
        };

        match game.play_turn(command) {
            Ok(report) => {
                if let Some(laser) = report.laser {
                    console.show_message(&describe_laser(laser))?;
                }
                if let Some(end) = report.end {
                    console.show_frame(&render_frame(game, options.show_hunt_paths))?;
                    return Ok(end.into());
                }
            }
            Err(GameError::SessionOver(end)) => return Ok(end.into()),
            Err(err @ GameError::InvalidTarget { .. }) => {
                console.show_message(&err.to_string())?;
            }
        }
    }
}

/// `None` when the player cancels or input runs out.
fn prompt_target(game: &Game, console: &mut impl Console) -> io::Result<Option<usize>> {
    let enemies_count = game.state().enemies.len();
    loop {
        console.show_message(&format!(
            "Fire at enemy (0-{}), negative to cancel:",
            enemies_count.saturating_sub(1)
        ))?;
        let Some(line) = console.read_line()? else {
            return Ok(None);
        };
        match parse_target(&line, enemies_count) {
            TargetInput::Target(slot) => return Ok(Some(slot)),
            TargetInput::Cancel => return Ok(None),
            TargetInput::Retry(reason) => console.show_message(&reason)?,
        }
    }
}

fn describe_laser(report: LaserReport) -> String {
    match report {
        LaserReport::Obstacle { at } => format!("Laser hit an asteroid at ({}, {}).", at.x, at.y),
        LaserReport::Destroyed { slot, at, .. } => {
            format!("Enemy {slot} destroyed at ({}, {}).", at.x, at.y)
        }
        LaserReport::Missed => "Laser found nothing.".to_string(),
    }
}
