//! One full turn: player action, enemy phase, fog rebuild, end checks.

use super::*;

impl Game {
    /// Runs one turn for `command`. A rejected command leaves the session
    /// untouched and does not count as a turn.
    pub fn play_turn(&mut self, command: Command) -> Result<TurnReport, GameError> {
        if let Some(end) = self.finished {
            return Err(GameError::SessionOver(end));
        }
        if let Command::FireLaser { target } = command {
            let enemies_count = self.state.enemies.len();
            if target >= enemies_count {
                return Err(GameError::InvalidTarget { target, enemies_count });
            }
        }

        self.journal.append(self.turn, command);
        self.turn += 1;
        tracing::debug!(turn = self.turn, ?command, "turn started");

        let laser = match self.resolve_player_action(command) {
            Ok(laser) => laser,
            Err(reason) => {
                let end = SessionEnd::EngineFailure(reason);
                tracing::error!(turn = self.turn, ?reason, "engine consistency failure");
                self.finish(end);
                return Ok(TurnReport { turn: self.turn, laser: None, end: Some(end) });
            }
        };

        if self.state.player.is_alive() {
            self.run_enemy_phase();
        }

        render_fog(&mut self.state);

        let end = self.end_of_turn_outcome();
        if let Some(end) = end {
            self.finish(end);
        }
        Ok(TurnReport { turn: self.turn, laser, end })
    }

    fn end_of_turn_outcome(&self) -> Option<SessionEnd> {
        if self.state.enemies.is_empty() {
            return Some(SessionEnd::Outcome(RunOutcome::Victory));
        }
        if !self.state.player.is_alive() {
            return Some(SessionEnd::Outcome(RunOutcome::Defeat));
        }
        None
    }

    fn finish(&mut self, end: SessionEnd) {
        self.finished = Some(end);
        self.log.push(LogEvent::SessionEnded(end));
        tracing::info!(turn = self.turn, ?end, "session ended");
    }
}
