//! Player movement and laser fire.

use super::*;

impl Game {
    pub(super) fn resolve_player_action(
        &mut self,
        command: Command,
    ) -> Result<Option<LaserReport>, EngineFailureReason> {
        match command {
            Command::Move(direction) => {
                self.move_player(direction);
                Ok(None)
            }
            Command::FireLaser { target } => self.fire_laser(target).map(Some),
            Command::Wait => Ok(None),
        }
    }

    fn move_player(&mut self, direction: Direction) {
        let to = self.state.player.pos.step(direction);
        match self.state.classify(to) {
            MoveClass::Blocked => {
                self.log.push(LogEvent::PlayerBlocked { at: to });
            }
            MoveClass::Occupied => {
                // Ramming another ship is fatal; the player stays put.
                self.state.player.register_hit();
                self.log.push(LogEvent::PlayerRammed { at: to });
                tracing::debug!(x = to.x, y = to.y, "player rammed a ship");
            }
            MoveClass::Clear => {
                self.state.player.pos = to;
                self.log.push(LogEvent::PlayerMoved { to });
            }
        }
    }

    /// Fires from the player toward the enemy in `target`. Whatever the ray
    /// meets first takes the hit, which may be a different enemy.
    fn fire_laser(&mut self, target: usize) -> Result<LaserReport, EngineFailureReason> {
        let Some(aim) = self.state.enemies.get(target).map(|enemy| enemy.pos) else {
            return Ok(LaserReport::Missed);
        };
        let origin = self.state.player.pos;
        let hit = scan(origin, aim, |pos| visibility::probe(&self.state, pos));

        let report = match hit {
            Some(RayHit::Obstacle { at }) => LaserReport::Obstacle { at },
            Some(RayHit::Enemy { slot, at }) => {
                let Some(destroyed) = self.state.enemies.swap_remove(slot) else {
                    return Ok(LaserReport::Missed);
                };
                tracing::debug!(slot, x = at.x, y = at.y, "enemy destroyed");
                LaserReport::Destroyed { enemy: destroyed.id, slot, at }
            }
            Some(RayHit::Player { .. }) => return Err(EngineFailureReason::LaserStruckPlayer),
            None => LaserReport::Missed,
        };
        self.log.push(LogEvent::LaserFired { target, report });
        Ok(report)
    }
}
