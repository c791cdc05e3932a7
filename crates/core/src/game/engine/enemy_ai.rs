//! Enemy behavior: idle wandering, spotting, and hunting along stored routes.

use super::*;
use crate::random::rand_range;

/// Idle wander choices: stay put or one orthogonal step.
const WANDER_STEPS: [Option<Direction>; 5] = [
    None,
    Some(Direction::West),
    Some(Direction::South),
    Some(Direction::North),
    Some(Direction::East),
];

impl Game {
    pub(super) fn run_enemy_phase(&mut self) {
        for slot in 0..self.state.enemies.len() {
            self.enemy_turn(slot);
        }
    }

    fn enemy_turn(&mut self, slot: usize) {
        let Some(enemy) = self.state.enemies.get(slot) else {
            return;
        };
        let (id, pos, hunting) = (enemy.id, enemy.pos, enemy.is_hunting());

        if enemy_sees_player(&self.state, slot) {
            self.open_fire(slot, id, pos, hunting);
        } else if hunting {
            self.follow_hunt_path(slot, id);
        } else {
            self.wander(slot, id, pos);
        }
    }

    /// A ship with a clear line to the player fires and never misses. The
    /// route is (re)built from where the shooter stands now.
    fn open_fire(&mut self, slot: usize, id: EnemyId, pos: Pos, was_hunting: bool) {
        let path = build_hunt_path(&self.state.grid, pos, self.state.player.pos);
        let path_len = path.len();
        if let Some(enemy) = self.state.enemies.get_mut(slot) {
            enemy.behavior = Behavior::Hunting { path };
        }
        if !was_hunting {
            self.log.push(LogEvent::EnemySpotted { enemy: id, path_len });
        }
        self.state.player.register_hit();
        self.log.push(LogEvent::PlayerHit { enemy: id });
        tracing::debug!(slot, path_len, "enemy fired on the player");
    }

    fn follow_hunt_path(&mut self, slot: usize, id: EnemyId) {
        let next = self.state.enemies.get_mut(slot).and_then(|enemy| match &mut enemy.behavior {
            Behavior::Hunting { path } => path.advance(),
            Behavior::Idle => None,
        });
        let next = next.map(|idx| self.state.grid.pos_of(idx));

        match next {
            Some(to) if self.state.classify(to) == MoveClass::Clear => {
                self.move_enemy(slot, id, to);
                let arrived = self
                    .state
                    .enemies
                    .get(slot)
                    .and_then(|enemy| enemy.hunt_path())
                    .is_some_and(|path| path.remaining().is_empty());
                if arrived {
                    self.lose_track(slot, id);
                }
            }
            // Route exhausted or the next cell is taken.
            _ => self.lose_track(slot, id),
        }
    }

    fn lose_track(&mut self, slot: usize, id: EnemyId) {
        if let Some(enemy) = self.state.enemies.get_mut(slot) {
            enemy.behavior = Behavior::Idle;
        }
        self.log.push(LogEvent::EnemyLostTrack { enemy: id });
        tracing::debug!(slot, "enemy lost track of the player");
    }

    fn wander(&mut self, slot: usize, id: EnemyId, pos: Pos) {
        let choice = WANDER_STEPS[rand_range(&mut self.rng, 0, WANDER_STEPS.len())];
        let Some(direction) = choice else {
            return;
        };
        let to = pos.step(direction);
        if self.state.classify(to) == MoveClass::Clear {
            self.move_enemy(slot, id, to);
        }
    }

    fn move_enemy(&mut self, slot: usize, id: EnemyId, to: Pos) {
        if let Some(enemy) = self.state.enemies.get_mut(slot) {
            enemy.pos = to;
            self.log.push(LogEvent::EnemyMoved { enemy: id, to });
        }
    }
}
