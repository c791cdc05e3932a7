use std::hash::Hasher;

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;
use xxhash_rust::xxh3::Xxh3;

use crate::config::GameConfig;
use crate::journal::InputJournal;
use crate::placement::{self, Layout, PlacementError};
use crate::scan::scan;
use crate::state::{Behavior, EnemyRoster, GameState, Grid, Player};
use crate::types::*;

mod engine;
mod pursuit;
mod visibility;

#[cfg(test)]
mod test_support;

pub use pursuit::build_hunt_path;
pub use visibility::{enemy_sees_player, overlay_hunt_paths, render_fog};

pub struct Game {
    seed: u64,
    turn: u64,
    rng: ChaCha8Rng,
    config: GameConfig,
    state: GameState,
    log: Vec<LogEvent>,
    journal: InputJournal,
    finished: Option<SessionEnd>,
}

impl Game {
    /// Places a fresh session from `seed`. Placement failures are returned so
    /// the caller can retry with another seed or a roomier config.
    pub fn new(seed: u64, config: &GameConfig) -> Result<Self, PlacementError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let layout = placement::generate_layout(config, &mut rng)?;
        Self::assemble(seed, rng, config, layout)
    }

    /// Builds a session from explicit positions instead of random placement.
    pub fn from_layout(
        seed: u64,
        config: &GameConfig,
        layout: Layout,
    ) -> Result<Self, PlacementError> {
        placement::validate_layout(config, &layout)?;
        Self::assemble(seed, ChaCha8Rng::seed_from_u64(seed), config, layout)
    }

    fn assemble(
        seed: u64,
        rng: ChaCha8Rng,
        config: &GameConfig,
        layout: Layout,
    ) -> Result<Self, PlacementError> {
        let mut enemies = EnemyRoster::new(config.enemy_capacity());
        for pos in &layout.enemies {
            enemies.push(*pos)?;
        }
        let mut state = GameState {
            grid: Grid::new(config.map_width, config.map_height),
            asteroids: layout.asteroids,
            enemies,
            player: Player::new(layout.player),
        };
        render_fog(&mut state);

        tracing::info!(
            seed,
            asteroids = state.asteroids.len(),
            enemies = state.enemies.len(),
            player_x = state.player.pos.x,
            player_y = state.player.pos.y,
            "session placed"
        );

        Ok(Self {
            seed,
            turn: 0,
            rng,
            config: config.clone(),
            state,
            log: Vec::new(),
            journal: InputJournal::new(seed, config.clone()),
            finished: None,
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn current_turn(&self) -> u64 {
        self.turn
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn log(&self) -> &[LogEvent] {
        &self.log
    }

    pub fn journal(&self) -> &InputJournal {
        &self.journal
    }

    pub fn finished(&self) -> Option<SessionEnd> {
        self.finished
    }

    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u64(self.seed);
        hasher.write_u64(self.turn);

        let player = &self.state.player;
        hasher.write_i32(player.pos.x);
        hasher.write_i32(player.pos.y);
        hasher.write_i32(player.health);

        hasher.write_usize(self.state.enemies.len());
        for enemy in self.state.enemies.iter() {
            hasher.write_i32(enemy.pos.x);
            hasher.write_i32(enemy.pos.y);
            match &enemy.behavior {
                Behavior::Idle => hasher.write_u8(0),
                Behavior::Hunting { path } => {
                    hasher.write_u8(1);
                    hasher.write_usize(path.cursor());
                    hasher.write_usize(path.len());
                }
            }
        }

        for cell in self.state.grid.cells() {
            hasher.write_u32(u32::from(cell.glyph()));
        }

        hasher.finish()
    }
}
