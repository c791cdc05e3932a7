//! Random session layout: asteroid rectangles, enemy ships and the player.
//!
//! Placement draws from the session RNG in a fixed order (asteroids, enemies,
//! player) so a seed always reproduces the same layout. Free-cell search is a
//! bounded loop; running out of attempts is reported to the caller, who
//! decides whether to retry with other parameters.

use std::fmt;
use std::iter;

use rand_chacha::ChaCha8Rng;

use crate::config::{ConfigError, GameConfig};
use crate::random::rand_range;
use crate::state::{Asteroid, RosterFull};
use crate::types::Pos;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlacedEntity {
    Asteroid,
    Enemy,
    Player,
}

impl fmt::Display for PlacedEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asteroid => write!(f, "asteroid"),
            Self::Enemy => write!(f, "enemy"),
            Self::Player => write!(f, "player"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    #[error("no free cell for {entity} after {attempts} attempts; grid too small or crowded")]
    Exhausted { entity: PlacedEntity, attempts: u32 },
    #[error("{entity} at ({}, {}) lies outside the grid", pos.x, pos.y)]
    OutOfBounds { entity: PlacedEntity, pos: Pos },
    #[error("{entity} at ({}, {}) overlaps another occupant", pos.x, pos.y)]
    Overlap { entity: PlacedEntity, pos: Pos },
    #[error(transparent)]
    RosterFull(#[from] RosterFull),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Initial positions of everything on the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    pub asteroids: Vec<Asteroid>,
    pub enemies: Vec<Pos>,
    pub player: Pos,
}

pub fn generate_layout(
    config: &GameConfig,
    rng: &mut ChaCha8Rng,
) -> Result<Layout, PlacementError> {
    config.validate()?;

    let asteroids = place_asteroids(config, rng);
    tracing::debug!(count = asteroids.len(), "generated asteroids");

    let enemy_count = rand_range(rng, config.enemies.count_min, config.enemies.count_max);
    let mut enemies = Vec::with_capacity(enemy_count);
    for _ in 0..enemy_count {
        let pos = find_free_cell(config, rng, PlacedEntity::Enemy, |pos| {
            asteroids.iter().any(|asteroid| asteroid.contains(pos)) || enemies.contains(&pos)
        })?;
        enemies.push(pos);
    }

    let player = find_free_cell(config, rng, PlacedEntity::Player, |pos| {
        asteroids.iter().any(|asteroid| asteroid.contains(pos)) || enemies.contains(&pos)
    })?;
    tracing::debug!(x = player.x, y = player.y, enemies = enemies.len(), "placed player");

    Ok(Layout { asteroids, enemies, player })
}

fn place_asteroids(config: &GameConfig, rng: &mut ChaCha8Rng) -> Vec<Asteroid> {
    let rules = &config.asteroids;
    let count = rand_range(rng, rules.count_min, rules.count_max);
    (0..count)
        .map(|_| {
            let width = rand_range(rng, rules.side_min, rules.side_max);
            let height = rand_range(rng, rules.side_min, rules.side_max);
            let x = rand_range(rng, 0, config.map_width - width) as i32;
            let y = rand_range(rng, 0, config.map_height - height) as i32;
            Asteroid::new(
                Pos { y, x },
                Pos { y: y + height as i32, x: x + width as i32 },
            )
        })
        .collect()
}

fn find_free_cell(
    config: &GameConfig,
    rng: &mut ChaCha8Rng,
    entity: PlacedEntity,
    occupied: impl Fn(Pos) -> bool,
) -> Result<Pos, PlacementError> {
    let attempts = config.seek_budget();
    for _ in 0..attempts {
        let x = rand_range(rng, 0, config.map_width) as i32;
        let y = rand_range(rng, 0, config.map_height) as i32;
        let pos = Pos { y, x };
        if !occupied(pos) {
            return Ok(pos);
        }
    }
    Err(PlacementError::Exhausted { entity, attempts })
}

/// Checks a hand-built layout against the occupancy invariants.
pub fn validate_layout(config: &GameConfig, layout: &Layout) -> Result<(), PlacementError> {
    config.validate()?;
    let in_bounds = |pos: Pos| {
        pos.x >= 0
            && pos.y >= 0
            && (pos.x as usize) < config.map_width
            && (pos.y as usize) < config.map_height
    };

    for asteroid in &layout.asteroids {
        for corner in [Pos { y: asteroid.y1, x: asteroid.x1 }, Pos { y: asteroid.y2, x: asteroid.x2 }]
        {
            if !in_bounds(corner) {
                return Err(PlacementError::OutOfBounds { entity: PlacedEntity::Asteroid, pos: corner });
            }
        }
    }

    if layout.enemies.len() > config.enemy_capacity() {
        return Err(RosterFull { capacity: config.enemy_capacity() }.into());
    }

    let ships = layout
        .enemies
        .iter()
        .map(|pos| (PlacedEntity::Enemy, *pos))
        .chain(iter::once((PlacedEntity::Player, layout.player)));
    let mut taken: Vec<Pos> = Vec::with_capacity(layout.enemies.len() + 1);
    for (entity, pos) in ships {
        if !in_bounds(pos) {
            return Err(PlacementError::OutOfBounds { entity, pos });
        }
        if taken.contains(&pos) || layout.asteroids.iter().any(|asteroid| asteroid.contains(pos)) {
            return Err(PlacementError::Overlap { entity, pos });
        }
        taken.push(pos);
    }
    Ok(())
}
