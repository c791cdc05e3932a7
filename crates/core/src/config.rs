//! Session parameters: grid size, placement ranges and search limits.
//!
//! Every field has a default, so an empty TOML document is a valid config.
//! Counts and sides are half-open ranges `[min, max)`, matching how the
//! placement generator draws them.

use serde::{Deserialize, Serialize};

pub const DEFAULT_MAP_WIDTH: usize = 40;
pub const DEFAULT_MAP_HEIGHT: usize = 20;
/// Enemy glyphs are single digits.
pub const MAX_ENEMY_CAPACITY: usize = 10;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse config")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize config")]
    Serialize(#[from] toml::ser::Error),
    #[error("map must be at least 2x2, got {width}x{height}")]
    MapTooSmall { width: usize, height: usize },
    #[error("{field} range [{min}, {max}) is empty")]
    EmptyRange { field: &'static str, min: usize, max: usize },
    #[error("asteroid sides up to {side} do not fit a {width}x{height} map")]
    AsteroidTooLarge { side: usize, width: usize, height: usize },
    #[error("enemy capacity {capacity} exceeds the {MAX_ENEMY_CAPACITY} available glyphs")]
    TooManyEnemies { capacity: usize },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AsteroidConfig {
    pub count_min: usize,
    pub count_max: usize,
    pub side_min: usize,
    pub side_max: usize,
}

impl Default for AsteroidConfig {
    fn default() -> Self {
        Self { count_min: 3, count_max: 5, side_min: 3, side_max: 7 }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnemyConfig {
    pub count_min: usize,
    /// Exclusive upper bound of the spawn count and the roster capacity.
    pub count_max: usize,
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self { count_min: 3, count_max: 5 }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub map_width: usize,
    pub map_height: usize,
    /// Free-cell search budget per entity; 0 derives `10 * width * height`.
    pub max_random_seeks: u32,
    pub asteroids: AsteroidConfig,
    pub enemies: EnemyConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            map_width: DEFAULT_MAP_WIDTH,
            map_height: DEFAULT_MAP_HEIGHT,
            max_random_seeks: 0,
            asteroids: AsteroidConfig::default(),
            enemies: EnemyConfig::default(),
        }
    }
}

impl GameConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.map_width < 2 || self.map_height < 2 {
            return Err(ConfigError::MapTooSmall {
                width: self.map_width,
                height: self.map_height,
            });
        }
        non_empty("asteroids.count", self.asteroids.count_min, self.asteroids.count_max)?;
        non_empty("asteroids.side", self.asteroids.side_min, self.asteroids.side_max)?;
        non_empty("enemies.count", self.enemies.count_min, self.enemies.count_max)?;

        // The widest rectangle drawn is side_max - 1, and its origin range must stay non-empty.
        if self.asteroids.side_max > self.map_width || self.asteroids.side_max > self.map_height {
            return Err(ConfigError::AsteroidTooLarge {
                side: self.asteroids.side_max,
                width: self.map_width,
                height: self.map_height,
            });
        }
        if self.enemy_capacity() > MAX_ENEMY_CAPACITY {
            return Err(ConfigError::TooManyEnemies { capacity: self.enemy_capacity() });
        }
        Ok(())
    }

    pub fn enemy_capacity(&self) -> usize {
        self.enemies.count_max
    }

    pub fn seek_budget(&self) -> u32 {
        if self.max_random_seeks > 0 {
            return self.max_random_seeks;
        }
        let cells = self.map_width.saturating_mul(self.map_height).saturating_mul(10);
        u32::try_from(cells).unwrap_or(u32::MAX)
    }
}

fn non_empty(field: &'static str, min: usize, max: usize) -> Result<(), ConfigError> {
    if min >= max {
        return Err(ConfigError::EmptyRange { field, min, max });
    }
    Ok(())
}
