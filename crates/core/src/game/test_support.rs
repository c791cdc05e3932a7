//! Shared fixtures for the `game` submodule test suites.
//! It does not own production gameplay logic.

use super::*;
use crate::config::{AsteroidConfig, EnemyConfig};
use crate::state::Asteroid;

pub(super) fn small_config(width: usize, height: usize) -> GameConfig {
    GameConfig {
        map_width: width,
        map_height: height,
        max_random_seeks: 0,
        asteroids: AsteroidConfig { count_min: 0, count_max: 1, side_min: 1, side_max: 2 },
        enemies: EnemyConfig { count_min: 0, count_max: 10 },
    }
}

/// Vertical asteroid column at `x` spanning rows `y1..=y2`.
pub(super) fn wall(x: i32, y1: i32, y2: i32) -> Asteroid {
    Asteroid::new(Pos { y: y1, x }, Pos { y: y2, x })
}

pub(super) fn open_state(width: usize, height: usize, player: Pos, enemies: &[Pos]) -> GameState {
    let mut roster = EnemyRoster::new(10);
    for pos in enemies {
        roster.push(*pos).expect("fixture fits roster");
    }
    GameState {
        grid: Grid::new(width, height),
        asteroids: Vec::new(),
        enemies: roster,
        player: Player::new(player),
    }
}

pub(super) fn scenario_game(
    width: usize,
    height: usize,
    asteroids: Vec<Asteroid>,
    enemies: Vec<Pos>,
    player: Pos,
) -> Game {
    let layout = Layout { asteroids, enemies, player };
    Game::from_layout(7, &small_config(width, height), layout).expect("fixture layout is valid")
}

pub(super) fn draw_grid(grid: &Grid) -> String {
    let mut text = String::new();
    for (idx, cell) in grid.cells().iter().enumerate() {
        text.push(cell.glyph());
        if (idx + 1) % grid.width() == 0 {
            text.push('\n');
        }
    }
    text
}
