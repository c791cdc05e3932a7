//! Fog-of-war projection and ship line-of-sight checks.
//! Both are thin visitors over the shared ray scanner; this module does not
//! move ships or decide combat outcomes.

use std::ops::ControlFlow;

use super::*;

/// What a probing ray runs into at `pos`, if anything.
pub(super) fn probe(state: &GameState, pos: Pos) -> ControlFlow<RayHit> {
    if state.asteroid_at(pos) {
        return ControlFlow::Break(RayHit::Obstacle { at: pos });
    }
    if let Some(slot) = state.enemies.slot_at(pos) {
        return ControlFlow::Break(RayHit::Enemy { slot, at: pos });
    }
    if pos == state.player.pos {
        return ControlFlow::Break(RayHit::Player { at: pos });
    }
    ControlFlow::Continue(())
}

/// Rebuilds the display grid from the player's point of view. Cells seen on an
/// earlier turn fall back to fog; each ray then marks open space up to the
/// first asteroid or enemy it meets.
pub fn render_fog(state: &mut GameState) {
    for cell in state.grid.cells_mut() {
        if matches!(cell, CellState::Space | CellState::Player | CellState::Enemy(_)) {
            *cell = CellState::Fog;
        }
    }

    let GameState { grid, asteroids, enemies, player } = state;
    let origin = player.pos;
    for target in grid.positions() {
        scan(origin, target, |pos| {
            let seen = if asteroids.iter().any(|asteroid| asteroid.contains(pos)) {
                CellState::Asteroid
            } else if let Some(slot) = enemies.slot_at(pos) {
                CellState::Enemy(slot as u8)
            } else {
                grid.set(pos, CellState::Space);
                return ControlFlow::Continue(());
            };
            grid.set(pos, seen);
            ControlFlow::Break(())
        });
    }

    grid.set(origin, CellState::Player);
}

/// True when the ray from the enemy in `slot` reaches the player unobstructed.
pub fn enemy_sees_player(state: &GameState, slot: usize) -> bool {
    let Some(enemy) = state.enemies.get(slot) else {
        return false;
    };
    matches!(
        scan(enemy.pos, state.player.pos, |pos| probe(state, pos)),
        Some(RayHit::Player { .. })
    )
}

/// Copy of the display grid with every live hunt route drawn in.
pub fn overlay_hunt_paths(state: &GameState) -> Grid {
    let mut grid = state.grid.clone();
    for path in state.enemies.iter().filter_map(|enemy| enemy.hunt_path()) {
        for idx in path.remaining() {
            let pos = grid.pos_of(*idx);
            if matches!(
                grid.cell(pos),
                Some(CellState::Unscanned | CellState::Fog | CellState::Space)
            ) {
                grid.set(pos, CellState::PathMarker);
            }
        }
    }
    grid
}
