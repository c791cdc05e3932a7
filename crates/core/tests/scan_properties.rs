use std::collections::HashSet;
use std::ops::ControlFlow;

use proptest::prelude::*;
use tactical_core::game::{build_hunt_path, render_fog};
use tactical_core::scan::{scan, trace};
use tactical_core::state::{Asteroid, EnemyRoster, GameState, Grid, Player};
use tactical_core::Pos;

const W: i32 = 40;
const H: i32 = 20;

fn any_pos() -> impl Strategy<Value = Pos> {
    (0..W, 0..H).prop_map(|(x, y)| Pos { y, x })
}

proptest! {
    #[test]
    fn point_scan_visits_one_cell(pos in any_pos()) {
        let mut seen = Vec::new();
        let signal = scan(pos, pos, |cell| {
            seen.push(cell);
            ControlFlow::Break(cell)
        });
        prop_assert_eq!(seen, vec![pos]);
        prop_assert_eq!(signal, Some(pos));
    }

    #[test]
    fn rays_are_gapless_and_end_at_the_destination(from in any_pos(), to in any_pos()) {
        prop_assume!(from != to);
        let cells = trace(from, to);
        let expected = (to.x - from.x).unsigned_abs().max((to.y - from.y).unsigned_abs());

        prop_assert_eq!(cells.len() as u32, expected);
        prop_assert_eq!(cells.last().copied(), Some(to));
        prop_assert!(!cells.contains(&from));

        let mut previous = from;
        for cell in &cells {
            prop_assert!((cell.x - previous.x).abs() <= 1 && (cell.y - previous.y).abs() <= 1);
            previous = *cell;
        }
        let unique: HashSet<_> = cells.iter().collect();
        prop_assert_eq!(unique.len(), cells.len());
    }

    #[test]
    fn open_grid_routes_follow_manhattan_distance(from in any_pos(), to in any_pos()) {
        let grid = Grid::new(W as usize, H as usize);
        let path = build_hunt_path(&grid, from, to);
        let cells: Vec<Pos> = path.cells().iter().map(|idx| grid.pos_of(*idx)).collect();
        let manhattan = (to.x - from.x).unsigned_abs() + (to.y - from.y).unsigned_abs();

        prop_assert_eq!(cells.len() as u32, manhattan + 1);
        prop_assert_eq!(cells.first().copied(), Some(from));
        prop_assert_eq!(cells.last().copied(), Some(to));
        for pair in cells.windows(2) {
            let step = (pair[0].x - pair[1].x).unsigned_abs() + (pair[0].y - pair[1].y).unsigned_abs();
            prop_assert_eq!(step, 1);
        }
    }

    #[test]
    fn fog_projection_is_idempotent(player in any_pos(), rock in any_pos()) {
        prop_assume!(player != rock);
        let mut state = GameState {
            grid: Grid::new(W as usize, H as usize),
            asteroids: vec![Asteroid::new(rock, rock)],
            enemies: EnemyRoster::new(5),
            player: Player::new(player),
        };
        render_fog(&mut state);
        let first = state.grid.clone();
        render_fog(&mut state);
        prop_assert_eq!(first, state.grid);
    }
}
