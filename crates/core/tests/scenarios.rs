use std::ops::ControlFlow;

use tactical_core::game::build_hunt_path;
use tactical_core::scan::{scan, trace};
use tactical_core::state::Asteroid;
use tactical_core::{
    Command, Game, GameConfig, LaserReport, Layout, Pos, RunOutcome, SessionEnd,
};

fn roomy_config(width: usize, height: usize) -> GameConfig {
    let mut config = GameConfig { map_width: width, map_height: height, ..GameConfig::default() };
    config.asteroids.side_min = 1;
    config.asteroids.side_max = 2;
    config
}

#[test]
fn diagonal_scan_across_an_empty_grid() {
    let origin = Pos { y: 0, x: 0 };
    let destination = Pos { y: 4, x: 4 };
    let cells = trace(origin, destination);

    assert_eq!(
        cells,
        vec![Pos { y: 1, x: 1 }, Pos { y: 2, x: 2 }, Pos { y: 3, x: 3 }, Pos { y: 4, x: 4 }]
    );

    let mut visited = 0;
    let signal = scan(origin, destination, |pos| {
        visited += 1;
        if pos == destination { ControlFlow::Break(pos) } else { ControlFlow::Continue(()) }
    });
    assert_eq!((visited, signal), (4, Some(destination)));
}

#[test]
fn laser_stops_at_the_asteroid_wall() {
    let layout = Layout {
        asteroids: vec![Asteroid::new(Pos { y: 0, x: 2 }, Pos { y: 4, x: 2 })],
        enemies: vec![Pos { y: 0, x: 4 }],
        player: Pos { y: 0, x: 0 },
    };
    let mut game = Game::from_layout(1, &roomy_config(5, 5), layout).expect("valid layout");

    let report = game.play_turn(Command::FireLaser { target: 0 }).expect("valid target");

    assert_eq!(report.laser, Some(LaserReport::Obstacle { at: Pos { y: 0, x: 2 } }));
    assert_eq!(game.state().enemies.len(), 1);
}

#[test]
fn pursuit_route_closes_distance_every_step() {
    let game = Game::from_layout(
        1,
        &roomy_config(8, 8),
        Layout { asteroids: Vec::new(), enemies: vec![Pos { y: 5, x: 5 }], player: Pos { y: 0, x: 0 } },
    )
    .expect("valid layout");
    let grid = &game.state().grid;

    let path = build_hunt_path(grid, Pos { y: 5, x: 5 }, Pos { y: 0, x: 0 });

    assert_eq!(path.len(), 11);
    let distances: Vec<u32> = path
        .cells()
        .iter()
        .map(|idx| grid.pos_of(*idx))
        .map(|pos| pos.x.unsigned_abs() + pos.y.unsigned_abs())
        .collect();
    assert!(distances.windows(2).all(|pair| pair[1] < pair[0]), "{distances:?}");
}

#[test]
fn spotted_player_is_shot_down_on_the_enemy_turn() {
    let layout = Layout {
        asteroids: Vec::new(),
        enemies: vec![Pos { y: 5, x: 5 }],
        player: Pos { y: 0, x: 0 },
    };
    let mut game = Game::from_layout(1, &roomy_config(6, 6), layout).expect("valid layout");

    let report = game.play_turn(Command::Wait).expect("turn runs");

    let enemy = game.state().enemies.get(0).expect("enemy");
    assert!(enemy.is_hunting());
    assert!(enemy.hunt_path().is_some_and(|path| !path.is_empty()));
    assert_eq!(game.state().player.health, 0);
    assert_eq!(report.end, Some(SessionEnd::Outcome(RunOutcome::Defeat)));
}

#[test]
fn last_kill_ends_the_session_in_victory() {
    let layout = Layout {
        asteroids: Vec::new(),
        enemies: vec![Pos { y: 3, x: 3 }],
        player: Pos { y: 0, x: 0 },
    };
    let mut game = Game::from_layout(1, &roomy_config(5, 5), layout).expect("valid layout");

    let report = game.play_turn(Command::FireLaser { target: 0 }).expect("valid target");

    assert!(matches!(report.laser, Some(LaserReport::Destroyed { slot: 0, .. })));
    assert_eq!(report.end, Some(SessionEnd::Outcome(RunOutcome::Victory)));
    assert!(game.play_turn(Command::Wait).is_err());
}
