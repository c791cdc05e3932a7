//! Laser targeting, first-hit resolution and removal.

use super::support::*;

#[test]
fn asteroid_in_the_way_absorbs_the_shot() {
    let mut game = scenario_game(5, 5, vec![wall(2, 0, 4)], vec![Pos { y: 0, x: 4 }], Pos {
        y: 0,
        x: 0,
    });

    let report = game.play_turn(Command::FireLaser { target: 0 }).expect("valid target");

    assert_eq!(report.laser, Some(LaserReport::Obstacle { at: Pos { y: 0, x: 2 } }));
    assert_eq!(game.state.enemies.len(), 1);
    assert_eq!(report.end, None);
}

#[test]
fn closer_enemy_in_the_line_of_fire_is_destroyed_instead() {
    let far = Pos { y: 0, x: 5 };
    let near = Pos { y: 0, x: 2 };
    let mut game = scenario_game(6, 2, Vec::new(), vec![far, near], Pos { y: 0, x: 0 });
    let near_id = game.state.enemies.get(1).map(|enemy| enemy.id).expect("slot 1");

    let report = game.play_turn(Command::FireLaser { target: 0 }).expect("valid target");

    assert_eq!(report.laser, Some(LaserReport::Destroyed { enemy: near_id, slot: 1, at: near }));
    assert_eq!(game.state.enemies.len(), 1);
    assert_eq!(game.state.enemies.get(0).map(|enemy| enemy.pos), Some(far));
    // With the screen gone the far ship has a clear shot.
    assert_eq!(report.end, Some(SessionEnd::Outcome(RunOutcome::Defeat)));
}

#[test]
fn destroying_the_last_enemy_wins_the_session() {
    let mut game = scenario_game(5, 2, Vec::new(), vec![Pos { y: 0, x: 3 }], Pos { y: 0, x: 0 });

    let report = game.play_turn(Command::FireLaser { target: 0 }).expect("valid target");

    assert!(matches!(report.laser, Some(LaserReport::Destroyed { slot: 0, .. })));
    assert!(game.state.enemies.is_empty());
    assert_eq!(report.end, Some(SessionEnd::Outcome(RunOutcome::Victory)));
    assert_eq!(game.finished(), Some(SessionEnd::Outcome(RunOutcome::Victory)));
    assert!(game.state.player.is_alive());
}

#[test]
fn out_of_range_target_is_rejected_without_spending_a_turn() {
    let mut game = scenario_game(5, 5, vec![wall(2, 0, 4)], vec![Pos { y: 0, x: 4 }], Pos {
        y: 0,
        x: 0,
    });
    let before = game.snapshot_hash();

    let err = game.play_turn(Command::FireLaser { target: 1 }).expect_err("slot 1 is empty");

    assert_eq!(err, GameError::InvalidTarget { target: 1, enemies_count: 1 });
    assert_eq!(game.current_turn(), 0);
    assert!(game.journal().inputs.is_empty());
    assert_eq!(game.snapshot_hash(), before);
}

#[test]
fn destroyed_enemy_is_logged_with_its_stable_id() {
    let mut game = scenario_game(5, 2, Vec::new(), vec![Pos { y: 0, x: 3 }], Pos { y: 0, x: 0 });
    let id = game.state.enemies.get(0).map(|enemy| enemy.id).expect("slot 0");

    game.play_turn(Command::FireLaser { target: 0 }).expect("valid target");

    assert!(game.log().iter().any(|event| matches!(
        event,
        LogEvent::LaserFired { target: 0, report: LaserReport::Destroyed { enemy, .. } } if *enemy == id
    )));
}
