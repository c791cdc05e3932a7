use std::collections::HashSet;

use anyhow::{Result, bail};
use clap::Parser;
use game_core::{Command, Direction, Game, GameConfig, SessionEnd};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about = "Drive random commands through the engine", long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 1000)]
    turns: u32,
    /// Number of consecutive seeds to run, starting at `seed`.
    #[arg(short, long, default_value_t = 1)]
    runs: u64,
}

fn choose<T: Copy>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p]
}

fn random_command(rng: &mut ChaCha8Rng, enemies: usize) -> Command {
    let moves = Direction::ALL.map(Command::Move);
    match rng.next_u64() % 4 {
        0 => Command::Wait,
        // Bias towards shooting while there is something to shoot at.
        1 if enemies > 0 => Command::FireLaser { target: rng.next_u64() as usize % enemies },
        _ => choose(rng, &moves),
    }
}

fn check_invariants(game: &Game) -> Result<()> {
    let state = game.state();
    let mut ships = HashSet::from([state.player.pos]);
    if state.asteroid_at(state.player.pos) || !state.grid.in_bounds(state.player.pos) {
        bail!("Invariant failed: player at {:?} is off the open grid", state.player.pos);
    }
    for enemy in state.enemies.iter() {
        if state.asteroid_at(enemy.pos) || !state.grid.in_bounds(enemy.pos) {
            bail!("Invariant failed: enemy at {:?} is off the open grid", enemy.pos);
        }
        if !ships.insert(enemy.pos) {
            bail!("Invariant failed: two ships share {:?}", enemy.pos);
        }
    }
    Ok(())
}

fn run(seed: u64, max_turns: u32) -> Result<()> {
    let mut game = Game::new(seed, &GameConfig::default())?;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    for _ in 0..max_turns {
        let command = random_command(&mut rng, game.state().enemies.len());
        let report = game.play_turn(command)?;
        check_invariants(&game)?;

        match report.end {
            Some(SessionEnd::EngineFailure(reason)) => {
                bail!("Engine failure {reason:?} on seed {seed} at turn {}", report.turn)
            }
            Some(SessionEnd::Outcome(outcome)) => {
                println!("Seed {seed}: {outcome:?} after {} turns", report.turn);
                return Ok(());
            }
            None => {}
        }
    }
    println!("Seed {seed}: still running after {max_turns} turns");
    Ok(())
}

fn main() -> Result<()> {
    tactical_tools::init_tracing();
    let args = Args::parse();

    println!(
        "Starting fuzz harness on {} seed(s) from {} for max {} turns...",
        args.runs, args.seed, args.turns
    );
    for seed in args.seed..args.seed.saturating_add(args.runs) {
        run(seed, args.turns)?;
    }
    println!("Fuzzing completed successfully.");
    Ok(())
}
