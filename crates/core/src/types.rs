use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

new_key_type! {
    pub struct EnemyId;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

impl Pos {
    pub fn step(self, direction: Direction) -> Pos {
        let (dx, dy) = direction.offset();
        Pos { y: self.y + dy, x: self.x + dx }
    }
}

/// Display state of one grid cell. This is a render cache rebuilt every turn,
/// never the authority on where entities are.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellState {
    Unscanned,
    Space,
    Fog,
    Asteroid,
    Player,
    PathMarker,
    Enemy(u8),
}

impl CellState {
    pub fn glyph(self) -> char {
        match self {
            Self::Unscanned => '~',
            Self::Space => ' ',
            Self::Fog => '.',
            Self::Asteroid => '#',
            Self::Player => '*',
            Self::PathMarker => '`',
            Self::Enemy(slot) => char::from(b'0' + slot % 10),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    West,
    South,
    North,
    East,
}

impl Direction {
    pub const ALL: [Direction; 4] =
        [Direction::West, Direction::South, Direction::North, Direction::East];

    /// `(dx, dy)` with y growing downwards.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Self::West => (-1, 0),
            Self::South => (0, 1),
            Self::North => (0, -1),
            Self::East => (1, 0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveClass {
    Clear,
    Blocked,
    Occupied,
}

/// First thing a probing ray ran into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RayHit {
    Obstacle { at: Pos },
    Enemy { slot: usize, at: Pos },
    Player { at: Pos },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Move(Direction),
    FireLaser { target: usize },
    Wait,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunOutcome {
    Victory,
    Defeat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineFailureReason {
    LaserStruckPlayer,
}

/// How a session ended: a normal combat outcome or an internal failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEnd {
    Outcome(RunOutcome),
    EngineFailure(EngineFailureReason),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LaserReport {
    Obstacle { at: Pos },
    Destroyed { enemy: EnemyId, slot: usize, at: Pos },
    Missed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnReport {
    pub turn: u64,
    pub laser: Option<LaserReport>,
    pub end: Option<SessionEnd>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("laser target {target} is not a live enemy slot (0..{enemies_count})")]
    InvalidTarget { target: usize, enemies_count: usize },
    #[error("the session already ended: {0:?}")]
    SessionOver(SessionEnd),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogEvent {
    PlayerMoved { to: Pos },
    PlayerBlocked { at: Pos },
    PlayerRammed { at: Pos },
    LaserFired { target: usize, report: LaserReport },
    EnemySpotted { enemy: EnemyId, path_len: usize },
    PlayerHit { enemy: EnemyId },
    EnemyMoved { enemy: EnemyId, to: Pos },
    EnemyLostTrack { enemy: EnemyId },
    SessionEnded(SessionEnd),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enemy_glyphs_are_slot_digits() {
        assert_eq!(CellState::Enemy(0).glyph(), '0');
        assert_eq!(CellState::Enemy(7).glyph(), '7');
    }

    #[test]
    fn north_moves_towards_row_zero() {
        let start = Pos { y: 3, x: 3 };
        assert_eq!(start.step(Direction::North), Pos { y: 2, x: 3 });
        assert_eq!(start.step(Direction::West), Pos { y: 3, x: 2 });
    }
}
