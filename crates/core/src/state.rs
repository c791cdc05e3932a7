use slotmap::SlotMap;

use crate::types::*;

pub const FULL_HEALTH: i32 = 100;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<CellState>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, cells: vec![CellState::Unscanned; width * height] }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    pub fn index_of(&self, pos: Pos) -> Option<usize> {
        self.in_bounds(pos).then(|| (pos.y as usize) * self.width + (pos.x as usize))
    }

    pub fn pos_of(&self, index: usize) -> Pos {
        Pos { y: (index / self.width) as i32, x: (index % self.width) as i32 }
    }

    pub fn cell(&self, pos: Pos) -> Option<CellState> {
        self.index_of(pos).map(|idx| self.cells[idx])
    }

    pub fn set(&mut self, pos: Pos, state: CellState) {
        if let Some(idx) = self.index_of(pos) {
            self.cells[idx] = state;
        }
    }

    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [CellState] {
        &mut self.cells
    }

    pub fn positions(&self) -> impl Iterator<Item = Pos> + use<> {
        let (width, height) = (self.width as i32, self.height as i32);
        (0..height).flat_map(move |y| (0..width).map(move |x| Pos { y, x }))
    }
}

/// Axis-aligned rectangle with inclusive bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Asteroid {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl Asteroid {
    pub fn new(a: Pos, b: Pos) -> Self {
        Self { x1: a.x.min(b.x), y1: a.y.min(b.y), x2: a.x.max(b.x), y2: a.y.max(b.y) }
    }

    pub fn contains(&self, pos: Pos) -> bool {
        pos.x >= self.x1 && pos.x <= self.x2 && pos.y >= self.y1 && pos.y <= self.y2
    }
}

/// Route an enemy walks after spotting the player: cell indices from the
/// enemy's spotting cell to the player's cell at spotting time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HuntPath {
    cells: Vec<usize>,
    cursor: usize,
}

impl HuntPath {
    pub fn new(cells: Vec<usize>) -> Self {
        debug_assert!(!cells.is_empty(), "hunt path always holds at least the enemy's cell");
        Self { cells, cursor: 0 }
    }

    pub fn cells(&self) -> &[usize] {
        &self.cells
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cells still ahead of the cursor.
    pub fn remaining(&self) -> &[usize] {
        self.cells.get(self.cursor + 1..).unwrap_or(&[])
    }

    /// Moves the cursor onto the next cell and returns it; `None` once the
    /// end of the path has been reached.
    pub fn advance(&mut self) -> Option<usize> {
        let next = *self.cells.get(self.cursor + 1)?;
        self.cursor += 1;
        Some(next)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Behavior {
    #[default]
    Idle,
    Hunting {
        path: HuntPath,
    },
}

#[derive(Clone, Debug)]
pub struct Enemy {
    pub id: EnemyId,
    pub pos: Pos,
    pub behavior: Behavior,
}

impl Enemy {
    pub fn is_hunting(&self) -> bool {
        matches!(self.behavior, Behavior::Hunting { .. })
    }

    pub fn hunt_path(&self) -> Option<&HuntPath> {
        match &self.behavior {
            Behavior::Hunting { path } => Some(path),
            Behavior::Idle => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("enemy roster is full ({capacity} slots)")]
pub struct RosterFull {
    pub capacity: usize,
}

/// Capacity-bounded enemy collection. Slots are dense and transient: removal
/// moves the last enemy into the vacated slot. `EnemyId`s stay stable.
#[derive(Clone, Debug)]
pub struct EnemyRoster {
    slots: Vec<EnemyId>,
    enemies: SlotMap<EnemyId, Enemy>,
    capacity: usize,
}

impl EnemyRoster {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            enemies: SlotMap::with_capacity_and_key(capacity),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn push(&mut self, pos: Pos) -> Result<EnemyId, RosterFull> {
        if self.slots.len() >= self.capacity {
            return Err(RosterFull { capacity: self.capacity });
        }
        let id = self.enemies.insert_with_key(|id| Enemy { id, pos, behavior: Behavior::Idle });
        self.slots.push(id);
        Ok(id)
    }

    pub fn get(&self, slot: usize) -> Option<&Enemy> {
        self.slots.get(slot).map(|id| &self.enemies[*id])
    }

    pub fn get_mut(&mut self, slot: usize) -> Option<&mut Enemy> {
        let id = *self.slots.get(slot)?;
        self.enemies.get_mut(id)
    }

    pub fn by_id(&self, id: EnemyId) -> Option<&Enemy> {
        self.enemies.get(id)
    }

    pub fn slot_at(&self, pos: Pos) -> Option<usize> {
        self.slots.iter().position(|id| self.enemies[*id].pos == pos)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Enemy> {
        self.slots.iter().map(|id| &self.enemies[*id])
    }

    /// Swaps the enemy in `slot` with the last live entry and shrinks the
    /// roster. Its hunt path is dropped along with it.
    pub fn swap_remove(&mut self, slot: usize) -> Option<Enemy> {
        if slot >= self.slots.len() {
            return None;
        }
        let id = self.slots.swap_remove(slot);
        self.enemies.remove(id)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Player {
    pub pos: Pos,
    pub health: i32,
}

impl Player {
    pub fn new(pos: Pos) -> Self {
        Self { pos, health: FULL_HEALTH }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Any hit resets health to zero; there is no graduated damage.
    pub fn register_hit(&mut self) {
        self.health = 0;
    }
}

/// Everything a turn reads and mutates, owned by the engine.
#[derive(Clone, Debug)]
pub struct GameState {
    pub grid: Grid,
    pub asteroids: Vec<Asteroid>,
    pub enemies: EnemyRoster,
    pub player: Player,
}

impl GameState {
    pub fn asteroid_at(&self, pos: Pos) -> bool {
        self.asteroids.iter().any(|asteroid| asteroid.contains(pos))
    }

    /// Decides whether a ship may move onto `pos`.
    pub fn classify(&self, pos: Pos) -> MoveClass {
        if !self.grid.in_bounds(pos) || self.asteroid_at(pos) {
            return MoveClass::Blocked;
        }
        if pos == self.player.pos || self.enemies.slot_at(pos).is_some() {
            return MoveClass::Occupied;
        }
        MoveClass::Clear
    }
}
