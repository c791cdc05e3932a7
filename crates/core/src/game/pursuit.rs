//! Shortest routes for hunting enemies over the 4-connected grid.
//! Routes ignore asteroids and ships; only sight is blocked by them, and the
//! engine decides what happens when a ship cannot take the next step.

use super::*;
use crate::state::HuntPath;

fn neighbors(p: Pos) -> [Pos; 4] {
    [
        Pos { y: p.y - 1, x: p.x },
        Pos { y: p.y, x: p.x + 1 },
        Pos { y: p.y + 1, x: p.x },
        Pos { y: p.y, x: p.x - 1 },
    ]
}

/// Route from `enemy_pos` to `player_pos`, both ends included, enemy first.
///
/// Costs are relaxed outward from the player with a plain O(V²) selection
/// loop: the open cell with the lowest cost (lowest index on ties) is closed
/// next, and the loop stops once the enemy's cell is selected. Walking
/// predecessors from the enemy then yields the route in travel order.
pub fn build_hunt_path(grid: &Grid, enemy_pos: Pos, player_pos: Pos) -> HuntPath {
    let (Some(source), Some(goal)) = (grid.index_of(player_pos), grid.index_of(enemy_pos)) else {
        return HuntPath::new(grid.index_of(enemy_pos).into_iter().collect());
    };

    let cell_count = grid.width() * grid.height();
    let mut cost = vec![u32::MAX; cell_count];
    let mut previous: Vec<usize> = (0..cell_count).collect();
    let mut closed = vec![false; cell_count];
    cost[source] = 0;

    loop {
        let current = (0..cell_count)
            .filter(|idx| !closed[*idx] && cost[*idx] != u32::MAX)
            .min_by_key(|idx| (cost[*idx], *idx));
        let Some(current) = current else {
            break;
        };
        if current == goal {
            break;
        }
        for next in neighbors(grid.pos_of(current)) {
            let Some(next_idx) = grid.index_of(next) else {
                continue;
            };
            let relaxed = cost[current] + 1;
            if relaxed < cost[next_idx] {
                cost[next_idx] = relaxed;
                previous[next_idx] = current;
            }
        }
        closed[current] = true;
    }

    let mut cells = vec![goal];
    let mut at = goal;
    while at != source && previous[at] != at {
        at = previous[at];
        cells.push(at);
    }
    HuntPath::new(cells)
}
