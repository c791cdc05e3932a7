//! Straight-line cell traversal shared by fog rendering, laser fire and enemy sight.
//!
//! Sampling starts at the source cell's center and steps one whole cell along
//! the dominant axis per iteration, carrying the minor axis as a fractional
//! coordinate that is truncated to pick the cell. The source cell is never
//! visited unless source and destination coincide.

use std::ops::ControlFlow;

use crate::types::Pos;

/// Walks from `from` to `to`, calling `visit` on every traversed cell after the
/// source. Returns the first `Break` payload, or `None` when the destination was
/// reached without interruption.
pub fn scan<B>(from: Pos, to: Pos, mut visit: impl FnMut(Pos) -> ControlFlow<B>) -> Option<B> {
    let dx = to.x - from.x;
    let dy = to.y - from.y;

    if dx == 0 && dy == 0 {
        return visit(from).break_value();
    }

    let (step_x, step_y, steps) = if dx.abs() > dy.abs() {
        (f64::from(dx.signum()), f64::from(dy) / f64::from(dx.abs()), dx.abs())
    } else {
        (f64::from(dx) / f64::from(dy.abs()), f64::from(dy.signum()), dy.abs())
    };

    let mut x = f64::from(from.x) + 0.5;
    let mut y = f64::from(from.y) + 0.5;
    for _ in 1..=steps {
        x += step_x;
        y += step_y;
        if let ControlFlow::Break(signal) = visit(Pos { y: y as i32, x: x as i32 }) {
            return Some(signal);
        }
    }
    None
}

/// Every cell `scan` would visit between two points, in order.
pub fn trace(from: Pos, to: Pos) -> Vec<Pos> {
    let mut cells = Vec::new();
    scan::<()>(from, to, |pos| {
        cells.push(pos);
        ControlFlow::Continue(())
    });
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i32, y: i32) -> Pos {
        Pos { y, x }
    }

    #[test]
    fn point_scan_visits_only_the_source() {
        assert_eq!(trace(p(3, 2), p(3, 2)), vec![p(3, 2)]);
        let signal = scan(p(3, 2), p(3, 2), |_| ControlFlow::Break(7));
        assert_eq!(signal, Some(7));
    }

    #[test]
    fn diagonal_ray_steps_both_axes_together() {
        assert_eq!(trace(p(0, 0), p(4, 4)), vec![p(1, 1), p(2, 2), p(3, 3), p(4, 4)]);
        assert_eq!(trace(p(4, 0), p(0, 4)), vec![p(3, 1), p(2, 2), p(1, 3), p(0, 4)]);
        assert_eq!(trace(p(4, 4), p(0, 0)), vec![p(3, 3), p(2, 2), p(1, 1), p(0, 0)]);
    }

    #[test]
    fn axis_aligned_rays_skip_the_source() {
        assert_eq!(trace(p(0, 0), p(3, 0)), vec![p(1, 0), p(2, 0), p(3, 0)]);
        assert_eq!(trace(p(2, 3), p(2, 0)), vec![p(2, 2), p(2, 1), p(2, 0)]);
    }

    #[test]
    fn shallow_ray_uses_cell_centers_for_the_minor_axis() {
        // Minor axis moves by 1/4 per step from y = 0.5: the row changes at the midpoint.
        assert_eq!(trace(p(0, 0), p(4, 1)), vec![p(1, 0), p(2, 1), p(3, 1), p(4, 1)]);
        assert_eq!(trace(p(4, 1), p(0, 0)), vec![p(3, 1), p(2, 1), p(1, 0), p(0, 0)]);
    }

    #[test]
    fn scan_stops_at_first_break() {
        let mut visited = Vec::new();
        let hit = scan(p(0, 0), p(5, 0), |pos| {
            visited.push(pos);
            if pos.x == 2 { ControlFlow::Break("rock") } else { ControlFlow::Continue(()) }
        });
        assert_eq!(hit, Some("rock"));
        assert_eq!(visited, vec![p(1, 0), p(2, 0)]);
    }

    #[test]
    fn uninterrupted_scan_returns_none() {
        assert_eq!(scan::<()>(p(0, 0), p(2, 5), |_| ControlFlow::Continue(())), None);
    }
}
