use crate::types::{Cell, Float, Pair, EPSILON};

// Diagonal snapping uses a wider tolerance than the boundary nudge so the
// nudge itself can never push a corner crossing out of the snap window.
const DIAGONAL_EPSILON: Float = EPSILON * 8.0;

/// Advances `pos` along `direction` to the next pixel boundary and returns the
/// cell reached there.
///
/// Grid digital differential analyzer. Threading `pos` through repeated calls
/// walks every cell the ray crosses, in order. Positions sitting on a boundary
/// are nudged forward first so no step has zero length, near-axis directions
/// move along a single axis, and crossings that hit both boundaries at once
/// snap to the diagonal cell. On the axis that is not being crossed the cell
/// stays one behind the boundary since the ray has not entered that row or
/// column yet.
pub fn step(pos: &mut Pair, direction: Pair) -> Cell {
    let sign_x: i64 = if direction.x < 0.0 { -1 } else { 1 };
    let sign_y: i64 = if direction.y < 0.0 { -1 } else { 1 };

    let mut x = pos.x;
    let mut y = pos.y;
    if (x - x.round()).abs() < EPSILON {
        x += sign_x as Float * EPSILON * 2.0;
    }
    if (y - y.round()).abs() < EPSILON {
        y += sign_y as Float * EPSILON * 2.0;
    }

    let x_bound = if direction.x < 0.0 { x.floor() } else { x.ceil() };
    let y_bound = if direction.y < 0.0 { y.floor() } else { y.ceil() };
    let x_gap = x_bound - x;
    let y_gap = y_bound - y;

    if direction.x.abs() < EPSILON {
        pos.y = y_bound;
        return Cell::new(pos.x.floor() as i64, y_bound as i64);
    }
    if direction.y.abs() < EPSILON {
        pos.x = x_bound;
        return Cell::new(x_bound as i64, pos.y.floor() as i64);
    }

    let tx = (x_gap / direction.x).abs();
    let ty = (y_gap / direction.y).abs();
    if tx < ty {
        pos.x = x_bound;
        pos.y += direction.y * tx;
        if (pos.y - pos.y.round()).abs() < DIAGONAL_EPSILON {
            pos.y = y_bound;
            return Cell::new(x_bound as i64, y_bound as i64);
        }
        Cell::new(x_bound as i64, y_bound as i64 - sign_y)
    } else {
        pos.x += direction.x * ty;
        pos.y = y_bound;
        if (pos.x - pos.x.round()).abs() < DIAGONAL_EPSILON {
            pos.x = x_bound;
            return Cell::new(x_bound as i64, y_bound as i64);
        }
        Cell::new(x_bound as i64 - sign_x, y_bound as i64)
    }
}
