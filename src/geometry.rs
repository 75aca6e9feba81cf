use cgmath::vec2;

use crate::types::{Float, Pair, PixelLocation};

pub fn center_point(x: usize, y: usize) -> Pair {
    vec2(x as Float + 0.5, y as Float + 0.5)
}

/// True when the pixels touch, including diagonally. A pixel is adjacent to itself.
pub fn is_adjacent(a: PixelLocation, b: PixelLocation) -> bool {
    a.x.abs_diff(b.x) <= 1 && a.y.abs_diff(b.y) <= 1
}

/// Unit vector from the center of `start` toward the center of `end`.
///
/// Shared rows and columns return exact axis vectors: `cos`/`sin` of a
/// horizontal or vertical angle leave a tiny off-axis component that the
/// stepper would otherwise follow. `start` and `end` must differ.
pub fn direction_pair(start: PixelLocation, end: PixelLocation) -> Pair {
    if start.x == end.x {
        return vec2(0.0, if end.y < start.y { -1.0 } else { 1.0 });
    }
    if start.y == end.y {
        return vec2(if end.x < start.x { -1.0 } else { 1.0 }, 0.0);
    }
    let from = center_point(start.x, start.y);
    let to = center_point(end.x, end.y);
    let angle = (to.y - from.y).atan2(to.x - from.x);
    vec2(angle.cos(), angle.sin())
}

#[cfg(test)]
mod tests {
    use cgmath::{assert_abs_diff_eq, InnerSpace};

    use super::*;

    fn px(x: usize, y: usize) -> PixelLocation {
        vec2(x, y)
    }

    #[test]
    fn centers() {
        assert_eq!(center_point(1, 1), vec2(1.5, 1.5));
        assert_eq!(center_point(17, 0), vec2(17.5, 0.5));
    }

    #[test]
    fn adjacency() {
        assert!(is_adjacent(px(7, 10), px(7, 10)));
        assert!(is_adjacent(px(0, 1), px(1, 1)));
        assert!(is_adjacent(px(2, 1), px(1, 1)));
        assert!(is_adjacent(px(1, 1), px(1, 0)));
        assert!(is_adjacent(px(4, 5), px(5, 4)));
        assert!(is_adjacent(px(1, 1), px(0, 0)));
        assert!(!is_adjacent(px(1, 0), px(1, 2)));
        assert!(!is_adjacent(px(0, 0), px(2, 1)));
    }

    #[test]
    fn diagonals() {
        let d = 0.707107;
        assert_abs_diff_eq!(direction_pair(px(0, 0), px(1, 1)), vec2(d, d), epsilon = 1e-4);
        assert_abs_diff_eq!(direction_pair(px(1, 1), px(0, 0)), vec2(-d, -d), epsilon = 1e-4);
        assert_abs_diff_eq!(direction_pair(px(1, 0), px(0, 1)), vec2(-d, d), epsilon = 1e-4);
        assert_abs_diff_eq!(direction_pair(px(0, 1), px(1, 0)), vec2(d, -d), epsilon = 1e-4);
    }

    #[test]
    fn axis_aligned_is_exact() {
        assert_eq!(direction_pair(px(1, 0), px(1, 1)), vec2(0.0, 1.0));
        assert_eq!(direction_pair(px(1, 2), px(1, 1)), vec2(0.0, -1.0));
        assert_eq!(direction_pair(px(0, 2), px(1, 2)), vec2(1.0, 0.0));
        assert_eq!(direction_pair(px(3, 2), px(2, 2)), vec2(-1.0, 0.0));
        assert_eq!(direction_pair(px(5, 0), px(5, 900)), vec2(0.0, 1.0));
    }

    #[test]
    fn angles() {
        assert_abs_diff_eq!(direction_pair(px(2, 1), px(0, 0)), vec2(-0.894427, -0.447214), epsilon = 1e-4);
        assert_abs_diff_eq!(direction_pair(px(0, 1), px(3, 0)), vec2(0.948683, -0.316228), epsilon = 1e-4);
        assert_abs_diff_eq!(direction_pair(px(45, 0), px(30, 40)), vec2(-0.351123, 0.936329), epsilon = 1e-4);
    }

    #[test]
    fn always_unit_length() {
        for (sx, sy) in [(0, 0), (7, 3), (20, 20)] {
            for ex in 0..25 {
                for ey in 0..25 {
                    if (sx, sy) == (ex, ey) {
                        continue;
                    }
                    let d = direction_pair(px(sx, sy), px(ex, ey));
                    assert!((d.magnitude() - 1.0).abs() < 1e-8, "{:?} -> {:?}", (sx, sy), (ex, ey));
                }
            }
        }
    }
}
