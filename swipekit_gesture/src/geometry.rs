// Copyright 2025 the Swipekit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure geometry helpers: dominant-axis selection, per-axis direction, and
//! the inclusive containment check used as the bounds guard.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect, Vec2};

/// Screen axis of a displacement.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Axis {
    /// The x axis.
    Horizontal,
    /// The y axis.
    Vertical,
}

/// Direction of a swipe, in screen coordinates (y grows downward).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum SwipeDirection {
    /// Negative x.
    Left,
    /// Positive x.
    Right,
    /// Negative y.
    Up,
    /// Positive y.
    Down,
}

impl SwipeDirection {
    /// All four directions, in a stable order.
    pub const ALL: [Self; 4] = [Self::Left, Self::Right, Self::Up, Self::Down];

    /// The axis this direction lies on.
    pub const fn axis(self) -> Axis {
        match self {
            Self::Left | Self::Right => Axis::Horizontal,
            Self::Up | Self::Down => Axis::Vertical,
        }
    }
}

/// Select the dominant axis of a displacement.
///
/// Horizontal strictly iff `|dx| > |dy|`; an exact tie resolves to
/// [`Axis::Vertical`]. Downstream classification relies on this exact
/// tie-break.
pub fn dominant_axis(delta: Vec2) -> Axis {
    if delta.x.abs() > delta.y.abs() {
        Axis::Horizontal
    } else {
        Axis::Vertical
    }
}

/// Signed component of `delta` along `axis`.
pub fn axis_delta(axis: Axis, delta: Vec2) -> f64 {
    match axis {
        Axis::Horizontal => delta.x,
        Axis::Vertical => delta.y,
    }
}

/// Direction of a signed displacement along an axis.
///
/// Positive maps to [`SwipeDirection::Right`] / [`SwipeDirection::Down`];
/// zero and negative map to [`SwipeDirection::Left`] / [`SwipeDirection::Up`].
pub fn direction_of(axis: Axis, delta: f64) -> SwipeDirection {
    match axis {
        Axis::Horizontal => {
            if delta > 0.0 {
                SwipeDirection::Right
            } else {
                SwipeDirection::Left
            }
        }
        Axis::Vertical => {
            if delta > 0.0 {
                SwipeDirection::Down
            } else {
                SwipeDirection::Up
            }
        }
    }
}

/// Inclusive containment check: the bounds guard.
///
/// True iff the point lies within `rect` with all four edges included.
/// Note [`Rect::contains`] is half-open on the max edges, so it is not a
/// substitute; region membership here includes the right/bottom edge.
pub fn contains_inclusive(rect: Rect, point: Point) -> bool {
    rect.x0 <= point.x && point.x <= rect.x1 && rect.y0 <= point.y && point.y <= rect.y1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_wins_strictly() {
        assert_eq!(dominant_axis(Vec2::new(10.0, 9.0)), Axis::Horizontal);
        assert_eq!(dominant_axis(Vec2::new(-10.0, 9.0)), Axis::Horizontal);
    }

    #[test]
    fn tie_resolves_to_vertical() {
        assert_eq!(dominant_axis(Vec2::new(10.0, 10.0)), Axis::Vertical);
        assert_eq!(dominant_axis(Vec2::new(-10.0, 10.0)), Axis::Vertical);
        assert_eq!(dominant_axis(Vec2::new(0.0, 0.0)), Axis::Vertical);
    }

    #[test]
    fn directions_follow_sign() {
        assert_eq!(direction_of(Axis::Horizontal, 5.0), SwipeDirection::Right);
        assert_eq!(direction_of(Axis::Horizontal, -5.0), SwipeDirection::Left);
        assert_eq!(direction_of(Axis::Vertical, 5.0), SwipeDirection::Down);
        assert_eq!(direction_of(Axis::Vertical, -5.0), SwipeDirection::Up);
    }

    #[test]
    fn zero_delta_maps_to_negative_direction() {
        assert_eq!(direction_of(Axis::Horizontal, 0.0), SwipeDirection::Left);
        assert_eq!(direction_of(Axis::Vertical, 0.0), SwipeDirection::Up);
    }

    #[test]
    fn direction_axis_accessor() {
        assert_eq!(SwipeDirection::Left.axis(), Axis::Horizontal);
        assert_eq!(SwipeDirection::Right.axis(), Axis::Horizontal);
        assert_eq!(SwipeDirection::Up.axis(), Axis::Vertical);
        assert_eq!(SwipeDirection::Down.axis(), Axis::Vertical);
    }

    #[test]
    fn containment_is_edge_inclusive() {
        let rect = Rect::new(10.0, 20.0, 110.0, 220.0);
        assert!(contains_inclusive(rect, Point::new(10.0, 20.0)));
        assert!(contains_inclusive(rect, Point::new(110.0, 220.0)));
        assert!(contains_inclusive(rect, Point::new(110.0, 20.0)));
        assert!(contains_inclusive(rect, Point::new(60.0, 120.0)));
    }

    #[test]
    fn containment_rejects_points_past_any_edge() {
        let rect = Rect::new(10.0, 20.0, 110.0, 220.0);
        assert!(!contains_inclusive(rect, Point::new(9.9, 120.0)));
        assert!(!contains_inclusive(rect, Point::new(110.1, 120.0)));
        assert!(!contains_inclusive(rect, Point::new(60.0, 19.9)));
        assert!(!contains_inclusive(rect, Point::new(60.0, 220.1)));
    }
}
