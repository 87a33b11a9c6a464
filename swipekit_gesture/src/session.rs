// Copyright 2025 the Swipekit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Session state for one in-flight contact, plus the coordinates snapshot
//! handed to consumers.

use kurbo::{Point, Rect};

/// Region bounds and pointer position captured at one moment of a gesture.
///
/// Consumers get one of these for the start of a gesture (bounds as measured
/// at contact-start) and one for the current/end moment (bounds as measured
/// live). Comparing the two lets a consumer correlate gesture geometry with
/// the region's layout even when the region moves or resizes mid-gesture.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SwipeCoordinates {
    /// Bounds of the tracked region at this moment.
    pub rect: Rect,
    /// The literal pointer position.
    pub point: Point,
}

/// Tracked state of one in-flight contact.
///
/// Created at contact-start and consumed at contact-end or cancellation; at
/// most one exists per tracked region at a time. The origin-side rect is a
/// snapshot and is deliberately *not* re-measured during the session, so
/// "start" coordinates always describe the region as it was when the finger
/// went down.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Session {
    /// Pointer position at contact-start.
    pub origin: Point,
    /// Timestamp at contact-start, in milliseconds.
    pub start_time: u64,
    /// Bounds of the tracked region at contact-start.
    pub origin_rect: Rect,
}

impl Session {
    /// Record a new session. No validation is performed; the caller
    /// guarantees a real contact event.
    pub const fn new(origin: Point, start_time: u64, origin_rect: Rect) -> Self {
        Self {
            origin,
            start_time,
            origin_rect,
        }
    }

    /// Origin-side coordinates snapshot.
    pub const fn coordinates(&self) -> SwipeCoordinates {
        SwipeCoordinates {
            rect: self.origin_rect,
            point: self.origin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinates_use_origin_snapshot() {
        let session = Session::new(Point::new(5.0, 6.0), 42, Rect::new(0.0, 0.0, 10.0, 10.0));
        let coords = session.coordinates();
        assert_eq!(coords.point, Point::new(5.0, 6.0));
        assert_eq!(coords.rect, Rect::new(0.0, 0.0, 10.0, 10.0));
    }
}
