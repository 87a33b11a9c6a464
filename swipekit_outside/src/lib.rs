// Copyright 2025 the Swipekit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipekit Outside: outside-interaction detection for a tracked region.
//!
//! Some consumers of a gesture-bound region also want to know when the user
//! presses anywhere *else* — to dismiss a panel, close a menu, and so on.
//! That check is a plain containment test against global pointer-down
//! events; it shares nothing with swipe session tracking, so it lives in its
//! own crate.
//!
//! Region membership uses the same edge-inclusive rule as the swipe bounds
//! guard: a press exactly on an edge belongs to the region and is therefore
//! *not* outside.
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use kurbo::{Point, Rect};
//! use swipekit_outside::OutsideObserver;
//!
//! let mut observer = OutsideObserver::new();
//! let dismissed = Rc::new(Cell::new(false));
//! let seen = dismissed.clone();
//! observer.on_outside_press(move |_point| seen.set(true));
//!
//! let panel = Rect::new(50.0, 50.0, 250.0, 150.0);
//!
//! // A press inside (or exactly on the edge of) the panel is not outside.
//! assert!(!observer.observe(panel, Point::new(250.0, 100.0)));
//! assert!(!dismissed.get());
//!
//! // A press elsewhere on the surface fires the handler.
//! assert!(observer.observe(panel, Point::new(10.0, 10.0)));
//! assert!(dismissed.get());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::boxed::Box;
use core::fmt;

use kurbo::{Point, Rect};

/// True iff a press at `point` landed outside `bounds`.
///
/// The strict complement of edge-inclusive containment: edge presses are
/// inside.
pub fn is_outside(bounds: Rect, point: Point) -> bool {
    point.x < bounds.x0 || point.x > bounds.x1 || point.y < bounds.y0 || point.y > bounds.y1
}

/// Observer for global pointer-down events, orthogonal to swipe tracking.
///
/// Owns one optional handler. Feed it every global pointer-down together
/// with the observed region's live bounds; presses outside the bounds
/// invoke the handler with the offending point. With no handler registered,
/// observation still reports the containment verdict and is otherwise a
/// no-op.
#[derive(Default)]
pub struct OutsideObserver {
    handler: Option<Box<dyn FnMut(Point)>>,
}

impl OutsideObserver {
    /// Create an observer with no handler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the outside-press handler, replacing any prior one.
    pub fn on_outside_press(&mut self, handler: impl FnMut(Point) + 'static) -> &mut Self {
        self.handler = Some(Box::new(handler));
        self
    }

    /// Remove the handler; subsequent observations only report the verdict.
    pub fn clear_handler(&mut self) {
        self.handler = None;
    }

    /// Process one global pointer-down against the region's live bounds.
    ///
    /// Returns `true` iff the press was outside; the handler (if any) is
    /// invoked exactly in that case.
    pub fn observe(&mut self, bounds: Rect, point: Point) -> bool {
        let outside = is_outside(bounds, point);
        if outside
            && let Some(handler) = self.handler.as_mut()
        {
            handler(point);
        }
        outside
    }
}

impl fmt::Debug for OutsideObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutsideObserver")
            .field("handler", &self.handler.is_some())
            .finish()
    }
}
