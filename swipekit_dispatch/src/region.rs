// Copyright 2025 the Swipekit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-region binding: state machine + handlers + deferred queue.

use kurbo::{Point, Rect};

use swipekit_gesture::{SwipeConfig, SwipeResult, SwipeState};

use crate::handlers::SwipeHandlers;
use crate::queue::DispatchQueue;

/// A swipe-recognizing binding for one rectangular region.
///
/// Create one instance per bound region and feed it the platform's contact
/// stream, re-measuring the region's bounds for every move/end call. The
/// region owns all gesture state; there is no global storage, and dropping
/// the value (or calling [`SwipeRegion::reset`]) is a complete teardown.
///
/// Completed-gesture handlers do not run inside [`SwipeRegion::pointer_up`];
/// they are queued and run when the host calls [`SwipeRegion::flush`] after
/// its own event handling returns. Continuous-motion handlers run
/// synchronously inside [`SwipeRegion::pointer_move`].
#[derive(Debug)]
pub struct SwipeRegion {
    state: SwipeState,
    handlers: SwipeHandlers,
    queue: DispatchQueue,
}

impl SwipeRegion {
    /// Create a region binding with the default thresholds.
    pub fn new() -> Self {
        Self::with_config(SwipeConfig::default())
    }

    /// Create a region binding with custom thresholds.
    pub fn with_config(config: SwipeConfig) -> Self {
        Self {
            state: SwipeState::with_config(config),
            handlers: SwipeHandlers::new(),
            queue: DispatchQueue::new(),
        }
    }

    /// The handler table, for registration.
    pub fn handlers_mut(&mut self) -> &mut SwipeHandlers {
        &mut self.handlers
    }

    /// Read-only view of the underlying state machine.
    pub fn state(&self) -> &SwipeState {
        &self.state
    }

    /// Number of undelivered completion dispatches.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Feed a contact-start event. `bounds` is the region's rect as
    /// measured right now; it becomes the origin-side snapshot.
    pub fn pointer_down(&mut self, point: Point, timestamp: u64, bounds: Rect) {
        self.state.on_down(point, timestamp, bounds);
    }

    /// Feed a contact-move event, firing the continuous handler for the
    /// dominant direction synchronously.
    ///
    /// Returns `true` iff the sample was classified, i.e. it was inside
    /// `live_bounds` during an active session. Whether a handler was
    /// registered for the sampled direction does not change the result.
    pub fn pointer_move(&mut self, point: Point, live_bounds: Rect) -> bool {
        let Some(sample) = self.state.on_move(point, live_bounds) else {
            return false;
        };
        self.handlers
            .invoke_motion(sample.direction, &sample.start, &sample.current, sample.delta);
        true
    }

    /// Feed a contact-end event.
    ///
    /// Classifies the gesture, clears the session synchronously, and — for
    /// a recognized swipe — enqueues the base dispatch followed by any tier
    /// dispatches. Nothing is delivered until [`SwipeRegion::flush`].
    ///
    /// The returned [`SwipeResult`] lets the host observe cancellations and
    /// below-threshold releases, which produce no dispatch at all.
    pub fn pointer_up(&mut self, point: Point, timestamp: u64, live_bounds: Rect) -> SwipeResult {
        let result = self.state.on_up(point, timestamp, live_bounds);
        if let SwipeResult::Swipe(swipe) = &result {
            self.queue.enqueue_swipe(swipe);
        }
        result
    }

    /// Deliver all deferred completion dispatches, FIFO.
    ///
    /// Call this after the host's own event handling for the tick has
    /// completed. Returns the number of dispatches delivered.
    pub fn flush(&mut self) -> usize {
        self.queue.drain(&mut self.handlers)
    }

    /// Teardown/re-bind hook: drop the in-flight session and every
    /// undelivered dispatch. Registered handlers are kept.
    pub fn reset(&mut self) {
        self.state.cancel();
        self.queue.clear();
    }
}

impl Default for SwipeRegion {
    fn default() -> Self {
        Self::new()
    }
}
