// Copyright 2025 the Swipekit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Optional per-direction handler tables.

use alloc::boxed::Box;
use core::fmt;

use swipekit_gesture::{SwipeCoordinates, SwipeDirection};

use crate::queue::CompletionKind;

/// Boxed handler for a completed swipe: `(start, end)` snapshots.
type CompletionHandler = Box<dyn FnMut(&SwipeCoordinates, &SwipeCoordinates)>;

/// Boxed handler for continuous motion: `(start, current, signed delta)`.
type MotionHandler = Box<dyn FnMut(&SwipeCoordinates, &SwipeCoordinates, f64)>;

/// One optional slot per direction.
struct DirectionTable<T> {
    left: Option<T>,
    right: Option<T>,
    up: Option<T>,
    down: Option<T>,
}

impl<T> DirectionTable<T> {
    const fn empty() -> Self {
        Self {
            left: None,
            right: None,
            up: None,
            down: None,
        }
    }

    fn slot_mut(&mut self, direction: SwipeDirection) -> &mut Option<T> {
        match direction {
            SwipeDirection::Left => &mut self.left,
            SwipeDirection::Right => &mut self.right,
            SwipeDirection::Up => &mut self.up,
            SwipeDirection::Down => &mut self.down,
        }
    }

    fn is_set(&self, direction: SwipeDirection) -> bool {
        match direction {
            SwipeDirection::Left => self.left.is_some(),
            SwipeDirection::Right => self.right.is_some(),
            SwipeDirection::Up => self.up.is_some(),
            SwipeDirection::Down => self.down.is_some(),
        }
    }
}

impl<T> Default for DirectionTable<T> {
    fn default() -> Self {
        Self::empty()
    }
}

/// The optional callback surface for one tracked region.
///
/// Twelve completion slots (base, short tier, long tier × four directions)
/// and four continuous-motion slots. Every slot starts unset; invoking an
/// unset slot is a no-op rather than an error, which keeps "no handler" a
/// type-checkable state instead of an always-present empty closure.
#[derive(Default)]
pub struct SwipeHandlers {
    swipe: DirectionTable<CompletionHandler>,
    short_swipe: DirectionTable<CompletionHandler>,
    long_swipe: DirectionTable<CompletionHandler>,
    while_swipe: DirectionTable<MotionHandler>,
}

impl SwipeHandlers {
    /// Create an empty handler table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the base handler for completed swipes in `direction`,
    /// replacing any prior one.
    pub fn on_swipe(
        &mut self,
        direction: SwipeDirection,
        handler: impl FnMut(&SwipeCoordinates, &SwipeCoordinates) + 'static,
    ) -> &mut Self {
        *self.swipe.slot_mut(direction) = Some(Box::new(handler));
        self
    }

    /// Register the short-tier handler for completed swipes in `direction`.
    pub fn on_short_swipe(
        &mut self,
        direction: SwipeDirection,
        handler: impl FnMut(&SwipeCoordinates, &SwipeCoordinates) + 'static,
    ) -> &mut Self {
        *self.short_swipe.slot_mut(direction) = Some(Box::new(handler));
        self
    }

    /// Register the long-tier handler for completed swipes in `direction`.
    pub fn on_long_swipe(
        &mut self,
        direction: SwipeDirection,
        handler: impl FnMut(&SwipeCoordinates, &SwipeCoordinates) + 'static,
    ) -> &mut Self {
        *self.long_swipe.slot_mut(direction) = Some(Box::new(handler));
        self
    }

    /// Register the continuous-motion handler for in-progress movement in
    /// `direction`.
    pub fn on_while_swipe(
        &mut self,
        direction: SwipeDirection,
        handler: impl FnMut(&SwipeCoordinates, &SwipeCoordinates, f64) + 'static,
    ) -> &mut Self {
        *self.while_swipe.slot_mut(direction) = Some(Box::new(handler));
        self
    }

    /// Invoke one completion slot, if set.
    pub(crate) fn invoke_completion(
        &mut self,
        kind: CompletionKind,
        direction: SwipeDirection,
        start: &SwipeCoordinates,
        end: &SwipeCoordinates,
    ) {
        let table = match kind {
            CompletionKind::Swipe => &mut self.swipe,
            CompletionKind::ShortSwipe => &mut self.short_swipe,
            CompletionKind::LongSwipe => &mut self.long_swipe,
        };
        if let Some(handler) = table.slot_mut(direction) {
            handler(start, end);
        }
    }

    /// Invoke the continuous-motion slot for `direction`, if set.
    pub(crate) fn invoke_motion(
        &mut self,
        direction: SwipeDirection,
        start: &SwipeCoordinates,
        current: &SwipeCoordinates,
        delta: f64,
    ) {
        if let Some(handler) = self.while_swipe.slot_mut(direction) {
            handler(start, current, delta);
        }
    }
}

impl fmt::Debug for SwipeHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let set = |table: &DirectionTable<CompletionHandler>| {
            SwipeDirection::ALL
                .iter()
                .filter(|d| table.is_set(**d))
                .count()
        };
        f.debug_struct("SwipeHandlers")
            .field("swipe", &set(&self.swipe))
            .field("short_swipe", &set(&self.short_swipe))
            .field("long_swipe", &set(&self.long_swipe))
            .field(
                "while_swipe",
                &SwipeDirection::ALL
                    .iter()
                    .filter(|d| self.while_swipe.is_set(**d))
                    .count(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use core::cell::Cell;
    use kurbo::{Point, Rect};

    fn coords() -> SwipeCoordinates {
        SwipeCoordinates {
            rect: Rect::new(0.0, 0.0, 100.0, 100.0),
            point: Point::new(50.0, 50.0),
        }
    }

    #[test]
    fn unset_slots_are_noops() {
        let mut handlers = SwipeHandlers::new();
        let c = coords();
        // Nothing registered anywhere; none of these may panic.
        for direction in SwipeDirection::ALL {
            handlers.invoke_completion(CompletionKind::Swipe, direction, &c, &c);
            handlers.invoke_completion(CompletionKind::ShortSwipe, direction, &c, &c);
            handlers.invoke_completion(CompletionKind::LongSwipe, direction, &c, &c);
            handlers.invoke_motion(direction, &c, &c, 0.0);
        }
    }

    #[test]
    fn slots_are_per_direction_and_per_kind() {
        let mut handlers = SwipeHandlers::new();
        let hits = Rc::new(Cell::new(0_u32));

        let seen = hits.clone();
        handlers.on_swipe(SwipeDirection::Left, move |_, _| seen.set(seen.get() + 1));

        let c = coords();
        handlers.invoke_completion(CompletionKind::Swipe, SwipeDirection::Left, &c, &c);
        assert_eq!(hits.get(), 1);

        // Other directions and other kinds stay silent.
        handlers.invoke_completion(CompletionKind::Swipe, SwipeDirection::Right, &c, &c);
        handlers.invoke_completion(CompletionKind::ShortSwipe, SwipeDirection::Left, &c, &c);
        handlers.invoke_completion(CompletionKind::LongSwipe, SwipeDirection::Left, &c, &c);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn registration_replaces_prior_handler() {
        let mut handlers = SwipeHandlers::new();
        let first = Rc::new(Cell::new(0_u32));
        let second = Rc::new(Cell::new(0_u32));

        let seen = first.clone();
        handlers.on_swipe(SwipeDirection::Up, move |_, _| seen.set(seen.get() + 1));
        let seen = second.clone();
        handlers.on_swipe(SwipeDirection::Up, move |_, _| seen.set(seen.get() + 1));

        let c = coords();
        handlers.invoke_completion(CompletionKind::Swipe, SwipeDirection::Up, &c, &c);
        assert_eq!(first.get(), 0);
        assert_eq!(second.get(), 1);
    }

    #[test]
    fn motion_handler_receives_delta() {
        let mut handlers = SwipeHandlers::new();
        let last = Rc::new(Cell::new(0.0_f64));

        let seen = last.clone();
        handlers.on_while_swipe(SwipeDirection::Down, move |_, _, delta| seen.set(delta));

        let c = coords();
        handlers.invoke_motion(SwipeDirection::Down, &c, &c, 37.5);
        assert_eq!(last.get(), 37.5);
    }
}
