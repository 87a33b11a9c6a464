// Copyright 2025 the Swipekit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deferred-completion task queue.
//!
//! Completion handlers must not run inside the contact-end call: the state
//! mutation performed there (clearing the session) has to be visible before
//! any consumer observes the gesture. The original host achieved that with
//! zero-delay deferral; here it is an explicit FIFO queue the host drains
//! once its own event handling has returned.

use smallvec::SmallVec;

use swipekit_gesture::{CompletedSwipe, SwipeCoordinates, SwipeDirection, SwipeTiers};

use crate::handlers::SwipeHandlers;

/// Which completion slot a deferred dispatch targets.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum CompletionKind {
    /// The base directional handler.
    Swipe,
    /// The short-tier handler.
    ShortSwipe,
    /// The long-tier handler.
    LongSwipe,
}

/// One deferred completion dispatch.
///
/// Carries its own coordinate snapshots: by delivery time the session that
/// produced it is already gone, and nothing may re-read it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PendingCompletion {
    /// Handler slot to deliver to.
    pub kind: CompletionKind,
    /// Direction of the completed swipe.
    pub direction: SwipeDirection,
    /// Origin-side snapshot.
    pub start: SwipeCoordinates,
    /// End snapshot.
    pub end: SwipeCoordinates,
}

/// FIFO queue of deferred completion dispatches.
///
/// Entries enqueued earlier are delivered earlier; one completed swipe
/// enqueues its base dispatch before its tier dispatch, so consumers see
/// base first. Nothing promises the two are delivered atomically — a host
/// may interleave other deferred work queued in the same tick.
#[derive(Debug, Default)]
pub struct DispatchQueue {
    // A gesture enqueues at most two entries, so this almost never spills.
    pending: SmallVec<[PendingCompletion; 4]>,
}

impl DispatchQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue every dispatch a completed swipe produces: the base entry,
    /// then one entry per tier label it carries.
    pub fn enqueue_swipe(&mut self, swipe: &CompletedSwipe) {
        self.push_entry(CompletionKind::Swipe, swipe);
        if swipe.tiers.contains(SwipeTiers::SHORT) {
            self.push_entry(CompletionKind::ShortSwipe, swipe);
        }
        if swipe.tiers.contains(SwipeTiers::LONG) {
            self.push_entry(CompletionKind::LongSwipe, swipe);
        }
    }

    fn push_entry(&mut self, kind: CompletionKind, swipe: &CompletedSwipe) {
        self.pending.push(PendingCompletion {
            kind,
            direction: swipe.direction,
            start: swipe.start,
            end: swipe.end,
        });
    }

    /// Number of undelivered dispatches.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// True if nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Drop all pending dispatches without delivering them.
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    /// Deliver every pending dispatch, FIFO, and return how many ran.
    ///
    /// Entries with no registered handler are consumed silently.
    pub fn drain(&mut self, handlers: &mut SwipeHandlers) -> usize {
        let count = self.pending.len();
        for entry in self.pending.drain(..) {
            handlers.invoke_completion(entry.kind, entry.direction, &entry.start, &entry.end);
        }
        count
    }
}
