// Copyright 2025 the Swipekit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipekit Dispatch: the callback surface over [`swipekit_gesture`].
//!
//! ## Overview
//!
//! The gesture core is a pure state machine that returns data. This crate
//! layers the consumer-facing contract on top:
//!
//! - [`SwipeHandlers`]: optional per-direction handlers — a base swipe
//!   handler, a short-tier handler, and a long-tier handler for each of the
//!   four directions, plus a per-direction continuous-motion handler.
//!   Unset handlers are `None`, and invoking an unset handler is a no-op;
//!   absence never raises.
//! - [`DispatchQueue`]: an explicit FIFO task queue for completion
//!   dispatches. Completion handlers never run inside the contact-end call;
//!   they are recorded as value entries (each capturing its own coordinate
//!   snapshots) and delivered when the host drains the queue, strictly
//!   after the enqueueing handler has returned.
//! - [`SwipeRegion`]: the per-region binding owning state machine, handlers,
//!   and queue. One instance per bound region; dropping it (or calling
//!   [`SwipeRegion::reset`]) releases every in-flight resource, so
//!   re-binding never leaks gesture state.
//!
//! ## Dispatch ordering
//!
//! Within one contact-end, the base directional dispatch is enqueued before
//! any tier dispatch, so it is delivered first. Entries from one drain run
//! FIFO, but nothing promises atomicity between them: a host is free to
//! interleave other deferred work it queued in the same tick.
//!
//! Continuous-motion handlers are different — they run synchronously inside
//! [`SwipeRegion::pointer_move`], exactly once per in-bounds sample.
//!
//! ## Threading model
//!
//! Single-threaded and cooperative. `pointer_*` methods are synchronous and
//! never block; the host calls [`SwipeRegion::flush`] after its own event
//! handling completes (its end of tick). The session is cleared
//! synchronously at contact-end regardless of when the queue drains, which
//! is why pending entries carry their own snapshots instead of re-reading
//! the session.
//!
//! ## Minimal example
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use kurbo::{Point, Rect};
//! use swipekit_dispatch::SwipeRegion;
//! use swipekit_gesture::SwipeDirection;
//!
//! let mut region = SwipeRegion::new();
//! let fired = Rc::new(Cell::new(false));
//! let seen = fired.clone();
//! region
//!     .handlers_mut()
//!     .on_swipe(SwipeDirection::Left, move |_start, _end| seen.set(true));
//!
//! let bounds = Rect::new(0.0, 0.0, 200.0, 200.0);
//! region.pointer_down(Point::new(150.0, 50.0), 0, bounds);
//! region.pointer_up(Point::new(50.0, 50.0), 100, bounds);
//!
//! // Completion dispatch is deferred until the host flushes.
//! assert!(!fired.get());
//! region.flush();
//! assert!(fired.get());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod handlers;
mod queue;
mod region;

pub use handlers::SwipeHandlers;
pub use queue::{CompletionKind, DispatchQueue, PendingCompletion};
pub use region::SwipeRegion;
