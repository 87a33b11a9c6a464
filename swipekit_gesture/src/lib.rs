// Copyright 2025 the Swipekit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipekit Gesture: a directional swipe classification state machine.
//!
//! This crate recognizes swipe/drag gestures from a raw contact stream
//! (down → move* → up) bound to one rectangular region. It is a pure core:
//! you feed it pointer samples plus the region's current bounds, and it
//! returns classification data. It does not listen to any platform, measure
//! any element, or invoke any callback — `swipekit_dispatch` layers the
//! callback surface on top.
//!
//! ## Model
//!
//! - [`SwipeState`] is a two-state machine per tracked region: idle, or
//!   tracking exactly one [`Session`]. A new contact-start unconditionally
//!   replaces any prior session (single-pointer model; there is no merging
//!   of overlapping contacts).
//! - [`SwipeState::on_move`] classifies the live displacement from the
//!   session *origin* (not the previous sample) and yields one
//!   [`MotionSample`] per in-bounds sample, with no threshold gating.
//! - [`SwipeState::on_up`] classifies the completed contact into a
//!   [`SwipeDirection`] on the dominant axis plus zero or more
//!   [`SwipeTiers`] labels, or reports why nothing was recognized
//!   ([`SwipeResult`]).
//!
//! ## Bounds policy
//!
//! The bounds guard is deliberately asymmetric. During motion an
//! out-of-bounds sample is dropped but the session survives, so a drag that
//! transiently crosses the region edge resumes when it re-enters. At
//! contact-end an out-of-bounds release cancels the whole gesture: a final
//! release outside the region means the user is not dropping on it.
//!
//! Callers re-measure the region at every move/end and pass the live rect;
//! the core never caches bounds (only the origin-side snapshot taken at
//! contact-start is retained, inside the session).
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use swipekit_gesture::{SwipeDirection, SwipeResult, SwipeState, SwipeTiers};
//!
//! let mut state = SwipeState::new();
//! let bounds = Rect::new(0.0, 0.0, 200.0, 200.0);
//!
//! // Contact starts at (150, 50) and releases at (50, 50) 100ms later.
//! state.on_down(Point::new(150.0, 50.0), 1_000, bounds);
//! let result = state.on_up(Point::new(50.0, 50.0), 1_100, bounds);
//!
//! match result {
//!     SwipeResult::Swipe(swipe) => {
//!         assert_eq!(swipe.direction, SwipeDirection::Left);
//!         // 100 units of travel meets the long-swipe distance.
//!         assert_eq!(swipe.tiers, SwipeTiers::LONG);
//!     }
//!     other => panic!("expected a swipe, got {other:?}"),
//! }
//! ```
//!
//! ## Edge-case policy
//!
//! These are load-bearing behaviors, reproduced exactly:
//!
//! - Dominant axis is horizontal strictly iff `|dx| > |dy|`; an exact tie
//!   resolves to vertical.
//! - A completed gesture whose dominant-axis magnitude does not *exceed*
//!   [`SwipeConfig::swipe_threshold`] is noise, not a swipe: no direction is
//!   reported at all.
//! - The short and long tiers are independent predicates over the same
//!   magnitude and duration. A swipe that is slow (`duration >=
//!   short_swipe_duration`) but below the long distance gets *neither* tier,
//!   only the base direction. That gap is intentional.
//!
//! Float inputs are assumed finite (no NaNs).
//!
//! This crate is `no_std` and does not allocate.

#![no_std]

mod classify;
mod geometry;
mod session;

pub use classify::{CompletedSwipe, MotionSample, SwipeConfig, SwipeResult, SwipeState, SwipeTiers};
pub use geometry::{Axis, SwipeDirection, axis_delta, contains_inclusive, direction_of, dominant_axis};
pub use session::{Session, SwipeCoordinates};
