// Copyright 2025 the Swipekit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The swipe classification state machine.
//!
//! [`SwipeState`] tracks at most one in-flight contact per region and turns
//! raw down/move/up samples into classification data:
//!
//! - each in-bounds move yields a [`MotionSample`] (continuous motion,
//!   ungated by any threshold);
//! - contact-end yields a [`SwipeResult`]: a classified [`CompletedSwipe`],
//!   or one of three "nothing recognized" outcomes.
//!
//! ## Classification rules
//!
//! At contact-end, with `delta = end - origin` and `duration = end_time -
//! start_time`:
//!
//! 1. The dominant axis is selected (`|dx| > |dy|` → horizontal, ties →
//!    vertical) and only that axis's direction can be reported; the other
//!    axis is silent for this contact.
//! 2. If the dominant-axis magnitude does not exceed
//!    [`SwipeConfig::swipe_threshold`], the motion is a tap or noise:
//!    [`SwipeResult::BelowThreshold`], with no direction at all.
//! 3. Otherwise the swipe's direction is the sign of the dominant-axis
//!    delta, and two independent tier predicates are evaluated against the
//!    same magnitude and duration:
//!    - short: `duration < short_swipe_duration && magnitude <
//!      long_swipe_min_distance`;
//!    - long: `magnitude >= long_swipe_min_distance`.
//!
//! The two tiers are mutually exclusive on magnitude, but a slow swipe below
//! the long distance earns *neither* tier — only the base direction. That
//! gap is deliberate and preserved.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use swipekit_gesture::{SwipeDirection, SwipeResult, SwipeState, SwipeTiers};
//!
//! let mut state = SwipeState::new();
//! let bounds = Rect::new(0.0, 0.0, 300.0, 100.0);
//!
//! state.on_down(Point::new(21.0, 50.0), 0, bounds);
//!
//! // In-bounds motion reports continuously, from the origin.
//! let sample = state.on_move(Point::new(60.0, 50.0), bounds).unwrap();
//! assert_eq!(sample.direction, SwipeDirection::Right);
//! assert_eq!(sample.delta, 39.0);
//!
//! // 98 units in 499ms: a short right swipe.
//! match state.on_up(Point::new(119.0, 50.0), 499, bounds) {
//!     SwipeResult::Swipe(swipe) => {
//!         assert_eq!(swipe.direction, SwipeDirection::Right);
//!         assert_eq!(swipe.tiers, SwipeTiers::SHORT);
//!     }
//!     other => panic!("expected a swipe, got {other:?}"),
//! }
//! ```

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect};

use crate::geometry::{Axis, SwipeDirection, axis_delta, contains_inclusive, direction_of, dominant_axis};
use crate::session::{Session, SwipeCoordinates};

/// Classification thresholds, immutable per state machine.
///
/// Distances are in the same units as the input points (typically logical
/// pixels); durations are in milliseconds.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SwipeConfig {
    /// Minimum dominant-axis displacement (exclusive) for any swipe to be
    /// recognized at all. At or below this, contact-end reports nothing.
    pub swipe_threshold: f64,
    /// Maximum elapsed time (exclusive) for the short tier.
    pub short_swipe_duration: u64,
    /// Minimum dominant-axis displacement (inclusive) for the long tier.
    /// The short tier additionally requires staying below this.
    pub long_swipe_min_distance: f64,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: 20.0,
            short_swipe_duration: 500,
            long_swipe_min_distance: 100.0,
        }
    }
}

bitflags::bitflags! {
    /// Magnitude-tier labels attached to a completed swipe.
    ///
    /// Zero or more of these accompany the base direction. `SHORT` and
    /// `LONG` never appear together (they are disjoint on magnitude), but a
    /// slow swipe below the long distance carries neither.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct SwipeTiers: u8 {
        /// Completed quickly over a sub-long distance.
        const SHORT = 0b0000_0001;
        /// Covered at least the long-swipe distance, at any speed.
        const LONG  = 0b0000_0010;
    }
}

/// One continuous-motion report, produced per in-bounds move sample.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MotionSample {
    /// Origin-side snapshot (bounds as measured at contact-start).
    pub start: SwipeCoordinates,
    /// Live snapshot (bounds as measured for this sample).
    pub current: SwipeCoordinates,
    /// Dominant axis of the displacement so far.
    pub axis: Axis,
    /// Direction on the dominant axis.
    pub direction: SwipeDirection,
    /// Signed displacement from the session origin along the dominant axis.
    pub delta: f64,
}

/// A classified, completed swipe.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CompletedSwipe {
    /// Direction on the dominant axis.
    pub direction: SwipeDirection,
    /// Magnitude-tier labels (possibly empty).
    pub tiers: SwipeTiers,
    /// Origin-side snapshot (bounds as measured at contact-start).
    pub start: SwipeCoordinates,
    /// End snapshot (bounds as measured at contact-end).
    pub end: SwipeCoordinates,
    /// Signed displacement from origin to end along the dominant axis.
    pub delta: f64,
    /// Elapsed time between contact-start and contact-end, in milliseconds.
    pub duration: u64,
}

/// Outcome of contact-end processing.
///
/// Only [`SwipeResult::Swipe`] reports a gesture; every other variant means
/// "no gesture reported", distinguished so callers (and tests) can tell the
/// degradation modes apart. None of them is an error.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SwipeResult {
    /// A swipe was recognized.
    Swipe(CompletedSwipe),
    /// Dominant-axis magnitude did not exceed the swipe threshold; the
    /// contact was a tap or noise.
    BelowThreshold,
    /// The release landed outside the live bounds of the tracked region;
    /// the whole gesture is cancelled.
    Cancelled,
    /// There was no active session (for example an end with no prior start).
    NoSession,
}

/// Swipe classification state machine for one tracked region.
///
/// Two states: idle (no session) and tracking (one [`Session`]). The session
/// slot is owned by the instance — create one `SwipeState` per bound region
/// rather than sharing one globally.
#[derive(Clone, Debug)]
pub struct SwipeState {
    /// The single in-flight contact, if any.
    session: Option<Session>,
    config: SwipeConfig,
}

impl SwipeState {
    /// Create a state machine with the default thresholds
    /// (`swipe_threshold` 20, `short_swipe_duration` 500ms,
    /// `long_swipe_min_distance` 100).
    pub fn new() -> Self {
        Self::with_config(SwipeConfig::default())
    }

    /// Create a state machine with custom thresholds.
    pub const fn with_config(config: SwipeConfig) -> Self {
        Self {
            session: None,
            config,
        }
    }

    /// The configured thresholds.
    pub const fn config(&self) -> &SwipeConfig {
        &self.config
    }

    /// True while a contact is being tracked.
    pub const fn is_tracking(&self) -> bool {
        self.session.is_some()
    }

    /// The active session, if any.
    pub const fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Record a contact-start.
    ///
    /// Begins a new session, unconditionally replacing any prior one.
    /// `bounds` is the region's rect at this moment; it is snapshotted into
    /// the session for origin-side reporting.
    pub fn on_down(&mut self, point: Point, timestamp: u64, bounds: Rect) {
        self.session = Some(Session::new(point, timestamp, bounds));
    }

    /// Process a contact-move sample.
    ///
    /// Returns exactly one [`MotionSample`] per in-bounds sample, measured
    /// from the session origin. Returns `None` when idle, or when the sample
    /// lies outside `live_bounds` — in the latter case the session is
    /// retained, so the gesture resumes (against the same origin) if the
    /// pointer re-enters the region.
    pub fn on_move(&mut self, point: Point, live_bounds: Rect) -> Option<MotionSample> {
        let session = self.session.as_ref()?;
        if !contains_inclusive(live_bounds, point) {
            // Transient exits are tolerated; only release outside cancels.
            return None;
        }
        let delta = point - session.origin;
        let axis = dominant_axis(delta);
        let signed = axis_delta(axis, delta);
        Some(MotionSample {
            start: session.coordinates(),
            current: SwipeCoordinates {
                rect: live_bounds,
                point,
            },
            axis,
            direction: direction_of(axis, signed),
            delta: signed,
        })
    }

    /// Process a contact-end and classify the gesture.
    ///
    /// The session is cleared on every path that had one, before this
    /// returns; a caller holding the result holds everything there is to
    /// know about the contact.
    pub fn on_up(&mut self, point: Point, timestamp: u64, live_bounds: Rect) -> SwipeResult {
        let Some(session) = self.session.take() else {
            return SwipeResult::NoSession;
        };

        if !contains_inclusive(live_bounds, point) {
            return SwipeResult::Cancelled;
        }

        let delta = point - session.origin;
        let axis = dominant_axis(delta);
        let signed = axis_delta(axis, delta);
        let magnitude = signed.abs();

        if magnitude <= self.config.swipe_threshold {
            return SwipeResult::BelowThreshold;
        }

        let duration = timestamp.saturating_sub(session.start_time);

        let mut tiers = SwipeTiers::empty();
        if duration < self.config.short_swipe_duration && magnitude < self.config.long_swipe_min_distance
        {
            tiers |= SwipeTiers::SHORT;
        }
        if magnitude >= self.config.long_swipe_min_distance {
            tiers |= SwipeTiers::LONG;
        }

        SwipeResult::Swipe(CompletedSwipe {
            direction: direction_of(axis, signed),
            tiers,
            start: session.coordinates(),
            end: SwipeCoordinates {
                rect: live_bounds,
                point,
            },
            delta: signed,
            duration,
        })
    }

    /// Drop the active session without reporting anything.
    ///
    /// Returns `true` if a session was active.
    pub fn cancel(&mut self) -> bool {
        self.session.take().is_some()
    }
}

impl Default for SwipeState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Rect = Rect::new(0.0, 0.0, 300.0, 300.0);

    fn tracking(origin: Point) -> SwipeState {
        let mut state = SwipeState::new();
        state.on_down(origin, 1_000, BOUNDS);
        state
    }

    fn completed(result: SwipeResult) -> CompletedSwipe {
        match result {
            SwipeResult::Swipe(swipe) => swipe,
            other => panic!("expected a swipe, got {other:?}"),
        }
    }

    #[test]
    fn end_without_start_reports_nothing() {
        let mut state = SwipeState::new();
        let result = state.on_up(Point::new(50.0, 50.0), 1_000, BOUNDS);
        assert_eq!(result, SwipeResult::NoSession);
    }

    #[test]
    fn magnitude_at_threshold_is_not_a_swipe() {
        let mut state = tracking(Point::new(100.0, 100.0));
        // Exactly 20 units: at the threshold, still noise.
        let result = state.on_up(Point::new(120.0, 100.0), 1_100, BOUNDS);
        assert_eq!(result, SwipeResult::BelowThreshold);
        assert!(!state.is_tracking());
    }

    #[test]
    fn magnitude_just_over_threshold_is_a_swipe() {
        let mut state = tracking(Point::new(100.0, 100.0));
        let swipe = completed(state.on_up(Point::new(121.0, 100.0), 1_100, BOUNDS));
        assert_eq!(swipe.direction, SwipeDirection::Right);
        assert_eq!(swipe.delta, 21.0);
    }

    #[test]
    fn only_dominant_axis_reports() {
        let mut state = tracking(Point::new(100.0, 100.0));
        // dx = 30, dy = -60: vertical dominates, horizontal is silent.
        let swipe = completed(state.on_up(Point::new(130.0, 40.0), 1_100, BOUNDS));
        assert_eq!(swipe.direction, SwipeDirection::Up);
        assert_eq!(swipe.delta, -60.0);
    }

    #[test]
    fn exact_tie_reports_vertical() {
        let mut state = tracking(Point::new(100.0, 100.0));
        // |dx| == |dy| == 50: vertical wins the tie.
        let swipe = completed(state.on_up(Point::new(150.0, 150.0), 1_100, BOUNDS));
        assert_eq!(swipe.direction, SwipeDirection::Down);
    }

    #[test]
    fn long_left_swipe_scenario() {
        // Start (150, 50), end (50, 50), 100ms: dx = -100.
        let mut state = tracking(Point::new(150.0, 50.0));
        let swipe = completed(state.on_up(Point::new(50.0, 50.0), 1_100, BOUNDS));
        assert_eq!(swipe.direction, SwipeDirection::Left);
        assert_eq!(swipe.tiers, SwipeTiers::LONG);
        assert_eq!(swipe.delta, -100.0);
        assert_eq!(swipe.duration, 100);
    }

    #[test]
    fn short_right_swipe_scenario() {
        // Start (21, 50), end (119, 50), 499ms: 98 units in under 500ms.
        let mut state = tracking(Point::new(21.0, 50.0));
        let swipe = completed(state.on_up(Point::new(119.0, 50.0), 1_499, BOUNDS));
        assert_eq!(swipe.direction, SwipeDirection::Right);
        assert_eq!(swipe.tiers, SwipeTiers::SHORT);
    }

    #[test]
    fn slow_sub_long_swipe_earns_no_tier() {
        // 99 units at exactly the short-duration limit: base only.
        let mut state = tracking(Point::new(0.0, 100.0));
        let swipe = completed(state.on_up(Point::new(99.0, 100.0), 1_500, BOUNDS));
        assert_eq!(swipe.direction, SwipeDirection::Right);
        assert_eq!(swipe.tiers, SwipeTiers::empty());
    }

    #[test]
    fn long_distance_at_any_speed_is_long_never_short() {
        let mut state = tracking(Point::new(0.0, 100.0));
        // 150 units over 10 seconds: long, not short.
        let swipe = completed(state.on_up(Point::new(150.0, 100.0), 11_000, BOUNDS));
        assert_eq!(swipe.tiers, SwipeTiers::LONG);

        let mut state = tracking(Point::new(0.0, 100.0));
        // 150 units in 50ms: still long only; tiers are disjoint on magnitude.
        let swipe = completed(state.on_up(Point::new(150.0, 100.0), 1_050, BOUNDS));
        assert_eq!(swipe.tiers, SwipeTiers::LONG);
    }

    #[test]
    fn exact_long_distance_is_long() {
        let mut state = tracking(Point::new(0.0, 0.0));
        let swipe = completed(state.on_up(Point::new(0.0, 100.0), 1_100, BOUNDS));
        assert_eq!(swipe.direction, SwipeDirection::Down);
        assert_eq!(swipe.tiers, SwipeTiers::LONG);
    }

    #[test]
    fn release_outside_bounds_cancels() {
        let mut state = tracking(Point::new(150.0, 150.0));
        let result = state.on_up(Point::new(310.0, 150.0), 1_100, BOUNDS);
        assert_eq!(result, SwipeResult::Cancelled);
        assert!(!state.is_tracking());
    }

    #[test]
    fn move_outside_bounds_is_dropped_but_session_survives() {
        let mut state = tracking(Point::new(150.0, 150.0));

        assert!(state.on_move(Point::new(310.0, 150.0), BOUNDS).is_none());
        assert!(state.is_tracking());

        // Re-entry resumes against the original origin.
        let sample = state.on_move(Point::new(250.0, 150.0), BOUNDS).unwrap();
        assert_eq!(sample.delta, 100.0);
        assert_eq!(sample.direction, SwipeDirection::Right);
    }

    #[test]
    fn move_without_session_is_ignored() {
        let mut state = SwipeState::new();
        assert!(state.on_move(Point::new(50.0, 50.0), BOUNDS).is_none());
    }

    #[test]
    fn motion_is_not_threshold_gated() {
        let mut state = tracking(Point::new(100.0, 100.0));
        // One unit of travel still produces a sample.
        let sample = state.on_move(Point::new(100.0, 101.0), BOUNDS).unwrap();
        assert_eq!(sample.axis, Axis::Vertical);
        assert_eq!(sample.delta, 1.0);
    }

    #[test]
    fn motion_measures_from_origin_not_previous_sample() {
        let mut state = tracking(Point::new(100.0, 100.0));
        state.on_move(Point::new(140.0, 100.0), BOUNDS);
        let sample = state.on_move(Point::new(180.0, 100.0), BOUNDS).unwrap();
        assert_eq!(sample.delta, 80.0);
    }

    #[test]
    fn snapshots_track_the_relevant_moment() {
        let mut state = SwipeState::new();
        let origin_rect = Rect::new(0.0, 0.0, 300.0, 300.0);
        state.on_down(Point::new(150.0, 150.0), 1_000, origin_rect);

        // The region shifted mid-gesture; the live rect still contains the
        // pointer, the origin snapshot stays as measured at contact-start.
        let live_rect = Rect::new(10.0, 0.0, 310.0, 300.0);
        let sample = state.on_move(Point::new(200.0, 150.0), live_rect).unwrap();
        assert_eq!(sample.start.rect, origin_rect);
        assert_eq!(sample.current.rect, live_rect);

        let swipe = completed(state.on_up(Point::new(250.0, 150.0), 1_100, live_rect));
        assert_eq!(swipe.start.rect, origin_rect);
        assert_eq!(swipe.start.point, Point::new(150.0, 150.0));
        assert_eq!(swipe.end.rect, live_rect);
        assert_eq!(swipe.end.point, Point::new(250.0, 150.0));
    }

    #[test]
    fn new_down_replaces_prior_session() {
        let mut state = tracking(Point::new(10.0, 10.0));
        state.on_down(Point::new(200.0, 200.0), 2_000, BOUNDS);
        let swipe = completed(state.on_up(Point::new(100.0, 200.0), 2_050, BOUNDS));
        // Classified against the second origin, not the first.
        assert_eq!(swipe.direction, SwipeDirection::Left);
        assert_eq!(swipe.delta, -100.0);
        assert_eq!(swipe.duration, 50);
    }

    #[test]
    fn cancel_drops_session() {
        let mut state = tracking(Point::new(10.0, 10.0));
        assert!(state.cancel());
        assert!(!state.cancel());
        assert_eq!(
            state.on_up(Point::new(200.0, 10.0), 1_100, BOUNDS),
            SwipeResult::NoSession
        );
    }

    #[test]
    fn duration_saturates_on_clock_skew() {
        let mut state = SwipeState::new();
        state.on_down(Point::new(0.0, 0.0), 1_000, BOUNDS);
        let swipe = completed(state.on_up(Point::new(50.0, 0.0), 900, BOUNDS));
        assert_eq!(swipe.duration, 0);
        // Duration 0 is under the short limit and 50 is under the long
        // distance, so this lands in the short tier.
        assert_eq!(swipe.tiers, SwipeTiers::SHORT);
    }

    #[test]
    fn custom_config_is_honored() {
        let config = SwipeConfig {
            swipe_threshold: 5.0,
            short_swipe_duration: 200,
            long_swipe_min_distance: 40.0,
        };
        let mut state = SwipeState::with_config(config);
        state.on_down(Point::new(0.0, 0.0), 0, BOUNDS);
        let swipe = completed(state.on_up(Point::new(0.0, 41.0), 300, BOUNDS));
        assert_eq!(swipe.direction, SwipeDirection::Down);
        assert_eq!(swipe.tiers, SwipeTiers::LONG);
    }
}
