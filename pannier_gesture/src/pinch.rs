// Copyright 2025 the Pannier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinch state helper: compute scale factors from two-pointer span changes.
//!
//! This recognizer is independent of [`crate::pan`]: the pan arithmetic never
//! consumes its output. Adapters that want pinch-to-zoom feed both state
//! machines from the same event stream and combine the results themselves.
//!
//! ## Usage
//!
//! 1) When a second pointer goes down, call [`PinchTracker::begin`] with both
//!    positions.
//! 2) On each move, call [`PinchTracker::update`] to get the incremental
//!    scale factor since the last update.
//! 3) Optionally call [`PinchTracker::total_scale`] for the cumulative factor
//!    relative to the initial span.
//! 4) When either pointer lifts, call [`PinchTracker::end`].
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use pannier_gesture::pinch::PinchTracker;
//!
//! let mut pinch = PinchTracker::default();
//!
//! // Two fingers down, 10 units apart.
//! pinch.begin(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
//! assert!(pinch.is_pinching());
//!
//! // Fingers spread to 20 units apart: scale factor 2.
//! let factor = pinch.update(Point::new(0.0, 0.0), Point::new(20.0, 0.0));
//! assert_eq!(factor, Some(2.0));
//! ```

use kurbo::Point;

/// Spans at or below this are treated as degenerate and produce no factor.
const MIN_SPAN: f64 = 1e-9;

/// Tracks the span between two pointers and derives scale factors.
#[derive(Clone, Copy, Debug, Default)]
pub struct PinchTracker {
    /// Span captured when the pinch began.
    initial_span: Option<f64>,
    /// Span as of the last update.
    last_span: Option<f64>,
}

impl PinchTracker {
    /// Starts tracking a pinch from two pointer positions.
    pub fn begin(&mut self, a: Point, b: Point) {
        let span = a.distance(b);
        self.initial_span = Some(span);
        self.last_span = Some(span);
    }

    /// Updates the pinch with new pointer positions, returning the scale
    /// factor since the last update.
    ///
    /// Returns `None` when no pinch is active or when the previous span is
    /// degenerate (both pointers at effectively the same position).
    pub fn update(&mut self, a: Point, b: Point) -> Option<f64> {
        self.initial_span?;
        let span = a.distance(b);
        let last = self.last_span.replace(span)?;
        if last <= MIN_SPAN {
            return None;
        }
        Some(span / last)
    }

    /// Returns the cumulative scale factor relative to the initial span.
    ///
    /// Returns `None` when no pinch is active or when the initial span is
    /// degenerate.
    #[must_use]
    pub fn total_scale(&self, a: Point, b: Point) -> Option<f64> {
        let initial = self.initial_span?;
        if initial <= MIN_SPAN {
            return None;
        }
        Some(a.distance(b) / initial)
    }

    /// Ends the current pinch and resets state.
    pub fn end(&mut self) {
        self.initial_span = None;
        self.last_span = None;
    }

    /// Returns `true` while a pinch is active.
    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.initial_span.is_some()
    }
}
