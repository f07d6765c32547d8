// Copyright 2025 the Pannier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan state helper: fold drag events into a persistent translation offset.
//!
//! ## Usage
//!
//! 1) On a layout (or re-layout) notification, call [`PanTracker::recenter`]
//!    with the view's new bounds.
//! 2) On drag start, call [`PanTracker::drag_start`] with the touch point.
//! 3) On each drag move, call [`PanTracker::drag_move`] and forward the
//!    returned [`PanResponse`] flags to the host (typically a redraw request).
//! 4) On drag end, call [`PanTracker::drag_end`]; the response carries both
//!    [`PanResponse::REDRAW`] and [`PanResponse::ACTIVATE`].
//! 5) At draw time, read [`PanTracker::offset`] and apply it to the surface.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Rect};
//! use pannier_gesture::pan::{PanResponse, PanTracker};
//!
//! let mut pan = PanTracker::new();
//! pan.recenter(Rect::new(0.0, 0.0, 200.0, 100.0));
//! assert_eq!(pan.offset(), (100.0, 50.0).into());
//!
//! // Drag from (110, 60) to (130, 90).
//! pan.drag_start(Point::new(110.0, 60.0));
//! let response = pan.drag_move(Point::new(130.0, 90.0));
//! assert!(response.contains(PanResponse::REDRAW));
//! assert_eq!(pan.offset(), (120.0, 80.0).into());
//!
//! let response = pan.drag_end(Point::new(130.0, 90.0));
//! assert!(response.contains(PanResponse::ACTIVATE));
//! assert_eq!(pan.committed_offset(), (120.0, 80.0).into());
//! ```

use kurbo::{Point, Rect, Vec2};

bitflags::bitflags! {
    /// What the host should do in response to a pan operation.
    ///
    /// Adapters translate these flags into host-framework calls; the tracker
    /// itself performs no side effects.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct PanResponse: u8 {
        /// The offset changed enough that the surface should be redrawn.
        const REDRAW = 1 << 0;
        /// Emit the host's synthetic activation (click/accessibility) event.
        const ACTIVATE = 1 << 1;
    }
}

/// Configuration for a [`PanTracker`].
///
/// This is plain per-instance state; there is no process-wide configuration.
#[derive(Clone, Copy, Debug)]
pub struct PanConfig {
    /// Squared displacement (from the drag-start point) above which a drag
    /// move reports [`PanResponse::REDRAW`].
    ///
    /// The default of `1.0` suppresses redraw requests for sub-pixel jitter.
    pub redraw_threshold_sq: f64,
    /// When `true`, drag and recenter operations panic on non-finite input
    /// coordinates. Off by default.
    pub validate_inputs: bool,
}

impl Default for PanConfig {
    fn default() -> Self {
        Self {
            redraw_threshold_sq: 1.0,
            validate_inputs: false,
        }
    }
}

/// Tracks a persistent pan translation derived from drag events.
///
/// The tracker is a small state machine with two phases: idle and dragging.
/// While a drag is active, `offset = point - anchor`, where the anchor was
/// captured at drag start minus the offset committed by the previous drag.
/// That fold-in guarantees continuity: a new drag starting from a different
/// finger position does not cause a visible jump.
///
/// Drag moves and ends received while idle are no-ops; a draw before the
/// first [`PanTracker::recenter`] sees a zero offset.
#[derive(Clone, Debug, Default)]
pub struct PanTracker {
    config: PanConfig,
    offset: Vec2,
    committed: Vec2,
    /// Drag-start point minus the committed offset. `Some` while dragging.
    anchor: Option<Vec2>,
}

impl PanTracker {
    /// Creates an idle tracker with the default [`PanConfig`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an idle tracker with an explicit configuration.
    #[must_use]
    pub fn with_config(config: PanConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Returns the current pan translation.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Returns the offset committed by the most recently completed drag.
    #[must_use]
    pub fn committed_offset(&self) -> Vec2 {
        self.committed
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.anchor.is_some()
    }

    /// Returns the tracker's configuration.
    #[must_use]
    pub fn config(&self) -> PanConfig {
        self.config
    }

    /// Starts a drag at the given point.
    ///
    /// Records `anchor = point - committed_offset`. Starting a new drag while
    /// one is active re-anchors and supersedes the previous drag.
    pub fn drag_start(&mut self, point: Point) {
        self.validate(point);
        self.anchor = Some(point.to_vec2() - self.committed);
    }

    /// Updates the offset for a drag move and reports whether a redraw is
    /// warranted.
    ///
    /// Sets `offset = point - anchor`. The response carries
    /// [`PanResponse::REDRAW`] only when the squared displacement of `point`
    /// from the drag-start point exceeds
    /// [`PanConfig::redraw_threshold_sq`]; displacement at or below the
    /// threshold updates the offset silently. A no-op while idle.
    pub fn drag_move(&mut self, point: Point) -> PanResponse {
        self.validate(point);
        let Some(anchor) = self.anchor else {
            return PanResponse::empty();
        };
        self.offset = point.to_vec2() - anchor;

        // The anchor already has the committed offset folded out, so adding
        // it back yields the raw drag-start point.
        let drag_start = anchor + self.committed;
        let displacement = point.to_vec2() - drag_start;
        if displacement.hypot2() > self.config.redraw_threshold_sq {
            PanResponse::REDRAW
        } else {
            PanResponse::empty()
        }
    }

    /// Ends the active drag at the given point and commits the offset.
    ///
    /// The committed offset becomes the baseline for the next drag's anchor.
    /// The response carries [`PanResponse::REDRAW`] and
    /// [`PanResponse::ACTIVATE`]. A no-op while idle.
    pub fn drag_end(&mut self, point: Point) -> PanResponse {
        self.validate(point);
        let Some(anchor) = self.anchor.take() else {
            return PanResponse::empty();
        };
        self.offset = point.to_vec2() - anchor;
        self.committed = self.offset;
        PanResponse::REDRAW | PanResponse::ACTIVATE
    }

    /// Resets the offset to the geometric center of the given view bounds.
    ///
    /// Both the current and the committed offset become
    /// `(width / 2, height / 2)`, and any active drag is discarded. Adapters
    /// call this on every layout-bounds change.
    pub fn recenter(&mut self, view_rect: Rect) -> PanResponse {
        self.validate(view_rect.origin());
        let center = Vec2::new(view_rect.width() * 0.5, view_rect.height() * 0.5);
        self.offset = center;
        self.committed = center;
        self.anchor = None;
        PanResponse::REDRAW
    }

    /// Snapshot of the current tracker state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> PanTrackerDebugInfo {
        PanTrackerDebugInfo {
            offset: self.offset,
            committed_offset: self.committed,
            anchor: self.anchor,
            redraw_threshold_sq: self.config.redraw_threshold_sq,
        }
    }

    fn validate(&self, point: Point) {
        if self.config.validate_inputs {
            assert!(
                point.x.is_finite() && point.y.is_finite(),
                "pan input coordinate is not finite"
            );
        }
    }
}

/// Debug snapshot of a [`PanTracker`] state.
#[derive(Clone, Copy, Debug)]
pub struct PanTrackerDebugInfo {
    /// Current pan translation.
    pub offset: Vec2,
    /// Offset committed by the most recently completed drag.
    pub committed_offset: Vec2,
    /// Active drag anchor, if any.
    pub anchor: Option<Vec2>,
    /// Squared redraw hysteresis threshold.
    pub redraw_threshold_sq: f64,
}
