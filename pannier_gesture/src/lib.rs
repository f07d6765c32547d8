// Copyright 2025 the Pannier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pannier Gesture: headless pan and pinch gesture state machines.
//!
//! This crate converts serialized touch events into view state without
//! assuming any particular UI framework or rendering backend:
//!
//! - [`pan`]: Fold drag start/move/end events into a persistent 2D
//!   translation offset, with redraw hysteresis and recenter-on-layout.
//! - [`pinch`]: Track two-pointer span changes as scale factors
//!   (feature `pinch`, enabled by default).
//!
//! ## Design Philosophy
//!
//! Each state machine is:
//!
//! - **Minimal and focused**: one interaction pattern per module.
//! - **Side-effect free**: operations return [`pan::PanResponse`] flags (or
//!   scale factors) describing what the host should do; the actual redraw
//!   request, activation event, or zoom application is adapter code.
//! - **Callback-driven and single-threaded**: every operation is a
//!   synchronous, bounded computation over events the caller serializes,
//!   typically on a UI thread.
//!
//! The pan and pinch machines are deliberately independent. The pan
//! arithmetic never consumes pinch output; adapters that want combined
//! pan/zoom feed both from the same event stream.
//!
//! ## Driving a tracker from host events
//!
//! ```
//! use kurbo::{Point, Rect};
//! use pannier_gesture::pan::{PanResponse, PanTracker};
//!
//! /// The subset of host events an adapter forwards to the tracker.
//! enum HostEvent {
//!     Layout(Rect),
//!     Down(Point),
//!     Move(Point),
//!     Up(Point),
//! }
//!
//! fn handle(pan: &mut PanTracker, event: HostEvent) -> PanResponse {
//!     match event {
//!         HostEvent::Layout(bounds) => pan.recenter(bounds),
//!         HostEvent::Down(p) => {
//!             pan.drag_start(p);
//!             PanResponse::empty()
//!         }
//!         HostEvent::Move(p) => pan.drag_move(p),
//!         HostEvent::Up(p) => pan.drag_end(p),
//!     }
//! }
//!
//! let mut pan = PanTracker::new();
//! let mut redraws = 0;
//! for event in [
//!     HostEvent::Layout(Rect::new(0.0, 0.0, 200.0, 100.0)),
//!     HostEvent::Down(Point::new(110.0, 60.0)),
//!     HostEvent::Move(Point::new(130.0, 90.0)),
//!     HostEvent::Up(Point::new(130.0, 90.0)),
//! ] {
//!     if handle(&mut pan, event).contains(PanResponse::REDRAW) {
//!         redraws += 1;
//!     }
//! }
//! assert_eq!(redraws, 3);
//! assert_eq!(pan.committed_offset(), (120.0, 80.0).into());
//! ```
//!
//! At draw time, apply [`pan::PanTracker::offset`] to the surface; the
//! `pannier_surface` crate provides the translate → draw → restore contract
//! for that step.
//!
//! ## Features
//!
//! - `pinch`: Enable the two-pointer span recognizer.
//!
//! This crate is `no_std`.

#![no_std]

pub mod pan;

#[cfg(feature = "pinch")]
pub mod pinch;
