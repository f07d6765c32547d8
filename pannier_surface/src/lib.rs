// Copyright 2025 the Pannier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pannier Surface: backend-agnostic surface transform stack and the
//! panned-draw contract.
//!
//! This crate sits between gesture state (see `pannier_gesture`) and concrete
//! renderers. It defines:
//!
//! - [`PanSurface`]: a minimal canvas-like trait over a well-nested transform
//!   save stack (`save` / `translate` / `restore`).
//! - [`SurfaceOp`]: a plain-old-data (POD) operation enum for recording and
//!   replaying transform traffic.
//! - [`RecordingSurface`]: a reference implementation that records ops and
//!   maintains the live transform stack; useful as a test double and as a
//!   template for real backends.
//! - [`draw_panned`]: the translate → draw → restore contract. The restore
//!   is guaranteed on every exit path, including a panicking draw callback,
//!   so a surface never retains a corrupted transform state.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Affine, Vec2};
//! use pannier_surface::{RecordingSurface, SurfaceOp, draw_panned};
//!
//! let mut surface = RecordingSurface::new();
//! let offset = Vec2::new(120.0, 80.0);
//!
//! let drawn: Result<(), ()> = draw_panned(&mut surface, offset, |s| {
//!     // The surface is translated by the pan offset here.
//!     assert_eq!(s.current_transform(), Affine::translate((120.0, 80.0)));
//!     Ok(())
//! });
//!
//! assert!(drawn.is_ok());
//! // Restored: the callback's translation did not leak out.
//! assert_eq!(surface.current_transform(), Affine::IDENTITY);
//! assert_eq!(
//!     surface.ops(),
//!     [
//!         SurfaceOp::Save,
//!         SurfaceOp::Translate(offset),
//!         SurfaceOp::Restore,
//!     ]
//! );
//! ```
//!
//! Real backends implement [`PanSurface`] by forwarding `save`, `translate`,
//! and `restore` to their native canvas or by folding the translation into
//! their transform state. Drawing primitives are out of scope here; a draw
//! callback downcasts or captures whatever drawing handle it needs.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use kurbo::{Affine, Vec2};

/// Canvas-like transform state over a save stack.
///
/// `save` and `restore` must be well-nested: every `save` must eventually be
/// matched by a `restore`, and `restore` must not be called more often than
/// `save`. [`draw_panned`] upholds this pairing for callers.
pub trait PanSurface {
    /// Push the current transform onto the save stack.
    fn save(&mut self);

    /// Post-multiply a translation onto the current transform.
    fn translate(&mut self, offset: Vec2);

    /// Pop the most recently saved transform, making it current again.
    fn restore(&mut self);
}

/// A recorded surface transform operation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SurfaceOp {
    /// Push the current transform onto the save stack.
    Save,
    /// Post-multiply a translation onto the current transform.
    Translate(Vec2),
    /// Pop the most recently saved transform.
    Restore,
}

/// A [`PanSurface`] that records operations and tracks the live transform.
///
/// This is the reference implementation of the save-stack contract. Tests
/// assert against [`RecordingSurface::ops`] and
/// [`RecordingSurface::current_transform`]; backends can use it as a template
/// for their own transform bookkeeping.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    ops: Vec<SurfaceOp>,
    stack: Vec<Affine>,
    transform: Affine,
}

impl RecordingSurface {
    /// Creates an empty surface with an identity transform.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all operations recorded so far.
    #[must_use]
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Returns the current transform.
    #[must_use]
    pub fn current_transform(&self) -> Affine {
        self.transform
    }

    /// Returns the current save-stack depth.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

impl PanSurface for RecordingSurface {
    fn save(&mut self) {
        self.stack.push(self.transform);
        self.ops.push(SurfaceOp::Save);
    }

    fn translate(&mut self, offset: Vec2) {
        self.transform *= Affine::translate(offset);
        self.ops.push(SurfaceOp::Translate(offset));
    }

    fn restore(&mut self) {
        debug_assert!(!self.stack.is_empty(), "restore without matching save");
        if let Some(prior) = self.stack.pop() {
            self.transform = prior;
        }
        self.ops.push(SurfaceOp::Restore);
    }
}

/// Restores the surface when dropped, including during unwinding.
struct RestoreGuard<'a, S: PanSurface + ?Sized> {
    surface: &'a mut S,
}

impl<S: PanSurface + ?Sized> Drop for RestoreGuard<'_, S> {
    fn drop(&mut self) {
        self.surface.restore();
    }
}

/// Translates `surface` by `offset`, invokes `draw`, and restores the prior
/// transform.
///
/// The restore happens on every exit path: normal return, an error value
/// returned by the callback, or an unwinding panic. The callback's return
/// value (commonly a `Result`) is passed through untouched.
///
/// ## Example
///
/// ```
/// use kurbo::Vec2;
/// use pannier_surface::{RecordingSurface, draw_panned};
///
/// let mut surface = RecordingSurface::new();
/// let outcome: Result<u32, &str> =
///     draw_panned(&mut surface, Vec2::new(10.0, 5.0), |_s| Ok(42));
/// assert_eq!(outcome, Ok(42));
/// ```
pub fn draw_panned<S, T>(surface: &mut S, offset: Vec2, draw: impl FnOnce(&mut S) -> T) -> T
where
    S: PanSurface + ?Sized,
{
    surface.save();
    surface.translate(offset);
    let guard = RestoreGuard { surface };
    // The guard restores when it goes out of scope, whether `draw` returns
    // or unwinds.
    draw(&mut *guard.surface)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::panic::{AssertUnwindSafe, catch_unwind};

    use super::*;

    #[test]
    fn draw_panned_brackets_the_callback() {
        let mut surface = RecordingSurface::new();
        let offset = Vec2::new(3.0, 4.0);

        let seen = draw_panned(&mut surface, offset, |s| s.current_transform());

        assert_eq!(seen, Affine::translate((3.0, 4.0)));
        assert_eq!(surface.current_transform(), Affine::IDENTITY);
        assert_eq!(
            surface.ops(),
            [
                SurfaceOp::Save,
                SurfaceOp::Translate(offset),
                SurfaceOp::Restore,
            ]
        );
    }

    #[test]
    fn callback_translations_do_not_leak_out() {
        let mut surface = RecordingSurface::new();

        draw_panned(&mut surface, Vec2::new(1.0, 1.0), |s| {
            s.translate(Vec2::new(100.0, 0.0));
        });

        assert_eq!(surface.current_transform(), Affine::IDENTITY);
        assert_eq!(surface.depth(), 0);
    }

    #[test]
    fn restore_happens_on_error_return() {
        let mut surface = RecordingSurface::new();

        let outcome: Result<(), &str> =
            draw_panned(&mut surface, Vec2::new(5.0, 5.0), |_s| Err("draw failed"));

        assert_eq!(outcome, Err("draw failed"));
        assert_eq!(surface.current_transform(), Affine::IDENTITY);
        assert_eq!(surface.ops().last(), Some(&SurfaceOp::Restore));
    }

    #[test]
    fn restore_happens_on_panic() {
        let mut surface = RecordingSurface::new();

        let outcome = catch_unwind(AssertUnwindSafe(|| {
            draw_panned(&mut surface, Vec2::new(3.0, 4.0), |_s| {
                panic!("draw callback failed");
            })
        }));

        assert!(outcome.is_err());
        assert_eq!(surface.current_transform(), Affine::IDENTITY);
        assert_eq!(surface.depth(), 0);
        assert_eq!(surface.ops().last(), Some(&SurfaceOp::Restore));
    }

    #[test]
    fn nested_draws_are_well_nested() {
        let mut surface = RecordingSurface::new();
        let outer = Vec2::new(10.0, 0.0);
        let inner = Vec2::new(0.0, 10.0);

        draw_panned(&mut surface, outer, |s| {
            draw_panned(s, inner, |s| {
                assert_eq!(s.current_transform(), Affine::translate((10.0, 10.0)));
                assert_eq!(s.depth(), 2);
            });
            assert_eq!(s.current_transform(), Affine::translate((10.0, 0.0)));
        });

        assert_eq!(surface.current_transform(), Affine::IDENTITY);
        assert_eq!(
            surface.ops(),
            [
                SurfaceOp::Save,
                SurfaceOp::Translate(outer),
                SurfaceOp::Save,
                SurfaceOp::Translate(inner),
                SurfaceOp::Restore,
                SurfaceOp::Restore,
            ]
        );
    }

    #[test]
    fn manual_save_restore_round_trips_the_transform() {
        let mut surface = RecordingSurface::new();
        surface.translate(Vec2::new(7.0, 0.0));
        let before = surface.current_transform();

        surface.save();
        surface.translate(Vec2::new(0.0, 9.0));
        surface.restore();

        assert_eq!(surface.current_transform(), before);
        assert_eq!(surface.depth(), 0);
    }

    #[test]
    fn zero_offset_draw_still_brackets() {
        let mut surface = RecordingSurface::new();

        draw_panned(&mut surface, Vec2::ZERO, |s| {
            assert_eq!(s.current_transform(), Affine::IDENTITY);
        });

        assert_eq!(
            surface.ops(),
            [
                SurfaceOp::Save,
                SurfaceOp::Translate(Vec2::ZERO),
                SurfaceOp::Restore,
            ]
        );
    }
}
