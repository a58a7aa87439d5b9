// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host commands emitted by the engine.
//!
//! The engine never touches elements, timers, or input streams itself. Every
//! entry point returns a sequence of [`Effect`]s for the host to dispatch in
//! emission order, against whatever element the host renders for each
//! [`ItemKey`]. A key the host no longer has an element for (unmounted
//! mid-drag, removed by a sync) should be skipped, not treated as an error.

use kurbo::Vec2;

use crate::key::ItemKey;

/// Duration of the settle animation for displaced items, in milliseconds.
pub const GLIDE_DURATION_MS: u64 = 300;

/// Cubic bézier control values for the glide easing curve.
///
/// A back-out curve with a slight overshoot, equivalent to the CSS timing
/// function `cubic-bezier(0.175, 0.885, 0.32, 1.275)`.
pub const GLIDE_EASING: [f64; 4] = [0.175, 0.885, 0.32, 1.275];

/// One host command.
///
/// `Translate` and `Glide` drive the two halves of the FLIP technique: the
/// inverse translation is applied immediately (no transition), and clearing
/// it under a transition must happen in a *later* rendering pass;
/// collapsing the two into one pass would skip the visible animation. The engine
/// sequences this with [`Effect::RequestFrame`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Effect {
    /// Begin the session-scoped pointer subscription: route subsequent
    /// pointer moves and the release to the engine regardless of which
    /// element they land on.
    ///
    /// Emitted at most once per drag session; the matching
    /// [`Effect::ReleasePointer`] is emitted exactly once when the session
    /// ends.
    CapturePointer,
    /// End the pointer subscription started by [`Effect::CapturePointer`].
    ReleasePointer,
    /// Raise the item to the top of the stacking order for the duration of
    /// the drag. Cursor and other affordances are the host's concern.
    Lift {
        /// Item being lifted.
        key: ItemKey,
    },
    /// Clear the item's transient translation and stacking elevation. Its
    /// natural layout slot already reflects the final order, so no snap-back
    /// animation is involved.
    Settle {
        /// Item returning to natural rendering.
        key: ItemKey,
    },
    /// Set the item's transient translation immediately, with no transition.
    ///
    /// Used both for the 1:1 drag follow and for the FLIP inverse transform
    /// applied at mount time. Replaces any previous translation.
    Translate {
        /// Item to translate.
        key: ItemKey,
        /// Translation from the item's natural position.
        offset: Vec2,
    },
    /// Clear the item's translation while animating over
    /// [`GLIDE_DURATION_MS`] with the [`GLIDE_EASING`] curve, so the item
    /// visibly glides from its old position into its natural slot.
    Glide {
        /// Item to animate.
        key: ItemKey,
    },
    /// Call [`ReorderEngine::on_frame`](crate::ReorderEngine::on_frame) on
    /// the next rendering pass.
    RequestFrame,
    /// Re-render the list in the engine's new order, then report each
    /// element's fresh measurement via
    /// [`ReorderEngine::on_mounted`](crate::ReorderEngine::on_mounted).
    RequestRender,
}
