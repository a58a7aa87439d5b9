// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_reorder --heading-base-level=0

//! Understory Reorder: a drag-to-reorder engine for ordered item strips.
//!
//! ## Overview
//!
//! This crate implements the stateful core of press-drag-release reordering:
//! the user presses on an item, drags it around, and the engine live-splices
//! the underlying list while sequencing the FLIP (First-Last-Invert-Play)
//! steps that make displaced neighbors glide into their new slots.
//!
//! Like the rest of Understory, the engine is host-agnostic and performs no
//! I/O of its own. It does not know about windows, widget trees, or styling.
//! Hosts feed it three kinds of input (pointer events stamped with a
//! monotonic millisecond clock, post-layout rectangle measurements, and
//! rendering-pass ticks) and dispatch the [`Effect`] sequences it returns:
//! apply a translation, start a timed glide, raise or settle an element,
//! capture or release the pointer stream, request a frame or a re-render.
//!
//! ## Concepts
//!
//! - [`ReorderEngine`]: owns the ordered list, the item registry, and at most
//!   one [`DragSession`]. All entry points are synchronous and return the
//!   effects to dispatch.
//! - [`ItemKey`]: stable identity generated once per distinct value, so hosts
//!   can track "the same logical item" across reorders. Identity is keyed by
//!   value equality; equal values share a key, a deliberate and documented
//!   limitation. Supply distinct values when payloads can repeat.
//! - [`ItemBinding`]: one `(key, value)` pair per rendered element, in list
//!   order, recomputed whenever the order changes.
//! - [`Effect`]: the host command vocabulary. Effects are plain data and are
//!   dispatched in emission order, in the same spirit as the dispatch
//!   sequences emitted by `understory_responder`.
//!
//! ## Host workflow
//!
//! 1) Construct the engine with the initial values and an `on_reorder`
//!    callback; it fires synchronously after every successful splice with the
//!    full new order, and never for a move that changed nothing.
//! 2) Render one element per [`ReorderEngine::bindings`] entry. When an
//!    element is laid out, report its rectangle via
//!    [`ReorderEngine::on_mounted`]; wire its press input to
//!    [`ReorderEngine::on_press`].
//! 3) While a session is live, forward pointer moves and the release to
//!    [`ReorderEngine::on_pointer_move`] / [`ReorderEngine::on_release`]
//!    (route pointer-cancel to release as well). The
//!    [`Effect::CapturePointer`] / [`Effect::ReleasePointer`] pair brackets
//!    exactly this stretch.
//! 4) On [`Effect::RequestRender`], re-render in the new order (reusing
//!    elements by key) and report fresh measurements; on
//!    [`Effect::RequestFrame`], call [`ReorderEngine::on_frame`] on the next
//!    rendering pass. The invert translations and the animated clears land in
//!    distinct passes on purpose: collapsing them would make the glide
//!    invisible.
//!
//! ## Minimal example
//!
//! Three items stacked vertically, dragging `"a"` over `"c"`:
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use understory_reorder::{Effect, ReorderEngine};
//!
//! let mut engine = ReorderEngine::new(["a", "b", "c"], |order: &[&str]| {
//!     // Persist or mirror the new order.
//!     let _ = order;
//! });
//!
//! // Initial render: measure each element at its natural slot.
//! for (index, binding) in engine.bindings().into_iter().enumerate() {
//!     let top = 100.0 * index as f64;
//!     engine.on_mounted(binding.key, Rect::new(0.0, top, 100.0, top + 100.0));
//! }
//!
//! // Press on "a", then drag into "c"'s rectangle.
//! let pressed = engine.bindings()[0].key;
//! engine.on_press(pressed, Point::new(50.0, 50.0));
//! let effects = engine.on_pointer_move(Point::new(50.0, 250.0), 16);
//!
//! assert!(effects.contains(&Effect::RequestRender));
//! assert_eq!(engine.values(), ["b", "c", "a"]);
//!
//! engine.on_release();
//! ```
//!
//! ## Hover detection and pacing
//!
//! Hover tests run against the registry's stored rectangles using a
//! strict-interior containment test ([`strictly_contains`]), so a pointer on
//! the shared edge of two packed items hovers neither. Checks are paced by a
//! [`HOVER_COOLDOWN_MS`] window armed on every check: a fast continuous sweep
//! splices at most once per window, and the dragged item swaps past exactly
//! one neighbor per splice.
//!
//! ## Integration with Understory
//!
//! - `understory_responder` can route the pointer stream and realize the
//!   capture/release bracket via its pointer-capture support.
//! - `understory_box_tree` world rectangles are a natural measurement source
//!   for [`ReorderEngine::on_mounted`].
//! - `understory_event_state` hover/click managers compose with the drag
//!   session for richer gesture handling on the same elements.
//!
//! ## Features
//!
//! - `std` (default): compile with the standard library.
//! - `libm`: no_std numeric support, forwarded to Kurbo.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod effect;
mod engine;
mod geometry;
mod key;
mod registry;
mod session;

pub use effect::{Effect, GLIDE_DURATION_MS, GLIDE_EASING};
pub use engine::{ItemBinding, ReorderEngine};
pub use geometry::strictly_contains;
pub use key::ItemKey;
pub use registry::{Item, ItemRegistry};
pub use session::{DragSession, HOVER_COOLDOWN_MS, HoverCooldown};
