// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag session state: which item is held, where the pointer anchored, and
//! the hover-check cooldown.
//!
//! At most one session exists at a time. It is created on press, overwritten
//! by a stray second press (last press wins), and destroyed on release.

use kurbo::Point;

use crate::key::ItemKey;

/// How long hover detection stays suppressed after each check, in
/// milliseconds.
///
/// Without this window a single fast sweep could splice the list several
/// times per frame as the pointer crosses successive neighbors. The cooldown
/// caps splicing at one per window regardless of pointer event frequency.
pub const HOVER_COOLDOWN_MS: u64 = 300;

/// Deadline-based suppression window for hover checks.
///
/// The host stamps pointer events with a monotonic millisecond clock; the
/// cooldown is a single stored deadline against that clock. It starts ready,
/// and [`HoverCooldown::arm`] pushes the deadline [`HOVER_COOLDOWN_MS`] past
/// the current time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HoverCooldown {
    deadline_ms: Option<u64>,
}

impl HoverCooldown {
    /// Creates a cooldown that is immediately ready.
    #[must_use]
    pub const fn new() -> Self {
        Self { deadline_ms: None }
    }

    /// Returns `true` once the current time has reached the deadline.
    #[must_use]
    pub fn is_ready(&self, now_ms: u64) -> bool {
        match self.deadline_ms {
            None => true,
            Some(deadline_ms) => now_ms >= deadline_ms,
        }
    }

    /// Starts a new suppression window at `now_ms`.
    pub fn arm(&mut self, now_ms: u64) {
        self.deadline_ms = Some(now_ms.saturating_add(HOVER_COOLDOWN_MS));
    }
}

/// State for one in-progress press-move-release gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    /// Identity of the item being moved.
    pub dragged: ItemKey,
    /// Pointer position the follow translation is measured from.
    ///
    /// Set at press time, moved to the pointer position on every successful
    /// splice, and nudged by the re-mount delta of the dragged item so the
    /// follow math stays continuous across layout reflows.
    pub anchor: Point,
    /// Debounce for hover/splice detection.
    pub cooldown: HoverCooldown,
}

impl DragSession {
    /// Starts a session for `dragged`, anchored at the press position.
    #[must_use]
    pub fn new(dragged: ItemKey, anchor: Point) -> Self {
        Self {
            dragged,
            anchor,
            cooldown: HoverCooldown::new(),
        }
    }
}
