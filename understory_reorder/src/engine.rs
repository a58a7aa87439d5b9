// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The reorder engine: session transitions, hover detection, splicing, and
//! FLIP sequencing over the item registry.

use alloc::boxed::Box;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use kurbo::{Point, Rect, Vec2};

use crate::effect::Effect;
use crate::geometry::strictly_contains;
use crate::key::ItemKey;
use crate::registry::ItemRegistry;
use crate::session::DragSession;

/// What the host renders for one list entry.
///
/// One visual element per binding, in binding order. The host wires the
/// element's measurement to [`ReorderEngine::on_mounted`] and its press-start
/// input to [`ReorderEngine::on_press`], both routed by `key`.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemBinding<T> {
    /// Stable identity for the element, survives reorders.
    pub key: ItemKey,
    /// The payload to render.
    pub value: T,
}

/// Drag-to-reorder engine over an ordered list of values.
///
/// Construct with the initial order and an `on_reorder` callback; render one
/// element per [`ReorderEngine::bindings`] entry; feed pointer events and
/// measurements in; dispatch the returned [`Effect`]s. See the crate docs
/// for the full host workflow.
pub struct ReorderEngine<T> {
    registry: ItemRegistry<T>,
    session: Option<DragSession>,
    pending_glides: Vec<ItemKey>,
    on_reorder: Box<dyn FnMut(&[T])>,
}

impl<T: fmt::Debug> fmt::Debug for ReorderEngine<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReorderEngine")
            .field("registry", &self.registry)
            .field("session", &self.session)
            .field("pending_glides", &self.pending_glides)
            .finish_non_exhaustive()
    }
}

impl<T: Clone + PartialEq> ReorderEngine<T> {
    /// Creates an engine over `values`, reporting each successful splice to
    /// `on_reorder`.
    ///
    /// `on_reorder` receives the full updated order synchronously after the
    /// engine's own state is updated. It is fire-and-forget: the engine
    /// ignores anything it does, does not catch its panics, and never calls
    /// it for a move that did not change the order.
    #[must_use]
    pub fn new<I, F>(values: I, on_reorder: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: FnMut(&[T]) + 'static,
    {
        Self {
            registry: ItemRegistry::from_values(values),
            session: None,
            pending_glides: Vec::new(),
            on_reorder: Box::new(on_reorder),
        }
    }

    /// Returns one binding per item in the current order.
    ///
    /// Recompute after every [`Effect::RequestRender`] (and after
    /// [`ReorderEngine::sync`]): bindings are snapshots, not live views.
    /// Equal values share a key, so lists with duplicate payloads will
    /// confuse element tracking; supply distinct values.
    #[must_use]
    pub fn bindings(&self) -> Vec<ItemBinding<T>> {
        self.registry
            .items()
            .iter()
            .map(|item| ItemBinding {
                key: item.key,
                value: item.value.clone(),
            })
            .collect()
    }

    /// Press-start on the element bound to `key`.
    ///
    /// Creates the drag session anchored at `pointer`. A press while another
    /// session is live overwrites it (last press wins) without emitting a
    /// second [`Effect::CapturePointer`], so capture and release stay
    /// paired. The key is not validated against the registry; an unknown key
    /// simply produces a session whose hover checks never match.
    pub fn on_press(&mut self, key: ItemKey, pointer: Point) -> Vec<Effect> {
        let mut effects = Vec::with_capacity(2);
        if self.session.is_none() {
            effects.push(Effect::CapturePointer);
        }
        self.session = Some(DragSession::new(key, pointer));
        // The follow translation owns this element now; a glide queued from
        // an earlier displacement must not clear it mid-drag.
        self.pending_glides.retain(|queued| *queued != key);
        effects.push(Effect::Lift { key });
        effects
    }

    /// Pointer moved while (possibly) dragging.
    ///
    /// `now_ms` is the host's monotonic clock. Without a live session this is
    /// a no-op. Otherwise the dragged element follows the pointer 1:1 via an
    /// [`Effect::Translate`], and, at most once per cooldown window, the
    /// engine hover-tests the other items' stored rectangles and splices the
    /// dragged item next to the first match. A splice reports the new order
    /// to `on_reorder` and ends with [`Effect::RequestRender`].
    pub fn on_pointer_move(&mut self, pointer: Point, now_ms: u64) -> Vec<Effect> {
        let Some(session) = self.session.as_mut() else {
            return Vec::new();
        };

        let mut effects = Vec::new();
        let dragged = session.dragged;
        let translation = pointer - session.anchor;
        effects.push(Effect::Translate {
            key: dragged,
            offset: translation,
        });

        if !session.cooldown.is_ready(now_ms) {
            return effects;
        }
        // Armed on every check, hit or miss; this is what bounds the splice
        // rate during a continuous sweep.
        session.cooldown.arm(now_ms);

        let Some(drag_index) = self.registry.index_of(dragged) else {
            // Dragged item no longer registered (unmounted mid-drag).
            return effects;
        };
        let hovered = self
            .registry
            .items()
            .iter()
            .enumerate()
            .find(|(index, item)| {
                *index != drag_index
                    && item
                        .rect
                        .is_some_and(|rect| strictly_contains(rect, pointer))
            })
            .map(|(index, _)| index);
        let Some(hover_index) = hovered else {
            return effects;
        };

        // Single-slot splice past the hovered neighbor. Re-anchor at the
        // pointer and record the dragged rect at its translated (visual)
        // position, so the invert delta computed at re-mount keeps the
        // element pinned under the pointer.
        session.anchor = pointer;
        self.registry.splice(drag_index, hover_index);
        self.registry.offset_rect(dragged, translation);

        let values = self.registry.values();
        (self.on_reorder)(&values);
        effects.push(Effect::RequestRender);
        effects
    }

    /// Pointer released; ends the drag session.
    ///
    /// A no-op without a live session. Otherwise settles the dragged element
    /// and releases the pointer subscription, exactly once. Hosts should
    /// route pointer-cancel here too.
    pub fn on_release(&mut self) -> Vec<Effect> {
        let Some(session) = self.session.take() else {
            return Vec::new();
        };
        vec![
            Effect::Settle {
                key: session.dragged,
            },
            Effect::ReleasePointer,
        ]
    }

    /// The element bound to `key` was (re)mounted and measured at `rect`.
    ///
    /// The host must measure the element at its natural layout position with
    /// any residual transient translation removed. Call this for every
    /// element after the initial render and after each
    /// [`Effect::RequestRender`].
    ///
    /// The first measurement just records the rectangle. Later measurements
    /// drive FLIP: the dragged item is inverted and its anchor adjusted so it
    /// stays pinned under the pointer; a displaced item is inverted and
    /// queued to glide to rest on the next frame. Unknown keys are ignored.
    pub fn on_mounted(&mut self, key: ItemKey, rect: Rect) -> Vec<Effect> {
        let Some(previous) = self.registry.measure(key, rect) else {
            return Vec::new();
        };
        let Some(previous) = previous else {
            return Vec::new();
        };
        let delta = previous.origin() - rect.origin();

        if let Some(session) = self.session.as_mut()
            && session.dragged == key
        {
            // Invert: keep the element visually where it was, and shift the
            // anchor by the same delta so follow math stays continuous.
            session.anchor = session.anchor - delta;
            return vec![Effect::Translate { key, offset: delta }];
        }

        if delta == Vec2::ZERO {
            return Vec::new();
        }
        let mut effects = vec![Effect::Translate { key, offset: delta }];
        if self.pending_glides.is_empty() {
            effects.push(Effect::RequestFrame);
        }
        if !self.pending_glides.contains(&key) {
            self.pending_glides.push(key);
        }
        effects
    }

    /// The rendering pass requested via [`Effect::RequestFrame`] arrived.
    ///
    /// Emits one [`Effect::Glide`] per item inverted since the last frame.
    /// The inverse translation and the animated clear must land in distinct
    /// passes for the glide to be visible.
    pub fn on_frame(&mut self) -> Vec<Effect> {
        self.pending_glides
            .drain(..)
            .map(|key| Effect::Glide { key })
            .collect()
    }

    /// Replaces the engine's value list.
    ///
    /// Retained values keep their identity and measurement; rows for dropped
    /// values are pruned (their queued glides with them), while the identity
    /// cache is kept so returning values are recognized. A live drag session
    /// survives; if its item was dropped, the remaining gesture degrades to
    /// no-ops until release. Does not invoke `on_reorder`.
    pub fn sync<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.registry.sync(values);
        let registry = &self.registry;
        self.pending_glides
            .retain(|key| registry.index_of(*key).is_some());
    }

    /// Returns the caller-visible value list in the current order.
    #[must_use]
    pub fn values(&self) -> Vec<T> {
        self.registry.values()
    }

    /// Returns the number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// Returns `true` if the engine holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Returns `true` while a drag session is live.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Returns the key of the item being dragged, if any.
    #[must_use]
    pub fn dragged(&self) -> Option<ItemKey> {
        self.session.as_ref().map(|session| session.dragged)
    }

    /// Returns the live drag session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Returns the item registry.
    #[must_use]
    pub fn registry(&self) -> &ItemRegistry<T> {
        &self.registry
    }
}
