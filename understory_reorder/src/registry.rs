// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-item bookkeeping: the ordered row list the engine reorders.
//!
//! The registry owns one row per list item, in list order. The row order *is*
//! the engine's order: deriving the caller-visible value list and splicing
//! rows operate on the same storage, so the two can never drift apart.
//!
//! Lookup is a linear scan by key. The engine targets strips of at most a few
//! dozen simultaneously visible items, where scanning a `Vec` beats any
//! indexed structure; this is not designed for large `N`.

use alloc::vec;
use alloc::vec::Vec;

use kurbo::{Rect, Vec2};

use crate::key::{ItemKey, KeyMap};

/// One list entry during its mounted lifetime.
#[derive(Clone, Debug, PartialEq)]
pub struct Item<T> {
    /// Stable identity, allocated once per distinct value.
    pub key: ItemKey,
    /// The caller-supplied payload.
    pub value: T,
    /// Last measured screen rectangle, or `None` until the host reports the
    /// first measurement. Unmeasured rows are skipped by hover detection.
    pub rect: Option<Rect>,
}

/// Ordered item rows plus the value → key cache.
#[derive(Clone, Debug)]
pub struct ItemRegistry<T> {
    items: Vec<Item<T>>,
    keys: KeyMap<T>,
}

impl<T: Clone + PartialEq> ItemRegistry<T> {
    /// Builds a registry from an initial ordered value list.
    ///
    /// Every value gets a row immediately; rectangles arrive later through
    /// [`ItemRegistry::measure`]. Equal values share one identity key.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut keys = KeyMap::new();
        let items = values
            .into_iter()
            .map(|value| {
                let key = keys.key_for(&value);
                Item {
                    key,
                    value,
                    rect: None,
                }
            })
            .collect();
        Self { items, keys }
    }

    /// Re-seeds the row list from a caller-supplied value list.
    ///
    /// Retained values keep their cached key and carry over their measured
    /// rectangle; rows for values no longer present are dropped. The value →
    /// key cache is never pruned, so a value that leaves and later re-enters
    /// the list comes back under its old identity. Duplicated values claim
    /// surviving rows in order.
    pub fn sync<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        let previous = core::mem::take(&mut self.items);
        let mut claimed = vec![false; previous.len()];
        for value in values {
            let key = self.keys.key_for(&value);
            let mut rect = None;
            for (index, row) in previous.iter().enumerate() {
                if !claimed[index] && row.key == key {
                    claimed[index] = true;
                    rect = row.rect;
                    break;
                }
            }
            self.items.push(Item { key, value, rect });
        }
    }

    /// Returns the rows in their current order.
    #[must_use]
    pub fn items(&self) -> &[Item<T>] {
        &self.items
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the registry holds no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the index of the row with `key`, if present.
    #[must_use]
    pub fn index_of(&self, key: ItemKey) -> Option<usize> {
        self.items.iter().position(|item| item.key == key)
    }

    /// Returns the row with `key`, if present.
    #[must_use]
    pub fn get(&self, key: ItemKey) -> Option<&Item<T>> {
        self.items.iter().find(|item| item.key == key)
    }

    /// Stores a fresh measurement for `key`.
    ///
    /// Returns `None` when the key is unknown; otherwise returns the
    /// previously stored rectangle (`None` on the first measurement).
    pub fn measure(&mut self, key: ItemKey, rect: Rect) -> Option<Option<Rect>> {
        let row = self.items.iter_mut().find(|item| item.key == key)?;
        Some(core::mem::replace(&mut row.rect, Some(rect)))
    }

    /// Shifts the stored rectangle for `key` by `offset`.
    ///
    /// Used at splice time to record the dragged item's on-screen position
    /// under its in-flight translation. A no-op for unknown or unmeasured
    /// rows.
    pub fn offset_rect(&mut self, key: ItemKey, offset: Vec2) {
        if let Some(row) = self.items.iter_mut().find(|item| item.key == key)
            && let Some(rect) = row.rect
        {
            row.rect = Some(rect + offset);
        }
    }

    /// Moves the row at `from` so that it sits at `to`: a single remove then
    /// insert, shifting the rows in between by one slot.
    ///
    /// Out-of-range indices and `from == to` are no-ops.
    pub fn splice(&mut self, from: usize, to: usize) {
        if from == to || from >= self.items.len() || to >= self.items.len() {
            return;
        }
        let row = self.items.remove(from);
        self.items.insert(to, row);
    }

    /// Returns the caller-visible value list in the current row order.
    #[must_use]
    pub fn values(&self) -> Vec<T> {
        self.items.iter().map(|item| item.value.clone()).collect()
    }
}
