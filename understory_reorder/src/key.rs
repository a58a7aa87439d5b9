// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Identity keys for list items.
//!
//! A key is allocated the first time the engine encounters a value and is
//! reused for that value from then on, so the hosting view can track "the
//! same logical item" across reorders even though its index keeps changing.
//! Identity is keyed by value equality, not by list position.

use alloc::vec::Vec;

/// Stable identity for one logical list item.
///
/// Keys are small copyable handles generated by the engine. They are unique
/// within one engine instance and never change for the lifetime of that
/// instance; they travel with values, not with list positions.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ItemKey(u64);

impl ItemKey {
    /// Returns the raw bit representation of this key.
    ///
    /// Useful when a host framework wants a primitive it can hash or print;
    /// the value carries no structure beyond uniqueness.
    #[must_use]
    pub const fn to_bits(self) -> u64 {
        self.0
    }
}

/// Allocates fresh [`ItemKey`]s.
///
/// Keys are a SplitMix64 finalizer applied to a per-allocator counter. The
/// finalizer is a composition of bijective steps, so every draw is distinct,
/// while the output looks random rather than sequential. This keeps the
/// allocator deterministic and dependency-free.
#[derive(Clone, Debug, Default)]
pub(crate) struct KeyAllocator {
    counter: u64,
}

impl KeyAllocator {
    pub(crate) fn next_key(&mut self) -> ItemKey {
        self.counter = self.counter.wrapping_add(1);
        ItemKey(mix(self.counter))
    }
}

/// SplitMix64 finalizer.
const fn mix(value: u64) -> u64 {
    let mut z = value.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Value → key cache.
///
/// Stored as a plain `Vec` of pairs scanned by `PartialEq`; no `Hash` or
/// `Ord` bound is imposed on `T`. Entries are never removed: once a value
/// has been seen, its key outlives any stretch where the value is absent
/// from the list, so identity survives the value leaving and re-entering.
///
/// Two equal values share one key. Callers that need to track equal payloads
/// independently must make them distinguishable (for example by pairing them
/// with their own id).
#[derive(Clone, Debug)]
pub(crate) struct KeyMap<T> {
    entries: Vec<(T, ItemKey)>,
    allocator: KeyAllocator,
}

impl<T: Clone + PartialEq> KeyMap<T> {
    pub(crate) const fn new() -> Self {
        Self {
            entries: Vec::new(),
            allocator: KeyAllocator { counter: 0 },
        }
    }

    /// Returns the key cached for `value`, allocating one on first sight.
    pub(crate) fn key_for(&mut self, value: &T) -> ItemKey {
        if let Some((_, key)) = self.entries.iter().find(|(cached, _)| cached == value) {
            return *key;
        }
        let key = self.allocator.next_key();
        self.entries.push((value.clone(), key));
        key
    }
}
