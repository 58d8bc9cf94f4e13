// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-slot memoization.

use alloc::rc::Rc;

/// Remembers the most recent key and the value built from it.
///
/// A repeated key hands back the same `Rc`, so callers can detect "no change" with
/// [`Rc::ptr_eq`]. Any other key replaces the slot.
#[derive(Debug)]
pub(crate) struct LastValue<K, V> {
    slot: Option<(K, Rc<V>)>,
}

impl<K, V> Default for LastValue<K, V> {
    fn default() -> Self {
        Self { slot: None }
    }
}

impl<K: PartialEq, V> LastValue<K, V> {
    pub(crate) fn get_or_insert_with(&mut self, key: K, build: impl FnOnce(&K) -> V) -> Rc<V> {
        if let Some((cached, value)) = &self.slot
            && *cached == key
        {
            return Rc::clone(value);
        }
        let value = Rc::new(build(&key));
        self.slot = Some((key, Rc::clone(&value)));
        value
    }

    #[cfg(test)]
    pub(crate) fn clear(&mut self) {
        self.slot = None;
    }
}
