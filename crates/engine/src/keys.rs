//! Held-key tracking.
//!
//! [`KeySet`] is the live set mutated by host key notifications. Each tick the
//! driver copies it into an immutable [`KeySnapshot`] for the render callback.

use std::collections::BTreeSet;

use log::debug;

use crate::types::KeyId;

/// Keys currently held, as reported by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeySet {
    held: BTreeSet<KeyId>,
}

impl KeySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key-down. Repeats for an already held key are ignored.
    pub fn press(&mut self, key: KeyId) {
        debug!("key down: {:?}", key.as_str());
        self.held.insert(key);
    }

    /// Record a key-up. Returns whether the key was held.
    pub fn release(&mut self, key: &str) -> bool {
        self.held.remove(key)
    }

    pub fn is_held(&self, key: &str) -> bool {
        self.held.contains(key)
    }

    pub fn len(&self) -> usize {
        self.held.len()
    }

    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }

    /// Consistent copy of the held keys at this moment.
    pub fn snapshot(&self) -> KeySnapshot {
        KeySnapshot {
            held: self.held.clone(),
        }
    }
}

/// Immutable view of the held keys for one tick.
///
/// Behaves as a mapping from key to `true`: keys that are not held are simply
/// absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeySnapshot {
    held: BTreeSet<KeyId>,
}

impl KeySnapshot {
    /// `Some(true)` when held, `None` otherwise.
    pub fn get(&self, key: &str) -> Option<bool> {
        self.held.contains(key).then_some(true)
    }

    pub fn is_held(&self, key: &str) -> bool {
        self.held.contains(key)
    }

    /// True when any of `keys` is held.
    pub fn any_held(&self, keys: &[&str]) -> bool {
        keys.iter().any(|k| self.is_held(k))
    }

    pub fn len(&self) -> usize {
        self.held.len()
    }

    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }

    /// Held keys in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &KeyId> {
        self.held.iter()
    }
}
