//! Synthetic key release for terminals.
//!
//! Most terminals only report presses (and auto-repeat presses while a key is
//! held). A key that has not been pressed again within the timeout is treated
//! as released.

use arrayvec::ArrayVec;
use log::{trace, warn};

use crate::types::KeyId;

/// Time without a repeat after which a key counts as released.
pub const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u64 = 150;

/// Keys tracked at once. Presses beyond this are not tracked (and therefore
/// never auto-released).
pub const MAX_TRACKED_KEYS: usize = 16;

#[derive(Debug, Clone)]
pub struct ReleaseTimeout {
    timeout_ms: u64,
    held: ArrayVec<(KeyId, u64), MAX_TRACKED_KEYS>,
}

impl Default for ReleaseTimeout {
    fn default() -> Self {
        Self::new(DEFAULT_KEY_RELEASE_TIMEOUT_MS)
    }
}

impl ReleaseTimeout {
    pub fn new(timeout_ms: u64) -> Self {
        Self {
            timeout_ms,
            held: ArrayVec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.held.len()
    }

    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }

    /// Record a press (or repeat) at `now_ms`.
    pub fn press(&mut self, key: &KeyId, now_ms: u64) {
        if let Some(entry) = self.held.iter_mut().find(|(k, _)| k == key) {
            entry.1 = now_ms;
            return;
        }
        if self.held.try_push((key.clone(), now_ms)).is_err() {
            warn!("too many held keys, not tracking release of {:?}", key.as_str());
        }
    }

    /// Forget a key the terminal reported as released.
    pub fn release(&mut self, key: &str) {
        self.held.retain(|(k, _)| k.as_str() != key);
    }

    /// Remove and return keys whose last press is older than the timeout.
    pub fn expire(&mut self, now_ms: u64) -> ArrayVec<KeyId, MAX_TRACKED_KEYS> {
        let mut expired = ArrayVec::new();
        let timeout_ms = self.timeout_ms;
        self.held.retain(|(k, at)| {
            if now_ms.saturating_sub(*at) > timeout_ms {
                trace!("auto-release {:?}", k.as_str());
                expired.push(k.clone());
                false
            } else {
                true
            }
        });
        expired
    }
}
