//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of the frame loop. It maps
//! `crossterm` key events into key-down/key-up transitions carrying
//! browser-style [`KeyId`](crate::types::KeyId)s, and synthesizes key-up for
//! terminals that never report key releases.

pub mod map;
pub mod release;

pub use pixel_grid_types as types;

pub use map::{key_id, should_quit, translate, KeyTransition};
pub use release::{ReleaseTimeout, DEFAULT_KEY_RELEASE_TIMEOUT_MS, MAX_TRACKED_KEYS};
