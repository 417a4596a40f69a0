//! Engine configuration.
//!
//! Values are layered: defaults, then an optional JSON file named by
//! `PIXEL_GRID_CONFIG`, then individual environment overrides. A zero value at
//! any layer falls back to the default.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::types::{
    DEFAULT_FRAME_INTERVAL_MS, DEFAULT_HEIGHT, DEFAULT_PIXEL_SIZE, DEFAULT_WIDTH,
};

pub const ENV_CONFIG_PATH: &str = "PIXEL_GRID_CONFIG";
pub const ENV_WIDTH: &str = "PIXEL_GRID_WIDTH";
pub const ENV_HEIGHT: &str = "PIXEL_GRID_HEIGHT";
pub const ENV_PIXEL_SIZE: &str = "PIXEL_GRID_PIXEL_SIZE";
pub const ENV_FRAME_MS: &str = "PIXEL_GRID_FRAME_MS";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Grid width in logical pixels.
    pub width: u32,
    /// Grid height in logical pixels.
    pub height: u32,
    /// Raw pixels per logical pixel edge.
    pub pixel_size: u32,
    /// Tick interval used by [`crate::FrameClock`].
    pub frame_interval_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            pixel_size: DEFAULT_PIXEL_SIZE,
            frame_interval_ms: DEFAULT_FRAME_INTERVAL_MS,
        }
    }
}

impl EngineConfig {
    pub fn new(width: u32, height: u32, pixel_size: u32) -> Self {
        Self {
            width,
            height,
            pixel_size,
            ..Self::default()
        }
        .normalized()
    }

    /// Replace zero fields with their defaults.
    pub fn normalized(self) -> Self {
        let d = Self::default();
        Self {
            width: non_zero_or(self.width, d.width),
            height: non_zero_or(self.height, d.height),
            pixel_size: non_zero_or(self.pixel_size, d.pixel_size),
            frame_interval_ms: non_zero_or(self.frame_interval_ms, d.frame_interval_ms),
        }
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }

    /// Parse a JSON document. Missing fields take their defaults.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(s).context("invalid engine config JSON")?;
        Ok(config.normalized())
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_json_str(&text).with_context(|| format!("in config file {}", path.display()))
    }

    /// Load from the process environment.
    pub fn from_env() -> Result<Self> {
        let base = match std::env::var(ENV_CONFIG_PATH) {
            Ok(path) if !path.trim().is_empty() => Self::from_file(path.trim())?,
            _ => Self::default(),
        };
        Ok(base.with_overrides(|name| std::env::var(name).ok()))
    }

    /// Apply `PIXEL_GRID_*` overrides read through `lookup`.
    ///
    /// Unparseable values are ignored.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(v) = parse_override(&lookup, ENV_WIDTH) {
            self.width = v;
        }
        if let Some(v) = parse_override(&lookup, ENV_HEIGHT) {
            self.height = v;
        }
        if let Some(v) = parse_override(&lookup, ENV_PIXEL_SIZE) {
            self.pixel_size = v;
        }
        if let Some(v) = parse_override(&lookup, ENV_FRAME_MS) {
            self.frame_interval_ms = v;
        }
        self.normalized()
    }
}

fn non_zero_or<T: Default + PartialEq>(value: T, default: T) -> T {
    if value == T::default() {
        default
    } else {
        value
    }
}

fn parse_override<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
) -> Option<T> {
    let raw = lookup(name)?;
    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!("ignoring {}={:?}: not a non-negative integer", name, raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_are_20x20_at_5() {
        let c = EngineConfig::default();
        assert_eq!((c.width, c.height, c.pixel_size), (20, 20, 5));
        assert_eq!(c.frame_interval(), Duration::from_millis(16));
    }

    #[test]
    fn zero_means_default() {
        let c = EngineConfig::new(0, 8, 0);
        assert_eq!((c.width, c.height, c.pixel_size), (20, 8, 5));
    }

    #[test]
    fn json_missing_fields_default() {
        let c = EngineConfig::from_json_str(r#"{"width": 32, "pixel_size": 2}"#).unwrap();
        assert_eq!(c.width, 32);
        assert_eq!(c.height, 20);
        assert_eq!(c.pixel_size, 2);
    }

    #[test]
    fn json_rejects_garbage() {
        assert!(EngineConfig::from_json_str("{width: nope").is_err());
        assert!(EngineConfig::from_json_str(r#"{"width": -3}"#).is_err());
    }

    #[test]
    fn overrides_apply_and_ignore_bad_values() {
        let env: HashMap<&str, &str> = [
            (ENV_WIDTH, " 40 "),
            (ENV_HEIGHT, "tall"),
            (ENV_PIXEL_SIZE, "0"),
            (ENV_FRAME_MS, "33"),
        ]
        .into_iter()
        .collect();

        let c = EngineConfig::default().with_overrides(|k| env.get(k).map(|v| v.to_string()));
        assert_eq!(c.width, 40);
        assert_eq!(c.height, 20);
        assert_eq!(c.pixel_size, 5);
        assert_eq!(c.frame_interval_ms, 33);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = EngineConfig::from_file("/definitely/not/here.json").unwrap_err();
        assert!(format!("{err:#}").contains("/definitely/not/here.json"));
    }
}
