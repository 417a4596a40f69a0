//! Core types module - shared data structures and constants
//!
//! This module defines the value types used throughout the engine. All types
//! are plain data with no external dependencies, so they can be used by the
//! rasterizer, the frame driver and any host integration alike.
//!
//! # Grid Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_WIDTH` | 20 | Grid width in logical pixels |
//! | `DEFAULT_HEIGHT` | 20 | Grid height in logical pixels |
//! | `DEFAULT_PIXEL_SIZE` | 5 | Raw pixels per logical pixel edge |
//! | `DEFAULT_FRAME_INTERVAL_MS` | 16 | Tick interval for fixed-rate hosts (~60 FPS) |
//!
//! # Raw Buffer Layout
//!
//! Raw pixels are stored row-major as `COLOR_SIZE` bytes each, in `r, g, b, a`
//! order. Alpha is always written as [`OPAQUE`].
//!
//! # Examples
//!
//! ```
//! use pixel_grid_types::{Color, KeyId, Point, COLOR_SIZE};
//!
//! let color = Color::new(53, 137, 189);
//! assert_eq!(color, Color::DARK_BLUE);
//! assert_eq!(color.rgba(), [53, 137, 189, 255]);
//!
//! // The fourth channel is accepted but never stored.
//! assert_eq!(Color::from([255, 0, 0, 10]), Color::RED);
//!
//! let p = Point::new(3, 4);
//! assert_eq!(p, Point::from((3, 4)));
//!
//! let key = KeyId::from("ArrowLeft");
//! assert_eq!(key.as_str(), "ArrowLeft");
//! assert_eq!(COLOR_SIZE, 4);
//! ```

use std::borrow::Borrow;
use std::fmt;

/// Default grid width in logical pixels.
pub const DEFAULT_WIDTH: u32 = 20;

/// Default grid height in logical pixels.
pub const DEFAULT_HEIGHT: u32 = 20;

/// Default raw pixels per logical pixel edge.
pub const DEFAULT_PIXEL_SIZE: u32 = 5;

/// Default tick interval for hosts without an animation-frame primitive.
pub const DEFAULT_FRAME_INTERVAL_MS: u64 = 16;

/// Bytes per raw pixel (r, g, b, a).
pub const COLOR_SIZE: usize = 4;

/// Alpha value written by every drawing operation.
pub const OPAQUE: u8 = 255;

/// 24-bit RGB color. Alpha is implied and always opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const RED: Color = Color::new(255, 0, 0);
    pub const GREEN: Color = Color::new(0, 255, 0);
    pub const BLUE: Color = Color::new(0, 0, 255);
    pub const GREY: Color = Color::new(140, 138, 145);
    pub const BROWN: Color = Color::new(201, 138, 101);
    pub const DARK_BLUE: Color = Color::new(53, 137, 189);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// The raw quad written into a framebuffer for this color.
    #[inline(always)]
    pub const fn rgba(self) -> [u8; COLOR_SIZE] {
        [self.r, self.g, self.b, OPAQUE]
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<[u8; 4]> for Color {
    fn from([r, g, b, _]: [u8; 4]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

/// Logical grid coordinate. `x` is the column, `y` is the row.
///
/// Coordinates are signed so callers can express points left of or above the
/// grid; those are rejected by the grid rather than wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate by a signed offset.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Opaque key identifier delivered by host key notifications.
///
/// Hosts are free to pick any naming scheme; the terminal host uses
/// browser-style names such as `"ArrowLeft"`, `"a"` or `" "`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyId(String);

impl KeyId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for KeyId {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for KeyId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl From<char> for KeyId {
    fn from(ch: char) -> Self {
        Self(ch.to_string())
    }
}

impl Borrow<str> for KeyId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
