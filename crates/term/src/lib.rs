//! Terminal presentation module.
//!
//! A small rendering layer that shows a [`PixelGrid`](crate::core::PixelGrid)
//! in a terminal. The grid's raw RGBA surface is packed two pixel rows per
//! cell with half blocks, composed into a cell framebuffer, and flushed with
//! crossterm using changed-run diffs.
//!
//! Goals:
//! - Keep `core` and `engine` free of terminal concerns
//! - Keep composition pure so it can be unit-tested without a terminal
//! - Only rewrite the cells that changed between frames

pub mod blit;
pub mod fb;
pub mod presenter;
pub mod renderer;

pub use pixel_grid_core as core;
pub use pixel_grid_engine as engine;
pub use pixel_grid_types as types;

pub use blit::{blit_rgba, cells_for};
pub use fb::{Cell, FrameBuffer, UPPER_HALF_BLOCK};
pub use presenter::{centered_origin, compose_into, TerminalPresenter, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
