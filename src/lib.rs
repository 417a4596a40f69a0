//! Pixel grid (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof as
//! `pixel_grid::{types,core,engine,input,term}`.

pub use pixel_grid_core as core;
pub use pixel_grid_engine as engine;
pub use pixel_grid_input as input;
pub use pixel_grid_term as term;
pub use pixel_grid_types as types;
