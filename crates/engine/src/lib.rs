//! Engine module - the host-agnostic frame loop.
//!
//! A [`FrameDriver`] ties a render callback to a [`PixelGrid`]. It depends on
//! its host only through two injected capabilities:
//!
//! - [`TickScheduler`]: asked for another tick at the end of every tick
//! - [`Presenter`]: shown the grid once the render callback returns
//!
//! Key notifications are pushed in by the host with
//! [`FrameDriver::key_down`] / [`FrameDriver::key_up`] and become visible to
//! the render callback from the next tick's [`KeySnapshot`].
//!
//! # Tick
//!
//! ```text
//! host tick -> snapshot keys -> render(grid, input) -> present(grid) -> request_tick()
//! ```
//!
//! # Configuration
//!
//! [`EngineConfig`] reads `PIXEL_GRID_CONFIG` (JSON file), then
//! `PIXEL_GRID_WIDTH`, `PIXEL_GRID_HEIGHT`, `PIXEL_GRID_PIXEL_SIZE` and
//! `PIXEL_GRID_FRAME_MS`. Zero values fall back to the defaults.
//!
//! # Example
//!
//! ```
//! use pixel_grid_core::PixelGrid;
//! use pixel_grid_engine::{EngineConfig, FrameDriver, Presenter, TickScheduler};
//! use pixel_grid_types::{Color, Point};
//!
//! struct Manual(bool);
//! impl TickScheduler for Manual {
//!     fn request_tick(&mut self) {
//!         self.0 = true;
//!     }
//! }
//!
//! struct Discard;
//! impl Presenter for Discard {
//!     fn present(&mut self, _grid: &PixelGrid) -> anyhow::Result<()> {
//!         Ok(())
//!     }
//! }
//!
//! let mut driver = FrameDriver::builder(EngineConfig::new(8, 8, 1))
//!     .render(|grid, input| {
//!         grid.fill(Color::WHITE);
//!         if input.keys.is_held("x") {
//!             grid.draw_pixel(Point::new(0, 0), Color::RED)?;
//!         }
//!         Ok(())
//!     })
//!     .build(Manual(false), Discard)
//!     .unwrap();
//!
//! driver.key_down("x");
//! driver.tick().unwrap();
//! assert_eq!(driver.grid().logical_pixel(Point::new(0, 0)), Some([255, 0, 0, 255]));
//! ```

pub mod clock;
pub mod config;
pub mod driver;
pub mod keys;

pub use pixel_grid_core as core;
pub use pixel_grid_types as types;

pub use clock::FrameClock;
pub use config::EngineConfig;
pub use driver::{
    DriverState, EngineError, FrameDriver, FrameDriverBuilder, FrameInput, Presenter, RenderFn,
    TickScheduler,
};
pub use keys::{KeySet, KeySnapshot};
