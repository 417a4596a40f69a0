//! Core rendering module - pure, deterministic, and testable
//!
//! This crate owns the pixel grid and the rasterization algorithms. It has
//! **zero dependencies** on windowing, terminals or I/O, making it:
//!
//! - **Deterministic**: The same calls always produce the same bytes
//! - **Testable**: Every primitive can be checked against the raw buffer
//! - **Portable**: Any host that can show an RGBA buffer can present it
//! - **Fast**: Zero-allocation fill and draw paths
//!
//! # Module Structure
//!
//! - [`grid`]: logical grid, raw buffer addressing and scaled block writes
//! - [`raster`]: line rasterization (axis-aligned fast path plus exact DDA)
//! - [`shapes`]: triangle outlines composed from lines
//!
//! # Bounds
//!
//! Drawing operations reject points outside the grid with
//! [`GridError::OutOfBounds`] before touching the buffer. Nothing is clipped
//! or wrapped.
//!
//! # Example
//!
//! ```
//! use pixel_grid_core::PixelGrid;
//! use pixel_grid_types::{Color, Point};
//!
//! let mut grid = PixelGrid::new(4, 4, 1);
//! grid.fill(Color::WHITE);
//! grid.draw_line(Point::new(0, 0), Point::new(3, 3), Color::BLACK).unwrap();
//!
//! assert_eq!(grid.logical_pixel(Point::new(2, 2)), Some([0, 0, 0, 255]));
//! assert_eq!(grid.logical_pixel(Point::new(2, 1)), Some([255, 255, 255, 255]));
//! assert!(grid.draw_pixel(Point::new(4, 0), Color::RED).is_err());
//! ```

pub mod grid;
pub mod raster;
pub mod shapes;

pub use pixel_grid_types as types;

// Re-export commonly used types for convenience
pub use grid::{column_stride, pixel_offset, row_stride, GridError, PixelGrid};
pub use raster::{line_points, LinePoints};
pub use shapes::triangle_points;
