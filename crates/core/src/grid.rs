//! PixelGrid: a logical grid of big pixels backed by a raw RGBA buffer.
//!
//! Each logical pixel is rendered as a `scale × scale` block of raw pixels.
//! The buffer is allocated once and never resized; drawing only overwrites it.

use std::fmt;

use crate::types::{Color, Point, COLOR_SIZE};

/// Errors produced by grid drawing operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// The logical point lies outside the grid. Nothing was written.
    OutOfBounds { point: Point, width: u32, height: u32 },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::OutOfBounds {
                point,
                width,
                height,
            } => write!(f, "point {} is outside the {}x{} grid", point, width, height),
        }
    }
}

impl std::error::Error for GridError {}

/// Bytes per logical row: `width * 4 * scale * scale`.
#[inline(always)]
pub const fn row_stride(width: usize, scale: usize) -> usize {
    width * COLOR_SIZE * scale * scale
}

/// Bytes per logical column: `scale * 4`.
#[inline(always)]
pub const fn column_stride(scale: usize) -> usize {
    scale * COLOR_SIZE
}

/// Offset of the top-left raw pixel of logical `(column, row)`.
///
/// Pure function of its inputs; [`PixelGrid::offset`] uses the same mapping
/// with the strides precomputed.
#[inline(always)]
pub const fn pixel_offset(row: usize, column: usize, width: usize, scale: usize) -> usize {
    row * row_stride(width, scale) + column * column_stride(scale)
}

/// Logical pixel grid with an owned RGBA framebuffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    scale: u32,
    row_stride: usize,
    column_stride: usize,
    raw_row_bytes: usize,
    data: Vec<u8>,
}

impl PixelGrid {
    /// Allocate a zeroed grid of `width × height` logical pixels.
    pub fn new(width: u32, height: u32, scale: u32) -> Self {
        let (w, h, s) = (width as usize, height as usize, scale as usize);
        Self {
            width,
            height,
            scale,
            row_stride: row_stride(w, s),
            column_stride: column_stride(s),
            raw_row_bytes: w * s * COLOR_SIZE,
            data: vec![0; w * h * s * s * COLOR_SIZE],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Width of the presented surface in raw pixels.
    pub fn raw_width(&self) -> usize {
        self.width as usize * self.scale as usize
    }

    /// Height of the presented surface in raw pixels.
    pub fn raw_height(&self) -> usize {
        self.height as usize * self.scale as usize
    }

    pub fn row_stride(&self) -> usize {
        self.row_stride
    }

    pub fn column_stride(&self) -> usize {
        self.column_stride
    }

    /// The raw RGBA buffer, row-major, `raw_width * raw_height * 4` bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as u32) < self.width
            && (point.y as u32) < self.height
    }

    #[inline]
    pub(crate) fn check(&self, point: Point) -> Result<(), GridError> {
        if self.contains(point) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                point,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Offset of the top-left raw pixel of a logical point.
    pub fn offset(&self, point: Point) -> Result<usize, GridError> {
        self.check(point)?;
        Ok(self.offset_unchecked(point))
    }

    #[inline(always)]
    fn offset_unchecked(&self, point: Point) -> usize {
        point.y as usize * self.row_stride + point.x as usize * self.column_stride
    }

    /// Read one raw pixel.
    pub fn raw_pixel(&self, x: usize, y: usize) -> Option<[u8; COLOR_SIZE]> {
        if x >= self.raw_width() || y >= self.raw_height() {
            return None;
        }
        let i = y * self.raw_row_bytes + x * COLOR_SIZE;
        let mut px = [0; COLOR_SIZE];
        px.copy_from_slice(&self.data[i..i + COLOR_SIZE]);
        Some(px)
    }

    /// Read the top-left raw pixel of a logical pixel.
    pub fn logical_pixel(&self, point: Point) -> Option<[u8; COLOR_SIZE]> {
        if !self.contains(point) {
            return None;
        }
        let s = self.scale as usize;
        self.raw_pixel(point.x as usize * s, point.y as usize * s)
    }

    /// Set every raw pixel to `color`.
    pub fn fill(&mut self, color: Color) {
        let rgba = color.rgba();
        for px in self.data.chunks_exact_mut(COLOR_SIZE) {
            px.copy_from_slice(&rgba);
        }
    }

    /// Paint one logical pixel as a `scale × scale` block.
    pub fn draw_pixel(&mut self, point: Point, color: Color) -> Result<(), GridError> {
        self.check(point)?;
        self.write_block(point, color.rgba());
        Ok(())
    }

    /// Block write for a point already known to be inside the grid.
    #[inline]
    pub(crate) fn write_block(&mut self, point: Point, rgba: [u8; COLOR_SIZE]) {
        let mut start = self.offset_unchecked(point);
        for _ in 0..self.scale {
            let end = start + self.column_stride;
            for px in self.data[start..end].chunks_exact_mut(COLOR_SIZE) {
                px.copy_from_slice(&rgba);
            }
            start += self.raw_row_bytes;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strides_follow_dimensions() {
        let grid = PixelGrid::new(20, 10, 5);
        assert_eq!(grid.row_stride(), 20 * 4 * 5 * 5);
        assert_eq!(grid.column_stride(), 5 * 4);
        assert_eq!(grid.as_bytes().len(), 20 * 10 * 5 * 5 * 4);
        assert_eq!(grid.raw_width(), 100);
        assert_eq!(grid.raw_height(), 50);
    }

    #[test]
    fn offset_matches_free_function() {
        let grid = PixelGrid::new(7, 3, 2);
        for y in 0..3 {
            for x in 0..7 {
                assert_eq!(
                    grid.offset(Point::new(x, y)).unwrap(),
                    pixel_offset(y as usize, x as usize, 7, 2)
                );
            }
        }
    }

    #[test]
    fn rejects_points_outside_grid() {
        let grid = PixelGrid::new(4, 3, 1);
        assert!(grid.contains(Point::new(3, 2)));
        assert!(!grid.contains(Point::new(4, 0)));
        assert!(!grid.contains(Point::new(0, 3)));
        assert!(!grid.contains(Point::new(-1, 0)));
        assert_eq!(
            grid.offset(Point::new(0, -1)),
            Err(GridError::OutOfBounds {
                point: Point::new(0, -1),
                width: 4,
                height: 3
            })
        );
    }

    #[test]
    fn new_grid_is_transparent_black() {
        let grid = PixelGrid::new(2, 2, 2);
        assert!(grid.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn draw_pixel_writes_block_rows() {
        let mut grid = PixelGrid::new(3, 2, 2);
        grid.draw_pixel(Point::new(1, 1), Color::RED).unwrap();

        for y in 0..grid.raw_height() {
            for x in 0..grid.raw_width() {
                let inside = (2..4).contains(&x) && (2..4).contains(&y);
                let expected = if inside { Color::RED.rgba() } else { [0; 4] };
                assert_eq!(grid.raw_pixel(x, y), Some(expected), "raw ({x}, {y})");
            }
        }
    }

    #[test]
    fn error_message_names_point_and_size() {
        let err = GridError::OutOfBounds {
            point: Point::new(9, 1),
            width: 4,
            height: 4,
        };
        assert_eq!(err.to_string(), "point (9, 1) is outside the 4x4 grid");
    }
}
