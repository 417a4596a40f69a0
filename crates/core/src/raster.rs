//! Line rasterization over logical grid points.
//!
//! Axis-aligned lines are walked from the smaller to the larger coordinate.
//! Every other line is a DDA along the major axis: the minor coordinate
//! starts half a pixel in and advances by `d_minor / |d_major|` per step, and
//! the drawn pixel is its floor.
//!
//! The running fraction is kept exact. At step `k` the minor coordinate is
//!
//! ```text
//! start + floor((|d_major| + 2 * k * d_minor) / (2 * |d_major|))
//! ```
//!
//! so long lines never drift and `line_points(a, b)` covers the same pixels as
//! `line_points(b, a)`.

use std::iter::FusedIterator;

use crate::grid::{GridError, PixelGrid};
use crate::types::{Color, Point};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Major {
    X,
    Y,
}

/// Ordered logical points of a line, endpoints included.
#[derive(Debug, Clone)]
pub struct LinePoints {
    start: Point,
    major: Major,
    step: i32,
    /// `|d_major|`, at least 1 so the denominator is never zero.
    run: i64,
    /// Signed minor-axis delta over the whole line.
    rise: i64,
    next: i64,
    count: i64,
}

/// Rasterize the line from `a` to `b`.
pub fn line_points(a: Point, b: Point) -> LinePoints {
    if a.x == b.x {
        // Vertical, including the single point a == b.
        let len = (a.y as i64 - b.y as i64).abs();
        return LinePoints::straight(Point::new(a.x, a.y.min(b.y)), Major::Y, len);
    }
    if a.y == b.y {
        let len = (a.x as i64 - b.x as i64).abs();
        return LinePoints::straight(Point::new(a.x.min(b.x), a.y), Major::X, len);
    }

    let dx = b.x as i64 - a.x as i64;
    let dy = b.y as i64 - a.y as i64;
    let (major, d_major, rise) = if dx.abs() >= dy.abs() {
        (Major::X, dx, dy)
    } else {
        (Major::Y, dy, dx)
    };

    LinePoints {
        start: a,
        major,
        step: d_major.signum() as i32,
        run: d_major.abs(),
        rise,
        next: 0,
        count: d_major.abs() + 1,
    }
}

impl LinePoints {
    fn straight(start: Point, major: Major, len: i64) -> Self {
        Self {
            start,
            major,
            step: 1,
            run: len.max(1),
            rise: 0,
            next: 0,
            count: len + 1,
        }
    }

    #[inline(always)]
    fn point_at(&self, k: i64) -> Point {
        let along = self.step as i64 * k;
        // The numerator reaches ~2^65 for lines spanning the full i32 range.
        let across = (self.run as i128 + 2 * k as i128 * self.rise as i128)
            .div_euclid(2 * self.run as i128) as i64;
        match self.major {
            Major::X => Point::new(
                (self.start.x as i64 + along) as i32,
                (self.start.y as i64 + across) as i32,
            ),
            Major::Y => Point::new(
                (self.start.x as i64 + across) as i32,
                (self.start.y as i64 + along) as i32,
            ),
        }
    }
}

impl Iterator for LinePoints {
    type Item = Point;

    #[inline]
    fn next(&mut self) -> Option<Point> {
        if self.next >= self.count {
            return None;
        }
        let p = self.point_at(self.next);
        self.next += 1;
        Some(p)
    }

    fn nth(&mut self, n: usize) -> Option<Point> {
        self.next = self.next.saturating_add(n as i64).min(self.count);
        self.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = (self.count - self.next) as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for LinePoints {}

impl FusedIterator for LinePoints {}

impl PixelGrid {
    /// Draw a line between two logical points, both inclusive.
    ///
    /// Both endpoints must lie inside the grid. Every rasterized point lies in
    /// their bounding box, so a rejected line writes nothing.
    pub fn draw_line(&mut self, a: Point, b: Point, color: Color) -> Result<(), GridError> {
        self.check(a)?;
        self.check(b)?;
        let rgba = color.rgba();
        for p in line_points(a, b) {
            self.write_block(p, rgba);
        }
        Ok(())
    }
}
