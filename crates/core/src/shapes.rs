//! Outline shapes composed from lines.

use crate::grid::{GridError, PixelGrid};
use crate::raster::{line_points, LinePoints};
use crate::types::{Color, Point};

/// Edges of a triangle outline in drawing order: `(a, b)`, `(b, c)`, `(a, c)`.
///
/// Pixels shared by two edges are yielded once per edge.
pub fn triangle_points(a: Point, b: Point, c: Point) -> impl Iterator<Item = Point> {
    let edges: [LinePoints; 3] = [line_points(a, b), line_points(b, c), line_points(a, c)];
    edges.into_iter().flatten()
}

impl PixelGrid {
    /// Stroke the outline of a triangle. No fill.
    ///
    /// All three vertices are validated before anything is written.
    pub fn draw_triangle(
        &mut self,
        a: Point,
        b: Point,
        c: Point,
        color: Color,
    ) -> Result<(), GridError> {
        self.check(a)?;
        self.check(b)?;
        self.check(c)?;
        self.draw_line(a, b, color)?;
        self.draw_line(b, c, color)?;
        self.draw_line(a, c, color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangle_edges_are_chained() {
        let a = Point::new(0, 0);
        let b = Point::new(3, 0);
        let c = Point::new(0, 3);
        let all: Vec<Point> = triangle_points(a, b, c).collect();
        // 4 + 4 + 4 points, vertices repeated across edges.
        assert_eq!(all.len(), 12);
        assert_eq!(all[0], a);
        assert!(all.contains(&b));
        assert!(all.contains(&c));
    }

    #[test]
    fn rejected_vertex_leaves_grid_untouched() {
        let mut grid = PixelGrid::new(4, 4, 1);
        grid.fill(Color::WHITE);
        let before = grid.clone();
        let err = grid
            .draw_triangle(Point::new(0, 0), Point::new(3, 3), Point::new(0, 4), Color::BLACK)
            .unwrap_err();
        assert_eq!(
            err,
            GridError::OutOfBounds {
                point: Point::new(0, 4),
                width: 4,
                height: 4
            }
        );
        assert_eq!(grid, before);
    }
}
