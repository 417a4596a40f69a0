//! Line rasterization properties.

use std::collections::BTreeSet;

use pixel_grid::core::{line_points, PixelGrid};
use pixel_grid::types::{Color, Point};

const WHITE: [u8; 4] = [255, 255, 255, 255];
const BLACK: [u8; 4] = [0, 0, 0, 255];

fn painted(grid: &PixelGrid) -> BTreeSet<(i32, i32)> {
    let mut out = BTreeSet::new();
    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            if grid.logical_pixel(Point::new(x, y)) == Some(BLACK) {
                out.insert((x, y));
            }
        }
    }
    out
}

fn point_set(a: Point, b: Point) -> BTreeSet<(i32, i32)> {
    line_points(a, b).map(|p| (p.x, p.y)).collect()
}

/// All ordered pairs of points in a small square.
fn endpoint_pairs(n: i32) -> impl Iterator<Item = (Point, Point)> {
    let pts: Vec<Point> = (0..n)
        .flat_map(|y| (0..n).map(move |x| Point::new(x, y)))
        .collect();
    let pairs: Vec<(Point, Point)> = pts
        .iter()
        .flat_map(|&a| pts.iter().map(move |&b| (a, b)))
        .collect();
    pairs.into_iter()
}

#[test]
fn horizontal_line_is_exact() {
    let mut grid = PixelGrid::new(8, 3, 2);
    grid.fill(Color::WHITE);
    grid.draw_line(Point::new(0, 0), Point::new(5, 0), Color::BLACK)
        .unwrap();
    let expected: BTreeSet<_> = (0..=5).map(|x| (x, 0)).collect();
    assert_eq!(painted(&grid), expected);
}

#[test]
fn vertical_line_is_exact() {
    let mut grid = PixelGrid::new(3, 8, 2);
    grid.fill(Color::WHITE);
    grid.draw_line(Point::new(1, 6), Point::new(1, 2), Color::BLACK)
        .unwrap();
    let expected: BTreeSet<_> = (2..=6).map(|y| (1, y)).collect();
    assert_eq!(painted(&grid), expected);
}

#[test]
fn equal_endpoints_draw_one_pixel() {
    let mut grid = PixelGrid::new(3, 3, 1);
    grid.fill(Color::WHITE);
    grid.draw_line(Point::new(2, 1), Point::new(2, 1), Color::BLACK)
        .unwrap();
    assert_eq!(painted(&grid), BTreeSet::from([(2, 1)]));
}

#[test]
fn diagonal_on_4x4_grid() {
    let mut grid = PixelGrid::new(4, 4, 1);
    grid.fill(Color::WHITE);
    grid.draw_line(Point::new(0, 0), Point::new(3, 3), Color::BLACK)
        .unwrap();

    let expected = BTreeSet::from([(0, 0), (1, 1), (2, 2), (3, 3)]);
    assert_eq!(painted(&grid), expected);

    let white = (0..4)
        .flat_map(|y| (0..4).map(move |x| Point::new(x, y)))
        .filter(|p| grid.logical_pixel(*p) == Some(WHITE))
        .count();
    assert_eq!(white, 12);
}

#[test]
fn lines_are_gap_free_along_major_axis() {
    for (a, b) in endpoint_pairs(7) {
        let pts: Vec<Point> = line_points(a, b).collect();
        assert!(!pts.is_empty());

        let dx = (b.x - a.x).abs();
        let dy = (b.y - a.y).abs();
        assert_eq!(pts.len() as i32, dx.max(dy) + 1, "{a} -> {b}");

        for w in pts.windows(2) {
            let sx = (w[1].x - w[0].x).abs();
            let sy = (w[1].y - w[0].y).abs();
            if dx >= dy {
                assert_eq!(sx, 1, "{a} -> {b}: {:?}", pts);
                assert!(sy <= 1, "{a} -> {b}: {:?}", pts);
            } else {
                assert_eq!(sy, 1, "{a} -> {b}: {:?}", pts);
                assert!(sx <= 1, "{a} -> {b}: {:?}", pts);
            }
        }
    }
}

#[test]
fn lines_touch_both_endpoints() {
    for (a, b) in endpoint_pairs(6) {
        let pts = point_set(a, b);
        assert!(pts.contains(&(a.x, a.y)), "{a} -> {b}");
        assert!(pts.contains(&(b.x, b.y)), "{a} -> {b}");
    }
}

#[test]
fn reversed_lines_paint_the_same_pixels() {
    for (a, b) in endpoint_pairs(7) {
        assert_eq!(point_set(a, b), point_set(b, a), "{a} <-> {b}");
    }
}

#[test]
fn long_lines_do_not_drift() {
    let a = Point::new(0, 0);
    let b = Point::new(999, 333);
    let pts: Vec<Point> = line_points(a, b).collect();
    assert_eq!(pts.len(), 1000);
    assert_eq!(pts.last(), Some(&b));
    assert_eq!(point_set(a, b), point_set(b, a));
}

#[test]
fn draw_line_matches_line_points() {
    let a = Point::new(1, 6);
    let b = Point::new(8, 2);
    let mut grid = PixelGrid::new(10, 10, 2);
    grid.fill(Color::WHITE);
    grid.draw_line(a, b, Color::BLACK).unwrap();
    assert_eq!(painted(&grid), point_set(a, b));
}
