//! Maps a raw RGBA buffer onto terminal cells.
//!
//! Each cell carries two raw pixel rows using [`UPPER_HALF_BLOCK`], which keeps
//! square pixels roughly square on typical 1:2 terminal glyphs. This module is
//! pure (no I/O).

use crate::fb::{Cell, FrameBuffer, UPPER_HALF_BLOCK};
use crate::types::{Color, COLOR_SIZE};

/// Terminal cells needed to show a raw surface of `width × height` pixels.
pub fn cells_for(width: usize, height: usize) -> (usize, usize) {
    (width, height.div_ceil(2))
}

#[inline(always)]
fn color_at(data: &[u8], width: usize, x: usize, y: usize) -> Color {
    let i = (y * width + x) * COLOR_SIZE;
    Color::new(data[i], data[i + 1], data[i + 2])
}

/// Draw `data` (row-major RGBA, `width × height` raw pixels) with its top-left
/// corner at cell `(origin_x, origin_y)`.
///
/// The last cell row of an odd-height surface shows the default background in
/// its lower half. Anything past the framebuffer edge is clipped.
pub fn blit_rgba(
    data: &[u8],
    width: usize,
    height: usize,
    fb: &mut FrameBuffer,
    origin_x: u16,
    origin_y: u16,
) {
    debug_assert_eq!(data.len(), width * height * COLOR_SIZE);

    let (cols, rows) = cells_for(width, height);
    let cols = cols.min(fb.width().saturating_sub(origin_x) as usize);
    let rows = rows.min(fb.height().saturating_sub(origin_y) as usize);

    for row in 0..rows {
        let top_y = row * 2;
        for x in 0..cols {
            let top = color_at(data, width, x, top_y);
            let bottom = if top_y + 1 < height {
                color_at(data, width, x, top_y + 1)
            } else {
                Cell::default().bg
            };
            fb.set(
                origin_x + x as u16,
                origin_y + row as u16,
                Cell {
                    ch: UPPER_HALF_BLOCK,
                    fg: top,
                    bg: bottom,
                },
            );
        }
    }
}
