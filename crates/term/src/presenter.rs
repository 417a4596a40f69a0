//! TerminalPresenter: shows a [`PixelGrid`] in the terminal.

use anyhow::Result;
use log::debug;

use crate::blit::{blit_rgba, cells_for};
use crate::core::PixelGrid;
use crate::engine::Presenter;
use crate::fb::{Cell, FrameBuffer};
use crate::renderer::TerminalRenderer;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Current terminal size, or 80x24 when it cannot be queried.
    pub fn current() -> Self {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        Self::new(w, h)
    }
}

/// Cell position that centers a grid's surface in `viewport`.
pub fn centered_origin(grid: &PixelGrid, viewport: Viewport) -> (u16, u16) {
    let (cols, rows) = cells_for(grid.raw_width(), grid.raw_height());
    let x = (viewport.width as usize).saturating_sub(cols) / 2;
    let y = (viewport.height as usize).saturating_sub(rows) / 2;
    (x as u16, y as u16)
}

/// Compose a grid into `fb`, sized to `viewport` and centered.
///
/// Pure; [`TerminalPresenter`] calls this once per frame with a reused
/// framebuffer.
pub fn compose_into(grid: &PixelGrid, viewport: Viewport, fb: &mut FrameBuffer) {
    fb.resize(viewport.width, viewport.height);
    fb.clear(Cell::default());
    let (x, y) = centered_origin(grid, viewport);
    blit_rgba(
        grid.as_bytes(),
        grid.raw_width(),
        grid.raw_height(),
        fb,
        x,
        y,
    );
}

pub struct TerminalPresenter {
    renderer: TerminalRenderer,
    fb: FrameBuffer,
}

impl Default for TerminalPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalPresenter {
    pub fn new() -> Self {
        Self::with_renderer(TerminalRenderer::new())
    }

    pub fn with_renderer(renderer: TerminalRenderer) -> Self {
        Self {
            renderer,
            fb: FrameBuffer::new(0, 0),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        self.renderer.enter()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.renderer.exit()
    }

    /// Force a full redraw on the next frame (e.g. after a resize).
    pub fn invalidate(&mut self) {
        debug!("terminal presenter invalidated");
        self.renderer.invalidate();
    }
}

impl Presenter for TerminalPresenter {
    fn present(&mut self, grid: &PixelGrid) -> Result<()> {
        compose_into(grid, Viewport::current(), &mut self.fb);
        self.renderer.draw_swap(&mut self.fb)
    }
}
