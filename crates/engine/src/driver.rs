//! FrameDriver: the per-tick loop around a render callback.
//!
//! The driver owns the [`PixelGrid`] and the live [`KeySet`]. The host owns
//! time: it calls [`FrameDriver::tick`] whenever its [`TickScheduler`] says a
//! requested tick is due, and forwards key notifications in between.

use std::fmt;

use anyhow::Result;
use log::{debug, info};

use crate::config::EngineConfig;
use crate::core::PixelGrid;
use crate::keys::{KeySet, KeySnapshot};
use crate::types::KeyId;

/// "Schedule me again next frame". Fire-and-forget.
pub trait TickScheduler {
    fn request_tick(&mut self);
}

/// Shows a fully drawn grid to the user.
pub trait Presenter {
    fn present(&mut self, grid: &PixelGrid) -> Result<()>;
}

/// Per-tick input handed to the render callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameInput {
    pub keys: KeySnapshot,
    /// Zero-based index of the tick being rendered.
    pub frame: u64,
}

/// Render callback invoked once per tick.
pub type RenderFn = Box<dyn FnMut(&mut PixelGrid, &FrameInput) -> Result<()>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Idle,
    Running,
}

/// Errors raised while constructing a driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    MissingRenderCallback,
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::MissingRenderCallback => write!(f, "render function not defined"),
        }
    }
}

impl std::error::Error for EngineError {}

pub struct FrameDriverBuilder {
    config: EngineConfig,
    render: Option<RenderFn>,
}

impl FrameDriverBuilder {
    pub fn render<F>(mut self, render: F) -> Self
    where
        F: FnMut(&mut PixelGrid, &FrameInput) -> Result<()> + 'static,
    {
        self.render = Some(Box::new(render));
        self
    }

    /// Create the grid, enter `Running` and request the first tick.
    pub fn build<S, P>(self, scheduler: S, presenter: P) -> Result<FrameDriver<S, P>, EngineError>
    where
        S: TickScheduler,
        P: Presenter,
    {
        let render = self.render.ok_or(EngineError::MissingRenderCallback)?;
        let config = self.config.normalized();
        let grid = PixelGrid::new(config.width, config.height, config.pixel_size);

        let mut driver = FrameDriver {
            grid,
            keys: KeySet::new(),
            render,
            scheduler,
            presenter,
            state: DriverState::Idle,
            frames: 0,
        };
        driver.start();
        info!(
            "frame driver running: {}x{} grid, pixel size {} ({}x{} raw)",
            config.width,
            config.height,
            config.pixel_size,
            driver.grid.raw_width(),
            driver.grid.raw_height()
        );
        Ok(driver)
    }
}

pub struct FrameDriver<S, P> {
    grid: PixelGrid,
    keys: KeySet,
    render: RenderFn,
    scheduler: S,
    presenter: P,
    state: DriverState,
    frames: u64,
}

impl<S, P> fmt::Debug for FrameDriver<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameDriver")
            .field("width", &self.grid.width())
            .field("height", &self.grid.height())
            .field("scale", &self.grid.scale())
            .field("keys", &self.keys)
            .field("state", &self.state)
            .field("frames", &self.frames)
            .finish_non_exhaustive()
    }
}

impl FrameDriver<(), ()> {
    pub fn builder(config: EngineConfig) -> FrameDriverBuilder {
        FrameDriverBuilder {
            config,
            render: None,
        }
    }
}

impl<S, P> FrameDriver<S, P>
where
    S: TickScheduler,
    P: Presenter,
{
    fn start(&mut self) {
        if self.state == DriverState::Idle {
            self.state = DriverState::Running;
            self.scheduler.request_tick();
        }
    }

    /// Run one tick: snapshot keys, render, present, request the next tick.
    ///
    /// On error the remaining steps are skipped, so no further tick is
    /// requested.
    pub fn tick(&mut self) -> Result<()> {
        let input = FrameInput {
            keys: self.keys.snapshot(),
            frame: self.frames,
        };
        (self.render)(&mut self.grid, &input)?;
        self.presenter.present(&self.grid)?;
        self.frames += 1;
        self.scheduler.request_tick();
        Ok(())
    }

    pub fn key_down(&mut self, key: impl Into<KeyId>) {
        self.keys.press(key.into());
    }

    pub fn key_up(&mut self, key: &str) {
        if !self.keys.release(key) {
            debug!("key up for key not held: {:?}", key);
        }
    }
}

impl<S, P> FrameDriver<S, P> {
    pub fn grid(&self) -> &PixelGrid {
        &self.grid
    }

    pub fn keys(&self) -> &KeySet {
        &self.keys
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Number of completed ticks.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }
}
