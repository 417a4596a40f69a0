//! Terminal pixel-grid runner (default binary).
//!
//! Shows the engine's grid in the terminal using half-block cells. Arrow keys
//! or WASD move a triangle around; `q` or Ctrl-C quits.
//!
//! Logs go to `/tmp/pixel-grid.log` (override with `PIXEL_GRID_LOG`), filtered
//! by `RUST_LOG` (default `info`).

use std::fs::OpenOptions;
use std::time::Instant;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use pixel_grid::core::PixelGrid;
use pixel_grid::engine::{EngineConfig, FrameClock, FrameDriver, FrameInput, KeySnapshot};
use pixel_grid::input::{should_quit, translate, KeyTransition, ReleaseTimeout};
use pixel_grid::term::TerminalPresenter;
use pixel_grid::types::{Color, Point};

const DEFAULT_LOG_PATH: &str = "/tmp/pixel-grid.log";

/// Ticks between one-cell moves while a direction key is held.
const MOVE_EVERY_FRAMES: u64 = 4;

/// Triangle vertices relative to its offset.
const TRIANGLE: [Point; 3] = [Point::new(0, 0), Point::new(6, 2), Point::new(2, 6)];
const TRIANGLE_EXTENT: i32 = 6;

type Driver = FrameDriver<FrameClock, TerminalPresenter>;

fn main() -> Result<()> {
    init_logging()?;

    let config = EngineConfig::from_env()?;
    info!("starting pixel-grid with {:?}", config);

    let epoch = Instant::now();
    let mut demo = Demo::new(&config);
    let mut driver = FrameDriver::builder(config)
        .render(move |grid, input| demo.render(grid, input))
        .build(
            FrameClock::new(config.frame_interval(), epoch),
            TerminalPresenter::new(),
        )?;

    driver.presenter_mut().enter()?;
    let result = run(&mut driver, epoch);

    // Always try to restore terminal state.
    let _ = driver.presenter_mut().exit();
    info!("stopped after {} frames", driver.frames());
    result
}

fn init_logging() -> Result<()> {
    let path = std::env::var("PIXEL_GRID_LOG").unwrap_or_else(|_| DEFAULT_LOG_PATH.to_string());
    let log_file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {path}"))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();
    Ok(())
}

fn run(driver: &mut Driver, epoch: Instant) -> Result<()> {
    let mut release = ReleaseTimeout::default();

    loop {
        // Wait for input until the next requested tick is due.
        let timeout = driver.scheduler().time_until_due(Instant::now());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press && should_quit(key) {
                        return Ok(());
                    }
                    let now_ms = epoch.elapsed().as_millis() as u64;
                    match translate(key) {
                        Some(KeyTransition::Down(id)) => {
                            release.press(&id, now_ms);
                            driver.key_down(id);
                        }
                        Some(KeyTransition::Up(id)) => {
                            release.release(id.as_str());
                            driver.key_up(id.as_str());
                        }
                        None => {}
                    }
                }
                Event::Resize(_, _) => driver.presenter_mut().invalidate(),
                _ => {}
            }
        }

        for id in release.expire(epoch.elapsed().as_millis() as u64) {
            driver.key_up(id.as_str());
        }

        if driver.scheduler_mut().take_due(Instant::now()) {
            driver.tick()?;
        }

        if !driver.scheduler().is_pending() {
            return Ok(());
        }
    }
}

/// Demo scene: grey frame, red diagonal, and a movable blue triangle.
struct Demo {
    offset: Point,
    max: Point,
}

impl Demo {
    fn new(config: &EngineConfig) -> Self {
        let max = Point::new(
            (config.width as i32 - 2 - TRIANGLE_EXTENT).max(1),
            (config.height as i32 - 2 - TRIANGLE_EXTENT).max(1),
        );
        Self {
            offset: Point::new(1, 1),
            max,
        }
    }

    fn steer(&mut self, keys: &KeySnapshot) {
        let mut dx = 0;
        let mut dy = 0;
        if keys.any_held(&["ArrowLeft", "a", "A"]) {
            dx -= 1;
        }
        if keys.any_held(&["ArrowRight", "d", "D"]) {
            dx += 1;
        }
        if keys.any_held(&["ArrowUp", "w", "W"]) {
            dy -= 1;
        }
        if keys.any_held(&["ArrowDown", "s", "S"]) {
            dy += 1;
        }
        let next = self.offset.offset(dx, dy);
        self.offset = Point::new(next.x.clamp(1, self.max.x), next.y.clamp(1, self.max.y));
    }

    fn render(&mut self, grid: &mut PixelGrid, input: &FrameInput) -> Result<()> {
        if input.frame % MOVE_EVERY_FRAMES == 0 {
            self.steer(&input.keys);
        }

        grid.fill(Color::WHITE);

        let (w, h) = (grid.width() as i32, grid.height() as i32);
        let corners = [
            Point::new(0, 0),
            Point::new(w - 1, 0),
            Point::new(w - 1, h - 1),
            Point::new(0, h - 1),
        ];
        for i in 0..corners.len() {
            grid.draw_line(corners[i], corners[(i + 1) % corners.len()], Color::GREY)?;
        }

        let (from, to) = (Point::new(1, 1), Point::new(w - 2, h - 2));
        if grid.contains(from) && grid.contains(to) {
            grid.draw_line(from, to, Color::RED)?;
        }

        let [a, b, c] = TRIANGLE.map(|p| p.offset(self.offset.x, self.offset.y));
        if [a, b, c].iter().all(|&p| grid.contains(p)) {
            grid.draw_triangle(a, b, c, Color::DARK_BLUE)?;
            grid.draw_pixel(a, Color::BROWN)?;
        }
        Ok(())
    }
}
