// sim.rs - Run/pause state machine and step clock driving the grid

use log::{debug, info};
use rand::rngs::SmallRng;

use crate::error::{LifeError, Result};
use crate::grid::Grid;
use crate::patterns::{self, PATTERNS};

pub const MIN_STEP_INTERVAL: f32 = 0.0;
pub const MAX_STEP_INTERVAL: f32 = 0.1;
pub const DEFAULT_STEP_INTERVAL: f32 = 0.04;

/// Interval change per scroll notch. Scrolling away from the user shortens it.
pub const SCROLL_STEP: f32 = 0.005;

pub const DEFAULT_DENSITY: f64 = 0.25;

/// Generations remembered for stall detection.
const HISTORY_LEN: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Paused,
    Running,
}

/// Everything the front-end observed during one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameInput {
    pub toggle_run: bool,
    pub single_step: bool,
    pub clear: bool,
    pub random_fill: bool,
    pub next_pattern: bool,
    /// Pointer position in pixels, relative to the grid's top-left corner.
    pub click: Option<(f32, f32)>,
    /// Wheel notches; positive scrolls away from the user.
    pub scroll: f32,
}

/// What changed during one [`Simulation::update`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub stepped: bool,
    pub edited: bool,
    pub stalled: bool,
}

/// Ring of recent generation fingerprints.
#[derive(Debug, Clone, Default)]
struct History {
    hashes: [u64; HISTORY_LEN],
    count: usize,
}

impl History {
    /// Records `hash`, returning true if it was already among the recent ones.
    fn record(&mut self, hash: u64) -> bool {
        let filled = self.count.min(HISTORY_LEN);
        if self.hashes[..filled].contains(&hash) {
            return true;
        }
        self.hashes[self.count % HISTORY_LEN] = hash;
        self.count += 1;
        false
    }

    fn reset(&mut self) {
        self.count = 0;
    }
}

/// The whole simulation: grid, clock and run state.
pub struct Simulation {
    grid: Grid,
    state: RunState,
    timer: f32,
    step_interval: f32,
    tile_size: f32,
    pattern_index: usize,
    density: f64,
    rng: SmallRng,
    pause_on_cycle: bool,
    history: History,
}

impl Simulation {
    /// Wraps `grid` in a paused simulation. `tile_size` is the pixel size of
    /// one cell and must be positive.
    pub fn new(grid: Grid, tile_size: f32, rng: SmallRng) -> Self {
        Self {
            grid,
            state: RunState::Paused,
            timer: 0.0,
            step_interval: DEFAULT_STEP_INTERVAL,
            tile_size,
            pattern_index: 0,
            density: DEFAULT_DENSITY,
            rng,
            pause_on_cycle: false,
            history: History::default(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn run_state(&self) -> RunState {
        self.state
    }

    pub fn is_paused(&self) -> bool {
        self.state == RunState::Paused
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    pub fn step_interval(&self) -> f32 {
        self.step_interval
    }

    /// Readout shown on screen: 100 at the fastest cadence, 0 at the slowest.
    pub fn speed(&self) -> f32 {
        100.0 - 1000.0 * self.step_interval
    }

    pub fn pattern_name(&self) -> &'static str {
        PATTERNS[self.pattern_index].name
    }

    pub fn set_step_interval(&mut self, secs: f32) -> Result<()> {
        if !(MIN_STEP_INTERVAL..=MAX_STEP_INTERVAL).contains(&secs) {
            return Err(LifeError::InvalidInterval(secs));
        }
        self.step_interval = secs;
        Ok(())
    }

    /// Shifts the interval by `notches` scroll notches, clamping to the
    /// permitted range.
    pub fn adjust_step_interval(&mut self, notches: f32) {
        if !notches.is_finite() || notches == 0.0 {
            return;
        }
        self.step_interval = (self.step_interval - notches * SCROLL_STEP)
            .clamp(MIN_STEP_INTERVAL, MAX_STEP_INTERVAL);
        debug!("step interval now {:.3}s", self.step_interval);
    }

    pub fn set_density(&mut self, density: f64) -> Result<()> {
        if !(0.0..=1.0).contains(&density) {
            return Err(LifeError::InvalidDensity(density));
        }
        self.density = density;
        Ok(())
    }

    /// Pause automatically when a generation repeats one of the last ten.
    pub fn set_pause_on_cycle(&mut self, enabled: bool) {
        self.pause_on_cycle = enabled;
        self.history.reset();
    }

    pub fn toggle_run(&mut self) {
        self.state = match self.state {
            RunState::Paused => {
                self.timer = 0.0;
                RunState::Running
            }
            RunState::Running => RunState::Paused,
        };
        info!("Simulation {}", if self.is_running() { "running" } else { "paused" });
    }

    /// Maps a pixel position to `(row, col)`: x selects the column and y the
    /// row, matching how cells are drawn.
    pub fn cell_at(&self, x: f32, y: f32) -> Option<(usize, usize)> {
        if !(x >= 0.0 && y >= 0.0) {
            return None;
        }
        let col = (x / self.tile_size).floor() as usize;
        let row = (y / self.tile_size).floor() as usize;
        (row < self.grid.height() && col < self.grid.width()).then_some((row, col))
    }

    pub fn toggle_cell(&mut self, row: usize, col: usize) -> Result<bool> {
        self.grid.toggle_cell(row, col)
    }

    pub fn clear(&mut self) {
        self.grid.clear();
        self.history.reset();
        info!("Grid cleared");
    }

    /// Installs the pattern at `index` in [`PATTERNS`].
    pub fn load_pattern(&mut self, index: usize) -> Result<()> {
        let pattern = PATTERNS
            .get(index)
            .ok_or_else(|| LifeError::UnknownPattern(format!("#{index}")))?;
        patterns::apply_pattern(&mut self.grid, pattern)?;
        self.pattern_index = index;
        self.history.reset();
        info!("Loaded pattern: {}", pattern.name);
        Ok(())
    }

    pub fn fill_random(&mut self) -> Result<()> {
        patterns::fill_random(&mut self.grid, self.density, &mut self.rng)?;
        self.history.reset();
        info!("Grid randomized at density {}", self.density);
        Ok(())
    }

    /// Applies one generation, with stall detection when enabled.
    fn advance(&mut self, report: &mut FrameReport) {
        self.grid.step();
        report.stepped = true;

        if self.pause_on_cycle && self.history.record(self.grid.fingerprint()) {
            debug!("generation {} repeats a recent state", self.grid.generation());
            if self.is_running() {
                self.toggle_run();
            }
            report.stalled = true;
        }
    }

    /// Takes one interval off the clock after a step fires. Any further whole
    /// intervals are dropped, so a slow frame never queues a backlog.
    fn consume_interval(&mut self) {
        self.timer = if self.step_interval > 0.0 {
            (self.timer - self.step_interval) % self.step_interval
        } else {
            0.0
        };
    }

    /// Runs one frame: clock, scroll, run toggle, then paused-only edits.
    pub fn update(&mut self, dt: f32, input: &FrameInput) -> FrameReport {
        let mut report = FrameReport::default();

        if self.is_running() {
            self.timer += dt.max(0.0);
            if self.timer >= self.step_interval {
                self.advance(&mut report);
                self.consume_interval();
            }
        }

        self.adjust_step_interval(input.scroll);

        if input.toggle_run {
            self.toggle_run();
        }

        if self.is_paused() {
            if input.single_step {
                self.advance(&mut report);
            }

            if let Some((x, y)) = input.click {
                match self.cell_at(x, y) {
                    Some((row, col)) => {
                        // cell_at only yields in-range cells
                        report.edited |= self.toggle_cell(row, col).is_ok();
                    }
                    None => debug!("click at ({x}, {y}) is outside the grid"),
                }
            }

            if input.clear {
                self.clear();
                report.edited = true;
            }

            if input.random_fill {
                report.edited |= self.fill_random().is_ok();
            }

            if input.next_pattern {
                report.edited |= self.load_pattern(patterns::next_index(self.pattern_index)).is_ok();
            }
        }

        report
    }
}
