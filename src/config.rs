// config.rs - Command-line options

use clap::Parser;
use log::info;
use rand::{rngs::SmallRng, SeedableRng};

use crate::error::Result;
use crate::grid::Grid;
use crate::patterns;
use crate::sim::{Simulation, DEFAULT_DENSITY, DEFAULT_STEP_INTERVAL};

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "conway_life", version, about = "Conway's Game of Life")]
pub struct Config {
    /// Grid width in cells
    #[arg(long, default_value_t = 80, value_parser = clap::value_parser!(u16).range(1..))]
    pub width: u16,

    /// Grid height in cells
    #[arg(long, default_value_t = 80, value_parser = clap::value_parser!(u16).range(1..))]
    pub height: u16,

    /// Size of one cell on screen, in pixels
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u16).range(1..=64))]
    pub tile_size: u16,

    /// Seconds between generations while running (0 to 0.1)
    #[arg(long, default_value_t = DEFAULT_STEP_INTERVAL)]
    pub step_interval: f32,

    /// Starting pattern, e.g. "glider", "pulsar", "gosper glider gun"
    #[arg(long, default_value = "glider")]
    pub pattern: String,

    /// Start from a random fill instead of a pattern
    #[arg(long)]
    pub random: bool,

    /// Chance of a cell being alive in a random fill
    #[arg(long, default_value_t = DEFAULT_DENSITY)]
    pub density: f64,

    /// Seed for random fills; taken from the OS when absent
    #[arg(long)]
    pub seed: Option<u64>,

    /// Start running instead of paused
    #[arg(long)]
    pub running: bool,

    /// Pause when a generation repeats one of the last ten
    #[arg(long)]
    pub pause_on_cycle: bool,
}

impl Config {
    /// Window size in pixels.
    pub fn window_size(&self) -> [f32; 2] {
        let tile = f32::from(self.tile_size);
        [f32::from(self.width) * tile, f32::from(self.height) * tile]
    }

    pub fn build_simulation(&self) -> Result<Simulation> {
        let grid = Grid::new(self.width.into(), self.height.into())?;
        let rng = match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };

        let mut sim = Simulation::new(grid, f32::from(self.tile_size), rng);
        sim.set_step_interval(self.step_interval)?;
        sim.set_density(self.density)?;
        sim.set_pause_on_cycle(self.pause_on_cycle);

        let pattern = patterns::index_of(&self.pattern)?;
        if self.random {
            sim.fill_random()?;
        } else {
            sim.load_pattern(pattern)?;
        }

        if self.running {
            sim.toggle_run();
        }

        info!(
            "{}x{} grid, {}px tiles, step interval {}s",
            self.width, self.height, self.tile_size, self.step_interval
        );
        Ok(sim)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::error::LifeError;
    use crate::sim::RunState;

    use pretty_assertions::assert_eq;
    use rstest::*;

    fn parse(args: &[&str]) -> std::result::Result<Config, clap::Error> {
        Config::try_parse_from(std::iter::once("conway_life").chain(args.iter().copied()))
    }

    #[test]
    fn defaults_match_the_classic_board() {
        let config = parse(&[]).unwrap();
        assert_eq!((config.width, config.height, config.tile_size), (80, 80, 10));
        assert_eq!(config.window_size(), [800.0, 800.0]);

        let sim = config.build_simulation().unwrap();
        assert_eq!(sim.run_state(), RunState::Paused);
        assert_eq!(sim.pattern_name(), "Glider");
        assert_eq!(
            sim.grid().live_cells().collect::<Vec<_>>(),
            vec![(11, 12), (12, 13), (13, 11), (13, 12), (13, 13)]
        );
    }

    #[test]
    fn options_flow_into_the_simulation() {
        let config = parse(&[
            "--width", "100", "--height", "60", "--tile-size", "8",
            "--step-interval", "0.02", "--pattern", "pulsar", "--running",
        ])
        .unwrap();
        assert_eq!(config.window_size(), [800.0, 480.0]);

        let sim = config.build_simulation().unwrap();
        assert!(sim.is_running());
        assert_eq!(sim.grid().width(), 100);
        assert_eq!(sim.grid().height(), 60);
        assert_eq!(sim.step_interval(), 0.02);
        assert_eq!(sim.pattern_name(), "Pulsar");
    }

    #[test]
    fn seeded_random_fill_is_reproducible() {
        let args = ["--random", "--seed", "42", "--density", "0.5"];
        let a = parse(&args).unwrap().build_simulation().unwrap();
        let b = parse(&args).unwrap().build_simulation().unwrap();
        assert_eq!(a.grid(), b.grid());
        assert!(!a.grid().is_empty());
    }

    #[rstest]
    #[case::zero_width(&["--width", "0"])]
    #[case::huge_tiles(&["--tile-size", "65"])]
    #[case::not_a_number(&["--height", "tall"])]
    fn clap_rejects_bad_values(#[case] args: &[&str]) {
        assert!(parse(args).is_err());
    }

    #[test]
    fn out_of_range_interval_is_rejected() {
        let config = parse(&["--step-interval", "0.5"]).unwrap();
        assert!(matches!(config.build_simulation(), Err(LifeError::InvalidInterval(_))));
    }

    #[test]
    fn unknown_pattern_is_rejected() {
        let config = parse(&["--pattern", "spaceship"]).unwrap();
        assert!(matches!(config.build_simulation(), Err(LifeError::UnknownPattern(_))));
    }
}
