use conway_life::patterns::{self, DEFAULT_PATTERN};
use conway_life::{FrameInput, Grid, RunState, Simulation};

use pretty_assertions::assert_eq;
use rand::{rngs::SmallRng, SeedableRng};

const TILE: f32 = 10.0;

fn new_session() -> Simulation {
    let grid = Grid::new(80, 80).unwrap();
    let mut sim = Simulation::new(grid, TILE, SmallRng::seed_from_u64(11));
    sim.load_pattern(0).unwrap();
    sim
}

fn press(build: impl FnOnce(&mut FrameInput)) -> FrameInput {
    let mut input = FrameInput::default();
    build(&mut input);
    input
}

/// Pixel at the centre of a cell.
fn centre_of(row: usize, col: usize) -> (f32, f32) {
    ((col as f32 + 0.5) * TILE, (row as f32 + 0.5) * TILE)
}

#[test]
fn stepping_the_default_glider_by_hand() {
    let mut sim = new_session();
    assert_eq!(sim.run_state(), RunState::Paused);

    let step = press(|i| i.single_step = true);
    for _ in 0..4 {
        assert!(sim.update(1.0 / 60.0, &step).stepped);
    }

    let expected: Vec<_> = DEFAULT_PATTERN.cells.iter().map(|&(r, c)| (r + 1, c + 1)).collect();
    assert_eq!(sim.grid().live_cells().collect::<Vec<_>>(), expected);
    assert_eq!(sim.grid().generation(), 4);
}

#[test]
fn running_then_pausing_with_space() {
    let mut sim = new_session();
    sim.set_step_interval(0.0625).unwrap();
    let idle = FrameInput::default();

    sim.update(0.0, &press(|i| i.toggle_run = true));
    assert_eq!(sim.run_state(), RunState::Running);

    // Sixteen 1/32s frames are eight intervals.
    let steps = (0..16).filter(|_| sim.update(0.03125, &idle).stepped).count();
    assert_eq!(steps, 8);

    sim.update(0.0, &press(|i| i.toggle_run = true));
    assert_eq!(sim.run_state(), RunState::Paused);

    let steps = (0..16).filter(|_| sim.update(0.03125, &idle).stepped).count();
    assert_eq!(steps, 0);
    assert_eq!(sim.grid().generation(), 8);
}

#[test]
fn painting_a_blinker_and_watching_it_flip() {
    let mut sim = new_session();
    sim.update(0.0, &press(|i| i.clear = true));
    assert!(sim.grid().is_empty());

    for col in 4..7 {
        sim.update(0.0, &press(|i| i.click = Some(centre_of(20, col))));
    }
    assert_eq!(sim.grid().live_cells().collect::<Vec<_>>(), vec![(20, 4), (20, 5), (20, 6)]);

    sim.update(0.0, &press(|i| i.single_step = true));
    assert_eq!(sim.grid().live_cells().collect::<Vec<_>>(), vec![(19, 5), (20, 5), (21, 5)]);
}

#[test]
fn edits_are_locked_out_while_running() {
    let mut sim = new_session();
    sim.set_step_interval(0.1).unwrap();
    sim.toggle_run();
    let before = sim.grid().clone();

    let report = sim.update(
        0.0,
        &press(|i| {
            i.click = Some(centre_of(0, 0));
            i.clear = true;
            i.random_fill = true;
            i.next_pattern = true;
            i.single_step = true;
        }),
    );

    assert!(!report.edited && !report.stepped);
    assert_eq!(sim.grid(), &before);
}

#[test]
fn scrolling_changes_speed_in_any_state() {
    let mut sim = new_session();
    let start = sim.speed();

    sim.update(0.0, &press(|i| i.scroll = 2.0));
    assert!((sim.speed() - (start + 10.0)).abs() < 1e-3);

    sim.toggle_run();
    sim.update(0.0, &press(|i| i.scroll = -4.0));
    assert!((sim.speed() - (start - 10.0)).abs() < 1e-3);
}

#[test]
fn clear_then_step_stays_empty() {
    let mut sim = new_session();
    sim.update(0.0, &press(|i| i.clear = true));
    sim.update(0.0, &press(|i| i.single_step = true));
    assert!(sim.grid().is_empty());
}

#[test]
fn gosper_gun_keeps_growing() {
    let mut grid = Grid::new(80, 80).unwrap();
    patterns::apply_pattern(&mut grid, patterns::find("gosper glider gun").unwrap()).unwrap();
    let start = grid.population();

    for _ in 0..60 {
        grid.step();
    }

    // Two gliders have left the gun by now.
    assert!(grid.population() > start, "{} <= {start}", grid.population());
}
