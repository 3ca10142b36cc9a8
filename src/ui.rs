// ui.rs - eframe front-end: gathers egui input into a FrameInput and paints the grid

use eframe::egui;
use egui::{Align2, Color32, FontId, Key, Pos2, Rect, Sense, Stroke, Vec2};

use conway_life::{FrameInput, Simulation};

/// egui reports wheel movement in points; one notch is about this many.
const POINTS_PER_NOTCH: f32 = 50.0;

const LIVE_COLOR: Color32 = Color32::BLACK;
const BACKGROUND: Color32 = Color32::WHITE;
const GRID_LINE: Color32 = Color32::LIGHT_GRAY;
const READOUT: Color32 = Color32::BLUE;

pub struct LifeApp {
    sim: Simulation,
    title: String,
}

impl LifeApp {
    pub fn new(sim: Simulation) -> Self {
        Self {
            sim,
            title: String::new(),
        }
    }

    fn keyboard_input(ctx: &egui::Context) -> FrameInput {
        ctx.input(|i| FrameInput {
            toggle_run: i.key_pressed(Key::Space),
            single_step: i.key_pressed(Key::S),
            clear: i.key_pressed(Key::C),
            random_fill: i.key_pressed(Key::R),
            next_pattern: i.key_pressed(Key::N),
            click: None,
            scroll: i.scroll_delta.y / POINTS_PER_NOTCH,
        })
    }

    fn paint(&self, painter: &egui::Painter, origin: Pos2) {
        let grid = self.sim.grid();
        let tile = self.sim.tile_size();

        for (row, col) in grid.live_cells() {
            let min = origin + Vec2::new(col as f32 * tile, row as f32 * tile);
            painter.rect_filled(Rect::from_min_size(min, Vec2::splat(tile)), 0.0, LIVE_COLOR);
        }

        // Reference grid only while editing is possible
        if self.sim.is_paused() {
            let stroke = Stroke::new(1.0, GRID_LINE);
            let right = grid.width() as f32 * tile;
            let bottom = grid.height() as f32 * tile;
            for col in 1..=grid.width() {
                let x = col as f32 * tile;
                painter.line_segment([origin + Vec2::new(x, 0.0), origin + Vec2::new(x, bottom)], stroke);
            }
            for row in 1..=grid.height() {
                let y = row as f32 * tile;
                painter.line_segment([origin + Vec2::new(0.0, y), origin + Vec2::new(right, y)], stroke);
            }
        }

        painter.text(
            origin + Vec2::new(5.0, 5.0),
            Align2::LEFT_TOP,
            format!("speed: {:.2}", self.sim.speed()),
            FontId::proportional(20.0),
            READOUT,
        );
    }

    fn update_title(&mut self, ctx: &egui::Context) {
        let grid = self.sim.grid();
        let status = if self.sim.is_running() { "▶" } else { "⏸" };
        let title = format!(
            "Game Of Life | {status} Gen {} | Pop {} | {}",
            grid.generation(),
            grid.population(),
            self.sim.pattern_name(),
        );
        if title != self.title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.title = title;
        }
    }
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.key_pressed(Key::Escape)) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        let dt = ctx.input(|i| i.stable_dt);
        let mut input = Self::keyboard_input(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(BACKGROUND))
            .show(ctx, |ui| {
                let grid = self.sim.grid();
                let tile = self.sim.tile_size();
                let size = Vec2::new(grid.width() as f32 * tile, grid.height() as f32 * tile);

                let (response, painter) = ui.allocate_painter(size, Sense::click());
                let origin = response.rect.min;

                if response.clicked() {
                    input.click = response
                        .interact_pointer_pos()
                        .map(|pos| (pos.x - origin.x, pos.y - origin.y));
                }

                self.sim.update(dt, &input);
                self.paint(&painter, origin);
            });

        self.update_title(ctx);

        // The step clock needs a steady stream of frames
        ctx.request_repaint();
    }
}
