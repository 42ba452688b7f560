// ui.rs - egui front end for the simulation driver

use eframe::egui;
use egui::{Pos2, Rect, Stroke, Vec2};
use std::time::{Duration, Instant};

use crate::GameOfLife;
use life_core::patterns;

impl eframe::App for GameOfLife {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Any key release ends the run and closes the window.
        let key_released = ctx.input(|i| {
            i.events.iter().any(|e| matches!(e, egui::Event::Key { pressed: false, .. }))
        });
        if key_released {
            self.finish();
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        if self.is_running && self.last_update.elapsed() >= self.update_interval {
            self.update_generation();
            self.last_update = Instant::now();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");

            ui.horizontal(|ui| {
                let button_text = if self.is_running { "⏸ Pause" } else { "▶ Start" };
                if ui.button(button_text).clicked() {
                    self.is_running = !self.is_running;
                    if self.is_running {
                        self.last_update = Instant::now();
                    }
                }

                if ui.button("⏭ Step").clicked() {
                    self.is_running = false;
                    self.update_generation();
                }

                if ui.button("⏹ Clear").clicked() {
                    self.is_running = false;
                    self.clear_grid();
                }

                if ui.button("🎲 Random").clicked() {
                    self.randomize();
                }

                ui.separator();

                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(patterns::PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in patterns::PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });

                if ui.button("Apply Pattern").clicked() {
                    self.is_running = false;
                    self.apply_selected_pattern();
                }
            });

            ui.horizontal(|ui| {
                ui.label("Speed:");
                let mut speed = 1.0 / self.update_interval.as_secs_f32();
                if ui.add(egui::Slider::new(&mut speed, 0.5..=60.0).suffix(" gen/sec")).changed() {
                    self.update_interval = Duration::from_secs_f32(1.0 / speed);
                }

                ui.separator();

                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);
                ui.label("Lines:");
                ui.color_edit_button_srgba(&mut self.line_color);
            });

            ui.separator();
            ui.label("Click cells to toggle them while paused. Release any key to quit.");
            ui.separator();

            self.draw_grid(ui);

            ui.separator();

            let live_cells = self.grid().live_count();
            let total = self.grid().cell_count();
            ui.horizontal(|ui| {
                ui.label(format!("Generation: {}", self.generation()));
                ui.label(format!("Live cells: {live_cells}"));
                ui.label(format!("Population: {:.1}%", live_cells as f32 / total as f32 * 100.0));
            });
            ui.horizontal(|ui| {
                match self.stability() {
                    Some(s) => ui.label(format!("Stability: {s:.2}%")),
                    None => ui.label("Stability: -"),
                };
                ui.label(format!("Highest stability: {:.2}%", self.highest_stability()));
            });
        });

        if self.is_running {
            ctx.request_repaint_after(self.update_interval);
        }
    }
}

impl GameOfLife {
    fn draw_grid(&mut self, ui: &mut egui::Ui) {
        let (width, height) = self.grid().dimensions();
        let cell = self.cell_size;
        let total_size = Vec2::new(width as f32 * cell, height as f32 * cell);

        let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());
        let origin = response.rect.min;

        for ((x, y), alive) in self.grid().iter() {
            let rect = Rect::from_min_size(
                origin + Vec2::new(x as f32 * cell, y as f32 * cell),
                Vec2::splat(cell),
            );
            let color = if alive { self.live_color } else { self.dead_color };
            painter.rect_filled(rect, 0.0, color);
        }

        let stroke = Stroke::new(1.0, self.line_color);
        for x in 0..=width {
            let px = origin.x + x as f32 * cell;
            painter.line_segment([Pos2::new(px, origin.y), Pos2::new(px, origin.y + total_size.y)], stroke);
        }
        for y in 0..=height {
            let py = origin.y + y as f32 * cell;
            painter.line_segment([Pos2::new(origin.x, py), Pos2::new(origin.x + total_size.x, py)], stroke);
        }

        if !self.is_running && response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let offset = pos - origin;
                if offset.x >= 0.0 && offset.y >= 0.0 {
                    let (x, y) = ((offset.x / cell) as usize, (offset.y / cell) as usize);
                    if x < width && y < height {
                        self.toggle_cell(x, y);
                    }
                }
            }
        }
    }
}
