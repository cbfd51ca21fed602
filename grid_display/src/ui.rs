// ui.rs - Controls and grid painting for the viewer

use std::time::{Duration, Instant};

use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};

use crate::LifeApp;

const MAX_BOX_SIZE: f32 = 15.0;
const MIN_BOX_SIZE: f32 = 2.0;
const SPACING: f32 = 0.5;

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Auto-update if running
        if self.is_running && self.last_update.elapsed() >= self.update_interval {
            self.step();
            self.last_update = Instant::now();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Growing Game of Life");

            // Controls
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
                    self.step();
                }

                if ui.button("⏹ Clear").clicked() {
                    self.clear();
                }

                ui.separator();

                ui.label(format!("Generation: {}", self.game.generation()));
            });

            ui.separator();

            // Speed control
            ui.horizontal(|ui| {
                ui.label("Speed:");
                let mut speed = 1000.0 / self.update_interval.as_millis() as f32;
                if ui.add(egui::Slider::new(&mut speed, 0.5..=90.0).suffix(" gen/sec")).changed() {
                    self.update_interval = Duration::from_millis((1000.0 / speed) as u64);
                }

                ui.separator();

                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);
            });

            ui.separator();

            ui.label("Click cells to toggle them while paused. The grid grows as life reaches its edges.");
            if let Some(error) = &self.last_error {
                ui.colored_label(Color32::RED, error);
            }

            ui.separator();

            let rows = self.game.grid().row_count();
            let cols = self.game.grid().column_count();

            // Shrink cells so the whole grid stays visible as it grows
            let available = ui.available_size();
            let box_size = ((available.x / cols as f32).min((available.y - 40.0) / rows as f32) - SPACING)
                .clamp(MIN_BOX_SIZE, MAX_BOX_SIZE);
            let pitch = box_size + SPACING;

            let start_pos = ui.cursor().min;
            let total_size = Vec2::new(pitch * cols as f32 - SPACING, pitch * rows as f32 - SPACING);

            let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());

            // Fill background
            painter.rect_filled(
                Rect::from_min_size(start_pos, total_size),
                0.0,
                Color32::BLACK,
            );

            for (row, cells) in self.game.grid().rows().enumerate() {
                for (col, &alive) in cells.iter().enumerate() {
                    let x = start_pos.x + col as f32 * pitch;
                    let y = start_pos.y + row as f32 * pitch;
                    let rect = Rect::from_min_size(egui::pos2(x, y), Vec2::splat(box_size));

                    let cell_color = if alive { self.live_color } else { self.dead_color };
                    painter.rect_filled(rect, 1.0, cell_color);

                    if box_size >= 4.0 {
                        painter.rect_stroke(rect, 1.0, Stroke::new(0.2, Color32::from_gray(60)));
                    }
                }
            }

            // Handle clicking (only when not running)
            if !self.is_running && response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    let offset = pos - start_pos;
                    if offset.x >= 0.0 && offset.y >= 0.0 {
                        let row = (offset.y / pitch) as usize;
                        let col = (offset.x / pitch) as usize;
                        if row < rows && col < cols {
                            self.toggle_cell(row, col);
                        }
                    }
                }
            }

            ui.separator();

            // Statistics
            let live_cells = self.game.grid().population();
            let total = rows * cols;
            ui.horizontal(|ui| {
                ui.label(format!("Size: {rows} x {cols}"));
                ui.label(format!("Live cells: {live_cells}"));
                ui.label(format!("Dead cells: {}", total - live_cells));
                ui.label(format!("Population: {:.1}%", (live_cells as f32 / total as f32) * 100.0));
            });
        });

        // Request repaint if running to keep animation smooth
        if self.is_running {
            ctx.request_repaint();
        }
    }
}
