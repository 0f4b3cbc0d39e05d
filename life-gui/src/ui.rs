// ui.rs - Board canvas and control panel

use eframe::egui;
use egui::{Color32, Key, Rect, Stroke, Vec2};

use life_engine::{MAX_BOARD_SIZE, MAX_PLAY_SPEED, MIN_BOARD_SIZE, MIN_PLAY_SPEED, SizeEntry};

use crate::LifeApp;
use crate::patterns;

const BOARD_PIXELS: f32 = 660.0;

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);

        egui::SidePanel::right("controls")
            .resizable(false)
            .min_width(340.0)
            .show(ctx, |ui| self.controls(ctx, ui));

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Game of Life");
            ui.separator();
            self.board_canvas(ui);
        });

        // Keep animation smooth while playing
        if self.is_playing() {
            ctx.request_repaint();
        }
    }
}

impl LifeApp {
    fn handle_keys(&mut self, ctx: &egui::Context) {
        // Keys stay inert while a text box has focus
        if ctx.wants_keyboard_input() {
            return;
        }

        let (evolve, play, reset, load, save, slower, faster) = ctx.input(|i| {
            (
                i.key_pressed(Key::E),
                i.key_pressed(Key::P),
                i.key_pressed(Key::R),
                i.key_pressed(Key::L),
                i.key_pressed(Key::S),
                i.key_pressed(Key::ArrowLeft),
                i.key_pressed(Key::ArrowRight),
            )
        });

        if evolve {
            self.evolve_once();
        }
        if play {
            self.toggle_play(ctx);
        }
        if reset {
            self.reset();
        }
        if load {
            self.load_board();
        }
        if save {
            self.save_board();
        }
        if slower && self.speed > MIN_PLAY_SPEED {
            self.set_speed(self.speed - 1);
        }
        if faster && self.speed < MAX_PLAY_SPEED {
            self.set_speed(self.speed + 1);
        }
    }

    fn controls(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        ui.heading("Controls");
        ui.separator();

        ui.horizontal(|ui| {
            if ui.button(">> Evolve once (E)").clicked() {
                self.evolve_once();
            }

            let play_text = if self.is_playing() {
                ">> Pause (P)"
            } else {
                ">> Play (P)"
            };
            if ui.button(play_text).clicked() {
                self.toggle_play(ctx);
            }

            if ui.button("Reset board (R)").clicked() {
                self.reset();
            }
        });

        ui.separator();

        // Speed slider, arrow keys nudge it by one
        ui.label(format!(
            "Simulation speed ({}-{})   (\u{2190}/\u{2192})",
            MIN_PLAY_SPEED, MAX_PLAY_SPEED
        ));
        let mut speed = self.speed;
        if ui
            .add(egui::Slider::new(&mut speed, MIN_PLAY_SPEED..=MAX_PLAY_SPEED))
            .changed()
        {
            self.set_speed(speed);
        }

        ui.separator();

        // Board size entry, validated keystroke by keystroke: a rejected
        // edit restores the previous text and never touches the board.
        ui.horizontal(|ui| {
            ui.label(format!("Board size ({}-{})", MIN_BOARD_SIZE, MAX_BOARD_SIZE));
            let mut candidate = self.size_text.clone();
            if ui
                .add(egui::TextEdit::singleline(&mut candidate).desired_width(60.0))
                .changed()
            {
                match life_engine::validate_size_entry(&candidate) {
                    Some(SizeEntry::Empty) => self.size_text = candidate,
                    Some(SizeEntry::Size(size)) => {
                        self.size_text = candidate;
                        self.resize_square(size);
                    }
                    None => {} // keep the previous text
                }
            }
        });

        ui.separator();

        // Load / save through a path box; an empty path is a no-op, the
        // same as closing a file dialog without picking anything.
        ui.label("Layout file:");
        ui.add(egui::TextEdit::singleline(&mut self.path_text).hint_text("layouts/pattern.csv"));
        ui.horizontal(|ui| {
            if ui.button("Load board (L)").clicked() {
                self.load_board();
            }
            if ui.button("Save board (S)").clicked() {
                self.save_board();
            }
        });

        ui.separator();

        // Built-in patterns
        ui.horizontal(|ui| {
            ui.label("Pattern:");
            egui::ComboBox::from_id_source("pattern_selector")
                .selected_text(patterns::PATTERNS[self.selected_pattern].name)
                .show_ui(ui, |ui| {
                    for (i, pattern) in patterns::PATTERNS.iter().enumerate() {
                        ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                    }
                });
            if ui.button("Apply").clicked() {
                self.apply_pattern(self.selected_pattern);
            }
        });

        ui.separator();

        ui.horizontal(|ui| {
            ui.label("Live:");
            ui.color_edit_button_srgba(&mut self.live_color);
            ui.label("Dead:");
            ui.color_edit_button_srgba(&mut self.dead_color);
        });

        ui.separator();

        if !self.status.is_empty() {
            ui.label(self.status.clone());
        }
    }

    fn board_canvas(&mut self, ui: &mut egui::Ui) {
        let (rows, columns, cells, population) = self.board_snapshot();

        // x runs horizontally over rows cells, y vertically over columns
        let cell_w = BOARD_PIXELS / rows as f32;
        let cell_h = BOARD_PIXELS / columns as f32;

        let start_pos = ui.cursor().min;
        let total_size = Vec2::splat(BOARD_PIXELS);
        let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());

        painter.rect_filled(Rect::from_min_size(start_pos, total_size), 0.0, self.dead_color);

        // Gridlines
        let stroke = Stroke::new(1.0, self.gridline_color);
        for x in 0..=rows {
            let px = start_pos.x + x as f32 * cell_w;
            painter.line_segment(
                [egui::pos2(px, start_pos.y), egui::pos2(px, start_pos.y + BOARD_PIXELS)],
                stroke,
            );
        }
        for y in 0..=columns {
            let py = start_pos.y + y as f32 * cell_h;
            painter.line_segment(
                [egui::pos2(start_pos.x, py), egui::pos2(start_pos.x + BOARD_PIXELS, py)],
                stroke,
            );
        }

        // Live cells; ones outside the rectangle exist but have no pixel
        for (x, y) in &cells {
            if *x < 0 || *y < 0 || *x >= rows as i32 || *y >= columns as i32 {
                continue;
            }
            let rect = Rect::from_min_size(
                egui::pos2(
                    start_pos.x + *x as f32 * cell_w,
                    start_pos.y + *y as f32 * cell_h,
                ),
                Vec2::new(cell_w, cell_h),
            );
            painter.rect_filled(rect, 0.0, self.live_color);
            painter.rect_stroke(rect, 0.0, Stroke::new(1.0, Color32::from_gray(133)));
        }

        // Click to toggle
        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let x = ((pos.x - start_pos.x) / cell_w).floor() as i32;
                let y = ((pos.y - start_pos.y) / cell_h).floor() as i32;
                if x >= 0 && y >= 0 && x < rows as i32 && y < columns as i32 {
                    self.toggle_cell(x, y);
                }
            }
        }

        ui.separator();
        let total = rows as usize * columns as usize;
        ui.horizontal(|ui| {
            ui.label(format!("Generation: {}", self.generation()));
            ui.label(format!("Live cells: {}", population));
            if total > 0 {
                ui.label(format!(
                    "Population: {:.1}%",
                    population as f32 / total as f32 * 100.0
                ));
            }
        });
    }
}
