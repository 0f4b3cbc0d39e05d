// main.rs - Game of Life desktop app
//
// Left side: the board canvas. Right side: the controls. All engine state
// lives behind one mutex shared with the background play task.

use std::path::PathBuf;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use eframe::egui;
use egui::Color32;

mod patterns;
mod player;
mod ui;

use life_engine::{Board, DEFAULT_BOARD_SIZE, MIN_PLAY_SPEED};
use player::Player;

fn main() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1060.0, 760.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Game of Life",
        options,
        Box::new(|_cc| Box::new(LifeApp::default())),
    )
}

pub struct LifeApp {
    board: Arc<Mutex<Board>>,
    player: Player,
    generation: Arc<AtomicU32>,

    pub speed: u8,
    pub size_text: String,
    pub path_text: String,
    pub status: String,
    pub selected_pattern: usize,

    pub live_color: Color32,
    pub dead_color: Color32,
    pub gridline_color: Color32,
}

impl Default for LifeApp {
    fn default() -> Self {
        Self {
            board: Arc::new(Mutex::new(Board::default())),
            player: Player::new(MIN_PLAY_SPEED),
            generation: Arc::new(AtomicU32::new(0)),
            speed: MIN_PLAY_SPEED,
            size_text: DEFAULT_BOARD_SIZE.to_string(),
            path_text: String::new(),
            status: String::new(),
            selected_pattern: 0,
            live_color: Color32::from_rgb(239, 234, 90),
            dead_color: Color32::from_rgb(84, 84, 84),
            gridline_color: Color32::from_rgb(112, 112, 112),
        }
    }
}

impl LifeApp {
    pub fn is_playing(&self) -> bool {
        self.player.is_playing()
    }

    pub fn generation(&self) -> u32 {
        self.generation.load(Ordering::Relaxed)
    }

    pub fn evolve_once(&mut self) {
        self.board.lock().unwrap().evolve();
        self.generation.fetch_add(1, Ordering::Relaxed);
    }

    pub fn toggle_play(&mut self, ctx: &egui::Context) {
        if self.player.is_playing() {
            self.player.stop();
        } else {
            self.player.start(
                Arc::clone(&self.board),
                Arc::clone(&self.generation),
                ctx.clone(),
            );
        }
    }

    /// Reset button: clear the board and stop playing if we were.
    pub fn reset(&mut self) {
        self.player.stop();
        self.board.lock().unwrap().clear();
        self.generation.store(0, Ordering::Relaxed);
        self.status.clear();
    }

    pub fn set_speed(&mut self, speed: u8) {
        self.speed = speed;
        self.player.set_speed(speed);
    }

    pub fn resize_square(&mut self, size: u32) {
        if let Err(err) = self.board.lock().unwrap().resize(size, size) {
            self.status = err.to_string();
        }
    }

    pub fn apply_pattern(&mut self, index: usize) {
        let Some(pattern) = patterns::PATTERNS.get(index) else {
            return;
        };
        self.player.stop();
        let mut board = self.board.lock().unwrap();
        if board.load(&pattern.layout()).is_ok() {
            self.size_text = board.rows().to_string();
            self.generation.store(0, Ordering::Relaxed);
            self.status = format!("Applied pattern: {}", pattern.name);
        }
    }

    /// Load button: empty path behaves like a cancelled dialog (no-op).
    /// On any failure the board is left exactly as it was.
    pub fn load_board(&mut self) {
        if self.path_text.is_empty() {
            return;
        }
        self.player.stop();

        let path = PathBuf::from(&self.path_text);
        match life_engine::layout::read_file(&path) {
            Ok(layout) => {
                let mut board = self.board.lock().unwrap();
                match board.load(&layout) {
                    Ok(()) => {
                        self.size_text = board.rows().to_string();
                        self.generation.store(0, Ordering::Relaxed);
                        self.status = format!("Loaded {}", path.display());
                    }
                    Err(err) => self.status = err.to_string(),
                }
            }
            Err(err) => self.status = err.to_string(),
        }
    }

    /// Save button: empty path is a no-op, same as load.
    pub fn save_board(&mut self) {
        if self.path_text.is_empty() {
            return;
        }
        self.player.stop();

        let path = PathBuf::from(&self.path_text);
        let layout = self.board.lock().unwrap().layout();
        match life_engine::layout::write_file(&path, &layout) {
            Ok(()) => self.status = format!("Saved {}", path.display()),
            Err(err) => self.status = err.to_string(),
        }
    }

    pub fn toggle_cell(&mut self, x: i32, y: i32) {
        self.board.lock().unwrap().toggle_cell(x, y);
    }

    /// Snapshot for painting: dimensions, live cells, population.
    pub fn board_snapshot(&self) -> (u32, u32, Vec<life_engine::Cell>, usize) {
        let board = self.board.lock().unwrap();
        let cells = board.live_cells().collect();
        (board.rows(), board.columns(), cells, board.population())
    }
}
