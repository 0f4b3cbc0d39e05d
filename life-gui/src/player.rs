// player.rs - Continuous-play driver
//
// A background tokio task that evolves the shared board, then sleeps for
// the interval the speed curve dictates. Cooperative cancellation: stop()
// clears the active flag and the in-flight lap finishes on its own.

use std::sync::atomic::{AtomicBool, AtomicU8, AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use eframe::egui;

use life_engine::{Board, play_interval};

pub struct Player {
    runtime: tokio::runtime::Runtime,
    active: Arc<AtomicBool>,
    speed: Arc<AtomicU8>,
}

impl Player {
    pub fn new(initial_speed: u8) -> Self {
        Self {
            runtime: tokio::runtime::Runtime::new().unwrap(),
            active: Arc::new(AtomicBool::new(false)),
            speed: Arc::new(AtomicU8::new(initial_speed)),
        }
    }

    pub fn is_playing(&self) -> bool {
        self.active.load(Ordering::Relaxed)
    }

    /// Takes effect on the next lap of a running play loop.
    pub fn set_speed(&self, speed: u8) {
        self.speed.store(speed, Ordering::Relaxed);
    }

    pub fn start(
        &self,
        board: Arc<Mutex<Board>>,
        generation: Arc<AtomicU32>,
        ctx: egui::Context,
    ) {
        if self.active.swap(true, Ordering::Relaxed) {
            return; // already playing
        }

        let active = Arc::clone(&self.active);
        let speed = Arc::clone(&self.speed);

        self.runtime.spawn(async move {
            while active.load(Ordering::Relaxed) {
                board.lock().unwrap().evolve();
                generation.fetch_add(1, Ordering::Relaxed);
                ctx.request_repaint();

                tokio::time::sleep(play_interval(speed.load(Ordering::Relaxed))).await;
            }
        });
    }

    /// Only prevents scheduling of the next step; there is no cancellation
    /// of a step already underway.
    pub fn stop(&self) {
        self.active.store(false, Ordering::Relaxed);
    }
}
