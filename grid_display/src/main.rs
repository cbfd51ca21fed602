// main.rs - egui viewer for the growing-grid Game of Life

use std::time::{Duration, Instant};

use anyhow::anyhow;
use eframe::egui;
use egui::Color32;

use conway::{Game, GameError};

mod ui;

const START_ROWS: usize = 30;
const START_COLS: usize = 30;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let game = Game::new(START_ROWS, START_COLS)?;
    let app = LifeApp::new(game);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 950.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Growing Game of Life",
        options,
        Box::new(move |_cc| Box::new(app)),
    )
    .map_err(|e| anyhow!("viewer failed: {e}"))
}

pub struct LifeApp {
    pub game: Game,
    pub is_running: bool,
    pub last_update: Instant,
    pub update_interval: Duration,
    pub live_color: Color32,
    pub dead_color: Color32,
    pub last_error: Option<String>,
}

impl LifeApp {
    pub fn new(game: Game) -> Self {
        Self {
            game,
            is_running: false,
            last_update: Instant::now(),
            update_interval: Duration::from_millis(200),
            live_color: Color32::from_rgb(0, 200, 0),
            dead_color: Color32::from_rgb(40, 40, 40),
            last_error: None,
        }
    }

    /// Advances one generation, pausing on failure.
    pub fn step(&mut self) {
        if let Err(e) = self.game.step() {
            self.fail(e);
        }
    }

    pub fn toggle_cell(&mut self, row: usize, col: usize) {
        if let Err(e) = self.game.toggle_cell(row, col) {
            self.fail(e.into());
        }
    }

    pub fn clear(&mut self) {
        self.is_running = false;
        self.last_error = None;
        self.game.clear();
    }

    fn fail(&mut self, e: GameError) {
        log::error!("{e}");
        self.is_running = false;
        self.last_error = Some(e.to_string());
    }
}
