// config.rs - Run configuration for the life engine

use std::time::Duration;

// Bundled driver: a single live row of ten cells run for fifty generations.
pub const DEFAULT_ROWS: usize = 1;
pub const DEFAULT_COLS: usize = 10;
pub const DEFAULT_GENERATIONS: u64 = 50;

/// How the per-cell phase of a generation is executed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Schedule {
    /// One tokio task per row, joined before growth.
    #[default]
    Parallel,
    /// Plain loop over every cell.
    Sequential,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    pub max_generations: u64,
    pub schedule: Schedule,
    /// Cells toggled alive before the first generation.
    pub seed: Vec<(usize, usize)>,
    /// Pause between rendered frames.
    pub frame_interval: Duration,
}

impl GameConfig {
    /// Every cell of a `rows` x `cols` grid.
    pub fn full_seed(rows: usize, cols: usize) -> Vec<(usize, usize)> {
        (0..rows)
            .flat_map(|row| (0..cols).map(move |col| (row, col)))
            .collect()
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            max_generations: DEFAULT_GENERATIONS,
            schedule: Schedule::default(),
            seed: Self::full_seed(DEFAULT_ROWS, DEFAULT_COLS),
            frame_interval: Duration::ZERO,
        }
    }
}
