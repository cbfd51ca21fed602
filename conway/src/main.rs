// main.rs - Console driver for the growing-grid Game of Life

use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use conway::config::{DEFAULT_COLS, DEFAULT_GENERATIONS, DEFAULT_ROWS};
use conway::{Game, GameConfig, NullRenderer, Schedule, TextRenderer};

/// Conway's Game of Life on a grid that grows as life reaches its edges.
#[derive(Debug, Parser)]
#[command(name = "conway", version)]
struct Cli {
    /// Initial number of rows.
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    rows: usize,

    /// Initial number of columns.
    #[arg(long, default_value_t = DEFAULT_COLS)]
    cols: usize,

    /// Generations to run.
    #[arg(short, long, default_value_t = DEFAULT_GENERATIONS)]
    generations: u64,

    /// Toggle a cell before the run, as ROW,COL. Repeatable. Without any,
    /// every cell starts alive.
    #[arg(long = "cell", value_name = "ROW,COL", value_parser = parse_cell)]
    cells: Vec<(usize, usize)>,

    /// Evolve cells in a plain loop instead of row tasks.
    #[arg(long)]
    sequential: bool,

    /// Pause between frames, in milliseconds.
    #[arg(long, default_value_t = 0)]
    interval_ms: u64,

    /// Only print the final summary.
    #[arg(short, long)]
    quiet: bool,
}

fn parse_cell(s: &str) -> Result<(usize, usize), String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got `{s}`"))?;
    let row = row.trim().parse::<usize>().map_err(|e| format!("bad row `{row}`: {e}"))?;
    let col = col.trim().parse::<usize>().map_err(|e| format!("bad column `{col}`: {e}"))?;
    Ok((row, col))
}

impl Cli {
    fn into_config(self) -> GameConfig {
        let seed = if self.cells.is_empty() {
            GameConfig::full_seed(self.rows, self.cols)
        } else {
            self.cells
        };
        GameConfig {
            rows: self.rows,
            cols: self.cols,
            max_generations: self.generations,
            schedule: if self.sequential {
                Schedule::Sequential
            } else {
                Schedule::Parallel
            },
            seed,
            frame_interval: Duration::from_millis(self.interval_ms),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let quiet = cli.quiet;
    let config = cli.into_config();

    let mut game = Game::with_config(&config).context("failed to set up the game")?;
    if quiet {
        game.run(config.max_generations, &mut NullRenderer)?;
    } else {
        let mut renderer =
            TextRenderer::new(io::stdout().lock()).with_interval(config.frame_interval);
        game.run(config.max_generations, &mut renderer)?;
    }

    let grid = game.grid();
    println!(
        "Generation {}: {} x {} grid, {} live cells",
        game.generation(),
        grid.row_count(),
        grid.column_count(),
        grid.population()
    );
    Ok(())
}
