// game.rs - Growing-grid Game of Life with row coroutines

use std::sync::Arc;

use log::{debug, info};

use crate::classify::{CellTypeClassifier, NeighborOffsetTable};
use crate::config::{GameConfig, Schedule};
use crate::error::{GameError, Result};
use crate::grid::{Grid, Row};
use crate::render::Renderer;
use crate::rule::{EvolutionRule, Growth};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Idle,
    Running,
    Done,
}

/// Row coroutine: next states of one row of the frozen input snapshot.
async fn process_row(rule: EvolutionRule, grid: Arc<Grid>, row_index: usize) -> Result<(usize, Row)> {
    let row_result = rule.evolve_row(&grid, row_index)?;
    tokio::task::yield_now().await; // Cooperative yielding
    Ok((row_index, row_result))
}

/// Owns the current and next generation grids and steps them.
#[derive(Debug)]
pub struct Game {
    input: Grid,
    output: Grid,
    rule: EvolutionRule,
    schedule: Schedule,
    generation: u64,
    state: GameState,
    runtime: tokio::runtime::Runtime,
}

impl Game {
    /// An all-dead `rows` x `cols` game using the parallel schedule.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GameError> {
        let table = Arc::new(NeighborOffsetTable::new());
        let rule = EvolutionRule::new(CellTypeClassifier::new(table));
        let runtime = tokio::runtime::Runtime::new().map_err(GameError::Runtime)?;

        Ok(Self {
            input: Grid::new(rows, cols)?,
            output: Grid::new(rows, cols)?,
            rule,
            schedule: Schedule::default(),
            generation: 0,
            state: GameState::Idle,
            runtime,
        })
    }

    /// Builds a game from `config` and toggles its seed cells.
    pub fn with_config(config: &GameConfig) -> Result<Self, GameError> {
        let mut game = Self::new(config.rows, config.cols)?.with_schedule(config.schedule);
        for &(row, col) in &config.seed {
            game.toggle_cell(row, col)?;
        }
        Ok(game)
    }

    pub fn with_schedule(mut self, schedule: Schedule) -> Self {
        self.schedule = schedule;
        self
    }

    /// Current generation, read-only.
    pub fn grid(&self) -> &Grid {
        &self.input
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn schedule(&self) -> Schedule {
        self.schedule
    }

    pub fn toggle_cell(&mut self, row: usize, col: usize) -> Result<()> {
        self.input.toggle(row, col)
    }

    /// Kills every cell and rewinds to generation 0. The grid keeps its size.
    pub fn clear(&mut self) {
        self.input.reinitialize();
        self.output.reinitialize();
        self.generation = 0;
        self.state = GameState::Idle;
    }

    /// Runs `max_generations` steps, showing the grid before and after each.
    pub fn run<R: Renderer + ?Sized>(
        &mut self,
        max_generations: u64,
        renderer: &mut R,
    ) -> Result<(), GameError> {
        if max_generations == 0 {
            return Err(GameError::InvalidGenerationCount);
        }
        info!(
            "running {max_generations} generations from a {}x{} grid ({:?})",
            self.input.row_count(),
            self.input.column_count(),
            self.schedule
        );

        self.state = GameState::Running;
        for _ in 0..max_generations {
            renderer
                .display(self.generation, &self.input)
                .map_err(GameError::Render)?;
            self.step()?;
            renderer
                .display(self.generation, &self.input)
                .map_err(GameError::Render)?;
        }
        self.state = GameState::Done;

        info!(
            "finished at generation {}: {}x{} grid, population {}",
            self.generation,
            self.input.row_count(),
            self.input.column_count(),
            self.input.population()
        );
        Ok(())
    }

    /// Advances one generation: evolve cells, join, grow edges, then copy the
    /// output back into the input and clear the output.
    pub fn step(&mut self) -> Result<Growth, GameError> {
        self.state = GameState::Running;
        debug_assert_eq!(self.output.row_count(), self.input.row_count());
        debug_assert_eq!(self.output.column_count(), self.input.column_count());

        match self.schedule {
            Schedule::Parallel => self.evolve_cells_parallel()?,
            Schedule::Sequential => self.evolve_cells_sequential()?,
        }

        let growth = self.rule.evolve_grid_growth(&self.input, &mut self.output)?;

        self.input.copy_from(&self.output);
        self.output.reinitialize();
        self.generation += 1;

        debug!(
            "generation {}: {}x{} grid, population {}, growth {:?}",
            self.generation,
            self.input.row_count(),
            self.input.column_count(),
            self.input.population(),
            growth
        );
        Ok(growth)
    }

    fn evolve_cells_sequential(&mut self) -> Result<()> {
        for row in 0..self.input.row_count() {
            for col in 0..self.input.column_count() {
                self.rule
                    .evolve_cell(&self.input, &mut self.output, (row, col).into())?;
            }
        }
        Ok(())
    }

    fn evolve_cells_parallel(&mut self) -> Result<(), GameError> {
        // Tasks need 'static data, so they share a frozen copy of the input
        let snapshot = Arc::new(self.input.clone());
        let rule = &self.rule;
        let output = &mut self.output;

        self.runtime.block_on(async {
            // Spawn every row coroutine before awaiting any of them
            let mut handles = Vec::with_capacity(snapshot.row_count());
            for row in 0..snapshot.row_count() {
                let handle = tokio::spawn(process_row(rule.clone(), Arc::clone(&snapshot), row));
                handles.push(handle);
            }

            // Join every row before growth can reshape the output
            for handle in handles {
                let (row_index, completed_row) = handle.await??;
                for (col, alive) in completed_row.into_iter().enumerate() {
                    if alive {
                        output.set(row_index, col, true)?;
                    }
                }
            }
            Ok::<(), GameError>(())
        })
    }
}
