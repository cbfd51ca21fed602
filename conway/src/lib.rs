//! Conway's Game of Life on a grid that grows outward whenever life
//! reaches one of its edges.
//!
//! A [`Game`] owns two [`Grid`]s. Each generation the per-cell phase fills the
//! output grid from the frozen input (row tasks on a tokio runtime, or a plain
//! loop), the growth phase extends the output on every side where a cell just
//! outside the input would be born, and the output is then copied back.

pub mod classify;
pub mod config;
pub mod error;
pub mod game;
pub mod grid;
pub mod render;
pub mod rule;

pub use classify::{CellTypeClassifier, NeighborOffsetTable, PositionalClass, classify};
pub use config::{GameConfig, Schedule};
pub use error::{GameError, LifeError};
pub use game::{Game, GameState};
pub use grid::{Coord, Grid, Row};
pub use render::{NullRenderer, Renderer, TextRenderer};
pub use rule::{EvolutionRule, Growth, next_state};
