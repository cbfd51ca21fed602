//! Error types for the life engine.

use thiserror::Error;

use crate::classify::PositionalClass;

/// Errors raised by grid access, classification and rule evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifeError {
    #[error("invalid grid dimensions {rows}x{cols}: both must be at least 1")]
    InvalidDimension { rows: usize, cols: usize },

    #[error("coordinate ({row}, {col}) is outside a {rows}x{cols} grid")]
    OutOfBounds {
        row: isize,
        col: isize,
        rows: usize,
        cols: usize,
    },

    #[error("row index {index} is outside 0..{rows}")]
    RowIndexOutOfBounds { index: usize, rows: usize },

    #[error("row has {got} cells but the grid has {expected} columns")]
    RowWidthMismatch { expected: usize, got: usize },

    #[error("no neighbor offsets for {class:?} at ({row}, {col})")]
    MissingOffsetTableEntry {
        class: PositionalClass,
        row: isize,
        col: isize,
    },
}

/// Errors raised while driving a [`Game`](crate::Game).
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Life(#[from] LifeError),

    #[error("failed to start the evolution runtime: {0}")]
    Runtime(#[source] std::io::Error),

    #[error("row worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),

    #[error("renderer failed: {0}")]
    Render(#[source] std::io::Error),

    #[error("generation count must be at least 1")]
    InvalidGenerationCount,
}

pub type Result<T, E = LifeError> = std::result::Result<T, E>;
