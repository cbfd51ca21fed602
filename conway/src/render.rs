//! Renderers receive a read-only grid after every half-step of a run.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crate::grid::Grid;

pub trait Renderer {
    fn display(&mut self, generation: u64, grid: &Grid) -> io::Result<()>;
}

/// Discards every frame.
#[derive(Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn display(&mut self, _generation: u64, _grid: &Grid) -> io::Result<()> {
        Ok(())
    }
}

/// Prints the grid as text, `  X` for a live cell and `  -` for a dead one.
#[derive(Debug)]
pub struct TextRenderer<W> {
    out: W,
    interval: Duration,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            interval: Duration::ZERO,
        }
    }

    /// Sleeps for `interval` after each frame.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn display(&mut self, generation: u64, grid: &Grid) -> io::Result<()> {
        writeln!(
            self.out,
            "Generation {generation} ({} x {})",
            grid.row_count(),
            grid.column_count()
        )?;
        for row in grid.rows() {
            let line: String = row
                .iter()
                .map(|&alive| if alive { "  X" } else { "  -" })
                .collect();
            writeln!(self.out, "{line}")?;
        }
        writeln!(self.out)?;
        self.out.flush()?;

        if !self.interval.is_zero() {
            thread::sleep(self.interval);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_frame_layout() {
        let mut grid = Grid::new(2, 3).unwrap();
        grid.set(0, 1, true).unwrap();
        grid.set(1, 2, true).unwrap();

        let mut renderer = TextRenderer::new(Vec::new());
        renderer.display(4, &grid).unwrap();
        let text = String::from_utf8(renderer.into_inner()).unwrap();

        assert_eq!(text, "Generation 4 (2 x 3)\n  -  X  -\n  -  -  X\n\n");
    }
}
