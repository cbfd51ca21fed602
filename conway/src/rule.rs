//! B3/S23 transition rule and edge-growth detection.

use log::trace;

use crate::classify::CellTypeClassifier;
use crate::error::Result;
use crate::grid::{Coord, Grid, Row};

/// Canonical Life transition.
pub fn next_state(alive: bool, alive_neighbors: u8) -> bool {
    match (alive, alive_neighbors) {
        (true, 2) | (true, 3) => true, // Survival
        (false, 3) => true,            // Birth
        _ => false,                    // Death or stays dead
    }
}

/// Which sides of the output grid grew during one generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Growth {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl Growth {
    pub fn any(&self) -> bool {
        self.top || self.bottom || self.left || self.right
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

#[derive(Debug, Clone)]
pub struct EvolutionRule {
    classifier: CellTypeClassifier,
}

impl EvolutionRule {
    pub fn new(classifier: CellTypeClassifier) -> Self {
        Self { classifier }
    }

    /// Live neighbors of `coord`, which may be a virtual cell one step outside.
    pub fn count_alive_neighbors(&self, grid: &Grid, coord: Coord) -> Result<u8> {
        let offsets = self
            .classifier
            .neighbors_of(grid.row_count(), grid.column_count(), coord)?;
        let count = offsets
            .iter()
            .filter(|&&offset| grid.is_alive(coord.offset(offset)))
            .count();
        Ok(count as u8)
    }

    /// Next state of the real cell at `coord` in `input`.
    pub fn next_cell_state(&self, input: &Grid, coord: Coord) -> Result<bool> {
        let count = self.count_alive_neighbors(input, coord)?;
        Ok(next_state(input.is_alive(coord), count))
    }

    /// Marks `coord` alive in `output` when it lives on. `output` is expected
    /// to start the generation all dead.
    pub fn evolve_cell(&self, input: &Grid, output: &mut Grid, coord: Coord) -> Result<()> {
        if self.next_cell_state(input, coord)? {
            output.set(coord.row as usize, coord.col as usize, true)?;
        }
        Ok(())
    }

    /// Next states of one whole input row.
    pub fn evolve_row(&self, input: &Grid, row: usize) -> Result<Row> {
        (0..input.column_count())
            .map(|col| self.next_cell_state(input, (row, col).into()))
            .collect()
    }

    /// Grows `output` by one row/column on every side where a virtual cell
    /// just outside `input` would be born, and marks those births alive.
    ///
    /// Sides are applied top, bottom, left, right. Detection only reads
    /// `input`, so growth on one side never shifts the scan of another.
    pub fn evolve_grid_growth(&self, input: &Grid, output: &mut Grid) -> Result<Growth> {
        let top = self.grow_side(input, output, Side::Top, false)?;
        let bottom = self.grow_side(input, output, Side::Bottom, false)?;
        let left = self.grow_side(input, output, Side::Left, top)?;
        let right = self.grow_side(input, output, Side::Right, top)?;
        Ok(Growth { top, bottom, left, right })
    }

    /// Scans one side. `shifted` is set once a top row has been inserted,
    /// moving every input row down by one in `output`.
    fn grow_side(&self, input: &Grid, output: &mut Grid, side: Side, shifted: bool) -> Result<bool> {
        let rows = input.row_count() as isize;
        let cols = input.column_count() as isize;
        let extent = match side {
            Side::Top | Side::Bottom => cols,
            Side::Left | Side::Right => rows,
        };

        let mut grown = false;
        for i in 1..extent - 1 {
            let virtual_cell = match side {
                Side::Top => Coord::new(-1, i),
                Side::Bottom => Coord::new(rows, i),
                Side::Left => Coord::new(i, -1),
                Side::Right => Coord::new(i, cols),
            };
            if self.count_alive_neighbors(input, virtual_cell)? != 3 {
                continue;
            }
            if !grown {
                match side {
                    Side::Top => output.insert_row(0, output.dead_row())?,
                    Side::Bottom => output.append_row(output.dead_row())?,
                    Side::Left => output.insert_column_at_start(),
                    Side::Right => output.append_column(),
                }
                grown = true;
            }
            trace!("birth outside the {side:?} edge at ({}, {})", virtual_cell.row, virtual_cell.col);

            let i = i as usize;
            let (row, col) = match side {
                Side::Top => (0, i),
                Side::Bottom => (output.row_count() - 1, i),
                Side::Left => (i + shifted as usize, 0),
                Side::Right => (i + shifted as usize, output.column_count() - 1),
            };
            output.set(row, col, true)?;
        }
        Ok(grown)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::classify::NeighborOffsetTable;
    use crate::error::LifeError;

    fn rule() -> EvolutionRule {
        EvolutionRule::new(CellTypeClassifier::new(Arc::new(NeighborOffsetTable::new())))
    }

    fn grid_from(rows: &[&str]) -> Grid {
        let mut grid = Grid::new(rows.len(), rows[0].len()).unwrap();
        for (r, line) in rows.iter().enumerate() {
            for (c, ch) in line.chars().enumerate() {
                if ch == 'X' {
                    grid.set(r, c, true).unwrap();
                }
            }
        }
        grid
    }

    #[test]
    fn rule_table() {
        for count in 0..=8u8 {
            assert_eq!(next_state(true, count), count == 2 || count == 3, "alive, {count}");
            assert_eq!(next_state(false, count), count == 3, "dead, {count}");
        }
    }

    #[test]
    fn counts_all_eight_in_the_center() {
        let grid = grid_from(&["XXX", "XXX", "XXX"]);
        let rule = rule();
        assert_eq!(rule.count_alive_neighbors(&grid, Coord::new(1, 1)).unwrap(), 8);
        assert_eq!(rule.count_alive_neighbors(&grid, Coord::new(0, 0)).unwrap(), 3);
        assert_eq!(rule.count_alive_neighbors(&grid, Coord::new(0, 1)).unwrap(), 5);
        assert_eq!(rule.count_alive_neighbors(&grid, Coord::new(-1, 1)).unwrap(), 3);
    }

    #[test]
    fn counting_an_outer_corner_fails() {
        let grid = Grid::new(3, 3).unwrap();
        assert!(matches!(
            rule().count_alive_neighbors(&grid, Coord::new(-1, -1)),
            Err(LifeError::MissingOffsetTableEntry { .. })
        ));
        assert!(matches!(
            rule().count_alive_neighbors(&grid, Coord::new(-2, 1)),
            Err(LifeError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn evolve_cell_only_sets_survivors() {
        let input = grid_from(&["X.X", "...", "X.."]);
        let mut output = Grid::new(3, 3).unwrap();
        let rule = rule();
        for r in 0..3 {
            for c in 0..3 {
                rule.evolve_cell(&input, &mut output, Coord::new(r, c)).unwrap();
            }
        }
        // Only (1, 1) has three neighbors.
        assert_eq!(output, grid_from(&["...", ".X.", "..."]));
    }

    #[test]
    fn evolve_row_matches_evolve_cell() {
        let input = grid_from(&[".X..", "..X.", "XXX.", "...."]);
        let rule = rule();
        let mut output = Grid::new(4, 4).unwrap();
        for r in 0..4 {
            for c in 0..4 {
                rule.evolve_cell(&input, &mut output, Coord::new(r, c)).unwrap();
            }
        }
        for r in 0..4 {
            assert_eq!(rule.evolve_row(&input, r).unwrap(), output.row(r).unwrap());
        }
    }

    #[test]
    fn growth_on_top_inserts_one_row() {
        let input = grid_from(&["XXX", "...", "..."]);
        let mut output = Grid::new(3, 3).unwrap();
        let growth = rule().evolve_grid_growth(&input, &mut output).unwrap();
        assert_eq!(growth, Growth { top: true, ..Growth::default() });
        assert_eq!(output, grid_from(&[".X.", "...", "...", "..."]));
    }

    #[test]
    fn growth_on_right_appends_one_column() {
        let input = grid_from(&["..X", "..X", "..X"]);
        let mut output = Grid::new(3, 3).unwrap();
        let growth = rule().evolve_grid_growth(&input, &mut output).unwrap();
        assert_eq!(growth, Growth { right: true, ..Growth::default() });
        assert_eq!(output, grid_from(&["....", "...X", "...."]));
    }

    #[test]
    fn one_growth_per_side_with_many_births() {
        let input = grid_from(&["XXXXXX", "......", "......"]);
        let mut output = Grid::new(3, 6).unwrap();
        rule().evolve_grid_growth(&input, &mut output).unwrap();
        assert_eq!(output.row_count(), 4);
        assert_eq!(output.row(0).unwrap(), &[false, true, true, true, true, false]);
    }

    #[test]
    fn left_growth_lands_below_a_new_top_row() {
        let input = grid_from(&["XXX.", "X...", "X...", "...."]);
        let mut output = Grid::new(4, 4).unwrap();
        let growth = rule().evolve_grid_growth(&input, &mut output).unwrap();
        assert_eq!(
            growth,
            Growth { top: true, left: true, ..Growth::default() }
        );
        // Virtual (-1, 1) and (1, -1) are both born; the second lands in
        // output row 2 because of the inserted top row.
        assert_eq!(
            output,
            grid_from(&["..X..", ".....", "X....", ".....", "....."])
        );
    }

    #[test]
    fn no_growth_for_an_interior_block() {
        let input = grid_from(&["....", ".XX.", ".XX.", "...."]);
        let mut output = Grid::new(4, 4).unwrap();
        let growth = rule().evolve_grid_growth(&input, &mut output).unwrap();
        assert!(!growth.any());
        assert_eq!(output, Grid::new(4, 4).unwrap());
    }
}
