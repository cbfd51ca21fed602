//! Positional classification of grid coordinates.
//!
//! Every coordinate in `[-1, rows] x [-1, cols]` falls in one of thirteen
//! classes (or `None` for the outer corners). The class decides which of the
//! eight Moore offsets can reach a real cell:
//!
//! ```text
//!        -1    0   ..   c-1    c
//!  -1   None  OT  OT   OT   None
//!   0   OL    TL  T    TR   OR
//!  ..   OL    L   C    R    OR
//!  r-1  OL    BL  B    BR   OR
//!   r   None  OB  OB   OB   None
//! ```

use std::sync::Arc;

use crate::error::{LifeError, Result};
use crate::grid::Coord;

pub type Offset = (isize, isize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PositionalClass {
    TopLeftCorner,
    TopRightCorner,
    BottomLeftCorner,
    BottomRightCorner,
    TopSide,
    BottomSide,
    LeftSide,
    RightSide,
    Center,
    OuterTopSide,
    OuterRightSide,
    OuterBottomSide,
    OuterLeftSide,
    None,
}

impl PositionalClass {
    pub const COUNT: usize = 14;

    pub const ALL: [PositionalClass; Self::COUNT] = [
        Self::TopLeftCorner,
        Self::TopRightCorner,
        Self::BottomLeftCorner,
        Self::BottomRightCorner,
        Self::TopSide,
        Self::BottomSide,
        Self::LeftSide,
        Self::RightSide,
        Self::Center,
        Self::OuterTopSide,
        Self::OuterRightSide,
        Self::OuterBottomSide,
        Self::OuterLeftSide,
        Self::None,
    ];

    const fn index(self) -> usize {
        self as usize
    }
}

/// Classifies `coord` against a `rows` x `cols` grid.
///
/// Fails when the coordinate is more than one step outside the grid.
pub fn classify(rows: usize, cols: usize, coord: Coord) -> Result<PositionalClass> {
    let (r, c) = (rows as isize, cols as isize);
    let Coord { row, col } = coord;
    if row < -1 || row > r || col < -1 || col > c {
        return Err(LifeError::OutOfBounds { row, col, rows, cols });
    }

    let (last_row, last_col) = (r - 1, c - 1);
    let inner_row = 0 < row && row < last_row;
    let inner_col = 0 < col && col < last_col;

    use PositionalClass::*;
    let class = if (row, col) == (0, 0) {
        TopLeftCorner
    } else if (row, col) == (0, last_col) {
        TopRightCorner
    } else if (row, col) == (last_row, 0) {
        BottomLeftCorner
    } else if (row, col) == (last_row, last_col) {
        BottomRightCorner
    } else if row == 0 && inner_col {
        TopSide
    } else if row == last_row && inner_col {
        BottomSide
    } else if col == 0 && inner_row {
        LeftSide
    } else if col == last_col && inner_row {
        RightSide
    } else if inner_row && inner_col {
        Center
    } else if row == -1 && inner_col {
        OuterTopSide
    } else if row == r && inner_col {
        OuterBottomSide
    } else if col == -1 && inner_row {
        OuterLeftSide
    } else if col == c && inner_row {
        OuterRightSide
    } else {
        None
    };
    Ok(class)
}

// Moore offsets in row-major compass order: NW, N, NE, W, E, SW, S, SE.
#[rustfmt::skip]
const CENTER: &[Offset] = &[
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

const TOP_LEFT: &[Offset] = &[(0, 1), (1, 0), (1, 1)];
const TOP_RIGHT: &[Offset] = &[(0, -1), (1, -1), (1, 0)];
const BOTTOM_LEFT: &[Offset] = &[(-1, 0), (-1, 1), (0, 1)];
const BOTTOM_RIGHT: &[Offset] = &[(-1, -1), (-1, 0), (0, -1)];

const TOP: &[Offset] = &[(0, -1), (0, 1), (1, -1), (1, 0), (1, 1)];
const BOTTOM: &[Offset] = &[(-1, -1), (-1, 0), (-1, 1), (0, -1), (0, 1)];
const LEFT: &[Offset] = &[(-1, 0), (-1, 1), (0, 1), (1, 0), (1, 1)];
const RIGHT: &[Offset] = &[(-1, -1), (-1, 0), (0, -1), (1, -1), (1, 0)];

const OUTER_TOP: &[Offset] = &[(1, -1), (1, 0), (1, 1)];
const OUTER_RIGHT: &[Offset] = &[(-1, -1), (0, -1), (1, -1)];
const OUTER_BOTTOM: &[Offset] = &[(-1, -1), (-1, 0), (-1, 1)];
const OUTER_LEFT: &[Offset] = &[(-1, 1), (0, 1), (1, 1)];

/// Immutable class -> neighbor offsets lookup. Build once, share by `Arc`.
#[derive(Debug, Clone)]
pub struct NeighborOffsetTable {
    entries: [&'static [Offset]; PositionalClass::COUNT],
}

impl NeighborOffsetTable {
    /// The standard 8-neighbor table.
    pub fn new() -> Self {
        let mut entries: [&'static [Offset]; PositionalClass::COUNT] = [&[]; PositionalClass::COUNT];
        for class in PositionalClass::ALL {
            entries[class.index()] = match class {
                PositionalClass::TopLeftCorner => TOP_LEFT,
                PositionalClass::TopRightCorner => TOP_RIGHT,
                PositionalClass::BottomLeftCorner => BOTTOM_LEFT,
                PositionalClass::BottomRightCorner => BOTTOM_RIGHT,
                PositionalClass::TopSide => TOP,
                PositionalClass::BottomSide => BOTTOM,
                PositionalClass::LeftSide => LEFT,
                PositionalClass::RightSide => RIGHT,
                PositionalClass::Center => CENTER,
                PositionalClass::OuterTopSide => OUTER_TOP,
                PositionalClass::OuterRightSide => OUTER_RIGHT,
                PositionalClass::OuterBottomSide => OUTER_BOTTOM,
                PositionalClass::OuterLeftSide => OUTER_LEFT,
                PositionalClass::None => &[],
            };
        }
        Self { entries }
    }

    pub fn offsets(&self, class: PositionalClass) -> &'static [Offset] {
        self.entries[class.index()]
    }
}

impl Default for NeighborOffsetTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Classifier bound to a shared offset table.
#[derive(Debug, Clone)]
pub struct CellTypeClassifier {
    table: Arc<NeighborOffsetTable>,
}

impl CellTypeClassifier {
    pub fn new(table: Arc<NeighborOffsetTable>) -> Self {
        Self { table }
    }

    pub fn classify(&self, rows: usize, cols: usize, coord: Coord) -> Result<PositionalClass> {
        classify(rows, cols, coord)
    }

    pub fn neighbor_offsets(&self, class: PositionalClass) -> &'static [Offset] {
        self.table.offsets(class)
    }

    /// Classifies `coord` and returns its offsets, failing on an empty entry.
    pub fn neighbors_of(&self, rows: usize, cols: usize, coord: Coord) -> Result<&'static [Offset]> {
        let class = self.classify(rows, cols, coord)?;
        let offsets = self.neighbor_offsets(class);
        if offsets.is_empty() {
            return Err(LifeError::MissingOffsetTableEntry {
                class,
                row: coord.row,
                col: coord.col,
            });
        }
        Ok(offsets)
    }
}
