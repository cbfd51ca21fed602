use std::sync::Arc;

use conway::{
    CellTypeClassifier, Coord, EvolutionRule, Game, GameConfig, Grid, NeighborOffsetTable,
    NullRenderer, Schedule, TextRenderer,
};
use proptest::prelude::*;

fn rule() -> EvolutionRule {
    EvolutionRule::new(CellTypeClassifier::new(Arc::new(NeighborOffsetTable::new())))
}

fn assert_rectangular(grid: &Grid) {
    assert!(grid.row_count() >= 1 && grid.column_count() >= 1);
    for row in grid.rows() {
        assert_eq!(row.len(), grid.column_count());
    }
}

#[test]
fn bundled_driver_runs_fifty_generations() {
    for schedule in [Schedule::Parallel, Schedule::Sequential] {
        let config = GameConfig {
            schedule,
            ..GameConfig::default()
        };
        let mut game = Game::with_config(&config).unwrap();
        assert_eq!(game.grid().population(), 10);

        game.run(config.max_generations, &mut NullRenderer).unwrap();

        assert_eq!(game.generation(), 50);
        assert!(game.grid().row_count() >= 3);
        assert!(game.grid().column_count() >= 10);
        assert_rectangular(game.grid());
    }
}

#[test]
fn grid_never_shrinks_while_running() {
    let glider = [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];
    let mut game = Game::new(5, 5).unwrap();
    for (r, c) in glider {
        game.toggle_cell(r, c).unwrap();
    }
    let (mut rows, mut cols) = (5, 5);
    for _ in 0..40 {
        game.step().unwrap();
        let grid = game.grid();
        assert!(grid.row_count() >= rows && grid.column_count() >= cols);
        assert!(grid.row_count() <= rows + 2 && grid.column_count() <= cols + 2);
        assert_rectangular(grid);
        (rows, cols) = (grid.row_count(), grid.column_count());
    }
    // A glider keeps its five cells however far it travels.
    assert_eq!(game.grid().population(), 5);
}

#[test]
fn first_frame_of_the_bundled_driver() {
    let mut game = Game::with_config(&GameConfig::default()).unwrap();
    let mut renderer = TextRenderer::new(Vec::new());
    game.run(1, &mut renderer).unwrap();
    let text = String::from_utf8(renderer.into_inner()).unwrap();

    let mut frames = text.split("\n\n");
    assert_eq!(
        frames.next().unwrap(),
        "Generation 0 (1 x 10)\n  X  X  X  X  X  X  X  X  X  X"
    );
    assert_eq!(
        frames.next().unwrap(),
        "Generation 1 (3 x 10)\n\
         \x20 -  X  X  X  X  X  X  X  X  -\n\
         \x20 -  X  X  X  X  X  X  X  X  -\n\
         \x20 -  X  X  X  X  X  X  X  X  -"
    );
}

#[test]
fn virtual_cells_need_three_neighbors_along_the_edge() {
    let mut grid = Grid::new(3, 5).unwrap();
    grid.set(0, 1, true).unwrap();
    grid.set(0, 3, true).unwrap();
    let rule = rule();
    assert_eq!(rule.count_alive_neighbors(&grid, Coord::new(-1, 2)).unwrap(), 2);
    grid.set(0, 2, true).unwrap();
    assert_eq!(rule.count_alive_neighbors(&grid, Coord::new(-1, 2)).unwrap(), 3);
}

prop_compose! {
    fn random_grid()(rows in 1usize..8, cols in 1usize..8)
        (cells in prop::collection::vec(any::<bool>(), rows * cols), rows in Just(rows), cols in Just(cols))
        -> Grid
    {
        let mut grid = Grid::new(rows, cols).unwrap();
        for (i, alive) in cells.into_iter().enumerate() {
            grid.set(i / cols, i % cols, alive).unwrap();
        }
        grid
    }
}

proptest! {
    #[test]
    fn prop_neighbor_count_is_bounded(grid in random_grid()) {
        let rule = rule();
        for row in 0..grid.row_count() as isize {
            for col in 0..grid.column_count() as isize {
                let count = rule.count_alive_neighbors(&grid, Coord::new(row, col)).unwrap();
                prop_assert!(count <= 8);
            }
        }
    }

    #[test]
    fn prop_step_keeps_grid_rectangular(grid in random_grid(), steps in 1usize..6) {
        let mut game = Game::new(grid.row_count(), grid.column_count())
            .unwrap()
            .with_schedule(Schedule::Sequential);
        for (r, row) in grid.rows().enumerate() {
            for (c, &alive) in row.iter().enumerate() {
                if alive {
                    game.toggle_cell(r, c).unwrap();
                }
            }
        }
        for _ in 0..steps {
            game.step().unwrap();
            let g = game.grid();
            for row in g.rows() {
                prop_assert_eq!(row.len(), g.column_count());
            }
        }
    }
}
