//! Grid factory and access tests

use tessera::{Axis, Dimensions, Grid, GridError, combine, create_grid};

use crate::common::init_tracing;

#[test]
fn factory_shape_holds_for_small_dimensions() {
    for rows in 0..4 {
        for cols in 0..4 {
            let grid = create_grid::<u16>(rows, cols);
            assert_eq!(grid.iter_columns().len(), cols);
            assert!(grid.iter_columns().all(|column| column.len() == rows));
            assert!(grid.iter().all(|cell| *cell == 0));
        }
    }
}

#[test]
fn factory_rejects_negative_counts_before_allocating() {
    init_tracing();
    assert_eq!(
        Grid::<String>::try_new(-1, 3).unwrap_err(),
        GridError::InvalidDimension {
            axis: Axis::Rows,
            value: -1
        }
    );
    assert!(matches!(
        Dimensions::try_new(3, i64::MIN),
        Err(GridError::InvalidDimension {
            axis: Axis::Cols,
            ..
        })
    ));
}

#[test]
fn cells_are_mutable_in_place() {
    let mut grid: Grid<Option<char>> = Grid::with_dimensions(Dimensions::new(2, 3));
    grid[(1, 2)] = Some('x');
    for cell in &mut grid {
        if cell.is_none() {
            *cell = Some('.');
        }
    }
    assert_eq!(grid.get(1, 2), Some(&Some('x')));
    assert_eq!(grid.iter().filter(|cell| **cell == Some('.')).count(), 5);
    assert_eq!(grid.dimensions(), Dimensions::new(2, 3));
}

#[test]
fn cells_agree_with_combine() {
    let grid = Grid::from_fn(3, 4, |row, col| row * 10 + col);
    let positions: Vec<(usize, usize)> = grid.cells().map(|(row, col, _)| (row, col)).collect();
    let expected: Vec<(usize, usize)> = combine(0..4, 0..3).map(|(col, row)| (row, col)).collect();
    assert_eq!(positions, expected);
    assert!(grid.cells().all(|(row, col, cell)| *cell == row * 10 + col));
}

#[test]
fn owned_iteration_is_column_major() {
    let grid = Grid::from_rows([["a", "b"], ["c", "d"]]).unwrap();
    let cells: Vec<&str> = grid.into_iter().collect();
    assert_eq!(cells, ["a", "c", "b", "d"]);
}

#[test]
fn rows_view_transposes_storage() {
    let grid = Grid::from_columns([[1, 2, 3], [4, 5, 6]]).unwrap();
    let rows: Vec<Vec<i32>> = grid
        .iter_rows()
        .map(|row| row.copied().collect())
        .collect();
    assert_eq!(rows, [[1, 4], [2, 5], [3, 6]]);
}

#[test]
fn drop_errors_name_the_axis() {
    let grid = Grid::filled(2, 2, 0u8);
    let err = grid.drop_bottom(3).unwrap_err();
    assert_eq!(err.to_string(), "cannot drop 3 rows from a grid with 2");
}
