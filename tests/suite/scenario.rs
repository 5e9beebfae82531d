//! End-to-end usage across both components

use tessera::{Either, Grid, Outcome};

use crate::common::GREETING;

#[test]
fn first_character_of_greeting() {
    let result: Outcome<&str, String> = Outcome::of_value(GREETING);
    let either = result
        .map(|value| value.chars().next().unwrap_or_default())
        .into_either();
    assert_eq!(either, Either::of_right('H'));
}

#[test]
fn parse_cells_into_outcomes() {
    let raw = Grid::from_row_major(2, 2, vec!["1", "2", "x", "4"]).unwrap();
    let parsed = raw.map(|text| Outcome::from(text.parse::<i32>()).map_failure(|_| *text));

    let failures: Vec<(usize, usize)> = parsed
        .cells()
        .filter(|(_, _, cell)| cell.is_failure())
        .map(|(row, col, _)| (row, col))
        .collect();
    assert_eq!(failures, [(1, 0)]);

    let totals = parsed.map(|cell| cell.clone().value_or_else(|_| 0));
    assert_eq!(totals.iter().sum::<i32>(), 7);
}

#[test]
fn grid_of_eithers_splits_by_side() {
    let grid = Grid::from_fn(2, 2, |row, col| {
        if (row + col) % 2 == 0 {
            Either::of_left(row)
        } else {
            Either::of_right(col)
        }
    });
    let lefts = grid.iter().filter(|cell| cell.is_left()).count();
    assert_eq!(lefts, 2);
}
