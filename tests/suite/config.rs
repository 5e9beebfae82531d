//! Grid shapes read from caller configuration documents

use serde::Deserialize;
use tessera::{Dimensions, Grid};

#[derive(Debug, Deserialize)]
struct BoardConfig {
    name: String,
    board: Dimensions,
}

#[test]
fn shape_from_toml_table() {
    let config: BoardConfig = toml::from_str(
        r#"
name = "checkers"

[board]
rows = 8
cols = 8
"#,
    )
    .unwrap();

    assert_eq!(config.name, "checkers");
    let grid: Grid<Option<u8>> = Grid::with_dimensions(config.board);
    assert_eq!(grid.len(), 64);
}

#[test]
fn negative_shape_in_toml_is_rejected() {
    let err = toml::from_str::<BoardConfig>(
        r#"
name = "broken"

[board]
rows = -2
cols = 8
"#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("invalid grid rows count: -2"));
}

#[test]
fn grid_json_round_trip() {
    let grid = Grid::from_rows([["a", "b"], ["c", "d"]]).unwrap();
    let json = serde_json::to_string(&grid).unwrap();
    let back: Grid<String> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, grid.map(|cell| (*cell).to_owned()));
}
