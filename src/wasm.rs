//! JavaScript bindings. Boards cross the boundary as a flat row-major byte array where `0` is an empty cell.

use itertools::Itertools;
use js_sys::{Array, Object, Reflect};
use wasm_bindgen::prelude::*;

use crate::board::Board;
use crate::bridge::Bridge;
use crate::location::Location;

fn board_from(rows: usize, cols: usize, cells: &[u8]) -> Option<Board> {
    if rows.checked_mul(cols) != Some(cells.len()) {
        return None;
    }

    let grid = (0..rows)
        .map(|row| cells[row * cols..(row + 1) * cols].iter()
            .map(|value| (*value != 0).then_some(*value))
            .collect_vec())
        .collect_vec();

    Board::try_from(grid).ok()
}

fn set(target: &Object, key: &str, value: &JsValue) -> Result<(), JsValue> {
    Reflect::set(target, &JsValue::from_str(key), value).map(|_| ())
}

fn location_object(location: Location) -> Result<JsValue, JsValue> {
    let obj = Object::new();
    set(&obj, "row", &JsValue::from(location.row() as u32))?;
    set(&obj, "col", &JsValue::from(location.col() as u32))?;
    Ok(obj.into())
}

fn bridge_object(bridge: &Bridge) -> Result<JsValue, JsValue> {
    let obj = Object::new();
    set(&obj, "src", &location_object(bridge.source)?)?;
    set(&obj, "dst", &location_object(bridge.destination)?)?;
    set(&obj, "isVertical", &JsValue::from(bridge.vertical))?;
    set(&obj, "weight", &JsValue::from(u32::from(bridge.weight.count())))?;
    Ok(obj.into())
}

/// Solve a board, returning an array of `{src, dst, isVertical, weight}` objects, or `undefined` if there is no solution.
#[wasm_bindgen(js_name = solveBoard)]
pub fn solve_board(rows: usize, cols: usize, cells: &[u8]) -> Result<Option<Array>, JsValue> {
    let solved = match board_from(rows, cols, cells).and_then(|board| board.solve().ok()) {
        None => return Ok(None),
        Some(solved) => solved,
    };

    let ret = Array::new();
    for bridge in solved.bridges() {
        ret.push(&bridge_object(bridge)?);
    }

    Ok(Some(ret))
}

/// Solve a board and draw the answer as text, or return `undefined` if there is no solution.
#[wasm_bindgen(js_name = renderBoard)]
pub fn render_board(rows: usize, cols: usize, cells: &[u8]) -> Option<String> {
    board_from(rows, cols, cells)
        .and_then(|board| board.solve().ok())
        .map(|solved| solved.to_string())
}

#[cfg(all(test, feature = "wasm"))]
mod tests {
    use super::*;

    #[test]
    fn flat_cells_are_row_major() {
        let board = board_from(2, 3, &[1, 0, 2, 0, 0, 3]).unwrap();

        assert_eq!(board.dims(), (2, 3));
        assert_eq!(board.islands().collect_vec(), vec![(Location(0, 0), 1), (Location(0, 2), 2), (Location(1, 2), 3)]);
        assert_eq!(board.island_at(Location(0, 1)), None);
        assert_eq!(format!("{}", board), "1.2\n..3\n");
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        assert!(board_from(2, 2, &[1, 1, 0]).is_none());
        assert!(board_from(1, 3, &[1, 1]).is_none());
        assert!(board_from(usize::MAX, 2, &[1, 1]).is_none());
        assert!(board_from(1, 2, &[1, 9]).is_none());
    }

    #[test]
    fn empty_and_solved_text() {
        assert_eq!(board_from(0, 0, &[]).map(|board| board.dims()), Some((0, 0)));
        assert_eq!(render_board(1, 3, &[2, 0, 2]), Some("2═2\n".to_string()));
        assert_eq!(render_board(1, 1, &[1]), None);
    }

    #[test]
    fn object_builders_have_js_signatures() {
        // constructing js_sys objects needs a JS host, so only the shapes are checked here
        let _: fn(Location) -> Result<JsValue, JsValue> = location_object;
        let _: fn(&Bridge) -> Result<JsValue, JsValue> = bridge_object;
        let _: fn(usize, usize, &[u8]) -> Result<Option<Array>, JsValue> = solve_board;
    }
}
