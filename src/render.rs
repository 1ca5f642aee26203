use ndarray::{Array2, AssignElem};

use crate::board::Board;
use crate::bridge::{Bridge, Weight};
use crate::cell::{Cell, FrozenCell};

/// Lay `bridges` over the cells of `board`.
///
/// Every cell strictly between the ends of a bridge is painted with that bridge, so the output covers the full span and not only the cells next to the islands.
/// Island cells are never overwritten, and absent bridges paint nothing.
pub(crate) fn freeze(board: &Board, bridges: &[Bridge]) -> Array2<FrozenCell> {
    let mut ret = board.cells.map(|cell| match cell {
        Cell::Island { value } => FrozenCell::Island { value: *value },
        Cell::Empty => FrozenCell::Empty,
    });

    for bridge in bridges.iter().filter(|bridge| bridge.weight.is_present()) {
        let span = FrozenCell::Span { double: bridge.weight == Weight::Double, vertical: bridge.vertical };
        for location in bridge.span() {
            if let Some(ptr) = ret.get_mut(location.as_index()) {
                if *ptr == FrozenCell::Empty {
                    ptr.assign_elem(span);
                }
            }
        }
    }

    ret
}

/// Dump the specified [`Array2`] one row per line.
pub(crate) fn print(board: Array2<char>) -> String {
    let mut out = String::with_capacity(board.nrows() * (board.ncols() + 1));

    for row in board.rows() {
        for col in row {
            out.push(*col);
        }
        out.push('\n');
    }

    out
}
