use std::fmt::{Display, Formatter};

use ndarray::Ix;

pub(crate) type Coord = usize;
/// Board dimensions in `(rows, cols)` order. Either may be zero.
pub type Dimensions = (Coord, Coord);

#[derive(Clone, Eq, Hash, Copy, PartialEq, Ord, PartialOrd, Debug)]
/// A location `(row, col)` on a board. The top left corner is `Location(0, 0)`.
///
/// The derived ordering is lexicographic by row, then column, which is the canonical order used to pick the source of a bridge.
pub struct Location(pub Coord, pub Coord);

impl Location {
    /// The row of this location.
    #[inline]
    pub fn row(&self) -> Coord {
        self.0
    }

    /// The column of this location.
    #[inline]
    pub fn col(&self) -> Coord {
        self.1
    }

    pub(crate) fn as_index(&self) -> (Ix, Ix) {
        (self.0, self.1)
    }

    pub(crate) fn within(&self, dims: Dimensions) -> bool {
        self.0 < dims.0 && self.1 < dims.1
    }
}

impl From<(Ix, Ix)> for Location {
    fn from(value: (Ix, Ix)) -> Self {
        Self(value.0, value.1)
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}
