pub(crate) type IslandValue = u8;

/// The largest legal island value: two bridges in each of the four directions.
pub(crate) const MAX_ISLAND_VALUE: IslandValue = 8;

#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub(crate) enum Cell {
    Island { value: IslandValue },
    #[default]
    Empty,
}

impl Cell {
    pub(crate) fn island_value(&self) -> Option<IslandValue> {
        match self {
            Cell::Island { value } => Some(*value),
            Cell::Empty => None,
        }
    }
}

/// Cells, frozen for output or printing.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) enum FrozenCell {
    Island { value: IslandValue },
    Span { double: bool, vertical: bool },
    #[default]
    Empty,
}

impl FrozenCell {
    pub(crate) fn glyph(&self) -> char {
        match self {
            FrozenCell::Island { value } => char::from(b'0' + value),
            FrozenCell::Span { double: false, vertical: false } => '─',
            FrozenCell::Span { double: true, vertical: false } => '═',
            FrozenCell::Span { double: false, vertical: true } => '│',
            FrozenCell::Span { double: true, vertical: true } => '║',
            FrozenCell::Empty => '.',
        }
    }
}
