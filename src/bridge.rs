use std::fmt::{Display, Formatter};

use strum::{Display as StrumDisplay, VariantArray};
use unordered_pair::UnorderedPair;

use crate::location::Location;

/// The number of bridges realized on one candidate slot.
#[derive(Copy, Clone, VariantArray, StrumDisplay, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum Weight {
    /// No bridge.
    #[strum(to_string = "0")]
    Absent,
    /// A single bridge.
    #[strum(to_string = "1")]
    Single,
    /// A double bridge.
    #[strum(to_string = "2")]
    Double,
}

impl Weight {
    /// The number of bridge endpoints this weight contributes to each island it touches.
    #[inline]
    pub fn count(&self) -> u8 {
        match self {
            Weight::Absent => 0,
            Weight::Single => 1,
            Weight::Double => 2,
        }
    }

    #[inline]
    pub(crate) fn is_present(&self) -> bool {
        *self != Weight::Absent
    }
}

/// One of the two ends of a slot, relative to its canonical (source, destination) orientation.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub(crate) enum Endpoint {
    Source,
    Destination,
}

/// A realized bridge between two islands sharing a row or column.
///
/// `source` is always the lexicographically smaller end by `(row, col)`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub struct Bridge {
    /// The upper or left end.
    pub source: Location,
    /// The lower or right end.
    pub destination: Location,
    /// Whether the bridge runs along a column.
    pub vertical: bool,
    /// [`Weight::Single`] or [`Weight::Double`]; a decoded bridge is never [`Weight::Absent`].
    pub weight: Weight,
}

impl Bridge {
    /// The endpoints of this bridge, without orientation.
    pub fn endpoints(&self) -> UnorderedPair<Location> {
        UnorderedPair::from((self.source, self.destination))
    }

    /// Every location strictly between the two endpoints, from source to destination.
    pub fn span(&self) -> impl Iterator<Item = Location> + '_ {
        let (from, to) = if self.vertical {
            (self.source.0 + 1, self.destination.0)
        } else {
            (self.source.1 + 1, self.destination.1)
        };

        (from..to).map(move |step| if self.vertical {
            Location(step, self.source.1)
        } else {
            Location(self.source.0, step)
        })
    }
}

impl Display for Bridge {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {} x{}", self.source, self.destination, self.weight)
    }
}
