use std::collections::{BTreeSet, HashMap};

use log::debug;
use ndarray::Array2;

use crate::board::Board;
use crate::bridge::{Bridge, Endpoint, Weight};
use crate::cell::IslandValue;
use crate::location::Location;
use crate::solver::SolverFailure;

pub(crate) type IslandId = usize;
pub(crate) type SlotId = usize;

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Island {
    pub(crate) location: Location,
    pub(crate) value: IslandValue,
    // horizontal slots in discovery order, then vertical ones
    pub(crate) slots: Vec<SlotId>,
}

/// A place a bridge could go: two islands on one row or column with nothing between them.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Slot {
    pub(crate) id: SlotId,
    pub(crate) source: Location,
    pub(crate) destination: Location,
    pub(crate) vertical: bool,
    /// Slots whose path crosses this one through a shared empty cell.
    pub(crate) overlaps: BTreeSet<SlotId>,
}

impl Slot {
    /// Which end of this slot sits at `location`, if either.
    pub(crate) fn endpoint_at(&self, location: Location) -> Option<Endpoint> {
        if location == self.source {
            Some(Endpoint::Source)
        } else if location == self.destination {
            Some(Endpoint::Destination)
        } else {
            None
        }
    }

    pub(crate) fn realize(&self, weight: Weight) -> Bridge {
        Bridge {
            source: self.source,
            destination: self.destination,
            vertical: self.vertical,
            weight,
        }
    }
}

/// Islands and candidate slots extracted from a [`Board`].
#[derive(Clone, Debug, Default)]
pub(crate) struct ParsedBoard {
    /// Row-major discovery order; the first island is the root for flow constraints.
    pub(crate) islands: Vec<Island>,
    pub(crate) slots: Vec<Slot>,
    island_ids: HashMap<Location, IslandId>,
}

impl ParsedBoard {
    /// Scan `board` for islands and the slots between them.
    ///
    /// Rows are scanned left to right, marking each empty cell a horizontal slot passes over.
    /// Columns are then scanned top to bottom; a vertical slot passing over a marked cell overlaps the horizontal slot which marked it.
    ///
    /// Fails with [`SolverFailure::UnsatisfiableLocal`] if some island has no slots at all.
    pub(crate) fn parse(board: &Board) -> Result<Self, SolverFailure> {
        let (rows, cols) = board.dims();
        let mut parsed = Self::default();

        for (location, value) in board.islands() {
            parsed.island_ids.insert(location, parsed.islands.len());
            parsed.islands.push(Island { location, value, slots: Vec::new() });
        }

        // which horizontal slot, if any, passes over each cell
        let mut owners: Array2<Option<SlotId>> = Array2::from_elem((rows, cols), None);

        for row in 0..rows {
            let mut previous_col = None;
            for col in 0..cols {
                if board.island_at(Location(row, col)).is_none() {
                    continue;
                }

                if let Some(previous_col) = previous_col {
                    let slot = parsed.add_slot(Location(row, previous_col), Location(row, col), false);
                    for between in (previous_col + 1)..col {
                        owners[[row, between]] = Some(slot);
                    }
                }
                previous_col = Some(col);
            }
        }

        for col in 0..cols {
            let mut previous_row = None;
            for row in 0..rows {
                if board.island_at(Location(row, col)).is_none() {
                    continue;
                }

                if let Some(previous_row) = previous_row {
                    let slot = parsed.add_slot(Location(previous_row, col), Location(row, col), true);
                    for between in (previous_row + 1)..row {
                        if let Some(other) = owners[[between, col]] {
                            parsed.slots[slot].overlaps.insert(other);
                            parsed.slots[other].overlaps.insert(slot);
                        }
                    }
                }
                previous_row = Some(row);
            }
        }

        if let Some(stranded) = parsed.islands.iter().find(|island| island.slots.is_empty()) {
            return Err(SolverFailure::UnsatisfiableLocal {
                location: stranded.location,
                value: stranded.value,
                slots: 0,
            });
        }

        debug!("parsed {} islands and {} slots", parsed.islands.len(), parsed.slots.len());
        Ok(parsed)
    }

    fn add_slot(&mut self, source: Location, destination: Location, vertical: bool) -> SlotId {
        let id = self.slots.len();
        for end in [source, destination] {
            let island = self.island_ids[&end];
            self.islands[island].slots.push(id);
        }

        self.slots.push(Slot {
            id,
            source,
            destination,
            vertical,
            overlaps: BTreeSet::new(),
        });

        id
    }

    /// The first island discovered, which needs no inbound flow.
    pub(crate) fn root(&self) -> Option<&Island> {
        self.islands.first()
    }
}

#[cfg(test)]
impl ParsedBoard {
    pub(crate) fn island_at(&self, location: Location) -> Option<&Island> {
        self.island_ids.get(&location).map(|id| &self.islands[*id])
    }

    /// The slot joining `a` and `b`, in either order.
    pub(crate) fn slot_between(&self, a: Location, b: Location) -> Option<&Slot> {
        self.island_at(a)?.slots.iter()
            .map(|id| &self.slots[*id])
            .find(|slot| slot.endpoint_at(b).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<ParsedBoard, SolverFailure> {
        ParsedBoard::parse(&text.parse::<Board>().unwrap())
    }

    #[test]
    fn slots_follow_discovery_order() {
        let parsed = parse("2.2\n...\n2.2").unwrap();

        assert_eq!(parsed.islands.len(), 4);
        assert_eq!(parsed.slots.len(), 4);
        assert_eq!(parsed.root().unwrap().location, Location(0, 0));

        // horizontal slots come first, then vertical ones
        let corner = parsed.island_at(Location(0, 0)).unwrap();
        let first = &parsed.slots[corner.slots[0]];
        let second = &parsed.slots[corner.slots[1]];
        assert!(!first.vertical);
        assert_eq!(first.destination, Location(0, 2));
        assert!(second.vertical);
        assert_eq!(second.destination, Location(2, 0));
    }

    #[test]
    fn source_is_lexicographically_smaller() {
        let parsed = parse("1.1\n...\n1.1").unwrap();

        for slot in &parsed.slots {
            assert!(slot.source < slot.destination);
            assert_eq!(slot.vertical, slot.source.col() == slot.destination.col());
        }
    }

    #[test]
    fn crossing_slots_overlap_symmetrically() {
        let parsed = parse(".1.\n1.1\n.1.").unwrap();

        let horizontal = parsed.slot_between(Location(1, 0), Location(1, 2)).unwrap();
        let vertical = parsed.slot_between(Location(2, 1), Location(0, 1)).unwrap();

        assert!(horizontal.overlaps.contains(&vertical.id));
        assert!(vertical.overlaps.contains(&horizontal.id));
        for slot in &parsed.slots {
            for other in &slot.overlaps {
                assert!(parsed.slots[*other].overlaps.contains(&slot.id));
            }
        }
    }

    #[test]
    fn adjacent_slots_do_not_overlap() {
        let parsed = parse("11\n11").unwrap();

        assert_eq!(parsed.slots.len(), 4);
        assert!(parsed.slots.iter().all(|slot| slot.overlaps.is_empty()));
    }

    #[test]
    fn intermediate_island_splits_slots() {
        let parsed = parse("1.2.1").unwrap();

        assert_eq!(parsed.slots.len(), 2);
        assert!(parsed.slot_between(Location(0, 0), Location(0, 4)).is_none());
        assert_eq!(parsed.island_at(Location(0, 2)).unwrap().slots.len(), 2);
    }

    #[test]
    fn stranded_island_fails_early() {
        match parse("1..\n...\n..1") {
            Err(SolverFailure::UnsatisfiableLocal { location, slots, .. }) => {
                assert_eq!(location, Location(0, 0));
                assert_eq!(slots, 0);
            }
            other => panic!("expected a local failure, got {other:?}"),
        }
    }

    #[test]
    fn round_trip_through_slot_identity() {
        let parsed = parse("2.3.1\n.....\n3.4.2").unwrap();

        for slot in &parsed.slots {
            let bridge = slot.realize(Weight::Single);
            let found = parsed.slot_between(bridge.destination, bridge.source).unwrap();
            assert_eq!(found.id, slot.id);
            assert_eq!((found.source, found.destination, found.vertical), (bridge.source, bridge.destination, bridge.vertical));
        }
    }
}
