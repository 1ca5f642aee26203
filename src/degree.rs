use std::sync::LazyLock;

use itertools::Itertools;
use strum::VariantArray;

use crate::bridge::Weight;
use crate::cell::{IslandValue, MAX_ISLAND_VALUE};

/// One weight per incident slot, aligned with the island's slot order.
pub(crate) type Distribution = Vec<Weight>;

/// One slot per direction.
pub(crate) const MAX_SLOTS_PER_ISLAND: usize = 4;

// indexed by [value - 1][slots - 1]
static DEGREE_TABLE: LazyLock<Vec<Vec<Vec<Distribution>>>> = LazyLock::new(|| {
    (1..=MAX_ISLAND_VALUE)
        .map(|value| (1..=MAX_SLOTS_PER_ISLAND)
            .map(|slots| enumerate(value, slots))
            .collect_vec())
        .collect_vec()
});

/// Every assignment of weights to `slots` slots whose endpoint count is exactly `value`, by brute force over all `3^slots` candidates.
fn enumerate(value: IslandValue, slots: usize) -> Vec<Distribution> {
    itertools::repeat_n(Weight::VARIANTS.iter().copied(), slots)
        .multi_cartesian_product()
        .filter(|distribution| distribution.iter().map(Weight::count).sum::<u8>() == value)
        .collect_vec()
}

/// The legal distributions for an island requiring `value` endpoints across `slots` incident slots.
///
/// Empty when no distribution exists, including for any `value` or `slots` outside the table.
pub(crate) fn legal_distributions(value: IslandValue, slots: usize) -> &'static [Distribution] {
    if value == 0 || slots == 0 {
        return &[];
    }

    match DEGREE_TABLE.get(usize::from(value) - 1).and_then(|by_slots| by_slots.get(slots - 1)) {
        Some(distributions) => distributions,
        None => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_total_and_sound() {
        for value in 1..=MAX_ISLAND_VALUE {
            for slots in 1..=MAX_SLOTS_PER_ISLAND {
                for distribution in legal_distributions(value, slots) {
                    assert_eq!(distribution.len(), slots);
                    assert_eq!(distribution.iter().map(Weight::count).sum::<u8>(), value);
                }
            }
        }
    }

    #[test]
    fn known_entry_sizes() {
        assert_eq!(legal_distributions(1, 1), &[vec![Weight::Single]]);
        assert_eq!(legal_distributions(2, 1), &[vec![Weight::Double]]);
        assert_eq!(legal_distributions(2, 2).len(), 3);
        assert_eq!(legal_distributions(2, 4).len(), 10);
        assert_eq!(legal_distributions(3, 4).len(), 16);
        assert_eq!(legal_distributions(4, 4).len(), 19);
        assert_eq!(legal_distributions(7, 4).len(), 4);
        assert_eq!(legal_distributions(8, 4), &[vec![Weight::Double; 4]]);
    }

    #[test]
    fn unreachable_values_are_empty() {
        assert!(legal_distributions(3, 1).is_empty());
        assert!(legal_distributions(5, 2).is_empty());
        assert!(legal_distributions(7, 3).is_empty());
        assert!(legal_distributions(0, 2).is_empty());
        assert!(legal_distributions(9, 4).is_empty());
        assert!(legal_distributions(1, 0).is_empty());
        assert!(legal_distributions(1, 5).is_empty());
    }

    #[test]
    fn enumeration_is_repeatable() {
        for value in 1..=MAX_ISLAND_VALUE {
            for slots in 1..=MAX_SLOTS_PER_ISLAND {
                assert_eq!(enumerate(value, slots), legal_distributions(value, slots));
            }
        }
    }
}
