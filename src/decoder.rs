use itertools::Itertools;
use varisat::Lit;

use crate::bridge::Bridge;
use crate::parser::ParsedBoard;
use crate::registry::{Atom, VariableRegistry};

/// Map a model back onto the board: every slot whose true weight atom is nonzero becomes a [`Bridge`].
///
/// Direction and distribution atoms are ignored. The result is sorted by `(source, destination)`.
pub(crate) fn decode(parsed: &ParsedBoard, registry: &VariableRegistry, model: &[Lit]) -> Vec<Bridge> {
    registry.true_atoms(model)
        .filter_map(|atom| match atom {
            Atom::Weight { slot, weight } if weight.is_present() => Some(parsed.slots[slot].realize(weight)),
            _ => None,
        })
        .sorted()
        .collect_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::bridge::{Endpoint, Weight};
    use crate::location::Location;

    #[test]
    fn only_nonzero_weights_survive() {
        let parsed = ParsedBoard::parse(&"1.2.1".parse::<Board>().unwrap()).unwrap();
        let mut registry = VariableRegistry::default();

        let left = parsed.slot_between(Location(0, 0), Location(0, 2)).unwrap().id;
        let right = parsed.slot_between(Location(0, 2), Location(0, 4)).unwrap().id;
        let model = vec![
            registry.weight(left, Weight::Absent).negative(),
            registry.weight(left, Weight::Single).positive(),
            registry.weight(right, Weight::Absent).negative(),
            registry.weight(right, Weight::Single).positive(),
            registry.direction(left, Endpoint::Destination).positive(),
            registry.weight(right, Weight::Double).negative(),
        ];

        let bridges = decode(&parsed, &registry, &model);
        assert_eq!(bridges, vec![
            Bridge { source: Location(0, 0), destination: Location(0, 2), vertical: false, weight: Weight::Single },
            Bridge { source: Location(0, 2), destination: Location(0, 4), vertical: false, weight: Weight::Single },
        ]);
    }

    #[test]
    fn all_absent_decodes_to_nothing() {
        let parsed = ParsedBoard::parse(&"11".parse::<Board>().unwrap()).unwrap();
        let mut registry = VariableRegistry::default();
        let model = vec![registry.weight(0, Weight::Absent).positive()];

        assert!(decode(&parsed, &registry, &model).is_empty());
    }
}
