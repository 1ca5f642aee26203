use std::collections::HashMap;

use varisat::{Lit, Var};

use crate::bridge::{Endpoint, Weight};
use crate::parser::{IslandId, SlotId};

/// A structured proposition about the board.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub(crate) enum Atom {
    /// The slot carries exactly this weight.
    Weight { slot: SlotId, weight: Weight },
    /// The slot's flow points toward this end.
    Direction { slot: SlotId, toward: Endpoint },
    /// The island uses the `index`th entry of its legal distribution list.
    Distribution { island: IslandId, index: usize },
}

/// Interns [`Atom`]s as dense solver variables and maps them back.
///
/// Variables are handed out in order of first use starting at index 0, so the inverse table is a plain [`Vec`].
#[derive(Debug, Default)]
pub(crate) struct VariableRegistry {
    vars: HashMap<Atom, Var>,
    atoms: Vec<Atom>,
}

impl VariableRegistry {
    pub(crate) fn var(&mut self, atom: Atom) -> Var {
        if let Some(var) = self.vars.get(&atom) {
            return *var;
        }

        let var = Var::from_index(self.atoms.len());
        self.atoms.push(atom);
        self.vars.insert(atom, var);
        var
    }

    #[inline]
    pub(crate) fn weight(&mut self, slot: SlotId, weight: Weight) -> Var {
        self.var(Atom::Weight { slot, weight })
    }

    #[inline]
    pub(crate) fn direction(&mut self, slot: SlotId, toward: Endpoint) -> Var {
        self.var(Atom::Direction { slot, toward })
    }

    #[inline]
    pub(crate) fn distribution(&mut self, island: IslandId, index: usize) -> Var {
        self.var(Atom::Distribution { island, index })
    }

    pub(crate) fn atom_of(&self, var: Var) -> Option<Atom> {
        self.atoms.get(var.index()).copied()
    }

    /// The atoms assigned true by `model`. Variables this registry never handed out are skipped.
    pub(crate) fn true_atoms<'a>(&'a self, model: &'a [Lit]) -> impl Iterator<Item = Atom> + 'a {
        model.iter()
            .filter(|lit| lit.is_positive())
            .filter_map(|lit| self.atom_of(lit.var()))
    }

    pub(crate) fn len(&self) -> usize {
        self.atoms.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interning_is_stable() {
        let mut registry = VariableRegistry::default();

        let single = registry.weight(0, Weight::Single);
        let toward = registry.direction(0, Endpoint::Destination);
        assert_ne!(single, toward);
        assert_eq!(registry.weight(0, Weight::Single), single);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn reverse_lookup() {
        let mut registry = VariableRegistry::default();

        let atoms = [
            Atom::Weight { slot: 3, weight: Weight::Double },
            Atom::Direction { slot: 1, toward: Endpoint::Source },
            Atom::Distribution { island: 2, index: 5 },
        ];
        for atom in atoms {
            let var = registry.var(atom);
            assert_eq!(registry.atom_of(var), Some(atom));
        }
        assert_eq!(registry.atom_of(Var::from_index(99)), None);
    }

    #[test]
    fn true_atoms_filters_negatives() {
        let mut registry = VariableRegistry::default();

        let absent = registry.weight(0, Weight::Absent);
        let single = registry.weight(0, Weight::Single);
        let model = vec![absent.negative(), single.positive(), Var::from_index(7).positive()];

        assert_eq!(registry.true_atoms(&model).collect::<Vec<_>>(), vec![Atom::Weight { slot: 0, weight: Weight::Single }]);
    }
}
