use itertools::Itertools;
use log::{debug, trace};
use strum::VariantArray;
use varisat::CnfFormula;

use crate::bridge::{Endpoint, Weight};
use crate::config::Connectivity;
use crate::degree::legal_distributions;
use crate::logic::{exactly_one, implies_all};
use crate::parser::ParsedBoard;
use crate::registry::VariableRegistry;
use crate::solver::SolverFailure;

/// Express `parsed` as CNF, interning every proposition in `registry`.
///
/// # Logical setup
/// ## Weights
/// Every slot S has exactly one weight in {0, 1, 2}.
///
/// ## Crossings
/// If S crosses T, S and T are not both nonzero; `(S = 0) + (T = 0)` for each such pair.
///
/// ## Degrees
/// An island I with value v and k incident slots picks exactly one of the precomputed length-k distributions summing to v.
/// Each distribution D gets a selector variable; D selected implies every slot of I has the weight D assigns it.
/// Weights being one-hot makes the selected distribution the only one consistent with the slot weights.
///
/// ## Flow
/// Unless `connectivity` is [`Connectivity::Unchecked`], every slot is exactly one of {absent, pointing at its source, pointing at its destination},
/// and every island except the root has at least one incident slot pointing at it.
/// This forbids components which are trees not containing the root, but a component with a cycle can still orient itself.
///
/// Fails with [`SolverFailure::UnsatisfiableLocal`] as soon as some island has no legal distribution, without producing a formula.
pub(crate) fn encode(parsed: &ParsedBoard, registry: &mut VariableRegistry, connectivity: Connectivity) -> Result<Vec<CnfFormula>, SolverFailure> {
    let mut formulae: Vec<CnfFormula> = Vec::new();

    for slot in &parsed.slots {
        // this slot S has exactly one weight, which may be 0
        formulae.push(CnfFormula::from(exactly_one(
            &Weight::VARIANTS.iter()
                .map(|weight| registry.weight(slot.id, *weight).positive())
                .collect_vec()
        )));
    }

    for slot in &parsed.slots {
        let absent = registry.weight(slot.id, Weight::Absent);
        // S nonzero and T nonzero cannot both hold
        // !(!S0 * !T0) = S0 + T0
        formulae.push(CnfFormula::from(slot.overlaps.iter()
            .map(|other| vec![absent.positive(), registry.weight(*other, Weight::Absent).positive()])
            .collect_vec()));
    }

    for (id, island) in parsed.islands.iter().enumerate() {
        let options = legal_distributions(island.value, island.slots.len());
        if options.is_empty() {
            return Err(SolverFailure::UnsatisfiableLocal {
                location: island.location,
                value: island.value,
                slots: island.slots.len(),
            });
        }
        trace!("island at {} has {} legal distributions", island.location, options.len());

        let selectors = (0..options.len())
            .map(|index| registry.distribution(id, index).positive())
            .collect_vec();
        formulae.push(CnfFormula::from(exactly_one(&selectors)));

        for (selector, distribution) in selectors.iter().zip(options) {
            let weights = island.slots.iter()
                .zip(distribution)
                .map(|(slot, weight)| registry.weight(*slot, *weight).positive())
                .collect_vec();
            formulae.push(CnfFormula::from(implies_all(*selector, &weights)));
        }
    }

    if connectivity.uses_flow() {
        for slot in &parsed.slots {
            formulae.push(CnfFormula::from(exactly_one(&[
                registry.weight(slot.id, Weight::Absent).positive(),
                registry.direction(slot.id, Endpoint::Source).positive(),
                registry.direction(slot.id, Endpoint::Destination).positive(),
            ])));
        }

        // the root has nothing pointing at it
        let root = parsed.root().map(|island| island.location);
        for island in parsed.islands.iter().filter(|island| Some(island.location) != root) {
            let inbound = island.slots.iter()
                .filter_map(|id| {
                    let slot = &parsed.slots[*id];
                    slot.endpoint_at(island.location).map(|end| registry.direction(slot.id, end).positive())
                })
                .collect_vec();
            formulae.push(CnfFormula::from(vec![inbound]));
        }
    }

    debug!(
        "encoded {} islands and {} slots into {} variables and {} clauses",
        parsed.islands.len(),
        parsed.slots.len(),
        registry.len(),
        formulae.iter().map(CnfFormula::len).sum::<usize>(),
    );

    Ok(formulae)
}
