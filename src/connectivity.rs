use std::collections::HashSet;

use itertools::Itertools;
use petgraph::graphmap::UnGraphMap;
use petgraph::visit::Bfs;
use varisat::Lit;

use crate::bridge::{Bridge, Weight};
use crate::location::Location;
use crate::parser::ParsedBoard;
use crate::registry::VariableRegistry;
use crate::solver::SolverFailure;

/// Every island as a node, every bridge as an edge weighted by its [`Weight`].
pub(crate) fn bridge_graph(islands: impl Iterator<Item = Location>, bridges: &[Bridge]) -> UnGraphMap<Location, Weight> {
    let mut graph = UnGraphMap::new();
    for island in islands {
        graph.add_node(island);
    }
    for bridge in bridges {
        graph.add_edge(bridge.source, bridge.destination, bridge.weight);
    }

    graph
}

/// The connected components of `graph`, each as a set of island locations.
///
/// Components are discovered in node insertion order, so the root island's component comes first.
pub(crate) fn components(graph: &UnGraphMap<Location, Weight>) -> Vec<HashSet<Location>> {
    let mut seen = HashSet::with_capacity(graph.node_count());
    let mut ret = Vec::new();

    for start in graph.nodes() {
        if seen.contains(&start) {
            continue;
        }

        let mut component = HashSet::new();
        let mut bfs = Bfs::new(graph, start);
        while let Some(location) = bfs.next(graph) {
            component.insert(location);
        }
        seen.extend(component.iter().copied());
        ret.push(component);
    }

    ret
}

/// One clause per component: some slot with exactly one end inside the component carries a bridge.
///
/// Every connected solution satisfies all of these, while the assignment that produced `components` violates each one.
/// Fails with [`SolverFailure::UnsatisfiableGlobal`] if some component has no slot leaving it, since then no connected solution exists.
pub(crate) fn cut_clauses(parsed: &ParsedBoard, registry: &mut VariableRegistry, components: &[HashSet<Location>]) -> Result<Vec<Vec<Lit>>, SolverFailure> {
    components.iter()
        .map(|component| {
            let leaving = parsed.slots.iter()
                .filter(|slot| component.contains(&slot.source) != component.contains(&slot.destination))
                .map(|slot| registry.weight(slot.id, Weight::Absent).negative())
                .collect_vec();

            if leaving.is_empty() {
                Err(SolverFailure::UnsatisfiableGlobal)
            } else {
                Ok(leaving)
            }
        })
        .collect()
}
