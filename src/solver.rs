use log::{debug, info};
use thiserror::Error;
use varisat::CnfFormula;

use crate::board::Board;
use crate::bridge::Bridge;
use crate::builder::BuilderInvalidReason;
use crate::cell::IslandValue;
use crate::config::{Connectivity, SolverConfig};
use crate::connectivity::{bridge_graph, components, cut_clauses};
use crate::decoder::decode;
use crate::encoder::encode;
use crate::location::Location;
use crate::oracle::Oracle;
use crate::parser::ParsedBoard;
use crate::registry::VariableRegistry;

/// Reasons solving may fail.
///
/// Every variant means "no solution"; they differ only in where that was discovered.
#[derive(Debug, Error)]
pub enum SolverFailure {
    /// The input grid could not be turned into a board.
    #[error("invalid board: {0}")]
    InvalidBoardShape(#[from] BuilderInvalidReason),
    /// An island can never reach its value with the slots around it. Detected without consulting the SAT solver.
    #[error("island {value} at {location} cannot be satisfied by {slots} slot(s)")]
    UnsatisfiableLocal {
        /// Where the island is.
        location: Location,
        /// The island's required bridge count.
        value: IslandValue,
        /// How many candidate slots touch it.
        slots: usize,
    },
    /// The SAT solver proved that no (connected) assignment exists.
    #[error("no assignment of bridges satisfies the board")]
    UnsatisfiableGlobal,
    /// The SAT solver stopped without an answer.
    #[error("the SAT solver aborted")]
    OracleAborted,
    /// Connectivity refinement ran for the configured number of rounds without reaching a connected answer.
    #[error("gave up after {0} connectivity refinement(s)")]
    RefinementLimit(usize),
}

/// Parse, encode, solve and decode `board` using `oracle`.
///
/// Under [`Connectivity::Verified`], each answer is checked for connectedness.
/// A disconnected answer adds a cut clause per component to `oracle` and the search resumes, so the loop ends with a connected answer or a proof there is none.
pub(crate) fn solve<O: Oracle>(board: &Board, config: &SolverConfig, mut oracle: O) -> Result<Vec<Bridge>, SolverFailure> {
    let parsed = ParsedBoard::parse(board)?;
    if parsed.islands.is_empty() {
        return Ok(Vec::new());
    }

    let mut registry = VariableRegistry::default();
    let formulae = encode(&parsed, &mut registry, config.connectivity)?;
    formulae.iter().for_each(|formula| oracle.add_formula(formula));

    let mut refinements = 0;
    loop {
        let model = match oracle.solve()? {
            None => return Err(SolverFailure::UnsatisfiableGlobal),
            Some(model) => model,
        };
        let bridges = decode(&parsed, &registry, &model);

        if config.connectivity != Connectivity::Verified {
            return Ok(bridges);
        }

        let found = components(&bridge_graph(parsed.islands.iter().map(|island| island.location), &bridges));
        if found.len() <= 1 {
            debug!("connected answer with {} bridges after {} refinement(s)", bridges.len(), refinements);
            return Ok(bridges);
        }

        if config.max_refinements.is_some_and(|max| refinements >= max) {
            return Err(SolverFailure::RefinementLimit(refinements));
        }
        refinements += 1;
        info!("answer splits into {} components; cutting and re-solving (round {})", found.len(), refinements);

        oracle.add_formula(&CnfFormula::from(cut_clauses(&parsed, &mut registry, &found)?));
    }
}
