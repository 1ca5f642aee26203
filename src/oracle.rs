use log::error;
use varisat::{CnfFormula, Lit, Solver};

use crate::solver::SolverFailure;

/// The satisfiability engine the pipeline drives.
///
/// Formulae accumulate across calls to [`solve`](Self::solve), so clauses added after a model was found restrict the next search.
pub trait Oracle {
    /// Require every clause of `formula` to hold.
    fn add_formula(&mut self, formula: &CnfFormula);

    /// Search for a model of everything added so far.
    ///
    /// Returns `Ok(None)` if the formula is unsatisfiable, otherwise one literal per variable, indexed by variable.
    fn solve(&mut self) -> Result<Option<Vec<Lit>>, SolverFailure>;
}

impl Oracle for Solver<'_> {
    fn add_formula(&mut self, formula: &CnfFormula) {
        Solver::add_formula(self, formula)
    }

    fn solve(&mut self) -> Result<Option<Vec<Lit>>, SolverFailure> {
        match Solver::solve(self) {
            Ok(true) => match self.model() {
                Some(model) => Ok(Some(model)),
                None => Err(SolverFailure::OracleAborted),
            },
            Ok(false) => Ok(None),
            Err(err) => {
                error!("varisat failed: {err:?}");
                Err(SolverFailure::OracleAborted)
            }
        }
    }
}

impl<O: Oracle + ?Sized> Oracle for &mut O {
    fn add_formula(&mut self, formula: &CnfFormula) {
        (**self).add_formula(formula)
    }

    fn solve(&mut self) -> Result<Option<Vec<Lit>>, SolverFailure> {
        (**self).solve()
    }
}
