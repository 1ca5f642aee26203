use strum::{Display, EnumString, VariantArray};

/// How much effort the solver spends on keeping the bridge graph connected.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, VariantArray, EnumString, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Connectivity {
    /// Only weights, crossings and island degrees are encoded; disconnected answers are possible.
    Unchecked,
    /// Adds flow constraints giving every island but the first an inbound pointer.
    /// This rules out disconnected trees but not disconnected cycles.
    DirectionalFlow,
    /// Flow constraints plus a connectivity check after each answer; disconnected answers are cut off and the solver re-run.
    #[default]
    Verified,
}

impl Connectivity {
    pub(crate) fn uses_flow(&self) -> bool {
        *self != Connectivity::Unchecked
    }
}

/// Options for [`Board::solve_with`](crate::Board::solve_with).
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SolverConfig {
    /// See [`Connectivity`].
    pub connectivity: Connectivity,
    /// Give up with [`RefinementLimit`](crate::SolverFailure::RefinementLimit) after this many rounds of connectivity cuts.
    /// Unbounded when `None`.
    pub max_refinements: Option<usize>,
}

impl SolverConfig {
    /// Replace the [`Connectivity`] mode.
    pub fn with_connectivity(mut self, connectivity: Connectivity) -> Self {
        self.connectivity = connectivity;
        self
    }

    /// Bound the number of connectivity refinement rounds.
    pub fn with_max_refinements(mut self, max_refinements: usize) -> Self {
        self.max_refinements = Some(max_refinements);
        self
    }
}
