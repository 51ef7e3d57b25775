use crate::search::heuristics::{MaxRemaining, PairedCrossings};
use crate::search::{Cost, Problem, State};
use std::fmt::Debug;

/// An estimator of the crossing time still needed from a state. A* only
/// guarantees optimal plans when the estimate never exceeds the true
/// remaining cost.
pub trait Heuristic: Debug {
    /// Evaluate the given state with respect to the given problem.
    fn evaluate(&mut self, state: &State, problem: &Problem) -> Cost;
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[clap(rename_all = "kebab-case")]
pub enum HeuristicName {
    #[clap(help = "The slowest crossing time still on the origin bank. \
        Admissible, so plans are optimal, at the price of more expansions.")]
    MaxRemaining,
    #[clap(help = "Pairs up the remaining participants and charges each \
        pair the slowest remaining time, plus units for return trips. \
        Stronger in practice, but its return-trip term can overestimate \
        on some instances.")]
    PairedCrossings,
}

impl HeuristicName {
    pub fn create(&self) -> Box<dyn Heuristic> {
        match self {
            HeuristicName::MaxRemaining => Box::new(MaxRemaining::new()),
            HeuristicName::PairedCrossings => Box::new(PairedCrossings::new()),
        }
    }
}
