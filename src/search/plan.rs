use crate::search::{Bank, Cost, Crossing, Problem, State};
use std::fmt;

const SEPARATOR: &str = "********************************************************";

/// One entry of a reconstructed plan: the configuration after a crossing,
/// the crossing that produced it (`None` for the initial state), and the
/// cost values the search assigned to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanStep {
    pub state: State,
    pub crossing: Option<Crossing>,
    pub g: Cost,
    pub h: Cost,
    pub f: Cost,
}

/// An ordered sequence of states from the initial configuration to the
/// goal, produced by walking the goal node's parent chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    steps: Vec<PlanStep>,
}

impl Plan {
    pub fn new(steps: Vec<PlanStep>) -> Self {
        debug_assert!(!steps.is_empty(), "a plan contains at least the root");
        Self { steps }
    }

    pub fn steps(&self) -> &[PlanStep] {
        &self.steps
    }

    /// Accumulated crossing time of the whole plan.
    pub fn total_cost(&self) -> Cost {
        self.steps.last().map(|step| step.g).unwrap_or(0)
    }

    /// Render the plan the way the reporter prints it, resolving
    /// participant indices and the remaining budget against `problem`.
    pub fn display<'a>(&'a self, problem: &'a Problem) -> PlanDisplay<'a> {
        PlanDisplay {
            plan: self,
            problem,
        }
    }
}

#[derive(Debug)]
pub struct PlanDisplay<'a> {
    plan: &'a Plan,
    problem: &'a Problem,
}

fn write_bank(f: &mut fmt::Formatter<'_>, label: &str, bank: Bank, problem: &Problem) -> fmt::Result {
    writeln!(f, "{label}:")?;
    writeln!(f, "[")?;
    for participant in bank.members(problem) {
        writeln!(f, "  {participant},")?;
    }
    writeln!(f, "]")
}

impl fmt::Display for PlanDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let budget = self.problem.time_budget();
        for (index, step) in self.plan.steps().iter().enumerate() {
            writeln!(f, "{SEPARATOR}")?;
            writeln!(f, "Remaining Time = {}", budget - step.g)?;
            writeln!(f, "State {index:02}: ")?;
            write_bank(f, "Left Bank", step.state.origin(), self.problem)?;
            write_bank(
                f,
                "Right Bank",
                step.state.destination(self.problem),
                self.problem,
            )?;
            writeln!(f, "Lantern on Left Bank: {}", step.state.lantern_on_origin())?;
            writeln!(f, "Cost: {}", step.g)?;
            writeln!(f, "Heuristic: {}", step.h)?;
            writeln!(f, "Total Cost: {}", step.f)?;
            writeln!(f)?;
        }
        writeln!(f, "{SEPARATOR}")
    }
}
