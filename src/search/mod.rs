mod crossing;
pub mod heuristics;
mod participant;
mod plan;
mod problem;
pub mod search_engines;
mod search_node;
mod search_space;
mod search_statistics;
mod state;
mod verbosity;

pub use crossing::Crossing;
pub use heuristics::{Heuristic, HeuristicName};
pub use participant::Participant;
pub use plan::{Plan, PlanStep};
pub use problem::{Problem, ProblemError};
pub use search_node::{NodeId, SearchNode, SearchNodeStatus};
pub use search_space::SearchSpace;
pub use search_statistics::SearchStatistics;
pub use state::{Bank, State};
pub use verbosity::Verbosity;

/// Crossing times and accumulated costs. All costs in this puzzle are
/// positive integers, so there is no need for float-valued heuristics.
pub type Cost = u32;
