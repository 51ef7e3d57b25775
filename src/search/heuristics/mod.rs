mod heuristic;
mod max_remaining;
mod paired_crossings;

pub use heuristic::{Heuristic, HeuristicName};
pub use max_remaining::MaxRemaining;
pub use paired_crossings::PairedCrossings;
