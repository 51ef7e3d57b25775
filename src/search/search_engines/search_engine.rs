use crate::search::{search_engines::AStar, Heuristic, Plan, Problem, SearchStatistics};
use clap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult {
    /// The search reached the goal within the time budget
    Success(Plan),
    /// The cheapest remaining candidate already exceeded the time budget
    BudgetExceeded,
    /// The frontier emptied without reaching the goal
    Unsolvable,
}

pub trait SearchEngine {
    fn search(
        &mut self,
        problem: &Problem,
        heuristic: Box<dyn Heuristic>,
    ) -> (SearchResult, SearchStatistics);
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[clap(rename_all = "kebab-case")]
pub enum SearchEngineName {
    AStar,
}

impl SearchEngineName {
    pub fn create(&self) -> impl SearchEngine {
        match self {
            SearchEngineName::AStar => AStar::new(),
        }
    }
}
