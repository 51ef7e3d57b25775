mod astar;
mod search_engine;

pub use astar::AStar;
pub use search_engine::{SearchEngine, SearchEngineName, SearchResult};
