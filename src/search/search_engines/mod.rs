mod bfs;
mod driver;
mod search_engine;
mod search_statistics;
mod termination_condition;
mod uniform_cost;

pub use bfs::BreadthFirstSearch;
pub use search_engine::{ConfigurationError, SearchEngine, SearchEngineName, SearchResult};
pub use search_statistics::SearchStatistics;
pub use termination_condition::TerminationCondition;
pub use uniform_cost::UniformCostSearch;
