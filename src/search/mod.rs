mod frontier;
mod naive;
pub mod search_engines;
mod state;
mod successor;
mod validate;
mod verbosity;
mod visited;

pub use frontier::Frontier;
pub use naive::naive_plan;
pub use search_engines::{
    ConfigurationError, SearchEngine, SearchEngineName, SearchResult, SearchStatistics,
    TerminationCondition,
};
pub use state::{SearchState, StateKey, TaskSet};
pub use successor::SuccessorGenerator;
pub use validate::validate;
pub use verbosity::Verbosity;
pub use visited::VisitedRegistry;
