use crate::model::{Plan, Problem};
use crate::search::search_engines::{
    BreadthFirstSearch, SearchStatistics, TerminationCondition, UniformCostSearch,
};
use clap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult {
    /// A plan delivering every task was found.
    Success(Plan),
    /// The frontier emptied without reaching a goal state. No feasible plan
    /// exists under the generator's policy (e.g. a pickup or delivery city
    /// is unreachable).
    Exhausted,
    /// The search hit its wall-clock ceiling.
    TimeLimitExceeded,
    /// The search hit its memory ceiling.
    MemoryLimitExceeded,
}

pub trait SearchEngine {
    fn search(
        &mut self,
        problem: &Problem,
        termination: &mut TerminationCondition,
    ) -> (SearchResult, SearchStatistics);
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[clap(rename_all = "kebab-case")]
pub enum SearchEngineName {
    #[default]
    #[clap(help = "Cost-ordered (uniform-cost) search, optimal relative to \
        the arrival policy.")]
    Astar,
    #[clap(help = "Breadth-first search with a FIFO frontier; finds a plan \
        with the fewest moves, not the cheapest one.")]
    Bfs,
}

impl SearchEngineName {
    pub fn create(&self) -> Box<dyn SearchEngine> {
        match self {
            SearchEngineName::Astar => Box::new(UniformCostSearch::new()),
            SearchEngineName::Bfs => Box::new(BreadthFirstSearch::new()),
        }
    }
}

impl fmt::Display for SearchEngineName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchEngineName::Astar => write!(f, "astar"),
            SearchEngineName::Bfs => write!(f, "bfs"),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("unknown algorithm `{0}`, expected `astar` or `bfs`")]
    UnknownAlgorithm(String),
}

/// Case-insensitive parse, for algorithm names coming from configuration
/// rather than the command line. Fails before any search runs.
impl FromStr for SearchEngineName {
    type Err = ConfigurationError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_ascii_lowercase().as_str() {
            "astar" => Ok(SearchEngineName::Astar),
            "bfs" => Ok(SearchEngineName::Bfs),
            _ => Err(ConfigurationError::UnknownAlgorithm(name.to_string())),
        }
    }
}
