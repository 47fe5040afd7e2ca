//! Cost-ordered search. Selected as `astar` although no heuristic term is
//! added: states are expanded in ascending order of accumulated travel
//! cost, so the first goal popped is the cheapest one reachable under the
//! arrival policy.

use crate::model::Problem;
use crate::search::search_engines::{
    driver::run_search, SearchEngine, SearchResult, SearchStatistics, TerminationCondition,
};
use crate::search::Frontier;

#[derive(Debug, Default)]
pub struct UniformCostSearch {}

impl UniformCostSearch {
    pub fn new() -> Self {
        Self {}
    }
}

impl SearchEngine for UniformCostSearch {
    fn search(
        &mut self,
        problem: &Problem,
        termination: &mut TerminationCondition,
    ) -> (SearchResult, SearchStatistics) {
        run_search(problem, Frontier::cost_ordered(), termination)
    }
}
