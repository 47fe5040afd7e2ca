//! Breadth first search: a genuine FIFO frontier, expanding states in
//! generation order. The first goal popped is the one with the fewest
//! moves, which is not necessarily the cheapest.

use crate::model::Problem;
use crate::search::search_engines::{
    driver::run_search, SearchEngine, SearchResult, SearchStatistics, TerminationCondition,
};
use crate::search::Frontier;

#[derive(Debug, Default)]
pub struct BreadthFirstSearch {}

impl BreadthFirstSearch {
    pub fn new() -> Self {
        Self {}
    }
}

impl SearchEngine for BreadthFirstSearch {
    fn search(
        &mut self,
        problem: &Problem,
        termination: &mut TerminationCondition,
    ) -> (SearchResult, SearchStatistics) {
        run_search(problem, Frontier::fifo(), termination)
    }
}
