//! The search loop shared by both engines: pop, goal-test, dominance-check,
//! expand, push. The frontier policy passed in is the only difference
//! between them.

use crate::model::Problem;
use crate::search::search_engines::{SearchResult, SearchStatistics, TerminationCondition};
use crate::search::{Frontier, SuccessorGenerator, VisitedRegistry};
use tracing::info;

pub(crate) fn run_search(
    problem: &Problem,
    mut frontier: Frontier,
    termination: &mut TerminationCondition,
) -> (SearchResult, SearchStatistics) {
    let mut statistics = SearchStatistics::new();
    let generator = SuccessorGenerator::new(problem);
    let mut visited = VisitedRegistry::new();

    frontier.push(generator.initial_state());

    while let Some(state) = frontier.pop() {
        termination.log_if_needed();
        if let Some(result) = termination.should_terminate() {
            statistics.record_reopened_nodes(visited.reopenings());
            statistics.finalise_search();
            return (result, statistics);
        }

        // The first goal popped is returned without further expansion. Under
        // cost-ordered popping its cost is minimal among all reachable
        // goals; under FIFO popping it is the shallowest.
        if state.is_goal() {
            debug_assert!(
                (state.plan.cost(problem) - state.cost).abs() < 1e-6,
                "plan cost must agree with the state's accumulated cost"
            );
            info!(plan_cost = state.cost, plan_length = state.plan.len());
            statistics.record_reopened_nodes(visited.reopenings());
            statistics.finalise_search();
            return (SearchResult::Success(state.plan), statistics);
        }

        if !visited.admit(&state) {
            statistics.increment_dominated_nodes();
            continue;
        }

        statistics.increment_expanded_nodes();
        let successors = generator.successors(&state);
        statistics.increment_generated_nodes(successors.len());
        for successor in successors {
            frontier.push(successor);
        }
    }

    statistics.record_reopened_nodes(visited.reopenings());
    statistics.finalise_search();
    (SearchResult::Exhausted, statistics)
}
