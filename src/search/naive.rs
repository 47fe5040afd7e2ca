//! A last-resort planner that performs no search at all: it serves tasks
//! one at a time in id order, driving to each pickup city and then to the
//! delivery city along shortest routes. Plans are feasible (one parcel on
//! board at a time) but generally far from cheap. The engines never consult
//! it; callers may fall back to it when a search reports exhaustion or hits
//! a resource limit.

use crate::model::{Plan, Problem};

/// `None` if some pickup or delivery city cannot be reached.
pub fn naive_plan(problem: &Problem) -> Option<Plan> {
    let mut current = problem.vehicle.start_city;
    let mut plan = Plan::new(current);

    for (id, task) in problem.tasks.iter().enumerate() {
        let to_pickup = problem.topology.path(current, task.pickup)?;
        for &city in &to_pickup[1..] {
            plan.append_move(city);
        }
        plan.append_pickup(id);

        let to_delivery = problem.topology.path(task.pickup, task.delivery)?;
        for &city in &to_delivery[1..] {
            plan.append_move(city);
        }
        plan.append_delivery(id);

        current = task.delivery;
    }

    Some(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::search_engines::{
        SearchEngine, SearchResult, TerminationCondition, UniformCostSearch,
    };
    use crate::search::validate;
    use crate::test_utils::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn line_instance_gets_the_direct_plan() {
        let problem = line_problem();
        let plan = naive_plan(&problem).unwrap();
        assert!(validate(&plan, &problem).is_ok());
        assert_approx_eq!(plan.cost(&problem), 5.0);
    }

    #[test]
    fn serves_tasks_one_at_a_time() {
        let problem = capacity_problem();
        let plan = naive_plan(&problem).unwrap();
        assert!(validate(&plan, &problem).is_ok());
        // A->B, back, A->B again: three crossings of the single road.
        assert_approx_eq!(plan.cost(&problem), 6.0);
    }

    #[test]
    fn never_beats_the_cost_ordered_engine() {
        let problem = switzerland_problem();
        let fallback = naive_plan(&problem).unwrap();
        assert!(validate(&fallback, &problem).is_ok());

        let mut engine = UniformCostSearch::new();
        let (result, _) = engine.search(&problem, &mut TerminationCondition::unlimited());
        let searched = match result {
            SearchResult::Success(plan) => plan,
            other => panic!("expected a plan, got {other:?}"),
        };
        assert!(searched.cost(&problem) <= fallback.cost(&problem) + 1e-9);
    }

    #[test]
    fn unreachable_city_yields_no_plan() {
        let problem = disconnected_problem();
        assert_eq!(naive_plan(&problem), None);
    }
}
