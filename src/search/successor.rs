//! Expands a search state into its children, one per neighboring city.
//!
//! Loading and unloading is not a search choice: on every arrival at a city
//! the generator greedily picks up all still-fitting tasks whose pickup city
//! this is, then delivers everything on board addressed to it. Folding the
//! load/unload decision into arrival keeps the branching factor at the city
//! degree, at the price of foreclosing plans that would profit from leaving
//! a parcel behind for a later pass. Cost-ordered search is therefore
//! optimal relative to this policy, not over all conceivable schedules.

use crate::model::{CityId, Plan, Problem, TaskId};
use crate::search::{SearchState, TaskSet};

#[derive(Debug)]
pub struct SuccessorGenerator<'a> {
    problem: &'a Problem,
}

impl<'a> SuccessorGenerator<'a> {
    pub fn new(problem: &'a Problem) -> Self {
        Self { problem }
    }

    /// The root state: the vehicle at its current city with every task
    /// unassigned and an empty plan, after one application of the arrival
    /// policy. Tasks whose pickup city is the starting city are loaded
    /// before the first move, exactly as they would be on any later arrival.
    pub fn initial_state(&self) -> SearchState {
        let start = self.problem.vehicle.start_city;
        let mut plan = Plan::new(start);
        let mut unassigned = TaskSet::full(self.problem.num_tasks());
        let mut carried = TaskSet::new();
        self.apply_arrival_policy(start, &mut plan, &mut unassigned, &mut carried);

        SearchState {
            city: start,
            unassigned,
            carried,
            plan,
            cost: 0.0,
        }
    }

    /// One child per city adjacent to the parent's. The parent is untouched.
    pub fn successors(&self, parent: &SearchState) -> Vec<SearchState> {
        self.problem
            .topology
            .neighbors(parent.city)
            .map(|city| self.successor(parent, city))
            .collect()
    }

    fn successor(&self, parent: &SearchState, city: CityId) -> SearchState {
        let mut plan = parent.plan.clone();
        let mut unassigned = parent.unassigned.clone();
        let mut carried = parent.carried.clone();

        plan.append_move(city);
        self.apply_arrival_policy(city, &mut plan, &mut unassigned, &mut carried);

        let travelled = self.problem.topology.distance(parent.city, city);
        let cost = parent.cost + travelled * self.problem.vehicle.cost_per_distance;

        SearchState {
            city,
            unassigned,
            carried,
            plan,
            cost,
        }
    }

    /// The mandatory pickup/delivery policy applied on arrival at `city`.
    ///
    /// Pickup pass first, in ascending task-id order, keeping a running
    /// carried weight so that tasks which fit individually but not jointly
    /// are not both taken. Delivery pass second, over everything on board
    /// after the pickups.
    fn apply_arrival_policy(
        &self,
        city: CityId,
        plan: &mut Plan,
        unassigned: &mut TaskSet,
        carried: &mut TaskSet,
    ) {
        let tasks = &self.problem.tasks;
        let capacity = self.problem.vehicle.capacity;
        let mut carried_weight = carried.total_weight(tasks);

        let waiting_here: Vec<TaskId> = unassigned
            .iter()
            .filter(|&task| tasks[task].pickup == city)
            .collect();
        for task in waiting_here {
            if carried_weight + tasks[task].weight <= capacity {
                plan.append_pickup(task);
                unassigned.remove(task);
                carried.insert(task);
                carried_weight += tasks[task].weight;
            }
        }

        let addressed_here: Vec<TaskId> = carried
            .iter()
            .filter(|&task| tasks[task].delivery == city)
            .collect();
        for task in addressed_here {
            plan.append_delivery(task);
            carried.remove(task);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Action;
    use crate::test_utils::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn initial_state_loads_tasks_waiting_at_the_start() {
        let problem = line_problem();
        let generator = SuccessorGenerator::new(&problem);

        let initial = generator.initial_state();
        assert_eq!(initial.city, problem.vehicle.start_city);
        assert_approx_eq!(initial.cost, 0.0);
        assert!(initial.unassigned.is_empty());
        assert!(initial.carried.contains(0));
        assert_eq!(initial.plan.actions(), &[Action::Pickup(0)]);
    }

    #[test]
    fn initial_state_with_no_tasks_is_a_goal() {
        let problem = empty_problem();
        let generator = SuccessorGenerator::new(&problem);

        let initial = generator.initial_state();
        assert!(initial.is_goal());
        assert!(initial.plan.is_empty());
    }

    #[test]
    fn one_child_per_neighbor() {
        let problem = line_problem();
        let generator = SuccessorGenerator::new(&problem);
        let b = problem.topology.city("B").unwrap();

        let initial = generator.initial_state();
        let children = generator.successors(&initial);
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].city, b);
        assert_approx_eq!(children[0].cost, 2.0);

        let from_b = generator.successors(&children[0]);
        assert_eq!(from_b.len(), 2);
    }

    #[test]
    fn parent_is_untouched_by_expansion() {
        let problem = line_problem();
        let generator = SuccessorGenerator::new(&problem);

        let initial = generator.initial_state();
        let snapshot = initial.clone();
        let _ = generator.successors(&initial);

        assert_eq!(initial.key(), snapshot.key());
        assert_eq!(initial.plan, snapshot.plan);
    }

    #[test]
    fn pickup_pass_respects_the_running_weight() {
        // Two weight-4 tasks at A, capacity 5: they fit individually but
        // not jointly, so only the lower id is taken per visit.
        let problem = capacity_problem();
        let generator = SuccessorGenerator::new(&problem);

        let initial = generator.initial_state();
        assert!(initial.carried.contains(0));
        assert!(initial.unassigned.contains(1));
        assert_eq!(initial.plan.actions(), &[Action::Pickup(0)]);
    }

    #[test]
    fn arrival_delivers_everything_addressed_to_the_city() {
        let problem = capacity_problem();
        let generator = SuccessorGenerator::new(&problem);
        let b = problem.topology.city("B").unwrap();

        let initial = generator.initial_state();
        let children = generator.successors(&initial);
        let at_b = children.iter().find(|child| child.city == b).unwrap();

        assert!(at_b.carried.is_empty());
        assert!(at_b
            .plan
            .actions()
            .contains(&Action::Deliver(0)));
    }

    #[test]
    fn revisiting_the_pickup_city_takes_the_remaining_task() {
        let problem = capacity_problem();
        let generator = SuccessorGenerator::new(&problem);
        let a = problem.topology.city("A").unwrap();

        let initial = generator.initial_state();
        let at_b = generator.successors(&initial).remove(0);
        let back_at_a = generator
            .successors(&at_b)
            .into_iter()
            .find(|child| child.city == a)
            .unwrap();

        assert!(back_at_a.unassigned.is_empty());
        assert!(back_at_a.carried.contains(1));
        assert_approx_eq!(back_at_a.cost, 4.0);
    }
}
