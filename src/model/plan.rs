//! A plan is a sequence of actions executed by a vehicle, anchored at its
//! starting city. This module provides the [`Plan`] struct and the
//! [`Action`] variants it is built from.

use crate::model::{CityId, Problem, TaskId};
use itertools::Itertools;
use std::ops::Deref;

/// A single step of a plan. Moves change the vehicle's city; pickups and
/// deliveries happen in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Move(CityId),
    Pickup(TaskId),
    Deliver(TaskId),
}

impl Action {
    pub fn to_string(&self, problem: &Problem) -> String {
        match *self {
            Action::Move(city) => format!("(move {})", problem.topology.name(city)),
            Action::Pickup(task) => format!("(pickup t{task})"),
            Action::Deliver(task) => format!("(deliver t{task})"),
        }
    }
}

/// An ordered action sequence anchored at a starting city.
///
/// A well-formed plan only ever moves along roads: each appended move must
/// reference a neighbor of the current end-of-plan city. The plan itself
/// does not hold the topology, so this invariant is upheld by the producers
/// (the successor generator moves along edges by construction) and checked
/// independently by [`crate::search::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    start: CityId,
    end: CityId,
    actions: Vec<Action>,
}

impl Plan {
    pub fn new(start: CityId) -> Self {
        Self {
            start,
            end: start,
            actions: vec![],
        }
    }

    pub fn start_city(&self) -> CityId {
        self.start
    }

    /// The city the vehicle is in after executing the plan so far.
    pub fn end_city(&self) -> CityId {
        self.end
    }

    pub fn append_move(&mut self, city: CityId) {
        self.actions.push(Action::Move(city));
        self.end = city;
    }

    pub fn append_pickup(&mut self, task: TaskId) {
        self.actions.push(Action::Pickup(task));
    }

    pub fn append_delivery(&mut self, task: TaskId) {
        self.actions.push(Action::Deliver(task));
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Total travel cost of the plan: the sum of `distance x cost-per-
    /// distance` over its moves.
    pub fn cost(&self, problem: &Problem) -> f64 {
        let mut current = self.start;
        let mut cost = 0.0;
        for action in &self.actions {
            if let Action::Move(city) = *action {
                cost += problem.topology.distance(current, city)
                    * problem.vehicle.cost_per_distance;
                current = city;
            }
        }
        cost
    }

    pub fn to_string(&self, problem: &Problem) -> String {
        self.actions
            .iter()
            .map(|action| action.to_string(problem))
            .join("\n")
    }
}

impl IntoIterator for Plan {
    type Item = Action;
    type IntoIter = std::vec::IntoIter<Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.into_iter()
    }
}

impl Deref for Plan {
    type Target = [Action];

    fn deref(&self) -> &Self::Target {
        &self.actions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn appends_track_the_end_city() {
        let problem = line_problem();
        let a = problem.topology.city("A").unwrap();
        let b = problem.topology.city("B").unwrap();

        let mut plan = Plan::new(a);
        assert_eq!(plan.end_city(), a);

        plan.append_pickup(0);
        assert_eq!(plan.end_city(), a);

        plan.append_move(b);
        assert_eq!(plan.end_city(), b);
        assert_eq!(plan.len(), 2);
    }

    #[test]
    fn cost_sums_over_moves_only() {
        let problem = line_problem();
        let a = problem.topology.city("A").unwrap();
        let b = problem.topology.city("B").unwrap();
        let c = problem.topology.city("C").unwrap();

        let mut plan = Plan::new(a);
        plan.append_pickup(0);
        plan.append_move(b);
        plan.append_move(c);
        plan.append_delivery(0);

        assert_approx_eq!(plan.cost(&problem), 5.0);
    }

    #[test]
    fn empty_plan_costs_nothing() {
        let problem = line_problem();
        let a = problem.topology.city("A").unwrap();
        let plan = Plan::new(a);
        assert!(plan.is_empty());
        assert_approx_eq!(plan.cost(&problem), 0.0);
    }

    #[test]
    fn renders_actions_one_per_line() {
        let problem = line_problem();
        let a = problem.topology.city("A").unwrap();
        let b = problem.topology.city("B").unwrap();

        let mut plan = Plan::new(a);
        plan.append_pickup(0);
        plan.append_move(b);

        assert_eq!(plan.to_string(&problem), "(pickup t0)\n(move B)");
    }
}
