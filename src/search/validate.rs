//! Replays a plan against a problem and checks every invariant a returned
//! plan must satisfy: moves follow roads, each task is picked up exactly
//! once at its pickup city and delivered exactly once at its delivery city,
//! the vehicle is never overloaded, and nothing is left on board or on the
//! ground at the end.

use crate::model::{Action, Plan, Problem};
use crate::search::TaskSet;

pub fn validate(plan: &Plan, problem: &Problem) -> Result<(), String> {
    if plan.start_city() != problem.vehicle.start_city {
        return Err(format!(
            "plan starts at {} but the vehicle is at {}",
            problem.topology.name(plan.start_city()),
            problem.topology.name(problem.vehicle.start_city)
        ));
    }

    let mut current = plan.start_city();
    let mut unassigned = TaskSet::full(problem.num_tasks());
    let mut carried = TaskSet::new();
    let mut carried_weight = 0.0;

    for action in plan.actions() {
        match *action {
            Action::Move(city) => {
                if !problem.topology.are_neighbors(current, city) {
                    return Err(format!(
                        "move from {} to {} is not along a road",
                        problem.topology.name(current),
                        problem.topology.name(city)
                    ));
                }
                current = city;
            }
            Action::Pickup(task) => {
                if task >= problem.num_tasks() {
                    return Err(format!("pickup of unknown task t{task}"));
                }
                if !unassigned.contains(task) {
                    return Err(format!("task t{task} picked up twice"));
                }
                if problem.tasks[task].pickup != current {
                    return Err(format!(
                        "task t{task} picked up in {} instead of {}",
                        problem.topology.name(current),
                        problem.topology.name(problem.tasks[task].pickup)
                    ));
                }
                carried_weight += problem.tasks[task].weight;
                if carried_weight > problem.vehicle.capacity {
                    return Err(format!(
                        "picking up task t{task} loads {carried_weight} onto a vehicle \
                         with capacity {}",
                        problem.vehicle.capacity
                    ));
                }
                unassigned.remove(task);
                carried.insert(task);
            }
            Action::Deliver(task) => {
                if task >= problem.num_tasks() {
                    return Err(format!("delivery of unknown task t{task}"));
                }
                if !carried.contains(task) {
                    return Err(format!("task t{task} delivered while not on board"));
                }
                if problem.tasks[task].delivery != current {
                    return Err(format!(
                        "task t{task} delivered in {} instead of {}",
                        problem.topology.name(current),
                        problem.topology.name(problem.tasks[task].delivery)
                    ));
                }
                carried.remove(task);
                carried_weight -= problem.tasks[task].weight;
            }
        }
    }

    if !unassigned.is_empty() || !carried.is_empty() {
        return Err(format!(
            "plan ends with {} task(s) not picked up and {} still on board",
            unassigned.len(),
            carried.len()
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Plan;
    use crate::test_utils::*;

    fn line_cities(problem: &Problem) -> (crate::model::CityId, crate::model::CityId, crate::model::CityId) {
        (
            problem.topology.city("A").unwrap(),
            problem.topology.city("B").unwrap(),
            problem.topology.city("C").unwrap(),
        )
    }

    #[test]
    fn accepts_a_correct_plan() {
        let problem = line_problem();
        let (a, b, c) = line_cities(&problem);

        let mut plan = Plan::new(a);
        plan.append_pickup(0);
        plan.append_move(b);
        plan.append_move(c);
        plan.append_delivery(0);

        assert!(validate(&plan, &problem).is_ok());
    }

    #[test]
    fn rejects_a_move_off_the_road_network() {
        let problem = line_problem();
        let (a, _, c) = line_cities(&problem);

        let mut plan = Plan::new(a);
        plan.append_pickup(0);
        plan.append_move(c);
        plan.append_delivery(0);

        let error = validate(&plan, &problem).unwrap_err();
        assert!(error.contains("not along a road"), "{error}");
    }

    #[test]
    fn rejects_a_double_pickup() {
        let problem = line_problem();
        let (a, b, c) = line_cities(&problem);

        let mut plan = Plan::new(a);
        plan.append_pickup(0);
        plan.append_pickup(0);
        plan.append_move(b);
        plan.append_move(c);
        plan.append_delivery(0);

        let error = validate(&plan, &problem).unwrap_err();
        assert!(error.contains("picked up twice"), "{error}");
    }

    #[test]
    fn rejects_delivery_of_a_task_not_on_board() {
        let problem = line_problem();
        let (a, b, c) = line_cities(&problem);

        let mut plan = Plan::new(a);
        plan.append_move(b);
        plan.append_move(c);
        plan.append_delivery(0);

        let error = validate(&plan, &problem).unwrap_err();
        assert!(error.contains("not on board"), "{error}");
    }

    #[test]
    fn rejects_an_overloaded_vehicle() {
        let problem = capacity_problem();
        let a = problem.topology.city("A").unwrap();
        let b = problem.topology.city("B").unwrap();

        let mut plan = Plan::new(a);
        plan.append_pickup(0);
        plan.append_pickup(1);
        plan.append_move(b);
        plan.append_delivery(0);
        plan.append_delivery(1);

        let error = validate(&plan, &problem).unwrap_err();
        assert!(error.contains("capacity"), "{error}");
    }

    #[test]
    fn rejects_an_unfinished_plan() {
        let problem = line_problem();
        let (a, b, _) = line_cities(&problem);

        let mut plan = Plan::new(a);
        plan.append_pickup(0);
        plan.append_move(b);

        let error = validate(&plan, &problem).unwrap_err();
        assert!(error.contains("still on board"), "{error}");
    }

    #[test]
    fn rejects_a_plan_anchored_at_the_wrong_city() {
        let problem = line_problem();
        let (_, b, _) = line_cities(&problem);

        let plan = Plan::new(b);
        let error = validate(&plan, &problem).unwrap_err();
        assert!(error.contains("vehicle is at"), "{error}");
    }
}
