//! Search states: a position in the city graph together with the partition
//! of still-open tasks into "not yet picked up" and "on board", the action
//! sequence taken so far and its accumulated cost.

use crate::model::{CityId, DeliveryTask, Plan, TaskId};
use smallvec::SmallVec;

const TYPICAL_NUM_TASKS: usize = 8;

/// A set of task ids in canonical (ascending) order, so that equal sets
/// hash and compare equal regardless of insertion history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TaskSet(SmallVec<[TaskId; TYPICAL_NUM_TASKS]>);

impl TaskSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The set {0, 1, .., num_tasks - 1}.
    pub fn full(num_tasks: usize) -> Self {
        Self((0..num_tasks).collect())
    }

    pub fn insert(&mut self, task: TaskId) {
        if let Err(position) = self.0.binary_search(&task) {
            self.0.insert(position, task);
        }
    }

    pub fn remove(&mut self, task: TaskId) {
        if let Ok(position) = self.0.binary_search(&task) {
            self.0.remove(position);
        }
    }

    pub fn contains(&self, task: TaskId) -> bool {
        self.0.binary_search(&task).is_ok()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates ids in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = TaskId> + '_ {
        self.0.iter().copied()
    }

    pub fn total_weight(&self, tasks: &[DeliveryTask]) -> f64 {
        self.iter().map(|task| tasks[task].weight).sum()
    }
}

impl FromIterator<TaskId> for TaskSet {
    fn from_iter<I: IntoIterator<Item = TaskId>>(iter: I) -> Self {
        let mut set = Self::new();
        for task in iter {
            set.insert(task);
        }
        set
    }
}

/// The equivalence key of a state: two states with equal keys are
/// interchangeable for deduplication purposes, whatever plans and costs
/// they were reached with.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StateKey {
    pub city: CityId,
    pub unassigned: TaskSet,
    pub carried: TaskSet,
}

/// A node in the search graph. States are immutable values: successors are
/// built by structural copy, never by aliasing the parent's sets.
#[derive(Debug, Clone)]
pub struct SearchState {
    pub city: CityId,
    /// Tasks not yet picked up.
    pub unassigned: TaskSet,
    /// Tasks currently on board.
    pub carried: TaskSet,
    /// The action sequence that reached this state.
    pub plan: Plan,
    /// Accumulated travel cost along that sequence.
    pub cost: f64,
}

impl SearchState {
    /// A state is a goal once every task has been delivered.
    pub fn is_goal(&self) -> bool {
        self.unassigned.is_empty() && self.carried.is_empty()
    }

    pub fn key(&self) -> StateKey {
        StateKey {
            city: self.city,
            unassigned: self.unassigned.clone(),
            carried: self.carried.clone(),
        }
    }

    pub fn carried_weight(&self, tasks: &[DeliveryTask]) -> f64 {
        self.carried.total_weight(tasks)
    }
}
