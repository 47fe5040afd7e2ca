mod plan;
mod problem;
mod task;
mod topology;
mod vehicle;

pub use plan::{Action, Plan};
pub use problem::{Problem, ProblemError};
pub use task::{DeliveryTask, TaskId};
pub use topology::{CityId, Road, Topology};
pub use vehicle::Vehicle;
