use crate::model::CityId;

/// Identity of a task: its index into the problem's task vector.
pub type TaskId = usize;

/// A pickup-and-delivery request. The working set of tasks is fixed before a
/// planning call starts.
#[derive(Debug, Clone)]
pub struct DeliveryTask {
    pub pickup: CityId,
    pub delivery: CityId,
    /// Weight of the parcel, in the same unit as the vehicle capacity.
    /// Always positive.
    pub weight: f64,
}
