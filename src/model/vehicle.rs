use crate::model::CityId;

/// The delivery vehicle a plan is computed for. Immutable for the duration
/// of one planning call.
#[derive(Debug, Clone)]
pub struct Vehicle {
    /// Maximum total weight carried at once.
    pub capacity: f64,
    /// Cost charged per unit of distance travelled.
    pub cost_per_distance: f64,
    /// Where the vehicle currently is; plans are anchored here.
    pub start_city: CityId,
    pub home_city: CityId,
}
