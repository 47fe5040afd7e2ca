//! One planning call's worth of input: the topology, the task set and the
//! vehicle descriptor, loaded from a JSON instance file.

use crate::model::{DeliveryTask, Road, Topology, Vehicle};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProblemError {
    #[error("failed to read problem file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed problem file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unknown city `{0}`")]
    UnknownCity(String),
    #[error("duplicate city `{0}`")]
    DuplicateCity(String),
    #[error("road {0} -- {1} has invalid distance {2}")]
    InvalidRoad(String, String, f64),
    #[error("task {0} has non-positive weight {1}")]
    InvalidWeight(usize, f64),
}

/// Instance file schema. Names are resolved to indices when the [`Problem`]
/// is built.
#[derive(Debug, Deserialize)]
struct RawProblem {
    cities: Vec<String>,
    roads: Vec<Road>,
    tasks: Vec<RawTask>,
    vehicle: RawVehicle,
}

#[derive(Debug, Deserialize)]
struct RawTask {
    pickup: String,
    delivery: String,
    weight: f64,
}

#[derive(Debug, Deserialize)]
struct RawVehicle {
    capacity: f64,
    cost_per_distance: f64,
    start: String,
    /// Defaults to the start city when omitted.
    home: Option<String>,
}

#[derive(Debug)]
pub struct Problem {
    pub topology: Topology,
    pub tasks: Vec<DeliveryTask>,
    pub vehicle: Vehicle,
}

impl Problem {
    pub fn from_path(path: &Path) -> Result<Self, ProblemError> {
        let text = fs::read_to_string(path)?;
        Self::from_text(&text)
    }

    pub fn from_text(text: &str) -> Result<Self, ProblemError> {
        let raw: RawProblem = serde_json::from_str(text)?;
        let topology = Topology::new(&raw.cities, &raw.roads)?;

        let lookup = |name: &str| {
            topology
                .city(name)
                .ok_or_else(|| ProblemError::UnknownCity(name.to_string()))
        };

        let mut tasks = vec![];
        for (index, task) in raw.tasks.iter().enumerate() {
            if !task.weight.is_finite() || task.weight <= 0.0 {
                return Err(ProblemError::InvalidWeight(index, task.weight));
            }
            tasks.push(DeliveryTask {
                pickup: lookup(&task.pickup)?,
                delivery: lookup(&task.delivery)?,
                weight: task.weight,
            });
        }

        let start_city = lookup(&raw.vehicle.start)?;
        let home_city = match &raw.vehicle.home {
            Some(name) => lookup(name)?,
            None => start_city,
        };
        let vehicle = Vehicle {
            capacity: raw.vehicle.capacity,
            cost_per_distance: raw.vehicle.cost_per_distance,
            start_city,
            home_city,
        };

        Ok(Self {
            topology,
            tasks,
            vehicle,
        })
    }

    pub fn num_tasks(&self) -> usize {
        self.tasks.len()
    }
}
