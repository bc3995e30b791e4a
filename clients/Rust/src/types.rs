use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::ops::RangeInclusive;

/// Accepted number of locations, depot included
pub const NUM_LOCATIONS: RangeInclusive<u32> = 2..=8;

/// Accepted number of vehicles
pub const NUM_VEHICLES: RangeInclusive<u32> = 1..=4;

/// Accepted number of QAOA repetitions
pub const REPS: RangeInclusive<u32> = 1..=8;

/// A `[latitude, longitude]` pair
pub type Coordinate = [f64; 2];

/// A vehicle routing problem as sent to the optimizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    /// Number of locations to visit, including the depot
    pub num_locations: u32,
    /// Number of available vehicles
    pub num_vehicles: u32,
    /// QAOA repetitions; higher values trade runtime for quality
    pub reps: u32,
}

impl Problem {
    /// Create a new problem without range checks
    ///
    /// Use [`ProblemBuilder`](crate::ProblemBuilder) when the values come from user input.
    pub fn new(num_locations: u32, num_vehicles: u32, reps: u32) -> Self {
        Self {
            num_locations,
            num_vehicles,
            reps,
        }
    }
}

impl Default for Problem {
    fn default() -> Self {
        Self::new(4, 2, 5)
    }
}

/// The optimizer's answer to a [`Problem`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    /// Human readable name of the method that produced the routes
    pub solution_method: String,
    /// Free-form notes from the optimizer
    pub notes: String,
    /// Sum of all route distances
    pub total_distance: f64,
    /// Wall-clock time spent by the optimizer
    pub execution_time: f64,
    /// Whether the quantum solver produced the routes (as opposed to a classical fallback)
    pub is_quantum_solution: bool,
    /// Location coordinates; index 0 is the depot
    pub coordinates: Vec<Coordinate>,
    /// One route per vehicle, as indices into `coordinates`
    pub routes: Vec<Vec<usize>>,
    /// Distance of each route, parallel to `routes`
    pub distances: Vec<f64>,
}

/// Error payload returned with non-success statuses
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub detail: Option<Value>,
}

/// Health report of the optimizer, passed through as-is
pub type HealthStatus = Map<String, Value>;
