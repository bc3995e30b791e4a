use serde::{Deserialize, Serialize};

use q_fleet_sdk::{Problem, Solution, NUM_LOCATIONS, NUM_VEHICLES, REPS};

use crate::map_view::MapView;
use crate::session::{Session, ViewStatus};

// ---------- API (wire) types served to the page ----------

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Idle,
    Loading,
    Error,
    Solved,
}

/// Inclusive `[min, max]` bounds for the form inputs
#[derive(Serialize, Debug, Clone, Copy)]
pub struct ParameterLimits {
    pub num_locations: [u32; 2],
    pub num_vehicles: [u32; 2],
    pub reps: [u32; 2],
}

impl Default for ParameterLimits {
    fn default() -> Self {
        ParameterLimits {
            num_locations: [*NUM_LOCATIONS.start(), *NUM_LOCATIONS.end()],
            num_vehicles: [*NUM_VEHICLES.start(), *NUM_VEHICLES.end()],
            reps: [*REPS.start(), *REPS.end()],
        }
    }
}

#[derive(Serialize, Debug)]
pub struct StateResponse {
    pub parameters: Problem,
    pub limits: ParameterLimits,
    pub status: StatusKind,
    pub error: Option<String>,
    pub solution: Option<Solution>,
    pub map: Option<MapView>,
}

impl From<&Session> for StateResponse {
    fn from(session: &Session) -> Self {
        let (status, error, solution, map) = match session.status() {
            ViewStatus::Idle => (StatusKind::Idle, None, None, None),
            ViewStatus::Loading => (StatusKind::Loading, None, None, None),
            ViewStatus::Failed(message) => (StatusKind::Error, Some(message.clone()), None, None),
            ViewStatus::Solved(solution) => (
                StatusKind::Solved,
                None,
                Some(solution.clone()),
                Some(MapView::from_solution(solution)),
            ),
        };

        StateResponse {
            parameters: *session.parameters(),
            limits: ParameterLimits::default(),
            status,
            error,
            solution,
            map,
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl ToString) -> Self {
        ErrorResponse {
            error: error.to_string(),
        }
    }
}
