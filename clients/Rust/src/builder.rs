use std::ops::RangeInclusive;

use crate::error::{QFleetError, Result};
use crate::types::{Problem, NUM_LOCATIONS, NUM_VEHICLES, REPS};

/// Builder for constructing problems from user input with a fluent API
///
/// Starts from the same defaults as [`Problem::default`].
#[derive(Debug, Clone, Copy)]
pub struct ProblemBuilder {
    problem: Problem,
}

impl Default for ProblemBuilder {
    fn default() -> Self {
        Self {
            problem: Problem::default(),
        }
    }
}

impl From<Problem> for ProblemBuilder {
    fn from(problem: Problem) -> Self {
        Self { problem }
    }
}

impl ProblemBuilder {
    /// Create a new problem builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of locations, depot included
    ///
    /// # Example
    ///
    /// ```
    /// use q_fleet_sdk::ProblemBuilder;
    ///
    /// let problem = ProblemBuilder::new().num_locations(6).build().unwrap();
    /// assert_eq!(problem.num_locations, 6);
    /// ```
    pub fn num_locations(mut self, num_locations: u32) -> Self {
        self.problem.num_locations = num_locations;
        self
    }

    /// Set the number of vehicles
    pub fn num_vehicles(mut self, num_vehicles: u32) -> Self {
        self.problem.num_vehicles = num_vehicles;
        self
    }

    /// Set the QAOA repetitions
    pub fn reps(mut self, reps: u32) -> Self {
        self.problem.reps = reps;
        self
    }

    /// Build the problem
    ///
    /// # Errors
    ///
    /// Returns [`QFleetError::InvalidRequest`] if any field is outside its documented range.
    pub fn build(self) -> Result<Problem> {
        validate(&self.problem)?;
        Ok(self.problem)
    }
}

/// Check a problem against the documented ranges
pub fn validate(problem: &Problem) -> Result<()> {
    check_range("num_locations", problem.num_locations, &NUM_LOCATIONS)?;
    check_range("num_vehicles", problem.num_vehicles, &NUM_VEHICLES)?;
    check_range("reps", problem.reps, &REPS)?;
    Ok(())
}

fn check_range(field: &str, value: u32, range: &RangeInclusive<u32>) -> Result<()> {
    if range.contains(&value) {
        return Ok(());
    }
    Err(QFleetError::InvalidRequest(format!(
        "{} must be between {} and {}, got {}",
        field,
        range.start(),
        range.end(),
        value,
    )))
}
