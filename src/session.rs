use q_fleet_sdk::{validate, Problem, QFleetError, Solution};
use thiserror::Error;

/// Outcome of the latest optimize action; exactly one is current
#[derive(Debug, Clone, PartialEq)]
pub enum ViewStatus {
    Idle,
    Loading,
    Failed(String),
    Solved(Solution),
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("An optimization is already running")]
    Busy,
    #[error("{0}")]
    InvalidParameters(#[source] QFleetError),
}

/// Presentation state: the form parameters and the latest outcome
#[derive(Debug, Clone)]
pub struct Session {
    parameters: Problem,
    status: ViewStatus,
}

impl Session {
    pub fn new(parameters: Problem) -> Self {
        Self {
            parameters,
            status: ViewStatus::Idle,
        }
    }

    pub fn parameters(&self) -> &Problem {
        &self.parameters
    }

    pub fn status(&self) -> &ViewStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == ViewStatus::Loading
    }

    /// Store new form values; the previous outcome stays visible until the next solve
    pub fn update_parameters(&mut self, parameters: Problem) -> Result<(), SessionError> {
        if self.is_loading() {
            return Err(SessionError::Busy);
        }
        validate(&parameters).map_err(SessionError::InvalidParameters)?;
        self.parameters = parameters;
        Ok(())
    }

    /// Adopt the problem a solve request carries, clear the previous outcome and hand it back
    pub fn begin_solve(&mut self, parameters: Problem) -> Result<Problem, SessionError> {
        self.update_parameters(parameters)?;
        self.status = ViewStatus::Loading;
        Ok(self.parameters)
    }

    pub fn finish_solve(&mut self, outcome: Result<Solution, QFleetError>) {
        self.status = match outcome {
            Ok(solution) => ViewStatus::Solved(solution),
            Err(e) => ViewStatus::Failed(e.to_string()),
        };
    }
}
