use std::future::Future;
use std::time::Duration;

use log::{info, warn};
use reqwest::{Client, Url};
use serde_json::Value;

use crate::error::{QFleetError, Result};
use crate::types::{ErrorBody, HealthStatus, Problem, Solution};

/// Default location of the hosted optimizer
pub const DEFAULT_BASE_URL: &str = "https://q-fleet-backend.onrender.com";

/// Default time budget for a single call
///
/// The hosted service sleeps when idle and can take close to a minute to wake up.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

const OPTIMIZE_PATH: &str = "/api/optimize";
const HEALTH_PATH: &str = "/api/health";

const DEFAULT_ERROR_DETAIL: &str = "The server returned an error.";
const HEALTH_ERROR_DETAIL: &str = "Backend is not responding.";

/// HTTP client for interacting with the Q-Fleet optimizer
#[derive(Debug, Clone)]
pub struct QFleetClient {
    client: Client,
    base_url: Url,
    timeout: Duration,
}

impl QFleetClient {
    /// Create a new Q-Fleet client
    ///
    /// # Arguments
    ///
    /// * `base_url` - The base URL of the optimizer (e.g., "https://q-fleet-backend.onrender.com")
    ///
    /// # Example
    ///
    /// ```no_run
    /// use q_fleet_sdk::QFleetClient;
    ///
    /// let client = QFleetClient::new("http://localhost:8000").unwrap();
    /// ```
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        Self::with_client(base_url, Client::new())
    }

    /// Create a new Q-Fleet client with custom reqwest client
    ///
    /// This allows you to configure proxies, TLS, etc. A timeout configured on
    /// the reqwest client is reported as [`QFleetError::Timeout`] as well.
    pub fn with_client(base_url: impl AsRef<str>, client: Client) -> Result<Self> {
        let base_url =
            Url::parse(base_url.as_ref()).map_err(|e| QFleetError::InvalidUrl(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Override the time budget of each call
    ///
    /// # Example
    ///
    /// ```no_run
    /// use std::time::Duration;
    /// use q_fleet_sdk::QFleetClient;
    ///
    /// let client = QFleetClient::new("http://localhost:8000")
    ///     .unwrap()
    ///     .with_timeout(Duration::from_secs(5));
    /// ```
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Check the health of the optimizer
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use q_fleet_sdk::QFleetClient;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = QFleetClient::new("http://localhost:8000")?;
    /// let health = client.health_check().await?;
    /// println!("Backend health: {:?}", health);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn health_check(&self) -> Result<HealthStatus> {
        let url = self.endpoint(HEALTH_PATH)?;

        let outcome = self
            .bounded(async {
                let response = self.client.get(url).send().await?;

                let status = response.status();
                if !status.is_success() {
                    return Err(QFleetError::RemoteError {
                        status: status.as_u16(),
                        detail: HEALTH_ERROR_DETAIL.to_string(),
                    });
                }

                Ok(response.json::<HealthStatus>().await?)
            })
            .await;

        if let Err(ref e) = outcome {
            warn!("Health check failed: {}", e);
        }
        outcome
    }

    /// Solve a vehicle routing problem
    ///
    /// Sends exactly one request; nothing is retried or cached. The returned
    /// solution is passed through unchanged.
    ///
    /// # Errors
    ///
    /// * [`QFleetError::Timeout`] - no response within the client timeout
    /// * [`QFleetError::RemoteError`] - the service answered with a non-success status
    /// * [`QFleetError::Transport`] - network failure or a malformed response body
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use q_fleet_sdk::{QFleetClient, ProblemBuilder};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = QFleetClient::new("http://localhost:8000")?;
    ///
    /// let problem = ProblemBuilder::new()
    ///     .num_locations(4)
    ///     .num_vehicles(2)
    ///     .reps(5)
    ///     .build()?;
    ///
    /// let solution = client.solve(&problem).await?;
    ///
    /// for (vehicle, route) in solution.routes.iter().enumerate() {
    ///     println!("Vehicle {}: {:?}", vehicle + 1, route);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn solve(&self, problem: &Problem) -> Result<Solution> {
        let url = self.endpoint(OPTIMIZE_PATH)?;
        info!("Sending VRP problem to {}: {:?}", url, problem);

        let outcome = self
            .bounded(async {
                let response = self.client.post(url).json(problem).send().await?;

                let status = response.status();
                if !status.is_success() {
                    let body = response.bytes().await.unwrap_or_default();
                    return Err(QFleetError::RemoteError {
                        status: status.as_u16(),
                        detail: error_detail(&body),
                    });
                }

                Ok(response.json::<Solution>().await?)
            })
            .await;

        match outcome {
            Ok(ref solution) => info!(
                "Received solution from {} with {} route(s), total distance {:.2}",
                solution.solution_method,
                solution.routes.len(),
                solution.total_distance,
            ),
            Err(QFleetError::Timeout) => {
                warn!("Request timed out after {:?}; the backend may be waking up", self.timeout)
            }
            Err(ref e) => warn!("Failed to fetch optimized routes: {}", e),
        }
        outcome
    }

    /// Run a call under the client timeout
    ///
    /// The call future is dropped when the deadline passes, which aborts the
    /// in-flight request and releases the timer.
    async fn bounded<T, F>(&self, call: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        match tokio::time::timeout(self.timeout, call).await {
            Ok(outcome) => outcome,
            Err(_elapsed) => Err(QFleetError::Timeout),
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Url::parse(&format!("{}{}", base, path)).map_err(|e| QFleetError::InvalidUrl(e.to_string()))
    }
}

/// Pick the human readable detail out of an error body
///
/// A body that is not JSON and a body without `detail` both get the default.
fn error_detail(body: &[u8]) -> String {
    let detail = serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail);

    match detail {
        Some(Value::String(text)) if !text.is_empty() => text,
        Some(Value::String(_)) | Some(Value::Null) | None => DEFAULT_ERROR_DETAIL.to_string(),
        Some(other) => other.to_string(),
    }
}
