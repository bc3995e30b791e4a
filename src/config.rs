use std::env;
use std::time::Duration;

use q_fleet_sdk::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

const DEFAULT_PORT: u16 = 9000;
const DEFAULT_JSON_LIMIT: usize = 64 * 1024;

/// Process-wide settings, read once at startup
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub port: u16,
    /// Base URL of the optimizer the SDK talks to
    pub api_url: String,
    pub timeout: Duration,
    pub json_limit: usize,
    pub sentry_dsn: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            api_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            json_limit: DEFAULT_JSON_LIMIT,
            sentry_dsn: None,
        }
    }
}

impl AppConfig {
    /// Read the configuration from the process environment
    ///
    /// Call `dotenv()` first so `.env` values are visible here.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key lookup; unparseable values fall back to defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = lookup("PORT")
            .and_then(|s| s.parse::<u16>().ok())
            .unwrap_or(defaults.port);

        let api_url = lookup("QFLEET_API_URL")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(defaults.api_url);

        let timeout = lookup("QFLEET_TIMEOUT_SECS")
            .and_then(|s| s.parse::<u64>().ok())
            .filter(|&secs| secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(defaults.timeout);

        let json_limit = lookup("JSON_PAYLOAD_LIMIT")
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(defaults.json_limit);

        let sentry_dsn = lookup("SENTRY_DSN").filter(|s| !s.trim().is_empty());

        Self {
            port,
            api_url,
            timeout,
            json_limit,
            sentry_dsn,
        }
    }
}
