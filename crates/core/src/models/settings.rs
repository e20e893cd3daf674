use serde::{Deserialize, Serialize};

/// Default consolidated-balance target in USD, matching the dashboard's
/// global savings goal.
pub const DEFAULT_GOAL_USD: f64 = 50_000.0;

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Base URL of the backend REST API, without a trailing slash.
    pub api_base_url: String,

    /// Consolidated-balance target used for goal progress.
    pub savings_goal_usd: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            // Same local fallback the web client uses when no base URL is
            // configured.
            api_base_url: "http://localhost:3000/api/v1".to_string(),
            savings_goal_usd: DEFAULT_GOAL_USD,
        }
    }
}

impl Settings {
    /// Build settings for a given backend, normalizing trailing slashes.
    pub fn new(api_base_url: impl Into<String>) -> Self {
        let mut url: String = api_base_url.into();
        while url.ends_with('/') {
            url.pop();
        }
        Self {
            api_base_url: url,
            savings_goal_usd: DEFAULT_GOAL_USD,
        }
    }
}
