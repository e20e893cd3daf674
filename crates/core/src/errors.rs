use thiserror::Error;

/// Unified error type for the entire finance-dashboard-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Session / Auth ──────────────────────────────────────────────
    #[error("No session token found — log in before calling privileged endpoints")]
    MissingToken,

    #[error("Session expired or token rejected (HTTP 401) — log in again")]
    Unauthorized,

    // ── API / Network ───────────────────────────────────────────────
    #[error("API error ({endpoint}, HTTP {status}): {message}")]
    Api {
        endpoint: String,
        status: u16,
        message: String,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    // ── Business Logic ──────────────────────────────────────────────
    #[error("Validation failed: {0}")]
    ValidationError(String),

    #[error("Exchange rates unavailable: {0}")]
    RatesUnavailable(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        // Sanitize error message: strip query parameters from URLs so
        // request parameters never end up in user-visible errors or logs.
        let msg = e.to_string();
        let sanitized = if let Some(idx) = msg.find('?') {
            format!("{}?<query redacted>", &msg[..idx])
        } else {
            msg
        };
        CoreError::Network(sanitized)
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}
