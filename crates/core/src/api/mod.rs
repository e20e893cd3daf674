pub mod client;

// Endpoint groups (impl blocks on ApiClient)
pub mod accounts;
pub mod auth;
pub mod rates;
pub mod transactions;

pub use auth::{LoginRequest, LoginResponse, PostResponse, RegisterRequest};
pub use client::ApiClient;

use crate::errors::CoreError;

/// Check a currency code before it goes over the wire: exactly 3 ASCII
/// letters, returned uppercased.
pub fn validate_currency_code(code: &str) -> Result<String, CoreError> {
    let trimmed = code.trim().to_uppercase();
    if trimmed.len() != 3 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(CoreError::ValidationError(format!(
            "Invalid currency code '{code}': must be exactly 3 ASCII letters (e.g., USD, EUR, CUP)"
        )));
    }
    Ok(trimmed)
}
