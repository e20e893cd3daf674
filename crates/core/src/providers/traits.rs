use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::rates::RateTable;

/// Trait abstraction over exchange-rate sources.
///
/// The backend endpoint and the static fallback table both implement
/// this; the registry tries them in order, so a dead rate service never
/// blocks the dashboard from rendering. Swapping in a different source
/// (or a mock in tests) touches only one implementation.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait RateProvider: Send + Sync {
    /// Human-readable name of this source (for logs/errors).
    fn name(&self) -> &str;

    /// Whether this source serves canned data rather than live rates.
    fn is_fallback(&self) -> bool {
        false
    }

    /// Fetch a currency → USD rate table.
    async fn fetch_rates(&self) -> Result<RateTable, CoreError>;
}
