use async_trait::async_trait;

use super::traits::RateProvider;
use crate::errors::CoreError;
use crate::models::rates::RateTable;

/// Last-resort rate source: the hardcoded table the dashboard ships with.
///
/// Never fails, so any registry that includes it always yields something
/// renderable. The rate endpoint is best-effort; this is the deliberate
/// degrade-to-static policy behind it.
pub struct StaticRateProvider;

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl RateProvider for StaticRateProvider {
    fn name(&self) -> &str {
        "static-fallback"
    }

    fn is_fallback(&self) -> bool {
        true
    }

    async fn fetch_rates(&self) -> Result<RateTable, CoreError> {
        Ok(RateTable::fallback())
    }
}
