use log::{debug, warn};

use crate::errors::CoreError;
use crate::models::rates::{RateSource, RateTable};
use crate::providers::registry::RateProviderRegistry;

/// Fetches the exchange-rate table through the provider chain.
///
/// The rate endpoint is best-effort, never a hard dependency for a page
/// render: when a provider fails or returns an empty table, the service
/// logs it and falls through to the next one. With the default registry
/// (backend, then static table) a fetch cannot fail.
pub struct RateService {
    registry: RateProviderRegistry,
}

impl RateService {
    pub fn new(registry: RateProviderRegistry) -> Self {
        Self { registry }
    }

    /// Names of the registered providers, in fallback order.
    #[must_use]
    pub fn provider_names(&self) -> Vec<String> {
        self.registry
            .providers()
            .iter()
            .map(|p| p.name().to_string())
            .collect()
    }

    /// Walk providers in registration order; first usable table wins.
    /// The returned source tells callers whether they see live rates.
    pub async fn fetch_table(&self) -> Result<(RateTable, RateSource), CoreError> {
        let providers = self.registry.providers();
        if providers.is_empty() {
            return Err(CoreError::RatesUnavailable(
                "no rate providers registered".to_string(),
            ));
        }

        let mut last_error = None;
        for provider in providers {
            match provider.fetch_rates().await {
                Ok(table) if !table.is_empty() => {
                    debug!(
                        "exchange rates loaded from {} ({} currencies)",
                        provider.name(),
                        table.len()
                    );
                    let source = if provider.is_fallback() {
                        RateSource::Fallback
                    } else {
                        RateSource::Live
                    };
                    return Ok((table, source));
                }
                Ok(_) => {
                    warn!(
                        "rate provider {} returned an empty table, trying next",
                        provider.name()
                    );
                    last_error = Some(CoreError::RatesUnavailable(format!(
                        "{} returned no rates",
                        provider.name()
                    )));
                }
                Err(e) => {
                    warn!("rate provider {} failed: {e}", provider.name());
                    last_error = Some(e);
                    // Try next provider
                }
            }
        }

        Err(last_error
            .unwrap_or_else(|| CoreError::RatesUnavailable("all rate providers failed".to_string())))
    }
}
