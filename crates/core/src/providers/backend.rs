use async_trait::async_trait;
use reqwest::Client;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use super::traits::RateProvider;
use crate::errors::CoreError;
use crate::models::rates::{ExchangeRate, RateTable};

/// Live rate source: the backend's own `GET /tasa-cambio` endpoint.
///
/// Public — no bearer token required. Returns the full currency → USD
/// table the dashboard's administrators maintain.
pub struct BackendRateProvider {
    client: Client,
    base_url: String,
}

impl BackendRateProvider {
    pub fn new(base_url: impl Into<String>) -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(30));

        let mut base_url: String = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            base_url,
        }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl RateProvider for BackendRateProvider {
    fn name(&self) -> &str {
        "backend"
    }

    async fn fetch_rates(&self) -> Result<RateTable, CoreError> {
        let url = format!("{}/tasa-cambio", self.base_url);

        let resp = self.client.get(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(CoreError::Api {
                endpoint: "/tasa-cambio".to_string(),
                status: status.as_u16(),
                message: resp.text().await.unwrap_or_default(),
            });
        }

        let rows: Vec<ExchangeRate> = resp
            .json()
            .await
            .map_err(|e| CoreError::Deserialization(format!("GET /tasa-cambio: {e}")))?;

        if rows.is_empty() {
            return Err(CoreError::RatesUnavailable(
                "backend returned an empty rate table".to_string(),
            ));
        }

        Ok(RateTable::from_rates(&rows))
    }
}
