use super::auth::PostResponse;
use super::client::ApiClient;
use super::validate_currency_code;
use crate::errors::CoreError;
use crate::models::rates::{ExchangeRate, NewExchangeRate, RateUpdate};

impl ApiClient {
    /// `GET /tasa-cambio` — the full rate table. Public endpoint.
    pub async fn exchange_rates(&self) -> Result<Vec<ExchangeRate>, CoreError> {
        self.get_json_public("/tasa-cambio").await
    }

    /// `GET /tasa-cambio/{currency}` — a single rate row.
    pub async fn exchange_rate(&self, currency: &str) -> Result<ExchangeRate, CoreError> {
        let code = validate_currency_code(currency)?;
        self.get_json_public(&format!("/tasa-cambio/{code}")).await
    }

    /// `GET /bank/rates` — the privileged variant some views use.
    pub async fn bank_rates(&self) -> Result<Vec<ExchangeRate>, CoreError> {
        self.get_json("/bank/rates").await
    }

    /// `POST /tasa-cambio` — create a rate. Returns the created row.
    pub async fn create_exchange_rate(
        &self,
        currency: &str,
        rate_to_usd: f64,
    ) -> Result<ExchangeRate, CoreError> {
        let code = validate_currency_code(currency)?;
        validate_rate(rate_to_usd)?;
        let body = NewExchangeRate {
            currency: code,
            rate_to_usd,
        };
        self.post_json_public("/tasa-cambio", &body).await
    }

    /// `PATCH /tasa-cambio/{id}` — update an existing rate.
    pub async fn update_exchange_rate(
        &self,
        id: i64,
        rate_to_usd: f64,
    ) -> Result<ExchangeRate, CoreError> {
        validate_rate(rate_to_usd)?;
        let body = RateUpdate { rate_to_usd };
        self.patch_json_public(&format!("/tasa-cambio/{id}"), &body)
            .await
    }

    /// `DELETE /tasa-cambio/{id}`.
    pub async fn delete_exchange_rate(&self, id: i64) -> Result<PostResponse, CoreError> {
        self.delete_json_public(&format!("/tasa-cambio/{id}")).await
    }
}

fn validate_rate(rate_to_usd: f64) -> Result<(), CoreError> {
    if !rate_to_usd.is_finite() || rate_to_usd <= 0.0 {
        return Err(CoreError::ValidationError(format!(
            "rate-to-USD must be a positive number, got {rate_to_usd}"
        )));
    }
    Ok(())
}
