use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// A single currency → USD rate row from `GET /tasa-cambio`.
///
/// `rateToUSD` is the multiplier converting one unit of `currency` into
/// USD. The backend sometimes serializes it as a string, sometimes as a
/// number; deserialization accepts both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRate {
    #[serde(default)]
    pub id: Option<i64>,

    pub currency: String,

    #[serde(rename = "rateToUSD", deserialize_with = "rate_from_string_or_number")]
    pub rate_to_usd: f64,
}

fn rate_from_string_or_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        Number(f64),
        Text(String),
    }

    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::Number(n) => n,
        // Malformed strings degrade to 0.0 ("unconvertible") rather than
        // failing the whole table.
        StringOrNumber::Text(s) => s.trim().parse().unwrap_or(0.0),
    })
}

/// Payload for `POST /tasa-cambio`.
#[derive(Debug, Clone, Serialize)]
pub struct NewExchangeRate {
    pub currency: String,

    #[serde(rename = "rateToUSD")]
    pub rate_to_usd: f64,
}

/// Payload for `PATCH /tasa-cambio/{id}`.
#[derive(Debug, Clone, Serialize)]
pub struct RateUpdate {
    #[serde(rename = "rateToUSD")]
    pub rate_to_usd: f64,
}

/// Where the active rate table came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RateSource {
    /// Fetched from the backend on this load.
    Live,
    /// The hardcoded table; the live fetch failed.
    Fallback,
}

impl std::fmt::Display for RateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RateSource::Live => write!(f, "live"),
            RateSource::Fallback => write!(f, "fallback"),
        }
    }
}

/// Uppercase-keyed map of currency code → rate-to-USD.
///
/// A point-in-time snapshot: fetched fresh per dashboard load, never
/// persisted or versioned client-side. A missing entry means the currency
/// is *unconvertible* — callers must not assume parity with USD.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    rates: HashMap<String, f64>,
}

impl RateTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The static table the dashboard ships with, used whenever the rate
    /// endpoint is unreachable so the UI stays renderable.
    #[must_use]
    pub fn fallback() -> Self {
        let mut table = Self::new();
        table.insert("USD", 1.0);
        table.insert("EUR", 1.0 / 0.86);
        table.insert("CUP", 1.0 / 490.0);
        table
    }

    /// Build a table from backend rate rows.
    /// The backend table omits the base currency, so USD=1 is ensured.
    #[must_use]
    pub fn from_rates(rows: &[ExchangeRate]) -> Self {
        let mut table = Self::new();
        for row in rows {
            table.insert(&row.currency, row.rate_to_usd);
        }
        table.rates.entry("USD".to_string()).or_insert(1.0);
        table
    }

    pub fn insert(&mut self, currency: &str, rate_to_usd: f64) {
        self.rates.insert(currency.trim().to_uppercase(), rate_to_usd);
    }

    /// Rate-to-USD for a currency code (case-insensitive).
    /// `None` marks the currency unconvertible.
    #[must_use]
    pub fn get(&self, currency: &str) -> Option<f64> {
        self.rates.get(&currency.trim().to_uppercase()).copied()
    }

    #[must_use]
    pub fn contains(&self, currency: &str) -> bool {
        self.get(currency).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// All known codes, sorted for deterministic display.
    #[must_use]
    pub fn currencies(&self) -> Vec<String> {
        let mut codes: Vec<String> = self.rates.keys().cloned().collect();
        codes.sort();
        codes
    }
}
