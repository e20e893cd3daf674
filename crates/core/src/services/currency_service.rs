use crate::models::rates::RateTable;

/// Pure currency arithmetic: amount parsing and USD conversion.
///
/// Missing-rate policy, applied uniformly at every call site: a currency
/// absent from the rate table is *unconvertible* and converts to 0 USD.
/// Parity with USD is never assumed for an unknown currency.
///
/// **Note on precision**: amounts are `f64` (~15-17 significant digits).
/// The dashboard sums tens of records, well within tolerance.
pub struct CurrencyService;

impl CurrencyService {
    pub fn new() -> Self {
        Self
    }

    /// Parse a backend decimal string.
    ///
    /// Malformed or non-finite input means "no value" and parses to 0.0
    /// rather than an error, so a single bad record cannot take down a
    /// whole view.
    #[must_use]
    pub fn parse_amount(&self, raw: &str) -> f64 {
        raw.trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .unwrap_or(0.0)
    }

    /// Rate-to-USD lookup; `None` marks the currency unconvertible.
    #[must_use]
    pub fn rate_to_usd(&self, table: &RateTable, currency: &str) -> Option<f64> {
        table.get(currency)
    }

    /// Convert an amount in `currency` to USD with exactly one rate
    /// lookup. Missing rate → 0.0; non-finite amount → 0.0.
    #[must_use]
    pub fn to_usd(&self, table: &RateTable, amount: f64, currency: &str) -> f64 {
        if !amount.is_finite() {
            return 0.0;
        }
        amount * table.get(currency).unwrap_or(0.0)
    }

    /// Parse-and-convert in one step, for raw backend strings.
    #[must_use]
    pub fn raw_to_usd(&self, table: &RateTable, raw_amount: &str, currency: &str) -> f64 {
        self.to_usd(table, self.parse_amount(raw_amount), currency)
    }
}

impl Default for CurrencyService {
    fn default() -> Self {
        Self::new()
    }
}
