use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::rates::RateSource;
use super::transaction::TransactionCategory;

/// Per-currency accumulation bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyTotal {
    /// Currency code, uppercased.
    pub currency: String,

    /// Sum in the original currency.
    pub total: f64,

    /// USD equivalent (0 when the currency has no rate).
    pub total_usd: f64,

    /// Number of records that contributed.
    pub count: usize,
}

/// Result of aggregating a record set against a rate table.
///
/// An empty input produces an empty, zeroed breakdown — never an error —
/// so the UI can render a placeholder state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BalanceBreakdown {
    /// Per-currency sums, sorted by currency code for deterministic
    /// rendering.
    pub per_currency: Vec<CurrencyTotal>,

    /// Consolidated total in USD.
    pub total_usd: f64,

    /// Currencies that appeared in the input but had no rate; their
    /// records counted as 0 USD.
    pub unconvertible: Vec<String>,

    /// Records skipped entirely (missing currency or malformed amount).
    pub skipped: usize,
}

impl BalanceBreakdown {
    /// Bucket for a currency code (case-insensitive).
    #[must_use]
    pub fn get(&self, currency: &str) -> Option<&CurrencyTotal> {
        let code = currency.trim().to_uppercase();
        self.per_currency.iter().find(|t| t.currency == code)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.per_currency.is_empty()
    }
}

/// One calendar day on the trend line: per-currency transaction sums for
/// every currency that moved that day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub day: NaiveDate,

    /// Per-currency sums for the day, sorted by currency code.
    pub per_currency: Vec<CurrencyTotal>,
}

impl TrendPoint {
    /// Sum for a currency on this day (case-insensitive); 0 when the
    /// currency did not move.
    #[must_use]
    pub fn total(&self, currency: &str) -> f64 {
        let code = currency.trim().to_uppercase();
        self.per_currency
            .iter()
            .find(|t| t.currency == code)
            .map_or(0.0, |t| t.total)
    }
}

/// Per-category accumulation bucket, consolidated in USD so categories
/// can be compared across currencies. `None` collects uncategorized
/// transactions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: Option<TransactionCategory>,
    pub total_usd: f64,
    pub count: usize,
}

/// Transactions split by direction: deposit and withdrawal breakdowns,
/// per-category totals for each side, and the resulting net in USD.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlowBreakdown {
    pub deposits: BalanceBreakdown,
    pub withdrawals: BalanceBreakdown,

    /// `deposits.total_usd - withdrawals.total_usd`.
    pub net_usd: f64,

    /// Deposit totals per category, largest first.
    pub income_by_category: Vec<CategoryTotal>,

    /// Withdrawal totals per category, largest first.
    pub expense_by_category: Vec<CategoryTotal>,
}

/// Progress toward the savings goal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalProgress {
    pub current_usd: f64,
    pub goal_usd: f64,

    /// Integer percent, always within [0, 100].
    pub percent: u8,
}

impl GoalProgress {
    #[must_use]
    pub fn is_met(&self) -> bool {
        self.percent >= 100
    }
}

/// Everything the dashboard's overview widgets render, computed from one
/// snapshot of backend data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// When this summary was computed.
    pub as_of: chrono::DateTime<chrono::Utc>,

    /// Consolidated card balances.
    pub balances: BalanceBreakdown,

    /// Transaction volume per currency (the distribution chart).
    pub transaction_volume: BalanceBreakdown,

    /// Deposits vs withdrawals, with per-category totals (the
    /// income/expense pies).
    pub flows: FlowBreakdown,

    /// Progress toward the configured savings goal.
    pub goal: GoalProgress,

    /// Whether the rate table was live or the static fallback.
    pub rate_source: RateSource,

    pub account_count: usize,
    pub card_count: usize,
    pub transaction_count: usize,
}
