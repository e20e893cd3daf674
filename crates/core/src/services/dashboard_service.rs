use chrono::Utc;
use futures::try_join;
use log::debug;

use super::aggregation_service::AggregationService;
use super::goal_service::GoalService;
use super::rate_service::RateService;
use crate::api::client::ApiClient;
use crate::errors::CoreError;
use crate::models::account::{Account, Card};
use crate::models::analytics::{BalanceBreakdown, DashboardSummary, FlowBreakdown, TrendPoint};
use crate::models::rates::{RateSource, RateTable};
use crate::models::transaction::Transaction;

/// One snapshot of everything the dashboard renders from.
///
/// Fetched once per load and shared by every analytics view, so the same
/// collections are never re-fetched and re-summed per widget.
#[derive(Debug, Clone)]
pub struct DashboardData {
    pub accounts: Vec<Account>,
    pub cards: Vec<Card>,
    pub transactions: Vec<Transaction>,
    pub rates: RateTable,
    pub rate_source: RateSource,
}

/// The single data-fetching layer for the analytics views.
///
/// `load` does the network work; everything else is a pure function over
/// the snapshot it returns.
pub struct DashboardService {
    aggregation_service: AggregationService,
    goal_service: GoalService,
}

impl DashboardService {
    pub fn new() -> Self {
        Self {
            aggregation_service: AggregationService::new(),
            goal_service: GoalService::new(),
        }
    }

    /// Fetch rates and records concurrently into a single snapshot.
    /// One join for the whole page; the rate fetch degrades to the static
    /// table instead of failing.
    pub async fn load(
        &self,
        client: &ApiClient,
        rate_service: &RateService,
    ) -> Result<DashboardData, CoreError> {
        let (rates, accounts, cards, transactions) = try_join!(
            rate_service.fetch_table(),
            client.accounts(),
            client.cards(),
            client.transactions(),
        )?;
        let (rates, rate_source) = rates;

        debug!(
            "dashboard snapshot: {} accounts, {} cards, {} transactions, rates={rate_source}",
            accounts.len(),
            cards.len(),
            transactions.len(),
        );

        Ok(DashboardData {
            accounts,
            cards,
            transactions,
            rates,
            rate_source,
        })
    }

    /// Consolidated numbers for the overview widgets.
    #[must_use]
    pub fn summarize(&self, data: &DashboardData, goal_usd: f64) -> DashboardSummary {
        let balances = self
            .aggregation_service
            .aggregate_cards(&data.cards, &data.rates);
        let transaction_volume = self
            .aggregation_service
            .aggregate_transactions(&data.transactions, &data.rates);
        let flows = self
            .aggregation_service
            .aggregate_flows(&data.transactions, &data.rates);
        let goal = self.goal_service.progress(balances.total_usd, goal_usd);

        DashboardSummary {
            as_of: Utc::now(),
            account_count: data.accounts.len(),
            card_count: data.cards.len(),
            transaction_count: data.transactions.len(),
            balances,
            transaction_volume,
            flows,
            goal,
            rate_source: data.rate_source,
        }
    }

    /// Per-day per-currency transaction sums (the trend-line chart).
    #[must_use]
    pub fn daily_trend(&self, data: &DashboardData) -> Vec<TrendPoint> {
        self.aggregation_service
            .daily_trend(&data.transactions, &data.rates)
    }

    /// Deposits vs withdrawals with per-category totals (the
    /// income/expense pies).
    #[must_use]
    pub fn transaction_flows(&self, data: &DashboardData) -> FlowBreakdown {
        self.aggregation_service
            .aggregate_flows(&data.transactions, &data.rates)
    }

    /// Per-currency transaction distribution (bar-chart view).
    #[must_use]
    pub fn currency_distribution(&self, data: &DashboardData) -> BalanceBreakdown {
        self.aggregation_service
            .aggregate_transactions(&data.transactions, &data.rates)
    }

    /// Per-currency account balances (composition view).
    #[must_use]
    pub fn account_breakdown(&self, data: &DashboardData) -> BalanceBreakdown {
        self.aggregation_service
            .aggregate_accounts(&data.accounts, &data.rates)
    }
}

impl Default for DashboardService {
    fn default() -> Self {
        Self::new()
    }
}
