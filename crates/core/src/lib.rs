pub mod api;
pub mod errors;
pub mod models;
pub mod providers;
pub mod services;

use api::auth::PostResponse;
use api::ApiClient;
use errors::CoreError;
use models::account::{Account, Card, NewAccount, NewCard};
use models::analytics::{
    BalanceBreakdown, DashboardSummary, FlowBreakdown, GoalProgress, TrendPoint,
};
use models::rates::{ExchangeRate, RateSource, RateTable};
use models::session::Session;
use models::settings::Settings;
use models::transaction::{NewTransaction, Transaction};
use providers::registry::RateProviderRegistry;
use services::aggregation_service::AggregationService;
use services::currency_service::CurrencyService;
use services::dashboard_service::{DashboardData, DashboardService};
use services::goal_service::GoalService;
use services::rate_service::RateService;

/// Main entry point for the finance dashboard core library.
/// Holds the API client (and with it the active session) plus all the
/// services the dashboard views compute their numbers with.
#[must_use]
pub struct FinanceDashboard {
    settings: Settings,
    client: ApiClient,
    rate_service: RateService,
    dashboard_service: DashboardService,
    aggregation_service: AggregationService,
    currency_service: CurrencyService,
    goal_service: GoalService,
}

impl std::fmt::Debug for FinanceDashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FinanceDashboard")
            .field("api_base_url", &self.settings.api_base_url)
            .field("savings_goal_usd", &self.settings.savings_goal_usd)
            .field("authenticated", &self.client.is_authenticated())
            .finish()
    }
}

impl FinanceDashboard {
    /// Build against the default (local) backend.
    pub fn create_new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        let client = ApiClient::new(&settings);
        let registry = RateProviderRegistry::new_with_defaults(&settings.api_base_url);
        Self {
            client,
            rate_service: RateService::new(registry),
            dashboard_service: DashboardService::new(),
            aggregation_service: AggregationService::new(),
            currency_service: CurrencyService::new(),
            goal_service: GoalService::new(),
            settings,
        }
    }

    /// Restore a previously persisted session (e.g., one the frontend
    /// kept in browser storage across page loads).
    pub fn with_session(settings: Settings, session: Session) -> Self {
        let mut dashboard = Self::with_settings(settings);
        dashboard.client.set_session(session);
        dashboard
    }

    // ── Session ─────────────────────────────────────────────────────

    /// Log in and keep the returned session as the active one.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<Session, CoreError> {
        self.client.login(email, password).await
    }

    /// Register a new user. Does not log in.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<PostResponse, CoreError> {
        self.client.register(name, email, password).await
    }

    /// Drop the active session.
    pub fn logout(&mut self) -> Option<Session> {
        self.client.logout()
    }

    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.client.session()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.client.is_authenticated()
    }

    // ── Accounts, Cards & Transactions ──────────────────────────────

    pub async fn accounts(&self) -> Result<Vec<Account>, CoreError> {
        self.client.accounts().await
    }

    pub async fn banks(&self) -> Result<Vec<Account>, CoreError> {
        self.client.banks().await
    }

    pub async fn cards(&self) -> Result<Vec<Card>, CoreError> {
        self.client.cards().await
    }

    pub async fn transactions(&self) -> Result<Vec<Transaction>, CoreError> {
        self.client.transactions().await
    }

    pub async fn create_account(&self, account: &NewAccount) -> Result<PostResponse, CoreError> {
        self.client.create_account(account).await
    }

    pub async fn create_bank(&self, account: &NewAccount) -> Result<PostResponse, CoreError> {
        self.client.create_bank(account).await
    }

    pub async fn create_card(&self, card: &NewCard) -> Result<PostResponse, CoreError> {
        self.client.create_card(card).await
    }

    pub async fn create_transaction(&self, tx: &NewTransaction) -> Result<PostResponse, CoreError> {
        self.client.create_transaction(tx).await
    }

    // ── Exchange Rates ──────────────────────────────────────────────

    /// Raw rate rows from the backend (no fallback).
    pub async fn exchange_rates(&self) -> Result<Vec<ExchangeRate>, CoreError> {
        self.client.exchange_rates().await
    }

    /// The privileged `/bank/rates` variant of the rate table.
    pub async fn bank_rates(&self) -> Result<Vec<ExchangeRate>, CoreError> {
        self.client.bank_rates().await
    }

    pub async fn exchange_rate(&self, currency: &str) -> Result<ExchangeRate, CoreError> {
        self.client.exchange_rate(currency).await
    }

    pub async fn create_exchange_rate(
        &self,
        currency: &str,
        rate_to_usd: f64,
    ) -> Result<ExchangeRate, CoreError> {
        self.client.create_exchange_rate(currency, rate_to_usd).await
    }

    pub async fn update_exchange_rate(
        &self,
        id: i64,
        rate_to_usd: f64,
    ) -> Result<ExchangeRate, CoreError> {
        self.client.update_exchange_rate(id, rate_to_usd).await
    }

    pub async fn delete_exchange_rate(&self, id: i64) -> Result<PostResponse, CoreError> {
        self.client.delete_exchange_rate(id).await
    }

    /// The active rate table, degrading to the static fallback when the
    /// backend is unreachable. The source says which one you got.
    pub async fn fetch_rates(&self) -> Result<(RateTable, RateSource), CoreError> {
        self.rate_service.fetch_table().await
    }

    // ── Dashboard Analytics ─────────────────────────────────────────

    /// One concurrent fetch of rates + accounts + cards + transactions.
    /// Every analytics view reads from the returned snapshot, so the
    /// same collections are never fetched twice for one page.
    pub async fn load_dashboard(&self) -> Result<DashboardData, CoreError> {
        self.dashboard_service
            .load(&self.client, &self.rate_service)
            .await
    }

    /// Consolidated numbers for the overview widgets.
    #[must_use]
    pub fn summarize(&self, data: &DashboardData) -> DashboardSummary {
        self.dashboard_service
            .summarize(data, self.settings.savings_goal_usd)
    }

    /// Fetch and summarize in one call.
    pub async fn dashboard_summary(&self) -> Result<DashboardSummary, CoreError> {
        let data = self.load_dashboard().await?;
        Ok(self.summarize(&data))
    }

    /// Per-currency transaction distribution (bar-chart view).
    #[must_use]
    pub fn currency_distribution(&self, data: &DashboardData) -> BalanceBreakdown {
        self.dashboard_service.currency_distribution(data)
    }

    /// Per-currency account balances (composition view).
    #[must_use]
    pub fn account_breakdown(&self, data: &DashboardData) -> BalanceBreakdown {
        self.dashboard_service.account_breakdown(data)
    }

    /// Per-day per-currency transaction sums (trend-line view).
    #[must_use]
    pub fn daily_trend(&self, data: &DashboardData) -> Vec<TrendPoint> {
        self.dashboard_service.daily_trend(data)
    }

    /// Deposits vs withdrawals with per-category totals.
    #[must_use]
    pub fn transaction_flows(&self, data: &DashboardData) -> FlowBreakdown {
        self.dashboard_service.transaction_flows(data)
    }

    // ── Calculators ─────────────────────────────────────────────────
    // For frontends that fetch collections on their own and only need
    // the arithmetic.

    #[must_use]
    pub fn parse_amount(&self, raw: &str) -> f64 {
        self.currency_service.parse_amount(raw)
    }

    #[must_use]
    pub fn convert_to_usd(&self, rates: &RateTable, amount: f64, currency: &str) -> f64 {
        self.currency_service.to_usd(rates, amount, currency)
    }

    #[must_use]
    pub fn aggregate_accounts(&self, accounts: &[Account], rates: &RateTable) -> BalanceBreakdown {
        self.aggregation_service.aggregate_accounts(accounts, rates)
    }

    #[must_use]
    pub fn aggregate_cards(&self, cards: &[Card], rates: &RateTable) -> BalanceBreakdown {
        self.aggregation_service.aggregate_cards(cards, rates)
    }

    #[must_use]
    pub fn aggregate_transactions(
        &self,
        transactions: &[Transaction],
        rates: &RateTable,
    ) -> BalanceBreakdown {
        self.aggregation_service
            .aggregate_transactions(transactions, rates)
    }

    #[must_use]
    pub fn aggregate_flows(
        &self,
        transactions: &[Transaction],
        rates: &RateTable,
    ) -> FlowBreakdown {
        self.aggregation_service.aggregate_flows(transactions, rates)
    }

    /// Progress toward the configured savings goal.
    #[must_use]
    pub fn goal_progress(&self, current_usd: f64) -> GoalProgress {
        self.goal_service
            .progress(current_usd, self.settings.savings_goal_usd)
    }

    // ── Settings ────────────────────────────────────────────────────

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Change the savings goal used for progress computation.
    pub fn set_savings_goal(&mut self, goal_usd: f64) -> Result<(), CoreError> {
        if !goal_usd.is_finite() {
            return Err(CoreError::ValidationError(format!(
                "savings goal must be a finite number, got {goal_usd}"
            )));
        }
        self.settings.savings_goal_usd = goal_usd;
        Ok(())
    }
}
