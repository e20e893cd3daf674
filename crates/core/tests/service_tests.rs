// ═══════════════════════════════════════════════════════════════════
// Service Tests — CurrencyService, AggregationService, GoalService,
// RateService, DashboardService
// ═══════════════════════════════════════════════════════════════════

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use finance_dashboard_core::errors::CoreError;
use finance_dashboard_core::models::account::{Account, Card, CardAccount};
use finance_dashboard_core::models::rates::{RateSource, RateTable};
use finance_dashboard_core::models::transaction::{
    Transaction, TransactionAccount, TransactionCard, TransactionCategory, TransactionType,
};
use finance_dashboard_core::providers::fallback::StaticRateProvider;
use finance_dashboard_core::providers::registry::RateProviderRegistry;
use finance_dashboard_core::providers::traits::RateProvider;
use finance_dashboard_core::services::aggregation_service::AggregationService;
use finance_dashboard_core::services::currency_service::CurrencyService;
use finance_dashboard_core::services::dashboard_service::{DashboardData, DashboardService};
use finance_dashboard_core::services::goal_service::GoalService;
use finance_dashboard_core::services::rate_service::RateService;

// ═══════════════════════════════════════════════════════════════════
// Helpers & Mock Providers
// ═══════════════════════════════════════════════════════════════════

fn table(pairs: &[(&str, f64)]) -> RateTable {
    let mut table = RateTable::new();
    for (code, rate) in pairs {
        table.insert(code, *rate);
    }
    table
}

fn account(id: i64, currency: &str, balance: &str) -> Account {
    Account {
        id,
        name: format!("account-{id}"),
        currency_type: currency.to_string(),
        balance: balance.to_string(),
        created_at: None,
        deleted_at: None,
    }
}

fn card(id: i64, currency: &str, balance: &str) -> Card {
    Card {
        id,
        number: format!("{id:04}"),
        balance: balance.to_string(),
        account: CardAccount {
            id: Some(id),
            name: format!("account-{id}"),
            currency_type: currency.to_string(),
            balance: Some(balance.to_string()),
        },
        deleted_at: None,
    }
}

fn tx(id: i64, currency: Option<&str>, amount: &str) -> Transaction {
    Transaction {
        id,
        transaction_type: TransactionType::Deposit,
        category: None,
        amount: amount.to_string(),
        description: String::new(),
        created_at: None,
        card: Some(TransactionCard {
            id,
            number: format!("{id:04}"),
            balance: None,
            account: Some(TransactionAccount {
                id,
                name: format!("account-{id}"),
                currency_type: currency.map(str::to_string),
            }),
        }),
    }
}

fn tx_on(id: i64, currency: &str, amount: &str, timestamp: &str) -> Transaction {
    let mut t = tx(id, Some(currency), amount);
    t.created_at = Some(timestamp.parse::<DateTime<Utc>>().unwrap());
    t
}

fn flow(
    id: i64,
    currency: &str,
    amount: &str,
    transaction_type: TransactionType,
    category: Option<TransactionCategory>,
) -> Transaction {
    let mut t = tx(id, Some(currency), amount);
    t.transaction_type = transaction_type;
    t.category = category;
    t
}

/// A mock serving a fixed rate table.
struct MockRateProvider {
    table: RateTable,
}

#[async_trait]
impl RateProvider for MockRateProvider {
    fn name(&self) -> &str {
        "mock"
    }

    async fn fetch_rates(&self) -> Result<RateTable, CoreError> {
        Ok(self.table.clone())
    }
}

/// A mock that always fails (for testing fallback behavior).
struct FailingRateProvider;

#[async_trait]
impl RateProvider for FailingRateProvider {
    fn name(&self) -> &str {
        "failing-mock"
    }

    async fn fetch_rates(&self) -> Result<RateTable, CoreError> {
        Err(CoreError::Network("connection refused".to_string()))
    }
}

/// A mock that succeeds with an empty table.
struct EmptyRateProvider;

#[async_trait]
impl RateProvider for EmptyRateProvider {
    fn name(&self) -> &str {
        "empty-mock"
    }

    async fn fetch_rates(&self) -> Result<RateTable, CoreError> {
        Ok(RateTable::new())
    }
}

// ═══════════════════════════════════════════════════════════════════
//  CurrencyService
// ═══════════════════════════════════════════════════════════════════

mod currency {
    use super::*;

    #[test]
    fn converts_with_rate_table() {
        let svc = CurrencyService::new();
        let rates = table(&[("USD", 1.0), ("EUR", 1.25)]);
        assert_eq!(svc.to_usd(&rates, 100.0, "EUR"), 125.0);
        assert_eq!(svc.to_usd(&rates, 100.0, "USD"), 100.0);
    }

    #[test]
    fn missing_rate_converts_to_zero() {
        // The one documented policy: unknown currency is unconvertible,
        // never assumed at parity.
        let svc = CurrencyService::new();
        let rates = table(&[("USD", 1.0)]);
        assert_eq!(svc.to_usd(&rates, 100.0, "GBP"), 0.0);
        assert_eq!(svc.raw_to_usd(&rates, "100", "GBP"), 0.0);
        assert_eq!(svc.rate_to_usd(&rates, "GBP"), None);
    }

    #[test]
    fn parse_amount_accepts_decimal_strings() {
        let svc = CurrencyService::new();
        assert_eq!(svc.parse_amount("1024.50"), 1024.50);
        assert_eq!(svc.parse_amount("  -3.5 "), -3.5);
    }

    #[test]
    fn parse_amount_malformed_is_zero() {
        let svc = CurrencyService::new();
        assert_eq!(svc.parse_amount("abc"), 0.0);
        assert_eq!(svc.parse_amount(""), 0.0);
        assert_eq!(svc.parse_amount("12,5"), 0.0);
        assert_eq!(svc.parse_amount("NaN"), 0.0);
        assert_eq!(svc.parse_amount("inf"), 0.0);
    }

    #[test]
    fn non_finite_amount_converts_to_zero() {
        let svc = CurrencyService::new();
        let rates = table(&[("USD", 1.0)]);
        assert_eq!(svc.to_usd(&rates, f64::NAN, "USD"), 0.0);
        assert_eq!(svc.to_usd(&rates, f64::INFINITY, "USD"), 0.0);
    }

    #[test]
    fn raw_to_usd_combines_parse_and_convert() {
        let svc = CurrencyService::new();
        let rates = table(&[("EUR", 1.25)]);
        assert_eq!(svc.raw_to_usd(&rates, "100", "EUR"), 125.0);
        assert_eq!(svc.raw_to_usd(&rates, "garbage", "EUR"), 0.0);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  AggregationService
// ═══════════════════════════════════════════════════════════════════

mod aggregation {
    use super::*;

    #[test]
    fn empty_input_yields_zeroed_breakdown() {
        let svc = AggregationService::new();
        let rates = table(&[("USD", 1.0)]);
        let breakdown = svc.aggregate_accounts(&[], &rates);
        assert!(breakdown.is_empty());
        assert_eq!(breakdown.total_usd, 0.0);
        assert!(breakdown.total_usd.is_finite());
        assert_eq!(breakdown.skipped, 0);
    }

    #[test]
    fn groups_accounts_by_currency() {
        let svc = AggregationService::new();
        let rates = table(&[("USD", 1.0), ("EUR", 1.25)]);
        let accounts = vec![
            account(1, "USD", "100"),
            account(2, "EUR", "40"),
            account(3, "usd", "50"),
        ];
        let breakdown = svc.aggregate_accounts(&accounts, &rates);

        let usd = breakdown.get("USD").unwrap();
        assert_eq!(usd.total, 150.0);
        assert_eq!(usd.count, 2);

        let eur = breakdown.get("EUR").unwrap();
        assert_eq!(eur.total, 40.0);
        assert_eq!(eur.total_usd, 50.0);

        assert!((breakdown.total_usd - 200.0).abs() < 1e-9);
    }

    #[test]
    fn summation_is_order_invariant() {
        let svc = AggregationService::new();
        let rates = table(&[("USD", 1.0), ("EUR", 1.25), ("CUP", 1.0 / 490.0)]);
        let mut accounts = vec![
            account(1, "USD", "350"),
            account(2, "EUR", "500"),
            account(3, "CUP", "35000"),
            account(4, "EUR", "120"),
            account(5, "CUP", "75000"),
        ];

        let baseline = svc.aggregate_accounts(&accounts, &rates);

        // A handful of rotations is enough to shake out order dependence.
        for _ in 0..accounts.len() {
            accounts.rotate_left(1);
            let permuted = svc.aggregate_accounts(&accounts, &rates);
            assert!((permuted.total_usd - baseline.total_usd).abs() < 1e-9);
            assert_eq!(permuted.per_currency.len(), baseline.per_currency.len());
            for bucket in &baseline.per_currency {
                let other = permuted.get(&bucket.currency).unwrap();
                assert!((other.total - bucket.total).abs() < 1e-9);
                assert_eq!(other.count, bucket.count);
            }
        }
    }

    #[test]
    fn unknown_currency_counts_zero_usd_but_keeps_bucket() {
        let svc = AggregationService::new();
        let rates = table(&[("USD", 1.0)]);
        let accounts = vec![account(1, "USD", "100"), account(2, "GBP", "999")];
        let breakdown = svc.aggregate_accounts(&accounts, &rates);

        assert_eq!(breakdown.total_usd, 100.0);
        let gbp = breakdown.get("GBP").unwrap();
        assert_eq!(gbp.total, 999.0);
        assert_eq!(gbp.total_usd, 0.0);
        assert_eq!(breakdown.unconvertible, vec!["GBP".to_string()]);
    }

    #[test]
    fn malformed_amounts_are_skipped_entirely() {
        let svc = AggregationService::new();
        let rates = table(&[("USD", 1.0)]);
        let accounts = vec![
            account(1, "USD", "100"),
            account(2, "USD", "not-a-number"),
            account(3, "USD", ""),
        ];
        let breakdown = svc.aggregate_accounts(&accounts, &rates);

        assert_eq!(breakdown.total_usd, 100.0);
        assert_eq!(breakdown.get("USD").unwrap().count, 1);
        assert_eq!(breakdown.skipped, 2);
    }

    #[test]
    fn blank_currency_is_skipped() {
        let svc = AggregationService::new();
        let rates = table(&[("USD", 1.0)]);
        let accounts = vec![account(1, "   ", "100"), account(2, "USD", "50")];
        let breakdown = svc.aggregate_accounts(&accounts, &rates);

        assert_eq!(breakdown.total_usd, 50.0);
        assert_eq!(breakdown.per_currency.len(), 1);
        assert_eq!(breakdown.skipped, 1);
    }

    #[test]
    fn cards_use_owning_account_currency() {
        let svc = AggregationService::new();
        let rates = table(&[("USD", 1.0), ("EUR", 2.0)]);
        let cards = vec![card(1, "EUR", "10"), card(2, "usd", "5")];
        let breakdown = svc.aggregate_cards(&cards, &rates);

        assert_eq!(breakdown.get("EUR").unwrap().total_usd, 20.0);
        assert_eq!(breakdown.total_usd, 25.0);
    }

    #[test]
    fn transactions_without_embedded_currency_are_skipped() {
        let svc = AggregationService::new();
        let rates = table(&[("USD", 1.0)]);
        let txs = vec![
            tx(1, Some("USD"), "30"),
            tx(2, None, "999"),
            tx(3, Some("USD"), "20"),
        ];
        let breakdown = svc.aggregate_transactions(&txs, &rates);

        assert_eq!(breakdown.total_usd, 50.0);
        assert_eq!(breakdown.get("USD").unwrap().count, 2);
        assert_eq!(breakdown.skipped, 1);
    }

    #[test]
    fn per_currency_is_sorted_by_code() {
        let svc = AggregationService::new();
        let rates = table(&[("USD", 1.0), ("EUR", 1.0), ("CUP", 1.0)]);
        let accounts = vec![
            account(1, "USD", "1"),
            account(2, "CUP", "1"),
            account(3, "EUR", "1"),
        ];
        let breakdown = svc.aggregate_accounts(&accounts, &rates);
        let codes: Vec<&str> = breakdown
            .per_currency
            .iter()
            .map(|t| t.currency.as_str())
            .collect();
        assert_eq!(codes, vec!["CUP", "EUR", "USD"]);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  AggregationService — daily trend
// ═══════════════════════════════════════════════════════════════════

mod trend {
    use super::*;

    #[test]
    fn groups_by_day_and_currency() {
        let svc = AggregationService::new();
        let rates = table(&[("USD", 1.0), ("EUR", 1.25)]);
        // Deliberately unordered input.
        let txs = vec![
            tx_on(1, "EUR", "40", "2023-10-25T08:00:00Z"),
            tx_on(2, "USD", "100", "2023-10-24T09:00:00Z"),
            tx_on(3, "USD", "50", "2023-10-24T18:30:00Z"),
        ];

        let points = svc.daily_trend(&txs, &rates);
        assert_eq!(points.len(), 2);

        // Oldest day first.
        assert_eq!(points[0].day.to_string(), "2023-10-24");
        assert_eq!(points[0].total("USD"), 150.0);
        assert_eq!(points[0].total("EUR"), 0.0);
        assert_eq!(points[0].per_currency[0].count, 2);

        assert_eq!(points[1].day.to_string(), "2023-10-25");
        assert_eq!(points[1].total("EUR"), 40.0);
        assert_eq!(points[1].per_currency[0].total_usd, 50.0);
    }

    #[test]
    fn transactions_without_timestamp_are_skipped() {
        let svc = AggregationService::new();
        let rates = table(&[("USD", 1.0)]);
        let txs = vec![
            tx(1, Some("USD"), "999"),
            tx_on(2, "USD", "10", "2023-10-24T09:00:00Z"),
        ];

        let points = svc.daily_trend(&txs, &rates);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].total("USD"), 10.0);
    }

    #[test]
    fn skip_policy_matches_the_aggregator() {
        let svc = AggregationService::new();
        let rates = table(&[("USD", 1.0)]);
        let mut no_currency = tx_on(1, "USD", "5", "2023-10-24T09:00:00Z");
        no_currency.card = None;
        let txs = vec![
            no_currency,
            tx_on(2, "USD", "not-a-number", "2023-10-24T09:00:00Z"),
            tx_on(3, "USD", "25", "2023-10-24T09:00:00Z"),
        ];

        let points = svc.daily_trend(&txs, &rates);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].total("USD"), 25.0);
        assert_eq!(points[0].per_currency[0].count, 1);
    }

    #[test]
    fn empty_input_is_an_empty_series() {
        let svc = AggregationService::new();
        assert!(svc.daily_trend(&[], &RateTable::fallback()).is_empty());
    }
}

// ═══════════════════════════════════════════════════════════════════
//  AggregationService — deposit/withdraw flows
// ═══════════════════════════════════════════════════════════════════

mod flows {
    use super::*;

    #[test]
    fn splits_deposits_from_withdrawals() {
        let svc = AggregationService::new();
        let rates = table(&[("USD", 1.0)]);
        let txs = vec![
            flow(1, "USD", "100", TransactionType::Deposit, None),
            flow(2, "USD", "30", TransactionType::Withdraw, None),
            flow(3, "USD", "20", TransactionType::Withdraw, None),
        ];

        let flows = svc.aggregate_flows(&txs, &rates);
        assert_eq!(flows.deposits.total_usd, 100.0);
        assert_eq!(flows.withdrawals.total_usd, 50.0);
        assert_eq!(flows.net_usd, 50.0);
        assert_eq!(flows.deposits.get("USD").unwrap().count, 1);
        assert_eq!(flows.withdrawals.get("USD").unwrap().count, 2);
    }

    #[test]
    fn net_converts_across_currencies() {
        let svc = AggregationService::new();
        let rates = table(&[("USD", 1.0), ("EUR", 1.25)]);
        let txs = vec![
            flow(1, "EUR", "100", TransactionType::Deposit, None),
            flow(2, "USD", "25", TransactionType::Withdraw, None),
        ];

        let flows = svc.aggregate_flows(&txs, &rates);
        assert_eq!(flows.net_usd, 100.0);
    }

    #[test]
    fn categories_bucket_each_side_largest_first() {
        let svc = AggregationService::new();
        let rates = table(&[("USD", 1.0)]);
        let txs = vec![
            flow(
                1,
                "USD",
                "3500",
                TransactionType::Deposit,
                Some(TransactionCategory::Salary),
            ),
            flow(
                2,
                "USD",
                "400",
                TransactionType::Withdraw,
                Some(TransactionCategory::FoodGroceries),
            ),
            flow(
                3,
                "USD",
                "1200",
                TransactionType::Withdraw,
                Some(TransactionCategory::Rent),
            ),
            flow(
                4,
                "USD",
                "800",
                TransactionType::Withdraw,
                Some(TransactionCategory::FoodGroceries),
            ),
        ];

        let flows = svc.aggregate_flows(&txs, &rates);

        assert_eq!(flows.income_by_category.len(), 1);
        assert_eq!(
            flows.income_by_category[0].category,
            Some(TransactionCategory::Salary)
        );
        assert_eq!(flows.income_by_category[0].total_usd, 3500.0);

        let expenses = &flows.expense_by_category;
        assert_eq!(expenses.len(), 2);
        assert_eq!(expenses[0].category, Some(TransactionCategory::FoodGroceries));
        assert_eq!(expenses[0].total_usd, 1200.0);
        assert_eq!(expenses[0].count, 2);
        assert_eq!(expenses[1].category, Some(TransactionCategory::Rent));
    }

    #[test]
    fn uncategorized_transactions_get_their_own_bucket() {
        let svc = AggregationService::new();
        let rates = table(&[("USD", 1.0)]);
        let txs = vec![
            flow(1, "USD", "10", TransactionType::Deposit, None),
            flow(
                2,
                "USD",
                "5",
                TransactionType::Deposit,
                Some(TransactionCategory::Bonus),
            ),
        ];

        let flows = svc.aggregate_flows(&txs, &rates);
        let uncategorized = flows
            .income_by_category
            .iter()
            .find(|c| c.category.is_none())
            .unwrap();
        assert_eq!(uncategorized.total_usd, 10.0);
    }

    #[test]
    fn skipped_records_stay_out_of_categories_too() {
        let svc = AggregationService::new();
        let rates = table(&[("USD", 1.0)]);
        let mut no_currency = flow(
            1,
            "USD",
            "999",
            TransactionType::Withdraw,
            Some(TransactionCategory::Rent),
        );
        no_currency.card = None;
        let txs = vec![
            no_currency,
            flow(
                2,
                "USD",
                "bad",
                TransactionType::Withdraw,
                Some(TransactionCategory::Rent),
            ),
            flow(
                3,
                "USD",
                "50",
                TransactionType::Withdraw,
                Some(TransactionCategory::Rent),
            ),
        ];

        let flows = svc.aggregate_flows(&txs, &rates);
        assert_eq!(flows.withdrawals.total_usd, 50.0);
        assert_eq!(flows.withdrawals.skipped, 2);
        assert_eq!(flows.expense_by_category.len(), 1);
        assert_eq!(flows.expense_by_category[0].count, 1);
    }

    #[test]
    fn empty_input_is_a_zeroed_flow() {
        let svc = AggregationService::new();
        let flows = svc.aggregate_flows(&[], &RateTable::fallback());
        assert_eq!(flows.net_usd, 0.0);
        assert!(flows.deposits.is_empty());
        assert!(flows.income_by_category.is_empty());
    }
}

// ═══════════════════════════════════════════════════════════════════
//  GoalService
// ═══════════════════════════════════════════════════════════════════

mod goal {
    use super::*;

    #[test]
    fn partial_progress() {
        let svc = GoalService::new();
        assert_eq!(svc.percent(25.0, 100.0), 25);
    }

    #[test]
    fn overshoot_clamps_to_100() {
        let svc = GoalService::new();
        assert_eq!(svc.percent(150.0, 100.0), 100);
    }

    #[test]
    fn rounds_to_nearest_integer() {
        let svc = GoalService::new();
        assert_eq!(svc.percent(333.0, 1000.0), 33);
        assert_eq!(svc.percent(336.0, 1000.0), 34);
    }

    #[test]
    fn zero_current_is_zero() {
        let svc = GoalService::new();
        assert_eq!(svc.percent(0.0, 100.0), 0);
    }

    #[test]
    fn negative_current_clamps_to_zero() {
        let svc = GoalService::new();
        assert_eq!(svc.percent(-50.0, 100.0), 0);
    }

    #[test]
    fn zero_goal_is_trivially_met() {
        let svc = GoalService::new();
        assert_eq!(svc.percent(0.0, 0.0), 100);
        assert_eq!(svc.percent(42.0, 0.0), 100);
    }

    #[test]
    fn negative_goal_is_trivially_met() {
        let svc = GoalService::new();
        assert_eq!(svc.percent(10.0, -5.0), 100);
    }

    #[test]
    fn non_finite_inputs_are_zero_progress() {
        let svc = GoalService::new();
        assert_eq!(svc.percent(f64::NAN, 100.0), 0);
        assert_eq!(svc.percent(50.0, f64::NAN), 0);
        assert_eq!(svc.percent(f64::INFINITY, 100.0), 0);
    }

    #[test]
    fn result_is_always_in_range() {
        let svc = GoalService::new();
        for current in [-1e12, -1.0, 0.0, 0.5, 99.9, 1e12] {
            for goal in [-1e6, 0.0, 1.0, 1e12] {
                let pct = svc.percent(current, goal);
                assert!(pct <= 100, "percent({current}, {goal}) = {pct}");
            }
        }
    }

    #[test]
    fn progress_carries_inputs() {
        let svc = GoalService::new();
        let progress = svc.progress(25_000.0, 50_000.0);
        assert_eq!(progress.percent, 50);
        assert_eq!(progress.current_usd, 25_000.0);
        assert_eq!(progress.goal_usd, 50_000.0);
        assert!(!progress.is_met());
    }
}

// ═══════════════════════════════════════════════════════════════════
//  RateService — fallback chain
// ═══════════════════════════════════════════════════════════════════

mod rate_service {
    use super::*;

    #[tokio::test]
    async fn first_provider_wins_and_is_live() {
        let mut registry = RateProviderRegistry::new();
        registry.register(Box::new(MockRateProvider {
            table: table(&[("USD", 1.0), ("EUR", 1.2)]),
        }));
        registry.register(Box::new(StaticRateProvider));

        let svc = RateService::new(registry);
        let (rates, source) = svc.fetch_table().await.unwrap();
        assert_eq!(source, RateSource::Live);
        assert_eq!(rates.get("EUR"), Some(1.2));
    }

    #[tokio::test]
    async fn failing_provider_falls_back_to_static() {
        let mut registry = RateProviderRegistry::new();
        registry.register(Box::new(FailingRateProvider));
        registry.register(Box::new(StaticRateProvider));

        let svc = RateService::new(registry);
        let (rates, source) = svc.fetch_table().await.unwrap();
        assert_eq!(source, RateSource::Fallback);
        assert_eq!(rates.get("USD"), Some(1.0));
    }

    #[tokio::test]
    async fn empty_table_falls_through_to_next_provider() {
        let mut registry = RateProviderRegistry::new();
        registry.register(Box::new(EmptyRateProvider));
        registry.register(Box::new(StaticRateProvider));

        let svc = RateService::new(registry);
        let (rates, source) = svc.fetch_table().await.unwrap();
        assert_eq!(source, RateSource::Fallback);
        assert!(!rates.is_empty());
    }

    #[tokio::test]
    async fn all_providers_failing_is_an_error() {
        let mut registry = RateProviderRegistry::new();
        registry.register(Box::new(FailingRateProvider));
        registry.register(Box::new(FailingRateProvider));

        let svc = RateService::new(registry);
        let err = svc.fetch_table().await.unwrap_err();
        assert!(matches!(err, CoreError::Network(_)));
    }

    #[tokio::test]
    async fn no_providers_is_an_error() {
        let svc = RateService::new(RateProviderRegistry::new());
        let err = svc.fetch_table().await.unwrap_err();
        assert!(matches!(err, CoreError::RatesUnavailable(_)));
    }

    #[tokio::test]
    async fn fallback_rates_still_produce_renderable_aggregates() {
        // A dead rate endpoint must not block the dashboard: the static
        // table keeps the aggregator producing finite numbers.
        let mut registry = RateProviderRegistry::new();
        registry.register(Box::new(FailingRateProvider));
        registry.register(Box::new(StaticRateProvider));

        let svc = RateService::new(registry);
        let (rates, source) = svc.fetch_table().await.unwrap();
        assert_eq!(source, RateSource::Fallback);

        let aggregation = AggregationService::new();
        let accounts = vec![account(1, "USD", "100"), account(2, "EUR", "86")];
        let breakdown = aggregation.aggregate_accounts(&accounts, &rates);
        assert!(breakdown.total_usd.is_finite());
        assert!((breakdown.total_usd - 200.0).abs() < 1e-9);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  DashboardService — summaries over a snapshot
// ═══════════════════════════════════════════════════════════════════

mod dashboard {
    use super::*;

    fn snapshot() -> DashboardData {
        DashboardData {
            accounts: vec![account(1, "USD", "100"), account(2, "EUR", "40")],
            cards: vec![card(1, "USD", "100"), card(2, "EUR", "40")],
            transactions: vec![tx(1, Some("USD"), "30"), tx(2, Some("EUR"), "10")],
            rates: table(&[("USD", 1.0), ("EUR", 1.25)]),
            rate_source: RateSource::Live,
        }
    }

    #[test]
    fn summarize_consolidates_cards_and_goal() {
        let svc = DashboardService::new();
        let summary = svc.summarize(&snapshot(), 300.0);

        // 100 USD + 40 EUR * 1.25 = 150 USD consolidated.
        assert!((summary.balances.total_usd - 150.0).abs() < 1e-9);
        assert_eq!(summary.goal.percent, 50);
        assert_eq!(summary.rate_source, RateSource::Live);
        assert_eq!(summary.account_count, 2);
        assert_eq!(summary.card_count, 2);
        assert_eq!(summary.transaction_count, 2);
    }

    #[test]
    fn summarize_includes_transaction_volume() {
        let svc = DashboardService::new();
        let summary = svc.summarize(&snapshot(), 300.0);
        // 30 USD + 10 EUR * 1.25 = 42.5 USD of volume.
        assert!((summary.transaction_volume.total_usd - 42.5).abs() < 1e-9);
    }

    #[test]
    fn summarize_empty_snapshot_renders() {
        let svc = DashboardService::new();
        let data = DashboardData {
            accounts: vec![],
            cards: vec![],
            transactions: vec![],
            rates: RateTable::fallback(),
            rate_source: RateSource::Fallback,
        };
        let summary = svc.summarize(&data, 50_000.0);
        assert_eq!(summary.balances.total_usd, 0.0);
        assert_eq!(summary.goal.percent, 0);
        assert_eq!(summary.rate_source, RateSource::Fallback);
    }

    #[test]
    fn summarize_includes_flows() {
        let svc = DashboardService::new();
        // Both snapshot transactions are deposits.
        let summary = svc.summarize(&snapshot(), 300.0);
        assert!((summary.flows.deposits.total_usd - 42.5).abs() < 1e-9);
        assert_eq!(summary.flows.withdrawals.total_usd, 0.0);
        assert!((summary.flows.net_usd - 42.5).abs() < 1e-9);
    }

    #[test]
    fn trend_and_flows_views_read_the_snapshot() {
        let svc = DashboardService::new();
        let mut data = snapshot();
        data.transactions = vec![
            tx_on(1, "USD", "30", "2023-10-24T09:00:00Z"),
            flow(2, "USD", "10", TransactionType::Withdraw, None),
        ];

        let points = svc.daily_trend(&data);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].total("USD"), 30.0);

        let flows = svc.transaction_flows(&data);
        assert_eq!(flows.deposits.total_usd, 30.0);
        assert_eq!(flows.withdrawals.total_usd, 10.0);
        assert_eq!(flows.net_usd, 20.0);
    }

    #[test]
    fn distribution_and_breakdown_are_pure_views() {
        let svc = DashboardService::new();
        let data = snapshot();

        let distribution = svc.currency_distribution(&data);
        assert_eq!(distribution.get("USD").unwrap().count, 1);

        let breakdown = svc.account_breakdown(&data);
        assert!((breakdown.total_usd - 150.0).abs() < 1e-9);

        // Same snapshot, same answers.
        assert_eq!(svc.currency_distribution(&data), distribution);
    }
}
