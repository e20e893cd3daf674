use std::collections::BTreeMap;
use std::collections::HashMap;

use chrono::NaiveDate;

use super::currency_service::CurrencyService;
use crate::models::account::{Account, Card};
use crate::models::analytics::{
    BalanceBreakdown, CategoryTotal, CurrencyTotal, FlowBreakdown, TrendPoint,
};
use crate::models::rates::RateTable;
use crate::models::transaction::{Transaction, TransactionCategory, TransactionType};

/// Groups monetary records by currency and consolidates them into USD.
///
/// Pure business logic — no I/O, no API calls. One pass per record set;
/// summation is commutative, so results are independent of input order.
///
/// Skip policy: a record with no currency code or a malformed amount is
/// excluded from both the per-currency buckets *and* the consolidated
/// total (counted in `skipped`), never half-way into one of them.
pub struct AggregationService {
    currency_service: CurrencyService,
}

impl AggregationService {
    pub fn new() -> Self {
        Self {
            currency_service: CurrencyService::new(),
        }
    }

    /// Consolidate account balances (`GET /accounts` / `GET /bank`).
    #[must_use]
    pub fn aggregate_accounts(&self, accounts: &[Account], rates: &RateTable) -> BalanceBreakdown {
        self.aggregate(
            accounts
                .iter()
                .map(|a| (normalize_currency(&a.currency_type), a.balance.as_str())),
            rates,
        )
    }

    /// Consolidate card balances, using the owning account's currency.
    #[must_use]
    pub fn aggregate_cards(&self, cards: &[Card], rates: &RateTable) -> BalanceBreakdown {
        self.aggregate(
            cards
                .iter()
                .map(|c| (normalize_currency(&c.account.currency_type), c.balance.as_str())),
            rates,
        )
    }

    /// Consolidate transaction amounts (the currency-distribution chart).
    #[must_use]
    pub fn aggregate_transactions(
        &self,
        transactions: &[Transaction],
        rates: &RateTable,
    ) -> BalanceBreakdown {
        self.aggregate(
            transactions.iter().map(|t| (t.currency(), t.amount.as_str())),
            rates,
        )
    }

    /// Group transactions by calendar day and currency (the trend-line
    /// chart). Amounts stay in their original currency; each point lists
    /// the currencies that moved that day.
    ///
    /// The usual skip policy applies, plus: a transaction with no
    /// `createdAt` cannot be placed on the timeline and is skipped.
    /// Points come back sorted by day, oldest first.
    #[must_use]
    pub fn daily_trend(&self, transactions: &[Transaction], rates: &RateTable) -> Vec<TrendPoint> {
        let mut days: BTreeMap<NaiveDate, HashMap<String, CurrencyTotal>> = BTreeMap::new();

        for tx in transactions {
            let Some(created_at) = tx.created_at else {
                continue;
            };
            let Some(currency) = tx.currency() else {
                continue;
            };
            let Ok(amount) = tx.amount.trim().parse::<f64>() else {
                continue;
            };
            if !amount.is_finite() {
                continue;
            }

            let in_usd = self.currency_service.to_usd(rates, amount, &currency);
            let bucket = days
                .entry(created_at.date_naive())
                .or_default()
                .entry(currency.clone())
                .or_insert_with(|| CurrencyTotal {
                    currency,
                    total: 0.0,
                    total_usd: 0.0,
                    count: 0,
                });
            bucket.total += amount;
            bucket.total_usd += in_usd;
            bucket.count += 1;
        }

        days.into_iter()
            .map(|(day, buckets)| {
                let mut per_currency: Vec<CurrencyTotal> = buckets.into_values().collect();
                per_currency.sort_by(|a, b| a.currency.cmp(&b.currency));
                TrendPoint { day, per_currency }
            })
            .collect()
    }

    /// Split transactions by direction: deposit and withdrawal breakdowns,
    /// per-category USD totals for each side, and the net (the
    /// income/expense composition view).
    #[must_use]
    pub fn aggregate_flows(&self, transactions: &[Transaction], rates: &RateTable) -> FlowBreakdown {
        let side = |wanted: TransactionType| {
            self.aggregate(
                transactions
                    .iter()
                    .filter(move |t| t.transaction_type == wanted)
                    .map(|t| (t.currency(), t.amount.as_str())),
                rates,
            )
        };
        let deposits = side(TransactionType::Deposit);
        let withdrawals = side(TransactionType::Withdraw);
        let net_usd = deposits.total_usd - withdrawals.total_usd;

        FlowBreakdown {
            income_by_category: self.by_category(transactions, TransactionType::Deposit, rates),
            expense_by_category: self.by_category(transactions, TransactionType::Withdraw, rates),
            deposits,
            withdrawals,
            net_usd,
        }
    }

    /// Per-category USD totals for one transaction direction, largest
    /// first. Same skip policy as `aggregate`; `None` collects the
    /// uncategorized rest.
    fn by_category(
        &self,
        transactions: &[Transaction],
        wanted: TransactionType,
        rates: &RateTable,
    ) -> Vec<CategoryTotal> {
        let mut buckets: HashMap<Option<TransactionCategory>, CategoryTotal> = HashMap::new();

        for tx in transactions.iter().filter(|t| t.transaction_type == wanted) {
            let Some(currency) = tx.currency() else {
                continue;
            };
            let Ok(amount) = tx.amount.trim().parse::<f64>() else {
                continue;
            };
            if !amount.is_finite() {
                continue;
            }

            let bucket = buckets
                .entry(tx.category)
                .or_insert_with(|| CategoryTotal {
                    category: tx.category,
                    total_usd: 0.0,
                    count: 0,
                });
            bucket.total_usd += self.currency_service.to_usd(rates, amount, &currency);
            bucket.count += 1;
        }

        let mut totals: Vec<CategoryTotal> = buckets.into_values().collect();
        totals.sort_by(|a, b| {
            b.total_usd
                .partial_cmp(&a.total_usd)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        totals
    }

    /// Single-pass accumulation into per-currency buckets plus a running
    /// USD total (one rate lookup per record).
    fn aggregate<'a>(
        &self,
        records: impl Iterator<Item = (Option<String>, &'a str)>,
        rates: &RateTable,
    ) -> BalanceBreakdown {
        let mut buckets: HashMap<String, CurrencyTotal> = HashMap::new();
        let mut total_usd = 0.0;
        let mut skipped = 0;

        for (currency, raw_amount) in records {
            let Some(currency) = currency else {
                skipped += 1;
                continue;
            };
            let Ok(amount) = raw_amount.trim().parse::<f64>() else {
                skipped += 1;
                continue;
            };
            if !amount.is_finite() {
                skipped += 1;
                continue;
            }

            let in_usd = self.currency_service.to_usd(rates, amount, &currency);
            total_usd += in_usd;

            let bucket = buckets
                .entry(currency.clone())
                .or_insert_with(|| CurrencyTotal {
                    currency,
                    total: 0.0,
                    total_usd: 0.0,
                    count: 0,
                });
            bucket.total += amount;
            bucket.total_usd += in_usd;
            bucket.count += 1;
        }

        let mut unconvertible: Vec<String> = buckets
            .keys()
            .filter(|code| rates.get(code).is_none())
            .cloned()
            .collect();
        unconvertible.sort();

        let mut per_currency: Vec<CurrencyTotal> = buckets.into_values().collect();
        per_currency.sort_by(|a, b| a.currency.cmp(&b.currency));

        BalanceBreakdown {
            per_currency,
            total_usd,
            unconvertible,
            skipped,
        }
    }
}

impl Default for AggregationService {
    fn default() -> Self {
        Self::new()
    }
}

/// Blank or whitespace-only codes cannot be bucketed.
fn normalize_currency(code: &str) -> Option<String> {
    let trimmed = code.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_uppercase())
    }
}
