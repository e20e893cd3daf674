use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Deposit or withdrawal, matching the backend enum verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Deposit,
    Withdraw,
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionType::Deposit => write!(f, "deposit"),
            TransactionType::Withdraw => write!(f, "withdraw"),
        }
    }
}

/// The backend's fixed transaction categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionCategory {
    Salary,
    Investment,
    Bonus,
    Refund,
    OtherIncome,
    Rent,
    FoodGroceries,
    Entertainment,
    Transportation,
    UtilitiesElectricity,
    UtilitiesPhone,
    UtilitiesInternet,
    DebtPayment,
    HealthCare,
    Shopping,
    OtherExpense,
}

/// The account slice embedded inside a transaction's card.
/// Some payload variants include the currency `type`, some omit it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionAccount {
    pub id: i64,

    #[serde(default)]
    pub name: String,

    #[serde(rename = "type", default)]
    pub currency_type: Option<String>,
}

/// The card slice embedded inside a transaction payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionCard {
    pub id: i64,

    #[serde(default)]
    pub number: String,

    #[serde(default)]
    pub balance: Option<String>,

    #[serde(default)]
    pub account: Option<TransactionAccount>,
}

/// A transaction as returned by `GET /transaction`.
/// Immutable from the client's perspective once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: i64,

    pub transaction_type: TransactionType,

    #[serde(default)]
    pub category: Option<TransactionCategory>,

    /// Amount as a decimal string, parsed at aggregation time.
    pub amount: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub card: Option<TransactionCard>,
}

impl Transaction {
    /// Currency of the owning account, when the payload embeds it.
    /// `None` means the record cannot be bucketed by currency.
    #[must_use]
    pub fn currency(&self) -> Option<String> {
        let code = self
            .card
            .as_ref()?
            .account
            .as_ref()?
            .currency_type
            .as_deref()?
            .trim()
            .to_uppercase();
        if code.is_empty() {
            None
        } else {
            Some(code)
        }
    }
}

/// Payload for `POST /transaction`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub transaction_type: TransactionType,

    /// Submitted as a number; the backend stores and echoes it as a string.
    pub amount: f64,

    pub description: String,

    pub card_id: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<TransactionCategory>,
}
