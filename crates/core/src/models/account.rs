use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A bank account as returned by `GET /accounts` and `GET /bank`.
///
/// `balance` stays a decimal string exactly as the backend sends it —
/// the balance is authoritative server-side and is only parsed at
/// aggregation time, never mutated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: i64,

    pub name: String,

    /// Currency code of the account ("USD", "EUR", "CUP", ...).
    /// The backend calls this field `type`.
    #[serde(rename = "type")]
    pub currency_type: String,

    /// Balance as a decimal string, e.g. "1024.50".
    pub balance: String,

    /// The backend spells this field `createAt`, not `createdAt`.
    #[serde(rename = "createAt", default)]
    pub created_at: Option<DateTime<Utc>>,

    /// Soft-delete marker. The client displays whatever the backend
    /// returns and never filters on it.
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Account {
    /// Currency code, trimmed and uppercased for rate lookups.
    #[must_use]
    pub fn currency(&self) -> String {
        self.currency_type.trim().to_uppercase()
    }
}

/// The slice of the owning account embedded in a card payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardAccount {
    #[serde(default)]
    pub id: Option<i64>,

    pub name: String,

    #[serde(rename = "type")]
    pub currency_type: String,

    #[serde(default)]
    pub balance: Option<String>,
}

/// A card as returned by `GET /card`. A card always references exactly
/// one account; the account carries the currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: i64,

    pub number: String,

    /// Balance as a decimal string.
    pub balance: String,

    pub account: CardAccount,

    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Card {
    /// Currency of the owning account, trimmed and uppercased.
    #[must_use]
    pub fn currency(&self) -> String {
        self.account.currency_type.trim().to_uppercase()
    }
}

/// Payload for `POST /accounts` and `POST /bank`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    pub name: String,

    #[serde(rename = "type")]
    pub currency_type: String,

    /// Opening balance as a decimal string, matching the read shape.
    pub balance: String,
}

/// Payload for `POST /card`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCard {
    pub number: String,
    pub account_id: i64,
}
