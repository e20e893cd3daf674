use super::auth::PostResponse;
use super::client::ApiClient;
use crate::errors::CoreError;
use crate::models::transaction::{NewTransaction, Transaction};

impl ApiClient {
    /// `GET /transaction` — all transactions for the logged-in user.
    /// The backend filters by the bearer token; no user id is sent.
    pub async fn transactions(&self) -> Result<Vec<Transaction>, CoreError> {
        self.get_json("/transaction").await
    }

    /// `POST /transaction` — record a deposit or withdrawal against a
    /// card. Amounts are validated client-side before submission.
    pub async fn create_transaction(&self, tx: &NewTransaction) -> Result<PostResponse, CoreError> {
        if !tx.amount.is_finite() || tx.amount <= 0.0 {
            return Err(CoreError::ValidationError(format!(
                "transaction amount must be a positive number, got {}",
                tx.amount
            )));
        }
        self.post_json("/transaction", tx).await
    }
}
