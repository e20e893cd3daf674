use super::auth::PostResponse;
use super::client::ApiClient;
use super::validate_currency_code;
use crate::errors::CoreError;
use crate::models::account::{Account, Card, NewAccount, NewCard};

impl ApiClient {
    /// `GET /accounts` — the logged-in user's accounts.
    pub async fn accounts(&self) -> Result<Vec<Account>, CoreError> {
        self.get_json("/accounts").await
    }

    /// `GET /bank` — bank-level accounts.
    pub async fn banks(&self) -> Result<Vec<Account>, CoreError> {
        self.get_json("/bank").await
    }

    /// `GET /card` — cards with their owning account embedded.
    pub async fn cards(&self) -> Result<Vec<Card>, CoreError> {
        self.get_json("/card").await
    }

    /// `POST /accounts`.
    pub async fn create_account(&self, account: &NewAccount) -> Result<PostResponse, CoreError> {
        validate_new_account(account)?;
        self.post_json("/accounts", account).await
    }

    /// `POST /bank`.
    pub async fn create_bank(&self, account: &NewAccount) -> Result<PostResponse, CoreError> {
        validate_new_account(account)?;
        self.post_json("/bank", account).await
    }

    /// `POST /card`.
    pub async fn create_card(&self, card: &NewCard) -> Result<PostResponse, CoreError> {
        if card.number.trim().is_empty() {
            return Err(CoreError::ValidationError(
                "card number must not be empty".to_string(),
            ));
        }
        self.post_json("/card", card).await
    }
}

fn validate_new_account(account: &NewAccount) -> Result<(), CoreError> {
    if account.name.trim().is_empty() {
        return Err(CoreError::ValidationError(
            "account name must not be empty".to_string(),
        ));
    }
    validate_currency_code(&account.currency_type)?;
    Ok(())
}
