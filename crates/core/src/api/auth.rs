use serde::{Deserialize, Serialize};

use super::client::ApiClient;
use crate::errors::CoreError;
use crate::models::session::Session;

/// Credentials for `POST /auth/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Payload for `POST /auth/register`.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Body of a successful login.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
}

/// Generic `{ "message": ... }` acknowledgement the creation endpoints
/// return.
#[derive(Debug, Clone, Deserialize)]
pub struct PostResponse {
    #[serde(default)]
    pub message: String,
}

impl ApiClient {
    /// `POST /auth/login`. On success the returned session becomes the
    /// active one for all subsequent privileged calls.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<Session, CoreError> {
        validate_credentials(email, password)?;

        let body = LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        let resp: LoginResponse = self.post_json_public("/auth/login", &body).await?;

        if resp.token.is_empty() {
            return Err(CoreError::Api {
                endpoint: "/auth/login".to_string(),
                status: 200,
                message: "login response carried no token".to_string(),
            });
        }

        let session = Session::new(resp.token, resp.email, resp.name);
        self.set_session(session.clone());
        Ok(session)
    }

    /// `POST /auth/register`. Does not log the new user in.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<PostResponse, CoreError> {
        if name.trim().is_empty() {
            return Err(CoreError::ValidationError(
                "name must not be empty".to_string(),
            ));
        }
        validate_credentials(email, password)?;

        let body = RegisterRequest {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        self.post_json_public("/auth/register", &body).await
    }

    /// Drop the active session. The frontend then returns to the login
    /// screen and clears its persisted copy.
    pub fn logout(&mut self) -> Option<Session> {
        self.clear_session()
    }
}

/// Form-level checks the web client runs before submitting.
fn validate_credentials(email: &str, password: &str) -> Result<(), CoreError> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(CoreError::ValidationError(format!(
            "'{email}' is not a valid email address"
        )));
    }
    if password.is_empty() {
        return Err(CoreError::ValidationError(
            "password must not be empty".to_string(),
        ));
    }
    Ok(())
}
