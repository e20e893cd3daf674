use log::{debug, warn};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use crate::errors::CoreError;
use crate::models::session::Session;
use crate::models::settings::Settings;

/// Typed client for the dashboard's backend REST API.
///
/// Owns the current `Session`; `authorized()` is the only place a bearer
/// token is ever attached to an outgoing request. A missing session is a
/// typed error raised before any network traffic.
pub struct ApiClient {
    http: Client,
    base_url: String,
    session: Option<Session>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("authenticated", &self.session.is_some())
            .finish()
    }
}

impl ApiClient {
    pub fn new(settings: &Settings) -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(30));

        Self {
            http: builder.build().unwrap_or_else(|_| Client::new()),
            base_url: settings.api_base_url.trim_end_matches('/').to_string(),
            session: None,
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Session ─────────────────────────────────────────────────────

    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn set_session(&mut self, session: Session) {
        self.session = Some(session);
    }

    /// Drop the active session, returning it so a frontend can clear its
    /// persisted copy too.
    pub fn clear_session(&mut self) -> Option<Session> {
        self.session.take()
    }

    // ── Request plumbing ────────────────────────────────────────────

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// The bearer-token chokepoint.
    fn authorized(&self, req: RequestBuilder) -> Result<RequestBuilder, CoreError> {
        let session = self.session.as_ref().ok_or(CoreError::MissingToken)?;
        Ok(req.bearer_auth(&session.token))
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, CoreError> {
        debug!("GET {path}");
        let req = self.authorized(self.http.get(self.url(path)))?;
        Self::decode(path, req.send().await?).await
    }

    /// GET without authorization, for public endpoints such as the rate
    /// table.
    pub(crate) async fn get_json_public<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, CoreError> {
        debug!("GET {path} (public)");
        let req = self.http.get(self.url(path));
        Self::decode(path, req.send().await?).await
    }

    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, CoreError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!("POST {path}");
        let req = self.authorized(self.http.post(self.url(path)))?.json(body);
        Self::decode(path, req.send().await?).await
    }

    pub(crate) async fn post_json_public<B, T>(&self, path: &str, body: &B) -> Result<T, CoreError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!("POST {path} (public)");
        let req = self.http.post(self.url(path)).json(body);
        Self::decode(path, req.send().await?).await
    }

    pub(crate) async fn patch_json_public<B, T>(&self, path: &str, body: &B) -> Result<T, CoreError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!("PATCH {path} (public)");
        let req = self.http.patch(self.url(path)).json(body);
        Self::decode(path, req.send().await?).await
    }

    pub(crate) async fn delete_json_public<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, CoreError> {
        debug!("DELETE {path} (public)");
        let req = self.http.delete(self.url(path));
        Self::decode(path, req.send().await?).await
    }

    /// Map the response: 401 → `Unauthorized` (the UI redirects to the
    /// login screen on that variant), other non-2xx → `Api` carrying the
    /// backend's message, then decode the JSON body.
    async fn decode<T: DeserializeOwned>(path: &str, resp: Response) -> Result<T, CoreError> {
        let status = resp.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(CoreError::Unauthorized);
        }
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            warn!("{path} failed with HTTP {status}");
            return Err(CoreError::Api {
                endpoint: path.to_string(),
                status: status.as_u16(),
                message: extract_message(&body),
            });
        }
        resp.json::<T>()
            .await
            .map_err(|e| CoreError::Deserialization(format!("{path}: {e}")))
    }
}

/// Backend errors usually arrive as `{"message": "..."}` (a string, or an
/// array of strings for validation failures). Surface the inner message
/// when present, the raw body otherwise.
fn extract_message(body: &str) -> String {
    #[derive(serde::Deserialize)]
    struct ApiMessage {
        message: MessageField,
    }

    #[derive(serde::Deserialize)]
    #[serde(untagged)]
    enum MessageField {
        One(String),
        Many(Vec<String>),
    }

    match serde_json::from_str::<ApiMessage>(body) {
        Ok(ApiMessage {
            message: MessageField::One(m),
        }) => m,
        Ok(ApiMessage {
            message: MessageField::Many(ms),
        }) => ms.join("; "),
        Err(_) => body.trim().to_string(),
    }
}
