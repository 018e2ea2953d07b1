//! The100.io API client.
//!
//! Every endpoint method builds one [`Request`] and hands it to
//! [`The100::dispatch`], which owns URL encoding, transport error
//! translation and JSON decoding. Payloads come back as untyped
//! [`serde_json::Value`]s exactly as the service sent them.

use std::fmt::Display;
use std::sync::Arc;

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info};

use crate::config::Config;
use crate::http::{self, Method, Request};
use crate::{Result, The100Error};

/// Asynchronous the100.io client.
///
/// Cloning is cheap and clones share one transport session, so closing any
/// clone closes them all.
#[derive(Clone)]
pub struct The100 {
    config: Config,
    session: Arc<http::Client>,
}

impl The100 {
    /// Client for the public API at `https://www.the100.io`.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_config(Config::new(api_key))
    }

    pub fn with_config(config: Config) -> Self {
        Self::with_session(config, reqwest::Client::new())
    }

    /// Use a caller-built `reqwest::Client`, e.g. one with a proxy or timeout.
    pub fn with_session(config: Config, session: reqwest::Client) -> Self {
        debug!(base_url = %config.base_url, "Creating the100 client");
        Self {
            config,
            session: Arc::new(http::Client::from_reqwest(session)),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub async fn is_closed(&self) -> bool {
        self.session.is_closed().await
    }

    /// Release the transport session. Requests made afterwards fail with
    /// [`The100Error::SessionClosed`]; closing twice is a no-op.
    pub async fn close(&self) {
        if self.session.close().await {
            info!(base_url = %self.config.base_url, "Closed the100 session");
        } else {
            debug!("the100 session already closed");
        }
    }

    fn headers(&self) -> Result<HeaderMap> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", self.config.api_key))
            .map_err(|_| The100Error::InvalidApiKey)?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    fn request(&self, method: Method, path: &str) -> Result<Request> {
        let url = format!("{}{}", self.config.base_url, path);
        Ok(Request::new(method, &url).with_headers(self.headers()?))
    }

    /// Send one request and decode its body. Non-2xx responses are not
    /// treated as errors; their JSON payload is returned like any other.
    pub async fn dispatch<T: DeserializeOwned>(&self, request: Request) -> Result<T> {
        let response = self.session.execute(request).await?;

        if !response.is_success() {
            debug!(
                url = %response.url,
                status = response.status.code(),
                "Non-success status from the100.io"
            );
        }
        if !response.is_empty() && !response.is_json() {
            return Err(The100Error::Unreachable {
                url: response.url.clone(),
                reason: format!(
                    "unexpected content type {}",
                    response.content_type.as_deref().unwrap_or_default()
                ),
            });
        }

        response.json()
    }

    async fn get(&self, path: &str) -> Result<Value> {
        self.dispatch(self.request(Method::Get, path)?).await
    }

    async fn send_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<Value> {
        self.dispatch(self.request(method, path)?.with_json(body)?).await
    }

    // ===== Games =====

    /// All games and their game activities.
    pub async fn get_games(&self) -> Result<Value> {
        self.get("/api/v2/games").await
    }

    /// The game whose `id` matches, or `None`.
    pub async fn get_game(&self, game_id: impl Display) -> Result<Option<Value>> {
        let games = self.get_games().await?;
        Ok(find_by_field(games, "id", &game_id.to_string()))
    }

    /// The game whose `name` matches exactly, or `None`.
    pub async fn get_game_by_name(&self, name: &str) -> Result<Option<Value>> {
        let games = self.get_games().await?;
        Ok(find_by_field(games, "name", name))
    }

    // ===== Gaming sessions =====

    pub async fn get_gaming_session(&self, gaming_session_id: impl Display) -> Result<Value> {
        self.get(&format!("/api/v2/gaming_sessions/{gaming_session_id}")).await
    }

    /// Requires a whitelisted token.
    pub async fn create_gaming_session<B: Serialize + ?Sized>(&self, details: &B) -> Result<Value> {
        self.send_json(Method::Post, "/api/v2/gaming_sessions", details).await
    }

    /// Requires a whitelisted token.
    pub async fn edit_gaming_session<B: Serialize + ?Sized>(
        &self,
        gaming_session_id: impl Display,
        details: &B,
    ) -> Result<Value> {
        self.send_json(
            Method::Patch,
            &format!("/api/v2/gaming_sessions/{gaming_session_id}"),
            details,
        )
        .await
    }

    /// Requires a whitelisted token.
    pub async fn delete_gaming_session(&self, gaming_session_id: impl Display) -> Result<Value> {
        let path = format!("/api/v2/gaming_sessions/{gaming_session_id}");
        self.dispatch(self.request(Method::Delete, &path)?).await
    }

    pub async fn get_gaming_sessions(&self) -> Result<Value> {
        self.get("/api/v2/gaming_sessions").await
    }

    /// Create a gaming session through the Discord bot endpoint. Requires a
    /// whitelisted token.
    pub async fn create_gaming_session_discord<B: Serialize + ?Sized>(
        &self,
        details: &B,
    ) -> Result<Value> {
        self.send_json(Method::Post, "/api/v2/discordbots/create_gaming_session", details).await
    }

    // ===== Groups =====

    pub async fn get_group(&self, group_id: impl Display) -> Result<Value> {
        self.get(&format!("/api/v2/groups/{group_id}")).await
    }

    pub async fn get_group_gaming_sessions(&self, group_id: impl Display) -> Result<Value> {
        self.get(&format!("/api/v2/groups/{group_id}/gaming_sessions")).await
    }

    /// Members of a group. The API paginates; `page` selects one page.
    pub async fn get_group_users(
        &self,
        group_id: impl Display,
        page: Option<u32>,
    ) -> Result<Value> {
        let path = format!("/api/v2/groups/{group_id}/users");
        let mut request = self.request(Method::Get, &path)?;
        if let Some(page) = page {
            request = request.with_query("page", page);
        }
        self.dispatch(request).await
    }

    pub async fn get_group_statuses(&self, group_id: impl Display) -> Result<Value> {
        self.get(&format!("/api/v2/groups/{group_id}/statuses")).await
    }

    // ===== Users =====

    pub async fn get_user(&self, user_id: impl Display) -> Result<Value> {
        self.get(&format!("/api/v2/users/{user_id}")).await
    }
}

/// Linear scan of a JSON array for the first element whose `field` renders
/// to `wanted`. Numbers and strings compare by their text.
fn find_by_field(items: Value, field: &str, wanted: &str) -> Option<Value> {
    let Value::Array(items) = items else {
        return None;
    };
    items.into_iter().find(|item| match item.get(field) {
        Some(Value::String(s)) => s == wanted,
        Some(Value::Number(n)) => n.to_string() == wanted,
        _ => false,
    })
}
