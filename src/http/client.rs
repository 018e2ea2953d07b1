use std::time::Instant;

use reqwest::header::CONTENT_TYPE;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::http::request::Request;
use crate::http::response::Response;
use crate::{Result, The100Error};

/// Owned transport session. Closing it empties the slot, after which every
/// `execute` fails with `SessionClosed`.
pub struct Client {
    inner: RwLock<Option<reqwest::Client>>,
}

impl Client {
    pub fn from_reqwest(inner: reqwest::Client) -> Self {
        Self {
            inner: RwLock::new(Some(inner)),
        }
    }

    pub async fn is_closed(&self) -> bool {
        self.inner.read().await.is_none()
    }

    /// Returns `true` if this call released the session.
    pub async fn close(&self) -> bool {
        self.inner.write().await.take().is_some()
    }

    pub async fn execute(&self, request: Request) -> Result<Response> {
        // reqwest::Client is a pooled handle; clone it so the lock is not held across I/O.
        let inner = self
            .inner
            .read()
            .await
            .clone()
            .ok_or(The100Error::SessionClosed)?;

        let url = request.full_url()?;
        debug!(method = %request.method, url = %url, "Sending request");

        let mut req = inner
            .request(request.method.into(), url.clone())
            .headers(request.headers);
        if let Some(body) = &request.body {
            req = req.json(body);
        }

        let start = Instant::now();
        let response = req.send().await.map_err(|e| {
            warn!(url = %url, error = %e, "Request failed");
            The100Error::unreachable(&url, e)
        })?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.text().await.map_err(|e| {
            warn!(url = %url, error = %e, "Failed to read response body");
            The100Error::unreachable(&url, e)
        })?;
        let elapsed_ms = start.elapsed().as_millis() as u64;

        debug!(url = %url, status, elapsed_ms, "Received response");
        Ok(Response::new(url.to_string(), status, content_type, body))
    }
}
