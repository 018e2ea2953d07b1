use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::Result;
use crate::http::types::Status;

pub struct Response {
    /// The URL actually requested, query string included.
    pub url: String,
    pub status: Status,
    pub content_type: Option<String>,
    pub body: String,
}

impl Response {
    pub fn new(url: String, status: u16, content_type: Option<String>, body: String) -> Self {
        Self {
            url,
            status: Status::new(status),
            content_type,
            body,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    pub fn is_empty(&self) -> bool {
        self.body.trim().is_empty()
    }

    /// True only for an explicit JSON media type; a missing Content-Type is not JSON.
    pub fn is_json(&self) -> bool {
        let Some(content_type) = self.content_type.as_deref() else {
            return false;
        };
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        essence == "application/json" || essence.ends_with("+json")
    }

    /// Decode the body. An empty body decodes as JSON `null`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        if self.is_empty() {
            return Ok(serde_json::from_value(Value::Null)?);
        }
        Ok(serde_json::from_str(&self.body)?)
    }
}
