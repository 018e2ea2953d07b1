use reqwest::header::HeaderMap as Headers;
use serde::Serialize;
use serde_json::Value;

use crate::http::encode::encode_url;
use crate::http::types::Method;
use crate::{Result, The100Error};

/// A single API call, built by an endpoint method and consumed by the
/// dispatcher. `url` is stored already percent-encoded.
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    pub url: String,
    pub headers: Headers,
    pub query_params: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl Request {
    pub fn new(method: Method, url: &str) -> Self {
        Self {
            method,
            url: encode_url(url),
            headers: Headers::new(),
            query_params: Vec::new(),
            body: None,
        }
    }

    pub fn with_headers(mut self, headers: Headers) -> Self {
        self.headers.extend(headers);
        self
    }

    pub fn with_json<T: Serialize + ?Sized>(mut self, data: &T) -> Result<Self> {
        self.body = Some(serde_json::to_value(data).map_err(The100Error::Encode)?);
        Ok(self)
    }

    /// Later values for the same key replace earlier ones.
    pub fn with_query(mut self, key: &str, value: impl ToString) -> Self {
        let value = value.to_string();
        match self.query_params.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value,
            None => self.query_params.push((key.to_string(), value)),
        }
        self
    }

    /// The URL actually sent: the encoded URL plus any query parameters.
    pub fn full_url(&self) -> Result<reqwest::Url> {
        let mut url = reqwest::Url::parse(&self.url)?;
        if !self.query_params.is_empty() {
            url.query_pairs_mut().extend_pairs(&self.query_params);
        }
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_encodes_url() {
        let request = Request::new(Method::Get, "https://www.the100.io/api/v2/users/a b");
        assert_eq!(request.url, "https://www.the100.io/api/v2/users/a%20b");
        assert!(request.body.is_none());
    }

    #[test]
    fn test_full_url_without_query() {
        let request = Request::new(Method::Get, "https://www.the100.io/api/v2/games");
        assert_eq!(
            request.full_url().unwrap().as_str(),
            "https://www.the100.io/api/v2/games"
        );
    }

    #[test]
    fn test_full_url_with_query() {
        let request = Request::new(Method::Get, "https://www.the100.io/api/v2/groups/42/users")
            .with_query("page", 2);
        assert_eq!(
            request.full_url().unwrap().as_str(),
            "https://www.the100.io/api/v2/groups/42/users?page=2"
        );
    }

    #[test]
    fn test_with_json_sets_body() {
        let request = Request::new(Method::Post, "https://www.the100.io/api/v2/gaming_sessions")
            .with_json(&serde_json::json!({"game_id": 1}))
            .unwrap();
        assert_eq!(request.body, Some(serde_json::json!({"game_id": 1})));
    }

    #[test]
    fn test_full_url_rejects_relative() {
        let request = Request::new(Method::Get, "/api/v2/games");
        assert!(matches!(request.full_url(), Err(The100Error::InvalidUrl(_))));
    }
}
