use std::fmt;

use crate::{Result, The100Error};

pub const DEFAULT_BASE_URL: &str = "https://www.the100.io";

pub const API_KEY_VAR: &str = "THE100_API_KEY";
pub const BASE_URL_VAR: &str = "THE100_BASE_URL";

#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
}

// Keep the key out of logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Config {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Read `THE100_API_KEY` and, optionally, `THE100_BASE_URL`.
    pub fn from_env() -> Result<Self> {
        Self::from_values(
            std::env::var(API_KEY_VAR).ok(),
            std::env::var(BASE_URL_VAR).ok(),
        )
    }

    fn from_values(api_key: Option<String>, base_url: Option<String>) -> Result<Self> {
        let api_key = api_key
            .ok_or_else(|| The100Error::Config(format!("{} is not set", API_KEY_VAR)))?;

        let mut config = Config::new(api_key);
        if let Some(base_url) = base_url {
            config = config.with_base_url(&base_url);
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(The100Error::Config("API key is empty".to_string()));
        }
        url::Url::parse(&self.base_url)?;
        Ok(())
    }
}
