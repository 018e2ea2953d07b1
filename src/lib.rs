//! An asynchronous client for the [the100.io](https://www.the100.io) API.
//!
//! ```no_run
//! # async fn run() -> the100::Result<()> {
//! let client = the100::The100::new("my-api-key");
//! let users = client.get_group_users(42, Some(2)).await?;
//! println!("{users}");
//! client.close().await;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod logger;

// Re-export commonly used types
pub use client::The100;
pub use config::{Config, DEFAULT_BASE_URL};
pub use error::{Result, The100Error};

pub const NAME: &str = "the100";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
