/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! # Zendure Client
//!
//! A small asynchronous client for the Zendure cloud API, meant to be embedded
//! in home-automation integrations.
//!
//! It covers login (bearer token retrieval), the device list and a data setter
//! call. Every request goes through one wrapper that bounds it with a timeout
//! and maps failures onto [`error::ApiError`]:
//!
//! | failure                              | error                          |
//! |--------------------------------------|--------------------------------|
//! | status 401 / 403                     | `ApiError::Authentication`     |
//! | other error status, timeout, network | `ApiError::Communication`      |
//! | anything else                        | `ApiError::Generic`            |
//!
//! ## Usage
//!
//! ```ignore
//! use zendure_client::prelude::*;
//!
//! setup_logger();
//! let config = Config::new();
//! let mut client = ZendureApiClient::from_config(&config, reqwest::Client::new());
//!
//! match client.fetch_auth_token().await {
//!     Ok(true) => println!("{}", client.fetch_devices().await?),
//!     Ok(false) => eprintln!("login returned no token"),
//!     Err(e) if e.is_authentication() => eprintln!("wrong credentials"),
//!     Err(e) => return Err(e),
//! }
//! ```

/// Client, configuration and interfaces
pub mod application;
/// Endpoints and fixed protocol values
pub mod constants;
/// Error taxonomy
pub mod error;
/// Request wrapper and wire models
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Logging helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
