/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! # Zendure Client Prelude
//!
//! ```rust
//! use zendure_client::prelude::*;
//!
//! let config = Config::with_credentials("me@example.com", "secret", "de-DE");
//! let client = ZendureApiClient::from_config(&config, reqwest::Client::new());
//! assert!(!client.has_auth_token());
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

pub use crate::application::config::{Config, Credentials, RestApiConfig};
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

pub use crate::error::{ApiError, ApiResult, CommunicationReason};

// ============================================================================
// CLIENT
// ============================================================================

pub use crate::application::client::ZendureApiClient;
pub use crate::application::interfaces::api::ZendureApi;
pub use crate::model::http::make_http_request;
pub use crate::model::responses::AuthTokenResponse;

// ============================================================================
// UTILITIES
// ============================================================================

pub use crate::utils::logger::setup_logger;
