use crate::error::ApiError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the Zendure cloud API
///
/// Implemented by [`crate::application::client::ZendureApiClient`]; integrations
/// can depend on the trait and substitute their own implementation in tests.
#[async_trait]
pub trait ZendureApi: Send + Sync {
    /// Gets the sample data document
    async fn fetch_sample_data(&self) -> Result<Value, ApiError>;

    /// Sets the title
    ///
    /// # Arguments
    /// * `value` - New title
    async fn set_title(&self, value: &str) -> Result<Value, ApiError>;

    /// Retrieves a bearer token and stores it for subsequent requests
    ///
    /// # Returns
    /// * `Ok(true)` if a new token was stored
    /// * `Ok(false)` if the server answered without a token
    async fn fetch_auth_token(&mut self) -> Result<bool, ApiError>;

    /// Gets the devices bound to the account
    async fn fetch_devices(&self) -> Result<Value, ApiError>;
}
