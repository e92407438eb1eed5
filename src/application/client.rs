/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Client for the Zendure cloud API
//!
//! The client keeps the account credentials and the current bearer token and
//! issues every call through [`make_http_request`], which bounds the request
//! with a timeout and translates failures into [`ApiError`].
//!
//! # Example
//! ```ignore
//! use zendure_client::application::client::ZendureApiClient;
//!
//! let session = reqwest::Client::new();
//! let mut client = ZendureApiClient::new("me@example.com", "secret", "de-DE", session);
//!
//! client.fetch_auth_token().await?;
//! let devices = client.fetch_devices().await?;
//! ```

use crate::application::config::Config;
use crate::application::interfaces::api::ZendureApi;
use crate::constants::{
    APP_VERSION, BASIC_AUTHORIZATION, DEFAULT_TIMEOUT_SECS, SAMPLE_DATA_URL, UNSET_AUTH_TOKEN,
    USER_AGENT, ZEN_API_URL, ZEN_AUTH_PATH, ZEN_DEVICELIST_PATH,
};
use crate::error::{ApiError, ApiResult};
use crate::model::http::make_http_request;
use crate::model::requests::{AuthTokenRequest, SetTitleRequest};
use crate::model::responses::AuthTokenResponse;
use async_trait::async_trait;
use reqwest::{Client as HttpClient, Method};
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::time::Duration;
use tracing::{Instrument, Span, error, info, info_span};

/// Client for the Zendure cloud API
///
/// The HTTP session is supplied by the caller; `reqwest::Client` is a handle
/// to a shared connection pool, so the client never owns a pool of its own.
/// Events are emitted inside the span given at construction (see
/// [`ZendureApiClient::with_span`]).
pub struct ZendureApiClient {
    username: String,
    password: String,
    language: String,
    session: HttpClient,
    auth_token: String,
    api_url: String,
    sample_url: String,
    timeout: Duration,
    span: Span,
}

impl ZendureApiClient {
    /// Creates a client for the given account on a shared HTTP session
    ///
    /// No request is made; call [`ZendureApiClient::fetch_auth_token`] to log in.
    ///
    /// # Arguments
    /// * `username` - Account name
    /// * `password` - Account password
    /// * `language` - Value sent as `Accept-Language`
    /// * `session` - Shared HTTP session
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        language: impl Into<String>,
        session: HttpClient,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            language: language.into(),
            session,
            auth_token: UNSET_AUTH_TOKEN.to_string(),
            api_url: ZEN_API_URL.to_string(),
            sample_url: SAMPLE_DATA_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            span: info_span!("zendure_api"),
        }
    }

    /// Creates a client from a [`Config`]
    pub fn from_config(config: &Config, session: HttpClient) -> Self {
        Self::new(
            config.credentials.username.as_str(),
            config.credentials.password.as_str(),
            config.language.as_str(),
            session,
        )
        .with_api_url(&config.rest_api.base_url)
        .with_sample_url(&config.rest_api.sample_url)
        .with_timeout(config.timeout())
    }

    /// Overrides the vendor base URL
    #[must_use]
    pub fn with_api_url(mut self, url: &str) -> Self {
        self.api_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Overrides the URL of the sample data call
    #[must_use]
    pub fn with_sample_url(mut self, url: &str) -> Self {
        self.sample_url = url.to_string();
        self
    }

    /// Overrides the per-request timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Emits all events of this client inside `span`
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Gets the sample data document
    pub async fn fetch_sample_data(&self) -> ApiResult<Value> {
        self.api_wrapper(Method::GET, &self.sample_url, &None::<()>, vec![])
            .await
    }

    /// Sets the title on the vendor API
    ///
    /// # Arguments
    /// * `value` - New title
    pub async fn set_title(&self, value: &str) -> ApiResult<Value> {
        let bearer = self.bearer();
        let body = SetTitleRequest { title: value };
        self.api_wrapper(
            Method::PATCH,
            &self.api_url,
            &Some(body),
            self.vendor_headers(&bearer),
        )
        .await
    }

    /// Retrieves a bearer token with the account credentials
    ///
    /// A non-empty token replaces the current one. If the answer carries no
    /// token an error is logged and the current token is kept.
    ///
    /// # Returns
    /// * `Ok(true)` - A new token was stored
    /// * `Ok(false)` - The answer carried no token
    /// * `Err(ApiError)` - If the request fails
    pub async fn fetch_auth_token(&mut self) -> ApiResult<bool> {
        let url = format!("{}{}", self.api_url, ZEN_AUTH_PATH);
        let body = AuthTokenRequest::new(&self.username, &self.password);
        let json = self
            .api_wrapper(Method::POST, &url, &Some(body), vec![])
            .await?;

        let response: AuthTokenResponse = serde_json::from_value(json).map_err(|e| {
            self.span
                .in_scope(|| error!("Malformed token response: {}", e));
            ApiError::from(e)
        })?;

        match response.access_token() {
            Some(token) => {
                self.auth_token = token.to_string();
                self.span.in_scope(|| info!("Auth token updated"));
                Ok(true)
            }
            None => {
                self.span.in_scope(|| error!("No Token received"));
                Ok(false)
            }
        }
    }

    /// Gets the devices bound to the account
    ///
    /// # Returns
    /// * `Ok(Value)` - The device list document as returned by the API
    /// * `Err(ApiError)` - If the request fails
    pub async fn fetch_devices(&self) -> ApiResult<Value> {
        let url = format!("{}{}", self.api_url, ZEN_DEVICELIST_PATH);
        let bearer = self.bearer();
        self.api_wrapper(
            Method::POST,
            &url,
            &None::<()>,
            self.vendor_headers(&bearer),
        )
        .await
    }

    /// Current bearer token, or the `(null)` placeholder before login
    #[must_use]
    pub fn auth_token(&self) -> &str {
        &self.auth_token
    }

    /// Whether a token has been retrieved
    #[must_use]
    pub fn has_auth_token(&self) -> bool {
        self.auth_token != UNSET_AUTH_TOKEN
    }

    /// Account name
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Language sent as `Accept-Language`
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    fn bearer(&self) -> String {
        format!("bearer {}", self.auth_token)
    }

    /// Header set expected by the vendor API on authenticated calls
    fn vendor_headers<'a>(&'a self, bearer: &'a str) -> Vec<(&'a str, &'a str)> {
        vec![
            ("Content-Type", "application/json"),
            ("Accept-Language", self.language.as_str()),
            ("appVersion", APP_VERSION),
            ("User-Agent", USER_AGENT),
            ("Accept", "*/*"),
            ("Authorization", BASIC_AUTHORIZATION),
            ("Blade-Auth", bearer),
        ]
    }

    async fn api_wrapper<B: Serialize>(
        &self,
        method: Method,
        url: &str,
        body: &Option<B>,
        headers: Vec<(&str, &str)>,
    ) -> ApiResult<Value> {
        make_http_request(&self.session, method, url, headers, body, self.timeout)
            .instrument(self.span.clone())
            .await
    }
}

impl fmt::Debug for ZendureApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZendureApiClient")
            .field("username", &self.username)
            .field("language", &self.language)
            .field("api_url", &self.api_url)
            .field("has_auth_token", &self.has_auth_token())
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl ZendureApi for ZendureApiClient {
    async fn fetch_sample_data(&self) -> Result<Value, ApiError> {
        ZendureApiClient::fetch_sample_data(self).await
    }

    async fn set_title(&self, value: &str) -> Result<Value, ApiError> {
        ZendureApiClient::set_title(self, value).await
    }

    async fn fetch_auth_token(&mut self) -> Result<bool, ApiError> {
        ZendureApiClient::fetch_auth_token(self).await
    }

    async fn fetch_devices(&self) -> Result<Value, ApiError> {
        ZendureApiClient::fetch_devices(self).await
    }
}
