/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::constants::{DEFAULT_LANGUAGE, DEFAULT_TIMEOUT_SECS, SAMPLE_DATA_URL, ZEN_API_URL};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, error};

const DEFAULT_USERNAME: &str = "default_username";
const DEFAULT_PASSWORD: &str = "default_password";

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Account credentials for the Zendure cloud
pub struct Credentials {
    /// Account name, usually the e-mail address
    pub username: String,
    /// Account password, never serialized
    #[serde(skip_serializing, default)]
    pub password: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL of the vendor API
    pub base_url: String,
    /// URL queried by the sample data call
    pub sample_url: String,
    /// Timeout in seconds for a single request
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the Zendure API client
pub struct Config {
    /// Account credentials
    pub credentials: Credentials,
    /// Language sent as `Accept-Language`
    pub language: String,
    /// REST API configuration
    pub rest_api: RestApiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from the environment
    ///
    /// A `.env` file in the working directory is loaded first if present.
    /// Recognised variables:
    ///
    /// * `ZENDURE_USERNAME`, `ZENDURE_PASSWORD`
    /// * `ZENDURE_LANGUAGE` (default `de-DE`)
    /// * `ZENDURE_API_URL`, `ZENDURE_SAMPLE_URL`
    /// * `ZENDURE_TIMEOUT_SECS` (default 10)
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let username = env_or("ZENDURE_USERNAME", String::from(DEFAULT_USERNAME));
        let password = env_or("ZENDURE_PASSWORD", String::from(DEFAULT_PASSWORD));

        if username == DEFAULT_USERNAME {
            error!("ZENDURE_USERNAME not found in environment variables or .env file");
        }
        if password == DEFAULT_PASSWORD {
            error!("ZENDURE_PASSWORD not found in environment variables or .env file");
        }

        Config {
            credentials: Credentials { username, password },
            language: env_or("ZENDURE_LANGUAGE", String::from(DEFAULT_LANGUAGE)),
            rest_api: RestApiConfig {
                base_url: env_or("ZENDURE_API_URL", String::from(ZEN_API_URL)),
                sample_url: env_or("ZENDURE_SAMPLE_URL", String::from(SAMPLE_DATA_URL)),
                timeout: env_or("ZENDURE_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS),
            },
        }
    }

    /// Creates a configuration for the given account with default endpoints
    pub fn with_credentials(
        username: impl Into<String>,
        password: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Config {
            credentials: Credentials {
                username: username.into(),
                password: password.into(),
            },
            language: language.into(),
            rest_api: RestApiConfig {
                base_url: ZEN_API_URL.to_string(),
                sample_url: SAMPLE_DATA_URL.to_string(),
                timeout: DEFAULT_TIMEOUT_SECS,
            },
        }
    }

    /// Request timeout as a [`Duration`]
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.rest_api.timeout)
    }
}

/// Reads and parses an environment variable, falling back to `default` when
/// it is missing or does not parse
pub fn env_or<T: FromStr>(key: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match env::var(key) {
        Ok(raw) => raw.parse::<T>().unwrap_or_else(|e| {
            error!("Failed to parse {}={:?} ({:?}), using default", key, raw, e);
            default
        }),
        Err(_) => default,
    }
}
