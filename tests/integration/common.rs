// Common utilities for integration tests

use zendure_client::prelude::*;

/// Creates a client from the environment (`ZENDURE_USERNAME`, `ZENDURE_PASSWORD`, ...)
pub fn create_test_client() -> ZendureApiClient {
    setup_logger();
    let config = Config::new();
    ZendureApiClient::from_config(&config, reqwest::Client::new())
}
