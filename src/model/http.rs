/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

use crate::error::{ApiError, ApiResult};
use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error};

/// Makes an HTTP request and returns the decoded JSON body
///
/// This is the single chokepoint for every call to the Zendure API. The whole
/// exchange (send and body decode) runs under `timeout`, and every failure is
/// translated into an [`ApiError`] and logged before it is returned.
///
/// # Arguments
///
/// * `client` - Shared HTTP session to issue the request on
/// * `method` - HTTP method (GET, POST, PATCH, ...)
/// * `url` - Full URL to request
/// * `headers` - Vector of (header_name, header_value) tuples, may be empty
/// * `body` - Optional request body (will be serialized to JSON)
/// * `timeout` - Deadline for the whole exchange
///
/// # Returns
///
/// * `Ok(Value)` - Parsed JSON body of a successful response
/// * `Err(ApiError::Authentication)` - Status 401 or 403
/// * `Err(ApiError::Communication)` - Any other error status, an expired
///   deadline or a network failure
/// * `Err(ApiError::Generic)` - Anything else, e.g. a body that is not JSON
///
/// # Example
///
/// ```ignore
/// use zendure_client::model::http::make_http_request;
/// use reqwest::{Client, Method};
/// use std::time::Duration;
///
/// let client = Client::new();
/// let post = make_http_request(
///     &client,
///     Method::GET,
///     "https://jsonplaceholder.typicode.com/posts/1",
///     vec![],
///     &None::<()>,
///     Duration::from_secs(10),
/// ).await?;
/// ```
pub async fn make_http_request<B: Serialize>(
    client: &Client,
    method: Method,
    url: &str,
    headers: Vec<(&str, &str)>,
    body: &Option<B>,
    timeout: Duration,
) -> ApiResult<Value> {
    debug!("{} {}", method, url);

    let mut request = client.request(method, url);
    for (name, value) in &headers {
        request = request.header(*name, *value);
    }
    if let Some(b) = body {
        request = request.json(b);
    }

    let exchange = async {
        let response = request.send().await.map_err(|e| raise(url, e.into()))?;
        let status = response.status();
        debug!("Response status: {}", status);

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            error!("Invalid credentials for {}: {}", url, status);
            return Err(ApiError::Authentication { status });
        }

        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            error!("Request failed with status {}: {}", status, body_text);
            return Err(ApiError::status(status));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| raise(url, e.into()))
    };

    match tokio::time::timeout(timeout, exchange).await {
        Ok(result) => result,
        Err(elapsed) => Err(raise(url, ApiError::timeout(elapsed))),
    }
}

fn raise(url: &str, err: ApiError) -> ApiError {
    error!("Request to {} failed: {}", url, err);
    err
}
