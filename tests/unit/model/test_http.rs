use assert_json_diff::assert_json_eq;
use mockito::{Matcher, Server};
use reqwest::{Client, Method, StatusCode};
use serde_json::json;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing_test::traced_test;
use zendure_client::error::{ApiError, CommunicationReason};
use zendure_client::model::http::make_http_request;

const TIMEOUT: Duration = Duration::from_secs(10);

async fn get(url: &str) -> Result<serde_json::Value, ApiError> {
    make_http_request(&Client::new(), Method::GET, url, vec![], &None::<()>, TIMEOUT).await
}

#[tokio::test]
async fn test_success_returns_parsed_json() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/posts/1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"id": 1, "title": "hello"}).to_string())
        .create_async()
        .await;

    let value = get(&format!("{}/posts/1", server.url())).await.unwrap();

    assert_json_eq!(value, json!({"id": 1, "title": "hello"}));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_headers_and_body_are_sent() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PATCH", "/")
        .match_header("accept-language", "fr-FR")
        .match_header("blade-auth", "bearer token")
        .match_body(Matcher::Json(json!({"title": "new"})))
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let result = make_http_request(
        &Client::new(),
        Method::PATCH,
        &server.url(),
        vec![("Accept-Language", "fr-FR"), ("Blade-Auth", "bearer token")],
        &Some(json!({"title": "new"})),
        TIMEOUT,
    )
    .await;

    assert!(result.is_ok());
    mock.assert_async().await;
}

#[tokio::test]
#[traced_test]
async fn test_unauthorized_is_authentication_error() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/")
        .with_status(401)
        .create_async()
        .await;

    let err = get(&server.url()).await.unwrap_err();

    assert!(matches!(
        err,
        ApiError::Authentication { status } if status == StatusCode::UNAUTHORIZED
    ));
    assert!(logs_contain("Invalid credentials"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_forbidden_is_authentication_error() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/")
        .with_status(403)
        .with_body(r#"{"msg":"denied"}"#)
        .create_async()
        .await;

    let err = get(&server.url()).await.unwrap_err();

    assert!(err.is_authentication());
    assert_eq!(err.status_code(), Some(StatusCode::FORBIDDEN));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_other_error_statuses_are_communication_errors() {
    for status in [400_usize, 404, 429, 500, 503] {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/")
            .with_status(status)
            .with_body("nope")
            .create_async()
            .await;

        let err = get(&server.url()).await.unwrap_err();

        assert!(!err.is_authentication(), "status {status}");
        assert_eq!(
            err.reason(),
            Some(CommunicationReason::Status(
                StatusCode::from_u16(status as u16).unwrap()
            )),
            "status {status}"
        );
        mock.assert_async().await;
    }
}

#[tokio::test]
async fn test_deadline_is_communication_timeout() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    // Accept the connection and never answer.
    let silent = tokio::spawn(async move {
        let (socket, _) = listener.accept().await.unwrap();
        tokio::time::sleep(Duration::from_secs(30)).await;
        drop(socket);
    });

    let err = make_http_request(
        &Client::new(),
        Method::GET,
        &format!("http://{addr}/"),
        vec![],
        &None::<()>,
        Duration::from_millis(200),
    )
    .await
    .unwrap_err();

    assert!(err.is_timeout());
    assert!(err.is_communication());
    assert!(!err.is_authentication());
    silent.abort();
}

#[tokio::test]
async fn test_session_timeout_is_communication_timeout() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let silent = tokio::spawn(async move {
        let (socket, _) = listener.accept().await.unwrap();
        tokio::time::sleep(Duration::from_secs(30)).await;
        drop(socket);
    });

    let session = Client::builder()
        .timeout(Duration::from_millis(100))
        .build()
        .unwrap();
    let err = make_http_request(
        &session,
        Method::GET,
        &format!("http://{addr}/"),
        vec![],
        &None::<()>,
        TIMEOUT,
    )
    .await
    .unwrap_err();

    assert_eq!(err.reason(), Some(CommunicationReason::Timeout));
    silent.abort();
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = get(&format!("http://{addr}/")).await.unwrap_err();

    assert_eq!(err.reason(), Some(CommunicationReason::Network));
    assert!(std::error::Error::source(&err).is_some());
}

#[tokio::test]
async fn test_non_json_body_is_generic_error() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/")
        .with_status(200)
        .with_body("<html>maintenance</html>")
        .create_async()
        .await;

    let err = get(&server.url()).await.unwrap_err();

    assert!(matches!(err, ApiError::Generic(_)));
    assert!(!err.is_communication());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_invalid_header_value_is_generic_error() {
    let server = Server::new_async().await;

    let err = make_http_request(
        &Client::new(),
        Method::GET,
        &server.url(),
        vec![("Accept-Language", "de\nDE")],
        &None::<()>,
        TIMEOUT,
    )
    .await
    .unwrap_err();

    assert!(matches!(err, ApiError::Generic(_)));
}
