use serde_json::json;
use zendure_client::model::responses::AuthTokenResponse;

fn decode(value: serde_json::Value) -> AuthTokenResponse {
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_access_token_present() {
    let response = decode(json!({"code": 200, "data": {"accessToken": "abc123", "expiresIn": 3600}}));
    assert_eq!(response.access_token(), Some("abc123"));
}

#[test]
fn test_access_token_empty_is_none() {
    let response = decode(json!({"data": {"accessToken": ""}}));
    assert_eq!(response.access_token(), None);
}

#[test]
fn test_missing_or_null_fields_are_none() {
    assert_eq!(decode(json!({})).access_token(), None);
    assert_eq!(decode(json!({"data": null})).access_token(), None);
    assert_eq!(decode(json!({"data": {}})).access_token(), None);
    assert_eq!(decode(json!({"data": {"accessToken": null}})).access_token(), None);
}

#[test]
fn test_non_object_response_fails_to_decode() {
    assert!(serde_json::from_value::<AuthTokenResponse>(json!("abc123")).is_err());
}
