use crate::common;
use tracing::info;

#[tokio::test]
#[ignore]
async fn test_login_and_list_devices() {
    let mut client = common::create_test_client();

    let updated = client
        .fetch_auth_token()
        .await
        .expect("login request should succeed");
    assert!(updated, "a token should be returned for valid credentials");
    assert!(client.has_auth_token());

    let devices = client
        .fetch_devices()
        .await
        .expect("device list should be returned");
    info!("Devices: {}", devices);
}

#[tokio::test]
#[ignore]
async fn test_sample_data() {
    let client = common::create_test_client();
    let post = client.fetch_sample_data().await.expect("sample data");
    assert_eq!(post["id"], 1);
}
