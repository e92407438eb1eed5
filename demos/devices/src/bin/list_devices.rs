use zendure_client::prelude::*;
use tracing::{error, info, info_span};

/// Logs in with the account from the environment and prints its devices
///
/// Configure via environment variables or a `.env` file:
/// - ZENDURE_USERNAME
/// - ZENDURE_PASSWORD
/// - ZENDURE_LANGUAGE (default: de-DE)
///
/// Run with: cargo run --bin list_devices
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let config = Config::new();
    info!("Using configuration: {}", config);

    let session = reqwest::Client::new();
    let mut client = ZendureApiClient::from_config(&config, session)
        .with_span(info_span!("zendure", account = %config.credentials.username));

    match client.fetch_auth_token().await {
        Ok(true) => info!("✓ Logged in"),
        Ok(false) => {
            error!("Login answered without a token");
            return Ok(());
        }
        Err(e) if e.is_authentication() => {
            error!("Wrong credentials: {}", e);
            return Err(e.into());
        }
        Err(e) => return Err(e.into()),
    }

    let devices = client.fetch_devices().await?;
    info!("Devices: {}", serde_json::to_string_pretty(&devices)?);

    Ok(())
}
