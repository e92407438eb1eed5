use zendure_client::prelude::*;
use tracing::info;

/// Fetches the placeholder document, useful to check connectivity
///
/// Run with: cargo run --bin sample_data
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let config = Config::new();
    let client = ZendureApiClient::from_config(&config, reqwest::Client::new());

    let post = client.fetch_sample_data().await?;
    info!("Sample data: {:#}", post);

    Ok(())
}
