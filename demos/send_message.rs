use std::io;

use smartsms::{ClientConfig, Destination, GatewayClient, MessageText, SendMessage};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("smartsms=debug")),
        )
        .init();

    let destination = std::env::var("SMARTSMS_DESTINATION").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMARTSMS_DESTINATION environment variable is required",
        )
    })?;
    let message = std::env::var("SMARTSMS_MESSAGE")
        .unwrap_or_else(|_| "Hello from the smartsms demo.".to_owned());

    let client = GatewayClient::from_config(ClientConfig::from_env()?)?;
    let request = SendMessage::new(Destination::new(destination)?, MessageText::new(message)?);

    let response = client.send_message(request).await?;
    println!("status: {}, body: {:?}", response.status, response.body);

    Ok(())
}
