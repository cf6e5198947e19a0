use std::io;

use wasend::{AuthKey, SendMessage, SendOptions, WasendClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let auth_key = std::env::var("WASEND_AUTH_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "WASEND_AUTH_KEY environment variable is required",
        )
    })?;
    let receiver = std::env::var("WASEND_RECEIVER").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "WASEND_RECEIVER environment variable is required",
        )
    })?;
    let device_id = std::env::var("WASEND_DEVICE_ID").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "WASEND_DEVICE_ID environment variable is required",
        )
    })?;
    let message = std::env::var("WASEND_MESSAGE")
        .unwrap_or_else(|_| "Hello from the wasend demo.".to_owned());

    let client = WasendClient::new(AuthKey::new(auth_key)?);
    let request = SendMessage::new(
        message,
        vec![receiver],
        vec![device_id],
        SendOptions::default(),
    )?;

    let body = client.send(request).await?;
    println!("sent: {:#?}", body.fields());

    Ok(())
}
