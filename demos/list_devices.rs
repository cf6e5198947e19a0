use std::io;

use wasend::{AuthKey, WasendClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let auth_key = std::env::var("WASEND_AUTH_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "WASEND_AUTH_KEY environment variable is required",
        )
    })?;

    let client = WasendClient::new(AuthKey::new(auth_key)?);
    let body = client.list_devices().await?;
    println!("devices: {:#?}", body.fields());

    Ok(())
}
