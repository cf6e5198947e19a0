//! Typed Rust client for the WaSend messaging gateway HTTP API.
//!
//! The design follows three small layers: a domain layer of strong types that
//! reject malformed input before any network I/O, a transport layer for the
//! wire format, and a client layer orchestrating requests and classifying the
//! gateway's free-text errors into typed kinds.
//!
//! ```rust,no_run
//! use wasend::{AuthKey, SendMessage, SendOptions, WasendClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), wasend::WasendError> {
//!     let client = WasendClient::new(AuthKey::new("your-auth-key-here")?);
//!     let request = SendMessage::new(
//!         "hello from wasend",
//!         vec!["+1234567890".to_owned()],
//!         vec!["dev-1".to_owned()],
//!         SendOptions::default(),
//!     )?;
//!     let body = client.send(request).await?;
//!     println!("{:?}", body.get("data"));
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{ApiErrorKind, WasendClient, WasendClientBuilder, WasendError};
pub use domain::{
    ApiBody, AuthKey, DelaySeconds, DeviceId, DeviceName, ImageUrl, MessageText, Receiver,
    SEND_MAX_DEVICE_IDS, SEND_MAX_RECEIVERS, SendMessage, SendOptions, ValidationError,
};
