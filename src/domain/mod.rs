//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{SEND_MAX_DEVICE_IDS, SEND_MAX_RECEIVERS, SendMessage, SendOptions};
pub use response::ApiBody;
pub use validation::ValidationError;
pub use value::{AuthKey, DelaySeconds, DeviceId, DeviceName, ImageUrl, MessageText, Receiver};
