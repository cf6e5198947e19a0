//! Transport layer: wire-format details (request encoding, envelope decoding).

mod devices;
mod envelope;
mod send_message;

pub use devices::{encode_create_device_body, encode_list_devices_query};
pub use envelope::{Envelope, TransportError, decode_envelope};
pub use send_message::encode_send_body;
