use serde_json::{Value, json};

use crate::domain::{AuthKey, DeviceName};

pub fn encode_list_devices_query(auth_key: &AuthKey) -> Vec<(String, String)> {
    vec![(AuthKey::FIELD.to_owned(), auth_key.as_str().to_owned())]
}

pub fn encode_create_device_body(name: &DeviceName, auth_key: &AuthKey) -> Value {
    json!({
        DeviceName::FIELD: name.as_str(),
        AuthKey::FIELD: auth_key.as_str(),
    })
}
