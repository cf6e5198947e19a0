use serde_json::{Map, Value};

use crate::domain::{AuthKey, DelaySeconds, DeviceId, ImageUrl, MessageText, Receiver, SendMessage};

pub fn encode_send_body(request: &SendMessage, auth_key: &AuthKey) -> Value {
    let mut body = Map::new();
    body.insert(
        MessageText::FIELD.to_owned(),
        Value::from(request.message().as_str()),
    );
    body.insert(
        Receiver::FIELD.to_owned(),
        Value::from(
            request
                .receivers()
                .iter()
                .map(Receiver::as_str)
                .collect::<Vec<_>>(),
        ),
    );
    body.insert(
        DeviceId::FIELD.to_owned(),
        Value::from(
            request
                .device_ids()
                .iter()
                .map(DeviceId::as_str)
                .collect::<Vec<_>>(),
        ),
    );
    body.insert(AuthKey::FIELD.to_owned(), Value::from(auth_key.as_str()));

    let options = request.options();
    if let Some(delay) = options.delay {
        body.insert(DelaySeconds::FIELD.to_owned(), Value::from(delay.value()));
    }
    if let Some(image) = options.image.as_ref() {
        body.insert(ImageUrl::FIELD.to_owned(), Value::from(image.as_str()));
    }

    Value::Object(body)
}
