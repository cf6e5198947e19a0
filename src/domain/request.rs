use std::collections::HashSet;

use crate::domain::validation::ValidationError;
use crate::domain::value::{DelaySeconds, DeviceId, ImageUrl, MessageText, Receiver};

pub const SEND_MAX_RECEIVERS: usize = 1000;
pub const SEND_MAX_DEVICE_IDS: usize = 10;

#[derive(Debug, Clone, Default)]
pub struct SendOptions {
    pub delay: Option<DelaySeconds>,
    pub image: Option<ImageUrl>,
}

#[derive(Debug, Clone)]
/// A fully validated `POST /sender` payload.
///
/// Construction performs the whole cleaning pipeline: the message is trimmed,
/// blank receiver entries are dropped and the survivors re-indexed, device ids
/// are trimmed but never dropped, and duplicates are rejected. A value of this
/// type is always safe to put on the wire.
pub struct SendMessage {
    message: MessageText,
    receivers: Vec<Receiver>,
    device_ids: Vec<DeviceId>,
    options: SendOptions,
}

impl SendMessage {
    /// Validate a raw payload.
    ///
    /// The sub-checks run in order (message, receivers, device ids) and stop at
    /// the first failure. Receiver entries that are blank after trimming are
    /// filtered out before any per-entry check; error indices refer to the
    /// filtered list. Device id entries are never filtered and blanks are
    /// rejected; their duplicate check compares the raw entries as given.
    pub fn new(
        message: impl Into<String>,
        receivers: Vec<String>,
        device_ids: Vec<String>,
        options: SendOptions,
    ) -> Result<Self, ValidationError> {
        let message = MessageText::new(message)?;
        let receivers = validate_receivers(&receivers)?;
        let device_ids = validate_device_ids(&device_ids)?;
        Ok(Self {
            message,
            receivers,
            device_ids,
            options,
        })
    }

    pub fn message(&self) -> &MessageText {
        &self.message
    }

    pub fn receivers(&self) -> &[Receiver] {
        &self.receivers
    }

    pub fn device_ids(&self) -> &[DeviceId] {
        &self.device_ids
    }

    pub fn options(&self) -> &SendOptions {
        &self.options
    }
}

fn validate_receivers(entries: &[String]) -> Result<Vec<Receiver>, ValidationError> {
    let survivors: Vec<&str> = entries
        .iter()
        .map(|entry| entry.trim())
        .filter(|entry| !entry.is_empty())
        .collect();

    if survivors.is_empty() {
        return Err(ValidationError::Empty {
            field: Receiver::FIELD,
        });
    }
    if survivors.len() > SEND_MAX_RECEIVERS {
        return Err(ValidationError::TooManyEntries {
            field: Receiver::FIELD,
            max: SEND_MAX_RECEIVERS,
            actual: survivors.len(),
        });
    }

    let mut seen = HashSet::<&str>::with_capacity(survivors.len());
    let mut receivers = Vec::with_capacity(survivors.len());
    for (index, entry) in survivors.into_iter().enumerate() {
        let receiver = Receiver::new_at(index, entry)?;
        if !seen.insert(entry) {
            return Err(ValidationError::DuplicateEntry {
                field: Receiver::FIELD,
                index,
                value: entry.to_owned(),
            });
        }
        receivers.push(receiver);
    }
    Ok(receivers)
}

fn validate_device_ids(entries: &[String]) -> Result<Vec<DeviceId>, ValidationError> {
    if entries.is_empty() {
        return Err(ValidationError::Empty {
            field: DeviceId::FIELD,
        });
    }
    if entries.len() > SEND_MAX_DEVICE_IDS {
        return Err(ValidationError::TooManyEntries {
            field: DeviceId::FIELD,
            max: SEND_MAX_DEVICE_IDS,
            actual: entries.len(),
        });
    }

    // Duplicates are detected on the entries exactly as given, before trimming.
    let mut seen = HashSet::<&str>::with_capacity(entries.len());
    let mut device_ids = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let id = DeviceId::new_at(index, entry)?;
        if !seen.insert(entry.as_str()) {
            return Err(ValidationError::DuplicateEntry {
                field: DeviceId::FIELD,
                index,
                value: entry.clone(),
            });
        }
        device_ids.push(id);
    }
    Ok(device_ids)
}
