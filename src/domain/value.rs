use crate::domain::validation::ValidationError;

use url::Url;

fn is_auth_key_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-')
}

fn is_device_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, ' ' | '_' | '-')
}

fn is_receiver_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, ' ' | '-' | '(' | ')' | '+')
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// WaSend `auth_key` credential.
///
/// Invariant: trimmed, 10..=255 chars, charset `[A-Za-z0-9._-]`. Immutable for
/// the lifetime of the client that holds it.
pub struct AuthKey(String);

impl AuthKey {
    /// Request field name used by WaSend (`auth_key`).
    pub const FIELD: &'static str = "auth_key";

    /// Minimum allowed key length.
    pub const MIN_LEN: usize = 10;
    /// Maximum allowed key length.
    pub const MAX_LEN: usize = 255;

    const ALLOWED: &'static str = "[A-Za-z0-9._-]";

    /// Create a validated [`AuthKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        let len = trimmed.chars().count();
        if len < Self::MIN_LEN {
            return Err(ValidationError::TooShort {
                field: Self::FIELD,
                min: Self::MIN_LEN,
                actual: len,
            });
        }
        if len > Self::MAX_LEN {
            return Err(ValidationError::TooLong {
                field: Self::FIELD,
                max: Self::MAX_LEN,
                actual: len,
            });
        }
        if !trimmed.chars().all(is_auth_key_char) {
            return Err(ValidationError::BadCharset {
                field: Self::FIELD,
                allowed: Self::ALLOWED,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Display name for a device to be linked (`name`).
///
/// Invariant: trimmed, 3..=50 chars, charset `[A-Za-z0-9 _-]`.
pub struct DeviceName(String);

impl DeviceName {
    /// Request field name used by WaSend (`name`).
    pub const FIELD: &'static str = "name";

    /// Minimum allowed name length.
    pub const MIN_LEN: usize = 3;
    /// Maximum allowed name length.
    pub const MAX_LEN: usize = 50;

    const ALLOWED: &'static str = "[A-Za-z0-9 _-]";

    /// Create a validated [`DeviceName`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        let len = trimmed.chars().count();
        if len < Self::MIN_LEN {
            return Err(ValidationError::TooShort {
                field: Self::FIELD,
                min: Self::MIN_LEN,
                actual: len,
            });
        }
        if len > Self::MAX_LEN {
            return Err(ValidationError::TooLong {
                field: Self::FIELD,
                max: Self::MAX_LEN,
                actual: len,
            });
        }
        if !trimmed.chars().all(is_device_name_char) {
            return Err(ValidationError::BadCharset {
                field: Self::FIELD,
                allowed: Self::ALLOWED,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Message body (`message`).
///
/// Invariant: trimmed, 3..=4096 chars after trimming. The trimmed value is
/// what goes on the wire.
pub struct MessageText(String);

impl MessageText {
    /// Request field name used by WaSend (`message`).
    pub const FIELD: &'static str = "message";

    /// Minimum allowed message length.
    pub const MIN_LEN: usize = 3;
    /// Maximum allowed message length.
    pub const MAX_LEN: usize = 4096;

    /// Create validated message text.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        let len = trimmed.chars().count();
        if len < Self::MIN_LEN {
            return Err(ValidationError::TooShort {
                field: Self::FIELD,
                min: Self::MIN_LEN,
                actual: len,
            });
        }
        if len > Self::MAX_LEN {
            return Err(ValidationError::TooLong {
                field: Self::FIELD,
                max: Self::MAX_LEN,
                actual: len,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the trimmed message text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Destination phone number (`receivers` entry).
///
/// Invariant: trimmed, 5..=20 chars, charset `[0-9 \-()+]`. This type does not
/// normalize; the gateway accepts numbers in local formats.
pub struct Receiver(String);

impl Receiver {
    /// Request field name used by WaSend (`receivers`).
    pub const FIELD: &'static str = "receivers";

    /// Minimum allowed number length.
    pub const MIN_LEN: usize = 5;
    /// Maximum allowed number length.
    pub const MAX_LEN: usize = 20;

    const ALLOWED: &'static str = "[0-9 \\-()+]";

    /// Create a validated [`Receiver`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        let len = trimmed.chars().count();
        if len < Self::MIN_LEN {
            return Err(ValidationError::TooShort {
                field: Self::FIELD,
                min: Self::MIN_LEN,
                actual: len,
            });
        }
        if len > Self::MAX_LEN {
            return Err(ValidationError::TooLong {
                field: Self::FIELD,
                max: Self::MAX_LEN,
                actual: len,
            });
        }
        if !trimmed.chars().all(is_receiver_char) {
            return Err(ValidationError::BadCharset {
                field: Self::FIELD,
                allowed: Self::ALLOWED,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Like [`Receiver::new`], but errors name the entry's position in a list.
    pub(crate) fn new_at(index: usize, value: &str) -> Result<Self, ValidationError> {
        match Self::new(value) {
            Ok(receiver) => Ok(receiver),
            Err(ValidationError::TooShort { min, actual, .. }) => {
                Err(ValidationError::EntryTooShort {
                    field: Self::FIELD,
                    index,
                    min,
                    actual,
                })
            }
            Err(ValidationError::TooLong { max, actual, .. }) => {
                Err(ValidationError::EntryTooLong {
                    field: Self::FIELD,
                    index,
                    max,
                    actual,
                })
            }
            Err(ValidationError::BadCharset { allowed, .. }) => {
                Err(ValidationError::EntryBadCharset {
                    field: Self::FIELD,
                    index,
                    allowed,
                })
            }
            Err(err) => Err(err),
        }
    }

    /// Borrow the validated number.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Opaque id of a linked device (`device_ids` entry).
///
/// Invariant: trimmed, non-blank, 3..=100 chars.
pub struct DeviceId(String);

impl DeviceId {
    /// Request field name used by WaSend (`device_ids`).
    pub const FIELD: &'static str = "device_ids";

    /// Minimum allowed id length.
    pub const MIN_LEN: usize = 3;
    /// Maximum allowed id length.
    pub const MAX_LEN: usize = 100;

    /// Create a validated [`DeviceId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        let len = trimmed.chars().count();
        if len < Self::MIN_LEN {
            return Err(ValidationError::TooShort {
                field: Self::FIELD,
                min: Self::MIN_LEN,
                actual: len,
            });
        }
        if len > Self::MAX_LEN {
            return Err(ValidationError::TooLong {
                field: Self::FIELD,
                max: Self::MAX_LEN,
                actual: len,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Like [`DeviceId::new`], but errors name the entry's position in a list.
    pub(crate) fn new_at(index: usize, value: &str) -> Result<Self, ValidationError> {
        match Self::new(value) {
            Ok(id) => Ok(id),
            Err(ValidationError::Empty { .. }) => Err(ValidationError::EntryEmpty {
                field: Self::FIELD,
                index,
            }),
            Err(ValidationError::TooShort { min, actual, .. }) => {
                Err(ValidationError::EntryTooShort {
                    field: Self::FIELD,
                    index,
                    min,
                    actual,
                })
            }
            Err(ValidationError::TooLong { max, actual, .. }) => {
                Err(ValidationError::EntryTooLong {
                    field: Self::FIELD,
                    index,
                    max,
                    actual,
                })
            }
            Err(err) => Err(err),
        }
    }

    /// Borrow the validated id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Per-receiver send delay in seconds (`delay_time`).
///
/// Invariant: `0..=3600`.
pub struct DelaySeconds(u16);

impl DelaySeconds {
    /// Request field name used by WaSend (`delay_time`).
    pub const FIELD: &'static str = "delay_time";

    /// Minimum allowed delay value.
    pub const MIN: i64 = 0;
    /// Maximum allowed delay value.
    pub const MAX: i64 = 3600;

    /// Create a validated delay value.
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::DelayOutOfRange {
                min: Self::MIN,
                max: Self::MAX,
                actual: value,
            });
        }
        Ok(Self(value as u16))
    }

    /// Get the underlying delay in seconds.
    pub fn value(self) -> u16 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Public URL of an image to attach to a message (`image`).
///
/// Invariant: trimmed, non-empty, at most 2048 chars, well-formed `http`/`https`
/// URL. If the last path segment carries a file extension it must be one of
/// [`ImageUrl::ALLOWED_EXTENSIONS`]; extension-less paths are accepted.
///
/// Only the format is checked here; whether the URL actually serves an image is
/// up to the gateway (or the client's opt-in reachability probe).
pub struct ImageUrl(String);

impl ImageUrl {
    /// Request field name used by WaSend (`image`).
    pub const FIELD: &'static str = "image";

    /// Maximum allowed URL length.
    pub const MAX_LEN: usize = 2048;

    /// File extensions accepted when the URL path carries one.
    pub const ALLOWED_EXTENSIONS: &'static [&'static str] =
        &["jpg", "jpeg", "png", "gif", "webp", "bmp", "svg"];

    /// Create a validated [`ImageUrl`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        let len = trimmed.chars().count();
        if len > Self::MAX_LEN {
            return Err(ValidationError::ImageUrlTooLong {
                max: Self::MAX_LEN,
                actual: len,
            });
        }
        let parsed = Url::parse(trimmed).map_err(|_| ValidationError::ImageUrlMalformed {
            input: trimmed.to_owned(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ValidationError::ImageUrlScheme {
                scheme: parsed.scheme().to_owned(),
            });
        }
        if let Some(extension) = path_extension(&parsed) {
            if !Self::ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
                return Err(ValidationError::ImageUrlExtension { extension });
            }
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated URL.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Lowercased extension of the last path segment, if the segment has one.
///
/// `/pic.PNG` -> `png`, `/pic` -> `None`, `/.hidden` -> `None` (dotfile, not an
/// extension), `/pic.` -> `None`.
fn path_extension(url: &Url) -> Option<String> {
    let segment = url.path_segments().and_then(Iterator::last)?;
    let (stem, extension) = segment.rsplit_once('.')?;
    if stem.is_empty() || extension.is_empty() {
        return None;
    }
    Some(extension.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_key_enforces_length_and_charset() {
        let key = AuthKey::new("  abcdef1234  ").unwrap();
        assert_eq!(key.as_str(), "abcdef1234");

        assert!(matches!(
            AuthKey::new("   "),
            Err(ValidationError::Empty {
                field: AuthKey::FIELD
            })
        ));
        assert!(matches!(
            AuthKey::new("short"),
            Err(ValidationError::TooShort { min: 10, .. })
        ));
        assert!(matches!(
            AuthKey::new("a".repeat(256)),
            Err(ValidationError::TooLong { max: 255, .. })
        ));
        assert!(matches!(
            AuthKey::new("abcdef 1234"),
            Err(ValidationError::BadCharset { .. })
        ));
        assert!(AuthKey::new("abc.def_12-34").is_ok());
    }

    #[test]
    fn device_name_enforces_length_and_charset() {
        let name = DeviceName::new("  Work Phone 1  ").unwrap();
        assert_eq!(name.as_str(), "Work Phone 1");

        assert!(matches!(
            DeviceName::new("ab"),
            Err(ValidationError::TooShort { min: 3, .. })
        ));
        assert!(matches!(
            DeviceName::new("a".repeat(51)),
            Err(ValidationError::TooLong { max: 50, .. })
        ));
        assert!(matches!(
            DeviceName::new("nope!"),
            Err(ValidationError::BadCharset { .. })
        ));
        assert!(DeviceName::new("dev_1-primary").is_ok());
    }

    #[test]
    fn message_text_trims_and_enforces_bounds() {
        let msg = MessageText::new("  hello  ").unwrap();
        assert_eq!(msg.as_str(), "hello");

        assert!(matches!(
            MessageText::new("  hi  "),
            Err(ValidationError::TooShort { min: 3, .. })
        ));
        assert!(MessageText::new("x".repeat(4096)).is_ok());
        assert!(matches!(
            MessageText::new("x".repeat(4097)),
            Err(ValidationError::TooLong { max: 4096, .. })
        ));
    }

    #[test]
    fn receiver_enforces_length_and_charset() {
        let phone = Receiver::new(" +1 (555) 123-4567 ").unwrap();
        assert_eq!(phone.as_str(), "+1 (555) 123-4567");

        assert!(matches!(
            Receiver::new("1234"),
            Err(ValidationError::TooShort { min: 5, .. })
        ));
        assert!(matches!(
            Receiver::new("1".repeat(21)),
            Err(ValidationError::TooLong { max: 20, .. })
        ));
        assert!(matches!(
            Receiver::new("+1555x23456"),
            Err(ValidationError::BadCharset { .. })
        ));
    }

    #[test]
    fn receiver_new_at_carries_index() {
        assert!(matches!(
            Receiver::new_at(2, "123"),
            Err(ValidationError::EntryTooShort {
                field: Receiver::FIELD,
                index: 2,
                min: 5,
                actual: 3,
            })
        ));
        assert!(matches!(
            Receiver::new_at(0, "abcdef"),
            Err(ValidationError::EntryBadCharset { index: 0, .. })
        ));
    }

    #[test]
    fn device_id_enforces_bounds() {
        let id = DeviceId::new(" dev-1 ").unwrap();
        assert_eq!(id.as_str(), "dev-1");

        assert!(matches!(
            DeviceId::new("   "),
            Err(ValidationError::Empty {
                field: DeviceId::FIELD
            })
        ));
        assert!(matches!(
            DeviceId::new("ab"),
            Err(ValidationError::TooShort { min: 3, .. })
        ));
        assert!(matches!(
            DeviceId::new("a".repeat(101)),
            Err(ValidationError::TooLong { max: 100, .. })
        ));
    }

    #[test]
    fn device_id_new_at_carries_index() {
        assert!(matches!(
            DeviceId::new_at(1, "  "),
            Err(ValidationError::EntryEmpty {
                field: DeviceId::FIELD,
                index: 1,
            })
        ));
        assert!(matches!(
            DeviceId::new_at(3, "xy"),
            Err(ValidationError::EntryTooShort { index: 3, .. })
        ));
    }

    #[test]
    fn delay_seconds_enforces_range() {
        assert!(DelaySeconds::new(0).is_ok());
        assert_eq!(DelaySeconds::new(3600).unwrap().value(), 3600);
        assert!(matches!(
            DelaySeconds::new(3601),
            Err(ValidationError::DelayOutOfRange { actual: 3601, .. })
        ));
        assert!(matches!(
            DelaySeconds::new(-1),
            Err(ValidationError::DelayOutOfRange { actual: -1, .. })
        ));
    }

    #[test]
    fn image_url_accepts_http_and_known_extensions() {
        let url = ImageUrl::new(" https://cdn.example.com/pics/cat.PNG ").unwrap();
        assert_eq!(url.as_str(), "https://cdn.example.com/pics/cat.PNG");

        assert!(ImageUrl::new("http://cdn.example.com/pics/cat").is_ok());
        assert!(ImageUrl::new("https://cdn.example.com/render?id=42").is_ok());
    }

    #[test]
    fn image_url_rejects_bad_input() {
        assert!(matches!(
            ImageUrl::new(""),
            Err(ValidationError::Empty {
                field: ImageUrl::FIELD
            })
        ));
        assert!(matches!(
            ImageUrl::new(format!("https://example.com/{}", "a".repeat(2048))),
            Err(ValidationError::ImageUrlTooLong { max: 2048, .. })
        ));
        assert!(matches!(
            ImageUrl::new("not a url"),
            Err(ValidationError::ImageUrlMalformed { .. })
        ));
        assert!(matches!(
            ImageUrl::new("ftp://example.com/cat.png"),
            Err(ValidationError::ImageUrlScheme { .. })
        ));
        assert!(matches!(
            ImageUrl::new("https://example.com/payload.exe"),
            Err(ValidationError::ImageUrlExtension { extension }) if extension == "exe"
        ));
    }

    #[test]
    fn path_extension_ignores_dotfiles_and_trailing_dots() {
        let url = Url::parse("https://example.com/a/.hidden").unwrap();
        assert_eq!(path_extension(&url), None);

        let url = Url::parse("https://example.com/a/pic.").unwrap();
        assert_eq!(path_extension(&url), None);

        let url = Url::parse("https://example.com/a/pic.JPEG").unwrap();
        assert_eq!(path_extension(&url), Some("jpeg".to_owned()));
    }
}
