//! Maps the gateway's free-text error messages onto typed kinds.
//!
//! The gateway reports failures as prose, not structured codes, so the client
//! matches substrings of the lowercased message, first match wins. The whole
//! table lives behind [`classify`]; if the gateway ever grows structured error
//! codes, this is the only place that needs to change.

/// Closed set of error kinds the gateway is known to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ApiErrorKind {
    /// The account behind the auth key does not exist.
    UserNotFound,
    /// The account's subscription has lapsed.
    SubscriptionExpired,
    /// A referenced device id is unknown to the gateway.
    DeviceNotFound,
    /// A plan or rate limit was exceeded.
    LimitExceeded,
    /// The auth key was rejected.
    AuthKeyInvalid,
    /// The attached image URL was rejected.
    InvalidImage,
    /// The gateway rejected the payload as invalid.
    ValidationFailed,
    /// Anything the table does not recognize.
    Generic,
}

const FETCH_FAILED_HINT: &str = "The image URL could not be fetched. Make sure it is publicly \
     accessible and responds without authentication.";
const NOT_AN_IMAGE_HINT: &str = "The URL does not point to an image. Use a direct link to a \
     JPG, JPEG, PNG, GIF, WEBP, BMP, or SVG file.";
const IMAGE_REJECTED_HINT: &str = "The image URL was rejected by the gateway. Check that it is \
     a valid, publicly reachable image link.";

/// Classify a raw gateway error message.
///
/// Returns the kind and the message to surface to the caller. The message is
/// passed through unchanged except for [`ApiErrorKind::InvalidImage`], where
/// the gateway's terse phrasing is replaced with a fuller explanation of what
/// to fix.
pub(crate) fn classify(message: &str) -> (ApiErrorKind, String) {
    let lowered = message.to_lowercase();

    if lowered.contains("user not found") {
        return (ApiErrorKind::UserNotFound, message.to_owned());
    }
    if lowered.contains("subscription expired") {
        return (ApiErrorKind::SubscriptionExpired, message.to_owned());
    }
    if lowered.contains("device") && lowered.contains("not found") {
        return (ApiErrorKind::DeviceNotFound, message.to_owned());
    }
    if lowered.contains("limit") && lowered.contains("exceed") {
        return (ApiErrorKind::LimitExceeded, message.to_owned());
    }
    if lowered.contains("auth key not valid") {
        return (ApiErrorKind::AuthKeyInvalid, message.to_owned());
    }
    if lowered.contains("failed to fetch image url") {
        return (ApiErrorKind::InvalidImage, FETCH_FAILED_HINT.to_owned());
    }
    if lowered.contains("url does not point to an image") {
        return (ApiErrorKind::InvalidImage, NOT_AN_IMAGE_HINT.to_owned());
    }
    if lowered.contains("image url") {
        return (ApiErrorKind::InvalidImage, IMAGE_REJECTED_HINT.to_owned());
    }
    if lowered.contains("validation") {
        return (ApiErrorKind::ValidationFailed, message.to_owned());
    }

    (ApiErrorKind::Generic, message.to_owned())
}
