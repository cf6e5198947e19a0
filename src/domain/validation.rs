use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty {
        field: &'static str,
    },
    TooShort {
        field: &'static str,
        min: usize,
        actual: usize,
    },
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },
    BadCharset {
        field: &'static str,
        allowed: &'static str,
    },
    TooManyEntries {
        field: &'static str,
        max: usize,
        actual: usize,
    },
    EntryEmpty {
        field: &'static str,
        index: usize,
    },
    EntryTooShort {
        field: &'static str,
        index: usize,
        min: usize,
        actual: usize,
    },
    EntryTooLong {
        field: &'static str,
        index: usize,
        max: usize,
        actual: usize,
    },
    EntryBadCharset {
        field: &'static str,
        index: usize,
        allowed: &'static str,
    },
    DuplicateEntry {
        field: &'static str,
        index: usize,
        value: String,
    },
    DelayOutOfRange {
        min: i64,
        max: i64,
        actual: i64,
    },
    ImageUrlTooLong {
        max: usize,
        actual: usize,
    },
    ImageUrlMalformed {
        input: String,
    },
    ImageUrlScheme {
        scheme: String,
    },
    ImageUrlExtension {
        extension: String,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::TooShort { field, min, actual } => {
                write!(f, "{field} is too short: {actual} chars (min {min})")
            }
            Self::TooLong { field, max, actual } => {
                write!(f, "{field} is too long: {actual} chars (max {max})")
            }
            Self::BadCharset { field, allowed } => {
                write!(f, "{field} contains characters outside {allowed}")
            }
            Self::TooManyEntries { field, max, actual } => {
                write!(f, "too many {field} entries: {actual} (max {max})")
            }
            Self::EntryEmpty { field, index } => {
                write!(f, "{field} at index {index} must not be blank")
            }
            Self::EntryTooShort {
                field,
                index,
                min,
                actual,
            } => {
                write!(
                    f,
                    "{field} at index {index} is too short: {actual} chars (min {min})"
                )
            }
            Self::EntryTooLong {
                field,
                index,
                max,
                actual,
            } => {
                write!(
                    f,
                    "{field} at index {index} is too long: {actual} chars (max {max})"
                )
            }
            Self::EntryBadCharset {
                field,
                index,
                allowed,
            } => {
                write!(
                    f,
                    "{field} at index {index} contains characters outside {allowed}"
                )
            }
            Self::DuplicateEntry {
                field,
                index,
                value,
            } => {
                write!(f, "duplicate {field} at index {index}: {value}")
            }
            Self::DelayOutOfRange { min, max, actual } => {
                write!(
                    f,
                    "delay_time out of range: {actual} (expected {min}..={max})"
                )
            }
            Self::ImageUrlTooLong { max, actual } => {
                write!(f, "image url is too long: {actual} chars (max {max})")
            }
            Self::ImageUrlMalformed { input } => write!(f, "image url is malformed: {input}"),
            Self::ImageUrlScheme { scheme } => {
                write!(f, "image url scheme must be http or https, got {scheme}")
            }
            Self::ImageUrlExtension { extension } => {
                write!(f, "image url extension is not an image type: {extension}")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
