//! Error types for the daytype-codec crate.

use daytype_calendar::Day;

use crate::path::CodingPath;

/// Reason reported when a formatted string does not match its pattern.
pub const UNREADABLE_DATE_STRING: &str = "Unable to read the date string.";

/// Reason reported when an epoch field holds something other than a number.
pub const EXPECTED_EPOCH: &str = "Unable to read a Day value, expected an epoch.";

/// Reason reported when an ISO 8601 field cannot be parsed.
pub const EXPECTED_ISO8601: &str = "Unable to read a Day value, expected a valid ISO8601 string.";

/// Reason reported when a day-count field holds something other than an integer.
pub const EXPECTED_DAY_COUNT: &str = "Unable to read a Day value, expected a day count.";

/// Error type for all fallible operations in the daytype-codec crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CodecError {
    /// Returned when a value is present but does not have the expected
    /// shape or content.
    #[error("invalid format at {path}: {reason}")]
    InvalidFormat {
        /// Where the value was found.
        path: CodingPath,
        /// Human-readable description of what was expected.
        reason: String,
    },

    /// Returned when a required key is absent from a keyed container.
    #[error("missing key at {path}")]
    MissingKey {
        /// Path of the absent key.
        path: CodingPath,
    },

    /// Returned when a day cannot be written in the requested shape, for
    /// example a year the ISO renderer cannot represent.
    #[error("cannot encode day {} at {path}", .day.components())]
    Unrepresentable {
        /// Where the value was being written.
        path: CodingPath,
        /// The day that could not be encoded.
        day: Day,
    },

    /// Returned when a date pattern is malformed or lacks a year, month or
    /// day field.
    #[error("invalid pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// The pattern as written.
        pattern: String,
        /// What is wrong with it.
        reason: String,
    },

    /// Returned when a codec configuration is rejected.
    #[error("invalid config: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },
}

impl CodecError {
    pub(crate) fn invalid_format(path: &CodingPath, reason: &str) -> Self {
        CodecError::InvalidFormat {
            path: path.clone(),
            reason: reason.to_owned(),
        }
    }

    /// Returns the path of the offending value, if the error has one.
    pub fn path(&self) -> Option<&CodingPath> {
        match self {
            CodecError::InvalidFormat { path, .. }
            | CodecError::MissingKey { path }
            | CodecError::Unrepresentable { path, .. } => Some(path),
            CodecError::InvalidPattern { .. } | CodecError::InvalidConfig { .. } => None,
        }
    }

    /// Returns the human-readable reason without the path prefix.
    pub fn reason(&self) -> String {
        match self {
            CodecError::InvalidFormat { reason, .. }
            | CodecError::InvalidPattern { reason, .. }
            | CodecError::InvalidConfig { reason } => reason.clone(),
            CodecError::MissingKey { .. } => "key not found".to_owned(),
            CodecError::Unrepresentable { day, .. } => {
                format!("day {} cannot be represented", day.components())
            }
        }
    }

    /// Returns a copy of this error with `prefix` prepended to its path.
    pub(crate) fn within(self, prefix: &CodingPath) -> Self {
        let rebase = |path: CodingPath| -> CodingPath {
            prefix
                .segments()
                .iter()
                .chain(path.segments())
                .cloned()
                .collect()
        };
        match self {
            CodecError::InvalidFormat { path, reason } => CodecError::InvalidFormat {
                path: rebase(path),
                reason,
            },
            CodecError::MissingKey { path } => CodecError::MissingKey { path: rebase(path) },
            CodecError::Unrepresentable { path, day } => CodecError::Unrepresentable {
                path: rebase(path),
                day,
            },
            other => other,
        }
    }
}
