//! Application error types.
//!
//! Provides unified error handling with enough context to point at the bad input.

use thiserror::Error;

use crate::constants::MAX_RANGE_VERSES;

/// Application result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Why a reference segment could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatReason {
    /// Nothing between two commas (or an empty reference).
    #[error("segment is empty")]
    EmptySegment,

    /// No `:` separating book-chapter from verse.
    #[error("missing ':' between chapter and verse")]
    MissingColon,

    /// Nothing before the last `:`.
    #[error("missing book and chapter")]
    MissingBookChapter,

    /// Verse or range bound is not an unsigned integer.
    #[error("{0:?} is not a verse number")]
    InvalidVerse(String),

    /// More than one `-` in the verse part.
    #[error("range has more than two bounds")]
    TooManyBounds,

    /// Range start is greater than its end.
    #[error("range start {start} is after end {end}")]
    ReversedRange {
        /// First verse of the range as written.
        start: u32,
        /// Last verse of the range as written.
        end: u32,
    },

    /// Range expands to more verses than any chapter holds.
    #[error("range {start}-{end} spans more than {max} verses", max = MAX_RANGE_VERSES)]
    RangeTooLarge {
        /// First verse of the range as written.
        start: u32,
        /// Last verse of the range as written.
        end: u32,
    },
}

/// Application error types
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed reference string
    #[error("Invalid reference {segment:?}: {reason}")]
    Format {
        /// The trimmed segment that failed to parse.
        segment: String,
        /// What was wrong with it.
        reason: FormatReason,
    },

    /// Configuration error with guidance
    #[error("Configuration error: {message}. {hint}")]
    Config {
        /// Description of the configuration problem.
        message: String,
        /// Actionable guidance for fixing the issue.
        hint: &'static str,
    },

    /// JSON output failed
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl Error {
    /// Create a format error for a reference segment
    pub fn format(segment: impl Into<String>, reason: FormatReason) -> Self {
        Self::Format { segment: segment.into(), reason }
    }

    /// Create a config error with actionable hint
    pub fn config(message: impl Into<String>, hint: &'static str) -> Self {
        Self::Config { message: message.into(), hint }
    }

    /// The parse failure reason, if this is a format error.
    pub const fn format_reason(&self) -> Option<&FormatReason> {
        match self {
            Self::Format { reason, .. } => Some(reason),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn format_error_names_segment_and_reason() {
        let err = Error::format("John 3", FormatReason::MissingColon);
        assert_eq!(
            err.to_string(),
            "Invalid reference \"John 3\": missing ':' between chapter and verse"
        );
        assert_eq!(err.format_reason(), Some(&FormatReason::MissingColon));
    }

    #[test]
    fn config_error_includes_hint() {
        let err = Error::config("unknown output \"xml\"", "Use \"text\" or \"json\"");
        match err {
            Error::Config { hint, .. } => assert!(hint.contains("json")),
            _ => panic!("Expected Config error"),
        }
        assert!(Error::config("x", "y").format_reason().is_none());
    }

    #[test]
    fn range_too_large_names_limit() {
        let reason = FormatReason::RangeTooLarge { start: 1, end: 500 };
        assert_eq!(
            reason.to_string(),
            format!("range 1-500 spans more than {MAX_RANGE_VERSES} verses")
        );
    }
}
