//! Error types for the listing feed.
//!
//! Errors are split by how far they propagate:
//!
//! - [`FeedError`] aborts a whole [`run`](crate::pipeline::ScrapePipeline::run)
//!   invocation (unknown category, transport failure).
//! - [`EntryError`] describes a single malformed listing row. The pipeline logs
//!   it and drops the row; it never reaches the caller.
//! - [`ConfigError`] covers startup problems (config file, base URL, client).

use thiserror::Error;

/// Failure of a complete feed invocation.
#[derive(Debug, Error)]
pub enum FeedError {
    /// The caller asked for a category the registry does not know.
    #[error("unknown category `{key}`; valid categories are: {valid}")]
    InvalidCategory { key: String, valid: String },

    /// The category path could not be joined onto the configured base URL.
    #[error("cannot build source URL from `{base}` and `{path}`: {source}")]
    InvalidSourceUrl {
        base: String,
        path: String,
        #[source]
        source: url::ParseError,
    },

    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl FeedError {
    /// Whether retrying the same invocation later could succeed.
    ///
    /// Only transport failures are environmental; an unknown category or a
    /// broken base URL fails the same way every time.
    pub fn is_retryable(&self) -> bool {
        matches!(self, FeedError::Transport(_))
    }
}

/// Failure reported by a [`Fetch`](crate::transport::Fetch) implementation.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected status code: {0}")]
    HttpStatus(u16),
}

/// Why one listing row was dropped.
#[derive(Debug, Error)]
pub enum EntryError {
    #[error("entry has no anchor element")]
    MissingAnchor,
    #[error("anchor has no href attribute")]
    MissingHref,
    #[error("entry has no date element")]
    MissingDate,
    #[error("href `{href}` cannot be resolved: {source}")]
    InvalidLink {
        href: String,
        #[source]
        source: url::ParseError,
    },
    #[error("date `{raw}` does not match the listing format: {source}")]
    InvalidDate {
        raw: String,
        #[source]
        source: DateError,
    },
}

/// Failure to turn a display date into an instant.
#[derive(Debug, Error, PartialEq)]
pub enum DateError {
    #[error(transparent)]
    Parse(#[from] chrono::ParseError),
    #[error("UTC offset of {0} minutes is out of range")]
    OffsetOutOfRange(i32),
    #[error("local time {0} does not map to a single instant")]
    Ambiguous(chrono::NaiveDateTime),
}

/// Startup configuration failure.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file `{path}`: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid YAML in config file: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid base URL `{url}`: {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("UTC offset of {0} minutes is out of range")]
    InvalidUtcOffset(i32),
    #[error("request timeout must be at least one second, got {0}")]
    InvalidTimeout(u64),
    #[error("cannot build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_transport_is_retryable() {
        let invalid = FeedError::InvalidCategory {
            key: "nope".to_string(),
            valid: "tzgg".to_string(),
        };
        assert!(!invalid.is_retryable());

        let transport = FeedError::from(TransportError::HttpStatus(503));
        assert!(transport.is_retryable());
    }

    #[test]
    fn test_invalid_category_message_lists_valid_keys() {
        let err = FeedError::InvalidCategory {
            key: "nope".to_string(),
            valid: "tzgg".to_string(),
        };
        let msg = err.to_string();
        assert_eq!(msg, "unknown category `nope`; valid categories are: tzgg");
    }

    #[test]
    fn test_transport_status_is_displayed() {
        let err = FeedError::from(TransportError::HttpStatus(404));
        assert_eq!(err.to_string(), "unexpected status code: 404");
    }
}
