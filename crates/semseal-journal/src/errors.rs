use thiserror::Error;

/// Errors that can occur during event stream operations.
#[derive(Error, Debug)]
pub enum JournalError {
    /// I/O error during read or write.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Line bytes are not valid UTF-8.
    #[error("invalid UTF-8 on line {line}")]
    InvalidUtf8 {
        /// 1-based line number.
        line: u64,
    },
    /// Serialization of an event failed.
    #[error("JSON error: {0}")]
    JsonParse(#[from] serde_json::Error),
    /// A complete line did not hold a JSON object (strict mode).
    #[error("invalid event on line {line}: {reason}")]
    InvalidLine {
        /// 1-based line number.
        line: u64,
        /// Reason for invalidity.
        reason: String,
    },
    /// The final line has no terminating newline (strict mode).
    #[error("truncated line {line}")]
    TruncatedLine {
        /// 1-based line number.
        line: u64,
    },
    /// Serialized event exceeds the maximum line size.
    #[error("event size {size} exceeds maximum {max}")]
    PayloadTooLarge {
        /// Actual line size in bytes.
        size: usize,
        /// Maximum allowed size.
        max: usize,
    },
    /// Event is not a JSON object, or lacks `event_type`.
    #[error("event must be a JSON object with an event_type")]
    NotAnEvent,
}
