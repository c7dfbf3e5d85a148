use thiserror::Error;

/// Errors that can occur while reading a flattened record
#[derive(Debug, Error)]
pub enum EnvelopeError {
    /// The buffer ended before the current field was fully read
    #[error("envelope truncated: needed {needed} more bytes, {remaining} left")]
    Truncated {
        /// Bytes the current field still required
        needed: usize,
        /// Bytes actually left in the buffer
        remaining: usize,
    },

    /// A length prefix was negative and not the null marker
    #[error("invalid field length: {0}")]
    InvalidLength(i32),

    /// A non-nullable text field was encoded as null
    #[error("unexpected null text field")]
    UnexpectedNull,

    /// A text field held bytes that are not valid UTF-8
    #[error("text field is not valid UTF-8: {0}")]
    InvalidText(#[from] std::string::FromUtf8Error),
}

/// Result type for envelope operations
pub type Result<T> = std::result::Result<T, EnvelopeError>;
