//! Core error types for the Verse model layer
use thiserror::Error;

/// Result type alias using [`CoreError`]
pub type Result<T> = std::result::Result<T, CoreError>;

/// Unified error for model-layer operations
#[derive(Debug, Error)]
pub enum CoreError {
    /// A record could not be read back from its transfer envelope
    #[error(transparent)]
    Transfer(#[from] verse_transfer::EnvelopeError),
}
