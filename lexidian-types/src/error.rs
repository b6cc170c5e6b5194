//! Error types for all lexidian crates.

/// Errors from a completion request.
///
/// Malformed stream lines are not errors: they surface as
/// [`StreamFrame::Unparseable`](crate::StreamFrame::Unparseable) and are
/// skipped by the consumer.
#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    /// The request could not be sent, no response body was obtainable,
    /// or the body failed mid-stream.
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
    /// The endpoint answered with a non-success status.
    #[error("HTTP {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body text, as far as it could be read.
        body: String,
    },
    /// The request itself is unusable (e.g. a body that cannot be serialized).
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl CompletionError {
    /// Wrap any error as a transport failure.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Box::new(err))
    }
}

/// Errors from settings persistence.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// Reading or writing the backing storage failed.
    #[error("settings io failed: {0}")]
    Io(String),
    /// The stored blob is not valid settings JSON.
    #[error("settings serialization failed: {0}")]
    Serialization(String),
}
