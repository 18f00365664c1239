//! Client error taxonomy.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here is fatal. Validation errors never reach the network;
//! transport-class errors are logged at the component boundary and turned
//! into a [`crate::Notice`] by the session. No error triggers a retry.

use canvas::codec::CodecError;

/// Errors produced by client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The surface is still the uniform background; nothing to classify.
    #[error("nothing drawn: draw or upload a digit before predicting")]
    EmptySurface,

    /// The request could not be sent or the response could not be read.
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered with a non-success HTTP status.
    #[error("server responded with status {status}")]
    Status { status: u16, body: String },

    /// The response body did not match the expected schema.
    #[error("malformed response: {0}")]
    Parse(String),

    /// The server refused the upload (it judged the image blank).
    #[error("server rejected the image: {message}")]
    Rejected { message: String },

    /// The surface could not be serialized.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// A blocking task panicked or was cancelled.
    #[error("background task failed: {0}")]
    Task(String),

    /// A configuration value was unusable.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ClientError {
    /// Local validation failure; no request was made.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::EmptySurface)
    }

    /// Failure at the network boundary (unreachable, non-2xx, malformed, rejected).
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Transport(_) | Self::Status { .. } | Self::Parse(_) | Self::Rejected { .. }
        )
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

impl From<tokio::task::JoinError> for ClientError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::Task(err.to_string())
    }
}
