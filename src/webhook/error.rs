//! Error types for webhook and HTTP operations.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for HTTP operations.
///
/// Describes what went wrong in the executor without dictating recovery.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// and other network-level errors.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    ///
    /// Only possible when a timeout is configured on the executor.
    #[error("Request timed out")]
    Timeout,

    /// The endpoint could not be turned into a request.
    ///
    /// This typically indicates a configuration error rather than
    /// a transient failure.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Rejected username or avatar override.
///
/// Raised before any request is made; the webhook keeps its previous value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Username is too long.
    #[error("Username is {length} bytes long, must be shorter than {limit}")]
    UsernameTooLong {
        /// Byte length of the rejected name
        length: usize,
        /// Exclusive upper bound
        limit: usize,
    },

    /// Avatar is not an absolute URL with a scheme and a host.
    #[error("Invalid avatar URL '{url}': {reason}")]
    InvalidAvatarUrl {
        /// The rejected value
        url: String,
        /// Why it was rejected
        reason: String,
    },
}

/// Error type for [`Webhook`](super::Webhook) operations.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// An override was rejected.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The executor failed before a response was received.
    #[error("Transport error: {0}")]
    Transport(#[from] HttpError),

    /// The endpoint answered with a 4xx or 5xx status.
    #[error("Remote error: {status}")]
    Remote {
        /// Status line as returned by the endpoint
        status: http::StatusCode,
        /// Response body, if it was valid UTF-8 and non-empty
        body: Option<String>,
    },

    /// The attachment could not be read.
    #[error("Failed to read file '{}': {source}", path.display())]
    FileAccess {
        /// Resolved path of the attachment
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The JSON payload could not be encoded.
    #[error("Failed to encode payload: {0}")]
    Encode(#[from] serde_json::Error),
}

impl WebhookError {
    /// Returns the remote status code, if this is a [`WebhookError::Remote`].
    #[must_use]
    pub const fn status(&self) -> Option<http::StatusCode> {
        match self {
            Self::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }
}
