//! Error types exposed by the remote API layer.

use thiserror::Error;

/// Errors surfaced while talking to the shipping API or handling its data.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// An operation needing a session ran without a token.
    #[error("access token is required; log in first")]
    MissingToken,

    /// The API rejected the supplied credentials or token.
    #[error("authentication failed: {message}")]
    Authentication {
        /// Message returned with the 401/403 response.
        message: String,
    },

    /// The API returned a non-authentication error.
    #[error("API error: {message}")]
    Api {
        /// Server message, or a status summary when none was sent.
        message: String,
    },

    /// Networking failed while calling the API.
    #[error("network error talking to the shipping API: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// Configuration could not be loaded or was incomplete.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// Input was rejected before any request was sent.
    #[error("invalid input: {message}")]
    Validation {
        /// Summary of the rejected fields.
        message: String,
    },
}
