//! Error types for Stellarium operations

use thiserror::Error;

/// Errors that can occur while talking to Stellarium
#[derive(Error, Debug)]
pub enum StellariumError {
    /// The API answered with a non-success status
    #[error("HTTP {status}: {body}")]
    Http {
        /// Status code returned by Stellarium
        status: u16,
        /// Response body text
        body: String,
    },

    /// Network or request construction failure
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    /// Response body could not be interpreted
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Caller passed an argument no request can be built from
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// No biblical location with the given name
    #[error("Unknown location: {0}")]
    UnknownLocation(String),

    /// No prophetic event with the given name
    #[error("Unknown event: {0}")]
    UnknownEvent(String),

    /// No horizon direction with the given name
    #[error("Unknown direction: {0}")]
    UnknownDirection(String),
}
