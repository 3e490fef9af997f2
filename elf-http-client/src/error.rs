//! Error types for the elf HTTP client

use thiserror::Error;

/// Errors that can occur when talking to the puzzle website
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed (DNS, connect, timeout, ...)
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Non-success HTTP status code received
    #[error("Invalid HTTP status: {status}")]
    InvalidStatus {
        /// The status code that was received
        status: reqwest::StatusCode,
    },

    /// Failed to decode response as UTF-8
    #[error("Failed to decode response as UTF-8")]
    Encoding,

    /// Session value cannot be sent in a cookie header
    #[error("Session cookie contains characters not allowed in an HTTP header")]
    InvalidSession,

    /// Client initialization failed
    #[error("Client initialization failed: {0}")]
    ClientInit(String),
}
