//! Error types for submission and input fetching

use elf_http_client::ClientError;
use std::path::PathBuf;
use thiserror::Error;

/// Missing or invalid configuration, raised before any I/O
#[derive(Error, Debug)]
pub enum ConfigError {
    /// No session token passed and none in the environment
    #[error("Session token missing: pass one explicitly or set the {var} environment variable")]
    MissingSession { var: &'static str },

    /// The session token holds characters a cookie value cannot carry
    #[error("Session token is malformed: expected printable ASCII without spaces or ';'")]
    InvalidSession,
}

/// Guess log read/write failures
///
/// These never escape the cache: callers log them and carry on.
#[derive(Error, Debug)]
pub enum CacheError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV encoding or decoding error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Errors surfaced by [`crate::Submitter::submit_answer`]
#[derive(Error, Debug)]
pub enum SubmissionError {
    /// Configuration error (missing or malformed session)
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The cache directory could not be created
    #[error("Cache directory {} is not writable: {source}", .path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Network or HTTP failure talking to the judge
    #[error("Submission failed: {0}")]
    Transport(#[from] ClientError),
}

/// Errors surfaced by [`crate::InputFetcher::get_input`]
#[derive(Error, Debug)]
pub enum InputFetchError {
    /// Configuration error (missing or malformed session)
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The HTTP client could not be built
    #[error("HTTP client initialization failed: {0}")]
    ClientInit(#[source] ClientError),

    /// Download failed
    #[error("Input fetch failed for {year}/{day}: {source}")]
    Transport {
        year: u16,
        day: u8,
        #[source]
        source: ClientError,
    },
}
