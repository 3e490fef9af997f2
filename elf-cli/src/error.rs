//! Error types for the CLI

use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Submission error
    #[error(transparent)]
    Submission(#[from] elf_core::SubmissionError),

    /// Input fetch error
    #[error(transparent)]
    Input(#[from] elf_core::InputFetchError),
}
