/// Error types for btree-notes
///
/// Only local failures end up here. Anything the remote endpoint reports
/// travels back inside `QueryResult::error_message` instead.

use thiserror::Error;

/// Main error type for btree-notes operations
#[derive(Error, Debug)]
pub enum NotesError {
    /// HTTP client construction errors
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// I/O errors (terminal, output files, config files)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Endpoint URL could not be parsed
    #[error("Invalid endpoint URL: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Unrecognised input in the interactive shell
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for btree-notes operations
pub type Result<T> = std::result::Result<T, NotesError>;

impl NotesError {
    /// Convert to a message fit for the terminal
    pub fn user_message(&self) -> String {
        match self {
            NotesError::Http(e) => {
                format!("Could not set up the HTTP client. Details: {}", e)
            }
            NotesError::Io(e) => {
                format!("File system error. Check permissions. Details: {}", e)
            }
            NotesError::InvalidEndpoint(e) => {
                format!("The database endpoint is not a valid URL: {}", e)
            }
            NotesError::Serialization(e) => {
                format!("Data format error: {}", e)
            }
            NotesError::Config(msg) => {
                format!("Configuration issue: {}", msg)
            }
            NotesError::InvalidInput(msg) => {
                format!("Invalid input: {}", msg)
            }
        }
    }
}
