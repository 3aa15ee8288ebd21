//! # Terminal Error Type
//!
//! Startup and I/O errors of the terminal itself. Checkout failures never
//! reach this type - they are converted to session UI state (error display
//! slots) at the action boundary and shown on screen.

use thiserror::Error;

use regi_backend::BackendError;

/// Errors that terminate or prevent a terminal run.
#[derive(Debug, Error)]
pub enum TerminalError {
    /// The config file exists but could not be read or parsed.
    #[error("failed to load terminal config: {0}")]
    ConfigLoad(String),

    /// The backend client could not be constructed (bad base URL).
    #[error(transparent)]
    Backend(#[from] BackendError),

    /// Reading operator input failed.
    #[error("input error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for TerminalError {
    fn from(err: toml::de::Error) -> Self {
        TerminalError::ConfigLoad(err.to_string())
    }
}
