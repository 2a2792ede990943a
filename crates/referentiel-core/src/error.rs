//! Error types for Référentiel

use thiserror::Error;

/// Result type alias using Référentiel's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Référentiel error types with helpful messages and suggestions
#[derive(Error, Debug)]
pub enum Error {
    // Record errors (E001-E099)
    #[error("Record {0} not found. Run `referentiel {1} list` to see all records.")]
    RecordNotFound(i64, &'static str),

    #[error("A record named '{0}' already exists.")]
    DuplicateName(String),

    // Network errors (E100-E199)
    #[error("Network error: {0}. Check that the backend is reachable.")]
    NetworkError(#[from] reqwest::Error),

    #[error("API error ({status}): {}", .message.as_deref().unwrap_or("no details"))]
    Api {
        status: u16,
        message: Option<String>,
    },

    #[error("Unexpected response from API: {0}")]
    InvalidResponse(String),

    // Config errors (E600-E699)
    #[error("Configuration error: {0}")]
    ConfigError(String),

    // Input errors (E800-E899)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // Generic errors
    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Get error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            Self::RecordNotFound(..) => "E001",
            Self::DuplicateName(_) => "E002",
            Self::NetworkError(_) => "E100",
            Self::Api { .. } => "E101",
            Self::InvalidResponse(_) => "E102",
            Self::ConfigError(_) => "E600",
            Self::InvalidInput(_) => "E800",
            Self::Other(_) | Self::Io(_) => "E9999",
        }
    }

    /// Get suggestion for how to fix this error
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::RecordNotFound(_, command) => Some(format!("referentiel {} list", command)),
            Self::NetworkError(_) => Some("referentiel config get api.base_url".to_string()),
            Self::ConfigError(_) => Some("referentiel config list".to_string()),
            _ => None,
        }
    }

    /// The human-readable message the server attached to a failed call, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Api {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => Some(message),
            _ => None,
        }
    }
}
