//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Preferences error: {0}")]
    Preferences(String),

    #[error("Location error: {0}")]
    Location(String),

    #[error("UI error: {0}")]
    Ui(String),
}

/// Why a listings request failed. Collapsed into a [`Diagnostic`](super::Diagnostic)
/// before it leaves the use case.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchFailure {
    /// Connection, DNS, TLS or timeout failure before a status was received.
    #[error("{0}")]
    Transport(String),

    /// The listings source answered with a non-success status.
    #[error("{code}: {reason}")]
    Status { code: u16, reason: String },

    /// The body was not a JSON array of films.
    #[error("{0}")]
    Body(String),
}

impl FetchFailure {
    /// Category name shown at the head of the diagnostic text.
    pub fn name(&self) -> &'static str {
        match self {
            FetchFailure::Transport(_) => "TransportError",
            FetchFailure::Status { .. } => "StatusError",
            FetchFailure::Body(_) => "BodyError",
        }
    }
}
