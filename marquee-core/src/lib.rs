//! Marquee Core - watch party state and shared infrastructure
//!
//! This crate provides the building blocks the web layer composes over:
//! the party registry, configuration, runtime mode, and tracing setup.

pub mod config;
pub mod mode;
pub mod party;
pub mod tracing_setup;

// Re-export main types for convenient access
pub use config::MarqueeConfig;
pub use mode::RuntimeMode;
pub use party::{JoinCode, PartyError, PartyRegistry, WatchParty};

/// Core errors that can bubble up from any Marquee subsystem.
///
/// High-level error types representing failures in core functionality.
#[derive(Debug, thiserror::Error)]
pub enum MarqueeError {
    #[error("Party error: {0}")]
    Party(#[from] PartyError),

    #[error("Configuration error: {reason}")]
    Configuration { reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Web error: {reason}")]
    Web { reason: String },
}

impl MarqueeError {
    /// Returns a user-friendly error message suitable for display.
    pub fn user_message(&self) -> String {
        match self {
            MarqueeError::Party(e) => match e {
                PartyError::PartyNotFound { code } => {
                    format!("No watch party found for code {code}")
                }
                PartyError::PartyFull { max } => {
                    format!("This party is full ({max} participants)")
                }
                PartyError::InvalidJoinCode { reason } => {
                    format!("Invalid join code: {reason}")
                }
            },
            MarqueeError::Configuration { .. } => "Configuration error occurred".to_string(),
            MarqueeError::Io(_) => "File system error occurred".to_string(),
            MarqueeError::Web { reason } => format!("Web interface error: {reason}"),
        }
    }

    /// Checks if this error is due to user input validation.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            MarqueeError::Party(PartyError::InvalidJoinCode { .. })
                | MarqueeError::Configuration { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, MarqueeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_join_code_is_user_error() {
        let err = MarqueeError::Party(PartyError::InvalidJoinCode {
            reason: "too short".to_string(),
        });
        assert!(err.is_user_error());
        assert!(err.user_message().contains("too short"));
    }

    #[test]
    fn io_error_is_not_user_error() {
        let err = MarqueeError::Io(std::io::Error::other("disk gone"));
        assert!(!err.is_user_error());
    }
}
