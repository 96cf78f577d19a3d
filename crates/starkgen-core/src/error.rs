//! Unified error handling for starkgen core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for starkgen core operations.
///
/// This enum wraps all possible errors that can occur when using
/// starkgen-core, providing a unified interface for error handling.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StarkgenError {
    /// Errors from the domain layer (unsupported standard or framework).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl StarkgenError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Check your setup and try again".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in starkgen".into(),
                "Please report this issue at: https://github.com/cosecruz/starkgen/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Compatibility,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type StarkgenResult<T> = Result<T, StarkgenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_framework_is_a_compatibility_error() {
        let err: StarkgenError = DomainError::UnsupportedFramework {
            framework: "protostar".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Compatibility);
        assert!(err.suggestions().iter().any(|s| s.contains("hardhat")));
    }

    #[test]
    fn unsupported_standard_lists_supported_ones() {
        let err: StarkgenError = DomainError::UnsupportedStandard {
            standard: "erc1155".into(),
        }
        .into();
        let suggestions = err.suggestions();
        assert!(suggestions.iter().any(|s| s.contains("erc20")));
        assert!(suggestions.iter().any(|s| s.contains("erc721")));
    }

    #[test]
    fn display_wraps_inner_message() {
        let err: StarkgenError = DomainError::UnsupportedStandard {
            standard: "erc1155".into(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Domain error: unsupported token standard 'erc1155'"
        );
    }

    #[test]
    fn configuration_category() {
        let err = StarkgenError::Configuration {
            message: "bad".into(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }
}
