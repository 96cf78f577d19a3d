// ============================================================================
// domain/error.rs - SCAFFOLD DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

use crate::domain::resolver::supported_frameworks;
use crate::error::ErrorCategory;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (the same configuration error may be reported per contract)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Compatibility Errors (409-level equivalent)
    // ========================================================================
    #[error("unsupported token standard '{standard}'")]
    UnsupportedStandard { standard: String },

    #[error("unsupported framework '{framework}'")]
    UnsupportedFramework { framework: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnsupportedStandard { standard } => vec![
                format!("'{}' has no scaffold rules", standard),
                "Supported standards:".into(),
                "  • erc20  - Fungible token".into(),
                "  • erc721 - Non-fungible token".into(),
            ],
            Self::UnsupportedFramework { framework } => {
                let mut lines = vec![
                    format!("'{}' is not supported yet", framework),
                    "Supported frameworks:".into(),
                ];
                lines.extend(supported_frameworks().map(|fw| {
                    format!("  • {:<7} - {} test suite", fw.as_str(), fw.test_language())
                }));
                lines.push("Example: starkgen calldata --standard erc20 --framework nile".into());
                lines
            }
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnsupportedStandard { .. } | Self::UnsupportedFramework { .. } => {
                ErrorCategory::Compatibility
            }
        }
    }
}
