//! Application layer errors.
//!
//! These errors represent failures in orchestration, not scaffold rules.
//! Rule errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// No test template registered for a (framework, standard) pair.
    #[error("No test template for {standard} on {framework}")]
    TemplateNotFound { framework: String, standard: String },

    /// Template rendering failed.
    #[error("Rendering {path} failed: {reason}")]
    RenderingFailed { path: PathBuf, reason: String },

    /// A template override could not be read.
    #[error("Loading template {path} failed: {reason}")]
    TemplateLoadFailed { path: PathBuf, reason: String },

    /// The project requests no token contracts.
    #[error("Project requests no token contracts")]
    EmptyProject,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateNotFound {
                framework,
                standard,
            } => vec![
                format!("No {} test template ships for {}", standard, framework),
                "Try: starkgen calldata to print the scaffold without a template".into(),
            ],
            Self::RenderingFailed { path, .. } => vec![
                format!("The template for {} is malformed", path.display()),
                "Please report this issue".into(),
            ],
            Self::TemplateLoadFailed { path, .. } => vec![
                format!("Check that {} exists and is readable", path.display()),
                "Override files live at <dir>/<framework>/<standard>.<ext>".into(),
            ],
            Self::EmptyProject => vec![
                "Add at least one contract table to the project file, e.g.:".into(),
                "  [contracts.erc20]".into(),
                "  customized = false".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::RenderingFailed { .. } => ErrorCategory::Internal,
            Self::TemplateLoadFailed { .. } => ErrorCategory::Configuration,
            Self::EmptyProject => ErrorCategory::Validation,
        }
    }
}
