//! Application layer for starkgen.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! scaffold rules itself. All rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    ScaffoldService,
    TemplateInfo, // DTO for template metadata
};

// Re-export port traits (for adapter implementation)
pub use ports::{TemplateRenderer, TestTemplateStore};

pub use error::ApplicationError;
