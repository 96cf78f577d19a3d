//! Infrastructure adapters for starkgen.
//!
//! This crate implements the ports defined in `starkgen-core::application::ports`.
//! It contains the shipped test templates and all filesystem access.

pub mod builtin_templates;
pub mod renderer;
pub mod template_loader;
pub mod template_store;

// Re-export commonly used adapters
pub use renderer::SimpleRenderer;
pub use template_loader::DirectoryTemplateLoader;
pub use template_store::BuiltinTemplateStore;
