//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "plan a project" or "render its tests".

pub mod scaffold_service;

pub use scaffold_service::{ScaffoldService, TemplateInfo};
