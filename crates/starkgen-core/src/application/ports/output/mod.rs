//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `starkgen-adapters` crate provides implementations.

use crate::domain::{Framework, GeneratedScaffold, RenderedTestFile, TestTemplate, TokenStandard};
use crate::error::StarkgenResult;

/// Port for test-file template storage and retrieval.
///
/// Implemented by:
/// - `starkgen_adapters::template_store::BuiltinTemplateStore` (shipped templates)
pub trait TestTemplateStore: Send + Sync {
    /// Get the template for a (framework, standard) pair.
    fn get(&self, framework: Framework, standard: TokenStandard) -> StarkgenResult<TestTemplate>;

    /// List all available templates.
    fn list(&self) -> StarkgenResult<Vec<TestTemplate>>;
}

/// Port for splicing a scaffold into a test template.
///
/// Implemented by:
/// - `starkgen_adapters::renderer::SimpleRenderer` (placeholder substitution)
pub trait TemplateRenderer: Send + Sync {
    /// Render a template with the scaffold's declarations and arguments.
    fn render(
        &self,
        template: &TestTemplate,
        scaffold: &GeneratedScaffold,
    ) -> StarkgenResult<RenderedTestFile>;
}
