//! Simple placeholder substitution renderer.

use starkgen_core::{
    application::{ApplicationError, ports::TemplateRenderer},
    domain::{
        GeneratedScaffold, RenderedTestFile, TestTemplate,
        entities::{ARGUMENTS_PLACEHOLDER, DECLARATIONS_PLACEHOLDER},
    },
    error::StarkgenResult,
};
use tracing::{debug, instrument};

/// Renderer that splices the scaffold text into the two placeholders.
///
/// Every occurrence of a placeholder is replaced in a single left-to-right
/// pass, so scaffold text that happens to contain a placeholder is inserted
/// verbatim and never rewritten.
pub struct SimpleRenderer;

impl SimpleRenderer {
    /// Create a new simple renderer.
    pub fn new() -> Self {
        Self
    }
}

impl Default for SimpleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for SimpleRenderer {
    #[instrument(skip_all, fields(framework = %template.framework, standard = %template.standard))]
    fn render(
        &self,
        template: &TestTemplate,
        scaffold: &GeneratedScaffold,
    ) -> StarkgenResult<RenderedTestFile> {
        let missing = template.missing_placeholders();
        if !missing.is_empty() {
            return Err(ApplicationError::RenderingFailed {
                path: template.path.clone(),
                reason: format!("template is missing {}", missing.join(" and ")),
            }
            .into());
        }

        let content = splice(template.body.as_str(), scaffold);

        debug!(path = %template.path.display(), bytes = content.len(), "test file rendered");

        Ok(RenderedTestFile {
            standard: template.standard,
            path: template.path.clone(),
            content,
        })
    }
}

fn splice(body: &str, scaffold: &GeneratedScaffold) -> String {
    let slots = [
        (DECLARATIONS_PLACEHOLDER, scaffold.variable_declarations.as_str()),
        (ARGUMENTS_PLACEHOLDER, scaffold.constructor_arguments.as_str()),
    ];

    let mut out = String::with_capacity(
        body.len() + scaffold.variable_declarations.len() + scaffold.constructor_arguments.len(),
    );
    let mut rest = body;

    while let Some((at, placeholder, value)) = slots
        .iter()
        .filter_map(|&(placeholder, value)| rest.find(placeholder).map(|at| (at, placeholder, value)))
        .min_by_key(|&(at, _, _)| at)
    {
        out.push_str(&rest[..at]);
        out.push_str(value);
        rest = &rest[at + placeholder.len()..];
    }
    out.push_str(rest);

    out
}
