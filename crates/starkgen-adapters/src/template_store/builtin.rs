//! Template store backed by the shipped test templates.

use std::{collections::BTreeMap, path::Path};

use tracing::{debug, info, instrument};

use starkgen_core::{
    application::{ApplicationError, ports::TestTemplateStore},
    domain::{Framework, TestTemplate, TokenStandard},
    error::StarkgenResult,
};

use crate::{builtin_templates, template_loader::DirectoryTemplateLoader};

/// Read-only store keyed by (framework, standard).
///
/// Starts from the built-in templates; overrides loaded from a directory
/// replace the built-in for their pair.
#[derive(Debug, Clone)]
pub struct BuiltinTemplateStore {
    templates: BTreeMap<(Framework, TokenStandard), TestTemplate>,
}

impl BuiltinTemplateStore {
    /// Create a store with the built-in templates loaded.
    pub fn new() -> Self {
        Self::from_templates(builtin_templates::all_templates())
    }

    /// Create a store holding exactly `templates`. Later entries win.
    pub fn from_templates(templates: impl IntoIterator<Item = TestTemplate>) -> Self {
        let templates = templates
            .into_iter()
            .map(|t| ((t.framework, t.standard), t))
            .collect();
        Self { templates }
    }

    /// Layer the overrides found under `dir` on top of the current templates.
    #[instrument(skip(self, dir), fields(dir = %dir.as_ref().display()))]
    pub fn with_overrides(mut self, dir: impl AsRef<Path>) -> StarkgenResult<Self> {
        let overrides = DirectoryTemplateLoader::new(dir.as_ref()).load_all()?;
        let count = overrides.len();

        for template in overrides {
            debug!(framework = %template.framework, standard = %template.standard, "override applied");
            self.templates
                .insert((template.framework, template.standard), template);
        }

        info!(count, "template overrides loaded");
        Ok(self)
    }

    /// Get the number of templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Check if store is empty.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl Default for BuiltinTemplateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TestTemplateStore for BuiltinTemplateStore {
    fn get(&self, framework: Framework, standard: TokenStandard) -> StarkgenResult<TestTemplate> {
        self.templates
            .get(&(framework, standard))
            .cloned()
            .ok_or_else(|| {
                ApplicationError::TemplateNotFound {
                    framework: framework.to_string(),
                    standard: standard.to_string(),
                }
                .into()
            })
    }

    fn list(&self) -> StarkgenResult<Vec<TestTemplate>> {
        Ok(self.templates.values().cloned().collect())
    }
}
