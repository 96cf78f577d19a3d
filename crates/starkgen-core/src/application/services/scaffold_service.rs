//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the scaffolding workflow for a project:
//! 1. Check the framework has builder support
//! 2. Resolve each requested contract's scaffold
//! 3. Splice each scaffold into its test template
//!
//! Every check runs before the first template is rendered, so a bad request
//! never yields a partial set of test files. Writing the files is the
//! caller's job.

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{TemplateRenderer, TestTemplateStore},
    },
    domain::{
        FeatureConfiguration, Framework, GeneratedScaffold, PlannedContract, ProjectRequest,
        RenderedTestFile, TokenStandard, resolve_scaffold,
    },
    error::StarkgenResult,
};

/// Information about a test template for display purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateInfo {
    pub framework: String,
    pub standard: String,
    pub path: String,
    pub language: String,
}

/// Main scaffolding service.
pub struct ScaffoldService {
    store: Box<dyn TestTemplateStore>,
    renderer: Box<dyn TemplateRenderer>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use starkgen_core::application::ScaffoldService;
    ///
    /// let service = ScaffoldService::new(
    ///     store,    // impl TestTemplateStore
    ///     renderer, // impl TemplateRenderer
    /// );
    /// ```
    pub fn new(store: Box<dyn TestTemplateStore>, renderer: Box<dyn TemplateRenderer>) -> Self {
        Self { store, renderer }
    }

    /// Scaffold a single contract.
    #[instrument(skip_all, fields(standard = %standard, framework = %framework))]
    pub fn scaffold(
        &self,
        standard: TokenStandard,
        framework: Framework,
        features: &FeatureConfiguration,
    ) -> StarkgenResult<GeneratedScaffold> {
        let scaffold = resolve_scaffold(standard, framework, features)?;
        debug!(
            customized = features.is_customized(),
            declarations = scaffold.declaration_lines().count(),
            arguments = scaffold.argument_items().count(),
            "Scaffold resolved"
        );
        Ok(scaffold)
    }

    /// Resolve the scaffold of every contract in the project.
    ///
    /// Fails before building anything if the framework is unsupported or the
    /// project requests no contracts.
    #[instrument(skip_all, fields(project = %request))]
    pub fn plan(&self, request: &ProjectRequest) -> StarkgenResult<Vec<PlannedContract>> {
        let framework = request.framework().ensure_supported()?;

        if request.is_empty() {
            return Err(ApplicationError::EmptyProject.into());
        }
        debug!(contracts = request.contract_count(), %framework, "Planning project");

        let planned = request
            .contracts()
            .map(|contract| {
                self.scaffold(contract.standard, framework, &contract.features)
                    .map(|scaffold| PlannedContract {
                        standard: contract.standard,
                        scaffold,
                    })
            })
            .collect::<StarkgenResult<Vec<_>>>()?;

        info!(contracts = planned.len(), "Project planned");
        Ok(planned)
    }

    /// Render one contract's test file.
    #[instrument(skip_all, fields(standard = %standard, framework = %framework))]
    pub fn render_test(
        &self,
        standard: TokenStandard,
        framework: Framework,
        features: &FeatureConfiguration,
    ) -> StarkgenResult<RenderedTestFile> {
        let scaffold = self.scaffold(standard, framework, features)?;
        let template = self.store.get(framework, standard)?;
        self.renderer.render(&template, &scaffold)
    }

    /// Render the test file of every contract in the project.
    ///
    /// All scaffolds and templates are resolved before the first render.
    #[instrument(skip_all, fields(project = %request))]
    pub fn render_tests(&self, request: &ProjectRequest) -> StarkgenResult<Vec<RenderedTestFile>> {
        let planned = self.plan(request)?;

        let templates = planned
            .iter()
            .map(|p| self.store.get(request.framework(), p.standard))
            .collect::<StarkgenResult<Vec<_>>>()?;

        let rendered = planned
            .iter()
            .zip(&templates)
            .map(|(p, template)| self.renderer.render(template, &p.scaffold))
            .collect::<StarkgenResult<Vec<_>>>()?;

        info!(files = rendered.len(), "Test files rendered");
        Ok(rendered)
    }

    /// List all available test templates.
    pub fn list_templates(&self) -> StarkgenResult<Vec<TemplateInfo>> {
        let templates = self.store.list()?;

        Ok(templates
            .into_iter()
            .map(|t| TemplateInfo {
                framework: t.framework.to_string(),
                standard: t.standard.to_string(),
                path: t.path.display().to_string(),
                language: t.framework.test_language().to_string(),
            })
            .collect())
    }
}
