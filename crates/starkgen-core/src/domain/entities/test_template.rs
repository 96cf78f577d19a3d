//! Test-file templates and their rendered output.
//!
//! A template is a complete test file for one (framework, standard) pair with
//! two placeholders where the scaffold text goes. Templates never contain
//! contract logic; they only frame the generated declarations and calldata.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::value_objects::{Framework, TokenStandard};

/// Placeholder replaced by the variable-declaration block.
pub const DECLARATIONS_PLACEHOLDER: &str = "<%= testingVars %>";

/// Placeholder replaced by the constructor-argument list.
pub const ARGUMENTS_PLACEHOLDER: &str = "<%= constructorCalldata %>";

/// Where a template's body comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// Compiled into the binary.
    Static(&'static str),
    /// Built at runtime (tests, user overrides).
    Owned(String),
}

impl TemplateSource {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Static(s) => s,
            Self::Owned(s) => s,
        }
    }
}

/// A test-file template for one (framework, standard) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestTemplate {
    pub framework: Framework,
    pub standard: TokenStandard,
    /// Destination path, relative to the generated project root.
    pub path: PathBuf,
    pub body: TemplateSource,
}

impl TestTemplate {
    pub fn new(
        framework: Framework,
        standard: TokenStandard,
        path: impl AsRef<Path>,
        body: TemplateSource,
    ) -> Self {
        Self {
            framework,
            standard,
            path: path.as_ref().to_path_buf(),
            body,
        }
    }

    /// Placeholders the body is missing; empty when the template is usable.
    pub fn missing_placeholders(&self) -> Vec<&'static str> {
        [DECLARATIONS_PLACEHOLDER, ARGUMENTS_PLACEHOLDER]
            .into_iter()
            .filter(|p| !self.body.as_str().contains(p))
            .collect()
    }
}

/// A rendered test file, ready for the emitter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedTestFile {
    pub standard: TokenStandard,
    pub path: PathBuf,
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_template_has_no_missing_placeholders() {
        let template = TestTemplate::new(
            Framework::Nile,
            TokenStandard::Erc20,
            "tests/test_ERC20.py",
            TemplateSource::Static("<%= testingVars %>\n[<%= constructorCalldata %>]"),
        );
        assert!(template.missing_placeholders().is_empty());
    }

    #[test]
    fn reports_each_missing_placeholder() {
        let template = TestTemplate::new(
            Framework::Nile,
            TokenStandard::Erc20,
            "tests/test_ERC20.py",
            TemplateSource::Owned("<%= testingVars %>".into()),
        );
        assert_eq!(template.missing_placeholders(), vec![ARGUMENTS_PLACEHOLDER]);
    }
}
