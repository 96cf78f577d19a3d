//! Filesystem-based test template overrides.
//!
//! Users can replace a built-in test template by dropping a file into an
//! override directory. The loader only reads; merging with the built-ins is
//! the store's job.
//!
//! # Directory layout expected
//!
//! ```text
//! templates/
//! ├── nile/
//! │   ├── erc20.py        ← replaces tests/test_ERC20.py
//! │   └── erc721.py
//! └── hardhat/
//!     └── erc20.ts        ← replaces test/erc20.test.ts
//! ```
//!
//! The directory name is the framework and the file stem is the token
//! standard, both parsed with the core `FromStr` impls. The extension is not
//! checked. Files that do not fit the layout, or that lack either scaffold
//! placeholder, are skipped with a `WARN` log.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use starkgen_core::{
    application::ApplicationError,
    domain::{Framework, TemplateSource, TestTemplate, TokenStandard},
    error::StarkgenResult,
};

use crate::builtin_templates::test_path;

/// Loads test template overrides from a directory.
///
/// # Example
///
/// ```no_run
/// use starkgen_adapters::template_loader::DirectoryTemplateLoader;
///
/// let loader = DirectoryTemplateLoader::new("./templates");
/// let templates = loader.load_all()?;
/// println!("Loaded {} overrides", templates.len());
/// # Ok::<(), starkgen_core::error::StarkgenError>(())
/// ```
pub struct DirectoryTemplateLoader {
    templates_dir: PathBuf,
}

impl DirectoryTemplateLoader {
    /// Create a loader pointed at `templates_dir`.
    pub fn new(templates_dir: impl Into<PathBuf>) -> Self {
        Self {
            templates_dir: templates_dir.into(),
        }
    }

    /// Load every valid override under the directory.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::TemplateLoadFailed`] if the directory is
    /// missing or cannot be walked, or if a matching file cannot be read.
    #[instrument(skip(self), fields(dir = %self.templates_dir.display()))]
    pub fn load_all(&self) -> StarkgenResult<Vec<TestTemplate>> {
        if !self.templates_dir.is_dir() {
            return Err(load_failed(&self.templates_dir, "directory not found"));
        }

        let mut templates = Vec::new();

        for entry in WalkDir::new(&self.templates_dir)
            .min_depth(2)
            .max_depth(2)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| load_failed(&self.templates_dir, e))?;
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let Some((framework, standard)) = classify(path) else {
                warn!(path = %path.display(), "skipping file outside <framework>/<standard>.<ext>");
                continue;
            };

            if !framework.is_supported() {
                warn!(path = %path.display(), %framework, "skipping override for unsupported framework");
                continue;
            }

            let body = fs::read_to_string(path).map_err(|e| load_failed(path, e))?;
            let template = TestTemplate::new(
                framework,
                standard,
                test_path(framework, standard),
                TemplateSource::Owned(body),
            );

            let missing = template.missing_placeholders();
            if !missing.is_empty() {
                warn!(
                    path = %path.display(),
                    missing = ?missing,
                    "skipping override without scaffold placeholders"
                );
                continue;
            }

            debug!(%framework, %standard, path = %path.display(), "loaded template override");
            templates.push(template);
        }

        debug!(count = templates.len(), "finished loading overrides");
        Ok(templates)
    }
}

/// Read the (framework, standard) pair from `<framework>/<standard>.<ext>`.
fn classify(path: &Path) -> Option<(Framework, TokenStandard)> {
    let framework = path.parent()?.file_name()?.to_str()?.parse().ok()?;
    let standard = path.file_stem()?.to_str()?.parse().ok()?;
    Some((framework, standard))
}

fn load_failed(path: &Path, reason: impl ToString) -> starkgen_core::error::StarkgenError {
    ApplicationError::TemplateLoadFailed {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
    .into()
}
