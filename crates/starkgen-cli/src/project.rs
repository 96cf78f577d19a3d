//! TOML project files.
//!
//! A project file names a framework and lists one table per contract:
//!
//! ```toml
//! framework = "nile"          # optional; defaults to `defaults.framework`
//!
//! [contracts.erc20]
//! customized = true
//! name = "Gold"
//! premint = 500               # string or integer
//! mintable = true
//!
//! [contracts.erc721]          # empty table: canned scaffold
//! ```
//!
//! Contract keys and the framework are parsed with the core `FromStr` impls,
//! so an unknown name surfaces as the core's unsupported-standard or
//! unsupported-framework error.

use std::{collections::BTreeMap, path::Path};

use serde::Deserialize;
use tracing::{debug, instrument};

use starkgen_core::domain::{FeatureConfiguration, Framework, ProjectRequest, TokenStandard};

use crate::error::{CliError, CliResult};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ProjectFile {
    framework: Option<String>,
    #[serde(default)]
    contracts: BTreeMap<String, ContractTable>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ContractTable {
    customized: bool,
    name: String,
    premint: Option<Premint>,
    mintable: bool,
    burnable: bool,
    pausable: bool,
    upgradeable: bool,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Premint {
    Amount(u64),
    Text(String),
}

impl Premint {
    fn into_text(self) -> String {
        match self {
            Self::Amount(n) => n.to_string(),
            Self::Text(s) => s,
        }
    }
}

impl ContractTable {
    fn into_features(self) -> FeatureConfiguration {
        if !self.customized {
            return FeatureConfiguration::canned();
        }

        FeatureConfiguration::customized(self.name)
            .with_premint(self.premint.map(Premint::into_text).unwrap_or_default())
            .with_mintable(self.mintable)
            .with_burnable(self.burnable)
            .with_pausable(self.pausable)
            .with_upgradeable(self.upgradeable)
    }
}

/// Read a project file into a request.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn load_project(path: &Path, default_framework: &str) -> CliResult<ProjectRequest> {
    let raw = std::fs::read_to_string(path).map_err(|e| CliError::ProjectFile {
        path: path.to_path_buf(),
        message: e.to_string(),
        source: Some(Box::new(e)),
    })?;

    parse_project(&raw, default_framework).map_err(|e| match e {
        CliError::ProjectFile {
            message, source, ..
        } => CliError::ProjectFile {
            path: path.to_path_buf(),
            message,
            source,
        },
        other => other,
    })
}

/// Parse project file text. Errors carry an empty path; [`load_project`]
/// fills it in.
pub fn parse_project(raw: &str, default_framework: &str) -> CliResult<ProjectRequest> {
    let file: ProjectFile = toml::from_str(raw).map_err(|e| CliError::ProjectFile {
        path: Default::default(),
        message: e.message().to_string(),
        source: Some(Box::new(e)),
    })?;

    let framework: Framework = file
        .framework
        .as_deref()
        .unwrap_or(default_framework)
        .parse()?;

    let mut request = ProjectRequest::new(framework);
    for (key, table) in file.contracts {
        let standard: TokenStandard = key.parse()?;
        if request.contracts().any(|c| c.standard == standard) {
            return Err(CliError::ProjectFile {
                path: Default::default(),
                message: format!("[contracts.{key}] names {standard} a second time"),
                source: None,
            });
        }
        debug!(%standard, customized = table.customized, "contract table read");
        request = request.with_contract(standard, table.into_features());
    }

    Ok(request)
}
