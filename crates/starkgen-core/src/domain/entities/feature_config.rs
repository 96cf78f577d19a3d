//! The resolved set of user choices for one token contract.
//!
//! A `FeatureConfiguration` is built once by whatever collected the answers
//! (CLI flags, a project file) and never mutated afterwards. Builders only
//! read it.
//!
//! # Domain purity
//!
//! No validation happens here beyond what the builders branch on: an empty
//! name flows through as an empty literal, and any premint other than the
//! zero sentinel counts as a premint.

use serde::{Deserialize, Serialize};

/// Premint text that means "mint nothing at deployment".
pub const ZERO_PREMINT: &str = "0";

/// Feature flags and metadata for one token contract.
///
/// `burnable` is carried for the contract-body generator; it never affects
/// constructor calldata or test declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureConfiguration {
    customized: bool,
    name: String,
    premint: String,
    mintable: bool,
    burnable: bool,
    pausable: bool,
    upgradeable: bool,
}

impl FeatureConfiguration {
    /// The canned configuration: every builder emits its fixed default
    /// scaffold for it.
    pub fn canned() -> Self {
        Self::default()
    }

    /// A customized configuration for a contract called `name`, with no
    /// features enabled and no premint.
    pub fn customized(name: impl Into<String>) -> Self {
        Self {
            customized: true,
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_premint(mut self, premint: impl Into<String>) -> Self {
        self.premint = premint.into();
        self
    }

    pub fn with_mintable(mut self, mintable: bool) -> Self {
        self.mintable = mintable;
        self
    }

    pub fn with_burnable(mut self, burnable: bool) -> Self {
        self.burnable = burnable;
        self
    }

    pub fn with_pausable(mut self, pausable: bool) -> Self {
        self.pausable = pausable;
        self
    }

    pub fn with_upgradeable(mut self, upgradeable: bool) -> Self {
        self.upgradeable = upgradeable;
        self
    }

    pub const fn is_customized(&self) -> bool {
        self.customized
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn premint(&self) -> &str {
        &self.premint
    }
    pub const fn is_mintable(&self) -> bool {
        self.mintable
    }
    pub const fn is_burnable(&self) -> bool {
        self.burnable
    }
    pub const fn is_pausable(&self) -> bool {
        self.pausable
    }
    pub const fn is_upgradeable(&self) -> bool {
        self.upgradeable
    }

    /// Whether tokens are minted to a recipient at deployment.
    ///
    /// Empty (or whitespace-only) text and the literal `"0"` mean no premint.
    pub fn has_premint(&self) -> bool {
        let premint = self.premint.trim();
        !premint.is_empty() && premint != ZERO_PREMINT
    }

    /// Whether the contract needs an owner: either capability alone is enough.
    pub const fn needs_owner(&self) -> bool {
        self.mintable || self.pausable
    }
}
