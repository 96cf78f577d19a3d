//! The `ProjectRequest` aggregate: one framework, one or more token contracts.
//!
//! Contracts are kept in standard order (`ERC20` before `ERC721`) and each
//! standard appears at most once, so every consumer sees the same emission
//! order regardless of how the request was assembled.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::domain::{
    entities::{feature_config::FeatureConfiguration, scaffold::GeneratedScaffold},
    value_objects::{Framework, TokenStandard},
};

/// One requested token contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractRequest {
    pub standard: TokenStandard,
    pub features: FeatureConfiguration,
}

/// Everything needed to scaffold the tests of one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRequest {
    framework: Framework,
    contracts: BTreeMap<TokenStandard, FeatureConfiguration>,
}

impl ProjectRequest {
    pub fn new(framework: Framework) -> Self {
        Self {
            framework,
            contracts: BTreeMap::new(),
        }
    }

    /// Request a contract. A second request for the same standard replaces
    /// the first.
    pub fn with_contract(mut self, standard: TokenStandard, features: FeatureConfiguration) -> Self {
        self.contracts.insert(standard, features);
        self
    }

    pub const fn framework(&self) -> Framework {
        self.framework
    }

    /// Requested contracts in emission order.
    pub fn contracts(&self) -> impl Iterator<Item = ContractRequest> + '_ {
        self.contracts
            .iter()
            .map(|(standard, features)| ContractRequest {
                standard: *standard,
                features: features.clone(),
            })
    }

    pub fn contract_count(&self) -> usize {
        self.contracts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contracts.is_empty()
    }
}

impl fmt::Display for ProjectRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [", self.framework)?;
        for (i, standard) in self.contracts.keys().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{standard}")?;
        }
        f.write_str("]")
    }
}

/// A resolved scaffold, tagged with the contract it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedContract {
    pub standard: TokenStandard,
    pub scaffold: GeneratedScaffold,
}
