//! Domain value objects: Framework, TokenStandard.
//!
//! # Design
//!
//! These are pure value types: `Copy`, compared by value, without identity.
//! They hold NO scaffold logic. All calldata rules live in `rules.rs` and the
//! builders. This file's only job is to define the types, their string
//! representations, and their `FromStr` parsers.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str` arm and the `FromStr` arm here
//! 3. Add a rule table in `rules.rs` and a dispatch arm in `resolver.rs`

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Framework ────────────────────────────────────────────────────────────────

/// A Starknet development framework the generated tests run under.
///
/// `Protostar` parses because users can ask for it, but no builder supports
/// it; the resolver rejects it with [`DomainError::UnsupportedFramework`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    Nile,
    Protostar,
    Hardhat,
}

impl Framework {
    pub const ALL: [Framework; 3] = [Self::Nile, Self::Protostar, Self::Hardhat];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Nile => "nile",
            Self::Protostar => "protostar",
            Self::Hardhat => "hardhat",
        }
    }

    /// Whether scaffold builders exist for this framework.
    pub const fn is_supported(self) -> bool {
        matches!(self, Self::Nile | Self::Hardhat)
    }

    /// Language the generated test file is written in.
    pub const fn test_language(self) -> &'static str {
        match self {
            Self::Nile | Self::Protostar => "python",
            Self::Hardhat => "typescript",
        }
    }

    /// Reject frameworks with no builder support.
    pub fn ensure_supported(self) -> Result<Self, DomainError> {
        if self.is_supported() {
            Ok(self)
        } else {
            Err(DomainError::UnsupportedFramework {
                framework: self.to_string(),
            })
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Framework {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nile" => Ok(Self::Nile),
            "protostar" => Ok(Self::Protostar),
            "hardhat" => Ok(Self::Hardhat),
            other => Err(DomainError::UnsupportedFramework {
                framework: other.to_string(),
            }),
        }
    }
}

// ── TokenStandard ────────────────────────────────────────────────────────────

/// A token contract standard with scaffold rules.
///
/// Ordering is the emission order for multi-contract projects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TokenStandard {
    #[serde(rename = "erc20")]
    Erc20,
    #[serde(rename = "erc721")]
    Erc721,
}

impl TokenStandard {
    pub const ALL: [TokenStandard; 2] = [Self::Erc20, Self::Erc721];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Erc20 => "erc20",
            Self::Erc721 => "erc721",
        }
    }

    /// Contract name as it appears in file names and deploy calls.
    pub const fn contract_name(&self) -> &'static str {
        match self {
            Self::Erc20 => "ERC20",
            Self::Erc721 => "ERC721",
        }
    }
}

impl fmt::Display for TokenStandard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TokenStandard {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "erc20" => Ok(Self::Erc20),
            "erc721" => Ok(Self::Erc721),
            other => Err(DomainError::UnsupportedStandard {
                standard: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn framework_parses_case_insensitively() {
        assert_eq!(Framework::from_str("Nile").unwrap(), Framework::Nile);
        assert_eq!(Framework::from_str("HARDHAT").unwrap(), Framework::Hardhat);
        assert_eq!(Framework::from_str(" protostar ").unwrap(), Framework::Protostar);
    }

    #[test]
    fn unknown_framework_is_unsupported() {
        assert_eq!(
            Framework::from_str("foundry"),
            Err(DomainError::UnsupportedFramework {
                framework: "foundry".into()
            })
        );
    }

    #[test]
    fn protostar_parses_but_is_not_supported() {
        assert!(!Framework::Protostar.is_supported());
        assert!(matches!(
            Framework::Protostar.ensure_supported(),
            Err(DomainError::UnsupportedFramework { .. })
        ));
        assert_eq!(Framework::Nile.ensure_supported(), Ok(Framework::Nile));
    }

    #[test]
    fn standard_accepts_common_spellings() {
        assert_eq!(TokenStandard::from_str("ERC20").unwrap(), TokenStandard::Erc20);
        assert_eq!(TokenStandard::from_str("erc-721").unwrap(), TokenStandard::Erc721);
        assert_eq!(TokenStandard::from_str("erc_721").unwrap(), TokenStandard::Erc721);
    }

    #[test]
    fn unknown_standard_is_unsupported() {
        assert!(matches!(
            TokenStandard::from_str("erc1155"),
            Err(DomainError::UnsupportedStandard { standard }) if standard == "erc1155"
        ));
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for fw in Framework::ALL {
            assert_eq!(Framework::from_str(&fw.to_string()).unwrap(), fw);
        }
        for std in TokenStandard::ALL {
            assert_eq!(TokenStandard::from_str(&std.to_string()).unwrap(), std);
        }
    }

    #[test]
    fn standards_order_erc20_first() {
        assert!(TokenStandard::Erc20 < TokenStandard::Erc721);
    }
}
