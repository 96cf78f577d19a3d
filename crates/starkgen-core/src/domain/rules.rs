//! Constructor-calldata rule tables.
//!
//! # Design
//!
//! Every (standard, framework) dialect owns one static, ordered table of
//! [`CalldataRule`]s. The customized argument list is the value of every rule
//! whose predicate holds, in table order, so argument order is fixed by the
//! table, never by the order flags happen to be checked in.
//!
//! A feature that has no effect for a dialect (upgradeable under Hardhat or
//! ERC721) simply has no entry in that dialect's table.
//!
//! # Adding a Rule
//!
//! 1. Append a [`CalldataRule`] to the relevant table, at the position the
//!    argument takes in the constructor signature
//! 2. Add the matching declaration to the builder if the value references a
//!    new symbol

use std::fmt;

use crate::domain::{
    dialect::{hardhat, nile},
    entities::FeatureConfiguration,
};

/// What a constructor argument stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgumentRole {
    /// Receives the premint.
    Recipient,
    /// Holds the mint/pause capabilities.
    Owner,
    /// Administers the upgrade proxy.
    ProxyAdmin,
}

/// One conditional entry of a constructor argument list.
#[derive(Clone, Copy)]
pub struct CalldataRule {
    pub role: ArgumentRole,
    /// Whether this argument is passed for the configuration.
    pub applies: fn(&FeatureConfiguration) -> bool,
    /// The argument text to pass.
    pub value: fn(&FeatureConfiguration) -> &'static str,
}

impl fmt::Debug for CalldataRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CalldataRule")
            .field("role", &self.role)
            .finish_non_exhaustive()
    }
}

/// Evaluate a rule table against a configuration.
pub fn apply_rules(rules: &[CalldataRule], cfg: &FeatureConfiguration) -> Vec<&'static str> {
    rules
        .iter()
        .filter(|rule| (rule.applies)(cfg))
        .map(|rule| (rule.value)(cfg))
        .collect()
}

// ── predicates & selectors ───────────────────────────────────────────────────

fn has_premint(cfg: &FeatureConfiguration) -> bool {
    cfg.has_premint()
}

fn needs_owner(cfg: &FeatureConfiguration) -> bool {
    cfg.needs_owner()
}

fn is_upgradeable(cfg: &FeatureConfiguration) -> bool {
    cfg.is_upgradeable()
}

/// Nile passes the proxy admin wherever an owner would go on upgradeable
/// contracts.
fn nile_owner_or_proxy_admin(cfg: &FeatureConfiguration) -> &'static str {
    if cfg.is_upgradeable() {
        nile::PROXY_ADMIN
    } else {
        nile::OWNER
    }
}

fn nile_proxy_admin(_: &FeatureConfiguration) -> &'static str {
    nile::PROXY_ADMIN
}

fn nile_owner(_: &FeatureConfiguration) -> &'static str {
    nile::OWNER
}

fn hardhat_recipient(_: &FeatureConfiguration) -> &'static str {
    hardhat::RECIPIENT_FIELD
}

fn hardhat_owner(_: &FeatureConfiguration) -> &'static str {
    hardhat::OWNER_FIELD
}

// ── tables ───────────────────────────────────────────────────────────────────

/// ERC20 under Nile.
///
/// The trailing proxy-admin entry fires on every upgradeable contract, even
/// when the recipient and owner entries already passed the proxy admin, so an
/// upgradeable contract with premint and an owner gets it three times.
pub static NILE_ERC20_RULES: &[CalldataRule] = &[
    CalldataRule {
        role: ArgumentRole::Recipient,
        applies: has_premint,
        value: nile_owner_or_proxy_admin,
    },
    CalldataRule {
        role: ArgumentRole::Owner,
        applies: needs_owner,
        value: nile_owner_or_proxy_admin,
    },
    CalldataRule {
        role: ArgumentRole::ProxyAdmin,
        applies: is_upgradeable,
        value: nile_proxy_admin,
    },
];

/// ERC20 under Hardhat. No proxy-admin substitution exists here.
pub static HARDHAT_ERC20_RULES: &[CalldataRule] = &[
    CalldataRule {
        role: ArgumentRole::Recipient,
        applies: has_premint,
        value: hardhat_recipient,
    },
    CalldataRule {
        role: ArgumentRole::Owner,
        applies: needs_owner,
        value: hardhat_owner,
    },
];

/// ERC721 under Nile.
pub static NILE_ERC721_RULES: &[CalldataRule] = &[CalldataRule {
    role: ArgumentRole::Owner,
    applies: needs_owner,
    value: nile_owner,
}];

/// ERC721 under Hardhat.
pub static HARDHAT_ERC721_RULES: &[CalldataRule] = &[CalldataRule {
    role: ArgumentRole::Owner,
    applies: needs_owner,
    value: hardhat_owner,
}];
