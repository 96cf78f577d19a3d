//! ERC721 scaffold builder.
//!
//! Same shape as the ERC20 builder but simpler: the only conditional
//! argument is the owner, and upgradeable has no effect.

use crate::domain::{
    dialect::{hardhat, nile},
    entities::{FeatureConfiguration, GeneratedScaffold},
    error::DomainError,
    rules::{HARDHAT_ERC721_RULES, NILE_ERC721_RULES, apply_rules},
    value_objects::Framework,
};

const DEFAULT_NAME: &str = "Starknet NFT";
const DEFAULT_SYMBOL: &str = "STARK";

/// Build the ERC721 test scaffold for `framework`.
pub fn build_erc721_scaffold(
    framework: Framework,
    cfg: &FeatureConfiguration,
) -> Result<GeneratedScaffold, DomainError> {
    let scaffold = match framework {
        Framework::Nile if !cfg.is_customized() => GeneratedScaffold::from_parts(
            &[
                nile::owner_declaration(),
                nile::name_declaration(DEFAULT_NAME),
                nile::symbol_declaration(DEFAULT_SYMBOL),
            ],
            &["NAME", "SYMBOL", nile::OWNER],
        ),
        Framework::Nile => GeneratedScaffold::from_parts(
            &[nile::owner_declaration(), nile::name_declaration(cfg.name())],
            &apply_rules(NILE_ERC721_RULES, cfg),
        ),
        Framework::Hardhat if !cfg.is_customized() => GeneratedScaffold::from_parts(
            &[
                hardhat::owner_declaration(),
                hardhat::name_declaration(DEFAULT_NAME),
                hardhat::symbol_declaration(DEFAULT_SYMBOL),
            ],
            &[
                hardhat::field("name", "NAME"),
                hardhat::field("symbol", "SYMBOL"),
                hardhat::OWNER_FIELD.to_string(),
            ],
        ),
        Framework::Hardhat => GeneratedScaffold::from_parts(
            &[
                hardhat::owner_declaration(),
                hardhat::name_declaration(cfg.name()),
            ],
            &apply_rules(HARDHAT_ERC721_RULES, cfg),
        ),
        Framework::Protostar => {
            return Err(DomainError::UnsupportedFramework {
                framework: framework.to_string(),
            });
        }
    };

    Ok(scaffold)
}
