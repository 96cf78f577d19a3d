//! ERC20 scaffold builder.
//!
//! Canned configurations get the fixed "Starknet"/"STARK" scaffold with a
//! 1000-token supply. Customized configurations get a declaration block for
//! the chosen name and an argument list driven by the ERC20 rule tables.

use crate::domain::{
    dialect::{hardhat, nile},
    entities::{FeatureConfiguration, GeneratedScaffold},
    error::DomainError,
    rules::{HARDHAT_ERC20_RULES, NILE_ERC20_RULES, apply_rules},
    value_objects::Framework,
};

const DEFAULT_NAME: &str = "Starknet";
const DEFAULT_SYMBOL: &str = "STARK";
const DEFAULT_SUPPLY: u64 = 1000;
const DEFAULT_DECIMALS: u8 = 18;

/// Build the ERC20 test scaffold for `framework`.
///
/// Fails only for frameworks without builder support.
pub fn build_erc20_scaffold(
    framework: Framework,
    cfg: &FeatureConfiguration,
) -> Result<GeneratedScaffold, DomainError> {
    match (framework, cfg.is_customized()) {
        (Framework::Nile, false) => Ok(nile_canned()),
        (Framework::Nile, true) => Ok(nile_customized(cfg)),
        (Framework::Hardhat, false) => Ok(hardhat_canned()),
        (Framework::Hardhat, true) => Ok(hardhat_customized(cfg)),
        (Framework::Protostar, _) => Err(DomainError::UnsupportedFramework {
            framework: framework.to_string(),
        }),
    }
}

// ── Nile ─────────────────────────────────────────────────────────────────────

fn nile_canned() -> GeneratedScaffold {
    // INIT_SUPPLY is a (low, high) felt pair; `*` splices both limbs.
    GeneratedScaffold::from_parts(
        &[
            nile::name_declaration(DEFAULT_NAME),
            nile::symbol_declaration(DEFAULT_SYMBOL),
            format!("INIT_SUPPLY = to_uint({DEFAULT_SUPPLY})"),
            format!("DECIMALS = {DEFAULT_DECIMALS}"),
        ],
        &["NAME", "SYMBOL", "DECIMALS", "*INIT_SUPPLY", nile::OWNER],
    )
}

fn nile_customized(cfg: &FeatureConfiguration) -> GeneratedScaffold {
    // Upgradeable configurations never declare the owner sentinel; every
    // Nile argument is the proxy admin in that case.
    let declarations = if cfg.is_upgradeable() {
        vec![nile::name_declaration(cfg.name())]
    } else {
        vec![nile::owner_declaration(), nile::name_declaration(cfg.name())]
    };

    GeneratedScaffold::from_parts(&declarations, &apply_rules(NILE_ERC20_RULES, cfg))
}

// ── Hardhat ──────────────────────────────────────────────────────────────────

fn hardhat_canned() -> GeneratedScaffold {
    GeneratedScaffold::from_parts(
        &[
            hardhat::name_declaration(DEFAULT_NAME),
            hardhat::symbol_declaration(DEFAULT_SYMBOL),
            format!("const INIT_SUPPLY = {{ low: {DEFAULT_SUPPLY}, high: 0 }}"),
            format!("const DECIMALS = {DEFAULT_DECIMALS}"),
        ],
        &[
            hardhat::field("name", "NAME"),
            hardhat::field("symbol", "SYMBOL"),
            hardhat::field("decimals", "DECIMALS"),
            hardhat::field("initial_supply", "INIT_SUPPLY"),
            hardhat::field("recipient", hardhat::OWNER),
        ],
    )
}

fn hardhat_customized(cfg: &FeatureConfiguration) -> GeneratedScaffold {
    GeneratedScaffold::from_parts(
        &[
            hardhat::owner_declaration(),
            hardhat::name_declaration(cfg.name()),
        ],
        &apply_rules(HARDHAT_ERC20_RULES, cfg),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gold() -> FeatureConfiguration {
        FeatureConfiguration::customized("Gold")
    }

    fn build(framework: Framework, cfg: &FeatureConfiguration) -> GeneratedScaffold {
        build_erc20_scaffold(framework, cfg).unwrap()
    }

    // ── canned ───────────────────────────────────────────────────────────────

    #[test]
    fn nile_canned_scaffold() {
        let scaffold = build(Framework::Nile, &FeatureConfiguration::canned());
        assert_eq!(
            scaffold.variable_declarations,
            "NAME = str_to_felt(\"Starknet\")\n\
             SYMBOL = str_to_felt(\"STARK\")\n\
             INIT_SUPPLY = to_uint(1000)\n\
             DECIMALS = 18"
        );
        assert_eq!(
            scaffold.constructor_arguments,
            "NAME, SYMBOL, DECIMALS, *INIT_SUPPLY, OWNER"
        );
    }

    #[test]
    fn hardhat_canned_scaffold() {
        let scaffold = build(Framework::Hardhat, &FeatureConfiguration::canned());
        assert_eq!(
            scaffold.variable_declarations,
            "const NAME = starknet.shortStringToBigInt(\"Starknet\")\n\
             const SYMBOL = starknet.shortStringToBigInt(\"STARK\")\n\
             const INIT_SUPPLY = { low: 1000, high: 0 }\n\
             const DECIMALS = 18"
        );
        assert_eq!(
            scaffold.constructor_arguments,
            "name: NAME, symbol: SYMBOL, decimals: DECIMALS, \
             initial_supply: INIT_SUPPLY, recipient: OWNER"
        );
    }

    #[test]
    fn canned_ignores_every_other_field() {
        // Deserialize so the flags can be set without `customized`.
        let noisy: FeatureConfiguration = serde_json::from_str(
            r#"{"customized": false, "name": "X", "premint": "9", "mintable": true,
                "burnable": true, "pausable": true, "upgradeable": true}"#,
        )
        .unwrap();

        for fw in [Framework::Nile, Framework::Hardhat] {
            assert_eq!(build(fw, &noisy), build(fw, &FeatureConfiguration::canned()));
        }
    }

    // ── Nile customized ──────────────────────────────────────────────────────

    #[test]
    fn nile_premint_and_mintable() {
        let cfg = gold().with_premint("500").with_mintable(true);
        let scaffold = build(Framework::Nile, &cfg);
        assert_eq!(scaffold.constructor_arguments, "OWNER, OWNER");
        assert_eq!(
            scaffold.variable_declarations,
            "OWNER = 42\nNAME = str_to_felt(\"Gold\")"
        );
    }

    #[test]
    fn nile_upgradeable_passes_proxy_admin_three_times() {
        let cfg = gold()
            .with_premint("500")
            .with_mintable(true)
            .with_upgradeable(true);
        let scaffold = build(Framework::Nile, &cfg);
        assert_eq!(
            scaffold.constructor_arguments,
            "admin.contract_address, admin.contract_address, admin.contract_address"
        );
        assert_eq!(
            scaffold
                .argument_items()
                .filter(|a| *a == nile::PROXY_ADMIN)
                .count(),
            3
        );
        assert_eq!(scaffold.variable_declarations, "NAME = str_to_felt(\"Gold\")");
    }

    #[test]
    fn nile_upgradeable_alone_still_passes_proxy_admin() {
        let scaffold = build(Framework::Nile, &gold().with_upgradeable(true));
        assert_eq!(scaffold.constructor_arguments, "admin.contract_address");
        assert!(scaffold.declaration_lines().all(|l| !l.starts_with("OWNER")));
    }

    #[test]
    fn nile_bare_customization_has_no_arguments() {
        let cfg = gold().with_premint("0");
        let scaffold = build(Framework::Nile, &cfg);
        assert_eq!(scaffold.constructor_arguments, "");
        assert_eq!(
            scaffold.variable_declarations,
            "OWNER = 42\nNAME = str_to_felt(\"Gold\")"
        );
    }

    #[test]
    fn nile_pausable_alone_adds_owner() {
        let scaffold = build(Framework::Nile, &gold().with_pausable(true));
        assert_eq!(scaffold.constructor_arguments, "OWNER");
    }

    #[test]
    fn nile_premint_alone_adds_recipient() {
        let scaffold = build(Framework::Nile, &gold().with_premint("1"));
        assert_eq!(scaffold.constructor_arguments, "OWNER");
    }

    #[test]
    fn nile_empty_name_flows_through() {
        let scaffold = build(Framework::Nile, &FeatureConfiguration::customized(""));
        assert_eq!(
            scaffold.variable_declarations,
            "OWNER = 42\nNAME = str_to_felt(\"\")"
        );
    }

    // ── Hardhat customized ───────────────────────────────────────────────────

    #[test]
    fn hardhat_premint_and_owner_use_named_fields() {
        let cfg = gold().with_premint("500").with_pausable(true);
        let scaffold = build(Framework::Hardhat, &cfg);
        assert_eq!(
            scaffold.constructor_arguments,
            "recipient: OWNER, owner: OWNER"
        );
        assert_eq!(
            scaffold.variable_declarations,
            "const OWNER = 42\nconst NAME = starknet.shortStringToBigInt(\"Gold\")"
        );
    }

    #[test]
    fn hardhat_ignores_upgradeable() {
        let plain = gold().with_premint("500").with_mintable(true);
        let upgradeable = plain.clone().with_upgradeable(true);
        assert_eq!(
            build(Framework::Hardhat, &plain),
            build(Framework::Hardhat, &upgradeable)
        );
    }

    #[test]
    fn hardhat_bare_customization_has_no_arguments() {
        let scaffold = build(Framework::Hardhat, &gold());
        assert_eq!(scaffold.constructor_arguments, "");
    }

    // ── invariants across flag combinations ──────────────────────────────────

    fn every_customization() -> Vec<FeatureConfiguration> {
        let mut all = Vec::new();
        for bits in 0u8..32 {
            let bit = |n: u8| bits & (1 << n) != 0;
            all.push(
                gold()
                    .with_premint(if bit(0) { "100" } else { "0" })
                    .with_mintable(bit(1))
                    .with_burnable(bit(2))
                    .with_pausable(bit(3))
                    .with_upgradeable(bit(4)),
            );
        }
        all
    }

    #[test]
    fn argument_order_is_recipient_owner_proxy_admin() {
        for cfg in every_customization() {
            let mut expected = Vec::new();
            let owner = if cfg.is_upgradeable() { "admin.contract_address" } else { "OWNER" };
            if cfg.has_premint() {
                expected.push(owner);
            }
            if cfg.needs_owner() {
                expected.push(owner);
            }
            if cfg.is_upgradeable() {
                expected.push("admin.contract_address");
            }

            let scaffold = build(Framework::Nile, &cfg);
            assert_eq!(
                scaffold.argument_items().collect::<Vec<_>>(),
                expected,
                "for {cfg:?}"
            );
        }
    }

    #[test]
    fn burnable_never_changes_output() {
        for cfg in every_customization() {
            for fw in [Framework::Nile, Framework::Hardhat] {
                assert_eq!(
                    build(fw, &cfg.clone().with_burnable(false)),
                    build(fw, &cfg.clone().with_burnable(true))
                );
            }
        }
    }

    #[test]
    fn hardhat_declares_every_referenced_symbol() {
        for cfg in every_customization() {
            let scaffold = build(Framework::Hardhat, &cfg);
            if !scaffold.constructor_arguments.is_empty() {
                assert!(scaffold.variable_declarations.contains("const OWNER = 42"));
            }
        }
    }

    #[test]
    fn protostar_is_rejected() {
        assert!(matches!(
            build_erc20_scaffold(Framework::Protostar, &gold()),
            Err(DomainError::UnsupportedFramework { .. })
        ));
    }
}
