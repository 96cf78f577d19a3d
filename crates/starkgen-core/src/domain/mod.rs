// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for starkgen.
//!
//! This module contains the scaffold synthesis rules with ZERO I/O.
//! Template storage and rendering are handled via ports (traits) defined in
//! the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No tracing**: Observability belongs to the application and CLI layers
//! - **Immutable values**: All domain objects are Clone + PartialEq
//!
// Public API - what the world sees
pub mod builders;
pub mod dialect;
pub mod entities;
pub mod error;
pub mod format;
pub mod resolver;
pub mod rules;
pub mod value_objects;

// Re-exports for convenience
pub use builders::{build_erc20_scaffold, build_erc721_scaffold};
pub use entities::{
    ContractRequest, FeatureConfiguration, GeneratedScaffold, PlannedContract, ProjectRequest,
    RenderedTestFile, TemplateSource, TestTemplate,
};
pub use error::DomainError;
pub use format::{join_arguments, join_lines};
pub use resolver::{resolve_scaffold, supported_frameworks};
pub use rules::{ArgumentRole, CalldataRule};
pub use value_objects::{Framework, TokenStandard};

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // End-to-end scaffold properties
    // ========================================================================

    #[test]
    fn gold_erc20_on_nile() {
        let cfg = FeatureConfiguration::customized("Gold")
            .with_premint("500")
            .with_mintable(true);

        let scaffold = resolve_scaffold(TokenStandard::Erc20, Framework::Nile, &cfg).unwrap();

        assert_eq!(scaffold.constructor_arguments, "OWNER, OWNER");
        assert_eq!(
            scaffold.variable_declarations,
            "OWNER = 42\nNAME = str_to_felt(\"Gold\")"
        );
    }

    #[test]
    fn gold_erc20_on_nile_upgradeable() {
        let cfg = FeatureConfiguration::customized("Gold")
            .with_premint("500")
            .with_mintable(true)
            .with_upgradeable(true);

        let scaffold = resolve_scaffold(TokenStandard::Erc20, Framework::Nile, &cfg).unwrap();

        assert_eq!(
            scaffold.constructor_arguments,
            "admin.contract_address, admin.contract_address, admin.contract_address"
        );
        assert_eq!(scaffold.variable_declarations, "NAME = str_to_felt(\"Gold\")");
    }

    #[test]
    fn canned_output_is_stable_per_pair() {
        for standard in TokenStandard::ALL {
            for framework in supported_frameworks() {
                let a = resolve_scaffold(standard, framework, &FeatureConfiguration::canned())
                    .unwrap();
                let b = resolve_scaffold(standard, framework, &FeatureConfiguration::canned())
                    .unwrap();
                assert_eq!(a, b);
                assert!(!a.constructor_arguments.is_empty());
            }
        }
    }

    #[test]
    fn erc721_without_owner_features_has_empty_calldata() {
        let cfg = FeatureConfiguration::customized("Apes").with_premint("5");
        for framework in supported_frameworks() {
            let scaffold = resolve_scaffold(TokenStandard::Erc721, framework, &cfg).unwrap();
            assert_eq!(scaffold.constructor_arguments, "");
        }
    }
}
