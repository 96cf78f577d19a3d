//! Scaffold resolver: (standard × framework) → builder.
//!
//! Pure dispatch. The framework is checked before any builder runs so an
//! unsupported framework never produces partial output.

use crate::domain::{
    builders::{build_erc20_scaffold, build_erc721_scaffold},
    entities::{FeatureConfiguration, GeneratedScaffold},
    error::DomainError,
    value_objects::{Framework, TokenStandard},
};

/// Frameworks with builder support, in display order.
pub fn supported_frameworks() -> impl Iterator<Item = Framework> {
    Framework::ALL.into_iter().filter(|fw| fw.is_supported())
}

/// Compute the test scaffold for one token contract.
///
/// # Errors
///
/// [`DomainError::UnsupportedFramework`] when `framework` has no builder
/// support. Unknown standards cannot reach this function: they fail with
/// [`DomainError::UnsupportedStandard`] when parsed.
pub fn resolve_scaffold(
    standard: TokenStandard,
    framework: Framework,
    cfg: &FeatureConfiguration,
) -> Result<GeneratedScaffold, DomainError> {
    let framework = framework.ensure_supported()?;

    match standard {
        TokenStandard::Erc20 => build_erc20_scaffold(framework, cfg),
        TokenStandard::Erc721 => build_erc721_scaffold(framework, cfg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatches_by_standard() {
        let cfg = FeatureConfiguration::canned();
        assert_eq!(
            resolve_scaffold(TokenStandard::Erc20, Framework::Nile, &cfg).unwrap(),
            build_erc20_scaffold(Framework::Nile, &cfg).unwrap()
        );
        assert_eq!(
            resolve_scaffold(TokenStandard::Erc721, Framework::Hardhat, &cfg).unwrap(),
            build_erc721_scaffold(Framework::Hardhat, &cfg).unwrap()
        );
    }

    #[test]
    fn protostar_fails_for_every_standard() {
        for standard in TokenStandard::ALL {
            assert_eq!(
                resolve_scaffold(standard, Framework::Protostar, &FeatureConfiguration::canned()),
                Err(DomainError::UnsupportedFramework {
                    framework: "protostar".into()
                })
            );
        }
    }

    #[test]
    fn unsupported_framework_suggestions_list_supported_ones() {
        let suggestions = DomainError::UnsupportedFramework {
            framework: "protostar".into(),
        }
        .suggestions();
        assert!(suggestions.contains(&"  • nile    - python test suite".to_string()));
        assert!(suggestions.contains(&"  • hardhat - typescript test suite".to_string()));
        assert!(!suggestions.iter().any(|s| s.contains("• protostar")));
    }

    #[test]
    fn supported_frameworks_are_nile_and_hardhat() {
        let supported: Vec<_> = supported_frameworks().collect();
        assert_eq!(supported, vec![Framework::Nile, Framework::Hardhat]);
    }
}
