//! Command handlers.
//!
//! Each handler translates CLI arguments into core calls and displays the
//! results. No scaffold rules live here.

pub mod calldata;
pub mod completions;
pub mod config;
pub mod list;
pub mod plan;
pub mod render;

use tracing::debug;

use starkgen_adapters::{BuiltinTemplateStore, SimpleRenderer};
use starkgen_core::{
    application::ScaffoldService,
    domain::{FeatureConfiguration, Framework, GeneratedScaffold, RenderedTestFile, TokenStandard},
};

use crate::{
    cli::{ContractArgs, FeatureArgs, GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Wire the scaffold service to the shipped templates plus any overrides.
///
/// `--templates-dir` wins over `templates.dir` from the config.
pub(crate) fn build_service(global: &GlobalArgs, config: &AppConfig) -> CliResult<ScaffoldService> {
    let mut store = BuiltinTemplateStore::new();

    if let Some(dir) = global
        .templates_dir
        .as_ref()
        .or(config.templates.dir.as_ref())
    {
        debug!(dir = %dir.display(), "loading template overrides");
        store = store.with_overrides(dir)?;
    }

    Ok(ScaffoldService::new(
        Box::new(store),
        Box::new(SimpleRenderer::new()),
    ))
}

/// One contract as named on the command line.
#[derive(Debug)]
pub(crate) struct ContractSelection {
    pub standard: TokenStandard,
    pub framework: Framework,
    pub features: FeatureConfiguration,
}

/// Parse the standard, then the framework, then collect the features.
pub(crate) fn select_contract(
    args: &ContractArgs,
    config: &AppConfig,
) -> CliResult<ContractSelection> {
    let standard: TokenStandard = args.standard.parse()?;
    let framework: Framework = args
        .framework
        .as_deref()
        .unwrap_or(&config.defaults.framework)
        .parse()?;

    Ok(ContractSelection {
        standard,
        framework,
        features: features_from(&args.features),
    })
}

fn features_from(args: &FeatureArgs) -> FeatureConfiguration {
    if !args.customize {
        return FeatureConfiguration::canned();
    }

    FeatureConfiguration::customized(args.name.clone().unwrap_or_default())
        .with_premint(args.premint.clone().unwrap_or_default())
        .with_mintable(args.mintable)
        .with_burnable(args.burnable)
        .with_pausable(args.pausable)
        .with_upgradeable(args.upgradeable)
}

/// Print a scaffold as two labelled sections.
pub(crate) fn print_scaffold(
    output: &OutputManager,
    title: &str,
    scaffold: &GeneratedScaffold,
) -> CliResult<()> {
    output.header(title)?;
    output.label("# variable declarations")?;
    output.emit(&scaffold.variable_declarations)?;
    output.print("")?;
    output.label("# constructor arguments")?;
    output.emit(&scaffold.constructor_arguments)?;
    Ok(())
}

/// Print rendered test files.
///
/// Each file gets a `==> path <==` line when stdout is a terminal or when
/// several files share the stream. A single piped file stays a valid source
/// file.
pub(crate) fn print_rendered(output: &OutputManager, files: &[RenderedTestFile]) -> CliResult<()> {
    let labelled = output.is_human() || files.len() > 1;

    for (i, file) in files.iter().enumerate() {
        if i > 0 {
            output.emit("")?;
        }
        if labelled {
            output.emit(&file_separator(file))?;
        }
        output.emit(&file.content)?;
    }

    Ok(())
}

fn file_separator(file: &RenderedTestFile) -> String {
    format!("==> {} <==", file.path.display())
}

/// `ERC20 on nile`
pub(crate) fn contract_title(standard: TokenStandard, framework: Framework) -> String {
    format!("{} on {}", standard.contract_name(), framework)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use starkgen_core::{domain::DomainError, error::StarkgenError};

    fn contract_args(argv: &[&str]) -> ContractArgs {
        let mut full = vec!["starkgen", "calldata"];
        full.extend_from_slice(argv);
        match Cli::parse_from(full).command {
            Commands::Calldata(args) => args,
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn framework_defaults_to_config() {
        let mut config = AppConfig::default();
        config.defaults.framework = "hardhat".into();

        let selection = select_contract(&contract_args(&["-s", "erc721"]), &config).unwrap();

        assert_eq!(selection.framework, Framework::Hardhat);
        assert_eq!(selection.standard, TokenStandard::Erc721);
        assert_eq!(selection.features, FeatureConfiguration::canned());
    }

    #[test]
    fn customized_flags_become_features() {
        let selection = select_contract(
            &contract_args(&[
                "-s",
                "ERC20",
                "--customize",
                "--name",
                "Gold",
                "--premint",
                "500",
                "--pausable",
            ]),
            &AppConfig::default(),
        )
        .unwrap();

        assert_eq!(
            selection.features,
            FeatureConfiguration::customized("Gold")
                .with_premint("500")
                .with_pausable(true)
        );
    }

    #[test]
    fn standard_is_checked_before_framework() {
        let err = select_contract(
            &contract_args(&["-s", "erc1155", "-f", "truffle"]),
            &AppConfig::default(),
        )
        .unwrap_err();

        assert!(matches!(
            err,
            crate::error::CliError::Core(StarkgenError::Domain(
                DomainError::UnsupportedStandard { .. }
            ))
        ));
    }

    #[test]
    fn separator_names_the_file() {
        let file = RenderedTestFile {
            standard: TokenStandard::Erc20,
            path: "tests/test_ERC20.py".into(),
            content: String::new(),
        };
        assert_eq!(file_separator(&file), "==> tests/test_ERC20.py <==");
    }

    #[test]
    fn title_uses_contract_name() {
        assert_eq!(
            contract_title(TokenStandard::Erc20, Framework::Nile),
            "ERC20 on nile"
        );
    }
}
