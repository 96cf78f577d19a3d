//! `starkgen calldata`: print the scaffold for one contract.

use serde::Serialize;
use tracing::{info, instrument};

use starkgen_core::domain::{Framework, GeneratedScaffold, TokenStandard};

use crate::{
    cli::{ContractArgs, GlobalArgs},
    commands::{build_service, contract_title, print_scaffold, select_contract},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[derive(Debug, Serialize)]
struct CalldataReport<'a> {
    standard: TokenStandard,
    framework: Framework,
    #[serde(flatten)]
    scaffold: &'a GeneratedScaffold,
}

#[instrument(skip_all, fields(standard = %args.standard, customize = args.features.customize))]
pub fn execute(
    args: ContractArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let selection = select_contract(&args, &config)?;
    let service = build_service(&global, &config)?;

    let scaffold = service.scaffold(selection.standard, selection.framework, &selection.features)?;
    info!(
        standard = %selection.standard,
        framework = %selection.framework,
        "scaffold resolved"
    );

    if output.is_json() {
        return output.json(&CalldataReport {
            standard: selection.standard,
            framework: selection.framework,
            scaffold: &scaffold,
        });
    }

    print_scaffold(
        &output,
        &contract_title(selection.standard, selection.framework),
        &scaffold,
    )
}
