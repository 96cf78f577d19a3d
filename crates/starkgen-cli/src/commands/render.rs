//! `starkgen render`: print the test file for one contract.

use tracing::{debug, instrument};

use crate::{
    cli::{ContractArgs, GlobalArgs},
    commands::{build_service, print_rendered, select_contract},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(standard = %args.standard))]
pub fn execute(
    args: ContractArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let selection = select_contract(&args, &config)?;
    let service = build_service(&global, &config)?;

    let file =
        service.render_test(selection.standard, selection.framework, &selection.features)?;
    debug!(path = %file.path.display(), bytes = file.content.len(), "test file rendered");

    if output.is_json() {
        return output.json(&file);
    }

    print_rendered(&output, std::slice::from_ref(&file))
}
