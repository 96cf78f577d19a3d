//! `starkgen plan`: scaffold every contract in a project file.

use serde::Serialize;
use tracing::{info, instrument};

use starkgen_core::domain::{Framework, PlannedContract};

use crate::{
    cli::{GlobalArgs, PlanArgs},
    commands::{build_service, contract_title, print_rendered, print_scaffold},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
    project::load_project,
};

#[derive(Debug, Serialize)]
struct PlanReport<'a> {
    framework: Framework,
    contracts: &'a [PlannedContract],
}

#[instrument(skip_all, fields(project = %args.project_file.display(), render = args.render))]
pub fn execute(
    args: PlanArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let request = load_project(&args.project_file, &config.defaults.framework)?;
    let service = build_service(&global, &config)?;
    let framework = request.framework();

    if args.render {
        let files = service.render_tests(&request)?;
        info!(count = files.len(), %framework, "test files rendered");

        if output.is_json() {
            return output.json(&files);
        }

        return print_rendered(&output, &files);
    }

    let planned = service.plan(&request)?;
    info!(count = planned.len(), %framework, "project planned");

    if output.is_json() {
        return output.json(&PlanReport {
            framework,
            contracts: &planned,
        });
    }

    for (i, contract) in planned.iter().enumerate() {
        if i > 0 {
            output.print("")?;
        }
        print_scaffold(
            &output,
            &contract_title(contract.standard, framework),
            &contract.scaffold,
        )?;
    }

    Ok(())
}
