//! `starkgen list`: show the test templates the store can render.

use tracing::instrument;

use starkgen_core::domain::Framework;

use crate::{
    cli::{GlobalArgs, ListArgs},
    commands::build_service,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(framework = ?args.framework))]
pub fn execute(
    args: ListArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let filter = args
        .framework
        .as_deref()
        .map(str::parse::<Framework>)
        .transpose()?;
    let service = build_service(&global, &config)?;

    let templates: Vec<_> = service
        .list_templates()?
        .into_iter()
        .filter(|t| filter.is_none_or(|f| t.framework == f.as_str()))
        .collect();

    if output.is_json() {
        return output.json(&templates);
    }

    output.header("Available test templates:")?;
    for t in &templates {
        output.emit(&format!(
            "  {:<8} {:<7} {} ({})",
            t.framework, t.standard, t.path, t.language
        ))?;
    }

    Ok(())
}
