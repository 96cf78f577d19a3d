//! `starkgen config`: inspect and initialise configuration.

use tracing::info;

use crate::{
    cli::{ConfigCommands, GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Show => {
            if output.is_json() {
                output.json(&config)?;
            } else {
                output.emit(&config.to_toml()?)?;
            }
        }

        ConfigCommands::Get { key } => {
            output.emit(&config.get(&key)?)?;
        }

        ConfigCommands::Path => {
            let path = global.config.unwrap_or_else(AppConfig::config_path);
            output.emit(&path.display().to_string())?;
        }

        ConfigCommands::Init { force } => {
            let path = global.config.unwrap_or_else(AppConfig::config_path);
            AppConfig::write_default(&path, force)?;
            info!(path = %path.display(), "default configuration written");
            output.success(&format!("Wrote {}", path.display()))?;
        }
    }

    Ok(())
}
