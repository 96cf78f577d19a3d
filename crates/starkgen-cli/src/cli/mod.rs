//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! and help text. No business logic lives here. Standard and framework names
//! stay plain strings so the core parsers decide what is supported.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "starkgen",
    bin_name = "starkgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Starknet token project test scaffolding",
    long_about = "starkgen derives the variable declarations and constructor \
                  calldata that the tests of a Starknet token contract need, \
                  and splices them into ready-to-run test files.",
    after_help = "EXAMPLES:\n\
        \x20 starkgen calldata --standard erc20\n\
        \x20 starkgen calldata --standard erc20 --customize --name Gold --premint 500 --mintable\n\
        \x20 starkgen render   --standard erc721 --framework hardhat > test/erc721.test.ts\n\
        \x20 starkgen plan project.toml --render",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the scaffold for one contract.
    #[command(
        visible_alias = "c",
        about = "Print declarations and constructor calldata for one contract",
        after_help = "EXAMPLES:\n\
            \x20 starkgen calldata -s erc20\n\
            \x20 starkgen calldata -s erc20 -f hardhat --customize --name Gold --premint 500\n\
            \x20 starkgen calldata -s erc721 --customize --name Art --mintable --output-format json"
    )]
    Calldata(ContractArgs),

    /// Render the test file for one contract.
    #[command(
        visible_alias = "r",
        about = "Render the test file for one contract",
        after_help = "EXAMPLES:\n\
            \x20 starkgen render -s erc20 > tests/test_ERC20.py\n\
            \x20 starkgen render -s erc721 -f hardhat --customize --name Art --pausable"
    )]
    Render(ContractArgs),

    /// Scaffold every contract in a project file.
    #[command(
        visible_alias = "p",
        about = "Scaffold every contract listed in a project file",
        after_help = "PROJECT FILE:\n\
            \x20 framework = \"nile\"\n\
            \n\
            \x20 [contracts.erc20]\n\
            \x20 customized = true\n\
            \x20 name = \"Gold\"\n\
            \x20 premint = \"500\"\n\
            \x20 mintable = true\n\
            \n\
            \x20 [contracts.erc721]\n\
            \n\
            EXAMPLES:\n\
            \x20 starkgen plan project.toml\n\
            \x20 starkgen plan project.toml --render"
    )]
    Plan(PlanArgs),

    /// List available test templates.
    #[command(
        visible_alias = "ls",
        about = "List available test templates",
        after_help = "EXAMPLES:\n\
            \x20 starkgen list\n\
            \x20 starkgen list --framework hardhat\n\
            \x20 starkgen list --templates-dir ./templates"
    )]
    List(ListArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 starkgen completions bash > ~/.local/share/bash-completion/completions/starkgen\n\
            \x20 starkgen completions zsh  > ~/.zfunc/_starkgen\n\
            \x20 starkgen completions fish > ~/.config/fish/completions/starkgen.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the starkgen configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 starkgen config show\n\
            \x20 starkgen config get defaults.framework\n\
            \x20 starkgen config init --force"
    )]
    Config(ConfigCommands),
}

// ── calldata / render ─────────────────────────────────────────────────────────

/// Arguments selecting one contract and its features.
#[derive(Debug, Args)]
pub struct ContractArgs {
    /// Token standard.
    #[arg(
        short = 's',
        long = "standard",
        value_name = "STANDARD",
        help = "Token standard (erc20, erc721)"
    )]
    pub standard: String,

    /// Framework; defaults to `defaults.framework` from the config.
    #[arg(
        short = 'f',
        long = "framework",
        value_name = "FRAMEWORK",
        help = "Framework (nile, hardhat)"
    )]
    pub framework: Option<String>,

    #[command(flatten)]
    pub features: FeatureArgs,
}

/// Feature flags. Without `--customize` the canned scaffold is used and the
/// other flags are rejected.
#[derive(Debug, Default, Args)]
pub struct FeatureArgs {
    /// Derive the scaffold from the flags below.
    #[arg(long = "customize", help = "Derive the scaffold from feature flags")]
    pub customize: bool,

    /// Token name.
    #[arg(
        long = "name",
        value_name = "NAME",
        requires = "customize",
        help = "Token name"
    )]
    pub name: Option<String>,

    /// Amount minted at deployment; `0` means none.
    #[arg(
        long = "premint",
        value_name = "AMOUNT",
        requires = "customize",
        help = "Amount minted at deployment"
    )]
    pub premint: Option<String>,

    #[arg(long = "mintable", requires = "customize", help = "Owner can mint")]
    pub mintable: bool,

    #[arg(long = "burnable", requires = "customize", help = "Holders can burn")]
    pub burnable: bool,

    #[arg(long = "pausable", requires = "customize", help = "Owner can pause")]
    pub pausable: bool,

    #[arg(
        long = "upgradeable",
        requires = "customize",
        help = "Deploy behind a proxy"
    )]
    pub upgradeable: bool,
}

// ── plan ──────────────────────────────────────────────────────────────────────

/// Arguments for `starkgen plan`.
#[derive(Debug, Args)]
pub struct PlanArgs {
    /// TOML project file.
    #[arg(value_name = "PROJECT_FILE", help = "TOML project file")]
    pub project_file: PathBuf,

    /// Print the rendered test files instead of the scaffolds.
    #[arg(long = "render", help = "Print rendered test files")]
    pub render: bool,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `starkgen list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only list templates for one framework.
    #[arg(
        short = 'f',
        long = "framework",
        value_name = "FRAMEWORK",
        help = "Filter by framework"
    )]
    pub framework: Option<String>,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `starkgen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `starkgen config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration.
    Show,
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.framework`.
        key: String,
    },
    /// Print the path to the default configuration file.
    Path,
    /// Write a default configuration file.
    Init {
        /// Overwrite an existing config file.
        #[arg(long = "force", help = "Overwrite existing configuration")]
        force: bool,
    },
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_canned_calldata() {
        let cli = Cli::parse_from(["starkgen", "calldata", "--standard", "erc20"]);
        let Commands::Calldata(args) = cli.command else {
            panic!("expected Calldata command");
        };
        assert_eq!(args.standard, "erc20");
        assert!(args.framework.is_none());
        assert!(!args.features.customize);
    }

    #[test]
    fn parse_customized_render() {
        let cli = Cli::parse_from([
            "starkgen",
            "render",
            "-s",
            "erc20",
            "-f",
            "hardhat",
            "--customize",
            "--name",
            "Gold",
            "--premint",
            "500",
            "--mintable",
            "--upgradeable",
        ]);
        let Commands::Render(args) = cli.command else {
            panic!("expected Render command");
        };
        assert_eq!(args.framework.as_deref(), Some("hardhat"));
        assert_eq!(args.features.name.as_deref(), Some("Gold"));
        assert_eq!(args.features.premint.as_deref(), Some("500"));
        assert!(args.features.mintable);
        assert!(args.features.upgradeable);
        assert!(!args.features.pausable);
    }

    #[test]
    fn feature_flags_require_customize() {
        let result = Cli::try_parse_from(["starkgen", "calldata", "-s", "erc20", "--mintable"]);
        assert!(result.is_err());
    }

    #[test]
    fn unknown_standard_is_left_to_the_core() {
        let cli = Cli::try_parse_from(["starkgen", "calldata", "-s", "erc1155"]);
        assert!(cli.is_ok());
    }

    #[test]
    fn parse_plan_with_render() {
        let cli = Cli::parse_from(["starkgen", "plan", "project.toml", "--render"]);
        let Commands::Plan(args) = cli.command else {
            panic!("expected Plan command");
        };
        assert_eq!(args.project_file, PathBuf::from("project.toml"));
        assert!(args.render);
    }

    #[test]
    fn parse_config_init_force() {
        let cli = Cli::parse_from(["starkgen", "config", "init", "--force"]);
        assert!(matches!(
            cli.command,
            Commands::Config(ConfigCommands::Init { force: true })
        ));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["starkgen", "--quiet", "--verbose", "list"]);
        assert!(result.is_err());
    }
}
