//! CLI for INTELLISCAN report search.

mod commands;
mod render;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use intelliscan_core::config;
use intelliscan_core::report::ReportVariant;

use commands::{run_config, run_search};
pub use render::OutputFormat;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "intelliscan")]
#[command(version)]
#[command(
    about = "INTELLISCAN: search lookups, value sets and fast formulas in a BI Publisher report",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch the LOOKUP & VALUESET report and search it.
    Lookup(SearchArgs),

    /// Fetch the FAST FORMULA report and search it.
    FastFormula(SearchArgs),

    /// Show the config file path and the settings in effect.
    Config,
}

/// Inputs shared by both report subcommands.
#[derive(Debug, Clone, Args)]
pub struct SearchArgs {
    /// Environment URL, e.g. https://xxxx-test.fa.ocs.oraclecloud.com (default: from config).
    #[arg(long, env = "INTELLISCAN_URL")]
    pub url: Option<String>,

    /// Username (default: from config).
    #[arg(short, long, env = "INTELLISCAN_USERNAME")]
    pub username: Option<String>,

    /// Password. Prefer the environment variable over the flag.
    #[arg(long, env = "INTELLISCAN_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Full or partial OBJ_NAME or DATA to search for (case-insensitive).
    #[arg(short, long, default_value = "", value_name = "TERM")]
    pub search: String,

    /// Output format for the matching rows.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Report catalog path for this call, overriding the config file.
    #[arg(long, value_name = "PATH")]
    pub report_path: Option<String>,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Lookup(args) => run_search(&cfg, ReportVariant::Lookup, &args)?,
            CliCommand::FastFormula(args) => run_search(&cfg, ReportVariant::FastFormula, &args)?,
            CliCommand::Config => run_config(&cfg)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
