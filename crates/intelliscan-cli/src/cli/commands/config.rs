//! `intelliscan config` – show where the config lives and what it says.

use anyhow::Result;
use intelliscan_core::config::{self, IntelliscanConfig};

pub fn run_config(cfg: &IntelliscanConfig) -> Result<()> {
    println!("# {}", config::config_path()?.display());
    print!("{}", toml::to_string_pretty(cfg)?);
    Ok(())
}
