//! `intelliscan lookup` / `intelliscan fast-formula` – one fetch, filter and display cycle.

use anyhow::{Context, Result};
use intelliscan_core::config::IntelliscanConfig;
use intelliscan_core::report::{ReportRequest, ReportVariant};
use intelliscan_core::search;

use crate::cli::render;
use crate::cli::SearchArgs;

/// Builds the request from flags/env, falling back to the config file for URL and username.
pub(crate) fn build_request(
    cfg: &IntelliscanConfig,
    variant: ReportVariant,
    args: &SearchArgs,
) -> ReportRequest {
    let base_url = args
        .url
        .clone()
        .or_else(|| cfg.environment_url.clone())
        .unwrap_or_default();
    let username = args
        .username
        .clone()
        .or_else(|| cfg.username.clone())
        .unwrap_or_default();
    let report_path = args
        .report_path
        .clone()
        .unwrap_or_else(|| cfg.reports.path_for(variant).to_string());
    ReportRequest::new(
        base_url,
        username,
        args.password.clone().unwrap_or_default(),
        report_path,
    )
}

/// Success line shown after a fetch.
pub(crate) fn summary_line(matched: usize) -> String {
    format!("Fetched {} matching records.", matched)
}

pub fn run_search(cfg: &IntelliscanConfig, variant: ReportVariant, args: &SearchArgs) -> Result<()> {
    let request = build_request(cfg, variant, args);
    tracing::info!(report = %variant, ?request, "fetching report");

    let outcome = search::run_search(&request, &args.search)
        .with_context(|| format!("could not fetch or decode the {} report", variant))?;

    eprintln!("{}", summary_line(outcome.matched()));
    let out = render::render(&outcome.table, args.format, cfg.display.max_cell_width)?;
    print!("{}", out);
    Ok(())
}
