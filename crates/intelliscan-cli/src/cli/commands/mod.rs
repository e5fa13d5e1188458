//! CLI command handlers.

mod config;
mod search;

pub use config::run_config;
pub use search::run_search;

#[cfg(test)]
pub(crate) use search::{build_request, summary_line};
