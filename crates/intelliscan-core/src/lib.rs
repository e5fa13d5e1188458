pub mod config;
pub mod logging;

pub mod fetch;
pub mod filter;
pub mod records;
pub mod report;
pub mod search;
pub mod soap;
