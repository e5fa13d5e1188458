//! Report variants and the per-call request handed to the fetcher.

use std::fmt;

/// Default catalog path of the LOOKUP & VALUESET report.
pub const LOOKUP_REPORT_PATH: &str =
    "/Custom/Human Capital Management/Sample Reports/INTELLISCAN REPORT.xdo";

/// Default catalog path of the FAST FORMULA report.
pub const FAST_FORMULA_REPORT_PATH: &str =
    "/Custom/Human Capital Management/Sample Reports/FF INTELLISCAN REPORT.xdo";

/// The two published INTELLISCAN reports. Both share one fetch/filter path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportVariant {
    Lookup,
    FastFormula,
}

impl ReportVariant {
    pub const ALL: [ReportVariant; 2] = [ReportVariant::Lookup, ReportVariant::FastFormula];

    /// Human-readable title used in CLI output.
    pub fn title(self) -> &'static str {
        match self {
            ReportVariant::Lookup => "LOOKUP & VALUESET",
            ReportVariant::FastFormula => "FAST FORMULA",
        }
    }

    /// Built-in report path; the config file may override it.
    pub fn default_path(self) -> &'static str {
        match self {
            ReportVariant::Lookup => LOOKUP_REPORT_PATH,
            ReportVariant::FastFormula => FAST_FORMULA_REPORT_PATH,
        }
    }
}

impl fmt::Display for ReportVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Everything one `runReport` call needs. Built per user action, never stored.
#[derive(Clone, PartialEq, Eq)]
pub struct ReportRequest {
    /// Environment base URL, e.g. `https://xxxx.fa.ocs.oraclecloud.com`.
    pub base_url: String,
    pub username: String,
    pub password: String,
    /// Absolute catalog path of the `.xdo` report.
    pub report_path: String,
}

impl ReportRequest {
    pub fn new(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        report_path: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            username: username.into(),
            password: password.into(),
            report_path: report_path.into(),
        }
    }
}

// Password stays out of logs and panic messages.
impl fmt::Debug for ReportRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReportRequest")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("report_path", &self.report_path)
            .finish()
    }
}
