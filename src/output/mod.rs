mod json;
mod text;

pub use json::JsonFormatter;
pub use text::{ColorMode, TextFormatter};

use std::path::PathBuf;

use crate::checker::Report;
use crate::error::Result;
use crate::language::Lang;

/// Which severities the renderer should display. Exit codes are computed
/// from the full report either way.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SeverityFilter {
    #[default]
    All,
    ErrorsOnly,
    WarningsOnly,
}

/// Run-level context shown in report headers.
#[derive(Debug, Clone)]
pub struct RunInfo {
    pub project: PathBuf,
    pub languages: Vec<Lang>,
}

/// Renders an aggregated report into an output format.
pub trait ReportFormatter {
    /// Format the report into a string.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    fn format(&self, report: &Report, info: &RunInfo) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report grouped by severity
    #[default]
    Text,
    /// Machine-readable report for CI consumers
    Json,
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
