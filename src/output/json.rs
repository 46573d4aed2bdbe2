use serde::Serialize;

use crate::checker::{Issue, Report};
use crate::error::Result;

use super::{ReportFormatter, RunInfo};

/// Machine-readable report for CI consumers.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonReport<'a> {
    project: String,
    languages: Vec<&'a str>,
    issues: &'a [Issue],
    summary: Summary,
}

#[derive(Serialize)]
struct Summary {
    files: usize,
    errors: usize,
    warnings: usize,
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &Report, info: &RunInfo) -> Result<String> {
        let json_report = JsonReport {
            project: info.project.display().to_string(),
            languages: info.languages.iter().map(|l| l.name()).collect(),
            issues: &report.issues,
            summary: Summary {
                files: report.files_scanned,
                errors: report.error_count(),
                warnings: report.warning_count(),
            },
        };

        Ok(serde_json::to_string_pretty(&json_report)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
