mod report;
mod threshold;

pub use report::{Issue, MetricKind, Report, Severity};
pub use threshold::{ThresholdPair, Thresholds};

use std::path::Path;

use crate::analyzer::{FunctionRecord, StructureTracker};

/// Which metric checks to run for a file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CheckSelection {
    pub file_length: bool,
    pub functions: bool,
    pub nesting: bool,
}

impl CheckSelection {
    #[must_use]
    pub const fn all() -> Self {
        Self {
            file_length: true,
            functions: true,
            nesting: true,
        }
    }
}

impl Default for CheckSelection {
    fn default() -> Self {
        Self::all()
    }
}

/// Check one file's contents against a language's thresholds.
///
/// The whole-file line count is evaluated independently of function
/// structure; function metrics come from the tracker's records.
#[must_use]
pub fn check_file(
    rel_path: &Path,
    content: &str,
    tracker: &dyn StructureTracker,
    thresholds: &Thresholds,
    selection: CheckSelection,
) -> Vec<Issue> {
    let mut issues = Vec::new();

    if selection.file_length {
        let line_count = content.lines().count();
        if let Some(severity) = thresholds.file.evaluate(line_count) {
            let limit = thresholds.file.limit_for(severity);
            issues.push(Issue {
                severity,
                file: rel_path.to_path_buf(),
                line: None,
                name: None,
                metric: MetricKind::FileLength,
                value: line_count,
                limit,
                message: format!(
                    "{} ({} lines, limit: {})",
                    rel_path.display(),
                    line_count,
                    limit
                ),
            });
        }
    }

    if selection.functions || selection.nesting {
        for func in tracker.parse(content) {
            if selection.functions {
                issues.extend(function_length_issue(rel_path, &func, thresholds));
            }
            if selection.nesting {
                issues.extend(nesting_issue(rel_path, &func, thresholds));
            }
        }
    }

    issues
}

fn function_length_issue(
    rel_path: &Path,
    func: &FunctionRecord,
    thresholds: &Thresholds,
) -> Option<Issue> {
    let severity = thresholds.function.evaluate(func.line_count)?;
    Some(Issue {
        severity,
        file: rel_path.to_path_buf(),
        line: Some(func.start_line),
        name: Some(func.name.clone()),
        metric: MetricKind::FunctionLength,
        value: func.line_count,
        limit: thresholds.function.limit_for(severity),
        message: format!(
            "{}:{} {} ({} lines)",
            rel_path.display(),
            func.start_line,
            func.name,
            func.line_count
        ),
    })
}

fn nesting_issue(rel_path: &Path, func: &FunctionRecord, thresholds: &Thresholds) -> Option<Issue> {
    let severity = thresholds.nesting.evaluate(func.max_depth)?;
    Some(Issue {
        severity,
        file: rel_path.to_path_buf(),
        line: Some(func.start_line),
        name: Some(func.name.clone()),
        metric: MetricKind::NestingDepth,
        value: func.max_depth,
        limit: thresholds.nesting.limit_for(severity),
        message: format!(
            "{}:{} {} (depth: {})",
            rel_path.display(),
            func.start_line,
            func.name,
            func.max_depth
        ),
    })
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
