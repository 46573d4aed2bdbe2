use std::path::PathBuf;

use serde::Serialize;

/// Issue severity, ordered so that `Error` outranks `Warning`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

/// The metric a threshold pair applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum MetricKind {
    #[serde(rename = "file-length")]
    FileLength,
    #[serde(rename = "function-length")]
    FunctionLength,
    #[serde(rename = "nesting-depth")]
    NestingDepth,
}

impl MetricKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FileLength => "file-length",
            Self::FunctionLength => "function-length",
            Self::NestingDepth => "nesting-depth",
        }
    }
}

/// One emitted finding: a metric value that breached a threshold.
#[derive(Debug, Clone, Serialize)]
pub struct Issue {
    pub severity: Severity,
    #[serde(serialize_with = "serialize_path")]
    pub file: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub metric: MetricKind,
    pub value: usize,
    pub limit: usize,
    #[serde(skip)]
    pub message: String,
}

fn serialize_path<S>(path: &PathBuf, s: S) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    s.serialize_str(&path.display().to_string())
}

/// Accumulated scan results. One instance per run; per-file fragments are
/// merged into it, which keeps per-file scanning order-independent.
#[derive(Debug, Default)]
pub struct Report {
    pub issues: Vec<Issue>,
    pub files_scanned: usize,
}

impl Report {
    pub fn add_issue(&mut self, issue: Issue) {
        self.issues.push(issue);
    }

    /// Fold another report fragment into this one. Commutative up to issue
    /// order, which consumers never rely on.
    pub fn merge(&mut self, other: Self) {
        self.issues.extend(other.issues);
        self.files_scanned += other.files_scanned;
    }

    #[must_use]
    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
            .count()
    }

    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
            .count()
    }

    #[must_use]
    pub fn exit_code(&self) -> i32 {
        if self.error_count() > 0 {
            crate::EXIT_ERRORS
        } else if self.warning_count() > 0 {
            crate::EXIT_WARNINGS
        } else {
            crate::EXIT_CLEAN
        }
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
