use std::fmt::Write;

use crate::checker::{Issue, Report, Severity};
use crate::error::Result;

use super::{ReportFormatter, RunInfo, SeverityFilter};

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

/// Human-readable report, grouped by severity.
pub struct TextFormatter {
    use_colors: bool,
    filter: SeverityFilter,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            filter: SeverityFilter::All,
        }
    }

    #[must_use]
    pub const fn with_filter(mut self, filter: SeverityFilter) -> Self {
        self.filter = filter;
        self
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn paint(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn write_section(&self, output: &mut String, title: &str, issues: &[&Issue], color: &str) {
        let _ = writeln!(output);
        let heading = self.paint(&format!("--- {title} ({}) ---", issues.len()), ansi::BOLD);
        let _ = writeln!(output, "{heading}");
        let label = match issues.first().map(|i| i.severity) {
            Some(Severity::Error) => "ERROR ",
            _ => "WARN  ",
        };
        for issue in issues {
            let _ = writeln!(output, "{} {}", self.paint(label, color), issue.message);
        }
    }

    fn write_summary(&self, output: &mut String, report: &Report) {
        let _ = writeln!(output);
        let _ = writeln!(output, "{}", self.paint("--- SUMMARY ---", ansi::BOLD));
        let _ = writeln!(output, "Files scanned: {}", report.files_scanned);

        let errors = report.error_count();
        let error_color = if errors > 0 { ansi::RED } else { ansi::GREEN };
        let _ = writeln!(
            output,
            "Errors: {}",
            self.paint(&errors.to_string(), error_color)
        );

        let warnings = report.warning_count();
        let warn_color = if warnings > 0 { ansi::YELLOW } else { ansi::GREEN };
        let _ = writeln!(
            output,
            "Warnings: {}",
            self.paint(&warnings.to_string(), warn_color)
        );
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &Report, info: &RunInfo) -> Result<String> {
        let mut output = String::new();

        let header = self.paint("=== Code Smells Report ===", ansi::BOLD);
        let _ = writeln!(output, "{header}");
        let _ = writeln!(output, "Project: {}", info.project.display());
        let names: Vec<&str> = info.languages.iter().map(|l| l.name()).collect();
        let _ = writeln!(output, "Languages: {}", names.join(", "));

        let errors: Vec<&Issue> = report
            .issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
            .collect();
        let warnings: Vec<&Issue> = report
            .issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
            .collect();

        if self.filter != SeverityFilter::WarningsOnly && !errors.is_empty() {
            self.write_section(&mut output, "ERRORS", &errors, ansi::RED);
        }

        if self.filter != SeverityFilter::ErrorsOnly && !warnings.is_empty() {
            self.write_section(&mut output, "WARNINGS", &warnings, ansi::YELLOW);
        }

        self.write_summary(&mut output, report);

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
