use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::checker::{CheckSelection, Thresholds};
use crate::output::{OutputFormat, SeverityFilter};

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Which metric checks to run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum CheckType {
    /// All checks
    #[default]
    All,
    /// Whole-file line count only
    #[value(name = "file-length")]
    FileLength,
    /// Function length only
    Functions,
    /// Nesting depth only
    Nesting,
}

impl CheckType {
    #[must_use]
    pub const fn selection(self) -> CheckSelection {
        match self {
            Self::All => CheckSelection::all(),
            Self::FileLength => CheckSelection {
                file_length: true,
                functions: false,
                nesting: false,
            },
            Self::Functions => CheckSelection {
                file_length: false,
                functions: true,
                nesting: false,
            },
            Self::Nesting => CheckSelection {
                file_length: false,
                functions: false,
                nesting: true,
            },
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "smell-guard")]
#[command(author, version, about = "Detect code smells across multiple programming languages")]
#[command(long_about = "Flag long files, long functions and deep nesting using \
    lightweight per-language heuristics.\n\n\
    Exit codes:\n  \
    0 - No issues\n  \
    1 - Warnings only\n  \
    2 - Errors found\n  \
    3 - Configuration or runtime error")]
pub struct Cli {
    /// Directory to analyze (default: current directory)
    #[arg(default_value = ".")]
    pub directory: PathBuf,

    /// Check type to run
    #[arg(short = 'c', long = "check", value_enum, default_value = "all")]
    pub check: CheckType,

    /// Comma-separated languages (default: auto-detect from marker files)
    #[arg(short = 'l', long = "lang")]
    pub languages: Option<String>,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Show only errors (no warnings)
    #[arg(short = 'e', long = "errors", conflicts_with = "warnings_only")]
    pub errors_only: bool,

    /// Show only warnings (no errors)
    #[arg(short = 'w', long = "warnings")]
    pub warnings_only: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,

    /// Path to configuration file (default: .smell-guard.toml in the
    /// analyzed directory)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Skip loading any configuration file
    #[arg(long)]
    pub no_config: bool,

    /// Extra exclude patterns (glob syntax, can be given multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Respect .gitignore rules while scanning
    #[arg(long)]
    pub gitignore: bool,

    /// Suppress report output (exit code only)
    #[arg(short, long)]
    pub quiet: bool,

    /// File length warning threshold
    #[arg(long = "file-warn")]
    pub file_warn: Option<usize>,

    /// File length error threshold
    #[arg(long = "file-error")]
    pub file_error: Option<usize>,

    /// Function length warning threshold
    #[arg(long = "func-warn")]
    pub func_warn: Option<usize>,

    /// Function length error threshold
    #[arg(long = "func-error")]
    pub func_error: Option<usize>,

    /// Nesting depth warning threshold
    #[arg(long = "nest-warn")]
    pub nest_warn: Option<usize>,

    /// Nesting depth error threshold
    #[arg(long = "nest-error")]
    pub nest_error: Option<usize>,
}

impl Cli {
    #[must_use]
    pub const fn severity_filter(&self) -> SeverityFilter {
        if self.errors_only {
            SeverityFilter::ErrorsOnly
        } else if self.warnings_only {
            SeverityFilter::WarningsOnly
        } else {
            SeverityFilter::All
        }
    }

    /// Apply CLI threshold overrides on top of config/registry values.
    pub fn apply_threshold_overrides(&self, thresholds: &mut Thresholds) {
        if let Some(v) = self.file_warn {
            thresholds.file.warn = v;
        }
        if let Some(v) = self.file_error {
            thresholds.file.error = v;
        }
        if let Some(v) = self.func_warn {
            thresholds.function.warn = v;
        }
        if let Some(v) = self.func_error {
            thresholds.function.error = v;
        }
        if let Some(v) = self.nest_warn {
            thresholds.nesting.warn = v;
        }
        if let Some(v) = self.nest_error {
            thresholds.nesting.error = v;
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
