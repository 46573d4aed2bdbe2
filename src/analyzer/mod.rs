mod brace;
mod indent;
mod keyword;

pub use brace::BraceTracker;
pub use indent::IndentTracker;
pub use keyword::KeywordTracker;

use serde::Serialize;

use crate::language::{Lang, Strategy};

/// Placeholder name for functions whose identifier cannot be extracted.
pub const ANONYMOUS: &str = "anonymous";

/// A function or method located by lexical tracking, with its length and
/// the maximum nesting depth observed inside its body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionRecord {
    pub name: String,
    /// Starting line (1-indexed).
    pub start_line: usize,
    /// Ending line (1-indexed). For a function still open at end of file this
    /// is the file's last line.
    pub end_line: usize,
    /// Physical lines from start to end, blanks and comments included.
    pub line_count: usize,
    /// Maximum nesting depth relative to the function's own top level.
    pub max_depth: usize,
}

impl FunctionRecord {
    #[must_use]
    pub const fn new(name: String, start_line: usize, end_line: usize, max_depth: usize) -> Self {
        Self {
            name,
            start_line,
            end_line,
            line_count: end_line.saturating_sub(start_line) + 1,
            max_depth,
        }
    }
}

/// One structural tracking strategy. Each call to `parse` owns its depth
/// state for the duration of that file; nothing is shared across files.
pub trait StructureTracker: Send + Sync {
    /// Walk a file's lines and yield every function found. Malformed or
    /// unterminated structure degrades to closing at end of file; this
    /// never fails.
    fn parse(&self, content: &str) -> Vec<FunctionRecord>;
}

/// Select the tracker for a language, per its registry strategy.
#[must_use]
pub fn tracker_for(lang: Lang) -> Box<dyn StructureTracker> {
    match lang.strategy() {
        Strategy::Keyword => Box::new(KeywordTracker::elixir()),
        Strategy::Indent => Box::new(IndentTracker::python(lang.indent_width())),
        Strategy::Brace => Box::new(brace_tracker(lang)),
    }
}

/// Brace languages share one tracker and differ only in boundary rules.
fn brace_tracker(lang: Lang) -> BraceTracker {
    match lang {
        Lang::TypeScript => BraceTracker::typescript(),
        Lang::Dart => BraceTracker::dart(),
        _ => BraceTracker::rust(),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
