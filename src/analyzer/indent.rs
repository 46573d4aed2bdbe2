use regex::Regex;

use super::{FunctionRecord, StructureTracker, ANONYMOUS};

/// Indentation tracker for indentation-significant languages (Python).
///
/// A function's base indentation is that of its signature line. It stays
/// open while non-blank, non-comment lines are indented strictly deeper,
/// and closes at the first such line back at or under the base; that line
/// is re-evaluated as a possible new boundary.
///
/// Depth is `(indent - base) / indent_width`, floored. The width is a fixed
/// per-language constant; mixed or unusual indentation yields approximate
/// depths, which is accepted.
pub struct IndentTracker {
    def_pattern: Regex,
    indent_width: usize,
}

struct OpenFunction {
    name: String,
    start: usize,
    base_indent: usize,
    max_depth: usize,
}

impl OpenFunction {
    fn finish(self, end_line: usize) -> FunctionRecord {
        FunctionRecord::new(self.name, self.start, end_line.max(self.start), self.max_depth)
    }
}

impl IndentTracker {
    /// Python boundary rules with the indent width taken from the language
    /// registry, never auto-detected from the file.
    #[must_use]
    pub fn python(indent_width: usize) -> Self {
        Self {
            def_pattern: Regex::new(r"^(\s*)(?:async\s+)?def\s+([a-zA-Z_][a-zA-Z0-9_]*)\s*\(")
                .expect("invalid Python def pattern"),
            indent_width,
        }
    }

    fn match_boundary(&self, line: &str) -> Option<(usize, String)> {
        let caps = self.def_pattern.captures(line)?;
        let indent = caps.get(1).map_or(0, |m| m.as_str().len());
        let name = caps.get(2).map_or(ANONYMOUS, |m| m.as_str());
        Some((indent, name.to_string()))
    }
}

impl StructureTracker for IndentTracker {
    fn parse(&self, content: &str) -> Vec<FunctionRecord> {
        let mut records = Vec::new();
        let mut open: Option<OpenFunction> = None;
        let mut last_line = 0usize;

        for (idx, line) in content.lines().enumerate() {
            let line_no = idx + 1;
            last_line = line_no;

            if let Some((indent, name)) = self.match_boundary(line) {
                if let Some(prev) = open.take() {
                    records.push(prev.finish(line_no - 1));
                }
                open = Some(OpenFunction {
                    name,
                    start: line_no,
                    base_indent: indent,
                    max_depth: 0,
                });
                continue;
            }

            let Some(func) = open.as_mut() else {
                continue;
            };

            // Blank lines and full-line comments don't carry indentation
            // information; they neither close the function nor affect depth.
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let indent = measure_indent(line);
            if indent <= func.base_indent && line_no > func.start {
                let finished = open.take().map(|f| f.finish(line_no - 1));
                records.extend(finished);
            } else if indent > func.base_indent {
                let depth = (indent - func.base_indent) / self.indent_width;
                func.max_depth = func.max_depth.max(depth);
            }
        }

        if let Some(func) = open {
            records.push(func.finish(last_line));
        }

        records
    }
}

fn measure_indent(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

#[cfg(test)]
#[path = "indent_tests.rs"]
mod tests;
