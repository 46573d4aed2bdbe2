use regex::Regex;

use super::{FunctionRecord, StructureTracker, ANONYMOUS};

/// A signature pattern plus the capture group holding the declared name.
/// `name_group: None` marks an anonymous form.
struct BoundaryRule {
    pattern: Regex,
    name_group: Option<usize>,
}

/// Delimiter-balance tracker for brace-delimited languages.
///
/// Depth is the running net of `{` and `}` per line, counted outside
/// strings, chars and line comments. A function's baseline is the depth
/// just before its signature line; the signature line's own net delta is
/// applied immediately so same-line opening braces are handled. The
/// function closes the first time depth returns to the baseline on a line
/// strictly after the start.
pub struct BraceTracker {
    rules: Vec<BoundaryRule>,
    reject_type_aliases: bool,
    reject_blockless_arrows: bool,
    reject_getters: bool,
    template_literals: bool,
}

struct OpenFunction {
    name: String,
    start: usize,
    baseline: i32,
    max_rel: usize,
    /// Set once depth has risen above the baseline; closing is only
    /// considered after that, so multi-line signatures and empty-body
    /// one-liners don't close degenerately.
    entered: bool,
}

impl OpenFunction {
    /// The function's own block counts as its top level, so reported depth
    /// is the peak relative depth minus one.
    fn finish(self, end_line: usize) -> FunctionRecord {
        FunctionRecord::new(
            self.name,
            self.start,
            end_line.max(self.start),
            self.max_rel.saturating_sub(1),
        )
    }
}

impl BraceTracker {
    #[must_use]
    pub fn rust() -> Self {
        Self {
            rules: vec![BoundaryRule {
                pattern: Regex::new(
                    r"^\s*(?:pub(?:\s*\([^)]*\))?\s+)?(?:(?:async|unsafe|const)\s+)*fn\s+([a-zA-Z_][a-zA-Z0-9_]*)",
                )
                .expect("invalid Rust fn pattern"),
                name_group: Some(1),
            }],
            reject_type_aliases: false,
            reject_blockless_arrows: false,
            reject_getters: false,
            template_literals: false,
        }
    }

    #[must_use]
    pub fn typescript() -> Self {
        Self {
            rules: vec![
                BoundaryRule {
                    pattern: Regex::new(
                        r"^\s*(?:export\s+)?(?:async\s+)?function\s+([a-zA-Z_$][a-zA-Z0-9_$]*)",
                    )
                    .expect("invalid TS function pattern"),
                    name_group: Some(1),
                },
                BoundaryRule {
                    pattern: Regex::new(
                        r"^\s*(?:export\s+)?(?:const|let|var)\s+([a-zA-Z_$][a-zA-Z0-9_$]*)\s*[=:].*=>",
                    )
                    .expect("invalid TS arrow pattern"),
                    name_group: Some(1),
                },
                // export default function () { ... }
                BoundaryRule {
                    pattern: Regex::new(
                        r"^\s*(?:export\s+)?(?:default\s+)?(?:async\s+)?function\s*\(",
                    )
                    .expect("invalid TS anonymous pattern"),
                    name_group: None,
                },
            ],
            reject_type_aliases: true,
            reject_blockless_arrows: true,
            reject_getters: false,
            template_literals: true,
        }
    }

    #[must_use]
    pub fn dart() -> Self {
        Self {
            rules: vec![BoundaryRule {
                pattern: Regex::new(
                    r"^\s*(?:static\s+)?(?:void|bool|int|double|String|Future|Widget|State|List|Map|Set|dynamic|[A-Z][a-zA-Z0-9_<>,?\s]*)\s+([a-z_][a-zA-Z0-9_]*)\s*\(",
                )
                .expect("invalid Dart method pattern"),
                name_group: Some(1),
            }],
            reject_type_aliases: false,
            reject_blockless_arrows: true,
            reject_getters: true,
            template_literals: false,
        }
    }

    fn match_boundary(&self, line: &str) -> Option<String> {
        let trimmed = line.trim();

        if self.reject_type_aliases
            && (trimmed.starts_with("type ") || trimmed.starts_with("interface "))
        {
            return None;
        }
        // Single-expression arrow bodies are not multi-line functions.
        if self.reject_blockless_arrows && line.contains("=>") && !line.contains('{') {
            return None;
        }
        if self.reject_getters && line.contains(" get ") {
            return None;
        }

        for rule in &self.rules {
            let Some(caps) = rule.pattern.captures(line) else {
                continue;
            };
            // Abstract/forward declarations: terminator, no block.
            if trimmed.ends_with(';') && !line.contains('{') {
                return None;
            }
            let name = rule
                .name_group
                .and_then(|g| caps.get(g))
                .map_or(ANONYMOUS, |m| m.as_str());
            return Some(name.to_string());
        }
        None
    }

    fn net_delta(&self, line: &str) -> i32 {
        net_brace_delta(line, self.template_literals)
    }
}

impl StructureTracker for BraceTracker {
    fn parse(&self, content: &str) -> Vec<FunctionRecord> {
        let mut records = Vec::new();
        let mut open: Option<OpenFunction> = None;
        let mut depth = 0i32;
        let mut last_line = 0usize;

        for (idx, line) in content.lines().enumerate() {
            let line_no = idx + 1;
            last_line = line_no;

            if let Some(name) = self.match_boundary(line) {
                if let Some(prev) = open.take() {
                    // New boundary before the previous function closed.
                    records.push(prev.finish(line_no - 1));
                }
                let baseline = depth;
                depth += self.net_delta(line);
                open = Some(OpenFunction {
                    name,
                    start: line_no,
                    baseline,
                    max_rel: 0,
                    entered: depth > baseline,
                });
                continue;
            }

            depth += self.net_delta(line);

            if let Some(func) = open.as_mut() {
                let rel = usize::try_from((depth - func.baseline).max(0)).unwrap_or(0);
                func.max_rel = func.max_rel.max(rel);
                func.entered = func.entered || depth > func.baseline;

                if func.entered && depth <= func.baseline && line_no > func.start {
                    let finished = open.take().map(|f| f.finish(line_no));
                    records.extend(finished);
                }
            }
        }

        if let Some(func) = open {
            // Unterminated structure: finalize at end of file.
            records.push(func.finish(last_line));
        }

        records
    }
}

/// Net `{`/`}` delta for one line, skipping string, char, and template
/// literal contents and everything after a `//` comment marker.
fn net_brace_delta(line: &str, template_literals: bool) -> i32 {
    let mut delta = 0i32;
    let mut in_string = false;
    let mut in_char = false;
    let mut in_template = false;
    let mut escape_next = false;

    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        if escape_next {
            escape_next = false;
            continue;
        }

        if (in_string || in_char || in_template) && c == '\\' {
            escape_next = true;
            continue;
        }

        if !in_string && !in_char && !in_template && c == '/' && chars.peek() == Some(&'/') {
            break;
        }

        match c {
            '"' if !in_char && !in_template => in_string = !in_string,
            '\'' if !in_string && !in_template => in_char = !in_char,
            '`' if template_literals && !in_string && !in_char => in_template = !in_template,
            '{' if !in_string && !in_char && !in_template => delta += 1,
            '}' if !in_string && !in_char && !in_template => delta -= 1,
            _ => {}
        }
    }

    delta
}

#[cfg(test)]
#[path = "brace_tests.rs"]
mod tests;
