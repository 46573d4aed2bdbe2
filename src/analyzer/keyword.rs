use regex::Regex;

use super::{FunctionRecord, StructureTracker, ANONYMOUS};

/// Keyword-pair tracker for `do`/`end`-delimited languages (Elixir).
///
/// Every `do` and `end` token on a line counts, word-level, since one line
/// can open and close several constructs. Anonymous functions (`fn ... ->`)
/// open a block that is closed by `end` without a `do`, so `fn` paired with
/// `->` on the same line counts as an opener too.
pub struct KeywordTracker {
    def_pattern: Regex,
}

struct OpenFunction {
    name: String,
    start: usize,
    max_depth: usize,
    /// Set once a block has opened; a clause head split across lines has
    /// not reached its `do` yet and must not close.
    entered: bool,
}

impl OpenFunction {
    /// The clause's own `do` block is its top level; report depth beyond it.
    fn finish(self, end_line: usize) -> FunctionRecord {
        FunctionRecord::new(
            self.name,
            self.start,
            end_line.max(self.start),
            self.max_depth.saturating_sub(1),
        )
    }
}

impl KeywordTracker {
    #[must_use]
    pub fn elixir() -> Self {
        Self {
            def_pattern: Regex::new(r"^\s*(?:def|defp|defmacro|defmacrop)\s+([a-z_][a-zA-Z0-9_?!]*)")
                .expect("invalid Elixir def pattern"),
        }
    }

    fn match_boundary(&self, line: &str) -> Option<String> {
        // Inline one-liner clauses (`, do:`) have no multi-line body.
        if line.contains(", do:") {
            return None;
        }
        let caps = self.def_pattern.captures(line)?;
        let name = caps.get(1).map_or(ANONYMOUS, |m| m.as_str());
        Some(name.to_string())
    }
}

impl StructureTracker for KeywordTracker {
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
                    records.push(prev.finish(line_no - 1));
                }
                depth = net_block_delta(line);
                open = Some(OpenFunction {
                    name,
                    start: line_no,
                    max_depth: usize::try_from(depth.max(0)).unwrap_or(0),
                    entered: depth > 0,
                });
                continue;
            }

            depth += net_block_delta(line);

            if let Some(func) = open.as_mut() {
                let current = usize::try_from(depth.max(0)).unwrap_or(0);
                func.max_depth = func.max_depth.max(current);
                func.entered = func.entered || depth > 0;

                if func.entered && depth <= 0 && line_no > func.start {
                    let finished = open.take().map(|f| f.finish(line_no));
                    records.extend(finished);
                }
            }
        }

        if let Some(func) = open {
            records.push(func.finish(last_line));
        }

        records
    }
}

/// Net block delta for one line: `do` and `fn ... ->` open, `end` closes.
/// The keyword-list form `do:` opens nothing, and the comment tail after
/// `#` is ignored (string contents are not tracked; an accepted
/// approximation).
fn net_block_delta(line: &str) -> i32 {
    let code = line.find('#').map_or(line, |idx| &line[..idx]);
    let has_arrow = code.contains("->");

    let mut delta = 0i32;
    for (token, tail) in identifier_tokens(code) {
        match token {
            "do" if !tail.starts_with(':') => delta += 1,
            "end" => delta -= 1,
            "fn" if has_arrow => delta += 1,
            _ => {}
        }
    }
    delta
}

/// Identifier words in `code` paired with the text that follows each one.
fn identifier_tokens(code: &str) -> impl Iterator<Item = (&str, &str)> {
    let is_word = |c: char| c.is_alphanumeric() || c == '_';
    let mut rest = code;
    std::iter::from_fn(move || {
        let start = rest.find(is_word)?;
        let after = &rest[start..];
        let end = after.find(|c: char| !is_word(c)).unwrap_or(after.len());
        let token = &after[..end];
        rest = &after[end..];
        Some((token, rest))
    })
}

#[cfg(test)]
#[path = "keyword_tests.rs"]
mod tests;
