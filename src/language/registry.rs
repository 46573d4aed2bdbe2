use crate::checker::{ThresholdPair, Thresholds};

/// Structural tracking strategy used for a language family.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Brace-balance tracking (`{` / `}`).
    Brace,
    /// Keyword-pair tracking (`do` / `end`).
    Keyword,
    /// Indentation tracking relative to the signature line.
    Indent,
}

/// Supported languages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Lang {
    Elixir,
    Dart,
    TypeScript,
    Python,
    Rust,
}

impl Lang {
    pub const ALL: [Self; 5] = [
        Self::Elixir,
        Self::Dart,
        Self::TypeScript,
        Self::Python,
        Self::Rust,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Elixir => "elixir",
            Self::Dart => "dart",
            Self::TypeScript => "typescript",
            Self::Python => "python",
            Self::Rust => "rust",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "elixir" => Some(Self::Elixir),
            "dart" => Some(Self::Dart),
            "typescript" | "ts" => Some(Self::TypeScript),
            "python" | "py" => Some(Self::Python),
            "rust" | "rs" => Some(Self::Rust),
            _ => None,
        }
    }

    #[must_use]
    pub const fn extensions(self) -> &'static [&'static str] {
        match self {
            Self::Elixir => &["ex", "exs"],
            Self::Dart => &["dart"],
            Self::TypeScript => &["ts", "tsx"],
            Self::Python => &["py"],
            Self::Rust => &["rs"],
        }
    }

    #[must_use]
    pub const fn strategy(self) -> Strategy {
        match self {
            Self::Elixir => Strategy::Keyword,
            Self::Python => Strategy::Indent,
            Self::Dart | Self::TypeScript | Self::Rust => Strategy::Brace,
        }
    }

    /// Canonical indent width, used by the indentation strategy to derive
    /// nesting depth. Fixed per language, never auto-detected.
    #[must_use]
    pub const fn indent_width(self) -> usize {
        match self {
            Self::Python => 4,
            _ => 0,
        }
    }

    /// Glob patterns for paths this language's scan should never look at:
    /// dependency and build output directories plus generated-file names.
    #[must_use]
    pub const fn skip_patterns(self) -> &'static [&'static str] {
        match self {
            Self::Elixir => &["**/deps/**", "**/_build/**", "**/.git/**"],
            Self::Dart => &[
                "**/.dart_tool/**",
                "**/build/**",
                "**/.git/**",
                "**/*.g.dart",
                "**/*.freezed.dart",
                "**/*.gen.dart",
                "**/firebase_options.dart",
            ],
            Self::TypeScript => &[
                "**/node_modules/**",
                "**/dist/**",
                "**/build/**",
                "**/.git/**",
                "**/*.d.ts",
            ],
            Self::Python => &[
                "**/__pycache__/**",
                "**/.venv/**",
                "**/venv/**",
                "**/env/**",
                "**/site-packages/**",
                "**/.git/**",
            ],
            Self::Rust => &["**/target/**", "**/.git/**"],
        }
    }

    /// Default warn/error threshold pairs for file length, function length
    /// and nesting depth.
    #[must_use]
    pub const fn default_thresholds(self) -> Thresholds {
        match self {
            Self::Elixir | Self::Python => Thresholds::new(
                ThresholdPair::new(300, 500),
                ThresholdPair::new(30, 50),
                ThresholdPair::new(4, 6),
            ),
            Self::Dart => Thresholds::new(
                ThresholdPair::new(400, 600),
                ThresholdPair::new(40, 70),
                ThresholdPair::new(4, 6),
            ),
            Self::TypeScript => Thresholds::new(
                ThresholdPair::new(250, 400),
                ThresholdPair::new(50, 80),
                ThresholdPair::new(4, 6),
            ),
            Self::Rust => Thresholds::new(
                ThresholdPair::new(400, 600),
                ThresholdPair::new(40, 60),
                ThresholdPair::new(4, 6),
            ),
        }
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
