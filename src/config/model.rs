use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::checker::Thresholds;
use crate::language::Lang;

/// Project configuration loaded from `.smell-guard.toml`. Everything is
/// optional; defaults come from the language registry.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub exclude: ExcludeConfig,

    /// Per-language threshold overrides, keyed by language name.
    #[serde(default)]
    pub thresholds: IndexMap<String, ThresholdOverrides>,
}

impl Config {
    /// Effective thresholds for a language: registry defaults with any
    /// config-file overrides applied.
    #[must_use]
    pub fn thresholds_for(&self, lang: Lang) -> Thresholds {
        let mut thresholds = lang.default_thresholds();
        if let Some(overrides) = self.thresholds.get(lang.name()) {
            overrides.apply(&mut thresholds);
        }
        thresholds
    }
}

/// Extra glob patterns to skip, additive to the per-language skip rules.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExcludeConfig {
    #[serde(default)]
    pub patterns: Vec<String>,
}

/// Partial threshold overrides for one language.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ThresholdOverrides {
    #[serde(default)]
    pub file_warn: Option<usize>,
    #[serde(default)]
    pub file_error: Option<usize>,
    #[serde(default)]
    pub func_warn: Option<usize>,
    #[serde(default)]
    pub func_error: Option<usize>,
    #[serde(default)]
    pub nest_warn: Option<usize>,
    #[serde(default)]
    pub nest_error: Option<usize>,
}

impl ThresholdOverrides {
    pub fn apply(&self, thresholds: &mut Thresholds) {
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
#[path = "model_tests.rs"]
mod tests;
