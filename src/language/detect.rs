use std::path::{Path, PathBuf};

use crate::error::{Result, SmellGuardError};

use super::Lang;

/// A language detected in a project, paired with the directory its sources
/// conventionally live in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedLanguage {
    pub lang: Lang,
    pub source_dir: PathBuf,
}

impl DetectedLanguage {
    fn new(lang: Lang, source_dir: &str) -> Self {
        Self {
            lang,
            source_dir: PathBuf::from(source_dir),
        }
    }
}

/// Detect project languages by looking for ecosystem marker files.
#[must_use]
pub fn detect_languages(project_dir: &Path) -> Vec<DetectedLanguage> {
    let mut detected = Vec::new();

    if project_dir.join("mix.exs").exists() {
        detected.push(DetectedLanguage::new(Lang::Elixir, "lib"));
    }

    if project_dir.join("pubspec.yaml").exists() {
        detected.push(DetectedLanguage::new(Lang::Dart, "lib"));
    }

    if project_dir.join("tsconfig.json").exists() || has_typescript_files(project_dir) {
        detected.push(DetectedLanguage::new(
            Lang::TypeScript,
            preferred_src_dir(project_dir),
        ));
    }

    if project_dir.join("setup.py").exists()
        || project_dir.join("pyproject.toml").exists()
        || project_dir.join("requirements.txt").exists()
    {
        detected.push(DetectedLanguage::new(
            Lang::Python,
            preferred_src_dir(project_dir),
        ));
    }

    if project_dir.join("Cargo.toml").exists() {
        detected.push(DetectedLanguage::new(Lang::Rust, "src"));
    }

    detected
}

fn preferred_src_dir(project_dir: &Path) -> &'static str {
    if project_dir.join("src").is_dir() {
        "src"
    } else {
        "."
    }
}

/// Check for TypeScript sources when only a package.json marker is present.
fn has_typescript_files(project_dir: &Path) -> bool {
    if !project_dir.join("package.json").exists() {
        return false;
    }

    for dir in ["src", "lib", "."] {
        let dir_path = project_dir.join(dir);
        let Ok(entries) = std::fs::read_dir(&dir_path) else {
            continue;
        };
        for entry in entries.filter_map(std::result::Result::ok) {
            let path = entry.path();
            if path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|ext| ext == "ts" || ext == "tsx")
            {
                return true;
            }
        }
    }
    false
}

/// Parse an explicit comma-separated language list from the CLI.
///
/// # Errors
/// Returns an error naming the first unrecognized language.
pub fn parse_language_list(input: &str) -> Result<Vec<DetectedLanguage>> {
    input
        .split(',')
        .filter(|s| !s.trim().is_empty())
        .map(|s| {
            let lang = Lang::from_name(s)
                .ok_or_else(|| SmellGuardError::UnknownLanguage(s.trim().to_string()))?;
            let source_dir = match lang {
                Lang::Elixir | Lang::Dart => "lib",
                Lang::TypeScript | Lang::Rust => "src",
                Lang::Python => ".",
            };
            Ok(DetectedLanguage::new(lang, source_dir))
        })
        .collect()
}

#[cfg(test)]
#[path = "detect_tests.rs"]
mod tests;
