use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SmellGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Cannot access directory: {path}")]
    DirectoryAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Unknown language: {0} (supported: elixir, dart, typescript, python, rust)")]
    UnknownLanguage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SmellGuardError>;
