use std::path::Path;

use crate::error::Result;

use super::Config;

pub const CONFIG_FILE_NAME: &str = ".smell-guard.toml";

/// Loads project configuration.
pub trait ConfigLoader {
    /// Load the project-local configuration, or defaults if none exists.
    ///
    /// # Errors
    /// Returns an error if an existing config file cannot be read or parsed.
    fn load(&self, project_dir: &Path) -> Result<Config>;

    /// Load configuration from an explicit path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    fn load_from_path(&self, path: &Path) -> Result<Config>;
}

#[derive(Debug, Default)]
pub struct FileConfigLoader;

impl ConfigLoader for FileConfigLoader {
    fn load(&self, project_dir: &Path) -> Result<Config> {
        let path = project_dir.join(CONFIG_FILE_NAME);
        if path.exists() {
            self.load_from_path(&path)
        } else {
            Ok(Config::default())
        }
    }

    fn load_from_path(&self, path: &Path) -> Result<Config> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
