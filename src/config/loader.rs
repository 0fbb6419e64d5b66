use std::path::{Path, PathBuf};

use crate::error::{Result, StyleGuardError};

use super::Config;
use super::model::CONFIG_VERSION;

const LOCAL_CONFIG_NAME: &str = ".style-guard.toml";
const USER_CONFIG_NAME: &str = "config.toml";

/// Filesystem seam so loading can be driven by an in-memory mock in tests.
pub trait FileSystem {
    /// Read a file into a string.
    ///
    /// # Errors
    /// Returns the underlying IO error on failure.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    /// Whether a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// The directory the process was started in.
    ///
    /// # Errors
    /// Returns an error when the working directory is gone or inaccessible.
    fn current_dir(&self) -> std::io::Result<PathBuf>;

    /// Per-user configuration directory, following platform conventions
    /// (XDG on Linux, Application Support on macOS, `%APPDATA%` on Windows).
    /// `None` when no home directory can be determined.
    fn config_dir(&self) -> Option<PathBuf>;
}

/// [`FileSystem`] backed by `std::fs` and `std::env`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        std::env::current_dir()
    }

    fn config_dir(&self) -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "style-guard")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }
}

/// Source of lint configuration.
pub trait ConfigLoader {
    /// Load from the default search locations.
    ///
    /// # Errors
    /// Returns an error when a discovered file cannot be read or parsed.
    fn load(&self) -> Result<Config>;

    /// Load a specific file, bypassing the search.
    ///
    /// # Errors
    /// Returns an error when the file cannot be read or parsed.
    fn load_from_path(&self, path: &Path) -> Result<Config>;
}

/// Loads `.style-guard.toml` from the working directory, falling back to
/// `config.toml` under the per-user configuration directory, then to
/// [`Config::default`] when neither exists.
#[derive(Debug)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl Default for FileConfigLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self) -> Result<Config> {
        let local = self
            .fs
            .current_dir()
            .ok()
            .map(|dir| dir.join(LOCAL_CONFIG_NAME));
        let user = self.fs.config_dir().map(|dir| dir.join(USER_CONFIG_NAME));

        // Local config shadows the per-user one entirely, no merging.
        let found = local
            .into_iter()
            .chain(user)
            .find(|path| self.fs.exists(path));

        match found {
            Some(path) => self.load_from_path(&path),
            None => Ok(Config::default()),
        }
    }

    fn load_from_path(&self, path: &Path) -> Result<Config> {
        let content =
            self.fs
                .read_to_string(path)
                .map_err(|source| StyleGuardError::FileRead {
                    path: path.to_path_buf(),
                    source,
                })?;
        let config: Config = toml::from_str(&content)?;
        validate_config_version(&config)?;
        Ok(config)
    }
}

/// Unknown keys are tolerated so configs written for newer releases still
/// parse, but the version field has to be one this build understands.
fn validate_config_version(config: &Config) -> Result<()> {
    if config.version == CONFIG_VERSION {
        Ok(())
    } else {
        Err(StyleGuardError::Config(format!(
            "Unsupported config version '{}'. Only version '{CONFIG_VERSION}' is supported.",
            config.version
        )))
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
