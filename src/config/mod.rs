// git-setup-submodules: declarative git submodule bootstrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tool settings.
//!
//! These settings describe how the tool behaves; the submodule list itself
//! lives in the declaration file (see [`crate::declaration`]).
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low -> high)
//! 1. defaults
//! 2. <repo root>/.git-setup-submodules.toml
//! 3. --config (repeatable)
//! 4. GIT_SETUP_SUBMODULES_* env vars
//! 5. CLI overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! GIT_SETUP_SUBMODULES_SETUP__DRY=true          -> setup.dry = true
//! GIT_SETUP_SUBMODULES_SETUP__REMOTE=upstream   -> setup.remote = "upstream"
//! GIT_SETUP_SUBMODULES_GIT__EXECUTABLE=/opt/git -> git.executable = "/opt/git"
//! ```

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

use loader::ConfigLoader;
use types::{GitConfig, SetupConfig};

/// File name of the optional per-repository settings file.
pub const SETTINGS_FILE: &str = ".git-setup-submodules.toml";

/// Prefix of environment variables read by the loader.
pub const ENV_PREFIX: &str = "GIT_SETUP_SUBMODULES";

/// Complete tool configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Setup run options.
    pub setup: SetupConfig,
    /// Git invocation options.
    pub git: GitConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use git_setup_submodules::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional(".git-setup-submodules.toml")
    ///     .with_env_prefix("GIT_SETUP_SUBMODULES")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::builder().add_toml_file(path).build()?)
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Ok(Self::builder().add_toml_str(content).build()?)
    }

    /// Validate every section.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the first offending key.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        self.setup.validate()?;
        self.git.validate()
    }

    /// Declaration file path, anchored at `root` unless already absolute.
    #[must_use]
    pub fn declarations_path(&self, root: &Path) -> PathBuf {
        if self.setup.declarations.is_absolute() {
            self.setup.declarations.clone()
        } else {
            root.join(&self.setup.declarations)
        }
    }

    /// Format configuration options for display, sorted by key.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_setup_options(&mut options);
        self.format_git_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_setup_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "setup.declarations".into(),
            self.setup.declarations.display().to_string(),
        );
        options.insert("setup.remote".into(), self.setup.remote.clone());
        options.insert(
            "setup.default_branch".into(),
            self.setup.default_branch.clone(),
        );
        options.insert("setup.dry".into(), self.setup.dry.to_string());
    }

    fn format_git_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "git.executable".into(),
            self.git.executable.display().to_string(),
        );
        options.insert(
            "git.non_interactive".into(),
            self.git.non_interactive.to_string(),
        );
        options.insert(
            "git.config_overrides".into(),
            format!("[{}]", self.git.config_overrides.join(", ")),
        );
    }
}
