// git-setup-submodules: declarative git submodule bootstrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types.
//!
//! ```text
//! Config
//!   setup: declarations, remote, default_branch, dry
//!   git:   executable, non_interactive, config_overrides
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::declaration::{DECLARATIONS_FILE, DEFAULT_BRANCH};
use crate::error::ConfigError;

/// Settings for the setup run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SetupConfig {
    /// Declaration file, relative to the repository root unless absolute.
    pub declarations: PathBuf,
    /// Remote whose URL anchors module URLs.
    pub remote: String,
    /// Ref tracked by declarations without `#ref`.
    pub default_branch: String,
    /// Probe only; issue no mutating git command.
    pub dry: bool,
}

impl Default for SetupConfig {
    fn default() -> Self {
        Self {
            declarations: PathBuf::from(DECLARATIONS_FILE),
            remote: "origin".to_string(),
            default_branch: DEFAULT_BRANCH.to_string(),
            dry: false,
        }
    }
}

/// How git is invoked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GitConfig {
    /// Git executable, looked up in `PATH` unless it contains a separator.
    pub executable: PathBuf,
    /// Set `GCM_INTERACTIVE=never` and `GIT_TERMINAL_PROMPT=0`.
    pub non_interactive: bool,
    /// `key=value` pairs passed as `-c key=value` to every invocation.
    pub config_overrides: Vec<String>,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            executable: PathBuf::from("git"),
            non_interactive: true,
            config_overrides: Vec::new(),
        }
    }
}

impl SetupConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.declarations.as_os_str().is_empty() {
            return Err(invalid("setup", "declarations", "must not be empty"));
        }
        if self.remote.trim().is_empty() {
            return Err(invalid("setup", "remote", "must not be empty"));
        }
        if self.default_branch.trim().is_empty() {
            return Err(invalid("setup", "default_branch", "must not be empty"));
        }
        Ok(())
    }
}

impl GitConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.executable.as_os_str().is_empty() {
            return Err(invalid("git", "executable", "must not be empty"));
        }
        if let Some(bad) = self
            .config_overrides
            .iter()
            .find(|entry| !entry.contains('=') || entry.starts_with('='))
        {
            return Err(invalid(
                "git",
                "config_overrides",
                &format!("expected 'key=value', got '{bad}'"),
            ));
        }
        Ok(())
    }
}

fn invalid(section: &str, key: &str, message: &str) -> ConfigError {
    ConfigError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        message: message.to_string(),
    }
}
