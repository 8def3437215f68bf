// git-setup-submodules: declarative git submodule bootstrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration loading from multiple sources.
//!
//! # Loader Pipeline
//!
//! ```text
//! ConfigLoader::new()
//!   .add_toml_file_optional(<root>/.git-setup-submodules.toml)
//!   .add_toml_file(--config)
//!   .add_toml_str()
//!   .with_env_prefix("GIT_SETUP_SUBMODULES")
//!   .set(key, value)            CLI overrides
//!        |
//!        v
//!    build() --> Config (validated)
//! ```

use std::path::{Path, PathBuf};

use config::{Environment, Map};

use super::Config;
use crate::error::{ConfigError, SetupResult};

/// Builder for loading configuration from multiple sources.
pub struct ConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    env_prefix: Option<String>,
    env_vars: Option<Map<String, String>>,
    files: Vec<(String, PathBuf)>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env_prefix: None,
            env_vars: None,
            files: Vec::new(),
        }
    }

    /// Adds a TOML file that must exist when `build()` runs.
    #[must_use]
    pub fn add_toml_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        use config::{File, FileFormat};
        let p = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(p).format(FileFormat::Toml).required(true));
        self.files.push(("file".to_string(), p.to_path_buf()));
        self
    }

    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<Path>>(mut self, path: P) -> Self {
        use config::{File, FileFormat};
        let p = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(p).format(FileFormat::Toml).required(false));
        if p.exists() {
            self.files.push(("optional".to_string(), p.to_path_buf()));
        }
        self
    }

    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        use config::{File, FileFormat};
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self.files
            .push(("string".to_string(), PathBuf::from("<string>")));
        self
    }

    /// Read `<PREFIX>_<SECTION>__<KEY>` environment variables.
    ///
    /// Values are taken verbatim, except list keys such as
    /// `git.config_overrides`, which split on `,`.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Use `vars` instead of the process environment.
    #[must_use]
    pub fn with_env_vars<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.env_vars = Some(
            vars.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        );
        self
    }

    /// Sets a configuration override.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Load` if the key is invalid.
    pub fn set<T: Into<config::Value>>(mut self, key: &str, value: T) -> SetupResult<Self> {
        self.builder = self
            .builder
            .set_override(key, value)
            .map_err(|e| ConfigError::Load(e.to_string()))?;
        Ok(self)
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Load` if a required file is missing, a file is
    /// not valid TOML, or the merged values do not match [`Config`], and
    /// `ConfigError::InvalidValue` if validation fails.
    pub fn build(self) -> SetupResult<Config> {
        let builder = match &self.env_prefix {
            Some(prefix) => {
                let vars = self.env_vars.clone().unwrap_or_else(process_env);
                let (lists, scalars): (Map<_, _>, Map<_, _>) = vars
                    .into_iter()
                    .partition(|(var, _)| is_list_var(prefix, var));

                let mut lists_source = environment(prefix)
                    .try_parsing(true)
                    .list_separator(",")
                    .source(Some(lists));
                for key in LIST_KEYS {
                    lists_source = lists_source.with_list_parse_key(key);
                }
                self.builder
                    .add_source(environment(prefix).source(Some(scalars)))
                    .add_source(lists_source)
            }
            None => self.builder,
        };
        let config: Config = builder
            .build()
            .and_then(config::Config::try_deserialize)
            .map_err(|e| ConfigError::Load(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn loaded_files(&self) -> Vec<(String, PathBuf)> {
        self.files.clone()
    }

    #[must_use]
    pub fn format_loaded_files(&self) -> Vec<String> {
        self.files
            .iter()
            .enumerate()
            .map(|(i, (source, path))| format!("{}. [{}] {}", i + 1, source, path.display()))
            .collect()
    }
}

/// Settings that hold a list of strings.
const LIST_KEYS: [&str; 1] = ["git.config_overrides"];

fn environment(prefix: &str) -> Environment {
    Environment::with_prefix(prefix)
        .prefix_separator("_")
        .separator("__")
}

fn process_env() -> Map<String, String> {
    std::env::vars_os()
        .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
        .collect()
}

/// Whether `var` sets one of [`LIST_KEYS`] under `prefix`.
fn is_list_var(prefix: &str, var: &str) -> bool {
    let var = var.to_lowercase();
    var.strip_prefix(&format!("{}_", prefix.to_lowercase()))
        .is_some_and(|rest| LIST_KEYS.contains(&rest.replace("__", ".").as_str()))
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
