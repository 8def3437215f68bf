// git-setup-submodules: declarative git submodule bootstrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> Workspace::load (root + settings) --> cmd::run_* handlers
//!   setup, list, config
//! ```

pub mod config;
pub mod list;
pub mod setup;


use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::debug;

use crate::cli::global::GlobalOptions;
use crate::config::loader::ConfigLoader;
use crate::config::{Config, ENV_PREFIX, SETTINGS_FILE};
use crate::error::Result;
use crate::git::discovery::worktree_root;

/// Host repository root plus the settings that apply to it.
#[derive(Debug, Clone)]
pub struct Workspace {
    pub root: PathBuf,
    pub config: Config,
}

impl Workspace {
    /// Discover the repository root and load settings for it.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be read or the
    /// settings fail to load.
    pub fn load(global: &GlobalOptions) -> Result<Self> {
        let root = resolve_root(global)?;
        let config = build_config_loader(global, &root)
            .and_then(ConfigLoader::build)
            .context("failed to load settings")?;
        Ok(Self { root, config })
    }
}

/// Repository root for `-C DIR`, or for the current directory.
///
/// # Errors
///
/// Returns an error if no directory was given and the current directory
/// cannot be read.
pub fn resolve_root(global: &GlobalOptions) -> Result<PathBuf> {
    let start = match &global.repo {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().context("failed to read current directory")?,
    };
    let root = worktree_root(&start);
    debug!(root = %root.display(), "host repository");
    Ok(root)
}

/// Loader for every settings source, CLI overrides included.
///
/// # Errors
///
/// Returns an error if a CLI override cannot be applied.
pub fn build_config_loader(
    global: &GlobalOptions,
    root: &Path,
) -> crate::error::SetupResult<ConfigLoader> {
    let mut loader = ConfigLoader::new().add_toml_file_optional(root.join(SETTINGS_FILE));
    for path in &global.configs {
        loader = loader.add_toml_file(path);
    }
    loader = loader.with_env_prefix(ENV_PREFIX);
    for (key, value) in global.to_config_overrides() {
        loader = loader.set(key, value.into_value())?;
    }
    Ok(loader)
}
