// git-setup-submodules: declarative git submodule bootstrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! -C DIR             <- repository to operate on
//! --config FILE      <- additional settings files (can repeat)
//! --declarations     <- setup.declarations
//! --remote           <- setup.remote
//! --default-branch   <- setup.default_branch
//! --dry              <- setup.dry
//! --git PATH         <- git.executable
//! --git-config K=V   <- git.config_overrides (can repeat)
//! --log-level N      <- console verbosity (0-5)
//! --file-log-level   <- file verbosity (falls back to --log-level)
//!
//! Precedence: CLI flags > env > --config > repository settings file > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Directory inside the host repository (defaults to the current directory).
    #[arg(short = 'C', long = "repo", value_name = "DIR", global = true)]
    pub repo: Option<PathBuf>,

    /// Path to additional TOML settings file(s).
    /// Can be specified multiple times.
    #[arg(short = 'c', long = "config", value_name = "FILE", action = clap::ArgAction::Append, global = true)]
    pub configs: Vec<PathBuf>,

    /// Declaration file, relative to the repository root.
    #[arg(short = 'f', long = "declarations", value_name = "FILE", global = true)]
    pub declarations: Option<PathBuf>,

    /// Remote whose URL anchors the module URLs.
    #[arg(long, value_name = "NAME", global = true)]
    pub remote: Option<String>,

    /// Branch or tag for declarations without `#ref`.
    #[arg(long = "default-branch", value_name = "REF", global = true)]
    pub default_branch: Option<String>,

    /// Git executable.
    #[arg(long = "git", value_name = "PATH", global = true)]
    pub git: Option<PathBuf>,

    /// Passes `-c KEY=VALUE` to every git invocation.
    /// Can be specified multiple times.
    #[arg(long = "git-config", value_name = "KEY=VALUE", action = clap::ArgAction::Append, global = true)]
    pub git_config: Vec<String>,

    /// Probes access only; runs no command that changes the repository.
    #[arg(long, global = true)]
    pub dry: bool,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=5), global = true
    )]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=5), global = true
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE", global = true)]
    pub log_file: Option<PathBuf>,
}

/// A single settings override derived from a command-line flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverrideValue {
    Text(String),
    Flag(bool),
    List(Vec<String>),
}

impl GlobalOptions {
    /// Converts command-line options to settings overrides, keyed by
    /// `section.key`.
    #[must_use]
    pub fn to_config_overrides(&self) -> Vec<(&'static str, OverrideValue)> {
        let mut overrides = Vec::new();

        if let Some(ref path) = self.declarations {
            overrides.push((
                "setup.declarations",
                OverrideValue::Text(path.display().to_string()),
            ));
        }
        if let Some(ref remote) = self.remote {
            overrides.push(("setup.remote", OverrideValue::Text(remote.clone())));
        }
        if let Some(ref branch) = self.default_branch {
            overrides.push(("setup.default_branch", OverrideValue::Text(branch.clone())));
        }
        if self.dry {
            overrides.push(("setup.dry", OverrideValue::Flag(true)));
        }
        if let Some(ref git) = self.git {
            overrides.push((
                "git.executable",
                OverrideValue::Text(git.display().to_string()),
            ));
        }
        if !self.git_config.is_empty() {
            overrides.push((
                "git.config_overrides",
                OverrideValue::List(self.git_config.clone()),
            ));
        }

        overrides
    }
}

impl OverrideValue {
    #[must_use]
    pub fn into_value(self) -> config::Value {
        match self {
            Self::Text(text) => text.into(),
            Self::Flag(flag) => flag.into(),
            Self::List(items) => items.into(),
        }
    }
}
