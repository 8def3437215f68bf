// git-setup-submodules: declarative git submodule bootstrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! git-setup-submodules [global options] [command]
//! setup [--json]     (default)
//! list
//! options
//! configs
//! version
//! ```

pub mod global;

#[cfg(test)]
mod tests;

use crate::cli::global::GlobalOptions;
use clap::{Args, Parser, Subcommand};

/// Declarative git submodule bootstrapper.
#[derive(Debug, Parser)]
#[command(
    name = "git-setup-submodules",
    author,
    version,
    about = "Declarative git submodule bootstrapper",
    long_about = "git-setup-submodules Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Reads the submodule declarations in `.git-setup-submodules`,\n\
                  derives each module's URL from the origin remote, and adds,\n\
                  pins and pulls every module you have access to. The new\n\
                  submodules are left unstaged for review.",
    after_help = "DECLARATION FILE:\n\n\
                  One module per line: <path>[:<folder>] [#<branch or tag>] [// comment]\n\
                  Lines starting with '#' or '//' are ignored. The module URL is the\n\
                  origin URL with its last path segment replaced by '<name>.git'.\n\n\
                  SETTINGS:\n\n\
                  `.git-setup-submodules.toml` at the repository root is loaded if\n\
                  present, then every --config file, then GIT_SETUP_SUBMODULES_*\n\
                  environment variables, then command-line flags."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute, `setup` when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Adds, pins and pulls every declared submodule.
    Setup(SetupArgs),

    /// Lists the parsed declarations and their derived URLs.
    List,

    /// Lists all settings and their values.
    Options,

    /// Lists the settings files that were loaded.
    Configs,

    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,
}

/// Arguments for the `setup` command.
#[derive(Debug, Clone, Default, Args)]
pub struct SetupArgs {
    /// Prints the run report as JSON instead of the progress tree.
    #[arg(long)]
    pub json: bool,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
