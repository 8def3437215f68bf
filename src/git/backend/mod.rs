// git-setup-submodules: declarative git submodule bootstrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git process abstraction.
//!
//! ```text
//! ProcessRunner (trait)  run `git <args>`, stdout or error
//!        |
//!        v
//! ShellBackend           git CLI, cwd = host repository root
//!   -c key=value ...     config_overrides prepended
//!   GCM_INTERACTIVE=never, GIT_TERMINAL_PROMPT=0 (non_interactive)
//! ```
//!
//! The setup routine only talks to `ProcessRunner`, so tests swap in a
//! recording fake.

use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, trace};

use crate::config::types::GitConfig;
use crate::error::{GitError, ProcessError, SetupResult};

/// Runs git commands against the host repository.
pub trait ProcessRunner {
    /// Run `git <args>` and return its trimmed stdout.
    ///
    /// # Errors
    ///
    /// Returns `GitError::CommandFailed` on a non-zero exit status, or a
    /// `ProcessError` if git could not be started.
    fn git(&self, args: &[String]) -> SetupResult<String>;
}

impl<R: ProcessRunner + ?Sized> ProcessRunner for &R {
    fn git(&self, args: &[String]) -> SetupResult<String> {
        (**self).git(args)
    }
}

/// Shell-based git runner using the git CLI.
#[derive(Debug, Clone)]
pub struct ShellBackend {
    executable: PathBuf,
    work_dir: PathBuf,
    config_overrides: Vec<String>,
    non_interactive: bool,
}

impl ShellBackend {
    /// Create a runner for `executable` operating in `work_dir`.
    pub fn new(executable: impl Into<PathBuf>, work_dir: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
            work_dir: work_dir.into(),
            config_overrides: Vec::new(),
            non_interactive: true,
        }
    }

    /// Build a runner from settings, resolving the executable through `PATH`.
    ///
    /// # Errors
    ///
    /// Returns `ProcessError::ExecutableNotFound` if git cannot be located.
    pub fn from_config(config: &GitConfig, work_dir: &Path) -> SetupResult<Self> {
        let executable =
            which::which(&config.executable).map_err(|_| ProcessError::ExecutableNotFound {
                name: config.executable.display().to_string(),
            })?;
        debug!(git = %executable.display(), "using git executable");

        Ok(Self::new(executable, work_dir)
            .with_config_overrides(config.config_overrides.clone())
            .with_non_interactive(config.non_interactive))
    }

    /// Pass `-c key=value` to every invocation.
    #[must_use]
    pub fn with_config_overrides(mut self, overrides: Vec<String>) -> Self {
        self.config_overrides = overrides;
        self
    }

    /// Forbid credential prompts (on by default).
    #[must_use]
    pub const fn with_non_interactive(mut self, non_interactive: bool) -> Self {
        self.non_interactive = non_interactive;
        self
    }

    fn full_args<'a>(&'a self, args: &'a [String]) -> Vec<&'a str> {
        let mut full = Vec::with_capacity(self.config_overrides.len() * 2 + args.len());
        for entry in &self.config_overrides {
            full.push("-c");
            full.push(entry.as_str());
        }
        full.extend(args.iter().map(String::as_str));
        full
    }
}

impl ProcessRunner for ShellBackend {
    fn git(&self, args: &[String]) -> SetupResult<String> {
        let full = self.full_args(args);
        let command_line = format!("git {}", full.join(" "));
        debug!(cwd = %self.work_dir.display(), "{command_line}");

        let mut command = Command::new(&self.executable);
        command.args(&full).current_dir(&self.work_dir);
        if self.non_interactive {
            command
                .env("GCM_INTERACTIVE", "never")
                .env("GIT_TERMINAL_PROMPT", "0");
        }

        let output = command.output().map_err(|source| ProcessError::SpawnFailed {
            command: command_line.clone(),
            source,
        })?;

        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if !stdout.is_empty() {
            trace!(stdout = %stdout, "git output");
        }

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let message = if stderr.is_empty() {
                output.status.to_string()
            } else {
                stderr
            };
            return Err(GitError::CommandFailed {
                command: command_line,
                message,
            }
            .into());
        }
        Ok(stdout)
    }
}
