// git-setup-submodules: declarative git submodule bootstrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Logical git operations issued by the setup routine.
//!
//! ```text
//! GitCommand              git invocation
//! ----------------------  ------------------------------------------------
//! RemoteUrl               config --get remote.<remote>.url
//! LsRemote                ls-remote <url>
//! UnsetTrackedBranch      config -f .gitmodules --unset-all submodule.<p>.branch
//! AddSubmodule            submodule add --force <url> <p>
//! SetTrackedBranch        config -f .gitmodules --add submodule.<p>.branch <ref>
//! Pull                    -C <p> pull origin <ref>
//! Unstage                 restore --staged <p>
//! ```

use std::fmt;

use super::backend::ProcessRunner;
use crate::error::SetupResult;

/// Tracking file recording submodules, at the host repository root.
pub const GITMODULES: &str = ".gitmodules";

/// Remote name git gives a freshly added submodule's upstream.
pub const SUBMODULE_REMOTE: &str = "origin";

/// A single git invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GitCommand<'a> {
    RemoteUrl { remote: &'a str },
    LsRemote { url: &'a str },
    UnsetTrackedBranch { submodule_path: &'a str },
    AddSubmodule { url: &'a str, submodule_path: &'a str },
    SetTrackedBranch { submodule_path: &'a str, branch: &'a str },
    Pull { submodule_path: &'a str, branch: &'a str },
    Unstage { path: &'a str },
}

impl GitCommand<'_> {
    /// Arguments passed to git, without the leading `git`.
    #[must_use]
    pub fn args(&self) -> Vec<String> {
        match *self {
            Self::RemoteUrl { remote } => {
                owned(["config", "--get", format!("remote.{remote}.url").as_str()])
            }
            Self::LsRemote { url } => owned(["ls-remote", url]),
            Self::UnsetTrackedBranch { submodule_path } => owned([
                "config",
                "-f",
                GITMODULES,
                "--unset-all",
                branch_key(submodule_path).as_str(),
            ]),
            Self::AddSubmodule {
                url,
                submodule_path,
            } => owned(["submodule", "add", "--force", url, submodule_path]),
            Self::SetTrackedBranch {
                submodule_path,
                branch,
            } => owned([
                "config",
                "-f",
                GITMODULES,
                "--add",
                branch_key(submodule_path).as_str(),
                branch,
            ]),
            Self::Pull {
                submodule_path,
                branch,
            } => owned(["-C", submodule_path, "pull", SUBMODULE_REMOTE, branch]),
            Self::Unstage { path } => owned(["restore", "--staged", path]),
        }
    }

    /// Whether the command changes the repository or the tracking file.
    #[must_use]
    pub const fn is_mutation(&self) -> bool {
        !matches!(self, Self::RemoteUrl { .. } | Self::LsRemote { .. })
    }

    /// Execute through `runner`, returning trimmed stdout.
    ///
    /// # Errors
    ///
    /// Propagates the runner's error when git fails.
    pub fn run(&self, runner: &impl ProcessRunner) -> SetupResult<String> {
        runner.git(&self.args())
    }
}

impl fmt::Display for GitCommand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "git {}", self.args().join(" "))
    }
}

fn owned<const N: usize>(parts: [&str; N]) -> Vec<String> {
    parts.into_iter().map(str::to_string).collect()
}

fn branch_key(submodule_path: &str) -> String {
    format!("submodule.{submodule_path}.branch")
}

/// Whether `url` answers a remote listing.
///
/// Any failure (auth, missing repository, network) counts as no access; the
/// error is returned so callers can report the reason.
///
/// # Errors
///
/// Returns the runner's error when the listing fails.
pub fn probe_access(runner: &impl ProcessRunner, url: &str) -> SetupResult<()> {
    GitCommand::LsRemote { url }.run(runner)?;
    Ok(())
}
