// git-setup-submodules: declarative git submodule bootstrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Submodule setup routine.
//!
//! # Run Order
//!
//! ```text
//! .gitmodules exists? --yes--> already initialized (no-op)
//!        | no
//!        v
//! read + parse declarations ----------> ConfigError (fatal)
//!        |
//!        v
//! resolve remote URL ------------------> GitError::RemoteNotFound (fatal)
//!        |
//!        v
//! for each declaration, in file order:
//!   probe (ls-remote) --fail--> Inaccessible
//!        | ok
//!        v
//!   dry? --yes--> Planned
//!        | no
//!        v
//!   ensure .gitmodules, writable? --no--> FsError::PermissionDenied (fatal)
//!        |
//!        v
//!   unset branch (ignored) -> add -> pin -> pull -> unstage
//!        |                                          |
//!        | any step fails --> Failed{step}          v
//!                                               Completed
//!
//! any Completed && .gitmodules exists --> unstage .gitmodules
//! ```

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

use crate::config::types::SetupConfig;
use crate::declaration::{DeclarationParser, ModuleDeclaration, read_declarations};
use crate::error::{FsError, SetupResult};
use crate::git::backend::ProcessRunner;
use crate::git::cmd::{GITMODULES, GitCommand, probe_access};
use crate::git::remote::RemoteContext;
use crate::utility::fs::FileSystem;

/// Registration step that failed after a successful probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationStep {
    Register,
    PinBranch,
    Sync,
    Unstage,
}

impl fmt::Display for RegistrationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Register => "register",
            Self::PinBranch => "pin branch",
            Self::Sync => "sync",
            Self::Unstage => "unstage",
        };
        f.write_str(name)
    }
}

/// Terminal state of one declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ModuleOutcome {
    /// Registered, pinned, synced and unstaged.
    Completed,
    /// Accessible; mutations skipped in dry-run mode.
    Planned,
    /// The access probe failed.
    Inaccessible { reason: String },
    /// A step after the probe failed.
    Failed {
        step: RegistrationStep,
        reason: String,
    },
}

impl ModuleOutcome {
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleReport {
    pub declaration: ModuleDeclaration,
    pub project_url: String,
    pub outcome: ModuleOutcome,
}

/// Result of a whole run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    /// `.gitmodules` existed before the run; nothing was done.
    pub already_initialized: bool,
    pub modules: Vec<ModuleReport>,
    /// The final `git restore --staged .gitmodules` was issued.
    pub tracking_file_unstaged: bool,
}

impl RunReport {
    #[must_use]
    pub fn completed(&self) -> usize {
        self.modules
            .iter()
            .filter(|m| m.outcome.is_completed())
            .count()
    }
}

/// Notifications emitted while a run is in progress.
#[derive(Debug, Clone, Copy)]
pub enum Progress<'a> {
    /// Declarations were read and the remote URL resolved.
    Resolved {
        remote: &'a RemoteContext,
        modules: usize,
    },
    /// About to probe a declaration.
    Started {
        declaration: &'a ModuleDeclaration,
        project_url: &'a str,
    },
    /// The probe succeeded.
    Accessible { declaration: &'a ModuleDeclaration },
    /// The declaration reached its terminal state.
    Finished { report: &'a ModuleReport },
}

/// Orchestrates one setup run against a host repository.
pub struct SubmoduleSetup<'a, R, F> {
    runner: &'a R,
    fs: &'a F,
    declarations: PathBuf,
    remote: String,
    parser: DeclarationParser,
    dry: bool,
}

impl<'a, R: ProcessRunner, F: FileSystem> SubmoduleSetup<'a, R, F> {
    pub fn new(runner: &'a R, fs: &'a F, config: &SetupConfig) -> Self {
        Self {
            runner,
            fs,
            declarations: config.declarations.clone(),
            remote: config.remote.clone(),
            parser: DeclarationParser::new().with_default_branch(&config.default_branch),
            dry: config.dry,
        }
    }

    /// Run without progress notifications.
    ///
    /// # Errors
    ///
    /// See [`SubmoduleSetup::run_with`].
    pub fn run(&self) -> SetupResult<RunReport> {
        self.run_with(|_| {})
    }

    /// Run the whole setup, reporting progress to `observe`.
    ///
    /// # Errors
    ///
    /// - `ConfigError::NotFound` if the declaration file is missing
    /// - `ConfigError::InvalidDeclaration` for a malformed line
    /// - `GitError::RemoteNotFound` if the remote URL cannot be read
    /// - `FsError::PermissionDenied` if `.gitmodules` is not writable
    /// - the git error of the final `.gitmodules` unstage
    pub fn run_with(&self, mut observe: impl FnMut(Progress<'_>)) -> SetupResult<RunReport> {
        if self.fs.exists(Path::new(GITMODULES)) {
            info!("{GITMODULES} already initialized");
            return Ok(RunReport {
                already_initialized: true,
                ..RunReport::default()
            });
        }

        let declarations = read_declarations(self.fs, &self.declarations, &self.parser)?;
        debug!(count = declarations.len(), file = %self.declarations.display(), "read declarations");
        let remote = RemoteContext::resolve(self.runner, &self.remote)?;
        observe(Progress::Resolved {
            remote: &remote,
            modules: declarations.len(),
        });

        let mut report = RunReport::default();
        for declaration in declarations {
            let project_url = remote.project_url(&declaration.module_name);
            info!(
                module = %declaration.module_name,
                path = %declaration.submodule_path,
                branch = %declaration.branch_or_tag,
                "setting up submodule"
            );
            observe(Progress::Started {
                declaration: &declaration,
                project_url: &project_url,
            });

            let outcome = self.process(&declaration, &project_url, &mut observe)?;
            let module = ModuleReport {
                declaration,
                project_url,
                outcome,
            };
            observe(Progress::Finished { report: &module });
            report.modules.push(module);
        }

        if report.completed() > 0 && self.fs.exists(Path::new(GITMODULES)) {
            GitCommand::Unstage { path: GITMODULES }.run(self.runner)?;
            report.tracking_file_unstaged = true;
        }

        info!(
            completed = report.completed(),
            total = report.modules.len(),
            "submodule setup finished"
        );
        Ok(report)
    }

    fn process(
        &self,
        declaration: &ModuleDeclaration,
        project_url: &str,
        observe: &mut impl FnMut(Progress<'_>),
    ) -> SetupResult<ModuleOutcome> {
        if let Err(e) = probe_access(self.runner, project_url) {
            warn!(module = %declaration.module_name, url = project_url, "no access: {e}");
            return Ok(ModuleOutcome::Inaccessible {
                reason: e.to_string(),
            });
        }
        observe(Progress::Accessible { declaration });

        let path = declaration.submodule_path.as_str();
        let branch = declaration.branch_or_tag.as_str();
        let steps = [
            (
                RegistrationStep::Register,
                GitCommand::AddSubmodule {
                    url: project_url,
                    submodule_path: path,
                },
            ),
            (
                RegistrationStep::PinBranch,
                GitCommand::SetTrackedBranch {
                    submodule_path: path,
                    branch,
                },
            ),
            (
                RegistrationStep::Sync,
                GitCommand::Pull {
                    submodule_path: path,
                    branch,
                },
            ),
            (
                RegistrationStep::Unstage,
                GitCommand::Unstage { path },
            ),
        ];
        let unset = GitCommand::UnsetTrackedBranch {
            submodule_path: path,
        };

        if self.dry {
            let planned = std::iter::once(&unset).chain(steps.iter().map(|(_, command)| command));
            for command in planned.filter(|command| command.is_mutation()) {
                info!("would run: {command}");
            }
            return Ok(ModuleOutcome::Planned);
        }

        self.ensure_tracking_file()?;

        if let Err(e) = unset.run(self.runner) {
            debug!(path, "no previous branch entry: {e}");
        }

        for (step, command) in steps {
            if let Err(e) = command.run(self.runner) {
                error!(module = %declaration.module_name, %step, "{e}");
                return Ok(ModuleOutcome::Failed {
                    step,
                    reason: e.to_string(),
                });
            }
        }
        Ok(ModuleOutcome::Completed)
    }

    fn ensure_tracking_file(&self) -> SetupResult<()> {
        let tracking = Path::new(GITMODULES);
        if !self.fs.exists(tracking) {
            debug!("creating {GITMODULES}");
            if let Err(e) = self.fs.create_empty(tracking) {
                error!("cannot create {GITMODULES}: {e}");
                return Err(FsError::PermissionDenied(GITMODULES.to_string()).into());
            }
        }
        if !self.fs.is_writable(tracking) {
            return Err(FsError::PermissionDenied(GITMODULES.to_string()).into());
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod test_utils;
