// git-setup-submodules: declarative git submodule bootstrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Module URL derivation from the host repository's remote.
//!
//! ```text
//! git@github.com:user/repo.git      https://host/group/repo.git
//! '-------------------'             '---------------'
//!        base                              base
//!
//! project url = base + <moduleName> + ".git"
//! ```

use serde::Serialize;
use tracing::{debug, warn};

use super::backend::ProcessRunner;
use super::cmd::GitCommand;
use crate::error::{GitError, SetupResult};

/// The anchoring remote URL and the prefix every module URL shares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemoteContext {
    origin_url: String,
    base: String,
}

impl RemoteContext {
    /// Derive the context from a remote URL.
    ///
    /// Everything after the last `/` is dropped; the `/` itself is kept. A URL
    /// without any `/` yields an empty base.
    pub fn from_url(url: impl Into<String>) -> Self {
        let origin_url = url.into();
        let base = origin_url
            .rfind('/')
            .map_or_else(String::new, |index| origin_url[..=index].to_string());
        Self { origin_url, base }
    }

    /// Query `remote.<remote>.url` of the host repository.
    ///
    /// # Errors
    ///
    /// Returns `GitError::RemoteNotFound` if git fails (not a repository, or
    /// the remote is not configured) or reports an empty URL.
    pub fn resolve(runner: &impl ProcessRunner, remote: &str) -> SetupResult<Self> {
        let url = GitCommand::RemoteUrl { remote }
            .run(runner)
            .map_err(|e| GitError::RemoteNotFound {
                remote: remote.to_string(),
                message: e.to_string(),
            })?;
        if url.is_empty() {
            return Err(GitError::RemoteNotFound {
                remote: remote.to_string(),
                message: "remote URL is empty".to_string(),
            }
            .into());
        }

        let context = Self::from_url(url);
        if context.base.is_empty() {
            warn!(
                url = %context.origin_url,
                "remote URL has no '/', module URLs will be bare names"
            );
        }
        debug!(remote, url = %context.origin_url, base = %context.base, "resolved remote");
        Ok(context)
    }

    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Clone URL of a sibling repository named `module_name`.
    #[must_use]
    pub fn project_url(&self, module_name: &str) -> String {
        format!("{}{module_name}.git", self.base)
    }
}
