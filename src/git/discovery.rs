// git-setup-submodules: declarative git submodule bootstrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Host repository discovery.
//!
//! ```text
//! start dir --> gix::discover --> worktree root
//!                    |
//!                    '-- not a repo / bare --> start dir
//! ```

use std::path::{Path, PathBuf};
use tracing::debug;

/// Find the working tree root containing `start`.
///
/// Falls back to `start` itself when no repository (or only a bare one) is
/// found; the remote query later reports that case.
#[must_use]
pub fn worktree_root(start: &Path) -> PathBuf {
    match gix::discover(start) {
        Ok(repo) => repo.workdir().map_or_else(
            || {
                debug!(path = %start.display(), "repository has no worktree");
                start.to_path_buf()
            },
            Path::to_path_buf,
        ),
        Err(e) => {
            debug!(path = %start.display(), error = %e, "no git repository found");
            start.to_path_buf()
        }
    }
}
