// git-setup-submodules: declarative git submodule bootstrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git operations module.
//!
//! ```text
//!   discovery.rs     remote.rs       cmd.rs
//!   worktree root    RemoteContext   GitCommand
//!   (gix, read)           \           /
//!                          v         v
//!                   ,-------------------,
//!                   | backend (trait)   |
//!                   |  ProcessRunner    |
//!                   '---------+---------'
//!                             |
//!                             v
//!                       ShellBackend
//!                        git CLI
//! ```
//!
//! **`gix`**: repository discovery only, no subprocess.
//! **`ShellBackend`**: every read and write the setup routine issues.

pub mod backend;
pub mod cmd;
pub mod discovery;
pub mod remote;

#[cfg(test)]
pub(crate) mod test_utils;
