// git-setup-submodules: declarative git submodule bootstrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!         SetupError (~16 bytes)
//!                 |
//!   +------+------+--------+
//!   |      |      |        |
//!   v      v      v        v
//!  Git   Config  Process   Fs
//!  Box    Box     Box      Box
//!
//! Sub-errors (unboxed internally):
//!   Git      CommandFailed, RemoteNotFound
//!   Config   NotFound, InvalidDeclaration, InvalidValue, Load
//!   Process  ExecutableNotFound, SpawnFailed
//!   Fs       NotFound, PermissionDenied, IoError
//! ```
//!
//! Fatal run conditions each have their own variant so callers can match on
//! them; everything per-module is folded into a `ModuleOutcome` instead.

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`SetupError`].
pub type SetupResult<T> = std::result::Result<T, SetupError>;

/// Top-level error type.
#[derive(Debug, Error)]
pub enum SetupError {
    /// Git operation failed.
    #[error("git error: {0}")]
    Git(#[from] Box<GitError>),

    /// Configuration or declaration file error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Process execution error.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    /// Filesystem error.
    #[error("filesystem error: {0}")]
    Fs(#[from] Box<FsError>),
}

/// Generates `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for SetupError {
                fn from(err: $error) -> Self {
                    SetupError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    GitError => Git,
    ConfigError => Config,
    ProcessError => Process,
    FsError => Fs,
}

// --- Git Errors ---

/// Git operation errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// Git exited with a non-zero status.
    #[error("git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },

    /// The host repository has no URL for the anchoring remote.
    #[error("failed to get URL of remote '{remote}' (is this a git repository?): {message}")]
    RemoteNotFound { remote: String, message: String },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Declaration file does not exist.
    #[error("configuration file '{0}' not found")]
    NotFound(String),

    /// A declaration line could not be turned into a module.
    #[error("invalid declaration on line {line}: {message}")]
    InvalidDeclaration { line: usize, message: String },

    /// Invalid tool setting.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// Settings sources could not be loaded or deserialized.
    #[error("failed to load settings: {0}")]
    Load(String),
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// Path not found.
    #[error("path not found: {0}")]
    NotFound(String),

    /// Path exists but cannot be written.
    #[error("cannot write to {0}")]
    PermissionDenied(String),

    /// General I/O error.
    #[error("I/O error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
