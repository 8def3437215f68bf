// git-setup-submodules: declarative git submodule bootstrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filesystem access used by the setup routine.
//!
//! ```text
//! FileSystem (trait)
//!   exists()        tracking / declaration file present?
//!   read_to_string  declaration file contents
//!   create_empty()  lazily create .gitmodules
//!   is_writable()   gate before registering submodules
//!        |
//!        v
//! OsFileSystem { root }   relative paths resolve against root
//! ```

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use crate::error::{FsError, SetupResult};

/// Minimal filesystem capability.
///
/// Relative paths are interpreted against the implementation's root.
pub trait FileSystem {
    fn exists(&self, path: &Path) -> bool;

    /// Read a whole file as UTF-8.
    ///
    /// # Errors
    ///
    /// Returns `FsError::NotFound` if the file is missing, `FsError::IoError`
    /// for any other read failure.
    fn read_to_string(&self, path: &Path) -> SetupResult<String>;

    /// Create an empty file, truncating nothing if it already exists.
    ///
    /// # Errors
    ///
    /// Returns `FsError::IoError` if the file cannot be created.
    fn create_empty(&self, path: &Path) -> SetupResult<()>;

    /// Check whether an existing file can be opened for writing.
    fn is_writable(&self, path: &Path) -> bool;
}

/// [`FileSystem`] backed by `std::fs`.
#[derive(Debug, Clone)]
pub struct OsFileSystem {
    root: PathBuf,
}

impl OsFileSystem {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

impl FileSystem for OsFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.resolve(path).exists()
    }

    fn read_to_string(&self, path: &Path) -> SetupResult<String> {
        let full = self.resolve(path);
        fs::read_to_string(&full).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                FsError::NotFound(full.display().to_string()).into()
            } else {
                FsError::IoError {
                    path: full.display().to_string(),
                    source,
                }
                .into()
            }
        })
    }

    fn create_empty(&self, path: &Path) -> SetupResult<()> {
        let full = self.resolve(path);
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&full)
            .map_err(|source| FsError::IoError {
                path: full.display().to_string(),
                source,
            })?;
        Ok(())
    }

    fn is_writable(&self, path: &Path) -> bool {
        OpenOptions::new()
            .append(true)
            .open(self.resolve(path))
            .is_ok()
    }
}
