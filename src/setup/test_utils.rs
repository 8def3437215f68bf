// git-setup-submodules: declarative git submodule bootstrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shared test utilities for setup tests.
//!
//! In-memory [`FileSystem`] and log capture for dry-run output.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

use crate::error::{FsError, SetupResult};
use crate::utility::fs::FileSystem;

#[derive(Debug, Default)]
pub(crate) struct MemoryFileSystem {
    files: RefCell<BTreeMap<PathBuf, String>>,
    read_only: BTreeSet<PathBuf>,
    uncreatable: BTreeSet<PathBuf>,
    created: RefCell<Vec<PathBuf>>,
}

impl MemoryFileSystem {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_file(self, path: &str, content: &str) -> Self {
        self.files
            .borrow_mut()
            .insert(PathBuf::from(path), content.to_string());
        self
    }

    pub(crate) fn read_only(mut self, path: &str) -> Self {
        self.read_only.insert(PathBuf::from(path));
        self
    }

    pub(crate) fn uncreatable(mut self, path: &str) -> Self {
        self.uncreatable.insert(PathBuf::from(path));
        self
    }

    pub(crate) fn created(&self) -> Vec<PathBuf> {
        self.created.borrow().clone()
    }
}

impl FileSystem for MemoryFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path)
    }

    fn read_to_string(&self, path: &Path) -> SetupResult<String> {
        self.files
            .borrow()
            .get(path)
            .cloned()
            .ok_or_else(|| FsError::NotFound(path.display().to_string()).into())
    }

    fn create_empty(&self, path: &Path) -> SetupResult<()> {
        if self.uncreatable.contains(path) {
            return Err(FsError::IoError {
                path: path.display().to_string(),
                source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
            }
            .into());
        }
        self.created.borrow_mut().push(path.to_path_buf());
        self.files
            .borrow_mut()
            .entry(path.to_path_buf())
            .or_default();
        Ok(())
    }

    fn is_writable(&self, path: &Path) -> bool {
        self.exists(path) && !self.read_only.contains(path)
    }
}

#[derive(Clone)]
struct BufferWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl Write for BufferWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer
            .lock()
            .map_err(|_| std::io::Error::other("buffer poisoned"))?
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[derive(Clone)]
struct BufferMakeWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl<'a> MakeWriter<'a> for BufferMakeWriter {
    type Writer = BufferWriter;

    fn make_writer(&'a self) -> Self::Writer {
        BufferWriter {
            buffer: self.buffer.clone(),
        }
    }
}

/// Runs `f` while capturing `info` and above, without levels or targets.
pub(crate) fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let buffer = Arc::new(Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::fmt::Subscriber::builder()
        .with_writer(BufferMakeWriter {
            buffer: buffer.clone(),
        })
        .with_max_level(Level::INFO)
        .with_ansi(false)
        .with_target(false)
        .with_level(false)
        .without_time()
        .finish();

    let value = tracing::subscriber::with_default(subscriber, f);
    let logs = buffer
        .lock()
        .map(|guard| String::from_utf8_lossy(&guard).to_string())
        .unwrap_or_default();
    (value, logs)
}
