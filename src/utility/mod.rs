// git-setup-submodules: declarative git submodule bootstrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Utility modules.
//!
//! ```text
//! fs
//!   FileSystem     exists / read / create_empty / is_writable
//!   OsFileSystem   std::fs rooted at the host repository
//! ```

pub mod fs;
