// git-setup-submodules: declarative git submodule bootstrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Submodule declarations.
//!
//! # Line Grammar
//!
//! ```text
//! <modulePath>[:<localFolderName>] [#<branchOrTag>] [// comment]
//!
//! apps/website:site#production  // public site
//! '--------' '--'  '--------'
//!  path    alias     ref
//!
//! modulePath  = destination/.../moduleName
//! submodule   = destination / (alias | moduleName)
//! ```
//!
//! Blank lines and lines starting with `#` or `//` are skipped.

use serde::Serialize;
use std::path::Path;

use crate::error::{ConfigError, SetupError, SetupResult};
use crate::utility::fs::FileSystem;

/// Default name of the declaration file at the repository root.
pub const DECLARATIONS_FILE: &str = ".git-setup-submodules";

/// Ref tracked when a declaration names none.
pub const DEFAULT_BRANCH: &str = "main";

/// One parsed declaration line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleDeclaration {
    /// 1-based line number in the declaration file.
    pub line: usize,
    /// Slash-separated path as written, e.g. `libs/logger`.
    pub module_path: String,
    /// Last segment of `module_path`; names the remote repository.
    pub module_name: String,
    /// Everything before the last segment, joined with `/` (may be empty).
    pub destination_path: String,
    /// Local directory name (alias or `module_name`).
    pub local_folder_name: String,
    /// Branch or tag to track.
    pub branch_or_tag: String,
    /// Where the submodule lives inside the host repository.
    pub submodule_path: String,
}

/// Parses declaration text into [`ModuleDeclaration`]s.
#[derive(Debug, Clone)]
pub struct DeclarationParser {
    default_branch: String,
}

impl Default for DeclarationParser {
    fn default() -> Self {
        Self::new()
    }
}

impl DeclarationParser {
    #[must_use]
    pub fn new() -> Self {
        Self {
            default_branch: DEFAULT_BRANCH.to_string(),
        }
    }

    /// Use a different fallback ref for lines without `#ref`.
    #[must_use]
    pub fn with_default_branch(mut self, branch: impl Into<String>) -> Self {
        self.default_branch = branch.into();
        self
    }

    /// Parse a whole declaration file, preserving line order.
    ///
    /// Any of `\n`, `\r\n` and `\r` ends a line.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidDeclaration` for the first line whose
    /// module path or module name is empty.
    pub fn parse(&self, text: &str) -> SetupResult<Vec<ModuleDeclaration>> {
        let normalized = text.replace("\r\n", "\n");
        normalized
            .split(['\n', '\r'])
            .enumerate()
            .filter_map(|(index, line)| self.parse_line(index + 1, line).transpose())
            .collect()
    }

    /// Parse one line. Returns `Ok(None)` for blank and comment lines.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidDeclaration` if the module path or module
    /// name is empty.
    pub fn parse_line(&self, line_no: usize, raw: &str) -> SetupResult<Option<ModuleDeclaration>> {
        let mut line = raw.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with("//") {
            return Ok(None);
        }

        // `//` anywhere else starts an inline comment; there is no escape.
        if let Some(index) = line.find("//") {
            line = line[..index].trim();
        }

        let (module_str, branch) = match line.split_once('#') {
            Some((module, branch)) => (module.trim(), Some(branch.trim())),
            None => (line, None),
        };
        let (module_path, alias) = match module_str.split_once(':') {
            Some((path, alias)) => (path.trim(), Some(alias.trim())),
            None => (module_str, None),
        };

        if module_path.is_empty() {
            return Err(invalid(line_no, "module path is empty"));
        }

        let (destination_path, module_name) = module_path
            .rsplit_once('/')
            .unwrap_or(("", module_path));
        if module_name.is_empty() {
            return Err(invalid(
                line_no,
                format!("module path '{module_path}' does not end with a module name"),
            ));
        }

        let local_folder_name = alias.filter(|a| !a.is_empty()).unwrap_or(module_name);
        let branch_or_tag = branch
            .filter(|b| !b.is_empty())
            .unwrap_or(self.default_branch.as_str());

        Ok(Some(ModuleDeclaration {
            line: line_no,
            module_path: module_path.to_string(),
            module_name: module_name.to_string(),
            destination_path: destination_path.to_string(),
            local_folder_name: local_folder_name.to_string(),
            branch_or_tag: branch_or_tag.to_string(),
            submodule_path: join_path(destination_path, local_folder_name),
        }))
    }
}

/// Read and parse the declaration file.
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if the file does not exist, or any parse
/// or read error.
pub fn read_declarations(
    fs: &impl FileSystem,
    path: &Path,
    parser: &DeclarationParser,
) -> SetupResult<Vec<ModuleDeclaration>> {
    if !fs.exists(path) {
        return Err(ConfigError::NotFound(path.display().to_string()).into());
    }
    let text = fs.read_to_string(path)?;
    parser.parse(&text)
}

/// Join two slash paths, dropping `.`/empty segments and resolving `..`.
///
/// Always produces `/` separators regardless of platform, since the result is
/// used in git config keys and git pathspecs.
#[must_use]
pub fn join_path(base: &str, tail: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in base.split('/').chain(tail.split('/')) {
        match segment {
            "" | "." => {}
            ".." => {
                if matches!(segments.last(), Some(last) if *last != "..") {
                    segments.pop();
                } else {
                    segments.push("..");
                }
            }
            other => segments.push(other),
        }
    }
    if segments.is_empty() {
        ".".to_string()
    } else {
        segments.join("/")
    }
}

fn invalid(line: usize, message: impl Into<String>) -> SetupError {
    ConfigError::InvalidDeclaration {
        line,
        message: message.into(),
    }
    .into()
}
