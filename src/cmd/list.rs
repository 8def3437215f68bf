// git-setup-submodules: declarative git submodule bootstrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! List command implementation.

use tracing::warn;

use crate::cmd::Workspace;
use crate::declaration::{DeclarationParser, ModuleDeclaration, read_declarations};
use crate::error::Result;
use crate::git::backend::ShellBackend;
use crate::git::remote::RemoteContext;
use crate::utility::fs::OsFileSystem;

/// Main handler for the list command.
///
/// # Errors
///
/// Returns an error if the declaration file is missing or malformed.
pub fn run_list_command(workspace: &Workspace) -> Result<()> {
    let setup = &workspace.config.setup;
    let fs = OsFileSystem::new(&workspace.root);
    let parser = DeclarationParser::new().with_default_branch(&setup.default_branch);
    let declarations = read_declarations(&fs, &setup.declarations, &parser)?;

    let remote = ShellBackend::from_config(&workspace.config.git, &workspace.root)
        .and_then(|runner| RemoteContext::resolve(&runner, &setup.remote))
        .inspect_err(|e| warn!("module URLs unavailable: {e}"))
        .ok();

    if declarations.is_empty() {
        println!("No submodules declared");
    } else {
        for line in format_declarations(&declarations, remote.as_ref()) {
            println!("{line}");
        }
    }
    Ok(())
}

/// One aligned `path  branch  url` row per declaration.
///
/// The URL column is `-` when no remote is available.
#[must_use]
pub fn format_declarations(
    declarations: &[ModuleDeclaration],
    remote: Option<&RemoteContext>,
) -> Vec<String> {
    let path_width = declarations
        .iter()
        .map(|d| d.submodule_path.len())
        .max()
        .unwrap_or(0);
    let branch_width = declarations
        .iter()
        .map(|d| d.branch_or_tag.len())
        .max()
        .unwrap_or(0);

    declarations
        .iter()
        .map(|d| {
            let url = remote.map_or_else(|| "-".to_string(), |r| r.project_url(&d.module_name));
            format!(
                "{:<path_width$}  {:<branch_width$}  {url}",
                d.submodule_path, d.branch_or_tag
            )
        })
        .collect()
}
