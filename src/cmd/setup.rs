// git-setup-submodules: declarative git submodule bootstrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Setup command implementation.
//!
//! ```text
//! Starting...
//! │
//! ├── Setting up 'utils' module at 'libs/utils' on branch/tag 'develop'...
//! │   └── ✅ You have access to 'utils'
//! │
//! ├── Setting up 'secret' module at 'libs/secret' on branch/tag 'main'...
//! │   └── ❌ You don't have access to 'secret' module.
//! │
//! 🏁 Submodules setup completed successfully.
//! ```

use std::path::Path;

use tracing::info;

use crate::cli::SetupArgs;
use crate::cmd::Workspace;
use crate::error::Result;
use crate::git::backend::ShellBackend;
use crate::git::cmd::GITMODULES;
use crate::setup::{ModuleOutcome, Progress, RunReport, SubmoduleSetup};
use crate::utility::fs::{FileSystem, OsFileSystem};

/// One line of the progress tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeLine {
    Out(String),
    Err(String),
}

impl TreeLine {
    fn print(&self) {
        match self {
            Self::Out(line) => println!("{line}"),
            Self::Err(line) => eprintln!("{line}"),
        }
    }
}

/// Main handler for the setup command.
///
/// An already initialized repository is reported before git is looked up.
///
/// # Errors
///
/// Returns an error if git cannot be found or the run hits a fatal condition.
pub fn run_setup_command(args: &SetupArgs, workspace: &Workspace) -> Result<()> {
    let fs = OsFileSystem::new(&workspace.root);
    if fs.exists(Path::new(GITMODULES)) {
        info!("{GITMODULES} already initialized");
        let report = RunReport {
            already_initialized: true,
            ..RunReport::default()
        };
        return print_summary(args, &report);
    }

    let runner = ShellBackend::from_config(&workspace.config.git, &workspace.root)?;
    let setup = SubmoduleSetup::new(&runner, &fs, &workspace.config.setup);

    let report = if args.json {
        setup.run()?
    } else {
        setup.run_with(|event| {
            for line in render_progress(&event) {
                line.print();
            }
        })?
    };
    print_summary(args, &report)
}

fn print_summary(args: &SetupArgs, report: &RunReport) -> Result<()> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else if report.already_initialized {
        println!("{GITMODULES} already initialized");
    } else {
        println!("🏁 Submodules setup completed successfully.");
    }
    Ok(())
}

/// Lines printed for one progress event.
#[must_use]
pub fn render_progress(event: &Progress<'_>) -> Vec<TreeLine> {
    match *event {
        Progress::Resolved { .. } => vec![
            TreeLine::Out("Starting...".to_string()),
            TreeLine::Out("│".to_string()),
        ],
        Progress::Started { declaration, .. } => vec![TreeLine::Out(format!(
            "├── Setting up '{}' module at '{}' on branch/tag '{}'...",
            declaration.module_name, declaration.submodule_path, declaration.branch_or_tag
        ))],
        Progress::Accessible { declaration } => vec![TreeLine::Out(format!(
            "│   └── ✅ You have access to '{}'",
            declaration.module_name
        ))],
        Progress::Finished { report } => {
            let name = &report.declaration.module_name;
            let mut lines = match &report.outcome {
                ModuleOutcome::Completed => Vec::new(),
                ModuleOutcome::Planned => vec![TreeLine::Out(format!(
                    "│   └── 📝 Dry run, '{name}' left unchanged"
                ))],
                ModuleOutcome::Inaccessible { .. } => vec![TreeLine::Err(format!(
                    "│   └── ❌ You don't have access to '{name}' module."
                ))],
                ModuleOutcome::Failed { step, reason } => vec![TreeLine::Err(format!(
                    "│   └── ❌ Failed to {step} '{name}': {reason}"
                ))],
            };
            lines.push(TreeLine::Out("│".to_string()));
            lines
        }
    }
}
