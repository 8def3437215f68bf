// git-setup-submodules: declarative git submodule bootstrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::process::ExitCode;

use git_setup_submodules::cli::global::GlobalOptions;
use git_setup_submodules::cli::{self, Command, SetupArgs};
use git_setup_submodules::cmd::Workspace;
use git_setup_submodules::cmd::config::{run_configs_command, run_options_command};
use git_setup_submodules::cmd::list::run_list_command;
use git_setup_submodules::cmd::setup::run_setup_command;
use git_setup_submodules::cmd::{build_config_loader, resolve_root};
use git_setup_submodules::logging::init_logging;
use git_setup_submodules::logging::{LogConfig, LogLevel};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    let log_config = build_log_config(&cli.global);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli)
}

fn build_log_config(global: &GlobalOptions) -> LogConfig {
    let console_level = global
        .log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(LogLevel::INFO);

    let file_level = global
        .file_log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(console_level);

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(file_level)
        .maybe_with_log_file(global.log_file.clone())
        .build()
}

fn dispatch_command(cli: &cli::Cli) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Options) => {
            Workspace::load(&cli.global).map(|workspace| run_options_command(&workspace.config))
        }
        Some(Command::Configs) => handle_configs_command(&cli.global),
        Some(Command::List) => {
            Workspace::load(&cli.global).and_then(|workspace| run_list_command(&workspace))
        }
        Some(Command::Setup(args)) => Workspace::load(&cli.global)
            .and_then(|workspace| run_setup_command(args, &workspace)),
        None => Workspace::load(&cli.global)
            .and_then(|workspace| run_setup_command(&SetupArgs::default(), &workspace)),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn handle_configs_command(global: &GlobalOptions) -> git_setup_submodules::error::Result<()> {
    let root = resolve_root(global)?;
    let loader = build_config_loader(global, &root)?;
    run_configs_command(&loader.format_loaded_files());
    Ok(())
}
