// git-setup-submodules: declarative git submodule bootstrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::global::OverrideValue;
use crate::cli::{Cli, Command};
use clap::Parser;
use std::path::PathBuf;

#[test]
fn test_parse_without_command() {
    let cli = Cli::try_parse_from(["git-setup-submodules"]).unwrap();
    assert!(cli.command.is_none());
    assert!(!cli.global.dry);
    assert!(cli.global.to_config_overrides().is_empty());
}

#[test]
fn test_parse_version() {
    let cli = Cli::try_parse_from(["git-setup-submodules", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn test_parse_setup_json() {
    let cli = Cli::try_parse_from(["git-setup-submodules", "setup", "--json"]).unwrap();
    match cli.command {
        Some(Command::Setup(args)) => assert!(args.json),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_global_options_after_subcommand() {
    let cli = Cli::try_parse_from([
        "git-setup-submodules",
        "list",
        "-C",
        "/work/host",
        "--remote",
        "upstream",
    ])
    .unwrap();
    assert!(matches!(cli.command, Some(Command::List)));
    assert_eq!(cli.global.repo, Some(PathBuf::from("/work/host")));
    assert_eq!(cli.global.remote.as_deref(), Some("upstream"));
}

#[test]
fn test_repeatable_options() {
    let cli = Cli::try_parse_from([
        "git-setup-submodules",
        "-c",
        "base.toml",
        "--config",
        "local.toml",
        "--git-config",
        "protocol.file.allow=always",
        "--git-config",
        "core.askPass=",
    ])
    .unwrap();
    assert_eq!(
        cli.global.configs,
        [PathBuf::from("base.toml"), PathBuf::from("local.toml")]
    );
    assert_eq!(
        cli.global.git_config,
        ["protocol.file.allow=always", "core.askPass="]
    );
}

#[test]
fn test_log_level_range() {
    assert!(Cli::try_parse_from(["git-setup-submodules", "-l", "5"]).is_ok());
    assert!(Cli::try_parse_from(["git-setup-submodules", "-l", "6"]).is_err());
    assert!(Cli::try_parse_from(["git-setup-submodules", "--file-log-level", "9"]).is_err());
}

#[test]
fn test_to_config_overrides() {
    let cli = Cli::try_parse_from([
        "git-setup-submodules",
        "--dry",
        "-f",
        "modules.list",
        "--default-branch",
        "develop",
        "--git",
        "/opt/git/bin/git",
        "--git-config",
        "protocol.file.allow=always",
    ])
    .unwrap();

    insta::assert_debug_snapshot!(cli.global.to_config_overrides(), @r#"
    [
        (
            "setup.declarations",
            Text(
                "modules.list",
            ),
        ),
        (
            "setup.default_branch",
            Text(
                "develop",
            ),
        ),
        (
            "setup.dry",
            Flag(
                true,
            ),
        ),
        (
            "git.executable",
            Text(
                "/opt/git/bin/git",
            ),
        ),
        (
            "git.config_overrides",
            List(
                [
                    "protocol.file.allow=always",
                ],
            ),
        ),
    ]
    "#);
}

#[test]
fn test_override_value_conversion() {
    let value = OverrideValue::Flag(true).into_value();
    assert!(value.into_bool().unwrap());

    let value = OverrideValue::List(vec!["a=b".to_string()]).into_value();
    assert_eq!(value.into_array().unwrap().len(), 1);
}
