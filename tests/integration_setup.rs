// git-setup-submodules: declarative git submodule bootstrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the setup routine.
//!
//! Runs real git against local bare repositories laid out as siblings of the
//! host repository's origin URL.

use git_setup_submodules::config::types::{GitConfig, SetupConfig};
use git_setup_submodules::git::backend::ShellBackend;
use git_setup_submodules::setup::{ModuleOutcome, SubmoduleSetup};
use git_setup_submodules::utility::fs::OsFileSystem;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Helper to run git commands in a directory
fn run_git(args: &[&str], cwd: &Path) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(cwd)
        .env("GIT_AUTHOR_NAME", "Test")
        .env("GIT_AUTHOR_EMAIL", "test@test.com")
        .env("GIT_COMMITTER_NAME", "Test")
        .env("GIT_COMMITTER_EMAIL", "test@test.com")
        .output()
        .expect("failed to run git");
    assert!(
        output.status.success(),
        "git {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Create a bare repository `<remotes>/<name>.git` with one commit on `main`
/// and, optionally, a `develop` branch one commit ahead.
fn create_remote(remotes: &Path, name: &str, with_develop: bool) {
    let seed = remotes.join(format!("{name}-seed"));
    fs::create_dir_all(&seed).unwrap();
    run_git(&["init", "-q", "-b", "main"], &seed);
    fs::write(seed.join("README.md"), format!("# {name}\n")).unwrap();
    run_git(&["add", "README.md"], &seed);
    run_git(&["commit", "-q", "-m", "initial"], &seed);
    if with_develop {
        run_git(&["checkout", "-q", "-b", "develop"], &seed);
        fs::write(seed.join("DEVELOP.md"), "next\n").unwrap();
        run_git(&["add", "DEVELOP.md"], &seed);
        run_git(&["commit", "-q", "-m", "develop"], &seed);
        run_git(&["checkout", "-q", "main"], &seed);
    }
    let bare = format!("{name}.git");
    run_git(&["clone", "-q", "--bare", &format!("{name}-seed"), &bare], remotes);
}

struct Fixture {
    _temp: TempDir,
    host: PathBuf,
}

/// Host repository with one commit and `origin` pointing at `remotes/host.git`.
fn fixture(declarations: &str) -> Fixture {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let remotes = temp.path().join("remotes");
    fs::create_dir_all(&remotes).unwrap();
    create_remote(&remotes, "utils", false);
    create_remote(&remotes, "logger", true);

    let host = temp.path().join("host");
    fs::create_dir_all(&host).unwrap();
    run_git(&["init", "-q", "-b", "main"], &host);
    fs::write(host.join("README.md"), "# host\n").unwrap();
    run_git(&["add", "README.md"], &host);
    run_git(&["commit", "-q", "-m", "initial"], &host);
    let origin = remotes.join("host.git");
    run_git(
        &["remote", "add", "origin", &origin.to_string_lossy().replace('\\', "/")],
        &host,
    );
    fs::write(host.join(".git-setup-submodules"), declarations).unwrap();

    Fixture { _temp: temp, host }
}

fn git_config() -> GitConfig {
    GitConfig {
        config_overrides: vec![
            "protocol.file.allow=always".to_string(),
            "user.name=Test".to_string(),
            "user.email=test@test.com".to_string(),
        ],
        ..GitConfig::default()
    }
}

#[test]
fn setup_adds_pins_and_unstages_modules() {
    let fixture = fixture(
        "# shared code\n\
         libs/utils\n\
         libs/logger:log#develop // tracks develop\n\
         libs/missing\n",
    );
    let runner = ShellBackend::from_config(&git_config(), &fixture.host).unwrap();
    let fs = OsFileSystem::new(&fixture.host);

    let report = SubmoduleSetup::new(&runner, &fs, &SetupConfig::default())
        .run()
        .unwrap();

    let outcomes: Vec<(&str, bool)> = report
        .modules
        .iter()
        .map(|m| {
            (
                m.declaration.submodule_path.as_str(),
                m.outcome.is_completed(),
            )
        })
        .collect();
    assert_eq!(
        outcomes,
        [
            ("libs/utils", true),
            ("libs/log", true),
            ("libs/missing", false)
        ]
    );
    assert!(matches!(
        report.modules[2].outcome,
        ModuleOutcome::Inaccessible { .. }
    ));
    assert!(report.tracking_file_unstaged);

    assert!(fixture.host.join("libs/utils/README.md").exists());
    assert!(fixture.host.join("libs/log/DEVELOP.md").exists());

    let branch = run_git(
        &["config", "-f", ".gitmodules", "--get", "submodule.libs/log.branch"],
        &fixture.host,
    );
    assert_eq!(branch, "develop");
    let branch = run_git(
        &["config", "-f", ".gitmodules", "--get", "submodule.libs/utils.branch"],
        &fixture.host,
    );
    assert_eq!(branch, "main");

    let staged = run_git(&["diff", "--cached", "--name-only"], &fixture.host);
    assert_eq!(staged, "", "nothing should be staged");
}

#[test]
fn setup_is_noop_once_initialized() {
    let fixture = fixture("libs/utils\n");
    let runner = ShellBackend::from_config(&git_config(), &fixture.host).unwrap();
    let fs = OsFileSystem::new(&fixture.host);
    let setup = SubmoduleSetup::new(&runner, &fs, &SetupConfig::default());

    let first = setup.run().unwrap();
    assert_eq!(first.completed(), 1);

    let second = setup.run().unwrap();
    assert!(second.already_initialized);
    assert!(second.modules.is_empty());
}

#[test]
fn setup_without_access_leaves_repository_untouched() {
    let fixture = fixture("libs/missing\nother\n");
    let runner = ShellBackend::from_config(&git_config(), &fixture.host).unwrap();
    let fs = OsFileSystem::new(&fixture.host);

    let report = SubmoduleSetup::new(&runner, &fs, &SetupConfig::default())
        .run()
        .unwrap();

    assert_eq!(report.completed(), 0);
    assert!(!report.tracking_file_unstaged);
    assert!(!fixture.host.join(".gitmodules").exists());
}

#[test]
fn dry_run_creates_nothing() {
    let fixture = fixture("libs/utils\nlibs/logger#develop\n");
    let runner = ShellBackend::from_config(&git_config(), &fixture.host).unwrap();
    let fs = OsFileSystem::new(&fixture.host);
    let config = SetupConfig {
        dry: true,
        ..SetupConfig::default()
    };

    let report = SubmoduleSetup::new(&runner, &fs, &config).run().unwrap();

    assert!(
        report
            .modules
            .iter()
            .all(|m| m.outcome == ModuleOutcome::Planned)
    );
    assert!(!fixture.host.join(".gitmodules").exists());
    assert!(!fixture.host.join("libs").exists());
}
