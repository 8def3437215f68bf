// git-setup-submodules: declarative git submodule bootstrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Settings-related commands.

use crate::config::Config;

/// Display current settings.
pub fn run_options_command(config: &Config) {
    for line in config.format_options() {
        println!("{line}");
    }
}

/// Display loaded settings files.
pub fn run_configs_command(config_files: &[String]) {
    if config_files.is_empty() {
        println!("No settings files loaded");
    } else {
        for line in config_files {
            println!("{line}");
        }
    }
}
