// git-setup-submodules: declarative git submodule bootstrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |            setup / list / config
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |   TOML, layered settings  |
//!              '-------------+-------------'
//!                            v
//!              ,---------------------------,
//!              |           setup           |
//!              |  probe, add, pin, pull,   |
//!              |  unstage, run report      |
//!              '--+----------+----------+--'
//!                 |          |          |
//!                 v          v          v
//!           declaration     git      utility::fs
//!             parser    runner/remote  FileSystem
//!
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod declaration;
pub mod error;
pub mod git;
pub mod logging;
pub mod setup;
pub mod utility;
