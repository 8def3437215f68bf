// git-setup-submodules: declarative git submodule bootstrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Recording [`ProcessRunner`] for unit tests.
//!
//! Every invocation is stored as its argument list joined with spaces. Canned
//! responses and failures are matched by prefix, failures first.

use std::cell::RefCell;

use super::backend::ProcessRunner;
use crate::error::{GitError, SetupResult};

#[derive(Debug, Default)]
pub(crate) struct RecordingRunner {
    calls: RefCell<Vec<String>>,
    responses: Vec<(String, String)>,
    failures: Vec<(String, String)>,
}

impl RecordingRunner {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Answer `config --get remote.origin.url` with `url`.
    pub(crate) fn with_origin(self, url: &str) -> Self {
        self.respond("config --get remote.origin.url", url)
    }

    pub(crate) fn respond(mut self, prefix: &str, stdout: &str) -> Self {
        self.responses.push((prefix.to_string(), stdout.to_string()));
        self
    }

    pub(crate) fn fail(mut self, prefix: &str, message: &str) -> Self {
        self.failures.push((prefix.to_string(), message.to_string()));
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl ProcessRunner for RecordingRunner {
    fn git(&self, args: &[String]) -> SetupResult<String> {
        let line = args.join(" ");
        self.calls.borrow_mut().push(line.clone());

        if let Some((_, message)) = self.failures.iter().find(|(p, _)| line.starts_with(p)) {
            return Err(GitError::CommandFailed {
                command: format!("git {line}"),
                message: message.clone(),
            }
            .into());
        }
        Ok(self
            .responses
            .iter()
            .find(|(p, _)| line.starts_with(p))
            .map(|(_, out)| out.clone())
            .unwrap_or_default())
    }
}
