// SPDX-FileCopyrightText: 2026 Envseal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `envseal enroll` command implementation.

use std::io::IsTerminal;
use std::path::Path;

use colored::Colorize;
use envseal_core::EnvsealError;
use envseal_secrets::{TerminalSource, enroll_to_path};

/// Run an interactive enrollment session and overwrite `path`.
pub fn run_enroll(path: &Path) -> Result<(), EnvsealError> {
    eprintln!(
        "Enrolling secrets into {} (existing content will be replaced).",
        path.display()
    );

    let store = enroll_to_path(TerminalSource::new(), path)?;

    let summary = format!("Enrolled {} secret(s) into {}", store.len(), path.display());
    if std::io::stderr().is_terminal() {
        eprintln!("{}", summary.green());
    } else {
        eprintln!("{summary}");
    }
    Ok(())
}
