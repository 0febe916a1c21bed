// SPDX-FileCopyrightText: 2026 Envseal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `envseal expose` command implementation.

use std::collections::BTreeMap;
use std::io::IsTerminal;
use std::path::Path;

use colored::Colorize;
use envseal_core::EnvsealError;
use envseal_secrets::{load_exposed_from_process, mask_value};

/// Print the exposed salt/hash entries to stdout.
pub fn run_expose(path: &Path, mask: bool, json: bool) -> Result<(), EnvsealError> {
    let exposed = load_exposed_from_process(path)?;
    let use_color = !json && std::io::stdout().is_terminal();
    print!("{}", render(&exposed, mask, json, use_color));
    Ok(())
}

fn render(exposed: &BTreeMap<String, String>, mask: bool, json: bool, use_color: bool) -> String {
    let shown: BTreeMap<&str, String> = exposed
        .iter()
        .map(|(k, v)| {
            let value = if mask { mask_value(v) } else { v.clone() };
            (k.as_str(), value)
        })
        .collect();

    if json {
        // A map of strings always serializes.
        let mut out = serde_json::to_string_pretty(&shown).unwrap_or_default();
        out.push('\n');
        return out;
    }

    shown
        .iter()
        .map(|(k, v)| {
            if use_color {
                format!("{}={v}\n", k.cyan())
            } else {
                format!("{k}={v}\n")
            }
        })
        .collect()
}
