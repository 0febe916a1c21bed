// SPDX-FileCopyrightText: 2026 Envseal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The persisted store: `NAME_SALT` / `NAME_HASH` line pairs in a dotenv file.
//!
//! Writing truncates the target and writes the whole store at once. There is
//! no temp-file rename, so a crash mid-write can leave a truncated file.

use std::fmt::Write as _;
use std::path::Path;

use envseal_core::EnvsealError;
use tracing::{debug, info};

use crate::entry::SecretEntry;

/// Ordered collection of enrolled entries. Duplicate names are kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvironmentStore {
    entries: Vec<SecretEntry>,
}

impl EnvironmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: SecretEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[SecretEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize as dotenv lines, salt before hash for every entry.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.entries.len() * 128);
        for entry in &self.entries {
            // Writing to a String cannot fail.
            let _ = writeln!(out, "{}={}", entry.salt_key(), entry.salt_hex());
            let _ = writeln!(out, "{}={}", entry.hash_key(), entry.hash_hex());
        }
        out
    }

    /// Overwrite `path` with the rendered store.
    pub fn write_to(&self, path: &Path) -> Result<(), EnvsealError> {
        std::fs::write(path, self.render()).map_err(|source| EnvsealError::Store {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), entries = self.len(), "store written");
        Ok(())
    }
}

impl FromIterator<SecretEntry> for EnvironmentStore {
    fn from_iter<I: IntoIterator<Item = SecretEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Read every key/value pair from a dotenv file, in file order.
///
/// A missing file is `Ok(None)`, not an error.
pub fn read_pairs(path: &Path) -> Result<Option<Vec<(String, String)>>, EnvsealError> {
    let iter = match dotenvy::from_path_iter(path) {
        Ok(iter) => iter,
        Err(e) if e.not_found() => {
            debug!(path = %path.display(), "no store file, nothing loaded");
            return Ok(None);
        }
        Err(e) => return Err(map_dotenv_err(path, e)),
    };

    let pairs = iter
        .map(|item| item.map_err(|e| map_dotenv_err(path, e)))
        .collect::<Result<Vec<_>, _>>()?;
    debug!(path = %path.display(), pairs = pairs.len(), "store loaded");
    Ok(Some(pairs))
}

fn map_dotenv_err(path: &Path, e: dotenvy::Error) -> EnvsealError {
    match e {
        dotenvy::Error::Io(source) => EnvsealError::Store {
            path: path.to_path_buf(),
            source,
        },
        other => EnvsealError::StoreParse(format!("{}: {other}", path.display())),
    }
}
