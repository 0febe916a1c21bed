// SPDX-FileCopyrightText: 2026 Envseal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Enrollment: turn (name, secret) candidates into salt/hash entries.

use std::path::Path;

use envseal_core::EnvsealError;
use secrecy::ExposeSecret;
use tracing::{debug, info};

use crate::entry::{SecretEntry, is_valid_name};
use crate::source::EnrollmentSource;
use crate::store::EnvironmentStore;

/// Drain `source`, deriving one entry per candidate.
///
/// Empty secrets are hashed as-is. Names are not checked for uniqueness, but
/// a name that cannot form a dotenv key aborts the session before anything
/// is written.
pub fn enroll<S: EnrollmentSource>(mut source: S) -> Result<EnvironmentStore, EnvsealError> {
    let mut store = EnvironmentStore::new();
    while let Some(candidate) = source.next_candidate()? {
        if !is_valid_name(&candidate.name) {
            return Err(EnvsealError::Prompt(format!(
                "invalid name `{}`: use only letters, digits, `_` or `.`",
                candidate.name
            )));
        }
        let secret = candidate.secret.expose_secret().as_bytes();
        let entry = SecretEntry::derive(candidate.name, secret)?;
        debug!(name = entry.name(), "secret enrolled");
        store.push(entry);
    }
    Ok(store)
}

/// Run [`enroll`] to completion, then overwrite `path` with the result.
///
/// Nothing is written if the source fails part way through.
pub fn enroll_to_path<S: EnrollmentSource>(
    source: S,
    path: &Path,
) -> Result<EnvironmentStore, EnvsealError> {
    let store = enroll(source)?;
    store.write_to(path)?;
    info!(path = %path.display(), entries = store.len(), "enrollment complete");
    Ok(store)
}
