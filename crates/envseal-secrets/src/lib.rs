// SPDX-FileCopyrightText: 2026 Envseal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Salted secret enrollment and exposure filtering.
//!
//! Enrollment reads (name, secret) pairs, derives a PBKDF2-HMAC-SHA256 hash
//! under a fresh random salt, and writes `NAME_SALT` / `NAME_HASH` lines to a
//! dotenv store. The secret itself is never persisted.
//!
//! The exposure filter loads that store, overlays the ambient environment,
//! and returns only the `_SALT` / `_HASH` keys.

pub mod enroll;
pub mod entry;
pub mod expose;
pub mod kdf;
pub mod prompt;
pub mod source;
pub mod store;

pub use enroll::{enroll, enroll_to_path};
pub use entry::SecretEntry;
pub use expose::{filter_exposed, load_exposed, load_exposed_from_process, mask_value};
pub use prompt::TerminalSource;
pub use source::{Candidate, EnrollmentSource, ScriptedSource};
pub use store::EnvironmentStore;
