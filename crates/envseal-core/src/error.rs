// SPDX-FileCopyrightText: 2026 Envseal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error type shared by every envseal crate.

use std::path::PathBuf;

use thiserror::Error;

/// The error type returned by enrollment, store, and exposure operations.
#[derive(Debug, Error)]
pub enum EnvsealError {
    /// Configuration could not be loaded or failed validation.
    #[error("configuration error: {0}")]
    Config(String),

    /// Salt generation or key derivation failed.
    #[error("key derivation error: {0}")]
    Kdf(String),

    /// The operator prompt could not be read.
    #[error("prompt error: {0}")]
    Prompt(String),

    /// The persisted store could not be opened, read, or written.
    #[error("store error at {}: {source}", path.display())]
    Store {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The persisted store contains a line a dotenv loader cannot parse.
    #[error("malformed store: {0}")]
    StoreParse(String),
}
