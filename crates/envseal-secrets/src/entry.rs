// SPDX-FileCopyrightText: 2026 Envseal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! A single enrolled secret: its name, salt, and derived hash.

use envseal_core::EnvsealError;

use crate::kdf::{self, HASH_LEN, SALT_LEN};

/// Key suffix carrying the hex salt.
pub const SALT_SUFFIX: &str = "_SALT";

/// Key suffix carrying the hex derived hash.
pub const HASH_SUFFIX: &str = "_HASH";

/// Whether `name` can head a dotenv key: ASCII letters, digits, `_` or `.`.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
}

/// Name, salt, and hash for one enrolled secret. The secret itself is not kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretEntry {
    name: String,
    salt: [u8; SALT_LEN],
    hash: [u8; HASH_LEN],
}

impl SecretEntry {
    /// Salt `secret` freshly and derive its hash.
    pub fn derive(name: impl Into<String>, secret: &[u8]) -> Result<Self, EnvsealError> {
        let salt = kdf::generate_salt()?;
        Ok(Self::with_salt(name, secret, salt))
    }

    /// Derive with a caller-supplied salt.
    pub fn with_salt(name: impl Into<String>, secret: &[u8], salt: [u8; SALT_LEN]) -> Self {
        Self {
            name: name.into(),
            hash: kdf::derive_hash(secret, &salt),
            salt,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn salt(&self) -> &[u8; SALT_LEN] {
        &self.salt
    }

    pub fn hash(&self) -> &[u8; HASH_LEN] {
        &self.hash
    }

    /// `<name>_SALT`
    pub fn salt_key(&self) -> String {
        format!("{}{SALT_SUFFIX}", self.name)
    }

    /// `<name>_HASH`
    pub fn hash_key(&self) -> String {
        format!("{}{HASH_SUFFIX}", self.name)
    }

    /// Lower-case hex salt.
    pub fn salt_hex(&self) -> String {
        hex::encode(self.salt)
    }

    /// Lower-case hex hash.
    pub fn hash_hex(&self) -> String {
        hex::encode(self.hash)
    }
}
