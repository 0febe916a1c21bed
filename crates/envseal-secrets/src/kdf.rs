// SPDX-FileCopyrightText: 2026 Envseal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! PBKDF2-HMAC-SHA256 derivation and salt generation.
//!
//! Parameters are fixed: a stored hash can only be reproduced if the salt,
//! iteration count, and output length all match the enrollment run.

use std::num::NonZeroU32;

use envseal_core::EnvsealError;
use ring::pbkdf2;
use ring::rand::{SecureRandom, SystemRandom};

/// Salt length in bytes (32 hex characters on disk).
pub const SALT_LEN: usize = 16;

/// Derived hash length in bytes (64 hex characters on disk).
pub const HASH_LEN: usize = 32;

/// PBKDF2 iteration count.
pub const PBKDF2_ITERATIONS: NonZeroU32 = match NonZeroU32::new(100_000) {
    Some(n) => n,
    None => panic!("iteration count must be non-zero"),
};

/// Derive the stored hash for `secret` under `salt`.
///
/// An empty secret is valid input.
pub fn derive_hash(secret: &[u8], salt: &[u8; SALT_LEN]) -> [u8; HASH_LEN] {
    let mut out = [0u8; HASH_LEN];
    pbkdf2::derive(
        pbkdf2::PBKDF2_HMAC_SHA256,
        PBKDF2_ITERATIONS,
        salt,
        secret,
        &mut out,
    );
    out
}

/// Generate a fresh salt from the OS CSPRNG.
pub fn generate_salt() -> Result<[u8; SALT_LEN], EnvsealError> {
    let rng = SystemRandom::new();
    let mut salt = [0u8; SALT_LEN];
    rng.fill(&mut salt)
        .map_err(|_| EnvsealError::Kdf("failed to generate random salt".to_string()))?;
    Ok(salt)
}
