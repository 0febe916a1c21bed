// SPDX-FileCopyrightText: 2026 Envseal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Where enrollment candidates come from.
//!
//! Enrollment drains an [`EnrollmentSource`] until it reports `Ok(None)`.
//! The terminal prompt is one implementation; [`ScriptedSource`] feeds a
//! fixed list for library callers and tests.

use std::collections::VecDeque;

use envseal_core::EnvsealError;
use secrecy::SecretString;

/// A name and the secret to enroll under it.
pub struct Candidate {
    pub name: String,
    pub secret: SecretString,
}

impl Candidate {
    pub fn new(name: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            secret: SecretString::from(secret.into()),
        }
    }
}

impl std::fmt::Debug for Candidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Candidate")
            .field("name", &self.name)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

/// Supplies candidates one at a time. `Ok(None)` ends the session.
pub trait EnrollmentSource {
    fn next_candidate(&mut self) -> Result<Option<Candidate>, EnvsealError>;
}

/// A pre-built, bounded sequence of candidates.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    queue: VecDeque<Candidate>,
}

impl ScriptedSource {
    pub fn new(candidates: impl IntoIterator<Item = Candidate>) -> Self {
        Self {
            queue: candidates.into_iter().collect(),
        }
    }

    /// Remaining candidates.
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl EnrollmentSource for ScriptedSource {
    fn next_candidate(&mut self) -> Result<Option<Candidate>, EnvsealError> {
        Ok(self.queue.pop_front())
    }
}

impl<S: EnrollmentSource + ?Sized> EnrollmentSource for &mut S {
    fn next_candidate(&mut self) -> Result<Option<Candidate>, EnvsealError> {
        (**self).next_candidate()
    }
}
