// SPDX-FileCopyrightText: 2026 Envseal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Interactive enrollment over the controlling terminal.

use std::io::{BufRead, IsTerminal, Write};

use envseal_core::EnvsealError;
use secrecy::SecretString;
use zeroize::Zeroizing;

use crate::entry::is_valid_name;
use crate::source::{Candidate, EnrollmentSource};

pub const NAME_PROMPT: &str = "Variable base name (empty to finish): ";
pub const SECRET_PROMPT: &str = "Secret value: ";

/// Prompts for a name on stderr/stdin and for the secret via `rpassword`.
///
/// Secrets are never read from a pipe: if stdin is not a terminal the first
/// call fails.
#[derive(Debug, Default)]
pub struct TerminalSource;

impl TerminalSource {
    pub fn new() -> Self {
        Self
    }

    fn read_name(&self) -> Result<Option<String>, EnvsealError> {
        eprint!("{NAME_PROMPT}");
        std::io::stderr()
            .flush()
            .map_err(|e| EnvsealError::Prompt(format!("failed to flush prompt: {e}")))?;

        let mut line = String::new();
        let read = std::io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|e| EnvsealError::Prompt(format!("failed to read name: {e}")))?;
        if read == 0 {
            return Err(EnvsealError::Prompt(
                "input closed before an empty name ended the session".to_string(),
            ));
        }
        Ok(parse_name(&line))
    }
}

/// Trim surrounding whitespace; an empty result ends the session.
pub(crate) fn parse_name(line: &str) -> Option<String> {
    let name = line.trim();
    (!name.is_empty()).then(|| name.to_string())
}

impl EnrollmentSource for TerminalSource {
    fn next_candidate(&mut self) -> Result<Option<Candidate>, EnvsealError> {
        if !std::io::stdin().is_terminal() {
            return Err(EnvsealError::Prompt(
                "enrollment requires an interactive terminal".to_string(),
            ));
        }

        let name = loop {
            match self.read_name()? {
                None => return Ok(None),
                Some(name) if is_valid_name(&name) => break name,
                Some(name) => {
                    eprintln!("`{name}` cannot be used: letters, digits, `_` and `.` only.")
                }
            }
        };

        eprint!("{SECRET_PROMPT}");
        let secret = Zeroizing::new(
            rpassword::read_password()
                .map_err(|e| EnvsealError::Prompt(format!("failed to read secret: {e}")))?,
        );

        Ok(Some(Candidate {
            name,
            secret: SecretString::from(secret.as_str()),
        }))
    }
}
