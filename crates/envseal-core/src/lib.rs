// SPDX-FileCopyrightText: 2026 Envseal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core types shared across the envseal workspace.

pub mod error;

pub use error::EnvsealError;
