// SPDX-FileCopyrightText: 2026 Envseal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Figment-based loader.
//!
//! Lookup order: `./envseal.toml` > `~/.config/envseal/envseal.toml` >
//! `/etc/envseal/envseal.toml`, with `ENVSEAL_` environment overrides on top.

#![allow(clippy::result_large_err)] // figment::Error is external

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::EnvsealConfig;

pub const LOCAL_CONFIG_FILE: &str = "envseal.toml";
pub const SYSTEM_CONFIG_FILE: &str = "/etc/envseal/envseal.toml";

/// Path of the per-user config file, if the platform has a config dir.
pub fn user_config_file() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("envseal").join(LOCAL_CONFIG_FILE))
}

/// Load configuration from the standard hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/envseal/envseal.toml`
/// 3. `~/.config/envseal/envseal.toml`
/// 4. `./envseal.toml`
/// 5. `ENVSEAL_*` environment variables
pub fn load_config() -> Result<EnvsealConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from an inline TOML string only. No files, no env.
pub fn load_config_from_str(toml_content: &str) -> Result<EnvsealConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(EnvsealConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from one explicit file, with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<EnvsealConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(EnvsealConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// The full hierarchy as an unextracted Figment.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(EnvsealConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG_FILE))
        .merge(Toml::file(user_config_file().unwrap_or_default()))
        .merge(Toml::file(LOCAL_CONFIG_FILE))
        .merge(env_provider())
}

/// `ENVSEAL_STORE_PATH` -> `store.path`, `ENVSEAL_LOGGING_LEVEL` -> `logging.level`.
///
/// Section names are mapped explicitly; `Env::split("_")` would break keys
/// that contain underscores.
fn env_provider() -> Env {
    Env::prefixed("ENVSEAL_").map(|key| {
        key.as_str()
            .replacen("store_", "store.", 1)
            .replacen("logging_", "logging.", 1)
            .into()
    })
}
