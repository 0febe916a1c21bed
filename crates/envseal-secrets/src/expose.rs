// SPDX-FileCopyrightText: 2026 Envseal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Exposure filter: keep only `_SALT` / `_HASH` keys from an environment.
//!
//! The ambient environment is passed in explicitly. Nothing here mutates the
//! process environment or the store.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use envseal_core::EnvsealError;
use tracing::debug;

use crate::entry::{HASH_SUFFIX, SALT_SUFFIX};
use crate::store;

/// Whether `key` carries a recognized suffix. Case-sensitive.
pub fn is_exposed_key(key: &str) -> bool {
    key.ends_with(SALT_SUFFIX) || key.ends_with(HASH_SUFFIX)
}

/// Keep only pairs whose key passes [`is_exposed_key`].
///
/// Salt/hash pairing is not checked.
pub fn filter_exposed<I, K, V>(pairs: I) -> BTreeMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .filter(|(k, _)| is_exposed_key(k))
        .collect()
}

/// Overlay `ambient` on top of `store_pairs`.
///
/// Variables already present in the environment win, the same way a dotenv
/// loader leaves existing variables alone.
pub fn merge_environment<S, A>(store_pairs: S, ambient: A) -> HashMap<String, String>
where
    S: IntoIterator<Item = (String, String)>,
    A: IntoIterator<Item = (String, String)>,
{
    let mut merged: HashMap<String, String> = store_pairs.into_iter().collect();
    merged.extend(ambient);
    merged
}

/// Load the store at `store_path`, merge `ambient` over it, and filter.
///
/// A missing store is not an error; only `ambient` is considered then.
pub fn load_exposed<A>(
    store_path: &Path,
    ambient: A,
) -> Result<BTreeMap<String, String>, EnvsealError>
where
    A: IntoIterator<Item = (String, String)>,
{
    let store_pairs = store::read_pairs(store_path)?.unwrap_or_default();
    let exposed = filter_exposed(merge_environment(store_pairs, ambient));
    debug!(path = %store_path.display(), exposed = exposed.len(), "exposure filter applied");
    Ok(exposed)
}

/// [`load_exposed`] against a snapshot of the current process environment.
///
/// Variables whose name or value is not valid UTF-8 are skipped.
pub fn load_exposed_from_process(
    store_path: &Path,
) -> Result<BTreeMap<String, String>, EnvsealError> {
    let ambient = std::env::vars_os()
        .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)));
    load_exposed(store_path, ambient)
}

/// Shorten a value for display: first and last four characters, or `****`.
pub fn mask_value(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() < 10 {
        return "****".to_string();
    }
    let prefix: String = chars[..4].iter().collect();
    let suffix: String = chars[chars.len() - 4..].iter().collect();
    format!("{prefix}...{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn keeps_only_salt_and_hash_keys() {
        let exposed = filter_exposed([("FOO_SALT", "a"), ("FOO_HASH", "b"), ("UNRELATED", "c")]);
        let expected: BTreeMap<String, String> = pairs(&[("FOO_SALT", "a"), ("FOO_HASH", "b")])
            .into_iter()
            .collect();
        assert_eq!(exposed, expected);
    }

    #[test]
    fn suffix_match_is_exact() {
        assert!(is_exposed_key("_SALT"));
        assert!(!is_exposed_key("FOO_salt"));
        assert!(!is_exposed_key("FOO_SALTY"));
        assert!(!is_exposed_key("HASH"));
    }

    #[test]
    fn unpaired_keys_pass_through() {
        let exposed = filter_exposed([("LONELY_SALT", "00")]);
        assert_eq!(exposed.len(), 1);
    }

    #[test]
    fn empty_environment_and_no_store_is_empty() {
        let dir = tempdir().unwrap();
        let exposed = load_exposed(&dir.path().join(".env"), Vec::new()).unwrap();
        assert!(exposed.is_empty());
    }

    #[test]
    fn missing_store_falls_back_to_ambient() {
        let dir = tempdir().unwrap();
        let ambient = pairs(&[("CI_HASH", "ff"), ("PATH", "/usr/bin")]);
        let exposed = load_exposed(&dir.path().join(".env"), ambient).unwrap();
        assert_eq!(exposed.keys().collect::<Vec<_>>(), ["CI_HASH"]);
    }

    #[test]
    fn store_and_ambient_are_merged_with_ambient_winning() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "A_SALT=from-store\nA_HASH=from-store\nNOISE=1\n").unwrap();

        let ambient = pairs(&[("A_HASH", "from-env"), ("B_SALT", "env-only"), ("HOME", "/root")]);
        let exposed = load_exposed(&path, ambient).unwrap();

        assert_eq!(exposed.len(), 3);
        assert_eq!(exposed["A_SALT"], "from-store");
        assert_eq!(exposed["A_HASH"], "from-env");
        assert_eq!(exposed["B_SALT"], "env-only");
    }

    #[test]
    fn loading_does_not_modify_the_store() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".env");
        let content = "X_SALT=01\nX_HASH=02\n";
        std::fs::write(&path, content).unwrap();

        load_exposed(&path, Vec::new()).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), content);
    }

    #[test]
    fn process_snapshot_never_leaks_other_keys() {
        let dir = tempdir().unwrap();
        let exposed = load_exposed_from_process(&dir.path().join(".env")).unwrap();
        assert!(exposed.keys().all(|k| is_exposed_key(k)));
    }

    #[test]
    fn mask_value_hides_the_middle() {
        assert_eq!(mask_value("short"), "****");
        assert_eq!(mask_value("0123456789abcdef0123456789abcdef"), "0123...cdef");
    }
}
