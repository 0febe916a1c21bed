// SPDX-FileCopyrightText: 2026 Envseal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end: enroll to a file, load it back through the exposure filter,
//! and re-derive the hash from the recorded salt.

use envseal_secrets::kdf::{SALT_LEN, derive_hash};
use envseal_secrets::{Candidate, ScriptedSource, enroll_to_path, load_exposed};

fn is_lower_hex(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
}

#[test]
fn enroll_expose_and_rederive() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".env");

    enroll_to_path(
        ScriptedSource::new([Candidate::new("SERVICE_API", "s3cr3t")]),
        &path,
    )
    .expect("enrollment should succeed");

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);

    let salt_hex = lines[0].strip_prefix("SERVICE_API_SALT=").expect("salt line first");
    let hash_hex = lines[1].strip_prefix("SERVICE_API_HASH=").expect("hash line second");
    assert_eq!(salt_hex.len(), 32);
    assert_eq!(hash_hex.len(), 64);
    assert!(is_lower_hex(salt_hex) && is_lower_hex(hash_hex));

    let unrelated = vec![("UNRELATED".to_string(), "c".to_string())];
    let exposed = load_exposed(&path, unrelated).expect("store should load");
    assert_eq!(exposed.len(), 2);
    assert_eq!(exposed["SERVICE_API_SALT"], salt_hex);
    assert_eq!(exposed["SERVICE_API_HASH"], hash_hex);

    let salt: [u8; SALT_LEN] = hex::decode(salt_hex).unwrap().try_into().unwrap();
    assert_eq!(hex::encode(derive_hash(b"s3cr3t", &salt)), hash_hex);
}

#[test]
fn every_name_gets_exactly_one_pair() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".env");
    let names = ["DB_PASSWORD", "SMTP", "x", "lower_case_name"];

    enroll_to_path(
        ScriptedSource::new(names.iter().map(|n| Candidate::new(*n, ""))),
        &path,
    )
    .unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let keys: Vec<&str> = content
        .lines()
        .map(|line| line.split_once('=').expect("KEY=VALUE line").0)
        .collect();
    for name in names {
        let salt_key = format!("{name}_SALT");
        let hash_key = format!("{name}_HASH");
        assert_eq!(keys.iter().filter(|k| **k == salt_key).count(), 1, "{name}");
        assert_eq!(keys.iter().filter(|k| **k == hash_key).count(), 1, "{name}");
    }
    assert_eq!(keys.len(), names.len() * 2);
}

#[test]
fn same_secret_enrolled_twice_differs() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.env");
    let second = dir.path().join("second.env");

    enroll_to_path(ScriptedSource::new([Candidate::new("K", "same")]), &first).unwrap();
    enroll_to_path(ScriptedSource::new([Candidate::new("K", "same")]), &second).unwrap();

    let a = load_exposed(&first, Vec::new()).unwrap();
    let b = load_exposed(&second, Vec::new()).unwrap();
    assert_ne!(a["K_SALT"], b["K_SALT"]);
    assert_ne!(a["K_HASH"], b["K_HASH"]);
}
