// tests/config_tests.rs
//! Config loading: TOML values, defaults, key validation, env override

use std::fs;
use std::path::PathBuf;

use password_vault::config::load_from;
use password_vault::consts::{DB_PATH_ENV, LEGACY_EXPORT_KEY};
use password_vault::{Config, ExportFormat, ImportMode, ImportPolicy, VaultError};
use tempfile::tempdir;

#[test]
fn loads_values_from_toml() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[import]
policy = "Skip"
mode = "AllOrNothing"

[export]
dir = "/tmp/exports"
key_hex = "000102030405060708090a0b0c0d0e0f"
"#,
    )
    .unwrap();

    let conf = load_from(&path).unwrap();
    assert_eq!(conf.import.policy, ImportPolicy::Skip);
    assert_eq!(conf.import.mode, ImportMode::AllOrNothing);
    assert_eq!(conf.export.dir, PathBuf::from("/tmp/exports"));

    let key = conf.export.export_key().unwrap();
    let expected: [u8; 16] = std::array::from_fn(|i| i as u8);
    assert_eq!(key.expose_secret(), &expected);
}

#[test]
fn partial_file_keeps_defaults_for_missing_sections() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[import]\npolicy = \"Skip\"\n").unwrap();

    let conf = load_from(&path).unwrap();
    assert_eq!(conf.import.policy, ImportPolicy::Skip);
    assert_eq!(conf.import.mode, ImportMode::BestEffort);
    assert!(conf.export.key_hex.is_none());
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let dir = tempdir().unwrap();
    let conf = load_from(&dir.path().join("absent.toml")).unwrap();

    assert_eq!(conf.import.policy, ImportPolicy::Override);
    assert_eq!(conf.import.mode, ImportMode::BestEffort);
    let key = conf.export.export_key().unwrap();
    assert_eq!(key.expose_secret(), LEGACY_EXPORT_KEY);
}

#[test]
fn malformed_toml_is_a_config_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[import\npolicy = ").unwrap();

    assert!(matches!(load_from(&path), Err(VaultError::Config(_))));
}

#[test]
fn unknown_policy_is_a_config_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[import]\npolicy = \"Merge\"\n").unwrap();

    assert!(matches!(load_from(&path), Err(VaultError::Config(_))));
}

#[test]
fn bad_export_key_is_rejected_at_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");

    for bad in ["0011", "zz0102030405060708090a0b0c0d0e0f", ""] {
        fs::write(&path, format!("[export]\nkey_hex = \"{bad}\"\n")).unwrap();
        assert!(
            matches!(load_from(&path), Err(VaultError::Config(_))),
            "key_hex {bad:?} should be rejected"
        );
    }
}

#[test]
fn policy_strings_parse_case_insensitively() {
    assert_eq!("Override".parse::<ImportPolicy>().unwrap(), ImportPolicy::Override);
    assert_eq!("skip".parse::<ImportPolicy>().unwrap(), ImportPolicy::Skip);
    assert!(ImportPolicy::Override.overrides());
    assert!(!ImportPolicy::Skip.overrides());
    assert!("sometimes".parse::<ImportPolicy>().is_err());
}

#[test]
fn target_path_joins_dir_stem_and_extension() {
    let mut conf = Config::default();
    conf.export.dir = PathBuf::from("/data/out");
    assert_eq!(
        conf.export.target_path("backup", ExportFormat::Aes),
        PathBuf::from("/data/out/backup.aes")
    );
}

// Only test in this binary that touches the process environment
#[test]
fn db_path_comes_from_file_then_env() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[storage]\ndb_path = \"/srv/vault/from-file.db\"\n").unwrap();

    std::env::remove_var(DB_PATH_ENV);
    let conf = load_from(&path).unwrap();
    assert_eq!(conf.storage.db_path, PathBuf::from("/srv/vault/from-file.db"));

    std::env::set_var(DB_PATH_ENV, "/srv/vault/from-env.db");
    let conf = load_from(&path).unwrap();
    std::env::remove_var(DB_PATH_ENV);
    assert_eq!(conf.storage.db_path, PathBuf::from("/srv/vault/from-env.db"));
}
