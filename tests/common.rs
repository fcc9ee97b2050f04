// tests/common.rs
//! Shared test utilities: logging setup and vault fixtures

use password_vault::{Config, NewRecord, PasswordVault};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize test-friendly logging
/// Call once at the start of any test that needs logs
#[allow(dead_code)]
pub fn setup() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer()) // works in `cargo test`
        .with(EnvFilter::from_default_env()) // respects RUST_LOG=
        .try_init()
        .ok(); // idempotent, safe to call multiple times
}

/// Fresh in-memory vault with default settings
#[allow(dead_code)]
pub fn memory_vault() -> PasswordVault {
    setup();
    PasswordVault::open_in_memory(&Config::default()).expect("open in-memory vault")
}

/// The four records most tests start from
#[allow(dead_code)]
pub fn seed(vault: &PasswordVault) -> Vec<i64> {
    [
        NewRecord::new("google.com", "alice", "hunter2", "personal"),
        NewRecord::new("bing.com", "bob", "p@ss,word", "has, a comma"),
        NewRecord::new("Example.org", "carol", "multi\nline", ""),
        NewRecord::new("github.com", "alice", "tok\"en", "2FA \"on\""),
    ]
    .iter()
    .map(|r| vault.add_record(r, true).expect("seed record"))
    .collect()
}

/// (website, username, password, notes) tuples, sorted, ids dropped
#[allow(dead_code)]
pub fn tuples(vault: &PasswordVault) -> Vec<(String, String, String, String)> {
    let mut out: Vec<_> = vault
        .get_all()
        .expect("get_all")
        .into_iter()
        .map(|r| {
            let notes = r.notes_or_empty().to_string();
            (r.website, r.username, r.password, notes)
        })
        .collect();
    out.sort();
    out
}
