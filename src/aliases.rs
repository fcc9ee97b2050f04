// src/aliases.rs
//! Re-exports secure-gate's ergonomic secret types
//!
//! These are the canonical secret types used throughout password-vault.

pub use secure_gate::fixed_alias;

// 128-bit AES key for `.aes` exports
fixed_alias!(ExportKey16, 16);
