// src/crypto/mod.rs
//! Pure cryptographic operations: no I/O, no database
//!
//! AES-128-CBC with PKCS#7 padding over in-memory buffers. The output layout
//! `[16-byte IV][ciphertext]` is the `.aes` export file format.
mod decrypt;
mod encrypt;

pub use decrypt::decrypt_to_vec;
pub use encrypt::encrypt_to_vec;
