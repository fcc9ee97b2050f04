// src/crypto/encrypt.rs
use aes::Aes128;
use cbc::cipher::{block_padding::Pkcs7, BlockEncryptMut, KeyIvInit};
use rand::RngCore;

use crate::aliases::ExportKey16;
use crate::consts::AES_BLOCK_SIZE;

type Aes128CbcEnc = cbc::Encryptor<Aes128>;

/// Encrypt payload → `[16-byte IV][AES-128-CBC ciphertext]` (in-memory)
///
/// A fresh random IV is drawn for every call, so encrypting the same payload
/// twice never yields the same output.
pub fn encrypt_to_vec(payload: &[u8], key: &ExportKey16) -> Vec<u8> {
    let mut iv = [0u8; AES_BLOCK_SIZE];
    rand::rng().fill_bytes(&mut iv);

    let ciphertext = Aes128CbcEnc::new(&(*key.expose_secret()).into(), &iv.into())
        .encrypt_padded_vec_mut::<Pkcs7>(payload);

    let mut out = Vec::with_capacity(AES_BLOCK_SIZE + ciphertext.len());
    out.extend_from_slice(&iv);
    out.extend_from_slice(&ciphertext);
    out
}
