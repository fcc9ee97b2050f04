// src/crypto/decrypt.rs
use aes::Aes128;
use cbc::cipher::{block_padding::Pkcs7, BlockDecryptMut, KeyIvInit};

use crate::aliases::ExportKey16;
use crate::consts::AES_BLOCK_SIZE;
use crate::error::{Result, VaultError};

type Aes128CbcDec = cbc::Decryptor<Aes128>;

/// Decrypt `[IV][ciphertext]` → payload (in-memory)
///
/// There is no authentication tag; a wrong key or a damaged file is only
/// detected through invalid PKCS#7 padding.
pub fn decrypt_to_vec(blob: &[u8], key: &ExportKey16) -> Result<Vec<u8>> {
    if blob.len() < AES_BLOCK_SIZE {
        return Err(VaultError::CorruptData(format!(
            "encrypted blob is {} bytes, shorter than the {AES_BLOCK_SIZE}-byte IV",
            blob.len()
        )));
    }
    let (iv, ciphertext) = blob.split_at(AES_BLOCK_SIZE);
    if ciphertext.is_empty() || ciphertext.len() % AES_BLOCK_SIZE != 0 {
        return Err(VaultError::CorruptData(format!(
            "ciphertext length {} is not a positive multiple of {AES_BLOCK_SIZE}",
            ciphertext.len()
        )));
    }

    let mut iv_block = [0u8; AES_BLOCK_SIZE];
    iv_block.copy_from_slice(iv);

    Aes128CbcDec::new(&(*key.expose_secret()).into(), &iv_block.into())
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| {
            VaultError::CorruptData("invalid padding (wrong key or damaged file)".into())
        })
}
