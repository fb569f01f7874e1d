//! AES-256-GCM authenticated record encryption.
//!
//! Each call to `encrypt_record` generates a fresh random salt and a
//! fresh random 12-byte nonce, derives a key from the passphrase via
//! Argon2id, and base64-encodes everything into one opaque text token.
//!
//! Layout of the decoded token:
//!   [ 16-byte salt | 12-byte nonce | ciphertext + 16-byte auth tag ]
//!
//! Because the scheme is authenticated, decrypting with the wrong
//! passphrase fails with `DecryptionFailed` instead of returning
//! garbage bytes.  Callers must not publish anything on failure.

use std::fmt;

use aes_gcm::aead::{Aead, KeyInit, OsRng};
use aes_gcm::{AeadCore, Aes256Gcm, Nonce};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use zeroize::{Zeroize, Zeroizing};

use crate::crypto::kdf::{derive_record_key, generate_salt, SALT_LEN};
use crate::errors::{Result, SecureVaultError};

/// Size of the AES-256-GCM nonce in bytes.
const NONCE_LEN: usize = 12;

/// The opaque persisted encoding of one secret under a passphrase.
///
/// The token is standard base64, which contains neither `:` nor a
/// newline, so it round-trips through the line-oriented vault store
/// unambiguously.  Only `decrypt_record` ever looks inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CiphertextRecord(String);

impl CiphertextRecord {
    /// Wrap a persisted token, validating its shape.
    ///
    /// Returns `None` for tokens that could not have been produced by
    /// `encrypt_record`: empty, containing the store delimiter `:`, or
    /// containing control characters (including newlines).
    pub fn from_token(token: &str) -> Option<Self> {
        if token.is_empty() || token.contains(':') || token.chars().any(char::is_control) {
            return None;
        }
        Some(Self(token.to_owned()))
    }

    /// The token exactly as it is written to the vault file.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CiphertextRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Encrypt `plaintext` under `passphrase` into a storable record.
///
/// Randomized: two encryptions of the same inputs produce different
/// records because both the salt and the nonce are fresh per call.
pub fn encrypt_record(plaintext: &str, passphrase: &str) -> Result<CiphertextRecord> {
    let salt = generate_salt();
    let mut key = derive_record_key(passphrase.as_bytes(), &salt)?;

    let cipher = Aes256Gcm::new_from_slice(&key)
        .map_err(|e| SecureVaultError::EncryptionFailed(format!("invalid key length: {e}")));
    key.zeroize();
    let cipher = cipher?;

    // Generate a random 12-byte nonce.
    let nonce = Aes256Gcm::generate_nonce(&mut OsRng);

    // Encrypt and authenticate the plaintext.
    let ciphertext = cipher
        .encrypt(&nonce, plaintext.as_bytes())
        .map_err(|e| SecureVaultError::EncryptionFailed(format!("encryption error: {e}")))?;

    // Pack salt + nonce + ciphertext so the store only holds one token.
    let mut blob = Vec::with_capacity(SALT_LEN + NONCE_LEN + ciphertext.len());
    blob.extend_from_slice(&salt);
    blob.extend_from_slice(&nonce);
    blob.extend_from_slice(&ciphertext);

    Ok(CiphertextRecord(BASE64.encode(blob)))
}

/// Decrypt a record that was produced by `encrypt_record`.
///
/// Total over malformed input: bad base64, truncated blobs, tampered
/// ciphertext, and wrong passphrases all surface as `DecryptionFailed`,
/// never as a panic.  The plaintext is returned in a `Zeroizing` buffer
/// so it is wiped from memory when the caller drops it.
pub fn decrypt_record(record: &CiphertextRecord, passphrase: &str) -> Result<Zeroizing<String>> {
    let blob = BASE64
        .decode(record.as_str())
        .map_err(|_| SecureVaultError::DecryptionFailed)?;

    // Make sure we have at least a salt and a nonce worth of bytes.
    if blob.len() < SALT_LEN + NONCE_LEN {
        return Err(SecureVaultError::DecryptionFailed);
    }

    // Split salt and nonce from the ciphertext.
    let (salt, rest) = blob.split_at(SALT_LEN);
    let (nonce_bytes, ciphertext) = rest.split_at(NONCE_LEN);
    let nonce = Nonce::from_slice(nonce_bytes);

    let mut key = derive_record_key(passphrase.as_bytes(), salt)?;
    let cipher = Aes256Gcm::new_from_slice(&key).map_err(|_| SecureVaultError::DecryptionFailed);
    key.zeroize();
    let cipher = cipher?;

    // Decrypt and verify the auth tag.
    let plaintext_bytes = cipher
        .decrypt(nonce, ciphertext)
        .map_err(|_| SecureVaultError::DecryptionFailed)?;

    // Convert to String via from_utf8 which takes ownership (no clone).
    // On error, zeroize the bytes inside the error before discarding.
    String::from_utf8(plaintext_bytes)
        .map(Zeroizing::new)
        .map_err(|e| {
            let mut bad_bytes = e.into_bytes();
            bad_bytes.zeroize();
            SecureVaultError::DecryptionFailed
        })
}
