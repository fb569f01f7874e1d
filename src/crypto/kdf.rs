//! Passphrase-based key derivation using Argon2id.
//!
//! Every record carries its own random salt, so the same passphrase
//! yields an independent key per record.  The cost parameters are
//! fixed; tuning the KDF is out of scope for this vault.

use argon2::{Algorithm, Argon2, Params, Version};
use rand::RngCore;

use crate::errors::{Result, SecureVaultError};

/// Length of the per-record salt in bytes (128 bits).
pub const SALT_LEN: usize = 16;

/// Length of the derived key in bytes (256 bits, for AES-256).
pub const KEY_LEN: usize = 32;

/// Fixed Argon2id memory cost in KiB (19 MiB).
const MEMORY_KIB: u32 = 19_456;

/// Fixed Argon2id iteration count.
const ITERATIONS: u32 = 2;

/// Fixed Argon2id parallelism lanes.
const PARALLELISM: u32 = 1;

/// Derive a 32-byte record key from a passphrase and salt using Argon2id.
///
/// The same passphrase + salt will always produce the same key.
pub fn derive_record_key(passphrase: &[u8], salt: &[u8]) -> Result<[u8; KEY_LEN]> {
    let params = Params::new(MEMORY_KIB, ITERATIONS, PARALLELISM, Some(KEY_LEN))
        .map_err(|e| SecureVaultError::KeyDerivationFailed(format!("invalid Argon2 params: {e}")))?;

    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    let mut key = [0u8; KEY_LEN];
    argon2.hash_password_into(passphrase, salt, &mut key).map_err(|e| {
        SecureVaultError::KeyDerivationFailed(format!("Argon2id hashing failed: {e}"))
    })?;

    Ok(key)
}

/// Generate a cryptographically random 16-byte salt.
pub fn generate_salt() -> [u8; SALT_LEN] {
    let mut salt = [0u8; SALT_LEN];
    rand::rng().fill_bytes(&mut salt);
    salt
}
