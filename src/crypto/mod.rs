//! Cryptographic primitives for SecureVault.
//!
//! This module provides:
//! - AES-256-GCM record encryption and decryption (`engine`)
//! - Argon2id passphrase-based key derivation (`kdf`)

pub mod engine;
pub mod kdf;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{encrypt_record, decrypt_record, CiphertextRecord};
pub use engine::{decrypt_record, encrypt_record, CiphertextRecord};
pub use kdf::{derive_record_key, generate_salt};
