use thiserror::Error;

/// All errors that can occur in SecureVault.
#[derive(Debug, Error)]
pub enum SecureVaultError {
    // --- Crypto errors ---
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("Decryption failed — wrong passphrase or corrupted record")]
    DecryptionFailed,

    #[error("Key derivation failed: {0}")]
    KeyDerivationFailed(String),

    // --- Vault errors ---
    #[error("No entry found for account '{0}'")]
    EntryNotFound(String),

    #[error("Invalid account name: {0}")]
    InvalidAccountName(String),

    #[error("Vault store unavailable: {0}")]
    StoreUnavailable(#[from] std::io::Error),

    // --- Exposure errors ---
    #[error("Clipboard error: {0}")]
    ClipboardError(String),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),
}

/// Convenience type alias for SecureVault results.
pub type Result<T> = std::result::Result<T, SecureVaultError>;
