//! The append-only vault store.
//!
//! `VaultStore` is a cache over a flat UTF-8 text file with one entry
//! per line:
//!
//! ```text
//! <account>:<ciphertextRecord>\n
//! ```
//!
//! The file is the source of truth.  It is loaded once, appended to on
//! save, and never rewritten in place — there is no update or delete.
//! Duplicate account names are legal; lookup resolves them with
//! last-write-wins while earlier entries stay on disk, shadowed.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::crypto::CiphertextRecord;
use crate::errors::{Result, SecureVaultError};

use super::entry::VaultEntry;

/// In-memory view of the persisted vault file.
pub struct VaultStore {
    /// Path to the vault file on disk.
    path: PathBuf,

    /// Entries in file order (insertion order).
    entries: Vec<VaultEntry>,
}

impl VaultStore {
    /// Load the vault file at `path`.
    ///
    /// A missing file is a valid initial state and yields an empty
    /// vault.  Malformed lines (no delimiter, or an empty field) are
    /// skipped, never fatal.  Other I/O failures surface as
    /// `StoreUnavailable`.
    pub fn load(path: &Path) -> Result<Self> {
        let entries = match fs::read_to_string(path) {
            Ok(contents) => parse_entries(&contents),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(SecureVaultError::StoreUnavailable(e)),
        };

        Ok(Self {
            path: path.to_path_buf(),
            entries,
        })
    }

    /// Durably append one entry after everything already persisted.
    ///
    /// Validates the account name, writes a single line in append+create
    /// mode (existing bytes are never touched), then updates the
    /// in-memory sequence.  `&mut self` serializes writers within the
    /// process; cross-process interleaving is out of scope.
    pub fn append(&mut self, account: &str, record: CiphertextRecord) -> Result<()> {
        validate_account_name(account)?;

        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)?;
        writeln!(file, "{account}:{record}")?;

        self.entries.push(VaultEntry {
            account: account.to_owned(),
            record,
        });

        Ok(())
    }

    /// Look up the authoritative record for an account.
    ///
    /// When duplicates exist, the most recently appended entry wins.
    pub fn find_latest(&self, account: &str) -> Option<&CiphertextRecord> {
        self.entries
            .iter()
            .rev()
            .find(|e| e.account == account)
            .map(|e| &e.record)
    }

    /// Distinct account names in order of first appearance.
    ///
    /// Metadata only — no record is decrypted.
    pub fn accounts(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for entry in &self.entries {
            if !names.contains(&entry.account.as_str()) {
                names.push(&entry.account);
            }
        }
        names
    }

    /// All entries in file order, shadowed duplicates included.
    pub fn entries(&self) -> &[VaultEntry] {
        &self.entries
    }

    /// Returns the path to the vault file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of persisted entries, shadowed duplicates included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the vault has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parse the persisted representation, skipping malformed lines.
///
/// A line is well-formed when it splits on the *first* `:` into two
/// non-empty fields and the record field validates as a token.
fn parse_entries(contents: &str) -> Vec<VaultEntry> {
    let mut entries = Vec::new();

    for line in contents.lines() {
        let Some((account, token)) = line.split_once(':') else {
            continue;
        };
        if account.is_empty() {
            continue;
        }
        let Some(record) = CiphertextRecord::from_token(token) else {
            continue;
        };
        entries.push(VaultEntry {
            account: account.to_owned(),
            record,
        });
    }

    entries
}

/// Validate that an account name can round-trip through the line format.
///
/// Must be non-empty, at most 256 characters, and must not contain the
/// `:` delimiter or control characters (including newlines).
fn validate_account_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(SecureVaultError::InvalidAccountName(
            "account name cannot be empty".into(),
        ));
    }
    if name.len() > 256 {
        return Err(SecureVaultError::InvalidAccountName(
            "account name cannot exceed 256 characters".into(),
        ));
    }
    if name.contains(':') {
        return Err(SecureVaultError::InvalidAccountName(format!(
            "account name '{name}' must not contain ':'"
        )));
    }
    if name.chars().any(char::is_control) {
        return Err(SecureVaultError::InvalidAccountName(
            "account name must not contain control characters".into(),
        ));
    }
    Ok(())
}
