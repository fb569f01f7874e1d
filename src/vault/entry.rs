//! The `VaultEntry` type stored in the vault file.

use crate::crypto::CiphertextRecord;

/// One `(account, record)` pair as it appears in the vault file.
///
/// Entries are never mutated or deleted; saving the same account again
/// appends a new entry that shadows the earlier one on lookup.
#[derive(Debug, Clone)]
pub struct VaultEntry {
    /// The account name (e.g. "Netflix").
    pub account: String,

    /// The encrypted secret, opaque to the store.
    pub record: CiphertextRecord,
}
