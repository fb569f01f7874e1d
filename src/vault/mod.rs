//! Vault module — the append-only encrypted entry store.
//!
//! This module provides:
//! - The `VaultEntry` type (`entry`)
//! - The line-oriented `VaultStore` with last-write-wins lookup (`store`)

pub mod entry;
pub mod store;

// Re-export the most commonly used items.
pub use entry::VaultEntry;
pub use store::VaultStore;
