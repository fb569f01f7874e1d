//! `securevault list` — display stored account names in a table.
//!
//! Metadata only: no passphrase is needed and nothing is decrypted.

use crate::cli::output;
use crate::cli::{load_settings, vault_path, Cli};
use crate::errors::Result;
use crate::vault::VaultStore;

/// Execute the `list` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let settings = load_settings()?;
    let path = vault_path(cli, &settings)?;
    let store = VaultStore::load(&path)?;

    let accounts = store.accounts();

    output::info(&format!(
        "{} — {} account(s)",
        path.display(),
        accounts.len()
    ));

    output::print_accounts_table(&accounts);

    Ok(())
}
