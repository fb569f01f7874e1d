//! `securevault save` — encrypt a secret and append it to the vault.

use std::io::{self, IsTerminal, Read};

use zeroize::Zeroizing;

use crate::cli::output;
use crate::cli::{load_settings, prompt_passphrase, prompt_secret_value, vault_path, Cli};
use crate::crypto::encrypt_record;
use crate::errors::{Result, SecureVaultError};
use crate::vault::VaultStore;

/// Execute the `save` command.
pub fn execute(cli: &Cli, account: &str, value: Option<&str>) -> Result<()> {
    let settings = load_settings()?;
    let path = vault_path(cli, &settings)?;

    // Determine the secret value from one of three sources.
    let secret_value = if let Some(v) = value {
        // Source 1: Inline value on the command line.
        output::warning("Value provided on command line — it may appear in shell history.");
        Zeroizing::new(v.to_string())
    } else if !io::stdin().is_terminal() {
        // Source 2: Piped input (stdin is not a terminal).
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        Zeroizing::new(buf.trim_end().to_string())
    } else {
        // Source 3: Interactive secure prompt (default).
        prompt_secret_value(account)?
    };

    if secret_value.is_empty() {
        return Err(SecureVaultError::CommandFailed(
            "secret value cannot be empty".into(),
        ));
    }

    let passphrase = prompt_passphrase()?;
    let record = encrypt_record(&secret_value, &passphrase)?;

    // Append-only: an existing entry for the same account stays on
    // disk and is shadowed by the new one.
    let mut store = VaultStore::load(&path)?;
    let existed = store.find_latest(account).is_some();
    store.append(account, record)?;

    if existed {
        output::success(&format!(
            "Secret for '{}' updated in {} ({} entries)",
            account,
            path.display(),
            store.len()
        ));
    } else {
        output::success(&format!(
            "Secret for '{}' added to {} ({} entries)",
            account,
            path.display(),
            store.len()
        ));
    }

    output::tip("Copy it later: securevault reveal <ACCOUNT>");

    Ok(())
}
