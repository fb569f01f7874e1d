//! CLI module — Clap argument parser, output helpers, and command
//! implementations.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::Parser;
use zeroize::Zeroizing;

use crate::config::Settings;
use crate::errors::{Result, SecureVaultError};

/// SecureVault CLI: local encrypted secret vault with a self-clearing
/// clipboard.
#[derive(Parser)]
#[command(
    name = "securevault",
    about = "Local encrypted secret vault with a self-clearing clipboard",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Vault file path (default: from .securevault.toml, else vault.dat)
    #[arg(long, global = true)]
    pub vault: Option<String>,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Encrypt a secret and append it to the vault
    Save {
        /// Account name (e.g. Netflix)
        account: String,
        /// Secret value (omit for interactive prompt)
        value: Option<String>,
    },

    /// Copy a secret to the clipboard; it is wiped automatically
    Reveal {
        /// Account name
        account: String,
        /// Seconds before the clipboard is cleared (default: 10)
        #[arg(long)]
        delay: Option<u64>,
    },

    /// List account names stored in the vault
    List,

    /// Clear the clipboard immediately
    Wipe,

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        shell: String,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Get the master passphrase, trying in order:
/// 1. `SECUREVAULT_PASSPHRASE` env var (CI/scripting)
/// 2. Interactive hidden prompt
///
/// Returns `Zeroizing<String>` so the passphrase is wiped from memory
/// on drop.  The passphrase is never persisted or verified up front;
/// a wrong one simply fails to decrypt.
pub fn prompt_passphrase() -> Result<Zeroizing<String>> {
    if let Ok(pw) = std::env::var("SECUREVAULT_PASSPHRASE") {
        if !pw.is_empty() {
            return Ok(Zeroizing::new(pw));
        }
    }

    let pw = dialoguer::Password::new()
        .with_prompt("Enter master passphrase")
        .interact()
        .map_err(|e| SecureVaultError::CommandFailed(format!("passphrase prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}

/// Prompt for a secret value with hidden input.
pub fn prompt_secret_value(account: &str) -> Result<Zeroizing<String>> {
    let value = dialoguer::Password::new()
        .with_prompt(format!("Enter secret for {account}"))
        .interact()
        .map_err(|e| SecureVaultError::CommandFailed(format!("input prompt: {e}")))?;
    Ok(Zeroizing::new(value))
}

/// Resolve the vault file path: `--vault` flag wins, then settings.
pub fn vault_path(cli: &Cli, settings: &Settings) -> Result<PathBuf> {
    if let Some(path) = &cli.vault {
        return Ok(PathBuf::from(path));
    }
    let cwd = std::env::current_dir()?;
    Ok(settings.vault_path(&cwd))
}

/// Load settings from the working directory.
pub fn load_settings() -> Result<Settings> {
    let cwd = std::env::current_dir()?;
    Settings::load(&cwd)
}
