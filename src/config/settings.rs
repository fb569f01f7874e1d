use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, SecureVaultError};

/// Project-level configuration, loaded from `.securevault.toml`.
///
/// Every field has a sensible default so SecureVault works
/// out-of-the-box without any config file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Vault file (relative to the working directory).
    #[serde(default = "default_vault_file")]
    pub vault_file: String,

    /// Seconds a revealed secret stays in the clipboard (default: 10).
    #[serde(default = "default_wipe_delay_secs")]
    pub wipe_delay_secs: u64,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_vault_file() -> String {
    "vault.dat".to_string()
}

fn default_wipe_delay_secs() -> u64 {
    10
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            vault_file: default_vault_file(),
            wipe_delay_secs: default_wipe_delay_secs(),
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the working directory.
    const FILE_NAME: &'static str = ".securevault.toml";

    /// Load settings from `<project_dir>/.securevault.toml`.
    ///
    /// If the file does not exist, sensible defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let config_path = project_dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            SecureVaultError::ConfigError(format!(
                "Failed to parse {}: {e}",
                config_path.display()
            ))
        })?;

        Ok(settings)
    }

    /// Build the full path to the vault file.
    pub fn vault_path(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.vault_file)
    }

    /// The wipe delay as a `Duration`.
    pub fn wipe_delay(&self) -> Duration {
        Duration::from_secs(self.wipe_delay_secs)
    }
}

// ── Tests ────────────────────────────────────────────────────────────
