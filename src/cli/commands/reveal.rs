//! `securevault reveal` — copy one secret to the clipboard and wait
//! for the automatic wipe.

use std::thread;
use std::time::Duration;

use crate::cli::output;
use crate::cli::{load_settings, prompt_passphrase, vault_path, Cli};
use crate::errors::Result;
use crate::exposure::{ClipboardSink, ExposureSession};
use crate::vault::VaultStore;

/// Execute the `reveal` command.
pub fn execute(cli: &Cli, account: &str, delay_secs: Option<u64>) -> Result<()> {
    let settings = load_settings()?;
    let path = vault_path(cli, &settings)?;
    let store = VaultStore::load(&path)?;

    let passphrase = prompt_passphrase()?;
    let delay = delay_secs.map_or_else(|| settings.wipe_delay(), Duration::from_secs);

    let sink = ClipboardSink::new()?;
    let session = ExposureSession::new(sink, delay);

    // On NotFound or a wrong passphrase this returns an error without
    // having touched the clipboard.
    session.reveal(&store, account, &passphrase)?;

    output::success(&format!(
        "Copied secret for '{}' — clipboard clears in {}s",
        account,
        delay.as_secs()
    ));

    // Keep the process alive until the timer has fired.  Exiting
    // earlier would drop the session, which wipes immediately.
    thread::sleep(delay + Duration::from_millis(200));

    output::info("Clipboard cleared.");

    Ok(())
}
