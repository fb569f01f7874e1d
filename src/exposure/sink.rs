//! Exposure sinks — the shared external channel a revealed secret
//! passes through.
//!
//! The sink is externally owned (the user can overwrite the clipboard
//! at any time); the session only owns its contents for the lifetime
//! of one exposure, and a wipe may clobber unrelated content that was
//! copied in the meantime.  That is an accepted limitation of a shared
//! clipboard, not something this crate tracks.

use arboard::Clipboard;

use crate::errors::{Result, SecureVaultError};

/// A shared external sink that holds at most one revealed secret.
///
/// Reading back is never needed; the session only writes and clears.
/// Implementations must be `Send` because the wipe timer clears the
/// sink from its own thread.
pub trait ExposureSink: Send {
    /// Publish `text` to the sink, replacing whatever it held.
    fn write(&mut self, text: &str) -> Result<()>;

    /// Empty the sink unconditionally.
    fn clear(&mut self) -> Result<()>;
}

/// The system clipboard, via `arboard`.
///
/// A fresh clipboard handle is opened per operation: `arboard`'s
/// handle is not `Send` on every platform, and the wipe runs on a
/// timer thread.
pub struct ClipboardSink(());

impl ClipboardSink {
    /// Connect to the system clipboard.
    ///
    /// Probes availability up front so callers fail before decrypting
    /// anything on headless systems with no clipboard service.
    pub fn new() -> Result<Self> {
        open_clipboard()?;
        Ok(Self(()))
    }
}

impl ExposureSink for ClipboardSink {
    fn write(&mut self, text: &str) -> Result<()> {
        open_clipboard()?
            .set_text(text.to_owned())
            .map_err(|e| SecureVaultError::ClipboardError(format!("copy failed: {e}")))
    }

    fn clear(&mut self) -> Result<()> {
        open_clipboard()?
            .clear()
            .map_err(|e| SecureVaultError::ClipboardError(format!("clear failed: {e}")))
    }
}

fn open_clipboard() -> Result<Clipboard> {
    Clipboard::new()
        .map_err(|e| SecureVaultError::ClipboardError(format!("clipboard unavailable: {e}")))
}
