//! `securevault wipe` — clear the clipboard immediately.

use crate::cli::output;
use crate::errors::Result;
use crate::exposure::{ClipboardSink, ExposureSession, DEFAULT_WIPE_DELAY};

/// Execute the `wipe` command.
///
/// Safe to run when nothing was revealed; clearing an empty clipboard
/// is a no-op.
pub fn execute() -> Result<()> {
    let sink = ClipboardSink::new()?;
    let session = ExposureSession::new(sink, DEFAULT_WIPE_DELAY);

    session.wipe_now()?;

    output::success("Clipboard cleared.");
    Ok(())
}
