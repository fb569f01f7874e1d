//! Exposure module — timed publication of a decrypted secret.
//!
//! This module provides:
//! - The `ExposureSink` trait and the `ClipboardSink` implementation (`sink`)
//! - The `ExposureSession` with its self-cancelling wipe timer (`session`)

pub mod session;
pub mod sink;

// Re-export the most commonly used items.
pub use session::{ExposureSession, DEFAULT_WIPE_DELAY};
pub use sink::{ClipboardSink, ExposureSink};
