//! Integration tests for the exposure session and its wipe timer.
//!
//! These tests use an in-memory sink with an externally observable
//! log, and generously spaced delays so the timing assertions hold on
//! slow machines.

use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use tempfile::TempDir;

use securevault::crypto::encrypt_record;
use securevault::errors::SecureVaultError;
use securevault::exposure::{ExposureSession, ExposureSink};
use securevault::vault::VaultStore;

// ---------------------------------------------------------------------------
// Test sink
// ---------------------------------------------------------------------------

#[derive(Default)]
struct SinkLog {
    /// What the sink currently holds, if anything.
    contents: Option<String>,
    /// Every value ever written, in order.
    writes: Vec<String>,
    /// How many times the sink was cleared.
    clears: usize,
}

/// An in-memory sink whose state can be observed from the test while
/// the session (and its timer threads) own the sink itself.
#[derive(Clone, Default)]
struct MemorySink {
    log: Arc<Mutex<SinkLog>>,
}

impl MemorySink {
    fn contents(&self) -> Option<String> {
        self.log.lock().unwrap().contents.clone()
    }

    fn writes(&self) -> Vec<String> {
        self.log.lock().unwrap().writes.clone()
    }

    fn clears(&self) -> usize {
        self.log.lock().unwrap().clears
    }
}

impl ExposureSink for MemorySink {
    fn write(&mut self, text: &str) -> securevault::errors::Result<()> {
        let mut log = self.log.lock().unwrap();
        log.contents = Some(text.to_owned());
        log.writes.push(text.to_owned());
        Ok(())
    }

    fn clear(&mut self) -> securevault::errors::Result<()> {
        let mut log = self.log.lock().unwrap();
        log.contents = None;
        log.clears += 1;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

const PASSPHRASE: &str = "Apple123";

/// Build a vault on disk with the given (account, plaintext) pairs.
fn build_store(dir: &TempDir, entries: &[(&str, &str)]) -> VaultStore {
    let path = dir.path().join("vault.dat");
    let mut store = VaultStore::load(&path).unwrap();
    for (account, plaintext) in entries {
        let record = encrypt_record(plaintext, PASSPHRASE).unwrap();
        store.append(account, record).unwrap();
    }
    store
}

fn session_with_sink(delay: Duration) -> (ExposureSession<MemorySink>, MemorySink) {
    let sink = MemorySink::default();
    let handle = sink.clone();
    (ExposureSession::new(sink, delay), handle)
}

// ---------------------------------------------------------------------------
// Publish then auto-wipe
// ---------------------------------------------------------------------------

#[test]
fn reveal_publishes_then_auto_wipes() {
    let dir = TempDir::new().unwrap();
    let store = build_store(&dir, &[("Netflix", "hunter2")]);
    let (session, sink) = session_with_sink(Duration::from_millis(800));

    session.reveal(&store, "Netflix", PASSPHRASE).expect("reveal");

    assert_eq!(sink.contents().as_deref(), Some("hunter2"));
    assert!(session.is_armed());

    // Well past the delay: the timer must have fired exactly once.
    thread::sleep(Duration::from_millis(2500));
    assert_eq!(sink.contents(), None);
    assert_eq!(sink.clears(), 1);
    assert!(!session.is_armed());
}

#[test]
fn reveal_uses_latest_record_for_duplicates() {
    let dir = TempDir::new().unwrap();
    let store = build_store(&dir, &[("Netflix", "old-secret"), ("Netflix", "new-secret")]);
    let (session, sink) = session_with_sink(Duration::from_secs(5));

    session.reveal(&store, "Netflix", PASSPHRASE).expect("reveal");
    assert_eq!(sink.contents().as_deref(), Some("new-secret"));

    session.wipe_now().unwrap();
}

// ---------------------------------------------------------------------------
// Failed reveals
// ---------------------------------------------------------------------------

#[test]
fn reveal_unknown_account_touches_nothing() {
    let dir = TempDir::new().unwrap();
    let store = build_store(&dir, &[("Netflix", "hunter2")]);
    let (session, sink) = session_with_sink(Duration::from_secs(5));

    let result = session.reveal(&store, "Missing", PASSPHRASE);
    assert!(matches!(result, Err(SecureVaultError::EntryNotFound(_))));

    assert_eq!(sink.contents(), None);
    assert!(sink.writes().is_empty());
    assert!(!session.is_armed());
}

#[test]
fn reveal_with_wrong_passphrase_touches_nothing() {
    let dir = TempDir::new().unwrap();
    let store = build_store(&dir, &[("Netflix", "hunter2")]);
    let (session, sink) = session_with_sink(Duration::from_secs(5));

    let result = session.reveal(&store, "Netflix", "Orange456");
    assert!(matches!(result, Err(SecureVaultError::DecryptionFailed)));

    assert_eq!(sink.contents(), None);
    assert!(sink.writes().is_empty());
}

#[test]
fn failed_reveal_leaves_armed_exposure_intact() {
    let dir = TempDir::new().unwrap();
    let store = build_store(&dir, &[("Netflix", "hunter2")]);
    let (session, sink) = session_with_sink(Duration::from_secs(10));

    session.reveal(&store, "Netflix", PASSPHRASE).expect("reveal");
    assert!(session.is_armed());
    let armed_at = session.armed_since().unwrap();

    // NotFound and a wrong passphrase must not disturb the exposure.
    assert!(session.reveal(&store, "Missing", PASSPHRASE).is_err());
    assert!(session.reveal(&store, "Netflix", "Orange456").is_err());

    assert_eq!(sink.contents().as_deref(), Some("hunter2"));
    assert!(session.is_armed());
    assert_eq!(session.armed_since(), Some(armed_at));

    session.wipe_now().unwrap();
}

// ---------------------------------------------------------------------------
// Manual wipe
// ---------------------------------------------------------------------------

#[test]
fn wipe_now_is_idempotent() {
    let (session, sink) = session_with_sink(Duration::from_secs(5));

    // Safe with nothing armed.
    session.wipe_now().expect("wipe with empty state");
    assert_eq!(sink.contents(), None);
    assert!(!session.is_armed());

    // Calling it again observes the same state: sink clear, state empty.
    session.wipe_now().expect("second wipe");
    assert_eq!(sink.contents(), None);
    assert!(!session.is_armed());
}

#[test]
fn wipe_now_invalidates_the_pending_timer() {
    let dir = TempDir::new().unwrap();
    let store = build_store(&dir, &[("Netflix", "hunter2")]);
    let (session, sink) = session_with_sink(Duration::from_millis(800));

    session.reveal(&store, "Netflix", PASSPHRASE).expect("reveal");
    session.wipe_now().expect("manual wipe");

    assert_eq!(sink.contents(), None);
    assert_eq!(sink.clears(), 1);

    // The superseded timer must not fire a second clear.
    thread::sleep(Duration::from_millis(2500));
    assert_eq!(sink.clears(), 1);
}

// ---------------------------------------------------------------------------
// Timer supersession
// ---------------------------------------------------------------------------

#[test]
fn newer_reveal_supersedes_the_older_timer() {
    let dir = TempDir::new().unwrap();
    let store = build_store(&dir, &[("X", "x-secret"), ("Y", "y-secret")]);
    let (session, sink) = session_with_sink(Duration::from_millis(1500));

    session.reveal(&store, "X", PASSPHRASE).expect("reveal X");
    session.reveal(&store, "Y", PASSPHRASE).expect("reveal Y");

    // The newer plaintext is live immediately after the second reveal.
    assert_eq!(sink.contents().as_deref(), Some("y-secret"));

    // Well past both delays: exactly one wipe, and the older plaintext
    // never reappeared.
    thread::sleep(Duration::from_millis(4000));
    assert_eq!(sink.contents(), None);
    assert_eq!(sink.clears(), 1, "the superseded timer must not fire");
    assert_eq!(sink.writes(), vec!["x-secret".to_string(), "y-secret".to_string()]);
    assert!(!session.is_armed());
}

#[test]
fn re_arming_restarts_the_full_delay() {
    let dir = TempDir::new().unwrap();
    let store = build_store(&dir, &[("X", "x-secret"), ("Y", "y-secret")]);
    let (session, sink) = session_with_sink(Duration::from_millis(1500));

    session.reveal(&store, "X", PASSPHRASE).expect("reveal X");
    thread::sleep(Duration::from_millis(1000));
    session.reveal(&store, "Y", PASSPHRASE).expect("reveal Y");

    // Past X's original deadline but within Y's fresh window: the sink
    // must still hold the newer secret.
    thread::sleep(Duration::from_millis(800));
    assert_eq!(sink.contents().as_deref(), Some("y-secret"));

    thread::sleep(Duration::from_millis(2000));
    assert_eq!(sink.contents(), None);
    assert_eq!(sink.clears(), 1);
}

// ---------------------------------------------------------------------------
// Teardown
// ---------------------------------------------------------------------------

#[test]
fn dropping_an_armed_session_wipes_immediately() {
    let dir = TempDir::new().unwrap();
    let store = build_store(&dir, &[("Netflix", "hunter2")]);
    let (session, sink) = session_with_sink(Duration::from_secs(30));

    session.reveal(&store, "Netflix", PASSPHRASE).expect("reveal");
    assert_eq!(sink.contents().as_deref(), Some("hunter2"));

    drop(session);

    assert_eq!(sink.contents(), None);
    assert_eq!(sink.clears(), 1);
}

#[test]
fn dropping_an_idle_session_does_not_clear() {
    let (session, sink) = session_with_sink(Duration::from_secs(30));

    drop(session);

    assert_eq!(sink.clears(), 0);
}
