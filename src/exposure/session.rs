//! The exposure session: reveal one secret through the sink and
//! guarantee it is wiped after a fixed delay.
//!
//! The wipe runs on a detached one-shot timer thread — the only
//! concurrency in this crate.  Supersession is handled with a
//! generation counter guarded by the same mutex as the sink: every
//! publish or manual wipe bumps the generation, and a timer only
//! clears the sink if its generation is still current.  A stale timer
//! therefore can neither wipe a newer secret nor double-fire, and
//! re-arming restarts the full delay rather than stacking timers.

use std::sync::{Arc, Mutex, PoisonError};
use std::thread;
use std::time::{Duration, Instant};

use zeroize::Zeroizing;

use crate::crypto::decrypt_record;
use crate::errors::{Result, SecureVaultError};
use crate::vault::VaultStore;

use super::sink::ExposureSink;

/// How long a revealed secret stays in the sink by default.
pub const DEFAULT_WIPE_DELAY: Duration = Duration::from_secs(10);

/// State shared between the session and its timer threads.
///
/// The sink lives under the same lock as the generation counter so
/// that "check generation, then clear" and "publish, then bump" are
/// each atomic with respect to one another.
struct SessionState<S> {
    sink: S,
    generation: u64,
    armed_since: Option<Instant>,
}

/// Mediates "reveal secret for account X" against a single sink.
///
/// At most one exposure is live per session; a successful reveal
/// supersedes any pending wipe.  Failed reveals (unknown account,
/// wrong passphrase) leave an already-armed exposure untouched.
pub struct ExposureSession<S: ExposureSink + 'static> {
    state: Arc<Mutex<SessionState<S>>>,
    wipe_delay: Duration,
}

impl<S: ExposureSink + 'static> ExposureSession<S> {
    /// Create a session over `sink` with the given wipe delay.
    pub fn new(sink: S, wipe_delay: Duration) -> Self {
        Self {
            state: Arc::new(Mutex::new(SessionState {
                sink,
                generation: 0,
                armed_since: None,
            })),
            wipe_delay,
        }
    }

    /// Decrypt `account`'s latest record and publish it to the sink,
    /// arming the wipe timer.
    ///
    /// Returns `EntryNotFound` when the account has no entry and
    /// `DecryptionFailed` on a wrong passphrase; in both cases the
    /// sink is not touched and any armed exposure stays armed.
    pub fn reveal(&self, store: &VaultStore, account: &str, passphrase: &str) -> Result<()> {
        let record = store
            .find_latest(account)
            .ok_or_else(|| SecureVaultError::EntryNotFound(account.to_owned()))?;

        let plaintext = decrypt_record(record, passphrase)?;
        self.publish(&plaintext)
    }

    /// Publish plaintext to the sink and arm a fresh wipe timer,
    /// superseding any pending one.
    fn publish(&self, plaintext: &Zeroizing<String>) -> Result<()> {
        let generation = {
            let mut state = self.lock();
            state.sink.write(plaintext)?;
            // Bumping under the lock invalidates any pending timer
            // before it can observe the new sink contents.
            state.generation += 1;
            state.armed_since = Some(Instant::now());
            state.generation
        };

        self.arm_wipe(generation);
        Ok(())
    }

    /// Spawn the one-shot timer for `generation`.
    fn arm_wipe(&self, generation: u64) {
        let state = Arc::clone(&self.state);
        let delay = self.wipe_delay;

        thread::spawn(move || {
            thread::sleep(delay);

            let mut state = state.lock().unwrap_or_else(PoisonError::into_inner);
            // A newer reveal or a manual wipe supersedes this timer.
            if state.generation != generation {
                return;
            }
            // The clipboard may be gone at process teardown; there is
            // nothing useful to do with a failure here.
            let _ = state.sink.clear();
            state.armed_since = None;
        });
    }

    /// Manual wipe: clear the sink and invalidate any pending timer.
    ///
    /// Idempotent and safe to call when nothing is armed.
    pub fn wipe_now(&self) -> Result<()> {
        let mut state = self.lock();
        state.generation += 1;
        state.sink.clear()?;
        state.armed_since = None;
        Ok(())
    }

    /// Returns `true` while a revealed secret is in the sink awaiting
    /// its wipe.
    pub fn is_armed(&self) -> bool {
        self.lock().armed_since.is_some()
    }

    /// When the current exposure was armed, if one is live.
    pub fn armed_since(&self) -> Option<Instant> {
        self.lock().armed_since
    }

    /// The configured wipe delay.
    pub fn wipe_delay(&self) -> Duration {
        self.wipe_delay
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, SessionState<S>> {
        // A timer thread that panicked mid-wipe must not wedge the
        // session; the state itself stays consistent.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<S: ExposureSink + 'static> Drop for ExposureSession<S> {
    /// Best-effort immediate wipe on teardown.
    ///
    /// Detached timer threads are not guaranteed to run once the
    /// process is exiting, so an armed secret is cleared here instead.
    fn drop(&mut self) {
        let mut state = self.lock();
        if state.armed_since.is_some() {
            state.generation += 1;
            let _ = state.sink.clear();
            state.armed_since = None;
        }
    }
}
