//! Gemini API key lifecycle.
//!
//! # Flow
//! - `initialize()` trusts a persisted key without probing it
//! - `submit()` trims, checks the format, probes the provider once, then
//!   persists the key on success
//! - `remove()` erases the persisted key
//!
//! Failures never escape as errors: they become [`CredentialState::Invalid`]
//! with a displayable [`InvalidReason`]. Nothing is retried.
//!
//! # Notifications
//! - [`CredentialStore::subscribe`] yields a `watch` receiver of state changes
//! - the optional listener receives the usable key, or `None` once the key
//!   is gone
//!
//! # Security
//! - Keys are held as [`RedactedApiKey`] and only their length or masked
//!   preview is logged

pub mod probe;
pub mod state;
pub mod validation;

pub use probe::CredentialProbe;
pub use state::{CredentialState, InvalidReason};
pub use validation::{KeyFormatFailure, KeyValidator};

use crate::CREDENTIAL_STORAGE_KEY;
use crate::storage::KeyValueStore;

use common::RedactedApiKey;

use log::{debug, info, warn};
use tokio::sync::watch;

/// Receives the usable key after it is confirmed, `None` after removal.
pub type CredentialListener = Box<dyn Fn(Option<&RedactedApiKey>) + Send + Sync>;

pub struct CredentialStore<S, P> {
    storage: S,
    probe: P,
    validator: KeyValidator,
    state_tx: watch::Sender<CredentialState>,
    current: Option<RedactedApiKey>,
    listener: Option<CredentialListener>,
}

impl<S, P> CredentialStore<S, P>
where
    S: KeyValueStore,
    P: CredentialProbe,
{
    /// Create a store in the `Absent` state. Call [`Self::initialize`] next.
    pub fn new(storage: S, probe: P) -> Self {
        let (state_tx, _) = watch::channel(CredentialState::Absent);

        Self {
            storage,
            probe,
            validator: KeyValidator::gemini(),
            state_tx,
            current: None,
            listener: None,
        }
    }

    /// Register the owning context's callback.
    pub fn with_listener<F>(mut self, listener: F) -> Self
    where
        F: Fn(Option<&RedactedApiKey>) + Send + Sync + 'static,
    {
        self.listener = Some(Box::new(listener));
        self
    }

    pub fn state(&self) -> CredentialState {
        self.state_tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<CredentialState> {
        self.state_tx.subscribe()
    }

    /// The confirmed key, if any.
    pub fn credential(&self) -> Option<&RedactedApiKey> {
        self.current.as_ref()
    }

    /// Read the persisted key.
    ///
    /// A stored key moves straight to `Confirmed` and is announced without
    /// a probe. No key, or a storage read failure, leaves the store in
    /// `PendingInput`.
    pub fn initialize(&mut self) -> CredentialState {
        match self.storage.get(CREDENTIAL_STORAGE_KEY) {
            Ok(Some(value)) if !value.trim().is_empty() => {
                let key = RedactedApiKey::new(value);
                info!("Loaded stored API key ({} chars)", key.len());

                self.current = Some(key);
                let state = self.transition(CredentialState::Confirmed);
                self.notify(self.current.as_ref());
                state
            }
            Ok(_) => {
                debug!("No stored API key");
                self.current = None;
                self.transition(CredentialState::PendingInput)
            }
            Err(e) => {
                warn!("Could not read stored API key, treating as absent: {}", e);
                self.current = None;
                self.transition(CredentialState::PendingInput)
            }
        }
    }

    /// Check, probe and persist a key typed by the user.
    ///
    /// Format failures never reach the network. A probe failure of any kind
    /// leaves storage untouched. A call made while another validation is in
    /// flight is ignored and returns the current state. Dropping the returned
    /// future mid-probe puts the state back to where it was before the call.
    pub async fn submit(&mut self, raw_input: &str) -> CredentialState {
        if matches!(*self.state_tx.borrow(), CredentialState::Validating) {
            warn!("API key submission ignored: validation already in progress");
            return self.state();
        }

        let candidate = RedactedApiKey::from_input(raw_input);

        if candidate.is_empty() {
            return self.transition(CredentialState::Invalid(InvalidReason::Empty));
        }

        if let Err(failure) = self.validator.validate(&candidate) {
            info!("API key failed format check: {}", failure);
            return self.transition(CredentialState::Invalid(InvalidReason::Format(failure)));
        }

        let previous = self.state();
        self.transition(CredentialState::Validating);
        let rollback = ValidationRollback::arm(&self.state_tx, previous);
        info!("Probing API key ({} chars)", candidate.len());

        let outcome = self.probe.probe(&candidate).await;
        rollback.disarm();

        if let Err(e) = outcome {
            info!("API key rejected ({}): {}", e.error_category(), e);
            return self.transition(CredentialState::Invalid(InvalidReason::Rejected {
                status_code: e.status_code(),
                detail: e.to_string(),
            }));
        }

        if let Err(e) = self.storage.set(CREDENTIAL_STORAGE_KEY, candidate.as_str()) {
            info!("API key accepted but not persisted ({}): {}", e.error_category(), e);
            return self.transition(CredentialState::Invalid(InvalidReason::Storage {
                detail: e.to_string(),
            }));
        }

        info!("API key confirmed and stored ({})", candidate.masked());
        self.current = Some(candidate);
        let state = self.transition(CredentialState::Confirmed);
        self.notify(self.current.as_ref());
        state
    }

    /// Erase the persisted key and announce that no key is usable.
    ///
    /// Safe to call repeatedly; a failed erase is logged, not surfaced.
    pub fn remove(&mut self) -> CredentialState {
        if let Err(e) = self.storage.remove(CREDENTIAL_STORAGE_KEY) {
            warn!("Failed to erase stored API key: {}", e);
        }

        self.current = None;
        let state = self.transition(CredentialState::PendingInput);
        self.notify(None);
        info!("API key removed");
        state
    }

    /// The user started editing after a rejection.
    pub fn edit(&mut self) -> CredentialState {
        if matches!(*self.state_tx.borrow(), CredentialState::Invalid(_)) {
            return self.transition(CredentialState::PendingInput);
        }
        self.state()
    }

    /// Move to `next` and return it.
    fn transition(&self, next: CredentialState) -> CredentialState {
        let previous = self.state_tx.send_replace(next.clone());
        if previous != next {
            debug!("Credential state: {} -> {}", previous.label(), next.label());
        }
        next
    }

    fn notify(&self, key: Option<&RedactedApiKey>) {
        if let Some(listener) = &self.listener {
            listener(key);
        }
    }
}

/// Restores the pre-probe state if a `submit()` future is dropped while the
/// probe is pending, so the store never stays in `Validating`.
struct ValidationRollback<'a> {
    state_tx: &'a watch::Sender<CredentialState>,
    previous: Option<CredentialState>,
}

impl<'a> ValidationRollback<'a> {
    fn arm(state_tx: &'a watch::Sender<CredentialState>, previous: CredentialState) -> Self {
        Self {
            state_tx,
            previous: Some(previous),
        }
    }

    fn disarm(mut self) {
        self.previous = None;
    }
}

impl Drop for ValidationRollback<'_> {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            warn!("API key validation cancelled, back to {}", previous.label());
            self.state_tx.send_replace(previous);
        }
    }
}
