use crate::error::PlannerError;

use planner_core::credential::{CredentialProbe, CredentialState, CredentialStore};
use planner_core::storage::KeyValueStore;

use std::io::{BufRead, Write};

use log::{debug, info};

/// Print whether a key is stored, showing only its masked form.
pub fn status<S, P>(
    store: &mut CredentialStore<S, P>,
    out: &mut impl Write,
) -> Result<CredentialState, PlannerError>
where
    S: KeyValueStore,
    P: CredentialProbe,
{
    let state = store.initialize();

    match store.credential() {
        Some(key) => writeln!(out, "API key: stored ({})", key.masked())?,
        None => {
            writeln!(out, "API key: not set")?;
            writeln!(out, "Run `nls-planner key set` to add one.")?;
        }
    }

    Ok(state)
}

/// Verify a key with the provider and store it.
///
/// Without `raw`, the key is read as one line from `input` so it stays out
/// of shell history.
pub async fn set<S, P>(
    store: &mut CredentialStore<S, P>,
    raw: Option<String>,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<(), PlannerError>
where
    S: KeyValueStore,
    P: CredentialProbe,
{
    let raw = match raw {
        Some(raw) => raw,
        None => {
            debug!("Reading API key from stdin");
            let mut line = String::new();
            input.read_line(&mut line)?;
            line
        }
    };

    store.initialize();

    match store.submit(&raw).await {
        CredentialState::Confirmed => {
            let masked = store
                .credential()
                .map(|key| key.masked())
                .unwrap_or_default();
            writeln!(out, "API key verified and saved ({masked})")?;
            Ok(())
        }
        CredentialState::Invalid(reason) => {
            info!("API key not accepted: {}", reason.kind());
            Err(PlannerError::credential(reason.message()))
        }
        other => Err(PlannerError::planner(format!(
            "Unexpected credential state: {}",
            other.label()
        ))),
    }
}

/// Erase the stored key. Succeeds when nothing was stored.
pub fn remove<S, P>(
    store: &mut CredentialStore<S, P>,
    out: &mut impl Write,
) -> Result<(), PlannerError>
where
    S: KeyValueStore,
    P: CredentialProbe,
{
    store.initialize();
    store.remove();
    writeln!(out, "API key removed")?;
    Ok(())
}
