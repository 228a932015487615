//! Periodic auto-save of the working document.
//!
//! A background thread wakes on a fixed interval, asks the host for a
//! snapshot of the current document, and writes it to the dedicated
//! auto-save slot. Failures are logged and the loop keeps running; an
//! auto-save must never take the editor down.
//!
//! The thread parks on a channel receive with a timeout, so [`stop`] (and
//! `Drop`) wake it immediately instead of waiting out the interval.
//!
//! [`stop`]: AutoSave::stop

use super::document::MapDocument;
use super::storage::Storage;
use crate::constants::AUTOSAVE_KEY;
use crate::types::unix_millis;
use serde::{Deserialize, Serialize};
use std::sync::mpsc;
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

/// What lands in the auto-save slot: the document plus when it was taken.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutosaveSnapshot {
    pub document: MapDocument,
    pub saved_at: u64,
}

impl AutosaveSnapshot {
    pub fn new(document: MapDocument) -> Self {
        Self {
            document,
            saved_at: unix_millis(),
        }
    }
}

/// Read back the last auto-save snapshot, if one exists.
pub fn load_autosave(storage: &dyn Storage) -> anyhow::Result<Option<AutosaveSnapshot>> {
    let Some(json) = storage.read(AUTOSAVE_KEY)? else {
        return Ok(None);
    };
    Ok(Some(serde_json::from_str(&json)?))
}

/// Discard the auto-save snapshot.
pub fn clear_autosave(storage: &dyn Storage) -> anyhow::Result<()> {
    storage.remove(AUTOSAVE_KEY)
}

/// Handle to a running auto-save loop. Stopping (or dropping) joins the
/// background thread.
pub struct AutoSave {
    stop_tx: Option<mpsc::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl AutoSave {
    /// Spawn the auto-save loop.
    ///
    /// `snapshot` runs on the background thread every `interval`; returning
    /// `None` skips that tick (nothing worth saving).
    pub fn start(
        interval: Duration,
        storage: Arc<dyn Storage>,
        snapshot: impl Fn() -> Option<AutosaveSnapshot> + Send + 'static,
    ) -> Self {
        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let handle = std::thread::spawn(move || loop {
            match stop_rx.recv_timeout(interval) {
                Ok(()) | Err(mpsc::RecvTimeoutError::Disconnected) => break,
                Err(mpsc::RecvTimeoutError::Timeout) => {
                    let Some(snap) = snapshot() else { continue };
                    match serde_json::to_string(&snap) {
                        Ok(json) => {
                            if let Err(e) = storage.write(AUTOSAVE_KEY, &json) {
                                tracing::error!(error = %e, "auto-save write failed");
                            } else {
                                tracing::debug!(saved_at = snap.saved_at, "auto-saved");
                            }
                        }
                        Err(e) => tracing::error!(error = %e, "auto-save serialize failed"),
                    }
                }
            }
        });
        Self {
            stop_tx: Some(stop_tx),
            handle: Some(handle),
        }
    }

    /// Stop the loop and wait for the thread to exit. Idempotent.
    pub fn stop(&mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for AutoSave {
    fn drop(&mut self) {
        self.stop();
    }
}
