//! The persistence gateway for settings.
//!
//! One save may be in flight at a time. A second `save()` issued while one
//! is pending waits for it to settle and then snapshots the then-current
//! draft, so no request ever races against a stale pre-save snapshot.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::Mutex;
use tracing::{info, warn};

use super::settings::SettingsSlice;
use crate::domain::settings::Settings;
use crate::error::SaveError;
use crate::port::Backend;

pub(crate) struct SaveGateway {
    /// Serializes saves; the queued save reads the draft after the lock.
    lock: Mutex<()>,
    saving: AtomicBool,
    last_error: RwLock<Option<SaveError>>,
}

impl SaveGateway {
    pub(crate) fn new() -> Self {
        Self {
            lock: Mutex::new(()),
            saving: AtomicBool::new(false),
            last_error: RwLock::new(None),
        }
    }

    pub(crate) fn is_saving(&self) -> bool {
        self.saving.load(Ordering::SeqCst)
    }

    pub(crate) fn saving_error(&self) -> Option<SaveError> {
        self.last_error.read().clone()
    }

    /// Serialize the full draft into one request; on success promote it to
    /// the new baseline, on failure leave the draft untouched and store
    /// the structured error.
    pub(crate) async fn save(
        &self,
        slice: &SettingsSlice,
        backend: &Arc<dyn Backend>,
    ) -> Result<Settings, SaveError> {
        let _guard = self.lock.lock().await;

        // The previous attempt's error is superseded by this attempt.
        *self.last_error.write() = None;

        let outcome = self.attempt(slice, backend).await;
        if let Err(err) = &outcome {
            *self.last_error.write() = Some(err.clone());
        }
        outcome
    }

    async fn attempt(
        &self,
        slice: &SettingsSlice,
        backend: &Arc<dyn Backend>,
    ) -> Result<Settings, SaveError> {
        let Some(draft) = slice.draft() else {
            return Err(SaveError::NotLoaded);
        };

        // Catch cheap cross-field failures before the round-trip; the
        // server still revalidates everything.
        draft.validate()?;

        info!(dirty = slice.is_dirty(), "saving settings");
        self.saving.store(true, Ordering::SeqCst);
        let result = backend.save_settings(&draft).await;
        self.saving.store(false, Ordering::SeqCst);

        match result {
            Ok(accepted) => {
                slice.commit_saved(accepted.clone());
                info!("settings saved");
                Ok(accepted)
            }
            Err(err) => {
                warn!(error = %err, "settings save failed; draft preserved");
                Err(err)
            }
        }
    }
}
