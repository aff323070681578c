//! The store core: single-flight resolvers, per-domain caches, the dirty-
//! tracked settings slice, and the aggregator that bundles them.
//!
//! # Modules
//!
//! - [`resolver`] - Single-flight memoized resolution per query key
//! - [`slice`] - `DomainHandle`, one selector's cache + fetch wiring
//! - [`settings`] - The settings slice and its accessor facade
//! - [`save`] - The persistence gateway (serialized, atomic saves)
//! - [`domains`] - Per-domain facades

pub mod domains;
pub mod resolver;
pub mod save;
pub mod settings;
pub mod slice;

use std::sync::Arc;

use domains::{
    Authorizations, Capital, Charges, Deposits, Disputes, Documents, Files, PaymentIntents,
    Readers, Timelines, Transactions,
};
use settings::SettingsHandle;

use crate::port::Backend;

/// The process-wide store, constructed once at the composition root.
///
/// Cheap to clone; clones share all cache state. There is no hidden
/// global: every consumer receives a `StoreHandle` explicitly.
///
/// The aggregator performs no cross-domain coordination. Each domain's
/// cache is keyed and populated independently; a failure in one leaves
/// every other untouched.
#[derive(Clone)]
pub struct StoreHandle {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    deposits: Deposits,
    transactions: Transactions,
    charges: Charges,
    timelines: Timelines,
    disputes: Disputes,
    readers: Readers,
    capital: Capital,
    documents: Documents,
    payment_intents: PaymentIntents,
    authorizations: Authorizations,
    files: Files,
    settings: SettingsHandle,
}

impl StoreHandle {
    /// Wire every domain slice to the given backend.
    #[must_use]
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        let inner = StoreInner {
            deposits: Deposits::new(&backend),
            transactions: Transactions::new(&backend),
            charges: Charges::new(&backend),
            timelines: Timelines::new(&backend),
            disputes: Disputes::new(&backend),
            readers: Readers::new(&backend),
            capital: Capital::new(&backend),
            documents: Documents::new(&backend),
            payment_intents: PaymentIntents::new(&backend),
            authorizations: Authorizations::new(&backend),
            files: Files::new(&backend),
            settings: SettingsHandle::new(backend),
        };
        Self {
            inner: Arc::new(inner),
        }
    }

    #[must_use]
    pub fn deposits(&self) -> &Deposits {
        &self.inner.deposits
    }

    #[must_use]
    pub fn transactions(&self) -> &Transactions {
        &self.inner.transactions
    }

    #[must_use]
    pub fn charges(&self) -> &Charges {
        &self.inner.charges
    }

    #[must_use]
    pub fn timelines(&self) -> &Timelines {
        &self.inner.timelines
    }

    #[must_use]
    pub fn disputes(&self) -> &Disputes {
        &self.inner.disputes
    }

    #[must_use]
    pub fn readers(&self) -> &Readers {
        &self.inner.readers
    }

    #[must_use]
    pub fn capital(&self) -> &Capital {
        &self.inner.capital
    }

    #[must_use]
    pub fn documents(&self) -> &Documents {
        &self.inner.documents
    }

    #[must_use]
    pub fn payment_intents(&self) -> &PaymentIntents {
        &self.inner.payment_intents
    }

    #[must_use]
    pub fn authorizations(&self) -> &Authorizations {
        &self.inner.authorizations
    }

    #[must_use]
    pub fn files(&self) -> &Files {
        &self.inner.files
    }

    #[must_use]
    pub fn settings(&self) -> &SettingsHandle {
        &self.inner.settings
    }
}
