#![allow(dead_code)]

//! Shared helpers for the integration suites.

use std::sync::Arc;

use paystore::port::Backend;
use paystore::store::StoreHandle;
use paystore::testkit::MockBackend;

pub use paystore::testkit::fixtures;

/// Build a store wired to the given mock.
pub fn store_with(backend: &Arc<MockBackend>) -> StoreHandle {
    StoreHandle::new(Arc::clone(backend) as Arc<dyn Backend>)
}

/// A mock pre-loaded with the canonical settings fixture, plus its store.
pub fn settings_store() -> (Arc<MockBackend>, StoreHandle) {
    let backend = Arc::new(MockBackend::with_settings(&fixtures::settings()));
    let store = store_with(&backend);
    (backend, store)
}
