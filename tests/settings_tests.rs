//! Integration tests for settings loading, hydration, and dirty tracking.

mod support;

use std::sync::Arc;

use paystore::domain::settings::{DepositInterval, Settings};
use paystore::testkit::MockBackend;

use support::{fixtures, settings_store, store_with};

#[tokio::test]
async fn load_initializes_draft_and_baseline() {
    let (backend, store) = settings_store();
    let settings = store.settings();

    assert!(!settings.is_loaded());
    let loaded = settings.load().await.unwrap();

    assert!(settings.is_loaded());
    assert_eq!(settings.draft(), Some(loaded.clone()));
    assert_eq!(settings.baseline(), Some(loaded));
    assert!(!settings.is_dirty());
    assert_eq!(backend.calls("get_settings"), 1);
}

#[tokio::test]
async fn second_load_is_a_cache_hit() {
    let (backend, store) = settings_store();
    store.settings().load().await.unwrap();
    store.settings().load().await.unwrap();
    assert_eq!(backend.calls("get_settings"), 1);
}

#[tokio::test]
async fn edits_dirty_only_the_touched_field() {
    let (_backend, store) = settings_store();
    let settings = store.settings();
    settings.load().await.unwrap();

    settings.set_statement_descriptor("MYSTORE");

    assert!(settings.is_dirty());
    assert_eq!(settings.statement_descriptor().as_deref(), Some("MYSTORE"));
    // Baseline keeps the server value; untouched fields are unchanged.
    let baseline = settings.baseline().unwrap();
    assert_eq!(baseline.account_statement_descriptor, "OLDSTORE");
    assert_eq!(
        settings.deposit_schedule_interval(),
        Some(DepositInterval::Daily)
    );
}

#[tokio::test]
async fn reverting_an_edit_clears_dirtiness() {
    let (_backend, store) = settings_store();
    let settings = store.settings();
    settings.load().await.unwrap();

    settings.set_enabled_payment_method_ids(vec!["card".into(), "bancontact".into()]);
    assert!(settings.is_dirty());

    settings.set_enabled_payment_method_ids(vec!["card".into()]);
    assert!(!settings.is_dirty());
    assert_eq!(settings.draft(), settings.baseline());
}

#[tokio::test]
async fn reload_refreshes_synced_fields_and_keeps_edits() {
    let (backend, store) = settings_store();
    let settings = store.settings();
    settings.load().await.unwrap();

    settings.set_statement_descriptor("MYSTORE");

    // The server moved on while the user was editing.
    let server = Settings {
        account_statement_descriptor: "SERVERSIDE".into(),
        account_business_support_phone: "+15550199".into(),
        ..fixtures::settings()
    };
    backend.set_response("get_settings", &server);
    let gate = backend.gate("get_settings");

    let reload = {
        let store = store.clone();
        tokio::spawn(async move { store.settings().reload().await })
    };
    tokio::task::yield_now().await;
    assert!(store.settings().is_loading());

    gate.add_permits(1);
    reload.await.unwrap().unwrap();

    // The untouched field follows the server; the edited one does not.
    assert_eq!(
        settings.business_support_phone().as_deref(),
        Some("+15550199")
    );
    assert_eq!(settings.statement_descriptor().as_deref(), Some("MYSTORE"));
    assert!(settings.is_dirty());
    assert_eq!(backend.calls("get_settings"), 2);
}

#[tokio::test]
async fn edits_before_load_are_ignored() {
    let backend = Arc::new(MockBackend::new());
    let store = store_with(&backend);
    let settings = store.settings();

    settings.set_statement_descriptor("MYSTORE");

    assert!(!settings.is_dirty());
    assert_eq!(settings.draft(), None);
    assert_eq!(settings.statement_descriptor(), None);
}

#[tokio::test]
async fn load_failure_is_exposed_and_retryable() {
    // No scripted settings response: the fetch fails.
    let backend = Arc::new(MockBackend::new());
    let store = store_with(&backend);
    let settings = store.settings();

    settings.load().await.unwrap_err();
    assert!(settings.load_error().is_some());
    assert!(!settings.is_loaded());

    backend.set_response("get_settings", &fixtures::settings());
    settings.reload().await.unwrap();
    assert!(settings.load_error().is_none());
    assert!(settings.is_loaded());
}
