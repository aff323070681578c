//! The settings slice: per-field draft/baseline state over a single-flight
//! fetch, plus the public accessor facade.
//!
//! The draft comes into existence on the first resolved settings fetch.
//! Hydration goes through each field's [`FieldState`] tag, so a server
//! refresh that lands mid-edit refreshes the untouched fields and leaves
//! the edited ones alone.

use std::future::Future;
use std::sync::Arc;

use parking_lot::RwLock;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::resolver::Resolver;
use super::save::SaveGateway;
use crate::domain::field::FieldState;
use crate::domain::query::QueryKey;
use crate::domain::settings::{DepositInterval, FraudProtectionLevel, Settings};
use crate::domain::status::ResolutionStatus;
use crate::error::{FetchError, SaveError};
use crate::port::Backend;

/// Tagged state for every mutable settings field.
struct SettingsFields {
    enabled_payment_method_ids: FieldState<Vec<String>>,
    account_statement_descriptor: FieldState<String>,
    account_business_support_address: FieldState<String>,
    account_business_support_email: FieldState<String>,
    account_business_support_phone: FieldState<String>,
    is_manual_capture_enabled: FieldState<bool>,
    is_test_mode_enabled: FieldState<bool>,
    is_saved_cards_enabled: FieldState<bool>,
    deposit_schedule_interval: FieldState<DepositInterval>,
    fraud_protection_level: FieldState<FraudProtectionLevel>,
    minimum_purchase_threshold: FieldState<Option<Decimal>>,
    maximum_purchase_threshold: FieldState<Option<Decimal>>,
}

impl SettingsFields {
    fn from_server(s: Settings) -> Self {
        Self {
            enabled_payment_method_ids: FieldState::Synced(s.enabled_payment_method_ids),
            account_statement_descriptor: FieldState::Synced(s.account_statement_descriptor),
            account_business_support_address: FieldState::Synced(s.account_business_support_address),
            account_business_support_email: FieldState::Synced(s.account_business_support_email),
            account_business_support_phone: FieldState::Synced(s.account_business_support_phone),
            is_manual_capture_enabled: FieldState::Synced(s.is_manual_capture_enabled),
            is_test_mode_enabled: FieldState::Synced(s.is_test_mode_enabled),
            is_saved_cards_enabled: FieldState::Synced(s.is_saved_cards_enabled),
            deposit_schedule_interval: FieldState::Synced(s.deposit_schedule_interval),
            fraud_protection_level: FieldState::Synced(s.fraud_protection_level),
            minimum_purchase_threshold: FieldState::Synced(s.minimum_purchase_threshold),
            maximum_purchase_threshold: FieldState::Synced(s.maximum_purchase_threshold),
        }
    }

    /// Per-field server refresh; dirty fields keep their local edit.
    fn hydrate(&mut self, s: Settings) {
        self.enabled_payment_method_ids.hydrate(s.enabled_payment_method_ids);
        self.account_statement_descriptor.hydrate(s.account_statement_descriptor);
        self.account_business_support_address.hydrate(s.account_business_support_address);
        self.account_business_support_email.hydrate(s.account_business_support_email);
        self.account_business_support_phone.hydrate(s.account_business_support_phone);
        self.is_manual_capture_enabled.hydrate(s.is_manual_capture_enabled);
        self.is_test_mode_enabled.hydrate(s.is_test_mode_enabled);
        self.is_saved_cards_enabled.hydrate(s.is_saved_cards_enabled);
        self.deposit_schedule_interval.hydrate(s.deposit_schedule_interval);
        self.fraud_protection_level.hydrate(s.fraud_protection_level);
        self.minimum_purchase_threshold.hydrate(s.minimum_purchase_threshold);
        self.maximum_purchase_threshold.hydrate(s.maximum_purchase_threshold);
    }

    fn draft(&self) -> Settings {
        Settings {
            enabled_payment_method_ids: self.enabled_payment_method_ids.value().clone(),
            account_statement_descriptor: self.account_statement_descriptor.value().clone(),
            account_business_support_address: self.account_business_support_address.value().clone(),
            account_business_support_email: self.account_business_support_email.value().clone(),
            account_business_support_phone: self.account_business_support_phone.value().clone(),
            is_manual_capture_enabled: *self.is_manual_capture_enabled.value(),
            is_test_mode_enabled: *self.is_test_mode_enabled.value(),
            is_saved_cards_enabled: *self.is_saved_cards_enabled.value(),
            deposit_schedule_interval: *self.deposit_schedule_interval.value(),
            fraud_protection_level: *self.fraud_protection_level.value(),
            minimum_purchase_threshold: *self.minimum_purchase_threshold.value(),
            maximum_purchase_threshold: *self.maximum_purchase_threshold.value(),
        }
    }

    fn baseline(&self) -> Settings {
        Settings {
            enabled_payment_method_ids: self.enabled_payment_method_ids.base().clone(),
            account_statement_descriptor: self.account_statement_descriptor.base().clone(),
            account_business_support_address: self.account_business_support_address.base().clone(),
            account_business_support_email: self.account_business_support_email.base().clone(),
            account_business_support_phone: self.account_business_support_phone.base().clone(),
            is_manual_capture_enabled: *self.is_manual_capture_enabled.base(),
            is_test_mode_enabled: *self.is_test_mode_enabled.base(),
            is_saved_cards_enabled: *self.is_saved_cards_enabled.base(),
            deposit_schedule_interval: *self.deposit_schedule_interval.base(),
            fraud_protection_level: *self.fraud_protection_level.base(),
            minimum_purchase_threshold: *self.minimum_purchase_threshold.base(),
            maximum_purchase_threshold: *self.maximum_purchase_threshold.base(),
        }
    }

    /// Advance every field's baseline to the accepted server state.
    ///
    /// Fields edited after the saved snapshot stay dirty relative to the
    /// new baseline.
    fn rebase(&mut self, s: Settings) {
        self.enabled_payment_method_ids.rebase(s.enabled_payment_method_ids);
        self.account_statement_descriptor.rebase(s.account_statement_descriptor);
        self.account_business_support_address.rebase(s.account_business_support_address);
        self.account_business_support_email.rebase(s.account_business_support_email);
        self.account_business_support_phone.rebase(s.account_business_support_phone);
        self.is_manual_capture_enabled.rebase(s.is_manual_capture_enabled);
        self.is_test_mode_enabled.rebase(s.is_test_mode_enabled);
        self.is_saved_cards_enabled.rebase(s.is_saved_cards_enabled);
        self.deposit_schedule_interval.rebase(s.deposit_schedule_interval);
        self.fraud_protection_level.rebase(s.fraud_protection_level);
        self.minimum_purchase_threshold.rebase(s.minimum_purchase_threshold);
        self.maximum_purchase_threshold.rebase(s.maximum_purchase_threshold);
    }

    fn is_dirty(&self) -> bool {
        self.enabled_payment_method_ids.is_dirty()
            || self.account_statement_descriptor.is_dirty()
            || self.account_business_support_address.is_dirty()
            || self.account_business_support_email.is_dirty()
            || self.account_business_support_phone.is_dirty()
            || self.is_manual_capture_enabled.is_dirty()
            || self.is_test_mode_enabled.is_dirty()
            || self.is_saved_cards_enabled.is_dirty()
            || self.deposit_schedule_interval.is_dirty()
            || self.fraud_protection_level.is_dirty()
            || self.minimum_purchase_threshold.is_dirty()
            || self.maximum_purchase_threshold.is_dirty()
    }
}

const SETTINGS_SELECTOR: &str = "settings";

/// The settings domain's cache state.
pub(crate) struct SettingsSlice {
    resolver: Resolver<Settings>,
    fields: RwLock<Option<SettingsFields>>,
}

impl SettingsSlice {
    pub(crate) fn new() -> Self {
        Self {
            resolver: Resolver::new(),
            fields: RwLock::new(None),
        }
    }

    fn key() -> QueryKey {
        QueryKey::bare(SETTINGS_SELECTOR)
    }

    /// Resolve the settings (single-flight) and hydrate the draft.
    pub(crate) async fn load<F>(&self, fetch: F) -> Result<Settings, FetchError>
    where
        F: Future<Output = Result<Settings, FetchError>>,
    {
        let settings = self.resolver.resolve(&Self::key(), fetch).await?;
        let mut guard = self.fields.write();
        match guard.as_mut() {
            Some(fields) => fields.hydrate(settings.clone()),
            None => {
                debug!("settings draft initialized from first fetch");
                *guard = Some(SettingsFields::from_server(settings.clone()));
            }
        }
        Ok(settings)
    }

    pub(crate) fn invalidate(&self) {
        self.resolver.invalidate(&Self::key());
    }

    pub(crate) fn status(&self) -> ResolutionStatus {
        self.resolver.status(&Self::key())
    }

    pub(crate) fn load_error(&self) -> Option<FetchError> {
        self.resolver.error(&Self::key())
    }

    pub(crate) fn draft(&self) -> Option<Settings> {
        self.fields.read().as_ref().map(SettingsFields::draft)
    }

    pub(crate) fn baseline(&self) -> Option<Settings> {
        self.fields.read().as_ref().map(SettingsFields::baseline)
    }

    pub(crate) fn is_dirty(&self) -> bool {
        self.fields.read().as_ref().is_some_and(SettingsFields::is_dirty)
    }

    /// Promote the accepted server state to the new baseline.
    pub(crate) fn commit_saved(&self, accepted: Settings) {
        if let Some(fields) = self.fields.write().as_mut() {
            fields.rebase(accepted.clone());
        }
        // Keep the cache meaning "last server-confirmed state".
        self.resolver.prime(&Self::key(), accepted);
    }

    fn read<T>(&self, f: impl FnOnce(&SettingsFields) -> T) -> Option<T> {
        self.fields.read().as_ref().map(f)
    }

    fn edit(&self, f: impl FnOnce(&mut SettingsFields)) {
        match self.fields.write().as_mut() {
            Some(fields) => f(fields),
            None => warn!("settings edit ignored: draft not loaded yet"),
        }
    }
}

/// Public accessor facade for the settings domain.
///
/// Each mutable field exposes a getter/setter pair; setters dispatch the
/// local edit synchronously and never touch the baseline. Derived state
/// (`is_dirty`, `is_saving`, `saving_error`) has no setter.
pub struct SettingsHandle {
    backend: Arc<dyn Backend>,
    slice: SettingsSlice,
    gateway: SaveGateway,
}

impl SettingsHandle {
    pub(crate) fn new(backend: Arc<dyn Backend>) -> Self {
        Self {
            backend,
            slice: SettingsSlice::new(),
            gateway: SaveGateway::new(),
        }
    }

    /// Fetch the settings if not already cached and hydrate the draft.
    pub async fn load(&self) -> Result<Settings, FetchError> {
        let backend = Arc::clone(&self.backend);
        self.slice.load(async move { backend.get_settings().await }).await
    }

    /// Force a fresh fetch. Fields with unsaved edits keep them.
    pub async fn reload(&self) -> Result<Settings, FetchError> {
        self.slice.invalidate();
        self.load().await
    }

    /// True while the initial fetch has not settled.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.slice.status().is_loading()
    }

    /// True once the draft exists.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.slice.draft().is_some()
    }

    /// The fetch error, if the last settings load failed.
    #[must_use]
    pub fn load_error(&self) -> Option<FetchError> {
        self.slice.load_error()
    }

    /// True when any field differs from the last-saved baseline.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.slice.is_dirty()
    }

    /// Snapshot of the current draft.
    #[must_use]
    pub fn draft(&self) -> Option<Settings> {
        self.slice.draft()
    }

    /// Snapshot of the last-saved baseline.
    #[must_use]
    pub fn baseline(&self) -> Option<Settings> {
        self.slice.baseline()
    }

    /// Persist the entire draft in one request.
    ///
    /// Saves are serialized: a `save()` issued while another is in flight
    /// waits for it to settle, then runs against the then-current draft.
    pub async fn save(&self) -> Result<Settings, SaveError> {
        self.gateway.save(&self.slice, &self.backend).await
    }

    /// True strictly between save request start and settle.
    #[must_use]
    pub fn is_saving(&self) -> bool {
        self.gateway.is_saving()
    }

    /// The structured error from the last failed save, if any.
    #[must_use]
    pub fn saving_error(&self) -> Option<SaveError> {
        self.gateway.saving_error()
    }

    // Per-field accessor pairs.

    #[must_use]
    pub fn enabled_payment_method_ids(&self) -> Option<Vec<String>> {
        self.slice.read(|f| f.enabled_payment_method_ids.value().clone())
    }

    pub fn set_enabled_payment_method_ids(&self, ids: Vec<String>) {
        self.slice.edit(|f| f.enabled_payment_method_ids.edit(ids));
    }

    #[must_use]
    pub fn statement_descriptor(&self) -> Option<String> {
        self.slice.read(|f| f.account_statement_descriptor.value().clone())
    }

    pub fn set_statement_descriptor(&self, descriptor: impl Into<String>) {
        let descriptor = descriptor.into();
        self.slice.edit(|f| f.account_statement_descriptor.edit(descriptor));
    }

    #[must_use]
    pub fn business_support_address(&self) -> Option<String> {
        self.slice.read(|f| f.account_business_support_address.value().clone())
    }

    pub fn set_business_support_address(&self, address: impl Into<String>) {
        let address = address.into();
        self.slice.edit(|f| f.account_business_support_address.edit(address));
    }

    #[must_use]
    pub fn business_support_email(&self) -> Option<String> {
        self.slice.read(|f| f.account_business_support_email.value().clone())
    }

    pub fn set_business_support_email(&self, email: impl Into<String>) {
        let email = email.into();
        self.slice.edit(|f| f.account_business_support_email.edit(email));
    }

    #[must_use]
    pub fn business_support_phone(&self) -> Option<String> {
        self.slice.read(|f| f.account_business_support_phone.value().clone())
    }

    pub fn set_business_support_phone(&self, phone: impl Into<String>) {
        let phone = phone.into();
        self.slice.edit(|f| f.account_business_support_phone.edit(phone));
    }

    #[must_use]
    pub fn is_manual_capture_enabled(&self) -> Option<bool> {
        self.slice.read(|f| *f.is_manual_capture_enabled.value())
    }

    pub fn set_manual_capture_enabled(&self, enabled: bool) {
        self.slice.edit(|f| f.is_manual_capture_enabled.edit(enabled));
    }

    #[must_use]
    pub fn is_test_mode_enabled(&self) -> Option<bool> {
        self.slice.read(|f| *f.is_test_mode_enabled.value())
    }

    pub fn set_test_mode_enabled(&self, enabled: bool) {
        self.slice.edit(|f| f.is_test_mode_enabled.edit(enabled));
    }

    #[must_use]
    pub fn is_saved_cards_enabled(&self) -> Option<bool> {
        self.slice.read(|f| *f.is_saved_cards_enabled.value())
    }

    pub fn set_saved_cards_enabled(&self, enabled: bool) {
        self.slice.edit(|f| f.is_saved_cards_enabled.edit(enabled));
    }

    #[must_use]
    pub fn deposit_schedule_interval(&self) -> Option<DepositInterval> {
        self.slice.read(|f| *f.deposit_schedule_interval.value())
    }

    pub fn set_deposit_schedule_interval(&self, interval: DepositInterval) {
        self.slice.edit(|f| f.deposit_schedule_interval.edit(interval));
    }

    #[must_use]
    pub fn fraud_protection_level(&self) -> Option<FraudProtectionLevel> {
        self.slice.read(|f| *f.fraud_protection_level.value())
    }

    pub fn set_fraud_protection_level(&self, level: FraudProtectionLevel) {
        self.slice.edit(|f| f.fraud_protection_level.edit(level));
    }

    #[must_use]
    pub fn minimum_purchase_threshold(&self) -> Option<Option<Decimal>> {
        self.slice.read(|f| *f.minimum_purchase_threshold.value())
    }

    pub fn set_minimum_purchase_threshold(&self, threshold: Option<Decimal>) {
        self.slice.edit(|f| f.minimum_purchase_threshold.edit(threshold));
    }

    #[must_use]
    pub fn maximum_purchase_threshold(&self) -> Option<Option<Decimal>> {
        self.slice.read(|f| *f.maximum_purchase_threshold.value())
    }

    pub fn set_maximum_purchase_threshold(&self, threshold: Option<Decimal>) {
        self.slice.edit(|f| f.maximum_purchase_threshold.edit(threshold));
    }
}
