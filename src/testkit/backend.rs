//! A scripted backend for exercising the store without a server.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tokio::sync::Semaphore;

use crate::domain::authorization::{AuthorizationsList, AuthorizationsQuery, AuthorizationsSummary};
use crate::domain::capital::{ActiveLoanSummary, LoansList};
use crate::domain::charge::Charge;
use crate::domain::deposit::{DepositsList, DepositsOverview, DepositsQuery};
use crate::domain::dispute::{DisputesList, DisputesQuery, DisputesSummary};
use crate::domain::document::{DocumentsList, DocumentsQuery, DocumentsSummary};
use crate::domain::file::StoredFile;
use crate::domain::ids::{ChargeId, FileId, PaymentIntentId};
use crate::domain::payment_intent::PaymentIntent;
use crate::domain::reader::{CardReader, ReaderChargesQuery, ReaderChargesSummary};
use crate::domain::settings::Settings;
use crate::domain::timeline::Timeline;
use crate::domain::transaction::{TransactionsList, TransactionsQuery, TransactionsSummary};
use crate::error::{FetchError, SaveError};
use crate::port::Backend;

/// Scripted [`Backend`] with per-method call counters and gates.
///
/// Responses are keyed by method name. A method without a scripted
/// response fails with a 404-shaped [`FetchError`], which doubles as the
/// error injection path. `gate(method)` makes subsequent calls to that
/// method wait until the test releases a permit, so tests can observe
/// in-flight state deterministically.
#[derive(Default)]
pub struct MockBackend {
    responses: Mutex<HashMap<&'static str, Value>>,
    save_results: Mutex<VecDeque<Result<Settings, SaveError>>>,
    saved: Mutex<Vec<Settings>>,
    calls: Mutex<HashMap<&'static str, usize>>,
    gates: Mutex<HashMap<&'static str, Arc<Semaphore>>>,
}

impl MockBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend pre-loaded with a settings snapshot.
    #[must_use]
    pub fn with_settings(settings: &Settings) -> Self {
        let backend = Self::new();
        backend.set_response("get_settings", settings);
        backend
    }

    /// Script the response for a method (serialized once, replayed on
    /// every call).
    pub fn set_response<T: Serialize>(&self, method: &'static str, value: &T) {
        let value = serde_json::to_value(value).unwrap_or(Value::Null);
        self.responses.lock().insert(method, value);
    }

    /// Queue the outcome of the next `save_settings` call. When the queue
    /// is empty, saves succeed and echo the submitted draft.
    pub fn push_save_result(&self, result: Result<Settings, SaveError>) {
        self.save_results.lock().push_back(result);
    }

    /// Number of calls made to a method.
    #[must_use]
    pub fn calls(&self, method: &str) -> usize {
        self.calls.lock().get(method).copied().unwrap_or(0)
    }

    /// Every draft submitted through `save_settings`, in order.
    #[must_use]
    pub fn saved(&self) -> Vec<Settings> {
        self.saved.lock().clone()
    }

    /// Hold future calls to a method until permits are added.
    pub fn gate(&self, method: &'static str) -> Arc<Semaphore> {
        let gate = Arc::new(Semaphore::new(0));
        self.gates.lock().insert(method, Arc::clone(&gate));
        gate
    }

    fn record(&self, method: &'static str) {
        *self.calls.lock().entry(method).or_insert(0) += 1;
    }

    async fn pass_gate(&self, method: &'static str) {
        let gate = self.gates.lock().get(method).cloned();
        if let Some(gate) = gate {
            if let Ok(permit) = gate.acquire().await {
                permit.forget();
            }
        }
    }

    async fn respond<T: DeserializeOwned>(&self, method: &'static str) -> Result<T, FetchError> {
        self.record(method);
        self.pass_gate(method).await;

        let value = self.responses.lock().get(method).cloned();
        match value {
            Some(value) => {
                serde_json::from_value(value).map_err(|err| FetchError::Decode(err.to_string()))
            }
            None => Err(FetchError::Status {
                status: 404,
                message: format!("no scripted response for {method}"),
            }),
        }
    }
}

#[async_trait]
impl Backend for MockBackend {
    async fn list_deposits(&self, _query: &DepositsQuery) -> Result<DepositsList, FetchError> {
        self.respond("list_deposits").await
    }

    async fn deposits_overview(&self) -> Result<DepositsOverview, FetchError> {
        self.respond("deposits_overview").await
    }

    async fn list_transactions(
        &self,
        _query: &TransactionsQuery,
    ) -> Result<TransactionsList, FetchError> {
        self.respond("list_transactions").await
    }

    async fn transactions_summary(
        &self,
        _query: &TransactionsQuery,
    ) -> Result<TransactionsSummary, FetchError> {
        self.respond("transactions_summary").await
    }

    async fn get_charge(&self, _id: &ChargeId) -> Result<Charge, FetchError> {
        self.respond("get_charge").await
    }

    async fn get_timeline(&self, _intent_id: &PaymentIntentId) -> Result<Timeline, FetchError> {
        self.respond("get_timeline").await
    }

    async fn list_disputes(&self, _query: &DisputesQuery) -> Result<DisputesList, FetchError> {
        self.respond("list_disputes").await
    }

    async fn disputes_summary(
        &self,
        _query: &DisputesQuery,
    ) -> Result<DisputesSummary, FetchError> {
        self.respond("disputes_summary").await
    }

    async fn list_readers(&self) -> Result<Vec<CardReader>, FetchError> {
        self.respond("list_readers").await
    }

    async fn readers_charge_summary(
        &self,
        _query: &ReaderChargesQuery,
    ) -> Result<ReaderChargesSummary, FetchError> {
        self.respond("readers_charge_summary").await
    }

    async fn capital_loans(&self) -> Result<LoansList, FetchError> {
        self.respond("capital_loans").await
    }

    async fn active_loan_summary(&self) -> Result<ActiveLoanSummary, FetchError> {
        self.respond("active_loan_summary").await
    }

    async fn list_documents(&self, _query: &DocumentsQuery) -> Result<DocumentsList, FetchError> {
        self.respond("list_documents").await
    }

    async fn documents_summary(
        &self,
        _query: &DocumentsQuery,
    ) -> Result<DocumentsSummary, FetchError> {
        self.respond("documents_summary").await
    }

    async fn get_payment_intent(
        &self,
        _id: &PaymentIntentId,
    ) -> Result<PaymentIntent, FetchError> {
        self.respond("get_payment_intent").await
    }

    async fn list_authorizations(
        &self,
        _query: &AuthorizationsQuery,
    ) -> Result<AuthorizationsList, FetchError> {
        self.respond("list_authorizations").await
    }

    async fn authorizations_summary(
        &self,
        _query: &AuthorizationsQuery,
    ) -> Result<AuthorizationsSummary, FetchError> {
        self.respond("authorizations_summary").await
    }

    async fn get_file(&self, _id: &FileId) -> Result<StoredFile, FetchError> {
        self.respond("get_file").await
    }

    async fn get_settings(&self) -> Result<Settings, FetchError> {
        self.respond("get_settings").await
    }

    async fn save_settings(&self, draft: &Settings) -> Result<Settings, SaveError> {
        self.record("save_settings");
        self.pass_gate("save_settings").await;
        self.saved.lock().push(draft.clone());

        let scripted = self.save_results.lock().pop_front();
        match scripted {
            Some(result) => result,
            None => Ok(draft.clone()),
        }
    }
}
