//! The outbound server seam.

use async_trait::async_trait;

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

/// Everything the store fetches from or persists to the server.
///
/// One `GET`-shaped method per resolver query, plus the single atomic
/// settings save. Implementations must be cheap to share behind an `Arc`;
/// the store issues at most one concurrent call per distinct query key.
#[async_trait]
pub trait Backend: Send + Sync {
    async fn list_deposits(&self, query: &DepositsQuery) -> Result<DepositsList, FetchError>;
    async fn deposits_overview(&self) -> Result<DepositsOverview, FetchError>;

    async fn list_transactions(
        &self,
        query: &TransactionsQuery,
    ) -> Result<TransactionsList, FetchError>;
    async fn transactions_summary(
        &self,
        query: &TransactionsQuery,
    ) -> Result<TransactionsSummary, FetchError>;

    async fn get_charge(&self, id: &ChargeId) -> Result<Charge, FetchError>;

    async fn get_timeline(&self, intent_id: &PaymentIntentId) -> Result<Timeline, FetchError>;

    async fn list_disputes(&self, query: &DisputesQuery) -> Result<DisputesList, FetchError>;
    async fn disputes_summary(&self, query: &DisputesQuery) -> Result<DisputesSummary, FetchError>;

    async fn list_readers(&self) -> Result<Vec<CardReader>, FetchError>;
    async fn readers_charge_summary(
        &self,
        query: &ReaderChargesQuery,
    ) -> Result<ReaderChargesSummary, FetchError>;

    async fn capital_loans(&self) -> Result<LoansList, FetchError>;
    async fn active_loan_summary(&self) -> Result<ActiveLoanSummary, FetchError>;

    async fn list_documents(&self, query: &DocumentsQuery) -> Result<DocumentsList, FetchError>;
    async fn documents_summary(
        &self,
        query: &DocumentsQuery,
    ) -> Result<DocumentsSummary, FetchError>;

    async fn get_payment_intent(&self, id: &PaymentIntentId) -> Result<PaymentIntent, FetchError>;

    async fn list_authorizations(
        &self,
        query: &AuthorizationsQuery,
    ) -> Result<AuthorizationsList, FetchError>;
    async fn authorizations_summary(
        &self,
        query: &AuthorizationsQuery,
    ) -> Result<AuthorizationsSummary, FetchError>;

    async fn get_file(&self, id: &FileId) -> Result<StoredFile, FetchError>;

    async fn get_settings(&self) -> Result<Settings, FetchError>;

    /// Persist the entire settings draft in one transaction.
    ///
    /// Returns the state the server accepted; on success the store promotes
    /// it to the new baseline.
    async fn save_settings(&self, draft: &Settings) -> Result<Settings, SaveError>;
}
