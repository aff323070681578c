//! Per-domain facades.
//!
//! Each facade bundles the handles for one server domain and wires their
//! fetch closures to the shared backend. Domains are independent: no
//! facade reads another's cache, and consumers that need data from two
//! domains compose above the store.

use std::sync::Arc;

use futures_util::FutureExt;

use super::slice::DomainHandle;
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
use crate::domain::timeline::Timeline;
use crate::domain::transaction::{TransactionsList, TransactionsQuery, TransactionsSummary};
use crate::port::Backend;

/// Deposits (payouts).
pub struct Deposits {
    /// Paginated payout rows.
    pub list: DomainHandle<DepositsQuery, DepositsList>,
    /// Balances and next scheduled payout.
    pub overview: DomainHandle<(), DepositsOverview>,
}

impl Deposits {
    pub(crate) fn new(backend: &Arc<dyn Backend>) -> Self {
        let b = Arc::clone(backend);
        let list = DomainHandle::new("deposits_list", move |q: DepositsQuery| {
            let b = Arc::clone(&b);
            async move { b.list_deposits(&q).await }.boxed()
        });
        let b = Arc::clone(backend);
        let overview = DomainHandle::new("deposits_overview", move |(): ()| {
            let b = Arc::clone(&b);
            async move { b.deposits_overview().await }.boxed()
        });
        Self { list, overview }
    }
}

/// Balance transaction history.
pub struct Transactions {
    pub list: DomainHandle<TransactionsQuery, TransactionsList>,
    pub summary: DomainHandle<TransactionsQuery, TransactionsSummary>,
}

impl Transactions {
    pub(crate) fn new(backend: &Arc<dyn Backend>) -> Self {
        let b = Arc::clone(backend);
        let list = DomainHandle::new("transactions_list", move |q: TransactionsQuery| {
            let b = Arc::clone(&b);
            async move { b.list_transactions(&q).await }.boxed()
        });
        let b = Arc::clone(backend);
        let summary = DomainHandle::new("transactions_summary", move |q: TransactionsQuery| {
            let b = Arc::clone(&b);
            async move { b.transactions_summary(&q).await }.boxed()
        });
        Self { list, summary }
    }
}

/// Individual charges.
pub struct Charges {
    pub get: DomainHandle<ChargeId, Charge>,
}

impl Charges {
    pub(crate) fn new(backend: &Arc<dyn Backend>) -> Self {
        let b = Arc::clone(backend);
        let get = DomainHandle::new("charge", move |id: ChargeId| {
            let b = Arc::clone(&b);
            async move { b.get_charge(&id).await }.boxed()
        });
        Self { get }
    }
}

/// Per-intent payment event history.
pub struct Timelines {
    pub for_intent: DomainHandle<PaymentIntentId, Timeline>,
}

impl Timelines {
    pub(crate) fn new(backend: &Arc<dyn Backend>) -> Self {
        let b = Arc::clone(backend);
        let for_intent = DomainHandle::new("timeline", move |id: PaymentIntentId| {
            let b = Arc::clone(&b);
            async move { b.get_timeline(&id).await }.boxed()
        });
        Self { for_intent }
    }
}

/// Chargebacks.
pub struct Disputes {
    pub list: DomainHandle<DisputesQuery, DisputesList>,
    pub summary: DomainHandle<DisputesQuery, DisputesSummary>,
}

impl Disputes {
    pub(crate) fn new(backend: &Arc<dyn Backend>) -> Self {
        let b = Arc::clone(backend);
        let list = DomainHandle::new("disputes_list", move |q: DisputesQuery| {
            let b = Arc::clone(&b);
            async move { b.list_disputes(&q).await }.boxed()
        });
        let b = Arc::clone(backend);
        let summary = DomainHandle::new("disputes_summary", move |q: DisputesQuery| {
            let b = Arc::clone(&b);
            async move { b.disputes_summary(&q).await }.boxed()
        });
        Self { list, summary }
    }
}

/// In-person card readers.
pub struct Readers {
    pub list: DomainHandle<(), Vec<CardReader>>,
    pub charge_summary: DomainHandle<ReaderChargesQuery, ReaderChargesSummary>,
}

impl Readers {
    pub(crate) fn new(backend: &Arc<dyn Backend>) -> Self {
        let b = Arc::clone(backend);
        let list = DomainHandle::new("readers_list", move |(): ()| {
            let b = Arc::clone(&b);
            async move { b.list_readers().await }.boxed()
        });
        let b = Arc::clone(backend);
        let charge_summary =
            DomainHandle::new("readers_charge_summary", move |q: ReaderChargesQuery| {
                let b = Arc::clone(&b);
                async move { b.readers_charge_summary(&q).await }.boxed()
            });
        Self {
            list,
            charge_summary,
        }
    }
}

/// Merchant financing.
pub struct Capital {
    pub loans: DomainHandle<(), LoansList>,
    pub summary: DomainHandle<(), ActiveLoanSummary>,
}

impl Capital {
    pub(crate) fn new(backend: &Arc<dyn Backend>) -> Self {
        let b = Arc::clone(backend);
        let loans = DomainHandle::new("capital_loans", move |(): ()| {
            let b = Arc::clone(&b);
            async move { b.capital_loans().await }.boxed()
        });
        let b = Arc::clone(backend);
        let summary = DomainHandle::new("active_loan_summary", move |(): ()| {
            let b = Arc::clone(&b);
            async move { b.active_loan_summary().await }.boxed()
        });
        Self { loans, summary }
    }
}

/// Account documents.
pub struct Documents {
    pub list: DomainHandle<DocumentsQuery, DocumentsList>,
    pub summary: DomainHandle<DocumentsQuery, DocumentsSummary>,
}

impl Documents {
    pub(crate) fn new(backend: &Arc<dyn Backend>) -> Self {
        let b = Arc::clone(backend);
        let list = DomainHandle::new("documents_list", move |q: DocumentsQuery| {
            let b = Arc::clone(&b);
            async move { b.list_documents(&q).await }.boxed()
        });
        let b = Arc::clone(backend);
        let summary = DomainHandle::new("documents_summary", move |q: DocumentsQuery| {
            let b = Arc::clone(&b);
            async move { b.documents_summary(&q).await }.boxed()
        });
        Self { list, summary }
    }
}

/// Payment intents.
pub struct PaymentIntents {
    pub get: DomainHandle<PaymentIntentId, PaymentIntent>,
}

impl PaymentIntents {
    pub(crate) fn new(backend: &Arc<dyn Backend>) -> Self {
        let b = Arc::clone(backend);
        let get = DomainHandle::new("payment_intent", move |id: PaymentIntentId| {
            let b = Arc::clone(&b);
            async move { b.get_payment_intent(&id).await }.boxed()
        });
        Self { get }
    }
}

/// Uncaptured authorizations.
pub struct Authorizations {
    pub list: DomainHandle<AuthorizationsQuery, AuthorizationsList>,
    pub summary: DomainHandle<AuthorizationsQuery, AuthorizationsSummary>,
}

impl Authorizations {
    pub(crate) fn new(backend: &Arc<dyn Backend>) -> Self {
        let b = Arc::clone(backend);
        let list = DomainHandle::new("authorizations_list", move |q: AuthorizationsQuery| {
            let b = Arc::clone(&b);
            async move { b.list_authorizations(&q).await }.boxed()
        });
        let b = Arc::clone(backend);
        let summary =
            DomainHandle::new("authorizations_summary", move |q: AuthorizationsQuery| {
                let b = Arc::clone(&b);
                async move { b.authorizations_summary(&q).await }.boxed()
            });
        Self { list, summary }
    }
}

/// Uploaded files.
pub struct Files {
    pub get: DomainHandle<FileId, StoredFile>,
}

impl Files {
    pub(crate) fn new(backend: &Arc<dyn Backend>) -> Self {
        let b = Arc::clone(backend);
        let get = DomainHandle::new("file", move |id: FileId| {
            let b = Arc::clone(&b);
            async move { b.get_file(&id).await }.boxed()
        });
        Self { get }
    }
}
