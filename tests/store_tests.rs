//! Integration tests for the store aggregator: shared state across clones,
//! domain independence, and end-to-end resolution of every domain.

mod support;

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use paystore::domain::authorization::{
    Authorization, AuthorizationsList, AuthorizationsQuery, AuthorizationsSummary,
};
use paystore::domain::capital::{ActiveLoanSummary, CapitalLoan, LoansList};
use paystore::domain::charge::{Charge, ChargeStatus};
use paystore::domain::deposit::{DepositsOverview, DepositsQuery};
use paystore::domain::dispute::DisputesQuery;
use paystore::domain::document::{
    Document, DocumentType, DocumentsList, DocumentsQuery, DocumentsSummary,
};
use paystore::domain::file::{FilePurpose, StoredFile};
use paystore::domain::ids::{ChargeId, DocumentId, FileId, PaymentIntentId, ReaderId};
use paystore::domain::money::Amount;
use paystore::domain::payment_intent::{PaymentIntent, PaymentIntentStatus};
use paystore::domain::reader::{CardReader, ReaderChargesQuery, ReaderChargesSummary};
use paystore::domain::status::ResolutionStatus;
use paystore::domain::timeline::{Timeline, TimelineEvent, TimelineEventType};
use paystore::testkit::MockBackend;
use rust_decimal_macros::dec;

use support::{fixtures, store_with};

fn when(s: &str) -> DateTime<Utc> {
    s.parse().unwrap()
}

#[tokio::test]
async fn clones_share_cache_state() {
    let backend = Arc::new(MockBackend::new());
    backend.set_response("list_deposits", &fixtures::deposits_list(&["po_1"]));
    let store = store_with(&backend);
    let clone = store.clone();

    let query = DepositsQuery::default();
    store.deposits().list.resolve(&query).await.unwrap();

    // The clone sees the resolved entry without a second request.
    assert_eq!(
        clone.deposits().list.status(&query),
        ResolutionStatus::Resolved
    );
    clone.deposits().list.resolve(&query).await.unwrap();
    assert_eq!(backend.calls("list_deposits"), 1);

    // And an invalidation through the clone is visible to the original.
    clone.deposits().list.invalidate(&query);
    assert_eq!(
        store.deposits().list.status(&query),
        ResolutionStatus::Unresolved
    );
}

#[tokio::test]
async fn a_failing_domain_leaves_others_untouched() {
    let backend = Arc::new(MockBackend::new());
    backend.set_response("list_deposits", &fixtures::deposits_list(&["po_1"]));
    // No disputes response scripted, so that domain fails.
    let store = store_with(&backend);

    store
        .disputes()
        .list
        .resolve(&DisputesQuery::default())
        .await
        .unwrap_err();

    let deposits = store
        .deposits()
        .list
        .resolve(&DepositsQuery::default())
        .await
        .unwrap();
    assert_eq!(deposits.total_count, 1);
    assert_eq!(
        store.disputes().list.status(&DisputesQuery::default()),
        ResolutionStatus::Failed
    );
    assert_eq!(
        store.deposits().list.status(&DepositsQuery::default()),
        ResolutionStatus::Resolved
    );

    // The failed domain recovers on refetch without disturbing the other.
    backend.set_response("list_disputes", &fixtures::disputes_list(&["dp_1"]));
    let disputes = store
        .disputes()
        .list
        .refetch(&DisputesQuery::default())
        .await
        .unwrap();
    assert_eq!(disputes.disputes[0].id.as_str(), "dp_1");
    assert_eq!(backend.calls("list_deposits"), 1);
}

#[tokio::test]
async fn every_domain_resolves_through_the_store() {
    let backend = Arc::new(MockBackend::new());
    let store = store_with(&backend);

    backend.set_response(
        "deposits_overview",
        &DepositsOverview {
            last_deposit: Some(fixtures::deposit("po_1")),
            next_deposit: None,
            pending_balance: Amount::new(dec!(310.00), "usd"),
            available_balance: Amount::new(dec!(125.40), "usd"),
        },
    );
    let overview = store.deposits().overview.resolve(&()).await.unwrap();
    assert_eq!(overview.pending_balance.value, dec!(310.00));

    backend.set_response(
        "get_charge",
        &Charge {
            id: ChargeId::new("ch_1"),
            payment_intent_id: Some(PaymentIntentId::new("pi_1")),
            amount: Amount::new(dec!(20.00), "usd"),
            status: ChargeStatus::Succeeded,
            payment_method_type: "card".into(),
            created: when("2024-03-01T12:00:00Z"),
            refunded: false,
        },
    );
    let charge = store.charges().get.resolve(&ChargeId::new("ch_1")).await.unwrap();
    assert_eq!(charge.status, ChargeStatus::Succeeded);

    backend.set_response(
        "get_timeline",
        &Timeline {
            intent_id: PaymentIntentId::new("pi_1"),
            events: vec![TimelineEvent {
                event_type: TimelineEventType::Captured,
                datetime: when("2024-03-01T12:00:05Z"),
                amount: Some(Amount::new(dec!(20.00), "usd")),
            }],
        },
    );
    let timeline = store
        .timelines()
        .for_intent
        .resolve(&PaymentIntentId::new("pi_1"))
        .await
        .unwrap();
    assert_eq!(timeline.events.len(), 1);

    backend.set_response(
        "list_readers",
        &vec![CardReader {
            id: ReaderId::new("tmr_1"),
            device_type: "bbpos_wisepos_e".into(),
            label: "Front counter".into(),
            is_active: true,
        }],
    );
    let readers = store.readers().list.resolve(&()).await.unwrap();
    assert!(readers[0].is_active);

    backend.set_response(
        "readers_charge_summary",
        &ReaderChargesSummary {
            count: 3,
            total: Amount::new(dec!(61.50), "usd"),
            fees: Amount::new(dec!(1.85), "usd"),
        },
    );
    let reader_query = ReaderChargesQuery {
        reader_id: ReaderId::new("tmr_1"),
        date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
    };
    let summary = store
        .readers()
        .charge_summary
        .resolve(&reader_query)
        .await
        .unwrap();
    assert_eq!(summary.count, 3);

    backend.set_response(
        "capital_loans",
        &LoansList {
            loans: vec![CapitalLoan {
                id: "loan_1".into(),
                funded_on: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
                total_amount: Amount::new(dec!(10000.00), "usd"),
                fee_amount: Amount::new(dec!(1000.00), "usd"),
                paid_amount: Amount::new(dec!(2500.00), "usd"),
                is_active: true,
            }],
        },
    );
    let loans = store.capital().loans.resolve(&()).await.unwrap();
    assert!(loans.loans[0].is_active);

    backend.set_response(
        "active_loan_summary",
        &ActiveLoanSummary {
            has_active_loan: true,
            total: Some(Amount::new(dec!(11000.00), "usd")),
            repaid: Some(Amount::new(dec!(2500.00), "usd")),
        },
    );
    let loan_summary = store.capital().summary.resolve(&()).await.unwrap();
    assert!(loan_summary.has_active_loan);

    backend.set_response(
        "list_documents",
        &DocumentsList {
            documents: vec![Document {
                document_id: DocumentId::new("doc_1"),
                date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                document_type: DocumentType::VatInvoice,
                period_from: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
                period_to: NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
            }],
            total_count: 1,
        },
    );
    backend.set_response("documents_summary", &DocumentsSummary { count: 1 });
    let docs_query = DocumentsQuery::default();
    let documents = store.documents().list.resolve(&docs_query).await.unwrap();
    assert_eq!(documents.total_count, 1);
    let docs_summary = store
        .documents()
        .summary
        .resolve(&docs_query)
        .await
        .unwrap();
    assert_eq!(docs_summary.count, 1);

    backend.set_response(
        "get_payment_intent",
        &PaymentIntent {
            id: PaymentIntentId::new("pi_1"),
            amount: Amount::new(dec!(20.00), "usd"),
            status: PaymentIntentStatus::Succeeded,
            created: when("2024-03-01T12:00:00Z"),
            latest_charge_id: Some(ChargeId::new("ch_1")),
        },
    );
    let intent = store
        .payment_intents()
        .get
        .resolve(&PaymentIntentId::new("pi_1"))
        .await
        .unwrap();
    assert_eq!(intent.status, PaymentIntentStatus::Succeeded);

    backend.set_response(
        "list_authorizations",
        &AuthorizationsList {
            authorizations: vec![Authorization {
                charge_id: ChargeId::new("ch_2"),
                payment_intent_id: PaymentIntentId::new("pi_2"),
                amount: Amount::new(dec!(55.00), "usd"),
                authorized_on: when("2024-03-01T09:00:00Z"),
                capture_by: when("2024-03-08T09:00:00Z"),
                customer_name: Some("Ada Lovelace".into()),
            }],
            total_count: 1,
        },
    );
    backend.set_response(
        "authorizations_summary",
        &AuthorizationsSummary {
            count: 1,
            total: Amount::new(dec!(55.00), "usd"),
        },
    );
    let auth_query = AuthorizationsQuery::default();
    let auths = store
        .authorizations()
        .list
        .resolve(&auth_query)
        .await
        .unwrap();
    assert_eq!(auths.authorizations[0].charge_id.as_str(), "ch_2");
    let auth_summary = store
        .authorizations()
        .summary
        .resolve(&auth_query)
        .await
        .unwrap();
    assert_eq!(auth_summary.count, 1);

    backend.set_response(
        "get_file",
        &StoredFile {
            id: FileId::new("file_1"),
            purpose: FilePurpose::DisputeEvidence,
            filename: "receipt.pdf".into(),
            size: 48_213,
            created: when("2024-03-01T12:30:00Z"),
        },
    );
    let file = store.files().get.resolve(&FileId::new("file_1")).await.unwrap();
    assert_eq!(file.filename, "receipt.pdf");
}
