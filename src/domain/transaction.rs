//! Transactions domain.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::ids::PaymentIntentId;
use super::money::Amount;

/// What produced the balance movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    Charge,
    Refund,
    Dispute,
    DisputeReversal,
    Fee,
}

/// One row of the balance transaction history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub transaction_id: String,
    pub date: DateTime<Utc>,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub amount: Amount,
    pub fees: Amount,
    pub net: Amount,
    pub customer_name: Option<String>,
    pub payment_intent_id: Option<PaymentIntentId>,
}

/// Pagination and filters for the transactions list and summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionsQuery {
    pub page: u32,
    pub per_page: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_is: Option<TransactionType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_after: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_before: Option<NaiveDate>,
    /// Free-text terms; order-insensitive for cache keying.
    pub search: Vec<String>,
}

impl Default for TransactionsQuery {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 25,
            type_is: None,
            date_after: None,
            date_before: None,
            search: Vec::new(),
        }
    }
}

/// One page of transactions plus the unpaginated total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionsList {
    pub transactions: Vec<Transaction>,
    pub total_count: usize,
}

/// Aggregate figures for the current filter set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionsSummary {
    pub count: usize,
    pub total: Amount,
    pub fees: Amount,
    pub net: Amount,
}
