//! Deposits (payouts) domain.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::DepositId;
use super::money::Amount;

/// Payout state reported by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepositStatus {
    Estimated,
    Pending,
    InTransit,
    Paid,
    Failed,
}

/// A single payout to the merchant's bank account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deposit {
    pub id: DepositId,
    pub date: NaiveDate,
    pub status: DepositStatus,
    pub amount: Amount,
    pub bank_account: String,
}

/// Pagination and filters for the deposits list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepositsQuery {
    pub page: u32,
    pub per_page: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_is: Option<DepositStatus>,
}

impl Default for DepositsQuery {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 25,
            status_is: None,
        }
    }
}

/// One page of deposits plus the unpaginated total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepositsList {
    pub deposits: Vec<Deposit>,
    pub total_count: usize,
}

/// Account-level balances and schedule shown on the deposits landing page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepositsOverview {
    pub last_deposit: Option<Deposit>,
    pub next_deposit: Option<Deposit>,
    pub pending_balance: Amount,
    pub available_balance: Amount,
}
