//! Disputes domain.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{ChargeId, DisputeId};
use super::money::Amount;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisputeStatus {
    NeedsResponse,
    UnderReview,
    Won,
    Lost,
}

/// A chargeback raised against one of the merchant's charges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dispute {
    pub id: DisputeId,
    pub charge_id: ChargeId,
    pub amount: Amount,
    pub status: DisputeStatus,
    pub reason: String,
    pub due_by: Option<DateTime<Utc>>,
}

/// Pagination and filters for the disputes list and summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisputesQuery {
    pub page: u32,
    pub per_page: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_is: Option<DisputeStatus>,
}

impl Default for DisputesQuery {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 25,
            status_is: None,
        }
    }
}

/// One page of disputes plus the unpaginated total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisputesList {
    pub disputes: Vec<Dispute>,
    pub total_count: usize,
}

/// Aggregate figures for the current filter set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisputesSummary {
    pub count: usize,
    pub total: Amount,
}
