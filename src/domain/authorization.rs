//! Uncaptured authorizations domain.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{ChargeId, PaymentIntentId};
use super::money::Amount;

/// A charge authorized but not yet captured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Authorization {
    pub charge_id: ChargeId,
    pub payment_intent_id: PaymentIntentId,
    pub amount: Amount,
    pub authorized_on: DateTime<Utc>,
    /// Uncaptured authorizations expire; capture must happen before this.
    pub capture_by: DateTime<Utc>,
    pub customer_name: Option<String>,
}

/// Pagination for the authorizations list and summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthorizationsQuery {
    pub page: u32,
    pub per_page: u32,
}

impl Default for AuthorizationsQuery {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 25,
        }
    }
}

/// One page of authorizations plus the unpaginated total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorizationsList {
    pub authorizations: Vec<Authorization>,
    pub total_count: usize,
}

/// Aggregate figures for all uncaptured authorizations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorizationsSummary {
    pub count: usize,
    pub total: Amount,
}
