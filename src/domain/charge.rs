//! Charges domain.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{ChargeId, PaymentIntentId};
use super::money::Amount;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChargeStatus {
    Succeeded,
    Pending,
    Failed,
}

/// A single captured or attempted charge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Charge {
    pub id: ChargeId,
    pub payment_intent_id: Option<PaymentIntentId>,
    pub amount: Amount,
    pub status: ChargeStatus,
    pub payment_method_type: String,
    pub created: DateTime<Utc>,
    pub refunded: bool,
}
