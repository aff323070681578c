//! Payment intents domain.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{ChargeId, PaymentIntentId};
use super::money::Amount;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentIntentStatus {
    RequiresCapture,
    Processing,
    Succeeded,
    Canceled,
}

/// One payment attempt, possibly spanning several charges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentIntent {
    pub id: PaymentIntentId,
    pub amount: Amount,
    pub status: PaymentIntentStatus,
    pub created: DateTime<Utc>,
    pub latest_charge_id: Option<ChargeId>,
}
