//! Payment timeline domain.
//!
//! The timeline is the per-intent event history shown on the payment
//! details page, keyed by the payment intent identifier.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::PaymentIntentId;
use super::money::Amount;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimelineEventType {
    Authorized,
    Captured,
    PartialRefund,
    FullRefund,
    DisputeOpened,
    DisputeWon,
    DisputeLost,
}

/// One event in a payment's history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEvent {
    #[serde(rename = "type")]
    pub event_type: TimelineEventType,
    pub datetime: DateTime<Utc>,
    pub amount: Option<Amount>,
}

/// The full event history of one payment intent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    pub intent_id: PaymentIntentId,
    pub events: Vec<TimelineEvent>,
}
