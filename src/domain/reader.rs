//! In-person card readers domain.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::ReaderId;
use super::money::Amount;

/// A registered terminal device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardReader {
    pub id: ReaderId,
    pub device_type: String,
    pub label: String,
    pub is_active: bool,
}

/// Charge totals for one reader on one day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReaderChargesQuery {
    pub reader_id: ReaderId,
    pub date: NaiveDate,
}

/// Aggregate charge figures for a reader/day pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReaderChargesSummary {
    pub count: usize,
    pub total: Amount,
    pub fees: Amount,
}
