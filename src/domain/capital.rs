//! Capital (merchant financing) domain.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::money::Amount;

/// One financing offer the merchant accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapitalLoan {
    pub id: String,
    pub funded_on: NaiveDate,
    pub total_amount: Amount,
    pub fee_amount: Amount,
    pub paid_amount: Amount,
    pub is_active: bool,
}

/// All loans, newest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoansList {
    pub loans: Vec<CapitalLoan>,
}

/// Repayment progress of the currently active loan, if any.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveLoanSummary {
    pub has_active_loan: bool,
    pub total: Option<Amount>,
    pub repaid: Option<Amount>,
}
