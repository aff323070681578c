//! Canonical domain values for tests.

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use crate::domain::deposit::{Deposit, DepositStatus, DepositsList};
use crate::domain::dispute::{Dispute, DisputeStatus, DisputesList};
use crate::domain::ids::{ChargeId, DepositId, DisputeId};
use crate::domain::money::Amount;
use crate::domain::settings::{DepositInterval, FraudProtectionLevel, Settings};

/// A valid settings snapshot with a single enabled payment method.
pub fn settings() -> Settings {
    Settings {
        enabled_payment_method_ids: vec!["card".into()],
        account_statement_descriptor: "OLDSTORE".into(),
        account_business_support_address: "123 Main St".into(),
        account_business_support_email: "help@store.test".into(),
        account_business_support_phone: "+15550100".into(),
        is_manual_capture_enabled: false,
        is_test_mode_enabled: false,
        is_saved_cards_enabled: true,
        deposit_schedule_interval: DepositInterval::Daily,
        fraud_protection_level: FraudProtectionLevel::Standard,
        minimum_purchase_threshold: None,
        maximum_purchase_threshold: None,
    }
}

pub fn deposit(id: &str) -> Deposit {
    Deposit {
        id: DepositId::new(id),
        date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap_or_default(),
        status: DepositStatus::Paid,
        amount: Amount::new(dec!(125.40), "usd"),
        bank_account: "STRIPE TEST BANK •••• 6789".into(),
    }
}

pub fn deposits_list(ids: &[&str]) -> DepositsList {
    DepositsList {
        deposits: ids.iter().map(|id| deposit(id)).collect(),
        total_count: ids.len(),
    }
}

pub fn dispute(id: &str) -> Dispute {
    Dispute {
        id: DisputeId::new(id),
        charge_id: ChargeId::new("ch_1"),
        amount: Amount::new(dec!(42.00), "usd"),
        status: DisputeStatus::NeedsResponse,
        reason: "fraudulent".into(),
        due_by: None,
    }
}

pub fn disputes_list(ids: &[&str]) -> DisputesList {
    DisputesList {
        disputes: ids.iter().map(|id| dispute(id)).collect(),
        total_count: ids.len(),
    }
}
