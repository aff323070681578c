//! The merchant settings aggregate.
//!
//! `Settings` is the flat snapshot shape exchanged with the server: the
//! full object is fetched in one request and saved in one request, because
//! the fields carry interdependent validation (e.g. the purchase-price
//! threshold pair) and are not safely patchable piecemeal.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::SaveError;

/// How often automatic deposits are paid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DepositInterval {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

/// Fraud protection filter aggressiveness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FraudProtectionLevel {
    Basic,
    #[default]
    Standard,
    High,
}

/// The full mutable settings snapshot.
///
/// Field names follow the server's wire names so the struct serializes
/// directly into the save payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Payment method identifiers enabled at checkout.
    pub enabled_payment_method_ids: Vec<String>,
    /// Statement descriptor shown on the customer's bank statement.
    pub account_statement_descriptor: String,
    /// Support address printed on receipts and dispute evidence.
    pub account_business_support_address: String,
    /// Support email printed on receipts.
    pub account_business_support_email: String,
    /// Support phone printed on receipts.
    pub account_business_support_phone: String,
    /// Authorize now, capture later.
    pub is_manual_capture_enabled: bool,
    /// Process events against the sandbox backend.
    pub is_test_mode_enabled: bool,
    /// Allow customers to save cards for reuse.
    pub is_saved_cards_enabled: bool,
    /// Automatic deposit cadence.
    pub deposit_schedule_interval: DepositInterval,
    /// Fraud filter aggressiveness.
    pub fraud_protection_level: FraudProtectionLevel,
    /// Lower bound of the fraud purchase-price check, if enabled.
    pub minimum_purchase_threshold: Option<Decimal>,
    /// Upper bound of the fraud purchase-price check, if enabled.
    pub maximum_purchase_threshold: Option<Decimal>,
}

/// Characters the card networks reject in statement descriptors.
const DESCRIPTOR_FORBIDDEN: [char; 4] = ['<', '>', '"', '\''];

impl Settings {
    /// Cross-field validation run before the save round-trip.
    ///
    /// The server revalidates everything; this catches the cheap failures
    /// locally so a doomed request is never sent. Error keys match the
    /// server's field-keyed validation payload.
    pub fn validate(&self) -> Result<(), SaveError> {
        let descriptor = self.account_statement_descriptor.trim();
        if !(5..=22).contains(&descriptor.chars().count()) {
            return Err(SaveError::validation(
                "account_statement_descriptor",
                "Statement descriptor must be between 5 and 22 characters.",
            ));
        }
        if descriptor.chars().any(|c| DESCRIPTOR_FORBIDDEN.contains(&c)) {
            return Err(SaveError::validation(
                "account_statement_descriptor",
                "Use only latin characters.",
            ));
        }

        if !self.account_business_support_email.is_empty()
            && !self.account_business_support_email.contains('@')
        {
            return Err(SaveError::validation(
                "account_business_support_email",
                "Support email must be a valid email address.",
            ));
        }

        if let (Some(min), Some(max)) =
            (self.minimum_purchase_threshold, self.maximum_purchase_threshold)
        {
            if min >= max {
                return Err(SaveError::validation(
                    "purchase_price_threshold",
                    "Maximum purchase price must be greater than the minimum purchase price.",
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    fn valid_settings() -> Settings {
        Settings {
            enabled_payment_method_ids: vec!["card".into()],
            account_statement_descriptor: "MYSTORE".into(),
            account_business_support_address: "123 Main St".into(),
            account_business_support_email: "help@mystore.test".into(),
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

    #[test]
    fn valid_settings_pass() {
        assert!(valid_settings().validate().is_ok());
    }

    #[test]
    fn short_descriptor_is_rejected() {
        let mut settings = valid_settings();
        settings.account_statement_descriptor = "ab".into();
        let err = settings.validate().unwrap_err();
        assert!(err.field_message("account_statement_descriptor").is_some());
    }

    #[test]
    fn forbidden_descriptor_characters_are_rejected() {
        let mut settings = valid_settings();
        settings.account_statement_descriptor = "MY<STORE>".into();
        let err = settings.validate().unwrap_err();
        assert_eq!(
            err.field_message("account_statement_descriptor"),
            Some("Use only latin characters.")
        );
    }

    #[test]
    fn threshold_ordering_is_enforced() {
        let mut settings = valid_settings();
        settings.minimum_purchase_threshold = Some(dec!(100));
        settings.maximum_purchase_threshold = Some(dec!(50));
        let err = settings.validate().unwrap_err();
        assert!(err.field_message("purchase_price_threshold").is_some());
    }

    #[test]
    fn single_threshold_is_allowed() {
        let mut settings = valid_settings();
        settings.minimum_purchase_threshold = Some(dec!(100));
        assert!(settings.validate().is_ok());
    }
}
