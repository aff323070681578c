//! Monetary amounts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A decimal amount in a named currency.
///
/// Amounts are carried exactly as the server reports them; the store never
/// does currency conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amount {
    pub value: Decimal,
    pub currency: String,
}

impl Amount {
    /// Create a new amount.
    pub fn new(value: Decimal, currency: impl Into<String>) -> Self {
        Self {
            value,
            currency: currency.into(),
        }
    }

    /// A zero amount in the given currency.
    pub fn zero(currency: impl Into<String>) -> Self {
        Self::new(Decimal::ZERO, currency)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn zero_has_zero_value() {
        let amount = Amount::zero("usd");
        assert_eq!(amount.value, dec!(0));
        assert_eq!(amount.currency, "usd");
    }
}
