//! Domain identifier types with proper encapsulation.
//!
//! Each server-side object the store caches is addressed by its own newtype.
//! The inner `String` is private so all construction goes through the defined
//! constructors.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! string_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            /// Create a new identifier from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self::new(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::new(s)
            }
        }
    };
}

string_id! {
    /// Charge identifier (`ch_...`).
    ChargeId
}

string_id! {
    /// Payment intent identifier (`pi_...`).
    PaymentIntentId
}

string_id! {
    /// Dispute identifier (`dp_...`).
    DisputeId
}

string_id! {
    /// Deposit (payout) identifier (`po_...`).
    DepositId
}

string_id! {
    /// Uploaded file identifier (`file_...`).
    FileId
}

string_id! {
    /// Card reader identifier (`tmr_...`).
    ReaderId
}

string_id! {
    /// Account document identifier.
    DocumentId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_through_display() {
        let id = ChargeId::new("ch_123");
        assert_eq!(id.as_str(), "ch_123");
        assert_eq!(id.to_string(), "ch_123");
        assert_eq!(ChargeId::from("ch_123"), id);
    }
}
