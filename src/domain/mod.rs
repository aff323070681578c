//! Domain types for the payments admin store.
//!
//! Everything in this module is plain data: entities returned by the server,
//! the typed query objects that key the cache, the settings aggregate, and
//! the tagged per-field draft/baseline state. No I/O happens here.

pub mod authorization;
pub mod capital;
pub mod charge;
pub mod deposit;
pub mod dispute;
pub mod document;
pub mod field;
pub mod file;
pub mod ids;
pub mod money;
pub mod payment_intent;
pub mod query;
pub mod reader;
pub mod settings;
pub mod status;
pub mod timeline;
pub mod transaction;

pub use field::FieldState;
pub use ids::{ChargeId, DepositId, DisputeId, DocumentId, FileId, PaymentIntentId, ReaderId};
pub use money::Amount;
pub use query::QueryKey;
pub use settings::{DepositInterval, FraudProtectionLevel, Settings};
pub use status::ResolutionStatus;
