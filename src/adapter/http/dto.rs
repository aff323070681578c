//! Wire shapes specific to the HTTP adapter.
//!
//! Domain types serialize directly to their endpoint payloads; the only
//! adapter-specific shape is the server's validation error envelope.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

use crate::error::{FieldError, SaveError};

/// The server's rejected-save envelope:
/// `{ "data": { "details": { "<field>": { "message": ... } } } }`.
#[derive(Debug, Deserialize)]
pub struct SaveErrorBody {
    pub data: SaveErrorData,
}

#[derive(Debug, Deserialize)]
pub struct SaveErrorData {
    pub details: HashMap<String, FieldError>,
}

/// Parse a `4xx` body into a structured validation error, if it matches
/// the envelope; otherwise fall back to a plain status error.
pub fn parse_save_error(status: u16, body: &str) -> SaveError {
    if let Ok(envelope) = serde_json::from_str::<SaveErrorBody>(body) {
        return SaveError::Validation {
            details: envelope.data.details,
        };
    }

    // Some error paths return a bare message instead of the envelope.
    let message = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(String::from))
        .unwrap_or_else(|| body.to_string());

    SaveError::Status { status, message }
}

/// Flatten a serializable query object into URL query pairs.
///
/// `null` members are dropped and array members become repeated
/// `key[]=value` pairs, matching the list endpoints' filter syntax.
pub fn query_pairs<A: serde::Serialize>(args: &A) -> Vec<(String, String)> {
    let value = serde_json::to_value(args).unwrap_or(Value::Null);
    let mut pairs = Vec::new();
    if let Value::Object(map) = value {
        for (key, member) in map {
            match member {
                Value::Null => {}
                Value::Array(items) => {
                    for item in items {
                        pairs.push((format!("{key}[]"), scalar(item)));
                    }
                }
                other => pairs.push((key, scalar(other))),
            }
        }
    }
    pairs
}

fn scalar(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_envelope_is_parsed() {
        let body = r#"{
            "data": {
                "details": {
                    "account_statement_descriptor": { "message": "Use only latin characters." }
                }
            }
        }"#;
        let err = parse_save_error(400, body);
        assert_eq!(
            err.field_message("account_statement_descriptor"),
            Some("Use only latin characters.")
        );
    }

    #[test]
    fn non_envelope_body_falls_back_to_status() {
        let err = parse_save_error(500, "internal error");
        assert_eq!(
            err,
            SaveError::Status {
                status: 500,
                message: "internal error".into()
            }
        );
    }

    #[test]
    fn bare_message_body_is_extracted() {
        let err = parse_save_error(403, r#"{"message": "forbidden"}"#);
        assert_eq!(
            err,
            SaveError::Status {
                status: 403,
                message: "forbidden".into()
            }
        );
    }

    #[test]
    fn query_pairs_flatten_arrays_and_drop_nulls() {
        use crate::domain::transaction::TransactionsQuery;

        let query = TransactionsQuery {
            search: vec!["alice".into(), "bob".into()],
            ..TransactionsQuery::default()
        };
        let pairs = query_pairs(&query);
        assert!(pairs.contains(&("page".into(), "1".into())));
        assert!(pairs.contains(&("search[]".into(), "alice".into())));
        assert!(pairs.contains(&("search[]".into(), "bob".into())));
        assert!(!pairs.iter().any(|(k, _)| k == "type_is"));
    }
}
