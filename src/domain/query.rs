//! Cache query keys.
//!
//! Every resolver memoizes per `(selector, arguments)` pair. Arguments are
//! serialized into a canonical form so that two queries that differ only in
//! field order or filter order produce the same key and share one cache
//! entry (and one in-flight request).

use serde::Serialize;
use serde_json::Value;

/// A canonicalized cache key: selector name plus argument serialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey(String);

impl QueryKey {
    /// Build a key from a selector name and a serializable argument object.
    ///
    /// Object keys are sorted recursively, `null` members are dropped, and
    /// arrays of primitives (filter lists) are sorted, so the key is stable
    /// under reordering.
    pub fn new<A: Serialize>(selector: &str, args: &A) -> Self {
        let value = serde_json::to_value(args).unwrap_or(Value::Null);
        let rendered = if value.is_null() {
            String::new()
        } else {
            canonical_json(&value)
        };
        Self(format!("{selector}({rendered})"))
    }

    /// A key for a selector that takes no arguments.
    #[must_use]
    pub fn bare(selector: &str) -> Self {
        Self(format!("{selector}()"))
    }

    /// Get the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for QueryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Deterministic JSON rendering: sorted object keys, sorted primitive
/// arrays, `null` members elided.
fn canonical_json(value: &Value) -> String {
    match value {
        Value::Object(map) => {
            let mut keys: Vec<&String> = map
                .iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, _)| k)
                .collect();
            keys.sort();
            let members: Vec<String> = keys
                .into_iter()
                .map(|k| format!("{}:{}", Value::String(k.clone()), canonical_json(&map[k])))
                .collect();
            format!("{{{}}}", members.join(","))
        }
        Value::Array(items) => {
            let mut rendered: Vec<String> = items.iter().map(canonical_json).collect();
            // Filter lists are order-insensitive; arrays of objects keep
            // their order since position can be meaningful there.
            if items.iter().all(|v| !v.is_object() && !v.is_array()) {
                rendered.sort();
            }
            format!("[{}]", rendered.join(","))
        }
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use super::*;

    #[derive(Serialize)]
    struct Filters {
        page: u32,
        status_is: Option<String>,
        search: Vec<String>,
    }

    #[test]
    fn keys_are_order_independent() {
        let a = QueryKey::new(
            "transactions_list",
            &Filters {
                page: 1,
                status_is: None,
                search: vec!["b".into(), "a".into()],
            },
        );
        let b = QueryKey::new(
            "transactions_list",
            &Filters {
                page: 1,
                status_is: None,
                search: vec!["a".into(), "b".into()],
            },
        );
        assert_eq!(a, b);
    }

    #[test]
    fn none_and_absent_fields_collide() {
        #[derive(Serialize)]
        struct Bare {
            page: u32,
            search: Vec<String>,
        }

        let with_none = QueryKey::new(
            "transactions_list",
            &Filters {
                page: 1,
                status_is: None,
                search: vec![],
            },
        );
        let without = QueryKey::new(
            "transactions_list",
            &Bare {
                page: 1,
                search: vec![],
            },
        );
        assert_eq!(with_none, without);
    }

    #[test]
    fn different_selectors_never_collide() {
        let a = QueryKey::bare("deposits_list");
        let b = QueryKey::bare("disputes_list");
        assert_ne!(a, b);
    }

    #[test]
    fn bare_key_matches_unit_args() {
        assert_eq!(QueryKey::new("readers_list", &()), QueryKey::bare("readers_list"));
        assert_eq!(QueryKey::bare("readers_list").as_str(), "readers_list()");
    }
}
