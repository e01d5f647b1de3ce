//! Borrower records
//!
//! A record is an open mapping from field name to JSON value. There is no
//! fixed schema; fields seen in practice include `name`, `email` and `phone`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// The full ordered set of records returned by a provider
pub type Collection = Vec<Record>;

/// One borrower entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    /// Create an empty record
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Set a field, returning the record (builder style)
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(field.into(), value.into());
        self
    }

    /// Look up a field value
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Iterate over field values in key order
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.0.values()
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the record has no fields
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Parse a JSON array of objects into a collection
pub fn parse_collection(json: &str) -> serde_json::Result<Collection> {
    serde_json::from_str(json)
}

/// Pretty-print a collection with two-space indentation
///
/// Integral floats are written without a fractional part, so `1.0` prints
/// as `1`, matching how [`stringify`] renders them.
pub fn to_pretty_json(records: &[Record]) -> serde_json::Result<String> {
    let mut value = serde_json::to_value(records)?;
    normalize_numbers(&mut value);
    serde_json::to_string_pretty(&value)
}

// Integers beyond 2^53 are not exact in f64, so those keep their float form
fn normalize_numbers(value: &mut Value) {
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;
    match value {
        Value::Number(n) if n.is_f64() => {
            if let Some(f) = n.as_f64() {
                if f.fract() == 0.0 && f.abs() <= MAX_EXACT {
                    *n = Number::from(f as i64);
                }
            }
        }
        Value::Array(items) => items.iter_mut().for_each(normalize_numbers),
        Value::Object(map) => map.values_mut().for_each(normalize_numbers),
        _ => {}
    }
}

/// Render a value as text, the way a loosely-typed runtime would print it
///
/// Strings are returned as-is, integral floats lose their `.0`, arrays are
/// joined with commas and objects collapse to `[object Object]`.
pub fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => match (n.as_i64(), n.as_u64(), n.as_f64()) {
            (Some(i), _, _) => i.to_string(),
            (None, Some(u), _) => u.to_string(),
            (None, None, Some(f)) => format_float(f),
            _ => n.to_string(),
        },
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => stringify(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

fn format_float(f: f64) -> String {
    if f == 0.0 {
        // covers -0.0
        "0".to_string()
    } else if f.fract() == 0.0 && f.abs() < 1e21 {
        format!("{f:.0}")
    } else {
        f.to_string()
    }
}

/// Whether a value counts as "not set": `false`, `null`, zero or `""`
///
/// Arrays and objects are never falsy, even when empty.
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().map(|f| f == 0.0).unwrap_or(false),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_builder_and_get() {
        let r = Record::new().with("name", "Alice").with("age", 30);
        assert_eq!(r.len(), 2);
        assert_eq!(r.get("name"), Some(&json!("Alice")));
        assert_eq!(r.get("missing"), None);
    }

    #[test]
    fn test_record_serializes_as_plain_object() {
        let r = Record::new().with("name", "Bob");
        assert_eq!(serde_json::to_value(&r).unwrap(), json!({"name": "Bob"}));
    }

    #[test]
    fn test_parse_collection_preserves_order() {
        let c = parse_collection(r#"[{"name":"B"},{"name":"A"},{"name":"B"}]"#).unwrap();
        let names: Vec<_> = c.iter().map(|r| r.get("name").unwrap().clone()).collect();
        assert_eq!(names, vec![json!("B"), json!("A"), json!("B")]);
    }

    #[test]
    fn test_parse_collection_rejects_non_array() {
        assert!(parse_collection(r#"{"name":"A"}"#).is_err());
        assert!(parse_collection("not json").is_err());
    }

    #[test]
    fn test_stringify_scalars() {
        assert_eq!(stringify(&json!("Hi")), "Hi");
        assert_eq!(stringify(&json!(42)), "42");
        assert_eq!(stringify(&json!(-7)), "-7");
        assert_eq!(stringify(&json!(1.5)), "1.5");
        assert_eq!(stringify(&json!(2.0)), "2");
        assert_eq!(stringify(&json!(-0.0)), "0");
        assert_eq!(stringify(&json!(true)), "true");
        assert_eq!(stringify(&Value::Null), "null");
    }

    #[test]
    fn test_stringify_nested() {
        assert_eq!(stringify(&json!([1, "a", null, true])), "1,a,,true");
        assert_eq!(stringify(&json!({"k": "v"})), "[object Object]");
        assert_eq!(stringify(&json!([])), "");
    }

    #[test]
    fn test_pretty_json_drops_integral_fraction() {
        let records = vec![Record::new()
            .with("loanAmount", 1.0)
            .with("rate", 2.5)
            .with("history", json!([3.0, {"paid": -0.0}]))];
        let text = to_pretty_json(&records).unwrap();

        assert!(text.contains("\"loanAmount\": 1,"));
        assert!(text.contains("\"rate\": 2.5"));
        assert!(text.contains("    3,"));
        assert!(text.contains("\"paid\": 0"));
        assert!(!text.contains(".0"));
    }

    #[test]
    fn test_pretty_json_matches_plain_output_for_integers() {
        let records = vec![Record::new().with("name", "Alice").with("id", 7)];
        assert_eq!(
            to_pretty_json(&records).unwrap(),
            serde_json::to_string_pretty(&records).unwrap()
        );
    }

    #[test]
    fn test_is_falsy() {
        assert!(is_falsy(&json!(0)));
        assert!(is_falsy(&json!(0.0)));
        assert!(is_falsy(&json!("")));
        assert!(is_falsy(&json!(false)));
        assert!(is_falsy(&Value::Null));

        assert!(!is_falsy(&json!("0")));
        assert!(!is_falsy(&json!(1)));
        assert!(!is_falsy(&json!(true)));
        assert!(!is_falsy(&json!([])));
        assert!(!is_falsy(&json!({})));
    }
}
