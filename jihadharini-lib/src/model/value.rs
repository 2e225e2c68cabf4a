//! Value enum for dynamic field values

use std::cmp::Ordering;

use chrono::DateTime;
use chrono::Utc;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

/// A dynamic value that can hold any field type the admin console displays.
///
/// This enum represents all possible values that can be stored in a record
/// field. It's used in [`Record`](super::Record) to store field values
/// dynamically.
///
/// # Example
///
/// ```
/// use jihadharini_lib::model::Value;
///
/// let region = Value::from("Kisumu County");
/// let connections = Value::from(15);
/// let flagged = Value::from(false);
/// let empty = Value::Null;
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Null/empty value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// 32-bit integer.
    Int(i32),
    /// 64-bit integer.
    Long(i64),
    /// 64-bit floating point.
    Float(f64),
    /// Arbitrary precision decimal.
    Decimal(Decimal),
    /// String value.
    String(String),
    /// GUID/UUID value.
    Guid(Uuid),
    /// Date and time with timezone.
    DateTime(DateTime<Utc>),
    /// List of short string tags (e.g. affected regions, project benefits).
    Tags(Vec<String>),
}

impl Value {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Long(_) => "long",
            Value::Float(_) => "float",
            Value::Decimal(_) => "decimal",
            Value::String(_) => "string",
            Value::Guid(_) => "guid",
            Value::DateTime(_) => "datetime",
            Value::Tags(_) => "tags",
        }
    }

    /// Returns the human-readable string form of this value, used for
    /// free-text search and default cell rendering.
    ///
    /// `Null` has no text form; a null field never matches a search term.
    pub fn display_text(&self) -> Option<String> {
        match self {
            Value::Null => None,
            Value::Bool(b) => Some(b.to_string()),
            Value::Int(n) => Some(n.to_string()),
            Value::Long(n) => Some(n.to_string()),
            Value::Float(n) => Some(n.to_string()),
            Value::Decimal(d) => Some(d.to_string()),
            Value::String(s) => Some(s.clone()),
            Value::Guid(g) => Some(g.to_string()),
            Value::DateTime(dt) => Some(dt.format("%Y-%m-%d %H:%M").to_string()),
            Value::Tags(tags) => Some(tags.join(", ")),
        }
    }

    /// Total three-way ordering usable as a sort comparator.
    ///
    /// Same-typed values order naturally (integer widths widen, floats use
    /// `total_cmp` so NaN cannot break the order). A heterogeneous pair
    /// orders by a fixed type rank with `Null` last, which keeps the order
    /// total and deterministic instead of panicking inside a stable sort;
    /// schema-validated columns never mix types, so the rank path only
    /// matters for malformed data.
    pub fn compare(&self, other: &Value) -> Ordering {
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            (Value::Int(a), Value::Int(b)) => a.cmp(b),
            (Value::Long(a), Value::Long(b)) => a.cmp(b),
            (Value::Int(a), Value::Long(b)) => i64::from(*a).cmp(b),
            (Value::Long(a), Value::Int(b)) => a.cmp(&i64::from(*b)),
            (Value::Float(a), Value::Float(b)) => a.total_cmp(b),
            (Value::Decimal(a), Value::Decimal(b)) => a.cmp(b),
            (Value::String(a), Value::String(b)) => a.cmp(b),
            (Value::Guid(a), Value::Guid(b)) => a.cmp(b),
            (Value::DateTime(a), Value::DateTime(b)) => a.cmp(b),
            (Value::Tags(a), Value::Tags(b)) => a.cmp(b),
            _ => self.sort_rank().cmp(&other.sort_rank()),
        }
    }

    /// Rank used to order values of different types; `Null` sorts last.
    fn sort_rank(&self) -> u8 {
        match self {
            Value::Bool(_) => 0,
            Value::Int(_) | Value::Long(_) => 1,
            Value::Float(_) => 2,
            Value::Decimal(_) => 3,
            Value::String(_) => 4,
            Value::Guid(_) => 5,
            Value::DateTime(_) => 6,
            Value::Tags(_) => 7,
            Value::Null => 8,
        }
    }

    /// Returns `true` if this value matches an attribute-filter selection.
    ///
    /// Filter options carry string values, so only string fields can match,
    /// and only exactly (case-sensitive).
    pub fn matches_filter(&self, filter_value: &str) -> bool {
        matches!(self, Value::String(s) if s == filter_value)
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Long(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<Decimal> for Value {
    fn from(v: Decimal) -> Self {
        Value::Decimal(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<Uuid> for Value {
    fn from(v: Uuid) -> Self {
        Value::Guid(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::DateTime(v)
    }
}

impl From<Vec<String>> for Value {
    fn from(v: Vec<String>) -> Self {
        Value::Tags(v)
    }
}

impl From<serde_json::Value> for Value {
    /// Converts a raw JSON payload value, the form records arrive in from
    /// a hosted backend. Integers stay integral, arrays become tags, and
    /// nested structures fall back to their JSON text.
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Long(i),
                None => Value::Float(n.as_f64().unwrap_or_default()),
            },
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => Value::Tags(
                items
                    .into_iter()
                    .map(|item| match item {
                        serde_json::Value::String(s) => s,
                        other => other.to_string(),
                    })
                    .collect(),
            ),
            other => Value::String(other.to_string()),
        }
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_text() {
        assert_eq!(Value::Null.display_text(), None);
        assert_eq!(Value::from(15).display_text().as_deref(), Some("15"));
        assert_eq!(
            Value::from(vec!["Kisumu".to_string(), "Siaya".to_string()])
                .display_text()
                .as_deref(),
            Some("Kisumu, Siaya")
        );
    }

    #[test]
    fn test_compare_same_type() {
        assert_eq!(Value::from(1).compare(&Value::from(2)), Ordering::Less);
        assert_eq!(
            Value::from("b").compare(&Value::from("a")),
            Ordering::Greater
        );
        assert_eq!(Value::from(3i64).compare(&Value::from(3)), Ordering::Equal);
    }

    #[test]
    fn test_compare_is_total_across_types() {
        // Cross-type pairs order by rank, with Null last, so a stable sort
        // over malformed data stays deterministic and cannot panic.
        assert_eq!(
            Value::from(10).compare(&Value::from("10")),
            Ordering::Less
        );
        assert_eq!(Value::Null.compare(&Value::from(true)), Ordering::Greater);
        assert_eq!(Value::Null.compare(&Value::Null), Ordering::Equal);
        assert_eq!(
            Value::from(f64::NAN).compare(&Value::from(1.0)),
            Ordering::Greater
        );
    }

    #[test]
    fn test_from_json_payload() {
        let payload = serde_json::json!({
            "severity": "High",
            "delivery_success": 94,
            "affected_regions": ["Kisumu County", "Siaya County"],
            "resolved_at": null,
        });
        let serde_json::Value::Object(fields) = payload else {
            unreachable!();
        };

        let mut converted: Vec<(String, Value)> = fields
            .into_iter()
            .map(|(key, value)| (key, Value::from(value)))
            .collect();
        converted.sort_by(|(a, _), (b, _)| a.cmp(b));

        assert_eq!(
            converted[0].1,
            Value::Tags(vec!["Kisumu County".to_string(), "Siaya County".to_string()])
        );
        assert_eq!(converted[1].1, Value::Long(94));
        assert_eq!(converted[2].1, Value::Null);
        assert_eq!(converted[3].1, Value::String("High".to_string()));
    }

    #[test]
    fn test_matches_filter_is_strict() {
        assert!(Value::from("Admin").matches_filter("Admin"));
        assert!(!Value::from("admin").matches_filter("Admin"));
        assert!(!Value::from(4).matches_filter("4"));
        assert!(!Value::Null.matches_filter("Admin"));
    }
}
