//! Dynamic display record

use std::collections::HashMap;

use chrono::DateTime;
use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use super::Value;
use crate::error::FieldError;

/// One row of displayable data.
///
/// Records hold field values as a `HashMap<String, Value>`, allowing dynamic
/// access to any field. Typed getter methods provide safe access with proper
/// error handling. The view engine only ever reads records; it never mutates
/// one it is given.
///
/// # Example
///
/// ```
/// use jihadharini_lib::model::Record;
///
/// let record = Record::new("community_members")
///     .set("name", "Sarah Otieno")
///     .set("region", "Kisumu");
///
/// assert_eq!(record.get_string("name").unwrap(), Some("Sarah Otieno"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// The logical name of the entity this row belongs to.
    pub(crate) entity_name: String,

    /// The unique identifier of the record.
    pub(crate) id: Option<Uuid>,

    /// The field values.
    pub(crate) fields: HashMap<String, Value>,
}

impl Record {
    /// Creates a new empty record for the given entity.
    pub fn new(entity_name: impl Into<String>) -> Self {
        Self {
            entity_name: entity_name.into(),
            id: None,
            fields: HashMap::new(),
        }
    }

    /// Creates a new record with the given ID.
    pub fn with_id(entity_name: impl Into<String>, id: Uuid) -> Self {
        Self {
            entity_name: entity_name.into(),
            id: Some(id),
            fields: HashMap::new(),
        }
    }

    /// Returns the entity logical name.
    pub fn entity_name(&self) -> &str {
        &self.entity_name
    }

    /// Returns the record ID, if set.
    pub fn id(&self) -> Option<Uuid> {
        self.id
    }

    // =========================================================================
    // Raw field access
    // =========================================================================

    /// Returns a reference to the field value, if it exists.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns `true` if the record contains the given field.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Returns a reference to all fields.
    pub fn fields(&self) -> &HashMap<String, Value> {
        &self.fields
    }

    // =========================================================================
    // Setters
    // =========================================================================

    /// Sets a field value (builder pattern).
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Inserts a field value.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Removes a field and returns its value.
    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.fields.remove(field)
    }

    // =========================================================================
    // Typed getters
    //
    // Return Err if field is missing or wrong type.
    // Return Ok(None) only if the field exists and is Value::Null.
    // =========================================================================

    /// Gets a string field value.
    pub fn get_string(&self, field: &str) -> Result<Option<&str>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(other) => Err(FieldError::type_mismatch(
                field,
                "string",
                other.type_name(),
            )),
        }
    }

    /// Gets a boolean field value.
    pub fn get_bool(&self, field: &str) -> Result<Option<bool>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(other) => Err(FieldError::type_mismatch(field, "bool", other.type_name())),
        }
    }

    /// Gets an i32 field value.
    pub fn get_int(&self, field: &str) -> Result<Option<i32>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::Int(n)) => Ok(Some(*n)),
            Some(other) => Err(FieldError::type_mismatch(field, "int", other.type_name())),
        }
    }

    /// Gets an i64 field value.
    pub fn get_long(&self, field: &str) -> Result<Option<i64>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::Long(n)) => Ok(Some(*n)),
            Some(Value::Int(n)) => Ok(Some(i64::from(*n))), // Allow widening
            Some(other) => Err(FieldError::type_mismatch(field, "long", other.type_name())),
        }
    }

    /// Gets an f64 field value.
    pub fn get_float(&self, field: &str) -> Result<Option<f64>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::Float(n)) => Ok(Some(*n)),
            Some(other) => Err(FieldError::type_mismatch(field, "float", other.type_name())),
        }
    }

    /// Gets a Decimal field value.
    pub fn get_decimal(&self, field: &str) -> Result<Option<Decimal>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::Decimal(d)) => Ok(Some(*d)),
            Some(other) => Err(FieldError::type_mismatch(
                field,
                "decimal",
                other.type_name(),
            )),
        }
    }

    /// Gets a UUID field value.
    pub fn get_guid(&self, field: &str) -> Result<Option<Uuid>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::Guid(g)) => Ok(Some(*g)),
            Some(other) => Err(FieldError::type_mismatch(field, "guid", other.type_name())),
        }
    }

    /// Gets a DateTime field value.
    pub fn get_datetime(&self, field: &str) -> Result<Option<DateTime<Utc>>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::DateTime(dt)) => Ok(Some(*dt)),
            Some(other) => Err(FieldError::type_mismatch(
                field,
                "datetime",
                other.type_name(),
            )),
        }
    }

    /// Gets a tag-list field value.
    pub fn get_tags(&self, field: &str) -> Result<Option<&[String]>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::Tags(tags)) => Ok(Some(tags.as_slice())),
            Some(other) => Err(FieldError::type_mismatch(field, "tags", other.type_name())),
        }
    }
}

impl Default for Record {
    fn default() -> Self {
        Self::new("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_getters() {
        let record = Record::new("mesh_nodes")
            .set("name", "Kisumu Central Hub")
            .set("connections", 15)
            .set("uptime", 99.2)
            .set("signal", Option::<i32>::None);

        assert_eq!(record.get_string("name").unwrap(), Some("Kisumu Central Hub"));
        assert_eq!(record.get_int("connections").unwrap(), Some(15));
        assert_eq!(record.get_long("connections").unwrap(), Some(15));
        assert_eq!(record.get_float("uptime").unwrap(), Some(99.2));
        assert_eq!(record.get_int("signal").unwrap(), None);
    }

    #[test]
    fn test_getter_errors() {
        let record = Record::new("mesh_nodes").set("connections", 15);

        assert!(matches!(
            record.get_string("missing"),
            Err(FieldError::Missing { .. })
        ));
        assert!(matches!(
            record.get_string("connections"),
            Err(FieldError::TypeMismatch { .. })
        ));
    }
}
