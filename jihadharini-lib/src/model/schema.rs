//! Declared attribute schemas

use serde::Deserialize;
use serde::Serialize;

use super::Value;

/// The declared type of an entity attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttributeType {
    /// Boolean (true/false).
    Bool,
    /// 32-bit integer.
    Int,
    /// 64-bit integer.
    Long,
    /// Double-precision floating point.
    Float,
    /// Arbitrary precision decimal.
    Decimal,
    /// Text.
    String,
    /// Unique identifier (GUID).
    Guid,
    /// Date and time.
    DateTime,
    /// List of short string tags.
    Tags,
}

impl AttributeType {
    /// Returns `true` if a field value is acceptable for this declared type.
    ///
    /// `Null` is acceptable for every type; integers may widen.
    pub fn accepts(&self, value: &Value) -> bool {
        match (self, value) {
            (_, Value::Null) => true,
            (AttributeType::Bool, Value::Bool(_)) => true,
            (AttributeType::Int, Value::Int(_)) => true,
            (AttributeType::Long, Value::Long(_) | Value::Int(_)) => true,
            (AttributeType::Float, Value::Float(_)) => true,
            (AttributeType::Decimal, Value::Decimal(_)) => true,
            (AttributeType::String, Value::String(_)) => true,
            (AttributeType::Guid, Value::Guid(_)) => true,
            (AttributeType::DateTime, Value::DateTime(_)) => true,
            (AttributeType::Tags, Value::Tags(_)) => true,
            _ => false,
        }
    }
}

/// Metadata for one entity attribute (column).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeSchema {
    /// The logical name of the attribute (e.g. "trust_score").
    pub logical_name: String,

    /// Display name of the attribute.
    pub display_name: String,

    /// The declared attribute type.
    pub attribute_type: AttributeType,
}

impl AttributeSchema {
    /// Creates attribute metadata.
    pub fn new(
        logical_name: impl Into<String>,
        display_name: impl Into<String>,
        attribute_type: AttributeType,
    ) -> Self {
        Self {
            logical_name: logical_name.into(),
            display_name: display_name.into(),
            attribute_type,
        }
    }
}

/// The declared shape of one entity: its logical name and ordered attributes.
///
/// Table specs are validated against an entity schema at construction time,
/// so a column descriptor can never silently reference an attribute the
/// entity does not carry.
///
/// # Example
///
/// ```
/// use jihadharini_lib::model::schema::{AttributeType, EntitySchema};
///
/// let schema = EntitySchema::new("mesh_nodes")
///     .with_attribute("name", "Node", AttributeType::String)
///     .with_attribute("signal", "Signal", AttributeType::Int);
///
/// assert!(schema.contains("signal"));
/// assert!(!schema.contains("uptime"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySchema {
    logical_name: String,
    attributes: Vec<AttributeSchema>,
}

impl EntitySchema {
    /// Creates an empty schema for the given entity.
    pub fn new(logical_name: impl Into<String>) -> Self {
        Self {
            logical_name: logical_name.into(),
            attributes: Vec::new(),
        }
    }

    /// Adds an attribute (builder pattern).
    pub fn with_attribute(
        mut self,
        logical_name: impl Into<String>,
        display_name: impl Into<String>,
        attribute_type: AttributeType,
    ) -> Self {
        self.attributes.push(AttributeSchema::new(
            logical_name,
            display_name,
            attribute_type,
        ));
        self
    }

    /// Returns the entity logical name.
    pub fn logical_name(&self) -> &str {
        &self.logical_name
    }

    /// Returns the declared attributes in declaration order.
    pub fn attributes(&self) -> &[AttributeSchema] {
        &self.attributes
    }

    /// Looks up an attribute by logical name.
    pub fn attribute(&self, logical_name: &str) -> Option<&AttributeSchema> {
        self.attributes
            .iter()
            .find(|attribute| attribute.logical_name == logical_name)
    }

    /// Returns `true` if the schema declares the given attribute.
    pub fn contains(&self, logical_name: &str) -> bool {
        self.attribute(logical_name).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_widening_and_null() {
        assert!(AttributeType::Long.accepts(&Value::Int(3)));
        assert!(AttributeType::String.accepts(&Value::Null));
        assert!(!AttributeType::Int.accepts(&Value::String("3".into())));
    }
}
