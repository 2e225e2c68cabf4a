//! ViewError for table spec validation

/// Error type for table specs that do not line up with an entity schema.
///
/// These are authoring mistakes caught at construction time; runtime view
/// computation itself degrades gracefully and never raises.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ViewError {
    /// A column references an attribute the entity does not declare.
    #[error("Column '{column}' is not declared on entity '{entity}'")]
    UnknownColumn { entity: String, column: String },

    /// The filter key references an attribute the entity does not declare.
    #[error("Filter key '{key}' is not declared on entity '{entity}'")]
    UnknownFilterKey { entity: String, key: String },
}

impl ViewError {
    /// Creates an unknown column error.
    pub fn unknown_column(entity: impl Into<String>, column: impl Into<String>) -> Self {
        Self::UnknownColumn {
            entity: entity.into(),
            column: column.into(),
        }
    }

    /// Creates an unknown filter key error.
    pub fn unknown_filter_key(entity: impl Into<String>, key: impl Into<String>) -> Self {
        Self::UnknownFilterKey {
            entity: entity.into(),
            key: key.into(),
        }
    }
}
