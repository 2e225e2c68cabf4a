//! Attribute filter options

/// Sentinel filter value meaning "no filtering".
///
/// Every filterable table implicitly offers this option ahead of its
/// configured [`FilterOption`]s.
pub const FILTER_ALL: &str = "all";

/// One selectable value for a table's single-attribute filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    /// Display label (e.g. "Community Leader").
    pub label: String,
    /// The raw field value rows are matched against.
    pub value: String,
}

impl FilterOption {
    /// Creates a filter option.
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}
