//! Column descriptors

use crate::model::Record;
use crate::model::Value;

/// Renders one cell from the raw field value and the whole record.
///
/// The renderer receives [`Value::Null`] when the record lacks the column's
/// field, so it can fall back rather than fail.
pub type CellRender = fn(&Value, &Record) -> String;

/// Describes one displayed column: which attribute to read, how to label
/// it, whether it sorts, and optionally how to render its cells.
///
/// # Example
///
/// ```
/// use jihadharini_lib::view::Column;
///
/// let column = Column::new("region", "Region").sortable();
/// assert!(column.is_sortable());
/// ```
#[derive(Debug, Clone)]
pub struct Column {
    key: String,
    label: String,
    sortable: bool,
    render: Option<CellRender>,
}

impl Column {
    /// Creates a non-sortable column with default rendering.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            sortable: false,
            render: None,
        }
    }

    /// Marks the column sortable (builder pattern).
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Attaches a custom cell renderer (builder pattern).
    pub fn with_render(mut self, render: CellRender) -> Self {
        self.render = Some(render);
        self
    }

    /// Returns the record attribute this column reads.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns `true` if the column participates in sorting.
    pub fn is_sortable(&self) -> bool {
        self.sortable
    }

    /// Renders the cell for one record.
    ///
    /// Uses the custom renderer when present, otherwise the value's display
    /// text; absent and null fields render as an empty string.
    pub fn cell_text(&self, record: &Record) -> String {
        let value = record.get(&self.key);
        match self.render {
            Some(render) => render(value.unwrap_or(&Value::Null), record),
            None => value
                .and_then(Value::display_text)
                .unwrap_or_default(),
        }
    }
}
