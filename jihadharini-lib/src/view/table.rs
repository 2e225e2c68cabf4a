//! Table spec and the view computation pipeline

use super::Column;
use super::FILTER_ALL;
use super::FilterOption;
use super::PageInfo;
use super::SortDirection;
use super::ViewState;
use crate::error::ViewError;
use crate::model::Record;
use crate::model::Value;
use crate::model::schema::EntitySchema;

/// Default number of records per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Per-table configuration: columns, search, filter, and page size.
///
/// A spec is immutable for the lifetime of a table instance; the mutable
/// part lives in [`ViewState`]. [`compute`](TableSpec::compute) derives the
/// visible page from a record snapshot and the current state by running the
/// fixed four-stage pipeline (search, filter, sort, paginate).
///
/// # Example
///
/// ```
/// use jihadharini_lib::model::Record;
/// use jihadharini_lib::view::{Column, TableSpec, ViewState};
///
/// let spec = TableSpec::new(vec![Column::new("name", "Name").sortable()])
///     .with_page_size(25);
///
/// let records = vec![Record::new("community_members").set("name", "Sarah Otieno")];
/// let mut state = ViewState::new();
/// let view = spec.compute(&records, &mut state);
/// assert_eq!(view.rows().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct TableSpec {
    columns: Vec<Column>,
    searchable: bool,
    search_placeholder: String,
    filter_key: Option<String>,
    filter_options: Vec<FilterOption>,
    page_size: usize,
}

impl TableSpec {
    /// Creates a spec with search enabled and the default page size.
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            searchable: true,
            search_placeholder: "Search...".to_string(),
            filter_key: None,
            filter_options: Vec::new(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Enables or disables the free-text search stage.
    pub fn with_searchable(mut self, searchable: bool) -> Self {
        self.searchable = searchable;
        self
    }

    /// Sets the search box placeholder. Display only; no behavioral effect.
    pub fn with_search_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.search_placeholder = placeholder.into();
        self
    }

    /// Enables the single-attribute equality filter on the given key.
    pub fn with_filter(mut self, key: impl Into<String>, options: Vec<FilterOption>) -> Self {
        self.filter_key = Some(key.into());
        self.filter_options = options;
        self
    }

    /// Sets the page size. Zero is invalid configuration and falls back to
    /// [`DEFAULT_PAGE_SIZE`].
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = if page_size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            page_size
        };
        self
    }

    /// Returns the columns in display order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Looks up a column by key.
    pub fn column(&self, key: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.key() == key)
    }

    /// Returns `true` if the search stage is enabled.
    pub fn is_searchable(&self) -> bool {
        self.searchable
    }

    /// Returns the search box placeholder.
    pub fn search_placeholder(&self) -> &str {
        &self.search_placeholder
    }

    /// Returns the filter key, if filtering is configured.
    pub fn filter_key(&self) -> Option<&str> {
        self.filter_key.as_deref()
    }

    /// Returns the configured filter options (the implicit "all" option is
    /// not included).
    pub fn filter_options(&self) -> &[FilterOption] {
        &self.filter_options
    }

    /// Returns the page size.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Checks every column key and the filter key against a declared entity
    /// schema.
    pub fn validate(&self, schema: &EntitySchema) -> Result<(), ViewError> {
        for column in &self.columns {
            if !schema.contains(column.key()) {
                return Err(ViewError::unknown_column(
                    schema.logical_name(),
                    column.key(),
                ));
            }
        }
        if let Some(key) = self.filter_key.as_deref() {
            if !schema.contains(key) {
                return Err(ViewError::unknown_filter_key(schema.logical_name(), key));
            }
        }
        Ok(())
    }

    /// Cycles the sort state for one column.
    ///
    /// Unknown or non-sortable columns are a silent no-op. A fresh column
    /// starts ascending; the current column advances through the
    /// none → ascending → descending → none cycle. At most one column is
    /// sorted at a time.
    pub fn toggle_sort(&self, state: &mut ViewState, key: &str) {
        let Some(column) = self.column(key) else {
            return;
        };
        if !column.is_sortable() {
            return;
        }

        let next = match state.sort() {
            Some((current, direction)) if current == key => {
                direction.next().map(|direction| (key.to_string(), direction))
            }
            _ => Some((key.to_string(), SortDirection::initial())),
        };
        state.set_sort(next);
    }

    /// Runs the pipeline: search, filter, sort, paginate.
    ///
    /// Pure and synchronous; recomputed from scratch on every call. The
    /// clamped page is written back into `state`, so the page invariant
    /// holds after every operation.
    pub fn compute<'a>(&self, records: &'a [Record], state: &mut ViewState) -> TableView<'a> {
        let mut rows: Vec<&'a Record> = records.iter().collect();

        if self.searchable && !state.search_term().is_empty() {
            let needle = state.search_term().to_lowercase();
            rows.retain(|record| {
                record.fields().values().any(|value| {
                    value
                        .display_text()
                        .is_some_and(|text| text.to_lowercase().contains(&needle))
                })
            });
        }

        if let Some(key) = self.filter_key.as_deref() {
            if state.filter_value() != FILTER_ALL {
                let wanted = state.filter_value().to_string();
                rows.retain(|record| {
                    record
                        .get(key)
                        .is_some_and(|value| value.matches_filter(&wanted))
                });
            }
        }

        if let Some((key, direction)) = state.sort().map(|(key, direction)| (key.to_string(), direction)) {
            // Vec::sort_by is stable: ties keep their input order. A record
            // without the sort field compares as Null, which Value::compare
            // ranks last, keeping the order total.
            rows.sort_by(|a, b| {
                let left = a.get(&key).unwrap_or(&Value::Null);
                let right = b.get(&key).unwrap_or(&Value::Null);
                let ordering = left.compare(right);
                match direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            });
        }

        let page = PageInfo::compute(rows.len(), self.page_size, state.page());
        state.clamp_page(page.total_pages());

        let start = (page.current_page() - 1) * self.page_size;
        let visible = rows
            .into_iter()
            .skip(start)
            .take(self.page_size)
            .collect();

        TableView {
            rows: visible,
            page,
        }
    }
}

/// One computed page of a table: the visible records plus pagination
/// metadata.
#[derive(Debug, Clone)]
pub struct TableView<'a> {
    rows: Vec<&'a Record>,
    page: PageInfo,
}

impl<'a> TableView<'a> {
    /// Returns the visible records in display order.
    pub fn rows(&self) -> &[&'a Record] {
        &self.rows
    }

    /// Returns the pagination metadata.
    pub fn page(&self) -> PageInfo {
        self.page
    }

    /// Returns `true` if the page shows no records.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the number of visible records.
    pub fn len(&self) -> usize {
        self.rows.len()
    }
}
