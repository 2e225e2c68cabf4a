//! Externally-owned view state

use super::FILTER_ALL;
use super::SortDirection;

/// The mutable control state of one table instance: search term, active
/// filter value, current sort, and current page.
///
/// The state is owned by the caller and passed into every computation, so
/// the engine stays a pure transformation that is trivially testable
/// without a rendering environment. Two tables on one screen are two
/// independent `ViewState`s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    search_term: String,
    filter_value: String,
    sort: Option<(String, SortDirection)>,
    page: usize,
}

impl ViewState {
    /// Creates the initial state: empty search, no filtering, no sort,
    /// page 1.
    pub fn new() -> Self {
        Self {
            search_term: String::new(),
            filter_value: FILTER_ALL.to_string(),
            sort: None,
            page: 1,
        }
    }

    /// Returns the active search term (possibly empty).
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Returns the active filter value (`"all"` means no filtering).
    pub fn filter_value(&self) -> &str {
        &self.filter_value
    }

    /// Returns the active sort column and direction, if any.
    pub fn sort(&self) -> Option<(&str, SortDirection)> {
        self.sort
            .as_ref()
            .map(|(key, direction)| (key.as_str(), *direction))
    }

    /// Returns the current page (1-based).
    pub fn page(&self) -> usize {
        self.page
    }

    /// Replaces the active search term.
    ///
    /// The page is intentionally not reset to 1; it re-clamps against the
    /// new result size on the next computation.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Replaces the active filter value; [`FILTER_ALL`] clears filtering.
    pub fn set_filter(&mut self, value: impl Into<String>) {
        self.filter_value = value.into();
    }

    /// Requests a page, floored at 1.
    ///
    /// The upper clamp against the filtered page count happens in the
    /// paginate stage, which every operation's output flows through.
    pub fn go_to_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub(crate) fn set_sort(&mut self, sort: Option<(String, SortDirection)>) {
        self.sort = sort;
    }

    pub(crate) fn clamp_page(&mut self, total_pages: usize) {
        self.page = self.page.clamp(1, total_pages.max(1));
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}
