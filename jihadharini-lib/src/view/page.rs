//! Pagination metadata for computed views

/// Pagination metadata for one computed table view.
///
/// `range_start` and `range_end` are 1-based inclusive display bounds of the
/// current page ("showing 11 to 20 of 47"); both are 0 when the filtered
/// result is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    current_page: usize,
    total_pages: usize,
    total_filtered: usize,
    range_start: usize,
    range_end: usize,
}

impl PageInfo {
    /// Computes pagination for a filtered result, clamping the requested
    /// page into `[1, total_pages]`.
    ///
    /// `total_pages` floors at 1 even for an empty result, so the current
    /// page is always a valid display value.
    pub(crate) fn compute(total_filtered: usize, page_size: usize, requested_page: usize) -> Self {
        let total_pages = total_filtered.div_ceil(page_size).max(1);
        let current_page = requested_page.clamp(1, total_pages);

        let (range_start, range_end) = if total_filtered == 0 {
            (0, 0)
        } else {
            let start = (current_page - 1) * page_size + 1;
            let end = (current_page * page_size).min(total_filtered);
            (start, end)
        };

        Self {
            current_page,
            total_pages,
            total_filtered,
            range_start,
            range_end,
        }
    }

    /// Returns the current page (1-based).
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Returns the number of pages (at least 1).
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Returns the number of records that survived search and filtering.
    pub fn total_filtered(&self) -> usize {
        self.total_filtered
    }

    /// Returns the 1-based index of the first visible record.
    pub fn range_start(&self) -> usize {
        self.range_start
    }

    /// Returns the 1-based index of the last visible record.
    pub fn range_end(&self) -> usize {
        self.range_end
    }

    /// Returns `true` if the filtered result is empty.
    pub fn is_empty(&self) -> bool {
        self.total_filtered == 0
    }

    /// Returns `true` if a previous page exists.
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    /// Returns `true` if a further page exists.
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Renders the display summary for the pagination footer.
    pub fn summary(&self) -> String {
        if self.total_filtered == 0 {
            "No results found".to_string()
        } else {
            format!(
                "Showing {} to {} of {} results",
                self.range_start, self.range_end, self.total_filtered
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page() {
        let page = PageInfo::compute(25, 10, 1);
        assert_eq!(page.current_page(), 1);
        assert_eq!(page.total_pages(), 3);
        assert_eq!(page.range_start(), 1);
        assert_eq!(page.range_end(), 10);
        assert_eq!(page.summary(), "Showing 1 to 10 of 25 results");
    }

    #[test]
    fn test_out_of_range_page_clamps() {
        let page = PageInfo::compute(25, 10, 5);
        assert_eq!(page.current_page(), 3);
        assert_eq!(page.range_start(), 21);
        assert_eq!(page.range_end(), 25);
        assert!(!page.has_next());
        assert!(page.has_previous());
    }

    #[test]
    fn test_empty_result_floors_at_page_one() {
        let page = PageInfo::compute(0, 10, 7);
        assert_eq!(page.current_page(), 1);
        assert_eq!(page.total_pages(), 1);
        assert_eq!(page.range_start(), 0);
        assert_eq!(page.range_end(), 0);
        assert_eq!(page.summary(), "No results found");
    }
}
