use crate::domain::entities::pagination::{PageNav, Pagination};

/// Search text plus the page the table is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState {
    pub query: String,
    pub page: usize,
}

impl Default for TableState {
    fn default() -> Self {
        Self {
            query: String::new(),
            page: 1,
        }
    }
}

impl TableState {
    /// New search text; the filtered view always restarts at page 1.
    pub fn search(&mut self, raw: impl Into<String>) {
        self.query = raw.into();
        self.page = 1;
    }

    /// Pagination is rebuilt from the live sequence length, so a stale page
    /// or request is clamped instead of landing out of range. Returns whether
    /// the stored page changed.
    pub fn navigate(&mut self, nav: PageNav, sequence_len: usize, items_per_page: usize) -> bool {
        let mut pagination = Pagination::new(sequence_len, items_per_page, self.page);
        pagination.navigate(nav);
        let changed = pagination.current_page != self.page;
        self.page = pagination.current_page;
        changed
    }
}
