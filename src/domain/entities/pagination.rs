use std::ops::{Range, RangeInclusive};

pub const ITEMS_PER_PAGE: usize = 15;
pub const PAGE_WINDOW_SIZE: usize = 5;

pub fn total_pages(len: usize, items_per_page: usize) -> usize {
    if items_per_page == 0 {
        return 0;
    }
    len.div_ceil(items_per_page)
}

/// Index range of `page` (1-based) over a sequence of `len` items. Pages past
/// the end yield an empty range at `len`.
pub fn page_bounds(len: usize, page: usize, items_per_page: usize) -> Range<usize> {
    let start = page
        .saturating_sub(1)
        .saturating_mul(items_per_page)
        .min(len);
    let end = start.saturating_add(items_per_page).min(len);
    start..end
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNav {
    First,
    Prev,
    Next,
    Last,
    Page(usize),
}

impl PageNav {
    pub fn label(&self) -> String {
        match self {
            PageNav::First => "First".to_string(),
            PageNav::Prev => "Prev".to_string(),
            PageNav::Next => "Next".to_string(),
            PageNav::Last => "Last".to_string(),
            PageNav::Page(page) => page.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub current_page: usize,
    pub total_pages: usize,
}

impl Pagination {
    /// Builds the state for `len` items, clamping `requested_page` into range.
    /// An empty sequence has zero pages and stays on page 1.
    pub fn new(len: usize, items_per_page: usize, requested_page: usize) -> Self {
        let total_pages = total_pages(len, items_per_page);
        Self {
            current_page: clamp_page(requested_page, total_pages),
            total_pages,
        }
    }

    /// The page `nav` leads to; always a valid page for this state.
    pub fn target(&self, nav: PageNav) -> usize {
        let page = match nav {
            PageNav::First => 1,
            PageNav::Prev => self.current_page.saturating_sub(1),
            PageNav::Next => self.current_page.saturating_add(1),
            PageNav::Last => self.total_pages,
            PageNav::Page(page) => page,
        };
        clamp_page(page, self.total_pages)
    }

    pub fn can_navigate(&self, nav: PageNav) -> bool {
        self.target(nav) != self.current_page
    }

    /// Applies `nav` and reports whether the current page changed.
    pub fn navigate(&mut self, nav: PageNav) -> bool {
        let target = self.target(nav);
        if target == self.current_page {
            return false;
        }
        self.current_page = target;
        true
    }
}

fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Numbered page buttons around the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub start_page: usize,
    pub end_page: usize,
    pub ellipsis_before: bool,
    pub ellipsis_after: bool,
}

impl PageWindow {
    pub fn pages(&self) -> RangeInclusive<usize> {
        self.start_page..=self.end_page
    }

    pub fn is_empty(&self) -> bool {
        self.end_page < self.start_page
    }
}

pub fn page_window(pagination: &Pagination, window_size: usize) -> PageWindow {
    let Pagination {
        current_page,
        total_pages,
    } = *pagination;
    let window_size = window_size.max(1);

    let mut start_page = current_page.saturating_sub(window_size / 2).max(1);
    let end_page = total_pages.min(start_page + window_size - 1);
    if end_page + 1 < start_page + window_size {
        start_page = end_page.saturating_sub(window_size - 1).max(1);
    }

    PageWindow {
        start_page,
        end_page,
        ellipsis_before: start_page > 1,
        ellipsis_after: end_page < total_pages,
    }
}
