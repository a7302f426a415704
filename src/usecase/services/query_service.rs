use std::sync::Arc;

use crate::domain::entities::feature::Feature;
use crate::domain::entities::pagination::{
    page_bounds, page_window, PageNav, Pagination, PAGE_WINDOW_SIZE,
};
use crate::domain::entities::search::{filter_features, SearchQuery};

#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    /// 1-based position within the displayed sequence.
    pub number: usize,
    pub feature: Feature,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerItem {
    Nav { nav: PageNav, enabled: bool },
    Page { page: usize, current: bool },
    Ellipsis,
}

/// Everything needed to draw one page of the table and its pager strip.
#[derive(Debug, Clone, PartialEq)]
pub struct TableView {
    pub rows: Vec<TableRow>,
    pub pagination: Pagination,
    pub pager: Vec<PagerItem>,
    pub total_items: usize,
}

pub struct QueryService {
    features: Arc<[Feature]>,
    items_per_page: usize,
}

impl QueryService {
    pub fn new(features: Arc<[Feature]>, items_per_page: usize) -> Self {
        Self {
            features,
            items_per_page,
        }
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn filter(&self, raw_query: &str) -> Vec<Feature> {
        filter_features(&self.features, &SearchQuery::new(raw_query))
    }

    pub fn table_view(&self, sequence: &[Feature], page: usize) -> TableView {
        build_table_view(sequence, page, self.items_per_page)
    }
}

pub fn build_table_view(sequence: &[Feature], page: usize, items_per_page: usize) -> TableView {
    let pagination = Pagination::new(sequence.len(), items_per_page, page);
    let bounds = page_bounds(sequence.len(), pagination.current_page, items_per_page);
    let rows = sequence[bounds.clone()]
        .iter()
        .zip(bounds)
        .map(|(feature, idx)| TableRow {
            number: idx + 1,
            feature: feature.clone(),
        })
        .collect();

    TableView {
        rows,
        pagination,
        pager: pager_items(&pagination),
        total_items: sequence.len(),
    }
}

pub fn pager_items(pagination: &Pagination) -> Vec<PagerItem> {
    let window = page_window(pagination, PAGE_WINDOW_SIZE);
    let nav = |nav: PageNav| PagerItem::Nav {
        nav,
        enabled: pagination.can_navigate(nav),
    };

    let mut items = vec![nav(PageNav::First), nav(PageNav::Prev)];
    if window.ellipsis_before {
        items.push(PagerItem::Ellipsis);
    }
    if !window.is_empty() {
        items.extend(window.pages().map(|page| PagerItem::Page {
            page,
            current: page == pagination.current_page,
        }));
    }
    if window.ellipsis_after {
        items.push(PagerItem::Ellipsis);
    }
    items.push(nav(PageNav::Next));
    items.push(nav(PageNav::Last));
    items
}
