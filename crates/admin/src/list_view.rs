//! Client-side filtering and pagination over a loaded list.
//!
//! Responsibilities:
//! - Hold the full collection, the filter text and the page window.
//! - Derive the visible subset as indices into the full collection.
//!
//! Invariants:
//! - The visible indices are always a pure function of items, filter and page;
//!   every mutator recomputes them.
//! - Changing the filter resets the page index to the first page.
//! - Page indices are zero-based. A page without a size shows every match.

use crate::entity::AdminEntity;

/// Page window over the filtered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    /// Items per page; `None` disables paging
    pub size: Option<usize>,
    /// Zero-based page index
    pub index: usize,
}

impl PageState {
    pub fn sized(size: usize) -> Self {
        Self {
            size: Some(size),
            index: 0,
        }
    }

    pub fn unbounded() -> Self {
        Self {
            size: None,
            index: 0,
        }
    }

    /// Number of pages needed to show `total` items (at least one).
    pub fn page_count(&self, total: usize) -> usize {
        match self.size {
            Some(size) if size > 0 => total.div_ceil(size).max(1),
            _ => 1,
        }
    }
}

/// The full list plus its filtered, paged view.
#[derive(Debug, Clone)]
pub struct ListView<E> {
    items: Vec<E>,
    filter: String,
    page: PageState,
    filtered_count: usize,
    visible_indices: Vec<usize>,
}

impl<E: AdminEntity> ListView<E> {
    pub fn new(page: PageState) -> Self {
        Self {
            items: Vec::new(),
            filter: String::new(),
            page,
            filtered_count: 0,
            visible_indices: Vec::new(),
        }
    }

    /// Replaces the full collection.
    pub fn set_items(&mut self, items: Vec<E>) {
        self.items = items;
        self.recompute();
    }

    /// Sets the filter text and returns to the first page.
    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into();
        self.page.index = 0;
        self.recompute();
    }

    pub fn set_page(&mut self, index: usize) {
        self.page.index = index;
        self.recompute();
    }

    pub fn set_page_size(&mut self, size: Option<usize>) {
        self.page.size = size;
        self.recompute();
    }

    pub fn items(&self) -> &[E] {
        &self.items
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn page(&self) -> PageState {
        self.page
    }

    /// Number of items matching the filter across all pages.
    pub fn filtered_count(&self) -> usize {
        self.filtered_count
    }

    pub fn page_count(&self) -> usize {
        self.page.page_count(self.filtered_count)
    }

    /// Items on the current page, in list order.
    pub fn visible(&self) -> impl Iterator<Item = &E> {
        self.visible_indices.iter().filter_map(|&i| self.items.get(i))
    }

    pub fn visible_len(&self) -> usize {
        self.visible_indices.len()
    }

    /// Finds a loaded item by identifier.
    pub fn find(&self, id: &E::Id) -> Option<&E> {
        self.items
            .iter()
            .find(|item| item.id().as_ref() == Some(id))
    }

    fn recompute(&mut self) {
        let needle = self.filter.to_lowercase();
        let filtered: Vec<usize> = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.matches(&needle))
            .map(|(i, _)| i)
            .collect();

        self.filtered_count = filtered.len();
        self.visible_indices = match self.page.size {
            Some(size) => filtered
                .into_iter()
                .skip(size.saturating_mul(self.page.index))
                .take(size)
                .collect(),
            None => filtered,
        };
    }
}
