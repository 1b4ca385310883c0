//! Record-list controller state for the admin training-record grid.
//!
//! DESIGN
//! ======
//! One struct owns filter, pagination, bulk-selection, and the cached page so
//! the invariants between them (filter changes reset paging, mutations
//! invalidate the cache) live next to the data they guard. The cache is only
//! ever replaced wholesale by [`RecordsState::apply_page`]; racing fetches
//! resolve last-writer-wins, which is acceptable because every response is a
//! complete page for some recently-valid query.

#[cfg(test)]
#[path = "records_test.rs"]
mod records_test;

use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::net::types::{BulkDeleteResponse, Category, RecordPage, TrainingRecord};

/// Default rows per page in the admin grid.
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Sortable columns of the admin grid.
///
/// Sorting is client-side over the cached page only; the record endpoints
/// carry no sort parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortKey {
    Brand,
    Model,
    Mileage,
    Displacement,
    Year,
    PredictedPrice,
    CreatedAt,
}

impl SortKey {
    /// Map a column key (see `util::columns`) to its sort key.
    #[must_use]
    pub fn parse(key: &str) -> Option<SortKey> {
        match key {
            "brand" => Some(SortKey::Brand),
            "model" => Some(SortKey::Model),
            "mileage" => Some(SortKey::Mileage),
            "displacement" => Some(SortKey::Displacement),
            "year" => Some(SortKey::Year),
            "predicted_price" => Some(SortKey::PredictedPrice),
            "created_at" => Some(SortKey::CreatedAt),
            _ => None,
        }
    }

    /// Ascending comparison of two records on this key. Absent values order
    /// after present ones.
    fn compare(self, a: &TrainingRecord, b: &TrainingRecord) -> Ordering {
        match self {
            SortKey::Brand => a.brand.to_lowercase().cmp(&b.brand.to_lowercase()),
            SortKey::Model => a.model.to_lowercase().cmp(&b.model.to_lowercase()),
            SortKey::Mileage => a.condition.mileage.cmp(&b.condition.mileage),
            SortKey::Displacement => {
                a.specifications.displacement.cmp(&b.specifications.displacement)
            }
            SortKey::Year => a.condition.year.cmp(&b.condition.year),
            SortKey::PredictedPrice => match (a.predicted_price, b.predicted_price) {
                (Some(x), Some(y)) => x.total_cmp(&y),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
            SortKey::CreatedAt => match (&a.created_at, &b.created_at) {
                (Some(x), Some(y)) => x.cmp(y),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
        }
    }
}

/// Active filter parameters for the record list.
///
/// Only used to build query parameters; empty strings and empty sets mean
/// "no constraint".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordFilter {
    pub brand: String,
    pub model: String,
    pub category: Option<Category>,
    pub categories: Vec<Category>,
}

/// Server-side-paginated record list with filters and bulk selection.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordsState {
    /// Cached page of records for the current query.
    pub records: Vec<TrainingRecord>,
    /// Total records matching the current filter, across all pages.
    pub total: u64,
    /// True until the first page for this view has resolved.
    pub loading: bool,
    /// True while a page fetch is in flight; the grid stays interactive.
    pub fetching: bool,
    /// Last fetch failure, if any.
    pub error: Option<String>,
    /// Zero-based page index.
    pub page_index: u64,
    pub page_size: u64,
    pub filter: RecordFilter,
    /// Ids selected for bulk actions. Survives page changes so a bulk delete
    /// can span pages; cleared after every bulk action.
    pub selected: BTreeSet<i64>,
    /// Active client-side sort column, if any.
    pub sort_key: Option<SortKey>,
    pub sort_descending: bool,
    /// Bumped after each successful mutation to invalidate the cached page.
    pub refresh_seq: u64,
}

impl Default for RecordsState {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            total: 0,
            loading: true,
            fetching: false,
            error: None,
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
            filter: RecordFilter::default(),
            selected: BTreeSet::new(),
            sort_key: None,
            sort_descending: false,
            refresh_seq: 0,
        }
    }
}

impl RecordsState {
    /// Row offset of the current page.
    #[must_use]
    pub fn offset(&self) -> u64 {
        self.page_index * self.page_size
    }

    /// True iff rows exist beyond the cached page.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.offset() + (self.records.len() as u64) < self.total
    }

    /// Total pages for the current filter (at least 1).
    #[must_use]
    pub fn page_count(&self) -> u64 {
        self.total.div_ceil(self.page_size).max(1)
    }

    /// Query parameters for the current page, shared verbatim by the record
    /// and count requests. Unset filters are omitted entirely.
    #[must_use]
    pub fn page_params(&self) -> Vec<(String, String)> {
        let mut params = vec![
            ("limit".to_owned(), self.page_size.to_string()),
            ("offset".to_owned(), self.offset().to_string()),
        ];
        if !self.filter.brand.trim().is_empty() {
            params.push(("brand".to_owned(), self.filter.brand.trim().to_owned()));
        }
        if !self.filter.model.trim().is_empty() {
            params.push(("model".to_owned(), self.filter.model.trim().to_owned()));
        }
        if let Some(category) = self.filter.category {
            params.push(("category".to_owned(), category.as_str().to_owned()));
        }
        if !self.filter.categories.is_empty() {
            let joined = self
                .filter
                .categories
                .iter()
                .map(|c| c.as_str())
                .collect::<Vec<_>>()
                .join(",");
            params.push(("categories".to_owned(), joined));
        }
        params
    }

    // ---- filter mutations (all reset paging) ----

    pub fn set_brand_filter(&mut self, brand: String) {
        self.filter.brand = brand;
        self.page_index = 0;
    }

    pub fn set_model_filter(&mut self, model: String) {
        self.filter.model = model;
        self.page_index = 0;
    }

    pub fn set_category_filter(&mut self, category: Option<Category>) {
        self.filter.category = category;
        self.page_index = 0;
    }

    /// Toggle membership of `category` in the multi-category filter.
    pub fn toggle_category(&mut self, category: Category) {
        if let Some(pos) = self.filter.categories.iter().position(|c| *c == category) {
            self.filter.categories.remove(pos);
        } else {
            self.filter.categories.push(category);
        }
        self.page_index = 0;
    }

    pub fn set_page_size(&mut self, page_size: u64) {
        self.page_size = page_size.max(1);
        self.page_index = 0;
    }

    // ---- client-side sorting ----

    /// Cycle the sort on `key`: ascending, then descending, then off.
    /// Sorting never touches paging or the refresh sequence.
    pub fn toggle_sort(&mut self, key: SortKey) {
        if self.sort_key == Some(key) {
            if self.sort_descending {
                self.sort_key = None;
                self.sort_descending = false;
            } else {
                self.sort_descending = true;
            }
        } else {
            self.sort_key = Some(key);
            self.sort_descending = false;
        }
    }

    /// The cached page in display order: server order when no sort is active,
    /// otherwise stably sorted on the active key.
    #[must_use]
    pub fn sorted_records(&self) -> Vec<TrainingRecord> {
        let mut records = self.records.clone();
        if let Some(key) = self.sort_key {
            records.sort_by(|a, b| {
                let ord = key.compare(a, b);
                if self.sort_descending { ord.reverse() } else { ord }
            });
        }
        records
    }

    // ---- paging ----

    pub fn next_page(&mut self) {
        if self.has_more() {
            self.page_index += 1;
        }
    }

    pub fn prev_page(&mut self) {
        self.page_index = self.page_index.saturating_sub(1);
    }

    /// Human summary of the visible slice, e.g. `"1 to 10 of 25"`.
    #[must_use]
    pub fn display_range(&self) -> String {
        let len = self.records.len() as u64;
        let start = if len == 0 { 0 } else { self.offset() + 1 };
        let end = self.offset() + len;
        format!("{start} to {end} of {}", self.total)
    }

    // ---- fetch lifecycle ----

    /// Replace the cached page wholesale with a resolved fetch result.
    ///
    /// When deletions shrink the data set under the current offset, the page
    /// index is pulled back to the last populated page and the refresh
    /// sequence bumped so the grid refetches instead of showing a stranded
    /// empty page.
    pub fn apply_page(&mut self, page: RecordPage) {
        self.records = page.records;
        self.total = page.total;
        self.loading = false;
        self.fetching = false;
        self.error = None;
        if self.page_index > 0 && self.offset() >= self.total {
            self.page_index = self.total.saturating_sub(1) / self.page_size;
            self.refresh_seq += 1;
        }
    }

    /// Record a fetch failure; the stale page stays visible behind the error.
    pub fn apply_error(&mut self, message: String) {
        self.loading = false;
        self.fetching = false;
        self.error = Some(message);
    }

    /// Invalidate the cached page after a successful mutation.
    pub fn invalidate(&mut self) {
        self.refresh_seq += 1;
    }

    // ---- bulk selection ----

    pub fn toggle_selected(&mut self, id: i64) {
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    /// Select or deselect every row on the cached page that has an id.
    pub fn set_page_selected(&mut self, select: bool) {
        for id in self.records.iter().filter_map(|r| r.id) {
            if select {
                self.selected.insert(id);
            } else {
                self.selected.remove(&id);
            }
        }
    }

    /// True when every id-bearing row on the cached page is selected.
    #[must_use]
    pub fn page_fully_selected(&self) -> bool {
        let mut any = false;
        for id in self.records.iter().filter_map(|r| r.id) {
            if !self.selected.contains(&id) {
                return false;
            }
            any = true;
        }
        any
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    #[must_use]
    pub fn selected_ids(&self) -> Vec<i64> {
        self.selected.iter().copied().collect()
    }

    /// Drop an id from the selection, e.g. after a single-row delete.
    pub fn deselect(&mut self, id: i64) {
        self.selected.remove(&id);
    }
}

/// Summarize a bulk delete response for the notice area, keeping partial
/// failures visually distinct from clean sweeps.
#[must_use]
pub fn bulk_delete_summary(resp: &BulkDeleteResponse) -> String {
    if resp.is_partial() {
        let mut parts = Vec::new();
        if !resp.not_found.is_empty() {
            parts.push(format!("{} not found", resp.not_found.len()));
        }
        if !resp.errors.is_empty() {
            parts.push(format!("{} failed", resp.errors.len()));
        }
        format!(
            "Deleted {} of {} records ({})",
            resp.deleted_count,
            resp.total_requested,
            parts.join(", ")
        )
    } else {
        format!("Deleted {} records", resp.deleted_count)
    }
}
