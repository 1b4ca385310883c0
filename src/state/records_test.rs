use super::*;
use crate::net::types::{BulkDeleteResponse, RecordPage};

fn record_with_id(id: i64) -> TrainingRecord {
    TrainingRecord {
        id: Some(id),
        brand: "Honda".to_owned(),
        model: "Click 125i".to_owned(),
        ..TrainingRecord::default()
    }
}

fn page(offset: u64, count: usize, total: u64) -> RecordPage {
    let records = (0..count).map(|i| record_with_id(offset as i64 + i as i64)).collect();
    RecordPage::assemble(offset, records, total)
}

// =============================================================
// Pagination
// =============================================================

#[test]
fn default_state_starts_loading_on_page_zero() {
    let state = RecordsState::default();
    assert!(state.loading);
    assert!(!state.fetching);
    assert_eq!(state.page_index, 0);
    assert_eq!(state.page_size, DEFAULT_PAGE_SIZE);
    assert_eq!(state.offset(), 0);
}

#[test]
fn has_more_iff_offset_plus_len_below_total() {
    let mut state = RecordsState::default();
    state.apply_page(page(0, 10, 25));
    assert!(state.has_more());
    assert_eq!(state.display_range(), "1 to 10 of 25");

    state.page_index = 2;
    state.apply_page(page(20, 5, 25));
    assert_eq!(state.records.len(), 5);
    assert!(!state.has_more());
    assert_eq!(state.display_range(), "21 to 25 of 25");
}

#[test]
fn display_range_empty_set() {
    let mut state = RecordsState::default();
    state.apply_page(page(0, 0, 0));
    assert_eq!(state.display_range(), "0 to 0 of 0");
}

#[test]
fn next_page_stops_at_last_page() {
    let mut state = RecordsState::default();
    state.apply_page(page(0, 10, 25));
    state.next_page();
    assert_eq!(state.page_index, 1);

    state.apply_page(page(10, 10, 25));
    state.next_page();
    assert_eq!(state.page_index, 2);

    state.apply_page(page(20, 5, 25));
    state.next_page();
    assert_eq!(state.page_index, 2);
}

#[test]
fn prev_page_saturates_at_zero() {
    let mut state = RecordsState::default();
    state.prev_page();
    assert_eq!(state.page_index, 0);
}

#[test]
fn page_count_rounds_up_and_never_hits_zero() {
    let mut state = RecordsState::default();
    assert_eq!(state.page_count(), 1);
    state.total = 25;
    assert_eq!(state.page_count(), 3);
    state.total = 30;
    assert_eq!(state.page_count(), 3);
}

#[test]
fn apply_page_pulls_back_stranded_page_index() {
    let mut state = RecordsState::default();
    state.page_index = 2;
    let seq = state.refresh_seq;
    // Everything beyond page 0 was deleted elsewhere.
    state.apply_page(page(20, 0, 7));
    assert_eq!(state.page_index, 0);
    assert_eq!(state.refresh_seq, seq + 1);
}

// =============================================================
// Filters reset paging
// =============================================================

#[test]
fn filter_changes_reset_page_index() {
    let mut state = RecordsState::default();
    state.page_index = 3;
    state.set_brand_filter("Honda".to_owned());
    assert_eq!(state.page_index, 0);

    state.page_index = 3;
    state.set_model_filter("NMAX".to_owned());
    assert_eq!(state.page_index, 0);

    state.page_index = 3;
    state.set_category_filter(Some(Category::Sport));
    assert_eq!(state.page_index, 0);

    state.page_index = 3;
    state.toggle_category(Category::Scooter);
    assert_eq!(state.page_index, 0);

    state.page_index = 3;
    state.set_page_size(25);
    assert_eq!(state.page_index, 0);
}

#[test]
fn toggle_category_adds_then_removes() {
    let mut state = RecordsState::default();
    state.toggle_category(Category::Scooter);
    state.toggle_category(Category::Sport);
    assert_eq!(state.filter.categories, vec![Category::Scooter, Category::Sport]);
    state.toggle_category(Category::Scooter);
    assert_eq!(state.filter.categories, vec![Category::Sport]);
}

// =============================================================
// Query parameters
// =============================================================

#[test]
fn page_params_always_carry_limit_and_offset() {
    let state = RecordsState::default();
    assert_eq!(
        state.page_params(),
        vec![
            ("limit".to_owned(), "10".to_owned()),
            ("offset".to_owned(), "0".to_owned()),
        ]
    );
}

#[test]
fn page_params_include_set_filters_only() {
    let mut state = RecordsState::default();
    state.set_brand_filter("Honda".to_owned());
    state.set_category_filter(Some(Category::Scooter));
    state.toggle_category(Category::Sport);
    state.toggle_category(Category::Cruiser);
    state.page_index = 2;

    let params = state.page_params();
    assert!(params.contains(&("offset".to_owned(), "20".to_owned())));
    assert!(params.contains(&("brand".to_owned(), "Honda".to_owned())));
    assert!(params.contains(&("category".to_owned(), "Scooter".to_owned())));
    assert!(params.contains(&("categories".to_owned(), "Sport,Cruiser".to_owned())));
    assert!(!params.iter().any(|(k, _)| k == "model"));
}

#[test]
fn page_params_trim_whitespace_only_filters() {
    let mut state = RecordsState::default();
    state.set_brand_filter("  ".to_owned());
    assert!(!state.page_params().iter().any(|(k, _)| k == "brand"));
}

// =============================================================
// Fetch lifecycle + cache invalidation
// =============================================================

#[test]
fn apply_page_clears_flags_and_error() {
    let mut state = RecordsState::default();
    state.fetching = true;
    state.error = Some("boom".to_owned());
    state.apply_page(page(0, 3, 3));
    assert!(!state.loading);
    assert!(!state.fetching);
    assert_eq!(state.error, None);
}

#[test]
fn apply_error_keeps_stale_page_visible() {
    let mut state = RecordsState::default();
    state.apply_page(page(0, 3, 3));
    state.fetching = true;
    state.apply_error("count request failed: 502".to_owned());
    assert_eq!(state.records.len(), 3);
    assert_eq!(state.error.as_deref(), Some("count request failed: 502"));
    assert!(!state.fetching);
}

#[test]
fn invalidate_bumps_refresh_seq() {
    let mut state = RecordsState::default();
    state.invalidate();
    state.invalidate();
    assert_eq!(state.refresh_seq, 2);
}

// =============================================================
// Client-side sorting
// =============================================================

fn priced_record(id: i64, brand: &str, mileage: u32, price: Option<f64>) -> TrainingRecord {
    let mut record = record_with_id(id);
    record.brand = brand.to_owned();
    record.condition.mileage = mileage;
    record.predicted_price = price;
    record
}

#[test]
fn toggle_sort_cycles_ascending_descending_off() {
    let mut state = RecordsState::default();
    state.toggle_sort(SortKey::Brand);
    assert_eq!(state.sort_key, Some(SortKey::Brand));
    assert!(!state.sort_descending);

    state.toggle_sort(SortKey::Brand);
    assert!(state.sort_descending);

    state.toggle_sort(SortKey::Brand);
    assert_eq!(state.sort_key, None);
    assert!(!state.sort_descending);
}

#[test]
fn toggle_sort_switching_columns_restarts_ascending() {
    let mut state = RecordsState::default();
    state.toggle_sort(SortKey::Brand);
    state.toggle_sort(SortKey::Brand);
    state.toggle_sort(SortKey::Mileage);
    assert_eq!(state.sort_key, Some(SortKey::Mileage));
    assert!(!state.sort_descending);
}

#[test]
fn sorted_records_orders_brand_case_insensitively() {
    let mut state = RecordsState::default();
    state.records = vec![
        priced_record(1, "yamaha", 0, None),
        priced_record(2, "Honda", 0, None),
        priced_record(3, "Suzuki", 0, None),
    ];
    state.toggle_sort(SortKey::Brand);
    let brands: Vec<String> = state.sorted_records().into_iter().map(|r| r.brand).collect();
    assert_eq!(brands, vec!["Honda", "Suzuki", "yamaha"]);
}

#[test]
fn sorted_records_descending_reverses_numeric_order() {
    let mut state = RecordsState::default();
    state.records = vec![
        priced_record(1, "Honda", 5_000, None),
        priced_record(2, "Honda", 20_000, None),
        priced_record(3, "Honda", 12_000, None),
    ];
    state.toggle_sort(SortKey::Mileage);
    state.toggle_sort(SortKey::Mileage);
    let mileages: Vec<u32> = state
        .sorted_records()
        .into_iter()
        .map(|r| r.condition.mileage)
        .collect();
    assert_eq!(mileages, vec![20_000, 12_000, 5_000]);
}

#[test]
fn sorted_records_put_missing_prices_last() {
    let mut state = RecordsState::default();
    state.records = vec![
        priced_record(1, "Honda", 0, None),
        priced_record(2, "Honda", 0, Some(68_000.0)),
        priced_record(3, "Honda", 0, Some(45_000.0)),
    ];
    state.toggle_sort(SortKey::PredictedPrice);
    let ids: Vec<Option<i64>> = state.sorted_records().into_iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![Some(3), Some(2), Some(1)]);
}

#[test]
fn no_sort_keeps_server_order() {
    let mut state = RecordsState::default();
    state.records = vec![
        priced_record(9, "Yamaha", 0, None),
        priced_record(1, "Honda", 0, None),
    ];
    let ids: Vec<Option<i64>> = state.sorted_records().into_iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![Some(9), Some(1)]);
}

#[test]
fn toggle_sort_leaves_paging_and_cache_alone() {
    let mut state = RecordsState::default();
    state.page_index = 2;
    let seq = state.refresh_seq;
    state.toggle_sort(SortKey::Year);
    assert_eq!(state.page_index, 2);
    assert_eq!(state.refresh_seq, seq);
}

#[test]
fn sort_key_parses_every_grid_column() {
    for column in crate::util::columns::record_columns() {
        assert!(SortKey::parse(column.key).is_some(), "column {}", column.key);
    }
    assert_eq!(SortKey::parse("actions"), None);
}

// =============================================================
// Bulk selection
// =============================================================

#[test]
fn toggle_selected_flips_membership() {
    let mut state = RecordsState::default();
    state.toggle_selected(5);
    assert!(state.selected.contains(&5));
    state.toggle_selected(5);
    assert!(!state.selected.contains(&5));
}

#[test]
fn set_page_selected_covers_only_id_bearing_rows() {
    let mut state = RecordsState::default();
    state.records = vec![record_with_id(1), TrainingRecord::default(), record_with_id(2)];
    state.set_page_selected(true);
    assert_eq!(state.selected_ids(), vec![1, 2]);
    assert!(state.page_fully_selected());

    state.set_page_selected(false);
    assert!(state.selected.is_empty());
    assert!(!state.page_fully_selected());
}

#[test]
fn selection_survives_page_swap_until_cleared() {
    let mut state = RecordsState::default();
    state.apply_page(page(0, 10, 25));
    state.toggle_selected(3);
    state.page_index = 1;
    state.apply_page(page(10, 10, 25));
    assert_eq!(state.selected_ids(), vec![3]);
    state.clear_selection();
    assert!(state.selected.is_empty());
}

#[test]
fn deselect_removes_single_id() {
    let mut state = RecordsState::default();
    state.toggle_selected(9);
    state.deselect(9);
    assert!(state.selected.is_empty());
}

// =============================================================
// Bulk delete summary
// =============================================================

#[test]
fn bulk_delete_summary_clean_sweep() {
    let resp = BulkDeleteResponse {
        status: "ok".to_owned(),
        message: "done".to_owned(),
        total_requested: 4,
        deleted_count: 4,
        ..BulkDeleteResponse::default()
    };
    assert_eq!(bulk_delete_summary(&resp), "Deleted 4 records");
}

#[test]
fn bulk_delete_summary_reports_partial_failures() {
    let resp = BulkDeleteResponse {
        status: "ok".to_owned(),
        message: "done".to_owned(),
        total_requested: 5,
        deleted_count: 2,
        not_found: vec![11, 12],
        errors: vec!["id 13: constraint".to_owned()],
    };
    assert_eq!(
        bulk_delete_summary(&resp),
        "Deleted 2 of 5 records (2 not found, 1 failed)"
    );
    assert!(resp.deleted_count + resp.not_found.len() as u64 <= resp.total_requested);
}
