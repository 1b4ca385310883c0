use super::*;

#[test]
fn record_path_formats_expected_endpoint() {
    assert_eq!(record_path(42), "/api/training/42");
}

#[test]
fn request_failed_message_formats_status() {
    assert_eq!(
        request_failed_message("bulk delete", 502),
        "bulk delete request failed: 502"
    );
}

#[test]
fn upload_summary_full_success_is_not_partial() {
    let resp = CsvUploadResponse {
        message: "12 records imported".to_owned(),
        errors: Vec::new(),
    };
    let (partial, text) = upload_summary(&resp);
    assert!(!partial);
    assert_eq!(text, "12 records imported");
}

#[test]
fn upload_summary_reports_rejected_row_count() {
    let resp = CsvUploadResponse {
        message: "10 records imported".to_owned(),
        errors: vec!["row 3: bad year".to_owned(), "row 7: missing model".to_owned()],
    };
    let (partial, text) = upload_summary(&resp);
    assert!(partial);
    assert_eq!(text, "10 records imported — 2 row(s) rejected");
}

#[test]
fn upload_summary_zero_valid_rows_still_summarizes() {
    let resp = CsvUploadResponse {
        message: "0 records imported".to_owned(),
        errors: vec!["row 2: missing brand".to_owned()],
    };
    let (partial, text) = upload_summary(&resp);
    assert!(partial);
    assert!(text.starts_with("0 records imported"));
}
