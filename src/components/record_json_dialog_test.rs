use super::record_json;
use crate::net::types::TrainingRecord;

#[test]
fn record_json_uses_wire_field_names() {
    let record = TrainingRecord {
        id: Some(7),
        brand: "Honda".to_owned(),
        predicted_price: Some(68_000.0),
        ..TrainingRecord::default()
    };
    let json = record_json(&record);
    assert!(json.contains("\"predictedPrice\""));
    assert!(json.contains("\"yearRange\""));
    assert!(json.contains("\"Honda\""));
}

#[test]
fn record_json_is_pretty_printed() {
    let json = record_json(&TrainingRecord::default());
    assert!(json.contains('\n'));
    assert!(json.starts_with('{'));
}
