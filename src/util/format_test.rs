use super::*;

#[test]
fn group_thousands_inserts_separators() {
    assert_eq!(group_thousands(0), "0");
    assert_eq!(group_thousands(999), "999");
    assert_eq!(group_thousands(1_000), "1,000");
    assert_eq!(group_thousands(12_000), "12,000");
    assert_eq!(group_thousands(1_234_567), "1,234,567");
}

#[test]
fn format_peso_rounds_to_whole_units() {
    assert_eq!(format_peso(68_000.0), "₱68,000");
    assert_eq!(format_peso(89_500.4), "₱89,500");
    assert_eq!(format_peso(89_499.6), "₱89,500");
    assert_eq!(format_peso(-5.0), "₱0");
}

#[test]
fn format_km_appends_unit() {
    assert_eq!(format_km(12_000), "12,000 km");
    assert_eq!(format_km(0), "0 km");
}

#[test]
fn date_only_slices_iso_timestamps() {
    assert_eq!(date_only("2025-03-14T08:30:00Z"), "2025-03-14");
    assert_eq!(date_only("2025-03-14"), "2025-03-14");
    assert_eq!(date_only("yesterday"), "yesterday");
}

#[test]
fn date_only_passes_through_multibyte_input_unsliced() {
    // 'é' spans bytes 9..11, so byte 10 is not a char boundary.
    let garbled = "2025-03-1é+08";
    assert!(!garbled.is_char_boundary(10));
    assert_eq!(date_only(garbled), garbled);
}
