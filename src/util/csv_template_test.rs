use super::*;

#[test]
fn template_starts_with_the_expected_header() {
    let csv = template_csv();
    assert!(csv.starts_with(TEMPLATE_HEADER));
    assert_eq!(csv.lines().next().unwrap().split(',').count(), 14);
}

#[test]
fn template_sample_rows_match_the_header_width() {
    let csv = template_csv();
    let width = TEMPLATE_HEADER.split(',').count();
    for row in csv.lines().skip(1).take(3) {
        assert_eq!(row.split(',').count(), width, "row: {row}");
    }
}

#[test]
fn guide_lists_every_category_and_transmission() {
    let csv = template_csv();
    for category in Category::ALL {
        assert!(csv.contains(&format!("# - {category}")), "missing {category}");
    }
    assert!(csv.contains("# - Semi-Automatic"));
    assert!(csv.contains("# - CVT"));
    assert!(csv.contains("# - None"));
}

#[test]
fn guide_is_fully_commented() {
    let csv = template_csv();
    let guide_start = csv.find("# ====").unwrap();
    for line in csv[guide_start..].lines() {
        assert!(line.starts_with('#'), "uncommented guide line: {line}");
    }
}
