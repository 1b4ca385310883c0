use super::*;

fn filled_form() -> PredictState {
    PredictState {
        brand: "Honda".to_owned(),
        model: "Click 125i".to_owned(),
        category: Some(Category::Scooter),
        displacement: "125".to_owned(),
        transmission: Some(Transmission::Automatic),
        year_range: "2018-2025".to_owned(),
        price_min: "81400".to_owned(),
        price_max: "81400".to_owned(),
        year: "2021".to_owned(),
        mileage: 12_000,
        seller_type: "Private".to_owned(),
        owner: "2".to_owned(),
        ..PredictState::default()
    }
}

// =============================================================
// Known-issue toggles and joining
// =============================================================

#[test]
fn toggle_issue_flips_membership_in_order() {
    let mut state = PredictState::default();
    state.toggle_issue("Oil leaks");
    state.toggle_issue("Brake issues");
    assert!(state.issue_selected("Oil leaks"));
    state.toggle_issue("Oil leaks");
    assert_eq!(state.known_issues, vec!["Brake issues".to_owned()]);
}

#[test]
fn known_issues_string_comma_joins() {
    let mut state = PredictState::default();
    state.toggle_issue("Oil leaks");
    state.toggle_issue("Brake issues");
    assert_eq!(state.known_issues_string(), "Oil leaks, Brake issues");
}

#[test]
fn other_marker_is_replaced_by_free_text() {
    let mut state = PredictState::default();
    state.toggle_issue("Oil leaks");
    state.toggle_issue(OTHER_ISSUE);
    state.other_issues = "  cracked fairing  ".to_owned();
    assert_eq!(state.known_issues_string(), "Oil leaks, cracked fairing");
}

#[test]
fn other_marker_without_text_is_dropped() {
    let mut state = PredictState::default();
    state.toggle_issue(OTHER_ISSUE);
    assert_eq!(state.known_issues_string(), "");
}

// =============================================================
// build_request validation
// =============================================================

#[test]
fn filled_form_builds_the_wire_request() {
    let request = filled_form().build_request().unwrap();
    assert_eq!(request.brand, "Honda");
    assert_eq!(request.specifications.category, "Scooter");
    assert_eq!(request.specifications.transmission, "Automatic");
    assert_eq!(request.specifications.displacement, 125);
    assert_eq!(request.specifications.price_range.min, 81400.0);
    assert_eq!(request.condition.mileage, 12_000);
    assert_eq!(request.condition.known_issues, "");
}

#[test]
fn missing_brand_or_model_is_the_first_error() {
    let mut form = filled_form();
    form.brand.clear();
    assert_eq!(
        form.build_request().unwrap_err(),
        "Select a brand and model first"
    );
}

#[test]
fn bad_displacement_is_rejected() {
    let mut form = filled_form();
    form.displacement = "125cc".to_owned();
    assert_eq!(form.build_request().unwrap_err(), "Enter the displacement in cc");
}

#[test]
fn malformed_year_range_is_rejected() {
    let mut form = filled_form();
    form.year_range = "2018".to_owned();
    assert!(form.build_request().is_err());
}

#[test]
fn inverted_price_range_is_rejected() {
    let mut form = filled_form();
    form.price_min = "90000".to_owned();
    form.price_max = "80000".to_owned();
    assert_eq!(
        form.build_request().unwrap_err(),
        "Maximum price is below the minimum"
    );
}

#[test]
fn out_of_range_year_is_rejected() {
    let mut form = filled_form();
    form.year = "1850".to_owned();
    assert_eq!(form.build_request().unwrap_err(), "Enter a valid year");
}

#[test]
fn clear_resets_everything() {
    let mut form = filled_form();
    form.toggle_issue("Oil leaks");
    form.clear();
    assert_eq!(form, PredictState::default());
}

// =============================================================
// Helpers
// =============================================================

#[test]
fn valid_year_range_accepts_yyyy_dash_yyyy() {
    assert!(valid_year_range("2018-2025"));
    assert!(!valid_year_range("2018"));
    assert!(!valid_year_range("18-25"));
    assert!(!valid_year_range("2018–2025"));
    assert!(!valid_year_range("2018-25"));
}

#[test]
fn prediction_key_prefixes_the_id() {
    assert_eq!(prediction_key("abc-123"), "prediction_abc-123");
}
