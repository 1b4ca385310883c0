//! Display formatting helpers for prices, distances, and timestamps.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Group a non-negative integer with comma thousands separators.
#[must_use]
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i).is_multiple_of(3) {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Format a price in whole pesos, e.g. `₱68,000`.
#[must_use]
pub fn format_peso(amount: f64) -> String {
    format!("₱{}", group_thousands(amount.round().max(0.0) as u64))
}

/// Format a mileage reading, e.g. `12,000 km`.
#[must_use]
pub fn format_km(km: u32) -> String {
    format!("{} km", group_thousands(u64::from(km)))
}

/// Date portion of an ISO timestamp, or the input unchanged when it is too
/// short to carry one.
#[must_use]
pub fn date_only(iso: &str) -> &str {
    if iso.len() >= 10 && iso.is_char_boundary(10) && iso.as_bytes().get(4) == Some(&b'-') {
        &iso[..10]
    } else {
        iso
    }
}
