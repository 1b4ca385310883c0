//! Prediction form state for the consumer price-estimate flow.
//!
//! DESIGN
//! ======
//! The form keeps raw input strings and only parses on submit so typing never
//! fights validation. `build_request` is the single gate between UI state and
//! the `/predict` wire shape; completed predictions are stored under
//! `prediction_{id}` and displayed by the result page after navigation.

#[cfg(test)]
#[path = "predict_test.rs"]
mod predict_test;

use crate::net::types::{Category, Condition, PredictionRequest, PriceRange, Specifications, Transmission};

/// Seller types accepted by the backend.
pub const SELLER_TYPES: &[&str] = &["Private", "Dealer"];

/// Owner-count options offered by the form.
pub const OWNER_OPTIONS: &[&str] = &["1", "2", "3", "4+"];

/// Common known issues offered as toggles on the form.
pub const COMMON_ISSUES: &[&str] = &[
    "Cosmetic damage",
    "Engine knocking",
    "Oil leaks",
    "Chain issues",
    "Electrical problems",
    "Transmission problems",
    "Brake issues",
    "Suspension issues",
    "Starting problems",
    "Exhaust system issues",
    "Fuel system problems",
];

/// Marker toggle that reveals the free-text issue field; never sent as-is.
pub const OTHER_ISSUE: &str = "Other";

/// Upper bound of the mileage slider, in kilometers.
pub const MILEAGE_MAX: u32 = 100_000;

/// Raw prediction form state. String fields hold user input verbatim.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PredictState {
    pub brand: String,
    pub model: String,
    pub category: Option<Category>,
    pub displacement: String,
    pub transmission: Option<Transmission>,
    pub year_range: String,
    pub price_min: String,
    pub price_max: String,
    pub year: String,
    pub mileage: u32,
    pub seller_type: String,
    pub owner: String,
    /// Toggled issue names, in toggle order.
    pub known_issues: Vec<String>,
    pub other_issues: String,
    /// True while a `/predict` request is in flight.
    pub calculating: bool,
}

impl PredictState {
    /// Flip an issue toggle on or off.
    pub fn toggle_issue(&mut self, issue: &str) {
        if let Some(pos) = self.known_issues.iter().position(|i| i == issue) {
            self.known_issues.remove(pos);
        } else {
            self.known_issues.push(issue.to_owned());
        }
    }

    #[must_use]
    pub fn issue_selected(&self, issue: &str) -> bool {
        self.known_issues.iter().any(|i| i == issue)
    }

    /// Comma-joined issue list for the wire: the `Other` marker itself is
    /// dropped and replaced by the free-text description when present.
    #[must_use]
    pub fn known_issues_string(&self) -> String {
        let mut issues: Vec<&str> = self
            .known_issues
            .iter()
            .map(String::as_str)
            .filter(|i| *i != OTHER_ISSUE)
            .collect();
        let other = self.other_issues.trim();
        if self.issue_selected(OTHER_ISSUE) && !other.is_empty() {
            issues.push(other);
        }
        issues.join(", ")
    }

    /// Validate the form and assemble the `/predict` request body.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message naming the first missing or malformed
    /// field.
    pub fn build_request(&self) -> Result<PredictionRequest, String> {
        if self.brand.trim().is_empty() || self.model.trim().is_empty() {
            return Err("Select a brand and model first".to_owned());
        }
        let category = self.category.ok_or("Select a category")?;
        let transmission = self.transmission.ok_or("Select a transmission")?;
        let displacement: u32 = self
            .displacement
            .trim()
            .parse()
            .map_err(|_| "Enter the displacement in cc".to_owned())?;
        let year_range = self.year_range.trim();
        if !valid_year_range(year_range) {
            return Err("Enter the year range as YYYY-YYYY".to_owned());
        }
        let price_min: f64 = self
            .price_min
            .trim()
            .parse()
            .map_err(|_| "Enter the minimum market price".to_owned())?;
        let price_max: f64 = self
            .price_max
            .trim()
            .parse()
            .map_err(|_| "Enter the maximum market price".to_owned())?;
        if price_max < price_min {
            return Err("Maximum price is below the minimum".to_owned());
        }
        let year: u32 = self
            .year
            .trim()
            .parse()
            .ok()
            .filter(|y| (1900..=2100).contains(y))
            .ok_or("Enter a valid year")?;
        if self.seller_type.is_empty() {
            return Err("Select a seller type".to_owned());
        }
        if self.owner.is_empty() {
            return Err("Select the owner count".to_owned());
        }

        Ok(PredictionRequest {
            brand: self.brand.trim().to_owned(),
            model: self.model.trim().to_owned(),
            specifications: Specifications {
                category: category.as_str().to_owned(),
                displacement,
                transmission: transmission.as_str().to_owned(),
                year_range: year_range.to_owned(),
                price_range: PriceRange {
                    min: price_min,
                    max: price_max,
                },
            },
            condition: Condition {
                year,
                mileage: self.mileage,
                seller_type: self.seller_type.clone(),
                owner: self.owner.clone(),
                known_issues: self.known_issues_string(),
            },
        })
    }

    /// Reset every field, keeping nothing from the previous estimate.
    pub fn clear(&mut self) {
        *self = PredictState::default();
    }
}

/// Accepts production-year spans formatted as `YYYY-YYYY`.
#[must_use]
pub fn valid_year_range(raw: &str) -> bool {
    let Some((start, end)) = raw.split_once('-') else {
        return false;
    };
    let four_digit_year =
        |s: &str| s.len() == 4 && s.chars().all(|c| c.is_ascii_digit());
    four_digit_year(start) && four_digit_year(end)
}

/// Storage key holding a completed prediction payload.
#[must_use]
pub fn prediction_key(id: &str) -> String {
    format!("prediction_{id}")
}
