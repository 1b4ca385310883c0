//! Wire schema shared with the prediction and training-record services.
//!
//! The backend speaks mostly camelCase JSON with a couple of snake_case
//! holdouts (`created_at`, the `ml_price`/`gpt_price`/`heuristic_price`
//! trio), so renames are applied per-struct rather than globally.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Fixed motorcycle category vocabulary used by filters and forms.
///
/// The wire keeps categories as plain strings so unknown values coming back
/// from bulk-imported data never poison a whole page deserialization; this
/// enum is the client-side closed set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Scooter,
    Underbone,
    Backbone,
    Sport,
    Adventure,
    Cruiser,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 6] = [
        Category::Scooter,
        Category::Underbone,
        Category::Backbone,
        Category::Sport,
        Category::Adventure,
        Category::Cruiser,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Scooter => "Scooter",
            Category::Underbone => "Underbone",
            Category::Backbone => "Backbone",
            Category::Sport => "Sport",
            Category::Adventure => "Adventure",
            Category::Cruiser => "Cruiser",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.as_str() == raw)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fixed transmission vocabulary used by forms and the CSV template guide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transmission {
    Manual,
    Automatic,
    SemiAutomatic,
    Cvt,
}

impl Transmission {
    /// All transmissions, in display order.
    pub const ALL: [Transmission; 4] = [
        Transmission::Manual,
        Transmission::Automatic,
        Transmission::SemiAutomatic,
        Transmission::Cvt,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Transmission::Manual => "Manual",
            Transmission::Automatic => "Automatic",
            Transmission::SemiAutomatic => "Semi-Automatic",
            Transmission::Cvt => "CVT",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Transmission> {
        Transmission::ALL.into_iter().find(|t| t.as_str() == raw)
    }
}

impl fmt::Display for Transmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Catalog price band for a model, in whole currency units.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

/// Model-level specifications attached to a record or prediction request.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Specifications {
    pub category: String,
    pub displacement: u32,
    pub transmission: String,
    /// Production years as `"YYYY-YYYY"`.
    pub year_range: String,
    pub price_range: PriceRange,
}

/// Unit-level condition attributes for one motorcycle.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    pub year: u32,
    /// Odometer reading in kilometers.
    pub mileage: u32,
    pub seller_type: String,
    pub owner: String,
    /// Comma-joined issue names; empty when none reported.
    pub known_issues: String,
}

/// One labeled training example as stored by the backend.
///
/// `id` is assigned server-side and absent before creation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainingRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub brand: String,
    pub model: String,
    pub specifications: Specifications,
    pub condition: Condition,
    #[serde(
        rename = "predictedPrice",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub predicted_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Response body of `GET /api/training-count`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountResponse {
    pub total: u64,
}

/// One fetched page of training records plus the matching total.
///
/// Not a wire type itself; assembled from the record and count responses that
/// are requested concurrently with identical filter parameters.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordPage {
    pub records: Vec<TrainingRecord>,
    pub total: u64,
    pub has_more: bool,
}

impl RecordPage {
    /// Combine the two halves of a page fetch.
    ///
    /// `has_more` holds exactly when `offset + records.len() < total`.
    #[must_use]
    pub fn assemble(offset: u64, records: Vec<TrainingRecord>, total: u64) -> RecordPage {
        let has_more = offset + (records.len() as u64) < total;
        RecordPage {
            records,
            total,
            has_more,
        }
    }
}

/// Request body of `POST /api/training/delete-bulk`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkDeleteRequest {
    pub ids: Vec<i64>,
}

/// Response body of `POST /api/training/delete-bulk`.
///
/// An overall success status does not imply every id was deleted: ids may
/// come back in `not_found` or `errors` while the call itself succeeds.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BulkDeleteResponse {
    pub status: String,
    pub message: String,
    pub total_requested: u64,
    pub deleted_count: u64,
    #[serde(default)]
    pub not_found: Vec<i64>,
    #[serde(default)]
    pub errors: Vec<String>,
}

impl BulkDeleteResponse {
    /// True when some requested ids were not deleted.
    #[must_use]
    pub fn is_partial(&self) -> bool {
        !self.not_found.is_empty() || !self.errors.is_empty()
    }
}

/// Response body of `POST /api/training/bulk` (CSV upload).
///
/// A non-empty `errors` array means some rows were rejected while the rest
/// were ingested; it is not a failure of the upload call.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CsvUploadResponse {
    pub message: String,
    #[serde(default)]
    pub errors: Vec<String>,
}

/// Response body of `POST /train`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainResponse {
    pub status: String,
    pub message: String,
    #[serde(default)]
    pub training_status: serde_json::Value,
}

/// Descriptive metadata for the currently trained model (`GET /model`).
/// Read-only; never mutated by the client.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub model: ModelSummary,
    pub performance: ModelPerformance,
    pub specs: ModelSpecs,
}

/// Identity block of [`ModelInfo`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelSummary {
    pub name: String,
    pub version: String,
    /// ISO timestamp of the last completed training run.
    pub training_date: String,
}

/// Accuracy metrics block of [`ModelInfo`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelPerformance {
    pub mae: f64,
    pub rmse: f64,
    pub r2_score: f64,
}

/// Feature inventory block of [`ModelInfo`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelSpecs {
    pub features_count: u32,
    pub encoders_count: u32,
    #[serde(default)]
    pub top_features: Vec<String>,
}

/// Request body of `POST /predict`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub brand: String,
    pub model: String,
    pub specifications: Specifications,
    pub condition: Condition,
}

/// Response body of `POST /predict`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub confidence: String,
    #[serde(rename = "pricePredicted")]
    pub price_predicted: f64,
    pub description: String,
    #[serde(default)]
    pub ml_price: Option<f64>,
    #[serde(default)]
    pub gpt_price: Option<f64>,
    #[serde(default)]
    pub heuristic_price: Option<f64>,
}

/// A completed prediction persisted under `prediction_{id}` for the result
/// page to display after navigation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StoredPrediction {
    pub id: String,
    pub brand: String,
    pub model: String,
    #[serde(flatten)]
    pub result: PredictionResponse,
    pub specifications: Specifications,
    pub condition: Condition,
}

impl StoredPrediction {
    /// Bind a prediction response to the request it answered.
    #[must_use]
    pub fn from_parts(
        id: String,
        request: &PredictionRequest,
        result: PredictionResponse,
    ) -> StoredPrediction {
        StoredPrediction {
            id,
            brand: request.brand.clone(),
            model: request.model.clone(),
            result,
            specifications: request.specifications.clone(),
            condition: request.condition.clone(),
        }
    }
}
