//! Declarative column descriptors for the admin record grid.
//!
//! DESIGN
//! ======
//! The table renders from a plain descriptor list instead of hardcoding cells
//! so column order, headers, and cell text stay testable without a DOM.

#[cfg(test)]
#[path = "columns_test.rs"]
mod columns_test;

use crate::net::types::TrainingRecord;
use crate::util::format::{date_only, format_km, format_peso};

/// One grid column: a stable key, a header label, and a cell renderer.
pub struct Column {
    pub key: &'static str,
    pub header: &'static str,
    pub render: fn(&TrainingRecord) -> String,
}

/// Columns of the training-record grid, in display order.
#[must_use]
pub fn record_columns() -> Vec<Column> {
    vec![
        Column {
            key: "brand",
            header: "Brand",
            render: |r| r.brand.clone(),
        },
        Column {
            key: "model",
            header: "Model",
            render: |r| r.model.clone(),
        },
        Column {
            key: "mileage",
            header: "Mileage",
            render: |r| {
                if r.condition.mileage == 0 {
                    "-".to_owned()
                } else {
                    format_km(r.condition.mileage)
                }
            },
        },
        Column {
            key: "displacement",
            header: "Displacement",
            render: |r| format!("{} cc", r.specifications.displacement),
        },
        Column {
            key: "year",
            header: "Year",
            render: |r| r.condition.year.to_string(),
        },
        Column {
            key: "predicted_price",
            header: "Predicted Price",
            render: |r| r.predicted_price.map_or_else(|| "-".to_owned(), format_peso),
        },
        Column {
            key: "created_at",
            header: "Created At",
            render: |r| {
                r.created_at
                    .as_deref()
                    .map_or_else(|| "-".to_owned(), |iso| date_only(iso).to_owned())
            },
        },
    ]
}
