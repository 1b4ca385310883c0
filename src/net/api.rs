//! REST API helpers for the prediction and training-record services.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every operation is fire-once: no retries, no backoff, no cancellation.
//! Callers get `Result<_, String>` outputs and surface failures as transient
//! notices; nothing here panics. Partial failures (bulk delete `not_found`,
//! CSV row `errors`) arrive inside successful responses and are the caller's
//! job to inspect.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{
    BulkDeleteRequest, BulkDeleteResponse, CsvUploadResponse, ModelInfo, PredictionRequest,
    PredictionResponse, RecordPage, TrainResponse, TrainingRecord,
};

#[cfg(feature = "hydrate")]
use super::config::endpoint;
#[cfg(feature = "hydrate")]
use super::types::CountResponse;

pub const TRAINING_PATH: &str = "/api/training";
pub const TRAINING_COUNT_PATH: &str = "/api/training-count";
pub const BULK_DELETE_PATH: &str = "/api/training/delete-bulk";
pub const BULK_UPLOAD_PATH: &str = "/api/training/bulk";
pub const MODEL_PATH: &str = "/model";
pub const TRAIN_PATH: &str = "/train";
pub const PREDICT_PATH: &str = "/predict";

#[cfg(any(test, feature = "hydrate"))]
fn record_path(id: i64) -> String {
    format!("{TRAINING_PATH}/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(what: &str, status: u16) -> String {
    format!("{what} request failed: {status}")
}

/// Fetch one page of training records together with the filtered total.
///
/// Issues two concurrent GETs (`/api/training` and `/api/training-count`)
/// carrying identical query parameters; both must succeed for the combined
/// page to resolve.
///
/// # Errors
///
/// Returns an error string when either request fails or returns non-success.
pub async fn fetch_training_page(
    offset: u64,
    params: &[(String, String)],
) -> Result<RecordPage, String> {
    #[cfg(feature = "hydrate")]
    {
        let records = async {
            let resp = gloo_net::http::Request::get(&endpoint(TRAINING_PATH))
                .query(params.iter().map(|(k, v)| (k.as_str(), v.as_str())))
                .send()
                .await
                .map_err(|e| e.to_string())?;
            if !resp.ok() {
                return Err(request_failed_message("training records", resp.status()));
            }
            resp.json::<Vec<TrainingRecord>>()
                .await
                .map_err(|e| e.to_string())
        };
        let count = async {
            let resp = gloo_net::http::Request::get(&endpoint(TRAINING_COUNT_PATH))
                .query(params.iter().map(|(k, v)| (k.as_str(), v.as_str())))
                .send()
                .await
                .map_err(|e| e.to_string())?;
            if !resp.ok() {
                return Err(request_failed_message("record count", resp.status()));
            }
            resp.json::<CountResponse>().await.map_err(|e| e.to_string())
        };
        let (records, count) = futures::future::try_join(records, count).await?;
        Ok(RecordPage::assemble(offset, records, count.total))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (offset, params);
        Err("not available on server".to_owned())
    }
}

/// Replace a training record in full via `PUT /api/training/{id}`.
///
/// # Errors
///
/// Returns an error string when the record has no id, the HTTP request fails,
/// or the server responds with a non-OK status.
pub async fn update_training_record(record: &TrainingRecord) -> Result<TrainingRecord, String> {
    #[cfg(feature = "hydrate")]
    {
        let id = record.id.ok_or_else(|| "record has no id".to_owned())?;
        let resp = gloo_net::http::Request::put(&endpoint(&record_path(id)))
            .json(record)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("record update", resp.status()));
        }
        resp.json::<TrainingRecord>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = record;
        Err("not available on server".to_owned())
    }
}

/// Delete one training record via `DELETE /api/training/{id}`.
///
/// # Errors
///
/// Returns an error string when the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn delete_training_record(id: i64) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&endpoint(&record_path(id)))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("record delete", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err("not available on server".to_owned())
    }
}

/// Delete a set of records via `POST /api/training/delete-bulk`.
///
/// A successful response can still report per-id failures; inspect
/// [`BulkDeleteResponse::is_partial`].
///
/// # Errors
///
/// Returns an error string when the HTTP request itself fails or the server
/// responds with a non-OK status.
pub async fn bulk_delete_training(ids: Vec<i64>) -> Result<BulkDeleteResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = BulkDeleteRequest { ids };
        let resp = gloo_net::http::Request::post(&endpoint(BULK_DELETE_PATH))
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("bulk delete", resp.status()));
        }
        resp.json::<BulkDeleteResponse>()
            .await
            .map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = BulkDeleteRequest { ids };
        Err("not available on server".to_owned())
    }
}

/// Upload a CSV of training records as multipart form data via
/// `POST /api/training/bulk`.
///
/// A non-empty `errors` array in the response means partial ingestion, not
/// total failure.
///
/// # Errors
///
/// Returns an error string when the form cannot be built, the HTTP request
/// fails, or the server responds with a non-OK status.
#[cfg(feature = "hydrate")]
pub async fn upload_training_csv(file: &web_sys::File) -> Result<CsvUploadResponse, String> {
    let form = web_sys::FormData::new().map_err(|_| "could not build form data".to_owned())?;
    form.append_with_blob("file", file)
        .map_err(|_| "could not attach file".to_owned())?;
    let resp = gloo_net::http::Request::post(&endpoint(BULK_UPLOAD_PATH))
        .body(form)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(request_failed_message("CSV upload", resp.status()));
    }
    resp.json::<CsvUploadResponse>().await.map_err(|e| e.to_string())
}

/// Summarize a CSV upload outcome as a notice: full success or partial
/// ingestion with the rejected-row count.
#[must_use]
pub fn upload_summary(resp: &CsvUploadResponse) -> (bool, String) {
    if resp.errors.is_empty() {
        (false, resp.message.clone())
    } else {
        (
            true,
            format!("{} — {} row(s) rejected", resp.message, resp.errors.len()),
        )
    }
}

/// Fetch metadata for the currently trained model via `GET /model`.
///
/// # Errors
///
/// Returns an error string when the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn fetch_model_info() -> Result<ModelInfo, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&endpoint(MODEL_PATH))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("model info", resp.status()));
        }
        resp.json::<ModelInfo>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Trigger a model training run via `POST /train` (no request body).
///
/// The client-side cooldown is advisory only; the server remains the
/// authoritative gate on training frequency.
///
/// # Errors
///
/// Returns an error string when the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn trigger_training() -> Result<TrainResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&endpoint(TRAIN_PATH))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("training", resp.status()));
        }
        resp.json::<TrainResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Request a price estimate via `POST /predict`.
///
/// # Errors
///
/// Returns an error string when the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn predict_price(request: &PredictionRequest) -> Result<PredictionResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&endpoint(PREDICT_PATH))
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("prediction", resp.status()));
        }
        resp.json::<PredictionResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err("not available on server".to_owned())
    }
}
