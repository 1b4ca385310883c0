//! Model-metadata state for the admin dashboard badge and train trigger.
//!
//! DESIGN
//! ======
//! Model info is read-only fetched data; only the `training` flag is mutated
//! locally, and only for the duration of an in-flight `/train` request.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use crate::net::types::ModelInfo;

/// Fetched model metadata plus request lifecycle flags.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModelState {
    pub info: Option<ModelInfo>,
    pub loading: bool,
    pub error: Option<String>,
    /// True while a `/train` request is in flight.
    pub training: bool,
}

impl ModelState {
    /// Replace the cached metadata with a resolved fetch result.
    pub fn apply_info(&mut self, info: ModelInfo) {
        self.info = Some(info);
        self.loading = false;
        self.error = None;
    }

    /// Record a fetch failure; any stale metadata stays visible.
    pub fn apply_error(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }
}
