//! Explicit session object for browser-persisted app state.
//!
//! DESIGN
//! ======
//! Instead of scattering localStorage reads through pages, the session is
//! restored once at app start and persisted at explicit points. The stored
//! keys match the service's historical names so existing browser profiles
//! carry over. The training cooldown lives here because it is recomputed
//! against wall-clock time on every check; it is advisory only and the
//! server remains the authoritative gate.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::util::storage;

/// Storage key for the admin gate flag ("true" or absent).
pub const ADMIN_AUTH_KEY: &str = "adminAuthenticated";
/// Storage key for the last training trigger (ISO timestamp).
pub const LAST_TRAINING_KEY: &str = "lastModelTrainingTime";

/// Client-enforced minimum interval between training triggers.
pub const TRAIN_COOLDOWN_MS: f64 = 5.0 * 60.0 * 1000.0;

/// Session state restored from and persisted to browser storage.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    /// Admin gate flag. Checking credentials is out of scope for this
    /// codebase; the flag exists so the dashboard can be toggled during
    /// development and by the hosting shell.
    pub admin_authenticated: bool,
    /// Last training trigger as epoch milliseconds, if any.
    pub last_training_ms: Option<f64>,
}

impl SessionState {
    /// Load the session from browser storage. Returns defaults on the server
    /// or when nothing was stored.
    #[must_use]
    pub fn restore() -> SessionState {
        let admin_authenticated =
            storage::load_string(ADMIN_AUTH_KEY).is_some_and(|v| v == "true");
        let last_training_ms = storage::load_string(LAST_TRAINING_KEY)
            .as_deref()
            .and_then(iso_to_ms);
        SessionState {
            admin_authenticated,
            last_training_ms,
        }
    }

    /// Write the session back to browser storage.
    pub fn persist(&self) {
        if self.admin_authenticated {
            storage::save_string(ADMIN_AUTH_KEY, "true");
        } else {
            storage::remove(ADMIN_AUTH_KEY);
        }
        match self.last_training_ms {
            Some(ms) => storage::save_string(LAST_TRAINING_KEY, &ms_to_iso(ms)),
            None => storage::remove(LAST_TRAINING_KEY),
        }
    }

    /// Stamp a training trigger at `now_ms`.
    pub fn record_training(&mut self, now_ms: f64) {
        self.last_training_ms = Some(now_ms);
    }

    /// Milliseconds of cooldown left at `now_ms`, or `None` when training may
    /// be triggered again.
    ///
    /// A stored timestamp in the future (clock skew, profile copied between
    /// machines) clamps to the full window instead of underflowing.
    #[must_use]
    pub fn cooldown_remaining_ms(&self, now_ms: f64) -> Option<f64> {
        let last = self.last_training_ms?;
        let elapsed = now_ms - last;
        if elapsed < 0.0 {
            return Some(TRAIN_COOLDOWN_MS);
        }
        let remaining = TRAIN_COOLDOWN_MS - elapsed;
        (remaining > 0.0).then_some(remaining)
    }
}

/// The train trigger is disabled precisely when a request is in flight or the
/// cooldown window has not elapsed.
#[must_use]
pub fn train_disabled(training_in_flight: bool, cooldown_remaining: Option<f64>) -> bool {
    training_in_flight || cooldown_remaining.is_some()
}

/// Render remaining cooldown as `m:ss`, rounding seconds up so the label
/// never shows `0:00` while the button is still disabled.
#[must_use]
pub fn cooldown_label(remaining_ms: f64) -> String {
    let total_secs = (remaining_ms / 1000.0).ceil().max(0.0) as u64;
    format!("{}:{:02}", total_secs / 60, total_secs % 60)
}

/// Wall-clock time in epoch milliseconds (0 on the server).
#[must_use]
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Parse an ISO timestamp into epoch milliseconds via the browser date
/// parser. Returns `None` on the server or for unparseable input.
#[must_use]
pub fn iso_to_ms(iso: &str) -> Option<f64> {
    #[cfg(feature = "hydrate")]
    {
        let ms = js_sys::Date::parse(iso);
        (!ms.is_nan()).then_some(ms)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = iso;
        None
    }
}

/// Format epoch milliseconds as an ISO timestamp via the browser date
/// formatter. Falls back to the raw millisecond value on the server.
#[must_use]
pub fn ms_to_iso(ms: f64) -> String {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(ms))
            .to_iso_string()
            .as_string()
            .unwrap_or_else(|| ms.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        ms.to_string()
    }
}
