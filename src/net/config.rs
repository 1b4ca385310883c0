//! API endpoint configuration.
//!
//! The service base URL comes from the `MOTOPRICE_API_URL` environment
//! variable at build time. When unset, endpoints stay relative and requests
//! go to the origin that served the app.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

const BASE_URL: Option<&str> = option_env!("MOTOPRICE_API_URL");

/// Configured base URL, or the empty string for same-origin requests.
#[must_use]
pub fn api_base_url() -> &'static str {
    BASE_URL.unwrap_or("")
}

/// Absolute or origin-relative URL for an API path.
#[must_use]
pub fn endpoint(path: &str) -> String {
    join(api_base_url(), path)
}

fn join(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    format!("{base}{path}")
}
