//! Networking modules for the external prediction and training services.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls, `config` resolves the service base URL, and
//! `types` defines the shared wire schema.

pub mod api;
pub mod config;
pub mod types;
