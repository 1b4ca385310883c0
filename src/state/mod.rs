//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`records`, `session`, `model`, etc.) so
//! individual components can depend on small focused models. Every module is
//! plain data with pure methods; browser effects live behind explicit
//! boundaries (`session::restore`/`persist`) or in `net`/`util`.

pub mod model;
pub mod notify;
pub mod predict;
pub mod records;
pub mod session;
