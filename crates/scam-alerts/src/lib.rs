//! Community scam-reporting service.
//!
//! The library crate holds the domain model and the services the HTTP layer
//! composes: identity/session handling, report intake and moderation, the
//! verified-agency directory, and the derived list views the public pages
//! render. Storage is abstracted behind repository traits so the in-memory
//! implementations in the api crate can be swapped for a persistent store
//! without touching callers.

pub mod agencies;
pub mod config;
pub mod error;
pub mod identity;
pub mod latency;
pub mod reports;
pub mod storage;
pub mod telemetry;
