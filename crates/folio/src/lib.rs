//! Shared library for Folio, a portfolio site with a Yew frontend.
//!
//! Holds everything below the view layer: the backend data model, the HTTP
//! client and its error taxonomy, the typed portfolio service, request state
//! for fetch-on-mount views, logging setup and macros.

pub mod api;
pub mod data;
pub mod errors;
pub mod fetch;
pub mod log;
pub mod macros;
pub mod service;

pub use serde;
pub use serde_json;
pub use tracing;
