//! Shared services for components.

pub mod api;
