//! Hooks binding component lifecycles to backend data.

pub mod use_portfolio;

pub use use_portfolio::*;
