//! Page sections and the small widgets they share.
//!
//! Each section owns its data hook and renders one of loading, error or
//! content from it.

pub mod contact;
pub mod experience;
pub mod footer;
pub mod header;
pub mod hero;
pub mod projects;
pub mod status;

pub use contact::*;
pub use experience::*;
pub use footer::*;
pub use header::*;
pub use hero::*;
pub use projects::*;
pub use status::*;
