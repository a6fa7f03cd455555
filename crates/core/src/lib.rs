//! Domain primitives shared by the store and API crates.

pub mod error;
pub mod types;
pub mod validation;
