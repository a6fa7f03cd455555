//! Record shapes and their DTOs.
//!
//! Each submodule contains:
//! - A `Serialize` entity struct matching the wire format
//! - A `Deserialize` create DTO (all fields optional, presence checked on insert)
//! - A `Deserialize` update DTO listing only the mutable fields

pub mod item;
pub mod review;
pub mod series;
pub mod todo;
