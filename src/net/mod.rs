//! Network layer: wire DTOs and REST fetch helpers.

pub mod api;
pub mod types;
