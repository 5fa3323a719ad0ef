//! Top-level pages.

pub mod users;
