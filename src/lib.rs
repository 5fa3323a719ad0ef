//! # user-directory
//!
//! Leptos + WASM client for a small user-listing interface. Fetches user
//! records from a remote REST endpoint, renders them in a table, and lets
//! the user add or delete rows that live only in local in-memory state.
//!
//! This crate contains the page, components, application state, and the
//! REST fetch helpers. All domain logic lives in plain state methods so it
//! is testable off-wasm; browser calls are gated behind the `csr` feature.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
