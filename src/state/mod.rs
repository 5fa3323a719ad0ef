//! Client-side application state.
//!
//! DESIGN
//! ======
//! State is a plain model type mutated through methods, wrapped in an
//! `RwSignal` that is scoped to the owning page instance rather than
//! provided as a context singleton.

pub mod users;
