//! Reusable view components.

pub mod add_user_form;
pub mod user_table;
