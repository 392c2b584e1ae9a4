//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the admin dashboard chrome and dialogs while reading and
//! writing shared state from Leptos context providers.

pub mod app_header;
pub mod confirm_dialog;
pub mod entity_form;
pub mod entity_table;
pub mod notices;
pub mod pagination;
pub mod protected;
