//! Utility helpers shared across pages and state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, redirects) from page and
//! component logic so the logic can be exercised in native tests.

pub mod guard;
pub mod storage;
