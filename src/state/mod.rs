//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `auth`, `admin`, `notice`) so
//! individual pages depend on small focused models. The models are plain
//! structs; in the app they live inside `RwSignal`s provided via context, and
//! the async flows reach them through [`Shared`] so the same code runs against
//! a `RefCell` in tests.

pub mod admin;
pub mod auth;
pub mod entity;
pub mod notice;
pub mod session;

use std::cell::RefCell;

use leptos::prelude::{RwSignal, Update, WithUntracked};

/// Interior-mutable handle to a state model.
///
/// Borrows are scoped to the closure, so a flow can never hold one across an
/// `.await`.
pub trait Shared<T> {
    fn update_with(&self, f: impl FnOnce(&mut T));
    fn read_with<R>(&self, f: impl FnOnce(&T) -> R) -> R;
}

impl<T> Shared<T> for RefCell<T> {
    fn update_with(&self, f: impl FnOnce(&mut T)) {
        f(&mut *self.borrow_mut());
    }

    fn read_with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&*self.borrow())
    }
}

impl<T: Send + Sync + 'static> Shared<T> for RwSignal<T> {
    fn update_with(&self, f: impl FnOnce(&mut T)) {
        self.update(f);
    }

    fn read_with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.with_untracked(f)
    }
}
