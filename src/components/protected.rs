//! Route guard wrapper for authenticated screens.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::app::SessionSignal;
use crate::util::guard::{GuardState, install_unauth_redirect};

/// Renders `children` only for an authenticated session. Renders nothing
/// while the session is still being read, and redirects to `/login` once it
/// is known to be empty.
#[component]
pub fn Protected(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionSignal>();
    install_unauth_redirect(session, use_navigate());

    let state = Memo::new(move |_| session.with(|s| GuardState::from_session(s.session())));

    view! {
        <Show when=move || state.get() == GuardState::Authenticated>
            {children()}
        </Show>
    }
}
