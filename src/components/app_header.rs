//! Top bar with the signed-in identity and logout.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::app::SessionSignal;
use crate::net::types::Role;
use crate::state::auth::{AuthState, RouterNavigator, logout};

#[component]
pub fn AppHeader() -> impl IntoView {
    let session = expect_context::<SessionSignal>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let identity = move || {
        session.with(|s| {
            s.session()
                .user
                .as_ref()
                .map(|u| {
                    let role = u.role().map(Role::label).unwrap_or_default();
                    (u.display_name().to_owned(), role)
                })
                .unwrap_or_else(|| ("Signed in".to_owned(), String::new()))
        })
    };

    let on_logout = move |_| logout(&session, &auth, &RouterNavigator(navigate.clone()));

    view! {
        <header class="dashboard-page__header toolbar">
            <span class="toolbar__board-name">"CollabSphere Admin"</span>
            <span class="toolbar__spacer"></span>
            <span class="toolbar__self">
                {move || identity().0}
                <Show when=move || !identity().1.is_empty()>
                    " ("
                    <span class="toolbar__self-method">{move || identity().1}</span>
                    ")"
                </Show>
            </span>
            <button class="btn toolbar__logout" on:click=on_logout title="Logout">
                "Logout"
            </button>
        </header>
    }
}
