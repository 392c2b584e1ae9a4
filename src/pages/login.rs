//! Login page: email + password against the OAuth2 password endpoint.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::app::REGISTER_PATH;
use crate::state::auth::AuthState;

fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.trim().is_empty() {
        return Err("Enter both email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    #[cfg(feature = "hydrate")]
    let (session, navigate) = (
        expect_context::<crate::app::SessionSignal>(),
        leptos_router::hooks::use_navigate(),
    );

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if auth.get_untracked().loading {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(message) => {
                auth.update(|a| a.error = Some(message.to_owned()));
                return;
            }
        };

        #[cfg(feature = "hydrate")]
        {
            use crate::net::api::ApiClient;
            use crate::state::auth::{AuthFlow, RouterNavigator};

            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let api = ApiClient::browser(move || session.with_untracked(|s| s.token()));
                let flow = AuthFlow::new(api, RouterNavigator(navigate));
                flow.login(&session, &auth, &email_value, &password_value).await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"CollabSphere"</h1>
                <p class="login-card__subtitle">"Sign in to continue"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@university.edu"
                        autocomplete="username"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || auth.get().loading>
                        {move || if auth.get().loading { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <Show when=move || auth.get().error.is_some()>
                    <p class="login-message login-message--error">
                        {move || auth.get().error.unwrap_or_default()}
                    </p>
                </Show>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">
                    "No account? "
                    <A href=REGISTER_PATH>"Register"</A>
                </p>
            </div>
        </div>
    }
}
