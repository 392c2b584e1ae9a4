//! Registration page. Success sends the user to `/login`; it does not sign in.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::app::LOGIN_PATH;
use crate::net::types::{RegisterRequest, Role};
use crate::state::auth::AuthState;

fn validate_register_input(
    email: &str,
    password: &str,
    full_name: &str,
    role_id: &str,
) -> Result<RegisterRequest, &'static str> {
    let email = email.trim();
    let full_name = full_name.trim();
    if email.is_empty() || password.trim().is_empty() || full_name.is_empty() {
        return Err("Email, password and full name are required.");
    }
    let role = role_id
        .parse::<i64>()
        .ok()
        .map(Role::from_id)
        .filter(|r| Role::SELF_SERVICE.contains(r))
        .ok_or("Choose a role.")?;
    Ok(RegisterRequest {
        email: email.to_owned(),
        password: password.to_owned(),
        role_id: role.id(),
        full_name: full_name.to_owned(),
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let full_name = RwSignal::new(String::new());
    let role_id = RwSignal::new(Role::Student.id().to_string());
    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if auth.get_untracked().loading {
            return;
        }
        let payload = match validate_register_input(&email.get(), &password.get(), &full_name.get(), &role_id.get()) {
            Ok(payload) => payload,
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
                let flow = AuthFlow::new(ApiClient::browser(|| None), RouterNavigator(navigate));
                flow.register(&auth, &payload).await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payload;
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"CollabSphere"</h1>
                <p class="login-card__subtitle">"Create an account"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Full name"
                        prop:value=move || full_name.get()
                        on:input=move |ev| full_name.set(event_target_value(&ev))
                    />
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
                        autocomplete="new-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <select
                        class="login-input"
                        prop:value=move || role_id.get()
                        on:change=move |ev| role_id.set(event_target_value(&ev))
                    >
                        {Role::SELF_SERVICE
                            .into_iter()
                            .map(|role| view! { <option value=role.id().to_string()>{role.label()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                    <button class="login-button" type="submit" disabled=move || auth.get().loading>
                        {move || if auth.get().loading { "Creating account..." } else { "Register" }}
                    </button>
                </form>
                <Show when=move || auth.get().error.is_some()>
                    <p class="login-message login-message--error">
                        {move || auth.get().error.unwrap_or_default()}
                    </p>
                </Show>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">
                    "Already registered? "
                    <A href=LOGIN_PATH>"Sign in"</A>
                </p>
            </div>
        </div>
    }
}
