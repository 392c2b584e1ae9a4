//! Admin dashboard: searchable, paginated CRUD over subjects, classes and
//! users.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route, rendered inside `Protected`.
//! All list and mutation logic lives in `state::admin`; this page wires DOM
//! events to it and runs the async operations with `spawn_local`.
//!
//! A memo over (kind, search, page) drives reloads, so selecting a tab, a
//! search or a page fetches exactly once. Deletes and saves reload on their
//! own after success.

use leptos::prelude::*;

use crate::app::SessionSignal;
use crate::components::app_header::AppHeader;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::entity_form::EntityFormDialog;
use crate::components::entity_table::EntityTable;
use crate::components::pagination::Pagination;
use crate::net::types::RecordId;
use crate::state::admin::AdminState;
use crate::state::entity::EntityKind;
use crate::state::notice::NoticeState;

#[derive(Clone, Copy, Debug)]
enum AdminOp {
    Load,
    ResolveDelete { confirmed: bool },
    Submit,
}

/// Run an admin operation against the browser API client.
fn spawn_op(session: SessionSignal, admin: RwSignal<AdminState>, notices: RwSignal<NoticeState>, op: AdminOp) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::net::api::ApiClient;
        use crate::state::admin::{load_page, resolve_delete, submit_form};

        let api = ApiClient::browser(move || session.with_untracked(|s| s.token()));
        match op {
            AdminOp::Load => load_page(&api, &admin, &notices).await,
            AdminOp::ResolveDelete { confirmed } => resolve_delete(&api, &admin, &notices, confirmed).await,
            AdminOp::Submit => submit_form(&api, &admin, &notices).await,
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, admin, notices, op);
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<SessionSignal>();
    let admin = expect_context::<RwSignal<AdminState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let search_input = RwSignal::new(admin.with_untracked(|s| s.search.clone()));

    let query_key = Memo::new(move |_| admin.with(|s| (s.kind, s.search.clone(), s.page)));
    Effect::new(move || {
        query_key.track();
        spawn_op(session, admin, notices, AdminOp::Load);
    });

    let on_edit = Callback::new(move |id: RecordId| admin.update(|s| s.open_edit(&id)));
    let on_delete_request = Callback::new(move |id: RecordId| admin.update(|s| s.request_delete(id)));
    let on_delete_confirm =
        Callback::new(move |()| spawn_op(session, admin, notices, AdminOp::ResolveDelete { confirmed: true }));
    let on_delete_cancel =
        Callback::new(move |()| spawn_op(session, admin, notices, AdminOp::ResolveDelete { confirmed: false }));
    let on_form_submit = Callback::new(move |()| spawn_op(session, admin, notices, AdminOp::Submit));
    let on_form_cancel = Callback::new(move |()| admin.update(AdminState::close_form));
    let on_page = Callback::new(move |page: u32| admin.update(|s| s.set_page(page)));

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        admin.update(|s| s.set_search(search_input.get_untracked()));
    };

    let kind_tabs = EntityKind::ALL
        .into_iter()
        .map(|kind| {
            view! {
                <button
                    class="btn entity-tabs__tab"
                    class:entity-tabs__tab--active=move || admin.with(|s| s.kind == kind)
                    on:click=move |_| admin.update(|s| s.select_kind(kind))
                >
                    {kind.label()}
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="dashboard-page">
            <AppHeader/>
            <div class="dashboard-page__toolbar">
                <nav class="entity-tabs">{kind_tabs}</nav>
                <form class="search-form" on:submit=on_search>
                    <input
                        class="search-form__input"
                        type="search"
                        placeholder=move || format!("Search {}", admin.with(|s| s.kind.slug()))
                        prop:value=move || search_input.get()
                        on:input=move |ev| search_input.set(event_target_value(&ev))
                    />
                    <button class="btn" type="submit">
                        "Search"
                    </button>
                </form>
                <span class="toolbar__spacer"></span>
                <button
                    class="btn"
                    disabled=move || admin.with(|s| s.loading)
                    on:click=move |_| spawn_op(session, admin, notices, AdminOp::Load)
                >
                    "Refresh"
                </button>
                <button class="btn btn--primary" on:click=move |_| admin.update(AdminState::open_create)>
                    {move || format!("+ New {}", admin.with(|s| s.kind.noun()))}
                </button>
            </div>

            <EntityTable on_edit=on_edit on_delete=on_delete_request/>
            <Pagination on_change=on_page/>

            <Show when=move || admin.with(|s| s.pending_delete.is_some())>
                {move || {
                    let (noun, id) = admin
                        .with_untracked(|s| {
                            (s.kind.noun(), s.pending_delete.as_ref().map(ToString::to_string).unwrap_or_default())
                        });
                    view! {
                        <ConfirmDialog
                            title=format!("Delete {noun}")
                            message=format!("This will permanently delete {} {id}.", noun.to_lowercase())
                            on_confirm=on_delete_confirm
                            on_cancel=on_delete_cancel
                        />
                    }
                }}
            </Show>
            <Show when=move || admin.with(|s| s.form.is_some())>
                <EntityFormDialog on_submit=on_form_submit on_cancel=on_form_cancel/>
            </Show>
        </div>
    }
}
