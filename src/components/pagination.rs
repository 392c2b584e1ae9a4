//! Pager for the entity table.

use leptos::prelude::*;

use crate::state::admin::AdminState;

/// Previous/next buttons plus a "page X of Y" readout. `on_change` receives
/// the requested 1-based page.
#[component]
pub fn Pagination(on_change: Callback<u32>) -> impl IntoView {
    let admin = expect_context::<RwSignal<AdminState>>();
    let page = move || admin.with_untracked(|s| s.page);
    let summary = move || {
        admin.with(|s| format!("Page {} of {} ({} total)", s.page, s.page_count(), s.total()))
    };

    view! {
        <nav class="pagination">
            <button
                class="btn"
                disabled=move || admin.with(|s| s.loading || !s.has_prev_page())
                on:click=move |_| on_change.run(page().saturating_sub(1))
            >
                "Previous"
            </button>
            <span class="pagination__summary">{summary}</span>
            <button
                class="btn"
                disabled=move || admin.with(|s| s.loading || !s.has_next_page())
                on:click=move |_| on_change.run(page() + 1)
            >
                "Next"
            </button>
        </nav>
    }
}
