//! Toast stack for transient notices.
//!
//! SYSTEM CONTEXT
//! ==============
//! Anything can push into `NoticeState`; this component renders the queue
//! and schedules each new notice for dismissal after `NOTICE_TTL_MS`.

use leptos::prelude::*;

use crate::state::notice::NoticeState;

#[component]
pub fn NoticeStack() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    // Schedule each id once, as soon as it first appears.
    #[cfg(feature = "hydrate")]
    Effect::new(move |scheduled: Option<u64>| {
        let scheduled = scheduled.unwrap_or(0);
        let fresh: Vec<u64> = notices.with(|n| n.items.iter().map(|i| i.id).filter(|id| *id > scheduled).collect());
        for id in &fresh {
            let id = *id;
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(crate::state::notice::NOTICE_TTL_MS).await;
                notices.update(|n| n.dismiss(id));
            });
        }
        fresh.into_iter().max().unwrap_or(scheduled)
    });

    view! {
        <div class="notice-stack" aria-live="polite">
            <For
                each=move || notices.get().items
                key=|n| n.id
                children=move |n| {
                    let id = n.id;
                    view! {
                        <div class=format!("notice {}", n.level.css_modifier()) role="status">
                            <span class="notice__text">{n.text}</span>
                            <button
                                class="notice__close"
                                aria-label="Dismiss"
                                on:click=move |_| notices.update(|s| s.dismiss(id))
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
