//! Create/edit modal for the selected entity kind.
//!
//! DESIGN
//! ======
//! Inputs write raw text into `AdminState::form`; conversion and validation
//! happen in `FormState::to_payload` on submit. The field list is memoized so
//! typing does not rebuild the inputs.

use leptos::prelude::*;

use crate::state::admin::AdminState;
use crate::state::entity::{FieldKind, FieldSpec};

#[component]
pub fn EntityFormDialog(on_submit: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let admin = expect_context::<RwSignal<AdminState>>();

    let title = Memo::new(move |_| {
        admin.with(|s| {
            s.form
                .as_ref()
                .map(|f| format!("{} {}", if f.is_edit() { "Edit" } else { "New" }, f.kind.noun()))
                .unwrap_or_default()
        })
    });
    let fields = Memo::new(move |_| {
        admin.with(|s| {
            s.form
                .as_ref()
                .map(|f| f.visible_fields().copied().collect::<Vec<_>>())
                .unwrap_or_default()
        })
    });
    let error = move || admin.with(|s| s.form.as_ref().and_then(|f| f.error.clone()));
    let saving = move || admin.with(|s| s.saving);

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{move || title.get()}</h2>
                <form
                    class="dialog__form"
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        on_submit.run(());
                    }
                >
                    {move || fields.get().into_iter().map(|spec| field_view(admin, spec)).collect::<Vec<_>>()}
                    <Show when=move || error().is_some()>
                        <p class="dialog__danger">{move || error().unwrap_or_default()}</p>
                    </Show>
                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| on_cancel.run(())>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" type="submit" disabled=saving>
                            {move || if saving() { "Saving..." } else { "Save" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

fn field_view(admin: RwSignal<AdminState>, spec: FieldSpec) -> impl IntoView {
    let key = spec.key;
    let value = move || admin.with(|s| s.form.as_ref().map(|f| f.value(key).to_owned()).unwrap_or_default());
    let set = move |text: String| {
        admin.update(|s| {
            if let Some(f) = s.form.as_mut() {
                f.set_value(key, text);
            }
        });
    };
    let label = if spec.required { format!("{} *", spec.label) } else { spec.label.to_owned() };

    let input = match spec.kind {
        FieldKind::Checkbox => view! {
            <input
                class="dialog__checkbox"
                type="checkbox"
                prop:checked=move || value() == "true"
                on:change=move |ev| set(event_target_checked(&ev).to_string())
            />
        }
        .into_any(),
        FieldKind::Text | FieldKind::Email | FieldKind::Password | FieldKind::Number => view! {
            <input
                class="dialog__input"
                type=spec.kind.input_type()
                prop:value=value
                on:input=move |ev| set(event_target_value(&ev))
            />
        }
        .into_any(),
    };

    view! {
        <label class="dialog__label">
            {label}
            {input}
        </label>
    }
}
