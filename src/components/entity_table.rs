//! Record table for the selected entity kind.

#[cfg(test)]
#[path = "entity_table_test.rs"]
mod entity_table_test;

use leptos::prelude::*;
use serde_json::Value;

use crate::net::types::{RecordId, Role};
use crate::state::admin::AdminState;
use crate::state::entity::{EntityKind, cell_text};

/// Cell text with role ids shown by name.
fn display_cell(record: &Value, key: &str) -> String {
    match (key, record.get(key).and_then(Value::as_i64)) {
        ("role_id", Some(id)) => Role::from_id(id).label(),
        _ => cell_text(record, key),
    }
}

#[component]
pub fn EntityTable(on_edit: Callback<RecordId>, on_delete: Callback<RecordId>) -> impl IntoView {
    let admin = expect_context::<RwSignal<AdminState>>();
    let kind = Memo::new(move |_| admin.with(|s| s.kind));

    let body = move || {
        let (kind, records, loading) = admin.with(|s| (s.kind, s.records.clone(), s.loading));
        if records.is_empty() {
            let span = (kind.columns().len() + 1).to_string();
            let text = if loading { "Loading..." } else { "No records found." };
            return view! {
                <tr>
                    <td class="entity-table__empty" colspan=span>{text}</td>
                </tr>
            }
            .into_any();
        }
        records
            .iter()
            .map(|record| row_view(kind, record, on_edit, on_delete))
            .collect::<Vec<_>>()
            .into_any()
    };

    view! {
        <table class="entity-table" class:entity-table--loading=move || admin.with(|s| s.loading)>
            <thead>
                <tr>
                    {move || {
                        kind.get()
                            .columns()
                            .iter()
                            .map(|c| view! { <th>{c.header}</th> })
                            .collect::<Vec<_>>()
                    }}
                    <th class="entity-table__actions">"Actions"</th>
                </tr>
            </thead>
            <tbody>{body}</tbody>
        </table>
    }
}

fn row_view(kind: EntityKind, record: &Value, on_edit: Callback<RecordId>, on_delete: Callback<RecordId>) -> impl IntoView {
    let id = kind.record_id(record);
    let missing_id = id.is_none();
    let edit_id = id.clone();
    let cells = kind
        .columns()
        .iter()
        .map(|c| view! { <td>{display_cell(record, c.key)}</td> })
        .collect::<Vec<_>>();

    view! {
        <tr>
            {cells}
            <td class="entity-table__actions">
                <button
                    class="btn"
                    disabled=missing_id
                    on:click=move |_| {
                        if let Some(id) = edit_id.clone() {
                            on_edit.run(id);
                        }
                    }
                >
                    "Edit"
                </button>
                <button
                    class="btn btn--danger"
                    disabled=missing_id
                    on:click=move |_| {
                        if let Some(id) = id.clone() {
                            on_delete.run(id);
                        }
                    }
                >
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
