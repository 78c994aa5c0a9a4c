//! Sorted roster table with per-row edit and delete actions.
//!
//! Rows are keyed by record id and content, so typing in the form or
//! changing the sort order reuses existing rows instead of rebuilding them.

use leptos::prelude::*;

use crate::state::roster::{ProjectedEntry, RosterState};
use crate::util::storage::BrowserStore;

#[component]
pub fn UserTable(roster: RwSignal<RosterState>) -> impl IntoView {
    let rows = move || roster.with(RosterState::projection);

    view! {
        <table class="user-table">
            <thead>
                <tr>
                    <th>"Vardas"</th>
                    <th>"Pareigos"</th>
                    <th>"Lytis"</th>
                    <th>"Amžius"</th>
                    <th>"Veiksmai"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=rows
                    key=ProjectedEntry::render_key
                    children=move |row| view! { <UserRow roster=roster row=row/> }
                />
            </tbody>
        </table>
        <Show when=move || roster.with(|s| s.is_loaded() && s.is_empty())>
            <p class="user-table__empty">"Sąrašas tuščias."</p>
        </Show>
    }
}

#[component]
fn UserRow(roster: RwSignal<RosterState>, row: ProjectedEntry) -> impl IntoView {
    let id = row.id;
    let is_editing = move || roster.with(|s| s.editing_id() == Some(id));

    let on_edit = move |_| {
        roster.update(|s| {
            s.error = s.begin_edit(id).err().map(|e| e.to_string());
        });
    };
    let on_delete = move |_| {
        roster.update(|s| {
            s.error = s.delete(id, &BrowserStore::default()).err().map(|e| e.to_string());
        });
    };

    view! {
        <tr class:user-table__row--editing=is_editing>
            <td>{row.user.name}</td>
            <td>{row.user.role}</td>
            <td>{row.user.gender.label()}</td>
            <td>{row.user.age}</td>
            <td>
                <button class="edit-btn" on:click=on_edit disabled=is_editing>
                    "Redaguoti"
                </button>
                <button class="delete-btn" on:click=on_delete>
                    "Šalinti"
                </button>
            </td>
        </tr>
    }
}
