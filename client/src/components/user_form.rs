//! Create/edit form bound to the roster draft.
//!
//! The same form serves both modes: with no edit target it appends a new
//! record, otherwise it replaces the record loaded by the table's edit button.

use leptos::prelude::*;

use crate::state::roster::{Gender, RosterState, age_input_value, parse_age};
use crate::util::storage::BrowserStore;

#[component]
pub fn UserForm(roster: RwSignal<RosterState>) -> impl IntoView {
    let editing = move || roster.with(RosterState::is_editing);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        roster.update(|s| {
            s.error = s.submit(&BrowserStore::default()).err().map(|e| e.to_string());
        });
    };

    view! {
        <form class="user-form" class:user-form--editing=editing on:submit=on_submit>
            <input
                type="text"
                id="name"
                placeholder="Vardas"
                required
                prop:value=move || roster.with(|s| s.draft.name.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    roster.update(|s| s.draft.name = value);
                }
            />
            <input
                type="text"
                id="role"
                placeholder="Pareigos"
                required
                prop:value=move || roster.with(|s| s.draft.role.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    roster.update(|s| s.draft.role = value);
                }
            />
            <select
                id="gender"
                prop:value=move || roster.with(|s| s.draft.gender.label())
                on:change=move |ev| {
                    let gender = Gender::from_label(&event_target_value(&ev)).unwrap_or_default();
                    roster.update(|s| s.draft.gender = gender);
                }
            >
                {Gender::ALL
                    .into_iter()
                    .map(|g| view! { <option value=g.label()>{g.label()}</option> })
                    .collect_view()}
            </select>
            <input
                type="number"
                id="age"
                placeholder="Amžius"
                min="0"
                required
                prop:value=move || roster.with(|s| age_input_value(s.draft.age))
                on:input=move |ev| {
                    let age = parse_age(&event_target_value(&ev));
                    roster.update(|s| s.draft.age = age);
                }
            />
            <button type="submit">{move || if editing() { "Išsaugoti" } else { "Pridėti" }}</button>
            <Show when=editing>
                <button
                    class="btn user-form__cancel"
                    type="button"
                    on:click=move |_| roster.update(RosterState::cancel_edit)
                >
                    "Atšaukti"
                </button>
            </Show>
        </form>
        <Show when=move || roster.with(|s| s.error.is_some())>
            <p class="user-form__error">{move || roster.with(|s| s.error.clone().unwrap_or_default())}</p>
        </Show>
    }
}
