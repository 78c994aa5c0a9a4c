//! Sort selector and roster reset control.

use leptos::prelude::*;

use crate::state::roster::{RosterState, SortKey};
use crate::util::storage::BrowserStore;

#[component]
pub fn SortBar(roster: RwSignal<RosterState>) -> impl IntoView {
    let on_reset = move |_| {
        roster.update(|s| {
            s.error = s.reset(&BrowserStore::default()).err().map(|e| e.to_string());
        });
    };

    view! {
        <div class="sort-container">
            <label for="sort">"Rūšiuoti pagal:"</label>
            <select
                id="sort"
                prop:value=move || roster.with(|s| s.sort_key.as_str())
                on:change=move |ev| {
                    if let Some(key) = SortKey::parse(&event_target_value(&ev)) {
                        roster.update(|s| s.sort_key = key);
                    }
                }
            >
                {SortKey::ALL
                    .into_iter()
                    .map(|key| view! { <option value=key.as_str()>{key.label()}</option> })
                    .collect_view()}
            </select>
            <button class="btn sort-container__reset" type="button" on:click=on_reset title="Atkurti pradinį sąrašą">
                "Atstatyti"
            </button>
        </div>
    }
}
