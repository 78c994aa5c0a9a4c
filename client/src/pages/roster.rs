//! Roster page: create/edit form, sort selector, and user table.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the `/` route. The roster is read from `localStorage` once the page
//! is mounted in the browser; SSR renders the empty shell so hydration never
//! depends on browser-only state.

use leptos::logging::log;
use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::components::sort_bar::SortBar;
use crate::components::user_form::UserForm;
use crate::components::user_table::UserTable;
use crate::state::roster::RosterState;
use crate::util::storage::BrowserStore;

#[component]
pub fn RosterPage() -> impl IntoView {
    let roster = RwSignal::new(RosterState::default());

    // Effects only run in the browser, after hydration.
    Effect::new(move || {
        if roster.with_untracked(RosterState::is_loaded) {
            return;
        }
        roster.update(|s| {
            let source = s.initialize(&BrowserStore::default());
            log!("roster loaded: {source:?}, {} records", s.len());
        });
    });

    view! {
        <div class="users-container">
            <Navbar/>
            <h1 class="users-title">"Vartotojų sąrašas"</h1>
            <UserForm roster=roster/>
            <SortBar roster=roster/>
            <UserTable roster=roster/>
        </div>
    }
}
