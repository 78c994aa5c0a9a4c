//! Joke page: polls a public endpoint and shows the latest joke.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the `/jokes` route. One fetch runs on mount and another every
//! `REFRESH_INTERVAL_MS` while the page is mounted. The interval handle is
//! cancelled in `on_cleanup`, so no fetch is scheduled after navigation away.
//! A fetch already in flight at teardown writes through `try_update`, which
//! is a no-op once the signal is disposed.

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::state::jokes::JokeState;

#[component]
pub fn JokesPage() -> impl IntoView {
    let jokes = RwSignal::new(JokeState::default());

    #[cfg(feature = "hydrate")]
    {
        use crate::state::jokes::REFRESH_INTERVAL_MS;
        use gloo_timers::callback::Interval;

        refresh_joke(jokes);
        let tick = StoredValue::new_local(Some(Interval::new(REFRESH_INTERVAL_MS, move || {
            refresh_joke(jokes);
        })));
        on_cleanup(move || {
            let _ = tick.try_update_value(|slot| {
                if let Some(interval) = slot.take() {
                    interval.cancel();
                }
            });
        });
    }

    view! {
        <div class="jokes-container">
            <Navbar/>
            <h1 class="jokes-title">"Juokelis"</h1>
            <p class="joke-content">
                {move || jokes.with(|j| if j.is_loading() { "Kraunama...".to_owned() } else { j.text.clone() })}
            </p>
            <p class="timestamp">
                "Paskutinį kartą atnaujinta: "
                <span class="timestamp-value">{move || jokes.with(|j| j.updated_at.clone().unwrap_or_default())}</span>
            </p>
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn refresh_joke(jokes: RwSignal<JokeState>) {
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_joke().await.map(|joke| joke.value);
        if let Err(e) = &result {
            leptos::logging::warn!("error fetching joke: {e}");
        }
        let now = crate::util::clock::local_time_string();
        let _ = jokes.try_update(|state| state.apply(result, now));
    });
}
