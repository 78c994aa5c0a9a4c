//! Persistent two-link navigation shown on every page.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <A href="/">"Vartotojai"</A>
            <A href="/jokes">"Juokeliai"</A>
        </nav>
    }
}
