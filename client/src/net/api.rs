//! Outbound HTTP helpers.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since the joke endpoint is only
//! polled from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` instead of panics so the polling loop can
//! show the fallback text and keep going.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::Joke;

#[cfg(any(test, feature = "hydrate"))]
fn joke_request_failed_message(status: u16) -> String {
    format!("joke request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn empty_joke_message() -> String {
    "joke response had no text".to_owned()
}

/// Fetch one random joke from `JOKE_ENDPOINT`.
///
/// # Errors
///
/// Returns an error string if the request fails, the server responds with a
/// non-OK status, or the body has no usable joke text.
pub async fn fetch_joke() -> Result<Joke, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(crate::state::jokes::JOKE_ENDPOINT)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(joke_request_failed_message(resp.status()));
        }
        let joke: Joke = resp.json().await.map_err(|e| e.to_string())?;
        if joke.value.trim().is_empty() {
            return Err(empty_joke_message());
        }
        Ok(joke)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}
