//! Joke widget state.
//!
//! The page polls a public joke endpoint; this module only folds each fetch
//! result into what the page shows.

#[cfg(test)]
#[path = "jokes_test.rs"]
mod jokes_test;

/// Public endpoint polled by the joke page.
pub const JOKE_ENDPOINT: &str = "https://api.chucknorris.io/jokes/random?category=dev";

/// Refresh period for the joke page, in milliseconds.
pub const REFRESH_INTERVAL_MS: u32 = 15_000;

/// Text shown in place of a joke when a fetch fails.
pub const FETCH_FAILED_TEXT: &str = "Failed to fetch joke";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JokeState {
    pub text: String,
    /// Local time of the last successful fetch.
    pub updated_at: Option<String>,
    pub fetches: u32,
}

impl JokeState {
    /// Record one fetch outcome. Failures keep the previous timestamp.
    pub fn apply(&mut self, result: Result<String, String>, now: String) {
        self.fetches += 1;
        match result {
            Ok(text) => {
                self.text = text;
                self.updated_at = Some(now);
            }
            Err(_) => {
                self.text = FETCH_FAILED_TEXT.to_owned();
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        self.fetches == 0
    }
}
