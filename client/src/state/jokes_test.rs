use super::*;

#[test]
fn joke_state_default_is_loading_and_empty() {
    let state = JokeState::default();
    assert!(state.is_loading());
    assert!(state.text.is_empty());
    assert!(state.updated_at.is_none());
}

#[test]
fn successful_fetch_shows_joke_and_timestamp() {
    let mut state = JokeState::default();
    state.apply(Ok("Chuck Norris compiles HTML.".to_owned()), "12:00:00".to_owned());

    assert!(!state.is_loading());
    assert_eq!(state.text, "Chuck Norris compiles HTML.");
    assert_eq!(state.updated_at.as_deref(), Some("12:00:00"));
}

#[test]
fn failed_fetch_shows_fallback_and_keeps_last_timestamp() {
    let mut state = JokeState::default();
    state.apply(Ok("first".to_owned()), "12:00:00".to_owned());
    state.apply(Err("network down".to_owned()), "12:00:15".to_owned());

    assert_eq!(state.text, FETCH_FAILED_TEXT);
    assert_eq!(state.updated_at.as_deref(), Some("12:00:00"));
    assert_eq!(state.fetches, 2);
}

#[test]
fn later_success_recovers_from_failure() {
    let mut state = JokeState::default();
    state.apply(Err("timeout".to_owned()), "12:00:00".to_owned());
    state.apply(Ok("second".to_owned()), "12:00:15".to_owned());

    assert_eq!(state.text, "second");
    assert_eq!(state.updated_at.as_deref(), Some("12:00:15"));
}

#[test]
fn refresh_interval_is_fifteen_seconds() {
    assert_eq!(REFRESH_INTERVAL_MS, 15_000);
}

#[test]
fn endpoint_targets_dev_category() {
    assert!(JOKE_ENDPOINT.ends_with("category=dev"));
}
