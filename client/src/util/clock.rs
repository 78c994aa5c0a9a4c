//! Wall-clock formatting for "last updated" labels.

/// Locale used for time labels.
#[cfg(feature = "hydrate")]
const TIME_LOCALE: &str = "lt-LT";

/// Current local time as `HH:MM:SS` in the browser's time zone.
///
/// Returns an empty string outside the browser.
pub fn local_time_string() -> String {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        String::from(now.to_locale_time_string(TIME_LOCALE))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

#[cfg(all(test, not(feature = "hydrate")))]
mod tests {
    use super::*;

    #[test]
    fn local_time_string_is_empty_in_non_hydrate_tests() {
        assert!(local_time_string().is_empty());
    }
}
