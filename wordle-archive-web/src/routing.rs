//! The active day serialized in the address bar as a bare `?N` query.
use once_cell::sync::Lazy;
use regex::Regex;
use wordle_archive_game::Day;
use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Play,
    #[at("/404")]
    #[not_found]
    NotFound,
}

static DAY_QUERY: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"^\?\s*(\d+)\s*$").ok());

/// Day requested by `search`, or `today` when absent or not a number.
///
/// Numbers too large for a `Day` saturate; the controller clamps them.
#[must_use]
pub fn parse_day_query(search: &str, today: Day) -> Day {
    DAY_QUERY
        .as_ref()
        .and_then(|re| re.captures(search))
        .and_then(|caps| caps.get(1))
        .map_or(today, |digits| digits.as_str().parse().unwrap_or(Day::MAX))
}

/// `?N` for `day`.
#[must_use]
pub fn day_query(day: Day) -> String {
    format!("?{day}")
}

/// Reflect `day` in the address bar without reloading.
pub fn push_day(day: Day) {
    if cfg!(target_arch = "wasm32") {
        crate::dom::push_query(&day_query(day));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_query_overrides_today() {
        assert_eq!(parse_day_query("?42", 300), 42);
        assert_eq!(parse_day_query("?0", 300), 0);
    }

    #[test]
    fn absent_or_garbage_falls_back() {
        assert_eq!(parse_day_query("", 300), 300);
        assert_eq!(parse_day_query("?", 300), 300);
        assert_eq!(parse_day_query("?abc", 300), 300);
        assert_eq!(parse_day_query("?12x", 300), 300);
    }

    #[test]
    fn oversized_numbers_saturate() {
        assert_eq!(parse_day_query("?99999999999999", 300), Day::MAX);
        assert_eq!(parse_day_query("?4294967295", 300), Day::MAX);
    }

    #[test]
    fn query_formats_bare_integer() {
        assert_eq!(day_query(7), "?7");
        assert_eq!(parse_day_query(&day_query(7), 1), 7);
    }
}
