//! # Search
//!
//! Case-insensitive substring search over a deck. Pure functions only: the
//! search view owns the query and calls [`filter`] on every keystroke.

use crate::core::card::Flashcard;

/// Return the cards whose haystack contains `query`, ignoring case.
///
/// Output order matches deck order. An empty query matches every card.
pub fn filter<'a>(query: &str, cards: &'a [Flashcard]) -> Vec<&'a Flashcard> {
    let needle = query.to_lowercase();
    cards
        .iter()
        .filter(|card| card.haystack().to_lowercase().contains(&needle))
        .collect()
}

/// The "N results" line under the search box.
///
/// Hidden when the query is blank and when nothing matched.
pub fn result_count_line(query: &str, result_count: usize) -> Option<String> {
    if query.trim().is_empty() || result_count == 0 {
        return None;
    }
    Some(match result_count {
        1 => "1 result".to_string(),
        n => format!("{n} results"),
    })
}
