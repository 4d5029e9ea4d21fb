//! Local title filtering for the variant without server-side search.
//!
//! [`filter_stories`] derives the displayed subset of a result set from the
//! current search term. It is a pure function: the input slice is borrowed,
//! never mutated, and the output keeps the input order.

use crate::domain::Story;

/// Returns the stories whose title contains `term`, ignoring case.
///
/// A term that is empty after trimming matches every story.
///
/// # Example
///
/// ```
/// use hnsearch::app::filter::filter_stories;
/// use hnsearch::domain::Story;
///
/// let items = vec![Story::new("1", "Rust 2024"), Story::new("2", "Go generics")];
/// let shown = filter_stories(&items, "rUsT");
/// assert_eq!(shown.len(), 1);
/// assert_eq!(shown[0].id.as_str(), "1");
/// ```
#[must_use]
pub fn filter_stories<'a>(items: &'a [Story], term: &str) -> Vec<&'a Story> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return items.iter().collect();
    }

    items
        .iter()
        .filter(|story| story.title.to_lowercase().contains(&needle))
        .collect()
}

/// Character range `(start, end)` of the first case-insensitive occurrence of
/// `term` in `text`, for highlighting.
///
/// Returns `None` when there is no match, when the term is blank, or when
/// lowercasing changes the character count of `text` (the indices would no
/// longer line up).
#[must_use]
pub fn match_range(text: &str, term: &str) -> Option<(usize, usize)> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    let haystack = text.to_lowercase();
    if haystack.chars().count() != text.chars().count() {
        return None;
    }

    let byte_start = haystack.find(&needle)?;
    let start = haystack[..byte_start].chars().count();
    Some((start, start + needle.chars().count()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<Story> {
        vec![
            Story::new("1", "React hooks in depth"),
            Story::new("2", "Why I left Redux"),
            Story::new("3", "Preact vs React"),
            Story::new("4", "Rust for web developers"),
        ]
    }

    fn ids(shown: &[&Story]) -> Vec<String> {
        shown.iter().map(|s| s.id.to_string()).collect()
    }

    #[test]
    fn empty_term_is_identity() {
        let items = items();
        let shown = filter_stories(&items, "");
        let expected: Vec<&Story> = items.iter().collect();
        assert_eq!(shown, expected);

        assert_eq!(filter_stories(&items, "   ").len(), items.len());
    }

    #[test]
    fn matching_ignores_case_and_keeps_order() {
        let items = items();
        assert_eq!(ids(&filter_stories(&items, "REACT")), ["1", "3"]);
        assert_eq!(ids(&filter_stories(&items, "react")), ["1", "3"]);
    }

    #[test]
    fn no_match_yields_empty() {
        let items = items();
        assert!(filter_stories(&items, "haskell").is_empty());
    }

    #[test]
    fn input_is_left_untouched() {
        let items = items();
        let snapshot = items.clone();
        let _ = filter_stories(&items, "rust");
        assert_eq!(items, snapshot);
    }

    #[test]
    fn match_range_uses_char_indices() {
        assert_eq!(match_range("Preact vs React", "react"), Some((1, 6)));
        assert_eq!(match_range("Café React", "react"), Some((5, 10)));
        assert_eq!(match_range("Go generics", "rust"), None);
        assert_eq!(match_range("anything", " "), None);
    }
}
